use std::io;

use anyhow::Result;
use chrono::NaiveDate;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use assistant_bot::cli::Assistant;
use assistant_bot::config::{BirthdayWindow, Settings};

#[derive(Parser)]
#[command(
    name = "assistant",
    author = "Kaylee Beyene",
    version,
    about = "Interactive command-line contact book",
    long_about = "The assistant bot keeps names, phone numbers and birthdays for \
                  the current session and answers lookups, listings and \
                  upcoming-birthday queries. Type 'close' or 'exit' to leave."
)]
struct Cli {
    /// How far ahead the 'birthdays' command looks
    #[arg(long, value_enum, env = "ASSISTANT_BIRTHDAY_WINDOW", default_value_t = BirthdayWindow::Unbounded)]
    window: BirthdayWindow,

    /// Use this date (YYYY-MM-DD) as today for the 'birthdays' command
    #[arg(long, env = "ASSISTANT_TODAY")]
    today: Option<NaiveDate>,

    /// Text printed once when the session starts
    #[arg(long, env = "ASSISTANT_GREETING")]
    greeting: Option<String>,

    /// Text printed before every line of input
    #[arg(long, env = "ASSISTANT_PROMPT")]
    prompt: Option<String>,

    /// Log filter directive for stderr output (e.g. "debug")
    #[arg(long, env = "ASSISTANT_LOG", default_value = "warn")]
    log_level: String,

    /// Print the effective settings as JSON and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logging goes to stderr so the conversation on stdout stays clean
    let filter = EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let settings = Settings::default()
        .with_greeting(cli.greeting)
        .with_prompt(cli.prompt)
        .with_birthday_window(cli.window)
        .with_today(cli.today);
    debug!(?settings, "Settings loaded");

    if cli.print_config {
        println!("{}", settings.to_pretty_json()?);
        return Ok(());
    }

    let mut assistant = Assistant::new(settings);
    assistant.run(io::stdin().lock(), io::stdout().lock())?;

    Ok(())
}
