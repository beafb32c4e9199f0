use anyhow::Result;

use rundle_autofill::cli::Command;
use rundle_autofill::{handle_fill, handle_reconcile, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Fill { url, cookie, json } => handle_fill(url, cookie.as_deref(), *json),
        Command::Reconcile {
            profile,
            standings,
            json,
        } => handle_reconcile(profile, standings, *json),
    }
}
