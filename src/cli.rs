use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "rundle standings autofill for match-day results")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Fetch a profile page and fill its blank match-day results from the rundle standings
    Fill {
        /// Profile page URL (profiles.php?<id>)
        url: String,
        /// Cookie header sent with both requests (standings pages need a logged-in session)
        #[arg(short, long)]
        cookie: Option<String>,
        /// Print the fill instructions as JSON instead of the rendered rows
        #[arg(long)]
        json: bool,
    },
    /// Reconcile two saved HTML documents without touching the network
    Reconcile {
        /// Saved profile page
        #[arg(short, long)]
        profile: PathBuf,
        /// Saved rundle standings page
        #[arg(short, long)]
        standings: PathBuf,
        /// Print the fill instructions as JSON instead of the rendered rows
        #[arg(long)]
        json: bool,
    },
}
