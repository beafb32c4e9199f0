pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod fetchers;
pub mod matching;
pub mod metrics;
pub mod parsers;
pub mod reconciler;
pub mod render;
pub mod services;

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;

use crate::cli::Command;
use crate::config::settings::AppConfig;
use crate::domain::FillReport;
use crate::services::autofill::{self, AutofillService};

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_fill(url: &str, cookie: Option<&str>, json: bool) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new();
        let service = AutofillService::new(config, cookie)?;
        let report = service.run(url).await?;
        emit_report(&report, json)
    })
}

pub fn handle_reconcile(profile: &Path, standings: &Path, json: bool) -> Result<()> {
    let config = AppConfig::new();
    let profile_html = read_document(profile)?;
    let standings_html = read_document(standings)?;
    let report = autofill::reconcile_documents(&config, &profile_html, &standings_html)?;
    emit_report(&report, json)
}

fn read_document(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read document: {}", path.display()))
}

fn emit_report(report: &FillReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&report.instructions)?);
    } else {
        print!("{}", render::render_report(report));
    }
    Ok(())
}
