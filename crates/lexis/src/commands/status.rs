//! Status command.

use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::instrument;

use lexis_core::{Engine, EngineStatus, lexicon};

/// Arguments for the `status` subcommand.
#[derive(Args, Debug, Default)]
pub struct StatusArgs {}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StatusReport {
    status: EngineStatus,
    builtin_lexicons: EngineStatus,
    version: &'static str,
}

/// Report engine readiness.
#[instrument(name = "cmd_status", skip_all)]
pub fn cmd_status(_args: StatusArgs, global_json: bool, engine: &Engine) -> anyhow::Result<()> {
    let report = StatusReport {
        status: engine.status(),
        builtin_lexicons: lexicon::status(),
        version: env!("CARGO_PKG_VERSION"),
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let status = match report.status {
        EngineStatus::Ready => report.status.as_str().green().to_string(),
        EngineStatus::Initializing => report.status.as_str().yellow().to_string(),
    };
    println!("{}: {status}", "Engine".dimmed());
    println!(
        "{}: {}",
        "Built-in lexicons".dimmed(),
        report.builtin_lexicons
    );
    println!("{}: {}", "Version".dimmed(), report.version);
    Ok(())
}
