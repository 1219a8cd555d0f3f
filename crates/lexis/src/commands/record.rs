//! Record command: analyze a stored record or print one of its fields.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use lexis_core::record::Record;
use lexis_core::{AnalysisOptions, Engine};

use super::analyze::print_report;

/// Arguments for the `record` subcommand.
#[derive(Args, Debug)]
pub struct RecordArgs {
    /// JSON file holding one record.
    pub file: Utf8PathBuf,

    /// Print the field at this dotted path (e.g. `metadata.owner.team`)
    /// instead of analyzing the record.
    #[arg(long, value_name = "PATH")]
    pub get: Option<String>,
}

/// Load a record file, then either look up a field or analyze the record's
/// JSON text.
#[instrument(name = "cmd_record", skip_all, fields(file = %args.file))]
pub fn cmd_record(
    args: RecordArgs,
    global_json: bool,
    engine: &Engine,
    options: AnalysisOptions,
    max_input: Option<usize>,
) -> anyhow::Result<()> {
    debug!(get = ?args.get, "executing record command");

    let content = super::read_input_file(&args.file, max_input)?;
    let record: Record = serde_json::from_str(&content)
        .with_context(|| format!("{} is not a valid record", args.file))?;

    if let Some(ref path) = args.get {
        let value = record
            .lookup(path)
            .with_context(|| format!("record {} has no field {path}", record.id))?;
        if global_json {
            println!("{}", serde_json::to_string_pretty(&value)?);
        } else {
            println!("{value}");
        }
        return Ok(());
    }

    let text = record
        .to_analysis_text()
        .context("failed to serialize record")?;
    let report = engine
        .analyze(&text, &options)
        .with_context(|| format!("failed to analyze record {}", record.id))?;

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{} {}", record.name.bold(), format!("({})", record.id).dimmed());
    print_report(&report, &options);
    Ok(())
}
