//! Compare command: hybrid similarity of two texts.

use anyhow::Context;
use camino::Utf8Path;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use lexis_core::Engine;

/// Arguments for the `compare` subcommand.
#[derive(Args, Debug)]
pub struct CompareArgs {
    /// First text (or file path with `--files`).
    pub first: String,

    /// Second text (or file path with `--files`).
    pub second: String,

    /// Treat both arguments as file paths.
    #[arg(long)]
    pub files: bool,
}

/// Compare two texts and print the similarity report.
#[instrument(name = "cmd_compare", skip_all, fields(files = args.files))]
pub fn cmd_compare(
    args: CompareArgs,
    global_json: bool,
    engine: &Engine,
    max_input: Option<usize>,
) -> anyhow::Result<()> {
    debug!("executing compare command");

    let (first, second) = if args.files {
        (
            super::read_input_file(Utf8Path::new(&args.first), max_input)?,
            super::read_input_file(Utf8Path::new(&args.second), max_input)?,
        )
    } else {
        super::check_inline_size(&args.first, max_input)?;
        super::check_inline_size(&args.second, max_input)?;
        (args.first, args.second)
    };

    let report = engine
        .compare_similarity(&first, &second)
        .context("failed to compare texts")?;

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "{} {:.4} ({})",
        "Similarity:".cyan(),
        report.similarity.bold(),
        report.method
    );
    println!(
        "  {} {:.4}",
        "Jaccard index:".dimmed(),
        report.details.jaccard_index
    );
    println!(
        "  {} {:.4}",
        "Jaro-Winkler:".dimmed(),
        report.details.cosine_distance
    );
    Ok(())
}
