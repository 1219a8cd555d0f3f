//! Batch command: analyze many texts from one file.

use std::time::Duration;

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use lexis_core::{AnalysisOptions, Engine};

use super::analyze::print_report;

/// Arguments for the `batch` subcommand.
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Input file: a JSON array of strings (`.json`) or one text per line.
    pub file: Utf8PathBuf,

    /// Skip keyword extraction.
    #[arg(long)]
    pub no_keywords: bool,

    /// Skip entity extraction.
    #[arg(long)]
    pub no_entities: bool,

    /// Skip the readability score.
    #[arg(long)]
    pub no_readability: bool,

    /// Maximum number of keywords.
    #[arg(long, value_name = "N")]
    pub keyword_limit: Option<usize>,
}

impl BatchArgs {
    /// Apply the skip flags and keyword limit on top of configured defaults.
    pub fn options(&self, defaults: AnalysisOptions) -> AnalysisOptions {
        AnalysisOptions {
            extract_keywords: defaults.extract_keywords && !self.no_keywords,
            extract_entities: defaults.extract_entities && !self.no_entities,
            calculate_readability: defaults.calculate_readability && !self.no_readability,
            keyword_limit: self.keyword_limit.unwrap_or(defaults.keyword_limit),
        }
    }
}

/// Split batch input into texts.
///
/// `.json` files must hold an array of strings, kept as-is so blank entries
/// fail the batch. Other files yield one text per non-blank line.
pub fn parse_batch_input(path: &Utf8Path, content: &str) -> anyhow::Result<Vec<String>> {
    if path.extension() == Some("json") {
        serde_json::from_str(content)
            .with_context(|| format!("{path} must contain a JSON array of strings"))
    } else {
        Ok(content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(str::to_string)
            .collect())
    }
}

/// Analyze every text in a file, failing on the first invalid item.
#[instrument(name = "cmd_batch", skip_all, fields(file = %args.file))]
pub fn cmd_batch(
    args: BatchArgs,
    global_json: bool,
    engine: &Engine,
    defaults: AnalysisOptions,
    max_input: Option<usize>,
) -> anyhow::Result<()> {
    let options = args.options(defaults);

    let content = super::read_input_file(&args.file, max_input)?;
    let texts = parse_batch_input(&args.file, &content)?;
    debug!(items = texts.len(), "executing batch command");

    let spinner = ProgressBar::new_spinner();
    if global_json {
        spinner.set_draw_target(ProgressDrawTarget::hidden());
    }
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.dim} {msg}")
            .context("invalid progress template")?,
    );
    spinner.set_message(format!("analyzing {} texts", texts.len()));
    spinner.enable_steady_tick(Duration::from_millis(120));

    let result = engine.batch_analyze(&texts, &options);
    spinner.finish_and_clear();
    let reports = result.with_context(|| format!("batch analysis of {} failed", args.file))?;

    if global_json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    for (index, (text, report)) in texts.iter().zip(&reports).enumerate() {
        let preview: String = text.chars().take(60).collect();
        println!("{} {}", format!("[{index}]").bold(), preview.dimmed());
        print_report(report, &options);
    }
    println!("\n{} texts analyzed", reports.len().to_string().green());
    Ok(())
}
