//! Analyze command: full single-document analysis.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use lexis_core::analysis::{AnalysisReport, SentimentLabel};
use lexis_core::{AnalysisOptions, Engine};

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug, Default)]
pub struct AnalyzeArgs {
    /// File to analyze.
    #[arg(required_unless_present = "text", conflicts_with = "text")]
    pub file: Option<Utf8PathBuf>,

    /// Analyze this text instead of a file.
    #[arg(long)]
    pub text: Option<String>,

    /// Skip keyword extraction.
    #[arg(long)]
    pub no_keywords: bool,

    /// Skip entity extraction.
    #[arg(long)]
    pub no_entities: bool,

    /// Skip readability scoring.
    #[arg(long)]
    pub no_readability: bool,

    /// Maximum number of keywords.
    #[arg(long, value_name = "N")]
    pub keyword_limit: Option<usize>,
}

impl AnalyzeArgs {
    /// Apply command-line switches on top of configured defaults.
    pub fn options(&self, defaults: AnalysisOptions) -> AnalysisOptions {
        AnalysisOptions {
            extract_keywords: defaults.extract_keywords && !self.no_keywords,
            extract_entities: defaults.extract_entities && !self.no_entities,
            calculate_readability: defaults.calculate_readability && !self.no_readability,
            keyword_limit: self.keyword_limit.unwrap_or(defaults.keyword_limit),
        }
    }
}

/// Analyze a file or inline text.
#[instrument(name = "cmd_analyze", skip_all, fields(file = ?args.file))]
pub fn cmd_analyze(
    args: AnalyzeArgs,
    global_json: bool,
    engine: &Engine,
    defaults: AnalysisOptions,
    max_input: Option<usize>,
) -> anyhow::Result<()> {
    let options = args.options(defaults);
    debug!(?options, "executing analyze command");

    let (label, content) = match (&args.file, &args.text) {
        (Some(path), _) => (path.to_string(), super::read_input_file(path, max_input)?),
        (None, Some(text)) => {
            super::check_inline_size(text, max_input)?;
            ("<text>".to_string(), text.clone())
        }
        (None, None) => anyhow::bail!("provide a FILE or --text"),
    };

    let report = engine
        .analyze(&content, &options)
        .with_context(|| format!("failed to analyze {label}"))?;

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", label.bold());
    print_report(&report, &options);
    Ok(())
}

/// Print one report as indented, colored text.
pub(crate) fn print_report(report: &AnalysisReport, options: &AnalysisOptions) {
    let s = &report.sentiment;
    let label = match s.label {
        SentimentLabel::Positive => s.label.as_str().green().to_string(),
        SentimentLabel::Negative => s.label.as_str().red().to_string(),
        SentimentLabel::Neutral => s.label.as_str().dimmed().to_string(),
    };
    println!(
        "  {} {} (score {:.4}, confidence {:.4})",
        "Sentiment:".cyan(),
        label,
        s.score,
        s.confidence,
    );

    println!("  {} {}", "Language:".cyan(), report.language.as_str());

    let summary = &report.summary;
    println!(
        "  {} {} words, {} sentences, {:.2} words/sentence",
        "Summary:".cyan(),
        summary.word_count,
        summary.sentence_count,
        summary.average_words_per_sentence,
    );
    if options.calculate_readability {
        println!(
            "  {} {:.2}",
            "Readability:".cyan(),
            summary.readability_score
        );
    }

    if options.extract_keywords {
        if report.keywords.is_empty() {
            println!("  {} {}", "Keywords:".cyan(), "none".dimmed());
        } else {
            println!("  {} {}", "Keywords:".cyan(), report.keywords.join(", "));
        }
    }

    if options.extract_entities {
        if report.entities.is_empty() {
            println!("  {} {}", "Entities:".cyan(), "none".dimmed());
        } else {
            println!("  {}", "Entities:".cyan());
            for entity in &report.entities {
                println!(
                    "    {:<6} {} {}",
                    entity.kind.as_str().yellow(),
                    entity.value,
                    format!("({:.2})", entity.confidence).dimmed(),
                );
            }
        }
    }
}
