//! `lexis info`: build metadata, effective settings and lexicon sizes.

use std::fmt::Display;

use clap::Args;
use lexis_core::config::{Config, ConfigSources};
use lexis_core::lexicon::LexiconSizes;
use lexis_core::{AnalysisOptions, Engine};
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

/// Arguments for the `info` subcommand (none beyond the global flags).
#[derive(Args, Debug, Default)]
pub struct InfoArgs {}

fn nonempty(value: &'static str) -> Option<&'static str> {
    (!value.is_empty()).then_some(value)
}

/// Everything `info` reports, in its JSON shape.
#[derive(Serialize)]
struct InfoReport {
    name: &'static str,
    version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    repository: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    license: Option<&'static str>,
    config: Settings,
}

/// The effective settings after all config layers are merged.
#[derive(Serialize)]
struct Settings {
    #[serde(skip_serializing_if = "Option::is_none")]
    config_file: Option<String>,
    log_level: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    log_dir: Option<String>,
    /// `None` when the limit is disabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    max_input_bytes: Option<usize>,
    analysis: AnalysisOptions,
    lexicons: LexiconSizes,
}

impl Settings {
    fn collect(
        config: &Config,
        sources: &ConfigSources,
        engine: &Engine,
        max_input: Option<usize>,
    ) -> Self {
        Self {
            config_file: sources.primary_file().map(ToString::to_string),
            log_level: config.log_level.as_str(),
            log_dir: config.log_dir.as_ref().map(ToString::to_string),
            max_input_bytes: max_input,
            analysis: config.analysis_options(),
            lexicons: engine.lexicons().sizes(),
        }
    }
}

fn heading(title: &str) {
    println!("\n{}", title.bold().underline());
}

fn row(label: &str, value: impl Display) {
    println!("{}: {value}", label.dimmed());
}

fn on_off(on: bool) -> String {
    if on {
        "on".green().to_string()
    } else {
        "off".dimmed().to_string()
    }
}

/// Print package metadata and the effective configuration.
#[instrument(name = "cmd_info", skip_all)]
pub fn cmd_info(
    _args: InfoArgs,
    global_json: bool,
    config: &Config,
    sources: &ConfigSources,
    engine: &Engine,
    max_input: Option<usize>,
) -> anyhow::Result<()> {
    debug!(json = global_json, "executing info command");

    let report = InfoReport {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        description: nonempty(env!("CARGO_PKG_DESCRIPTION")),
        repository: nonempty(env!("CARGO_PKG_REPOSITORY")),
        license: nonempty(env!("CARGO_PKG_LICENSE")),
        config: Settings::collect(config, sources, engine, max_input),
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{} {}", report.name.bold(), report.version.green());
    if let Some(description) = report.description {
        println!("{description}");
    }
    if let Some(license) = report.license {
        row("License", license);
    }
    if let Some(repository) = report.repository {
        row("Repository", repository.cyan());
    }

    let settings = &report.config;
    heading("Configuration");
    match &settings.config_file {
        Some(path) => row("Config file", path.cyan()),
        None => row("Config file", "none loaded".yellow()),
    }
    row("Log level", settings.log_level);
    if let Some(dir) = &settings.log_dir {
        row("Log directory", dir);
    }
    match settings.max_input_bytes {
        Some(max) => row("Input limit", format!("{max} bytes")),
        None => row("Input limit", "disabled".yellow()),
    }

    let analysis = &settings.analysis;
    heading("Analysis Defaults");
    row("Keywords", on_off(analysis.extract_keywords));
    row("Entities", on_off(analysis.extract_entities));
    row("Readability", on_off(analysis.calculate_readability));
    row("Keyword limit", analysis.keyword_limit);

    let sizes = &settings.lexicons;
    heading("Lexicons");
    row("Positive words", sizes.positive);
    row("Negative words", sizes.negative);
    row("Stop words", sizes.stop_words);
    row("Vocabulary", sizes.vocabulary);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(json: bool, max_input: Option<usize>) -> anyhow::Result<()> {
        cmd_info(
            InfoArgs::default(),
            json,
            &Config::default(),
            &ConfigSources::default(),
            &Engine::new(),
            max_input,
        )
    }

    #[test]
    fn text_and_json_output_succeed() {
        assert!(run(false, Some(1024)).is_ok());
        assert!(run(true, None).is_ok());
    }

    #[test]
    fn defaults_without_config_file() {
        let settings = Settings::collect(
            &Config::default(),
            &ConfigSources::default(),
            &Engine::new(),
            None,
        );
        assert!(settings.config_file.is_none());
        assert_eq!(settings.log_level, "info");
        assert_eq!(settings.analysis, AnalysisOptions::default());
        assert!(settings.lexicons.positive > 0);
    }

    #[test]
    fn disabled_limit_is_omitted_from_json() {
        let settings = Settings::collect(
            &Config::default(),
            &ConfigSources::default(),
            &Engine::new(),
            None,
        );
        let value = serde_json::to_value(&settings).unwrap();
        assert!(value.get("max_input_bytes").is_none());
        assert_eq!(value["analysis"]["keywordLimit"], 10);
    }
}
