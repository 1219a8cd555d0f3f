//! lexis CLI
#![deny(unsafe_code)]

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Parser;
use lexis::{Cli, Commands, commands};
use lexis_core::config::{Config, ConfigLoader, ConfigSources};
use tracing::debug;

mod observability;

fn utf8(path: std::path::PathBuf, what: &str) -> anyhow::Result<Utf8PathBuf> {
    Utf8PathBuf::try_from(path)
        .map_err(|e| anyhow::anyhow!("{what} is not valid UTF-8: {}", e.into_path_buf().display()))
}

/// Change directory if asked, then load config relative to the result.
fn load_config(cli: &Cli) -> anyhow::Result<(Config, ConfigSources)> {
    if let Some(ref dir) = cli.chdir {
        std::env::set_current_dir(dir)
            .with_context(|| format!("failed to change directory to {}", dir.display()))?;
    }
    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    let mut loader = ConfigLoader::new().with_project_search(utf8(cwd, "current directory")?);
    if let Some(ref path) = cli.config {
        loader = loader.with_file(utf8(path.clone(), "config path")?);
    }
    loader.load().context("failed to load configuration")
}

/// The effective input size limit, or `None` when disabled.
fn max_input(config: &Config) -> Option<usize> {
    if config.disable_input_limit {
        None
    } else {
        Some(
            config
                .max_input_bytes
                .unwrap_or(lexis_core::DEFAULT_MAX_INPUT_BYTES),
        )
    }
}

fn main() -> anyhow::Result<()> {
    let mut cli = Cli::parse();
    cli.color.apply();

    if cli.version_only {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // arg_required_else_help guarantees a subcommand here
    let Some(command) = cli.command.take() else {
        return Ok(());
    };

    let (config, sources) = load_config(&cli)?;

    let obs_config = observability::ObservabilityConfig::from_env_with_overrides(
        config.log_dir.clone().map(Utf8PathBuf::into_std_path_buf),
    );
    let filter = observability::env_filter(cli.quiet, cli.verbose, config.log_level.as_str());
    let _guard = observability::init_observability(&obs_config, filter)
        .context("failed to initialize logging/tracing")?;

    let limit = max_input(&config);
    let options = config.analysis_options();
    debug!(
        verbose = cli.verbose,
        json = cli.json,
        ?options,
        max_input = ?limit,
        config_file = ?sources.primary_file(),
        "CLI initialized"
    );

    let engine = commands::build_engine(&config)?;
    let json = cli.json;

    let result = match command {
        Commands::Analyze(args) => {
            commands::analyze::cmd_analyze(args, json, &engine, options, limit)
        }
        Commands::Batch(args) => commands::batch::cmd_batch(args, json, &engine, options, limit),
        Commands::Compare(args) => commands::compare::cmd_compare(args, json, &engine, limit),
        Commands::Record(args) => {
            commands::record::cmd_record(args, json, &engine, options, limit)
        }
        Commands::Features(args) => commands::features::cmd_features(args, json, &engine),
        Commands::Status(args) => commands::status::cmd_status(args, json, &engine),
        Commands::Info(args) => {
            commands::info::cmd_info(args, json, &config, &sources, &engine, limit)
        }
        #[cfg(feature = "mcp")]
        Commands::Serve(args) => tokio::runtime::Runtime::new()
            .context("failed to create async runtime for MCP server")?
            .block_on(commands::serve::cmd_serve(args, limit, engine, options)),
    };
    if let Err(ref err) = result {
        tracing::error!(error = %err, "fatal error");
    }
    result
}
