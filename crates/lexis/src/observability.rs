//! Logging setup for the CLI.
//!
//! Human-readable events go to stderr (stdout carries command output and the
//! MCP protocol). When a log file or directory is configured, a second,
//! uncolored layer writes through a non-blocking appender.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// File name used when only a log directory is configured.
const DEFAULT_LOG_FILE: &str = "lexis.log";

/// Where file logs should go, if anywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// Explicit log file (`LEXIS_LOG_PATH`).
    pub log_path: Option<PathBuf>,
    /// Log directory (config `log_dir`, which `LEXIS_LOG_DIR` also feeds).
    pub log_dir: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Read `LEXIS_LOG_PATH` and `LEXIS_LOG_DIR`, letting `log_dir` from the
    /// loaded configuration take precedence over the raw variable.
    pub fn from_env_with_overrides(log_dir: Option<PathBuf>) -> Self {
        let from_env = |key: &str| {
            std::env::var_os(key)
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
        };
        Self {
            log_path: from_env("LEXIS_LOG_PATH"),
            log_dir: log_dir.or_else(|| from_env("LEXIS_LOG_DIR")),
        }
    }

    /// Directory and file name for file logging. An explicit path wins.
    pub fn log_file(&self) -> Option<(PathBuf, String)> {
        if let Some(ref path) = self.log_path {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map_or_else(|| PathBuf::from("."), Path::to_path_buf);
            let name = path.file_name().map_or_else(
                || DEFAULT_LOG_FILE.to_string(),
                |n| n.to_string_lossy().into_owned(),
            );
            return Some((dir, name));
        }
        self.log_dir
            .as_ref()
            .map(|dir| (dir.clone(), DEFAULT_LOG_FILE.to_string()))
    }
}

/// Build the event filter.
///
/// `RUST_LOG` wins when set. Otherwise `-q` selects `error`, `-v` selects
/// `debug`, `-vv` and beyond select `trace`, and the configured level applies
/// when neither flag is given.
pub fn env_filter(quiet: bool, verbose: u8, config_level: &str) -> EnvFilter {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => config_level,
            1 => "debug",
            _ => "trace",
        }
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Install the global subscriber.
///
/// Keep the returned guard alive for the life of the process so buffered
/// file logs are flushed on exit.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let (file_layer, guard) = match config.log_file() {
        Some((dir, name)) => {
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("failed to create log directory {}", dir.display()))?;
            let appender = tracing_appender::rolling::never(&dir, &name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_ansi(false).with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_file_logging_by_default() {
        assert!(ObservabilityConfig::default().log_file().is_none());
    }

    #[test]
    fn log_dir_uses_default_file_name() {
        let config = ObservabilityConfig {
            log_path: None,
            log_dir: Some(PathBuf::from("/var/log/lexis")),
        };
        assert_eq!(
            config.log_file(),
            Some((PathBuf::from("/var/log/lexis"), "lexis.log".to_string()))
        );
    }

    #[test]
    fn explicit_path_wins_over_dir() {
        let config = ObservabilityConfig {
            log_path: Some(PathBuf::from("/tmp/custom/run.log")),
            log_dir: Some(PathBuf::from("/var/log/lexis")),
        };
        assert_eq!(
            config.log_file(),
            Some((PathBuf::from("/tmp/custom"), "run.log".to_string()))
        );
    }

    #[test]
    fn bare_file_name_logs_to_current_dir() {
        let config = ObservabilityConfig {
            log_path: Some(PathBuf::from("lexis-debug.log")),
            log_dir: None,
        };
        assert_eq!(
            config.log_file(),
            Some((PathBuf::from("."), "lexis-debug.log".to_string()))
        );
    }

    #[test]
    fn config_dir_overrides_env() {
        let config =
            ObservabilityConfig::from_env_with_overrides(Some(PathBuf::from("/from/config")));
        assert_eq!(config.log_dir, Some(PathBuf::from("/from/config")));
    }
}
