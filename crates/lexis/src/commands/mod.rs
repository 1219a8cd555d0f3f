//! Command implementations.

use std::sync::Arc;

use anyhow::Context;
use camino::Utf8Path;
use lexis_core::config::Config;
use lexis_core::{Engine, Lexicons};

pub mod analyze;
pub mod batch;
pub mod compare;
pub mod features;
pub mod info;
pub mod record;
#[cfg(feature = "mcp")]
pub mod serve;
pub mod status;

/// Read a file and validate its size against the configured limit.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = metadata.len() as usize;
        if size > max {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    let content = std::fs::read_to_string(path.as_std_path())
        .with_context(|| format!("failed to read {path}"))?;
    Ok(content)
}

/// Reject inline text that exceeds the configured limit.
pub fn check_inline_size(text: &str, max_bytes: Option<usize>) -> anyhow::Result<()> {
    if let Some(max) = max_bytes
        && text.len() > max
    {
        anyhow::bail!(
            "input too large: {} bytes (limit: {max} bytes)",
            text.len()
        );
    }
    Ok(())
}

/// Build the engine, extending the built-in lexicons when configured.
pub fn build_engine(config: &Config) -> anyhow::Result<Engine> {
    match config.lexicon_extension() {
        Some(extension) => {
            let lexicons =
                Lexicons::extended(extension).context("failed to build configured lexicons")?;
            Ok(Engine::with_lexicons(Arc::new(lexicons)))
        }
        None => Ok(Engine::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexis_core::config::LexiconConfig;

    #[test]
    fn read_input_file_enforces_limit() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(tmp.path(), "0123456789").unwrap();
        let path = Utf8Path::from_path(tmp.path()).unwrap();

        assert_eq!(read_input_file(path, None).unwrap(), "0123456789");
        assert_eq!(read_input_file(path, Some(10)).unwrap(), "0123456789");
        let err = read_input_file(path, Some(5)).unwrap_err();
        assert!(err.to_string().contains("input too large"));
    }

    #[test]
    fn missing_file_has_context() {
        let err = read_input_file(Utf8Path::new("/definitely/not/here.txt"), None).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }

    #[test]
    fn inline_limit() {
        assert!(check_inline_size("abc", Some(3)).is_ok());
        assert!(check_inline_size("abcd", Some(3)).is_err());
        assert!(check_inline_size("abcd", None).is_ok());
    }

    #[test]
    fn engine_uses_configured_words() {
        let config = Config {
            lexicon: Some(LexiconConfig {
                positive: vec!["stellar".into()],
                ..LexiconConfig::default()
            }),
            ..Config::default()
        };
        let engine = build_engine(&config).unwrap();
        let report = engine
            .analyze("stellar work", &config.analysis_options())
            .unwrap();
        assert_eq!(report.sentiment.label.as_str(), "positive");
    }
}
