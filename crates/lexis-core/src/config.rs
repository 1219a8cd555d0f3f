//! Layered configuration.
//!
//! Settings are merged from, lowest precedence first:
//!
//! 1. built-in defaults
//! 2. the user file `config.<ext>` in the platform config directory
//!    (`~/.config/lexis/` on Linux)
//! 3. the nearest project directory holding `.lexis.<ext>` or `lexis.<ext>`,
//!    searched upward from the working directory and stopping at a `.git`
//!    boundary
//! 4. files passed explicitly (`--config`)
//! 5. `LEXIS_*` environment variables
//!
//! `<ext>` is `toml`, `yaml`, `yml` or `json`. Several files in one project
//! directory are all merged: dotfiles before plain names, and within each
//! group in that extension order.
//!
//! ```no_run
//! use camino::Utf8PathBuf;
//! use lexis_core::config::ConfigLoader;
//!
//! let cwd = Utf8PathBuf::try_from(std::env::current_dir()?)?;
//! let (config, sources) = ConfigLoader::new().with_project_search(&cwd).load()?;
//! println!("{:?} from {:?}", config.analysis_options(), sources.primary_file());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use camino::{Utf8Path, Utf8PathBuf};
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use serde::{Deserialize, Serialize};

use crate::analysis::AnalysisOptions;
use crate::error::{ConfigError, ConfigResult};

const APP_NAME: &str = "lexis";
const ENV_PREFIX: &str = "LEXIS_";
const EXTENSIONS: &[&str] = &["toml", "yaml", "yml", "json"];

/// Words that extend the built-in lexicon tables.
///
/// Entries are added to, never substituted for, the built-in lists. CJK
/// entries also join the segmentation dictionary.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct LexiconConfig {
    /// Additional positive sentiment words.
    pub positive: Vec<String>,
    /// Additional negative sentiment words.
    pub negative: Vec<String>,
    /// Additional stop words excluded from keywords.
    pub stop_words: Vec<String>,
    /// Additional CJK words for segmentation only.
    pub vocabulary: Vec<String>,
}

impl LexiconConfig {
    /// Returns `true` when no words are configured.
    pub fn is_empty(&self) -> bool {
        self.positive.is_empty()
            && self.negative.is_empty()
            && self.stop_words.is_empty()
            && self.vocabulary.is_empty()
    }
}

/// The configuration for lexis.
///
/// Deserialized from config files found during discovery (TOML, YAML, or
/// JSON) and `LEXIS_*` environment variables.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Default event filter when neither `RUST_LOG` nor `-q`/`-v` is given.
    pub log_level: LogLevel,
    /// Directory for log files. File logging is off when unset.
    pub log_dir: Option<Utf8PathBuf>,
    /// Largest text or file accepted, in bytes. Unset means
    /// [`DEFAULT_MAX_INPUT_BYTES`](crate::DEFAULT_MAX_INPUT_BYTES).
    pub max_input_bytes: Option<usize>,
    /// Skip input size checks, ignoring `max_input_bytes`.
    pub disable_input_limit: bool,
    /// Default for keyword extraction (on unless set to `false`).
    pub extract_keywords: Option<bool>,
    /// Default for entity extraction (on unless set to `false`).
    pub extract_entities: Option<bool>,
    /// Default for readability scoring (on unless set to `false`).
    pub calculate_readability: Option<bool>,
    /// Default maximum number of keywords (10 when unset).
    pub keyword_limit: Option<usize>,
    /// Words extending the built-in lexicons.
    pub lexicon: Option<LexiconConfig>,
}

impl Config {
    /// Resolve configured analysis defaults into [`AnalysisOptions`].
    pub fn analysis_options(&self) -> AnalysisOptions {
        let defaults = AnalysisOptions::default();
        AnalysisOptions {
            extract_keywords: self.extract_keywords.unwrap_or(defaults.extract_keywords),
            extract_entities: self.extract_entities.unwrap_or(defaults.extract_entities),
            calculate_readability: self
                .calculate_readability
                .unwrap_or(defaults.calculate_readability),
            keyword_limit: self.keyword_limit.unwrap_or(defaults.keyword_limit),
        }
    }

    /// The configured lexicon extension, if it adds any words.
    pub fn lexicon_extension(&self) -> Option<&LexiconConfig> {
        self.lexicon.as_ref().filter(|lex| !lex.is_empty())
    }
}

/// Configured log verbosity.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// `debug` and above.
    Debug,
    /// `info` and above.
    #[default]
    Info,
    /// `warn` and above.
    Warn,
    /// `error` only.
    Error,
}

impl LogLevel {
    /// The `EnvFilter` directive for this level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// The files that fed a loaded [`Config`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigSources {
    /// File from the user config directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_file: Option<Utf8PathBuf>,
    /// Files from the nearest project directory, in merge order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub project_files: Vec<Utf8PathBuf>,
    /// Files given explicitly, in merge order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub explicit_files: Vec<Utf8PathBuf>,
}

impl ConfigSources {
    /// The file with the final say: the last explicit file, else the last
    /// project file, else the user file.
    pub fn primary_file(&self) -> Option<&Utf8Path> {
        self.explicit_files
            .last()
            .or_else(|| self.project_files.last())
            .map(Utf8PathBuf::as_path)
            .or(self.user_file.as_deref())
    }

    fn layers(&self) -> impl Iterator<Item = &Utf8PathBuf> {
        self.user_file
            .iter()
            .chain(&self.project_files)
            .chain(&self.explicit_files)
    }
}

/// Builder that discovers and merges configuration layers.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    search_from: Option<Utf8PathBuf>,
    user_config: bool,
    boundary: Option<String>,
    explicit: Vec<Utf8PathBuf>,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Loader that reads the user config and stops project search at `.git`.
    pub fn new() -> Self {
        Self {
            search_from: None,
            user_config: true,
            boundary: Some(".git".to_string()),
            explicit: Vec::new(),
        }
    }

    /// Search for project config upward from `dir`.
    pub fn with_project_search<P: AsRef<Utf8Path>>(mut self, dir: P) -> Self {
        self.search_from = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Include or skip the user config file.
    pub const fn with_user_config(mut self, include: bool) -> Self {
        self.user_config = include;
        self
    }

    /// Stop the upward search at a directory containing `marker`, or never
    /// stop when `None`.
    pub fn with_boundary_marker(mut self, marker: Option<&str>) -> Self {
        self.boundary = marker.map(str::to_string);
        self
    }

    /// Merge `path` after every discovered file. Later calls win.
    pub fn with_file<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.explicit.push(path.as_ref().to_path_buf());
        self
    }

    /// Discover and merge every layer.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotFound`] when an explicit file does not exist
    /// and [`ConfigError::Deserialize`] when a layer fails to parse or holds a
    /// value of the wrong type.
    #[tracing::instrument(skip(self), fields(search_from = ?self.search_from))]
    pub fn load(self) -> ConfigResult<(Config, ConfigSources)> {
        if let Some(missing) = self.explicit.iter().find(|path| !path.is_file()) {
            return Err(ConfigError::NotFound(missing.clone()));
        }

        let sources = ConfigSources {
            user_file: if self.user_config {
                user_config_file()
            } else {
                None
            },
            project_files: self
                .search_from
                .as_deref()
                .map(|dir| project_files(dir, self.boundary.as_deref()))
                .unwrap_or_default(),
            explicit_files: self.explicit,
        };
        tracing::debug!(?sources, "configuration layers");

        let config: Config = sources
            .layers()
            .fold(
                Figment::from(Serialized::defaults(Config::default())),
                |figment, path| merge_file(figment, path),
            )
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()
            .map_err(|e| ConfigError::Deserialize(Box::new(e)))?;

        tracing::info!(
            log_level = config.log_level.as_str(),
            file = ?sources.primary_file(),
            "configuration loaded"
        );
        Ok((config, sources))
    }
}

/// Project file names in merge order.
fn project_file_names() -> impl Iterator<Item = String> {
    let dotfiles = EXTENSIONS.iter().map(|ext| format!(".{APP_NAME}.{ext}"));
    let plain = EXTENSIONS.iter().map(|ext| format!("{APP_NAME}.{ext}"));
    dotfiles.chain(plain)
}

/// Config files in the nearest directory at or above `start` that has any.
fn project_files(start: &Utf8Path, boundary: Option<&str>) -> Vec<Utf8PathBuf> {
    for dir in start.ancestors() {
        let found: Vec<Utf8PathBuf> = project_file_names()
            .map(|name| dir.join(name))
            .filter(|path| path.is_file())
            .collect();
        if !found.is_empty() {
            return found;
        }
        if let Some(marker) = boundary
            && dir.join(marker).exists()
        {
            tracing::debug!(%dir, marker, "stopping config search at boundary");
            break;
        }
    }
    Vec::new()
}

fn user_config_file() -> Option<Utf8PathBuf> {
    let dir = user_config_dir()?;
    EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!("config.{ext}")))
        .find(|path| path.is_file())
}

fn merge_file(figment: Figment, path: &Utf8Path) -> Figment {
    match path.extension() {
        Some("yaml" | "yml") => figment.merge(Yaml::file_exact(path)),
        Some("json") => figment.merge(Json::file_exact(path)),
        _ => figment.merge(Toml::file_exact(path)),
    }
}

/// The platform config directory for lexis, if it is valid UTF-8.
pub fn user_config_dir() -> Option<Utf8PathBuf> {
    let dirs = directories::ProjectDirs::from("", "", APP_NAME)?;
    Utf8PathBuf::from_path_buf(dirs.config_dir().to_path_buf()).ok()
}
