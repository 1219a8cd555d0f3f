//! End-to-end checks of config discovery, formats and precedence.
//!
//! Each test builds a throwaway directory tree, runs the binary inside it
//! with `-C`, and reads effective settings back from `info --json`.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{Value, json};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

#[allow(deprecated)]
fn lexis() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

/// A temporary directory tree holding config files.
struct Tree {
    root: TempDir,
}

impl Tree {
    fn new() -> Self {
        Self {
            root: TempDir::new().unwrap(),
        }
    }

    /// Absolute path of `rel`, creating its parent directories.
    fn path(&self, rel: &str) -> PathBuf {
        let path = self.root.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        path
    }

    fn file(self, rel: &str, body: &str) -> Self {
        fs::write(self.path(rel), body).unwrap();
        self
    }

    fn dir(self, rel: &str) -> Self {
        fs::create_dir_all(self.root.path().join(rel)).unwrap();
        self
    }

    /// Run `args --json` from `rel` and parse stdout.
    fn run(&self, rel: &str, args: &[&str]) -> Value {
        run_json(&self.root.path().join(rel), args)
    }

    /// The `config` object reported by `info` from `rel`.
    fn config(&self, rel: &str) -> Value {
        self.run(rel, &["info"])["config"].clone()
    }
}

fn run_json(dir: &Path, args: &[&str]) -> Value {
    let output = lexis()
        .arg("-C")
        .arg(dir)
        .args(args)
        .arg("--json")
        .env_remove("LEXIS_KEYWORD_LIMIT")
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "lexis {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

fn reported_file(config: &Value) -> &str {
    config["config_file"].as_str().unwrap_or_default()
}

const WORDS: &str = "apple apple pear plum";

// discovery

#[test]
fn defaults_apply_with_no_files() {
    let config = Tree::new().config("");
    assert_eq!(config["log_level"], "info");
    assert!(config["config_file"].is_null());
    assert_eq!(config["analysis"]["keywordLimit"], 10);
}

#[test]
fn dotfile_in_working_dir_is_found() {
    let config = Tree::new()
        .file(".lexis.toml", "log_level = \"debug\"")
        .config("");
    assert_eq!(config["log_level"], "debug");
    assert!(reported_file(&config).ends_with(".lexis.toml"));
}

#[test]
fn ancestor_config_is_found() {
    let config = Tree::new()
        .file(".lexis.toml", "keyword_limit = 3\n")
        .dir("a/b/c")
        .config("a/b/c");
    assert_eq!(config["analysis"]["keywordLimit"], 3);
}

#[test]
fn plain_name_beats_dotfile_in_same_dir() {
    let config = Tree::new()
        .file(".lexis.toml", "log_level = \"debug\"")
        .file("lexis.toml", "log_level = \"error\"")
        .config("");
    assert_eq!(config["log_level"], "error");
}

#[test]
fn search_stops_at_repository_root() {
    let tree = Tree::new()
        .file("outer/.lexis.toml", "log_level = \"error\"")
        .dir("outer/repo/.git")
        .dir("outer/repo/src");
    let config = tree.config("outer/repo/src");
    assert_eq!(config["log_level"], "info");
    assert!(config["config_file"].is_null());
}

// formats

#[test]
fn yaml_files_are_read() {
    let analysis = Tree::new()
        .file(".lexis.yaml", "extract_entities: false\nkeyword_limit: 4\n")
        .config("")["analysis"]
        .clone();
    assert_eq!(analysis["extractEntities"], false);
    assert_eq!(analysis["keywordLimit"], 4);
}

#[test]
fn json_files_are_read() {
    let config = Tree::new()
        .file(".lexis.json", r#"{"calculate_readability": false}"#)
        .config("");
    assert_eq!(config["analysis"]["calculateReadability"], false);
}

#[test]
fn unrecognized_keys_are_ignored() {
    let config = Tree::new()
        .file(".lexis.toml", "log_level = \"warn\"\nshoe_size = 44\n")
        .config("");
    assert_eq!(config["log_level"], "warn");
}

#[test]
fn malformed_toml_fails_with_config_error() {
    let tree = Tree::new().file(".lexis.toml", "keyword_limit = = 3");
    lexis()
        .arg("-C")
        .arg(tree.root.path())
        .arg("status")
        .assert()
        .failure()
        .stderr(predicate::str::contains("configuration"));
}

// precedence

#[test]
fn nearer_file_wins() {
    let config = Tree::new()
        .file(".lexis.toml", "log_level = \"error\"")
        .file("proj/.lexis.toml", "log_level = \"debug\"")
        .config("proj");
    assert_eq!(config["log_level"], "debug");
}

#[test]
fn config_flag_layers_over_discovery() {
    let tree = Tree::new()
        .file(".lexis.toml", "log_level = \"debug\"\nkeyword_limit = 2\n")
        .file("extra/override.toml", "log_level = \"error\"");
    let explicit = tree.path("extra/override.toml");
    let config = tree.run("", &["--config", explicit.to_str().unwrap(), "info"])["config"].clone();
    assert_eq!(config["log_level"], "error");
    // keys the explicit file leaves alone still come from discovery
    assert_eq!(config["analysis"]["keywordLimit"], 2);
    assert!(reported_file(&config).ends_with("override.toml"));
}

#[test]
fn missing_config_flag_file_fails() {
    let tree = Tree::new();
    lexis()
        .arg("-C")
        .arg(tree.root.path())
        .args(["--config", "nowhere.toml", "status"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

// analysis defaults and lexicons

#[test]
fn configured_keyword_limit_reaches_analyze() {
    let report = Tree::new()
        .file(".lexis.toml", "keyword_limit = 1\n")
        .run("", &["analyze", "--text", WORDS]);
    assert_eq!(report["keywords"], json!(["apple"]));
}

#[test]
fn keyword_flag_beats_config() {
    let report = Tree::new()
        .file(".lexis.toml", "keyword_limit = 1\n")
        .run("", &["analyze", "--text", WORDS, "--keyword-limit", "3"]);
    assert_eq!(report["keywords"].as_array().unwrap().len(), 3);
}

#[test]
fn env_var_beats_files() {
    let tree = Tree::new().file(".lexis.toml", "keyword_limit = 1\n");
    let output = lexis()
        .arg("-C")
        .arg(tree.root.path())
        .args(["analyze", "--text", WORDS, "--json"])
        .env("LEXIS_KEYWORD_LIMIT", "2")
        .output()
        .unwrap();
    assert!(output.status.success());
    let report: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["keywords"], json!(["apple", "pear"]));
}

#[test]
fn lexicon_table_extends_builtins() {
    let tree = Tree::new().file(
        ".lexis.toml",
        "[lexicon]\npositive = [\"stellar\"]\nstop_words = [\"widget\"]\n",
    );
    let report = tree.run("", &["analyze", "--text", "stellar widget widget launch"]);
    assert_eq!(report["sentiment"]["label"], "positive");
    let keywords = report["keywords"].as_array().unwrap();
    assert!(!keywords.iter().any(|k| k == "widget"));

    let extended = tree.config("")["lexicons"]["positive"].as_u64().unwrap();
    let builtin = Tree::new().config("")["lexicons"]["positive"]
        .as_u64()
        .unwrap();
    assert_eq!(extended, builtin + 1);
}

#[test]
fn small_input_limit_rejects_text() {
    let tree = Tree::new().file(".lexis.toml", "max_input_bytes = 8\n");
    lexis()
        .arg("-C")
        .arg(tree.root.path())
        .args(["analyze", "--text", "well over eight bytes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("input too large"));
}

#[test]
fn disabled_limit_is_reported_as_null() {
    let config = Tree::new()
        .file(
            ".lexis.toml",
            "max_input_bytes = 8\ndisable_input_limit = true\n",
        )
        .config("");
    assert!(config["max_input_bytes"].is_null());
}
