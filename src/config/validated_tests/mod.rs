//! Tests for resolved configuration.

use tempfile::TempDir;

use crate::params::ParamKey;

use super::ConfigError;
use super::cli::Cli;
use super::toml::TomlParams;
use super::validated::ValidatedConfig;

/// Helper to create CLI args from a slice
fn cli(args: &[&str]) -> Cli {
    let mut full_args = vec!["autopack"];
    full_args.extend(args);
    Cli::parse_from_iter(full_args)
}

/// Helper to parse a TOML parameter source
fn toml(content: &str) -> TomlParams {
    TomlParams::parse(content).unwrap()
}

/// Content and output directories for a test run.
fn workspace() -> (TempDir, TempDir) {
    (TempDir::new().unwrap(), TempDir::new().unwrap())
}

/// CLI with a valid content root and output location; tests supply the
/// package name through `extra` or a parameter source.
fn base_cli(content: &TempDir, out: &TempDir, extra: &[&str]) -> Cli {
    let mut args = vec![
        "autopack".to_string(),
        content.path().display().to_string(),
        "-o".to_string(),
        out.path().display().to_string(),
    ];
    args.extend(extra.iter().map(ToString::to_string));
    Cli::parse_from_iter(args)
}
