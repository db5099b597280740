//! Configuration layer for autopack.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML parameter file parsing ([`TomlParams`])
//! - Resolved, validated configuration ([`ValidatedConfig`])
//! - Parameter file generation ([`write_default_params`])
//! - Well-known names and bundled defaults ([`defaults`])
//!
//! # Priority
//!
//! Generation parameters are resolved by folding sources in increasing
//! precedence (later sources win per key):
//!
//! 1. **Bundled defaults** - The parameter source embedded in the binary
//! 2. **User parameter file** - `~/.autopack/params.toml`, when present
//! 3. **Explicit parameter file** - The `-g/--generation-params` file
//! 4. **Command-line flags** - Only flags explicitly provided
//!
//! A key absent from a later source keeps the value from the earlier
//! ones; a key present in a later source replaces the earlier value
//! entirely, including multi-valued keys such as checksum algorithms.
//!
//! # Compression fix-up
//!
//! After each source is loaded and before it is folded in, the
//! compression format is normalized: a source selecting the "zip"
//! archive without choosing a compression, or selecting the "exploded"
//! layout, has its compression forced to "none". The rule applies per
//! source, so a later source switching to "zip" discards an earlier
//! source's compression choice.
//!
//! # Validation
//!
//! After folding, the output location must name an existing directory
//! (falling back to the platform temp directory when no source set it)
//! and the package name must be non-empty. File-valued flags
//! (generation parameters, metadata, rules) must name existing files.
//! The only tolerated absence is the user parameter file.

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;

#[cfg(test)]
mod validated_tests;

pub use cli::{Cli, Command, PackagingFormatArg};
pub use error::{ConfigError, field};
pub use toml::{TomlParams, default_params_template};
pub use validated::{ValidatedConfig, write_default_params};
