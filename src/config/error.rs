//! Error types for configuration parsing, resolution, and validation.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for configuration operations.
///
/// Covers errors from parameter file parsing, source folding, and
/// post-resolution validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a parameter file.
    #[error("Failed to read parameter file '{}': {source}", path.display())]
    FileRead {
        /// Path to the parameter file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a parameter file (for the init command).
    #[error("Failed to write parameter file '{}': {source}", path.display())]
    FileWrite {
        /// Path to the parameter file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A parameter source is malformed.
    #[error("Failed to parse parameter source: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// A file named on the command line does not exist.
    #[error("Supplied {role} '{}' does not exist or is not a file", path.display())]
    MissingFile {
        /// What the file was named for (metadata, rules, parameters)
        role: &'static str,
        /// The path that was given
        path: PathBuf,
    },

    /// A required value was provided by no source.
    #[error("Missing required value: {field}. {hint}")]
    MissingRequired {
        /// Name of the missing value
        field: &'static str,
        /// Hint for how to provide it
        hint: &'static str,
    },

    /// A required value resolved to an empty string.
    #[error("Required value for {field} is empty")]
    EmptyValue {
        /// Name of the empty value
        field: &'static str,
    },

    /// A path-valued argument does not name an existing directory.
    #[error("Supplied {role} '{}' does not exist or is not a directory", path.display())]
    NotADirectory {
        /// What the directory was named for
        role: &'static str,
        /// The path that was given
        path: PathBuf,
    },
}

/// Well-known field names for `MissingRequired` and `EmptyValue` errors.
///
/// Use these constants for compile-time safety when matching field names.
pub mod field {
    /// The content root argument.
    pub const CONTENT_ROOT: &str = "content";
    /// The package name parameter.
    pub const PACKAGE_NAME: &str = "package-name";
    /// The package output location parameter.
    pub const PACKAGE_LOCATION: &str = "package-location";
}

impl ConfigError {
    /// Creates a `MissingRequired` error for a required value.
    #[must_use]
    pub const fn missing(field: &'static str, hint: &'static str) -> Self {
        Self::MissingRequired { field, hint }
    }
}
