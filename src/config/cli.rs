//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::params::PackagingFormat;

/// autopack: Automated archival package assembly
///
/// Resolves generation parameters from bundled defaults, per-user
/// overrides, parameter files, and command-line flags, then builds a
/// BagIt-style package from a content directory.
#[derive(Debug, Parser)]
#[command(name = "autopack")]
#[command(version, about, long_about = None)]
#[allow(clippy::struct_excessive_bools)] // CLI flags are naturally boolean
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Content root directory to package (required for a run)
    #[arg(value_name = "CONTENT")]
    pub content_root: Option<PathBuf>,

    /// Domain profile file
    #[arg(value_name = "PROFILE")]
    pub profile: Option<PathBuf>,

    /// Packaging format to use
    #[arg(short = 'f', long = "format", value_enum, default_value = "borem")]
    pub format: PackagingFormatArg,

    /// Generation parameter file overriding the bundled and per-user ones
    #[arg(short = 'g', long = "generation-params", value_name = "FILE")]
    pub generation_params: Option<PathBuf>,

    /// Package metadata file (flat key/value, comma-separated values)
    #[arg(short = 'm', long = "package-metadata", value_name = "FILE")]
    pub package_metadata: Option<PathBuf>,

    /// Rules file location
    #[arg(short = 'r', long = "rules-file", alias = "rules", value_name = "PATH")]
    pub rules_file: Option<PathBuf>,

    /// Archive format for the package: tar, zip, or exploded
    #[arg(short = 'a', long = "archiving-format", value_name = "tar|zip|exploded")]
    pub archiving_format: Option<String>,

    /// Compression format for tar archives; ignored for zip and exploded
    #[arg(short = 'c', long = "compression-format", value_name = "gz|none")]
    pub compression_format: Option<String>,

    /// Checksum algorithm to record (can be specified multiple times)
    #[arg(short = 's', long = "checksum", value_name = "md5|sha1")]
    pub checksums: Vec<String>,

    /// The package name, which also determines the output file name
    #[arg(short = 'n', long = "package-name", alias = "name", value_name = "NAME")]
    pub package_name: Option<String>,

    /// The output directory the package file is written to
    #[arg(short = 'o', long = "output-location", alias = "location", value_name = "PATH")]
    pub output_location: Option<PathBuf>,

    /// The directory the package is staged in before building
    #[arg(
        long = "staging-location",
        aliases = ["stage", "staging"],
        value_name = "PATH"
    )]
    pub staging_location: Option<PathBuf>,

    /// Overwrite the destination package file if it already exists
    #[arg(long, alias = "force")]
    pub overwrite: bool,

    /// Write the package to stdout instead of a file
    #[arg(long)]
    pub stdout: bool,

    /// Serialization format for the ORE-ReM resource map
    #[arg(
        short = 'z',
        long = "serialization-format",
        alias = "serialization",
        value_name = "JSONLD|TURTLE|XML"
    )]
    pub serialization_format: Option<String>,

    /// Print debug information
    #[arg(short = 'd', long)]
    pub debug: bool,

    /// Print the resolved generation parameters and exit
    #[arg(short = 'i', long)]
    pub info: bool,
}

/// Subcommands for autopack
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a default parameter file
    Init {
        /// Output path for the parameter file
        #[arg(long, short, default_value = "autopack.toml")]
        output: PathBuf,
    },
}

/// Packaging format argument for CLI parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PackagingFormatArg {
    /// BagIt bag described by an ORE-ReM resource map
    #[value(name = "borem")]
    Borem,
}

impl From<PackagingFormatArg> for PackagingFormat {
    fn from(arg: PackagingFormatArg) -> Self {
        match arg {
            PackagingFormatArg::Borem => Self::Borem,
        }
    }
}

impl Cli {
    /// Parses CLI arguments from the command line, reporting errors to
    /// the caller instead of exiting.
    ///
    /// # Errors
    ///
    /// Returns a [`clap::Error`] on invalid arguments, and for the
    /// help/version displays.
    pub fn try_parse_args() -> Result<Self, clap::Error> {
        Self::try_parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Returns true if this is the init command.
    #[must_use]
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Some(Command::Init { .. }))
    }
}
