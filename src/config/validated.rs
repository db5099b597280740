//! Resolved configuration after folding all parameter sources.
//!
//! This module contains the final, validated configuration that is
//! handed to the package generation engine. All folding and validation
//! is performed during construction.

use std::env;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::metadata::PackageMetadata;
use crate::params::{PackagingFormat, ParamKey, ParameterSet};

use super::cli::Cli;
use super::defaults;
use super::error::{ConfigError, field};
use super::toml::TomlParams;

/// Fully resolved configuration ready for the package generation engine.
///
/// The generation parameters are the fold of every source in precedence
/// order (bundled defaults, user parameter file, explicit parameter
/// file, command-line flags), with the compression fix-up applied to
/// each source before folding and path validation applied at the end.
///
/// # Construction
///
/// Use [`ValidatedConfig::load`] for the real source chain, or
/// [`ValidatedConfig::from_raw`] with pre-parsed sources in tests.
#[derive(Debug)]
#[allow(clippy::struct_excessive_bools)] // run switches mirror the CLI flags
pub struct ValidatedConfig {
    /// Content root directory to package (required, must be a directory)
    pub content_root: PathBuf,

    /// Domain profile file, when given
    pub profile: Option<PathBuf>,

    /// Packaging format handed to the engine
    pub format: PackagingFormat,

    /// The effective generation parameters
    pub params: ParameterSet,

    /// Package metadata entries, empty when no metadata file was given
    pub metadata: PackageMetadata,

    /// Rules file: command line first, then the user directory, then
    /// `None` for the engine default
    pub rules_file: Option<PathBuf>,

    /// Overwrite the destination package file if it already exists
    pub overwrite: bool,

    /// Write the package to stdout instead of a file
    pub stdout: bool,

    /// Debug logging enabled
    pub debug: bool,

    /// Print the resolved parameters instead of building
    pub info: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rules_str = self
            .rules_file
            .as_ref()
            .map_or_else(|| "engine default".to_string(), |p| p.display().to_string());

        write!(
            f,
            "Config {{ content: {}, format: {}, name: {}, location: {}, archive: {}, \
             compression: {}, checksums: [{}], serialization: {}, rules: {}, \
             metadata entries: {}, overwrite: {}, stdout: {} }}",
            self.content_root.display(),
            self.format,
            self.params.get(ParamKey::PackageName).unwrap_or("?"),
            self.params.get(ParamKey::PackageLocation).unwrap_or("?"),
            self.params.get(ParamKey::ArchivingFormat).unwrap_or("?"),
            self.params
                .get(ParamKey::CompressionFormat)
                .unwrap_or(defaults::COMPRESSION_NONE),
            self.params
                .get_all(ParamKey::ChecksumAlgorithms)
                .unwrap_or_default()
                .join(", "),
            self.params.get(ParamKey::SerializationFormat).unwrap_or("?"),
            rules_str,
            self.metadata.len(),
            self.overwrite,
            self.stdout,
        )
    }
}

impl ValidatedConfig {
    /// Creates a resolved configuration from CLI arguments and
    /// pre-parsed parameter sources.
    ///
    /// `home` is the user parameter file, `explicit` the file named
    /// with `-g`; either may be absent. Precedence is
    /// defaults < `home` < `explicit` < flags.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The content root is missing or not a directory
    /// - The package name is missing or empty
    /// - The output location does not name an existing directory
    /// - A named metadata or rules file does not exist
    /// - A parameter source is malformed
    pub fn from_raw(
        cli: &Cli,
        home: Option<&TomlParams>,
        explicit: Option<&TomlParams>,
    ) -> Result<Self, ConfigError> {
        let content_root = Self::resolve_content_root(cli)?;

        let mut params = Self::resolve_params(cli, home, explicit)?;

        // The engine needs somewhere to write even when no source says so.
        if !params.contains(ParamKey::PackageLocation) {
            params.set(
                ParamKey::PackageLocation,
                env::temp_dir().display().to_string(),
            );
        }

        Self::validate_package_name(&params)?;
        Self::validate_output_location(&params)?;

        let metadata = Self::resolve_metadata(cli)?;
        let rules_file = Self::resolve_rules_file(cli)?;

        Ok(Self {
            content_root,
            profile: cli.profile.clone(),
            format: cli.format.into(),
            params,
            metadata,
            rules_file,
            overwrite: cli.overwrite,
            stdout: cli.stdout,
            debug: cli.debug,
            info: cli.info,
        })
    }

    /// Loads and resolves configuration from the real source chain.
    ///
    /// Consults `~/.autopack` for the user parameter and rules files.
    ///
    /// # Errors
    ///
    /// Returns an error if a named file cannot be read or the merged
    /// configuration is invalid.
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        Self::load_from(cli, defaults::user_config_dir().as_deref())
    }

    /// Loads and resolves configuration with an explicit user
    /// configuration directory (useful for testing).
    ///
    /// The user parameter file may be absent; a `-g` file named on the
    /// command line may not.
    ///
    /// # Errors
    ///
    /// Returns an error if a named file cannot be read or the merged
    /// configuration is invalid.
    pub fn load_from(cli: &Cli, user_config_dir: Option<&Path>) -> Result<Self, ConfigError> {
        let home = match user_config_dir.map(|dir| dir.join(defaults::PARAMS_FILE_NAME)) {
            Some(path) if path.is_file() => Some(TomlParams::load(&path)?),
            _ => None,
        };

        let explicit = match &cli.generation_params {
            Some(path) => {
                if !path.is_file() {
                    return Err(ConfigError::MissingFile {
                        role: "generation parameters file",
                        path: path.clone(),
                    });
                }
                Some(TomlParams::load(path)?)
            }
            None => None,
        };

        let mut config = Self::from_raw(cli, home.as_ref(), explicit.as_ref())?;

        // Rules priority: command line, then the user directory, then
        // the engine default.
        if config.rules_file.is_none() {
            if let Some(dir) = user_config_dir {
                let user_rules = dir.join(defaults::RULES_FILE_NAME);
                if user_rules.is_file() {
                    config.rules_file = Some(user_rules);
                }
            }
        }

        Ok(config)
    }

    /// Folds all parameter sources in precedence order.
    fn resolve_params(
        cli: &Cli,
        home: Option<&TomlParams>,
        explicit: Option<&TomlParams>,
    ) -> Result<ParameterSet, ConfigError> {
        let mut effective = Self::bundled_params()?;

        if let Some(home) = home {
            tracing::info!("overriding generation parameters with values from the user parameter file");
            Self::fold_source(&mut effective, home.to_params());
        }

        if let Some(explicit) = explicit {
            tracing::info!(
                "overriding generation parameters with values from the file named on the command line"
            );
            Self::fold_source(&mut effective, explicit.to_params());
        }

        let flags = Self::flag_params(cli);
        if !flags.is_empty() {
            tracing::info!("overriding generation parameters with command-line flags");
            Self::fold_source(&mut effective, flags);
        }

        tracing::debug!("resolved generation parameters:\n{effective}");
        Ok(effective)
    }

    /// Parses the parameter source bundled with the binary.
    fn bundled_params() -> Result<ParameterSet, ConfigError> {
        let mut params = TomlParams::parse(defaults::BUNDLED_PARAMS)?.to_params();
        Self::normalize_compression(&mut params);
        Ok(params)
    }

    /// Applies the compression fix-up to `source` and folds it into the
    /// effective set.
    fn fold_source(effective: &mut ParameterSet, mut source: ParameterSet) {
        Self::normalize_compression(&mut source);
        effective.override_with(&source);
    }

    /// Forces the compression format to "none" when this source picked
    /// the "zip" archive without choosing a compression, or picked the
    /// "exploded" layout. Applies per source, before folding.
    fn normalize_compression(params: &mut ParameterSet) {
        let force_none = match params.get(ParamKey::ArchivingFormat) {
            Some(archive) => {
                (archive == defaults::ARCHIVE_ZIP
                    && !params.contains(ParamKey::CompressionFormat))
                    || archive == defaults::ARCHIVE_EXPLODED
            }
            None => false,
        };

        if force_none {
            params.set(ParamKey::CompressionFormat, defaults::COMPRESSION_NONE);
        }
    }

    /// Builds a parameter set from the flags explicitly provided on the
    /// command line. Flags left unset populate nothing.
    fn flag_params(cli: &Cli) -> ParameterSet {
        let mut params = ParameterSet::new();

        if let Some(name) = &cli.package_name {
            params.set(ParamKey::PackageName, name);
        }
        if let Some(location) = &cli.output_location {
            params.set(ParamKey::PackageLocation, location.display().to_string());
        }
        if let Some(staging) = &cli.staging_location {
            params.set(
                ParamKey::PackageStagingLocation,
                staging.display().to_string(),
            );
        }
        if let Some(format) = &cli.archiving_format {
            params.set(ParamKey::ArchivingFormat, format);
        }
        if let Some(compression) = &cli.compression_format {
            params.set(ParamKey::CompressionFormat, compression);
        }
        if !cli.checksums.is_empty() {
            params.set_all(ParamKey::ChecksumAlgorithms, cli.checksums.clone());
        }
        if let Some(serialization) = &cli.serialization_format {
            params.set(ParamKey::SerializationFormat, serialization);
        }

        params
    }

    fn resolve_content_root(cli: &Cli) -> Result<PathBuf, ConfigError> {
        let Some(root) = &cli.content_root else {
            return Err(ConfigError::missing(
                field::CONTENT_ROOT,
                "Pass the content root directory as the first argument",
            ));
        };

        if !root.is_dir() {
            return Err(ConfigError::NotADirectory {
                role: "content root",
                path: root.clone(),
            });
        }

        Ok(root.clone())
    }

    fn validate_package_name(params: &ParameterSet) -> Result<(), ConfigError> {
        match params.get(ParamKey::PackageName) {
            None => Err(ConfigError::missing(
                field::PACKAGE_NAME,
                "Use --package-name or set package.name in a parameter file",
            )),
            Some(name) if name.is_empty() => Err(ConfigError::EmptyValue {
                field: field::PACKAGE_NAME,
            }),
            Some(_) => Ok(()),
        }
    }

    /// File-valued arguments are checked at parse time; location
    /// parameters can come from any source, so they are checked only
    /// after the fold is complete.
    fn validate_output_location(params: &ParameterSet) -> Result<(), ConfigError> {
        let location = params.get(ParamKey::PackageLocation).unwrap_or_default();
        if location.is_empty() {
            return Err(ConfigError::EmptyValue {
                field: field::PACKAGE_LOCATION,
            });
        }

        let path = Path::new(location);
        if !path.is_dir() {
            return Err(ConfigError::NotADirectory {
                role: "output location",
                path: path.to_path_buf(),
            });
        }

        Ok(())
    }

    fn resolve_metadata(cli: &Cli) -> Result<PackageMetadata, ConfigError> {
        let Some(path) = &cli.package_metadata else {
            return Ok(PackageMetadata::new());
        };

        if !path.is_file() {
            return Err(ConfigError::MissingFile {
                role: "package metadata file",
                path: path.clone(),
            });
        }

        PackageMetadata::load(path).map_err(|e| ConfigError::FileRead {
            path: path.clone(),
            source: e,
        })
    }

    fn resolve_rules_file(cli: &Cli) -> Result<Option<PathBuf>, ConfigError> {
        match &cli.rules_file {
            Some(path) if !path.is_file() => Err(ConfigError::MissingFile {
                role: "rules file",
                path: path.clone(),
            }),
            Some(path) => Ok(Some(path.clone())),
            None => Ok(None),
        }
    }
}

/// Writes the default parameter file template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_params(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_params_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}
