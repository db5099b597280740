//! TOML parameter file parsing.
//!
//! Defines the structure of parameter files with serde. The same
//! structure backs every parameter source: the bundled defaults, the
//! per-user override file, and the explicit `-g` file.

use std::path::Path;

use serde::Deserialize;

use crate::params::{ParamKey, ParameterSet};

use super::ConfigError;

/// Root structure of a parameter file.
///
/// All fields are optional to allow partial files that only override a
/// few parameters.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlParams {
    /// Package identity and locations
    #[serde(default)]
    pub package: PackageSection,

    /// Archive layout, compression, and manifest settings
    #[serde(default)]
    pub archive: ArchiveSection,
}

/// Package identity and location section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PackageSection {
    /// Package name, which also determines the output file name
    pub name: Option<String>,

    /// Directory the finished package is written to
    pub location: Option<String>,

    /// Directory the package is staged in before building
    pub staging_location: Option<String>,
}

/// Archive configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ArchiveSection {
    /// Archive format: "tar", "zip", or "exploded"
    pub format: Option<String>,

    /// Compression format: "gz" or "none"
    pub compression: Option<String>,

    /// Checksum algorithms recorded in the package manifest
    pub checksums: Option<Vec<String>>,

    /// Serialization for the ORE-ReM resource map
    pub serialization: Option<String>,
}

impl TomlParams {
    /// Loads a parameter file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses a parameter source from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }

    /// Converts the file contents into a [`ParameterSet`], populating
    /// only the keys this source actually set.
    #[must_use]
    pub fn to_params(&self) -> ParameterSet {
        let mut params = ParameterSet::new();

        if let Some(name) = &self.package.name {
            params.set(ParamKey::PackageName, name);
        }
        if let Some(location) = &self.package.location {
            params.set(ParamKey::PackageLocation, location);
        }
        if let Some(staging) = &self.package.staging_location {
            params.set(ParamKey::PackageStagingLocation, staging);
        }
        if let Some(format) = &self.archive.format {
            params.set(ParamKey::ArchivingFormat, format);
        }
        if let Some(compression) = &self.archive.compression {
            params.set(ParamKey::CompressionFormat, compression);
        }
        if let Some(checksums) = &self.archive.checksums {
            params.set_all(ParamKey::ChecksumAlgorithms, checksums.clone());
        }
        if let Some(serialization) = &self.archive.serialization {
            params.set(ParamKey::SerializationFormat, serialization);
        }

        params
    }
}

/// Generates a default parameter file with comments.
#[must_use]
pub fn default_params_template() -> String {
    r#"# autopack parameter file
# Values here override the bundled defaults; an explicit -g file and
# command-line flags override both.

[package]
# Package name, which also determines the output file name
# name = "my-package"

# Directory the finished package is written to
# location = "/var/data/packages"

# Directory the package is staged in before building
# staging_location = "/var/tmp/autopack-staging"

[archive]
# Archive format: "tar", "zip", or "exploded"
format = "tar"

# Compression format: "gz" or "none"
# Forced to "none" for zip archives without an explicit choice, and for
# the exploded layout always.
# compression = "gz"

# Checksum algorithms recorded in the package manifest
checksums = ["md5"]

# Serialization for the ORE-ReM resource map: "JSONLD", "TURTLE", or "XML"
serialization = "JSONLD"
"#
    .to_string()
}
