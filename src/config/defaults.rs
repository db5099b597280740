//! Well-known names and bundled default parameters.
//!
//! Centralized constants to avoid magic strings scattered across the
//! codebase.

use std::path::PathBuf;

/// Name of the per-user configuration directory under the home directory.
pub const USER_CONFIG_DIR: &str = ".autopack";

/// File name of the per-user parameter override file.
pub const PARAMS_FILE_NAME: &str = "params.toml";

/// File name of the per-user rules file.
pub const RULES_FILE_NAME: &str = "rules.xml";

/// Archive format producing a tar archive.
pub const ARCHIVE_TAR: &str = "tar";

/// Archive format producing a zip archive.
pub const ARCHIVE_ZIP: &str = "zip";

/// Archive format producing an uncompressed directory tree.
pub const ARCHIVE_EXPLODED: &str = "exploded";

/// Compression format meaning "no compression".
pub const COMPRESSION_NONE: &str = "none";

/// The parameter source bundled with the binary, seed of every
/// resolution. Parsed through the same loader as file sources.
pub const BUNDLED_PARAMS: &str = r#"[archive]
format = "tar"
checksums = ["md5"]
serialization = "JSONLD"
"#;

/// The per-user configuration directory, or `None` when no home
/// directory can be determined.
#[must_use]
pub fn user_config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(USER_CONFIG_DIR))
}
