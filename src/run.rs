//! Package generation handoff.
//!
//! The package generation engine lives outside this crate. Until its
//! builder API is wired in, this module reports what the resolved
//! configuration would build.

use autopack::config::ValidatedConfig;
use autopack::params::ParamKey;

/// Hands the resolved configuration to the package generation engine.
// TODO: invoke the engine's builder once its API is wired in.
pub fn execute(config: &ValidatedConfig) {
    tracing::debug!("generation parameters:\n{}", config.params);

    let name = config.params.get(ParamKey::PackageName).unwrap_or("<unnamed>");
    let location = config.params.get(ParamKey::PackageLocation).unwrap_or("<unset>");

    println!(
        "Resolved {} generation parameters for package '{name}'",
        config.params.len()
    );
    println!(
        "'{name}' would be built from '{}' and written to '{location}' as a {} package.",
        config.content_root.display(),
        config.format
    );
    println!("The package generation engine is not wired up; no package was written.");
}
