//! autopack: Automated archival package assembly
//!
//! A library for resolving package-generation parameters from layered
//! sources (bundled defaults, per-user overrides, explicit parameter
//! files, and command-line flags) and validating them before handing
//! off to a package-building engine.

pub mod config;
pub mod metadata;
pub mod params;
