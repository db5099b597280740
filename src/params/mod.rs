//! Generation parameter model.
//!
//! This module provides the parameter vocabulary shared by every
//! configuration source:
//! - [`ParamKey`] - the fixed set of generation parameter names
//! - [`ParameterSet`] - an ordered, multi-valued parameter map with
//!   last-write-wins override folding
//! - [`PackagingFormat`] - the package layout handed to the engine

use std::collections::BTreeMap;
use std::fmt;

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

/// Names of the generation parameters understood by the engine.
///
/// The declaration order here is the display order of a
/// [`ParameterSet`]; `Ord` derives from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ParamKey {
    /// Package name, which also determines the output file name.
    PackageName,

    /// Directory the finished package is written to.
    PackageLocation,

    /// Directory the package is staged in before building.
    PackageStagingLocation,

    /// Archive layout: "tar", "zip", or "exploded".
    ArchivingFormat,

    /// Compression applied to the archive: "gz" or "none".
    CompressionFormat,

    /// Checksum algorithms recorded in the package manifest.
    ChecksumAlgorithms,

    /// Serialization of the ORE-ReM resource map.
    SerializationFormat,
}

impl ParamKey {
    /// All parameter keys in display order.
    pub const ALL: [Self; 7] = [
        Self::PackageName,
        Self::PackageLocation,
        Self::PackageStagingLocation,
        Self::ArchivingFormat,
        Self::CompressionFormat,
        Self::ChecksumAlgorithms,
        Self::SerializationFormat,
    ];

    /// The parameter's stable name, used in logs and `--info` output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PackageName => "package-name",
            Self::PackageLocation => "package-location",
            Self::PackageStagingLocation => "package-staging-location",
            Self::ArchivingFormat => "archiving-format",
            Self::CompressionFormat => "compression-format",
            Self::ChecksumAlgorithms => "checksum-algorithms",
            Self::SerializationFormat => "serialization-format",
        }
    }
}

impl fmt::Display for ParamKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An ordered mapping from [`ParamKey`] to one or more string values.
///
/// A key may hold multiple values (checksum algorithms) while most hold
/// exactly one. Value order and duplicates are preserved as given.
///
/// Each configuration source produces one `ParameterSet`; sources are
/// folded together with [`ParameterSet::override_with`], where the
/// later set's keys win and untouched keys are preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterSet {
    entries: BTreeMap<ParamKey, Vec<String>>,
}

impl ParameterSet {
    /// Creates an empty parameter set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Sets `key` to a single value, replacing any previous values.
    pub fn set(&mut self, key: ParamKey, value: impl Into<String>) {
        self.entries.insert(key, vec![value.into()]);
    }

    /// Sets `key` to an ordered list of values, replacing any previous
    /// values. An empty list removes the key.
    pub fn set_all(&mut self, key: ParamKey, values: Vec<String>) {
        if values.is_empty() {
            self.entries.remove(&key);
        } else {
            self.entries.insert(key, values);
        }
    }

    /// Returns the first value for `key`, if any.
    #[must_use]
    pub fn get(&self, key: ParamKey) -> Option<&str> {
        self.entries
            .get(&key)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns all values for `key`, if any.
    #[must_use]
    pub fn get_all(&self, key: ParamKey) -> Option<&[String]> {
        self.entries.get(&key).map(Vec::as_slice)
    }

    /// Returns `true` if `key` holds at least one value.
    #[must_use]
    pub fn contains(&self, key: ParamKey) -> bool {
        self.entries.contains_key(&key)
    }

    /// Returns `true` if no key holds a value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of keys holding at least one value.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Folds `other` into `self`: every key present in `other` replaces
    /// the corresponding key here; keys absent from `other` keep their
    /// current values.
    pub fn override_with(&mut self, other: &Self) {
        for (key, values) in &other.entries {
            self.entries.insert(*key, values.clone());
        }
    }

    /// Iterates over `(key, values)` entries in display order.
    pub fn iter(&self) -> impl Iterator<Item = (ParamKey, &[String])> {
        self.entries
            .iter()
            .map(|(key, values)| (*key, values.as_slice()))
    }
}

impl fmt::Display for ParameterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (key, values) in self.iter() {
            if !first {
                writeln!(f)?;
            }
            write!(f, "{key} = {}", values.join(", "))?;
            first = false;
        }
        Ok(())
    }
}

/// Package layouts the generation engine can produce.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PackagingFormat {
    /// BagIt bag described by an ORE-ReM resource map.
    #[default]
    Borem,
}

impl PackagingFormat {
    /// The format's engine-facing identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Borem => "BOREM",
        }
    }
}

impl fmt::Display for PackagingFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
