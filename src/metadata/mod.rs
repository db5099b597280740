//! Package metadata file parsing.
//!
//! Metadata files are flat key/value text: one entry per line, `=` or
//! `:` separating the key from its value, and each value read as a
//! comma-separated list of trimmed strings. Lines starting with `#` or
//! `!` are comments. Entry order in the file is preserved.

use std::io;
use std::path::Path;

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

/// Metadata handed to the package generation engine alongside the
/// resolved parameters.
///
/// Entries keep the order they first appear in the file; a repeated key
/// replaces its earlier value without moving.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageMetadata {
    entries: Vec<(String, Vec<String>)>,
}

impl PackageMetadata {
    /// Creates an empty metadata set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Reads and parses a metadata file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn load(path: &Path) -> io::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::parse(&content))
    }

    /// Parses metadata from flat key/value text.
    ///
    /// The format is forgiving: unknown lines become keys with an empty
    /// value list rather than errors.
    #[must_use]
    pub fn parse(content: &str) -> Self {
        let mut metadata = Self::new();

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                continue;
            }

            let (key, value) = split_entry(line);
            let values: Vec<String> = value
                .split(',')
                .map(str::trim)
                .filter(|part| !part.is_empty())
                .map(ToString::to_string)
                .collect();

            metadata.put(key.to_string(), values);
        }

        metadata
    }

    /// Returns the values for `key`, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, values)| values.as_slice())
    }

    /// Iterates over `(key, values)` entries in file order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(key, values)| (key.as_str(), values.as_slice()))
    }

    /// Number of metadata entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no entries are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn put(&mut self, key: String, values: Vec<String>) {
        if let Some(index) = self.entries.iter().position(|(name, _)| *name == key) {
            self.entries[index].1 = values;
        } else {
            self.entries.push((key, values));
        }
    }
}

/// Splits a line at the first `=` or `:`, whichever comes first.
/// A line with neither separator is a bare key.
fn split_entry(line: &str) -> (&str, &str) {
    match line.find(['=', ':']) {
        Some(pos) => (line[..pos].trim_end(), line[pos + 1..].trim_start()),
        None => (line, ""),
    }
}
