// Copyright (c) 2025 Makai Trie Authors
//
// Licensed under the MIT License (LICENSE or https://opensource.org/licenses/MIT)

//! Persistence boundary for the Makai Trie.
//!
//! The core engine never learns a storage format. This module flattens a trie
//! to its `every_string()` sequence and rebuilds one from such a sequence,
//! delegating the actual encoding to serde. Both views serialize as a plain
//! array of strings, so any self-describing format round-trips; the file
//! helpers here commit to JSON.
//!
//! Failures in this layer (I/O, malformed input) carry their own
//! [`PersistError`] taxonomy, separate from the core's
//! [`crate::MakaiTrieError`].

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use tracing::debug;

use crate::mutable::MutableMakaiTrie;
use crate::query::TrieQuery;
use crate::trie::MakaiTrie;

/// Errors that can occur while reading or writing a trie.
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    /// The underlying file could not be opened, read, or written.
    #[error("trie file I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The stored data is not a flat array of strings.
    #[error("trie file format error: {0}")]
    Format(#[from] serde_json::Error),
}

/// Result type for persistence operations.
pub type PersistResult<T> = Result<T, PersistError>;

impl Serialize for MakaiTrie {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.every_string())
    }
}

impl Serialize for MutableMakaiTrie {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.every_string())
    }
}

impl<'de> Deserialize<'de> for MakaiTrie {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let strings = Vec::<String>::deserialize(deserializer)?;
        Ok(strings.into_iter().collect())
    }
}

impl<'de> Deserialize<'de> for MutableMakaiTrie {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let strings = Vec::<String>::deserialize(deserializer)?;
        Ok(strings.into_iter().collect())
    }
}

/// Reads a frozen trie from a JSON file containing an array of strings.
///
/// # Errors
///
/// Returns [`PersistError::Io`] if the file cannot be read, or
/// [`PersistError::Format`] if its contents are not a JSON array of strings
/// (a non-string element rejects the whole file).
pub fn read_trie<P: AsRef<Path>>(path: P) -> PersistResult<MakaiTrie> {
    let file = File::open(path.as_ref())?;
    let trie: MakaiTrie = serde_json::from_reader(BufReader::new(file))?;
    debug!(
        path = %path.as_ref().display(),
        len = trie.len(),
        "read trie from file"
    );
    Ok(trie)
}

/// Writes any trie view to a JSON file as an array of strings.
///
/// # Errors
///
/// Returns [`PersistError::Io`] if the file cannot be created or written.
pub fn write_trie<P: AsRef<Path>, T: TrieQuery + Serialize>(path: P, trie: &T) -> PersistResult<()> {
    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, trie)?;
    // An explicit flush so buffered write errors surface here instead of
    // being discarded by the BufWriter drop.
    writer.flush()?;
    debug!(
        path = %path.as_ref().display(),
        len = trie.len(),
        "wrote trie to file"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_as_string_array() {
        let trie = MakaiTrie::from_strings(&["b", "a"]);
        let json = serde_json::to_string(&trie).unwrap();
        assert_eq!(json, r#"["a","b"]"#);
    }

    #[test]
    fn test_deserialize_round_trip() {
        let original = MakaiTrie::from_strings(&["cat", "catalog", "dog"]);
        let json = serde_json::to_string(&original).unwrap();
        let rebuilt: MakaiTrie = serde_json::from_str(&json).unwrap();
        assert_eq!(original, rebuilt);
    }

    #[test]
    fn test_deserialize_mutable_view() {
        let mut trie: MutableMakaiTrie = serde_json::from_str(r#"["cat"]"#).unwrap();
        trie.insert("dog");
        assert_eq!(trie.len(), 2);
    }

    #[test]
    fn test_deserialize_rejects_non_string_element() {
        let result: Result<MakaiTrie, _> = serde_json::from_str(r#"["cat", 42]"#);
        assert!(result.is_err());
    }
}
