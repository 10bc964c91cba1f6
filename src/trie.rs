//! The frozen, read-only trie view.

use crate::engine::TrieEngine;
use crate::error::{MakaiTrieError, MakaiTrieResult};
use crate::mutable::MutableMakaiTrie;
use crate::query::{sealed, TrieQuery};

/// An immutable string set backed by a prefix tree.
///
/// `MakaiTrie` exposes only the read half of the trie: membership, prefix
/// queries, enumeration, and equality, all through [`TrieQuery`]. It is a
/// capability restriction over the same engine the mutable view drives, not
/// a second implementation; once built, a value is never mutated. Build one
/// directly from a batch of strings, or incrementally through
/// [`MutableMakaiTrie`] and [`MutableMakaiTrie::freeze`].
///
/// # Examples
///
/// ```
/// use makai_trie::{MakaiTrie, TrieQuery};
///
/// let trie: MakaiTrie = ["apple", "app", "apply", "banana"].into_iter().collect();
///
/// assert_eq!(trie.len(), 4);
/// assert!(trie.contains("app"));
/// assert!(trie.contains_prefix("ban"));
/// assert!(!trie.contains("ban"));
/// assert_eq!(
///     trie.every_string_with_prefix("app"),
///     vec!["app", "apple", "apply"]
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct MakaiTrie {
    engine: TrieEngine,
}

impl MakaiTrie {
    /// Creates an empty trie.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a trie from a slice of strings. Duplicates collapse to a
    /// single stored entry.
    pub fn from_strings<S: AsRef<str>>(strings: &[S]) -> Self {
        strings.iter().map(|s| s.as_ref()).collect()
    }

    /// Builds a trie from raw byte records, one stored string per record.
    ///
    /// This is the boundary constructor for callers whose source is not yet
    /// typed as strings (external adapters, deserialized blobs). A record
    /// that is not valid UTF-8 yields [`MakaiTrieError::InvalidInput`];
    /// records before it have already been inserted.
    ///
    /// # Errors
    ///
    /// Returns [`MakaiTrieError::InvalidInput`] at the first record that is
    /// not a valid character sequence.
    pub fn from_byte_records<I>(records: I) -> MakaiTrieResult<Self>
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
    {
        MutableMakaiTrie::from_byte_records(records).map(MutableMakaiTrie::freeze)
    }

    /// Reopens the set for mutation. Consumes the frozen value; no copy is
    /// made.
    pub fn thaw(self) -> MutableMakaiTrie {
        MutableMakaiTrie::from_engine(self.engine)
    }

    pub(crate) fn from_engine(engine: TrieEngine) -> Self {
        Self { engine }
    }
}

impl sealed::Sealed for MakaiTrie {
    fn engine(&self) -> &TrieEngine {
        &self.engine
    }
}

impl<S: AsRef<str>> FromIterator<S> for MakaiTrie {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut engine = TrieEngine::new();
        for s in iter {
            engine.insert(s.as_ref());
        }
        Self { engine }
    }
}

impl From<MutableMakaiTrie> for MakaiTrie {
    fn from(builder: MutableMakaiTrie) -> Self {
        builder.freeze()
    }
}

impl PartialEq for MakaiTrie {
    fn eq(&self, other: &Self) -> bool {
        self.is_equal_to(other)
    }
}

impl Eq for MakaiTrie {}

impl PartialEq<MutableMakaiTrie> for MakaiTrie {
    fn eq(&self, other: &MutableMakaiTrie) -> bool {
        self.is_equal_to(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_from_strings_collapses_duplicates() {
        let trie = MakaiTrie::from_strings(&["a", "b", "a", "c", "b"]);
        assert_eq!(trie.len(), 3);
        assert_eq!(trie.every_string(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_from_byte_records() {
        let trie = MakaiTrie::from_byte_records([&b"cat"[..], b"dog"]).unwrap();
        assert!(trie.contains("cat"));
        assert!(trie.contains("dog"));
    }

    #[test]
    fn test_from_byte_records_rejects_invalid_utf8() {
        let err = MakaiTrie::from_byte_records([&b"ok"[..], b"\xff\xfe"]).unwrap_err();
        assert!(matches!(err, MakaiTrieError::InvalidInput { index: 1, .. }));
    }

    #[test]
    fn test_thaw_and_refreeze() {
        let trie = MakaiTrie::from_strings(&["cat", "dog"]);
        let mut builder = trie.thaw();
        builder.insert("bird");
        let trie = builder.freeze();
        assert_eq!(trie.len(), 3);
        assert!(trie.contains("bird"));
    }

    #[test_case("app" => true)]
    #[test_case("apple" => true)]
    #[test_case("appl" => true; "non-terminal interior path")]
    #[test_case("apples" => false)]
    #[test_case("b" => false)]
    #[test_case("" => true; "empty prefix on non-empty trie")]
    fn test_contains_prefix(prefix: &str) -> bool {
        let trie = MakaiTrie::from_strings(&["app", "apple", "apply"]);
        trie.contains_prefix(prefix)
    }

    #[test]
    fn test_equality_across_views() {
        let frozen = MakaiTrie::from_strings(&["a", "b"]);
        let mut builder = MutableMakaiTrie::new();
        builder.insert("b");
        builder.insert("a");
        assert_eq!(frozen, builder);
    }
}
