//! The mutable trie builder view.

use crate::engine::TrieEngine;
use crate::error::{MakaiTrieError, MakaiTrieResult};
use crate::query::{sealed, TrieQuery};
use crate::trie::MakaiTrie;

/// A mutable string set backed by a prefix tree.
///
/// `MutableMakaiTrie` layers mutation on top of the same engine the frozen
/// [`MakaiTrie`] reads from; every read operation comes from [`TrieQuery`]
/// and is shared between the two views. When the set is fully built, call
/// [`freeze`](Self::freeze) to hand out a read-only value.
///
/// # Examples
///
/// ```
/// use makai_trie::{MutableMakaiTrie, TrieQuery};
///
/// let mut trie = MutableMakaiTrie::new();
/// trie.insert("cat");
/// trie.insert("catalog");
/// trie.insert("dog");
///
/// assert_eq!(trie.remove_prefix("cat"), 2);
/// assert_eq!(trie.every_string(), vec!["dog"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MutableMakaiTrie {
    engine: TrieEngine,
}

impl MutableMakaiTrie {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds from a slice of strings. Duplicates collapse to a single
    /// stored entry.
    pub fn from_strings<S: AsRef<str>>(strings: &[S]) -> Self {
        let mut builder = Self::new();
        builder.add_strings(strings.iter().map(|s| s.as_ref()));
        builder
    }

    /// Builds from raw byte records, one stored string per record.
    ///
    /// # Errors
    ///
    /// Returns [`MakaiTrieError::InvalidInput`] at the first record that is
    /// not valid UTF-8; earlier records remain inserted.
    pub fn from_byte_records<I>(records: I) -> MakaiTrieResult<Self>
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
    {
        let mut builder = Self::new();
        builder.add_byte_records(records)?;
        Ok(builder)
    }

    /// Inserts a string, returning `true` iff it was not already present.
    ///
    /// Inserting a string that is already stored is a no-op; the count never
    /// double-counts. The empty string is a valid member.
    pub fn insert(&mut self, string: &str) -> bool {
        self.engine.insert(string)
    }

    /// Inserts one raw byte record.
    ///
    /// # Errors
    ///
    /// Returns [`MakaiTrieError::InvalidInput`] if the record is not valid
    /// UTF-8. The trie is unchanged in that case. With a single record there
    /// is no batch position to report, so the error's `index` is always 0.
    pub fn insert_bytes(&mut self, record: &[u8]) -> MakaiTrieResult<bool> {
        let string = std::str::from_utf8(record).map_err(|err| MakaiTrieError::InvalidInput {
            index: 0,
            reason: err.to_string(),
        })?;
        Ok(self.engine.insert(string))
    }

    /// Inserts every string from `strings`, returning how many were newly
    /// added.
    pub fn add_strings<I>(&mut self, strings: I) -> usize
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        strings
            .into_iter()
            .filter(|s| self.engine.insert(s.as_ref()))
            .count()
    }

    /// Inserts every byte record, returning how many were newly added.
    ///
    /// Not transactional: on error, records before the offending one remain
    /// inserted. Callers wanting all-or-nothing semantics validate up front.
    ///
    /// # Errors
    ///
    /// Returns [`MakaiTrieError::InvalidInput`] at the first record that is
    /// not valid UTF-8, carrying the record's index within the batch.
    pub fn add_byte_records<I>(&mut self, records: I) -> MakaiTrieResult<usize>
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
    {
        let mut added = 0;
        for (index, record) in records.into_iter().enumerate() {
            let string =
                std::str::from_utf8(record.as_ref()).map_err(|err| {
                    MakaiTrieError::InvalidInput {
                        index,
                        reason: err.to_string(),
                    }
                })?;
            if self.engine.insert(string) {
                added += 1;
            }
        }
        Ok(added)
    }

    /// Inserts every string stored in `other`, returning how many were newly
    /// added. `other` may be either view.
    pub fn add_trie<T: TrieQuery>(&mut self, other: &T) -> usize {
        let mut added = 0;
        other.for_each(|s| {
            if self.engine.insert(s) {
                added += 1;
            }
            std::ops::ControlFlow::Continue(())
        });
        added
    }

    /// Removes a string, returning `true` iff it was present.
    ///
    /// Only the exact string goes away: stored extensions of it survive, and
    /// the dead branch left behind is pruned immediately.
    pub fn remove(&mut self, string: &str) -> bool {
        self.engine.remove(string)
    }

    /// Removes every stored string.
    pub fn clear(&mut self) {
        self.engine.clear();
    }

    /// Removes every string beginning with `prefix`, returning how many were
    /// removed. An empty prefix clears the whole set.
    pub fn remove_prefix(&mut self, prefix: &str) -> usize {
        self.engine.remove_prefix(prefix)
    }

    /// Freezes the builder into a read-only [`MakaiTrie`]. Consumes the
    /// builder; no copy is made.
    pub fn freeze(self) -> MakaiTrie {
        MakaiTrie::from_engine(self.engine)
    }

    pub(crate) fn from_engine(engine: TrieEngine) -> Self {
        Self { engine }
    }
}

impl sealed::Sealed for MutableMakaiTrie {
    fn engine(&self) -> &TrieEngine {
        &self.engine
    }
}

impl<S: AsRef<str>> FromIterator<S> for MutableMakaiTrie {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut builder = Self::new();
        builder.add_strings(iter);
        builder
    }
}

impl<S: AsRef<str>> Extend<S> for MutableMakaiTrie {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.add_strings(iter);
    }
}

impl From<MakaiTrie> for MutableMakaiTrie {
    fn from(trie: MakaiTrie) -> Self {
        trie.thaw()
    }
}

impl PartialEq for MutableMakaiTrie {
    fn eq(&self, other: &Self) -> bool {
        self.is_equal_to(other)
    }
}

impl Eq for MutableMakaiTrie {}

impl PartialEq<MakaiTrie> for MutableMakaiTrie {
    fn eq(&self, other: &MakaiTrie) -> bool {
        self.is_equal_to(other)
    }
}
