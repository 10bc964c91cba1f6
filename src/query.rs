//! Shared read capability for the Makai Trie views.
//!
//! [`TrieQuery`] is the read-only interface implemented by both the frozen
//! [`crate::MakaiTrie`] and the [`crate::MutableMakaiTrie`] builder. It is
//! sealed: every method is a default that delegates to the one engine, so the
//! two views cannot drift apart and downstream crates cannot implement it.

use std::ops::ControlFlow;

pub(crate) mod sealed {
    use crate::engine::TrieEngine;

    pub trait Sealed {
        fn engine(&self) -> &TrieEngine;
    }
}

/// Read operations over a trie-backed string set.
///
/// All queries are total: asking about a string or prefix the set does not
/// contain returns `false` or an empty collection, never an error.
pub trait TrieQuery: sealed::Sealed {
    /// Number of stored strings. O(1).
    fn len(&self) -> usize {
        self.engine().len()
    }

    /// Whether no strings are stored.
    fn is_empty(&self) -> bool {
        self.engine().is_empty()
    }

    /// Whether `string` itself is stored. Matching is by `char` equality;
    /// a stored extension of `string` does not count.
    fn contains(&self, string: &str) -> bool {
        self.engine().contains(string)
    }

    /// Whether at least one stored string begins with `prefix`.
    ///
    /// The empty prefix matches every stored string, so it returns `true`
    /// exactly when the set is non-empty.
    fn contains_prefix(&self, prefix: &str) -> bool {
        self.engine().contains_prefix(prefix)
    }

    /// Visits every stored string in depth-first order, siblings in
    /// ascending character order. Return [`ControlFlow::Break`] from the
    /// visitor to stop immediately.
    fn for_each<F>(&self, visit: F)
    where
        F: FnMut(&str) -> ControlFlow<()>,
    {
        self.engine().for_each_with_prefix("", visit);
    }

    /// Like [`Self::for_each`], but restricted to strings beginning with
    /// `prefix`. A prefix with no matches visits nothing.
    fn for_each_with_prefix<F>(&self, prefix: &str, visit: F)
    where
        F: FnMut(&str) -> ControlFlow<()>,
    {
        self.engine().for_each_with_prefix(prefix, visit);
    }

    /// Every stored string, one entry each, in traversal order.
    fn every_string(&self) -> Vec<String> {
        self.engine().strings_with_prefix("")
    }

    /// Every stored string beginning with `prefix`, one entry each.
    fn every_string_with_prefix(&self, prefix: &str) -> Vec<String> {
        self.engine().strings_with_prefix(prefix)
    }

    /// Every stored string for which `test` returns `true`.
    fn strings_passing<F>(&self, test: F) -> Vec<String>
    where
        F: FnMut(&str) -> bool,
    {
        self.strings_with_prefix_passing("", test)
    }

    /// Every stored string beginning with `prefix` for which `test` returns
    /// `true`.
    fn strings_with_prefix_passing<F>(&self, prefix: &str, mut test: F) -> Vec<String>
    where
        F: FnMut(&str) -> bool,
    {
        let mut out = Vec::new();
        self.engine().for_each_with_prefix(prefix, |s| {
            if test(s) {
                out.push(s.to_owned());
            }
            ControlFlow::Continue(())
        });
        out
    }

    /// Whether both sets contain exactly the same strings, irrespective of
    /// how either was built or which view wraps it.
    fn is_equal_to<T>(&self, other: &T) -> bool
    where
        T: TrieQuery + ?Sized,
    {
        self.engine().set_eq(other.engine())
    }
}

impl<T: sealed::Sealed> TrieQuery for T {}
