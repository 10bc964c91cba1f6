//! Makai Trie
//!
//! A string-set container backed by a prefix tree (trie). It offers set
//! semantics (unique membership, no duplicate storage) plus the prefix
//! queries a hash set cannot answer efficiently: "does any stored string
//! begin with X?" and "give me every stored string beginning with X."
//!
//! # Architecture
//!
//! The crate is a single engine behind two views:
//! - [`MutableMakaiTrie`] builds and edits the set;
//! - [`MakaiTrie`] is the frozen, read-only value a builder
//!   [`freeze`](MutableMakaiTrie::freeze)s into;
//! - [`TrieQuery`] is the sealed read capability both views share, so every
//!   query algorithm exists exactly once.
//!
//! Traversal order is deterministic (siblings in ascending character order),
//! removal prunes dead branches eagerly, and the stored-string count is
//! maintained in O(1). Traversals use explicit stacks, so pathologically
//! long strings cannot overflow the call stack.
//!
//! The container is single-threaded by design: values are plain owned data
//! (freely `Send`), and callers sharing one instance across threads must
//! serialize access themselves.
//!
//! # Example
//!
//! ```
//! use std::ops::ControlFlow;
//! use makai_trie::{MakaiTrie, MutableMakaiTrie, TrieQuery};
//!
//! let mut builder = MutableMakaiTrie::new();
//! builder.add_strings(["apple", "app", "apply", "banana"]);
//! builder.remove("banana");
//!
//! let trie: MakaiTrie = builder.freeze();
//! assert_eq!(trie.every_string_with_prefix("app"), vec!["app", "apple", "apply"]);
//!
//! // Enumeration can stop early.
//! let mut first = None;
//! trie.for_each(|s| {
//!     first = Some(s.to_owned());
//!     ControlFlow::Break(())
//! });
//! assert_eq!(first.as_deref(), Some("app"));
//! ```
//!
//! # Persistence
//!
//! The core never learns a storage format. Both views serialize as a flat
//! array of strings via serde, and [`persist`] adds JSON file helpers on
//! top. See [`persist::read_trie`] and [`persist::write_trie`].

mod engine;
mod error;
mod mutable;
mod node;
mod query;
mod trie;

pub mod persist;

pub use error::{MakaiTrieError, MakaiTrieResult};
pub use mutable::MutableMakaiTrie;
pub use query::TrieQuery;
pub use trie::MakaiTrie;

/// Version of the Makai Trie crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
