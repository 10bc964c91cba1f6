// Copyright (c) 2025 Makai Trie Authors
//
// Licensed under the MIT License (LICENSE or https://opensource.org/licenses/MIT)

//! Error types for the Makai Trie.
//!
//! The core engine has exactly one failure mode: an insertion source that is
//! not representable as a character sequence. Queries are total functions and
//! never fail. Persistence failures live in their own taxonomy, see
//! [`crate::persist::PersistError`].

/// Errors that can occur in Makai Trie operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum MakaiTrieError {
    /// A bulk-construction or insertion source supplied an element that is
    /// not a valid character sequence (for byte records: not valid UTF-8).
    ///
    /// Batch operations are not transactional: elements inserted before the
    /// offending one remain in the trie when this error is returned.
    #[error("input element at index {index} is not a valid character sequence: {reason}")]
    InvalidInput {
        /// Zero-based position of the offending element within its batch.
        index: usize,
        /// Human-readable description of why the element was rejected.
        reason: String,
    },
}

/// Result type for Makai Trie operations.
pub type MakaiTrieResult<T> = Result<T, MakaiTrieError>;
