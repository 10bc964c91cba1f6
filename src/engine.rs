//! Core trie engine for the Makai Trie.
//!
//! The engine owns the node tree and the maintained string count, and
//! implements every algorithm in the crate: insertion, removal with eager
//! pruning, prefix walks, cancellable enumeration, and set equality. The
//! public views in [`crate::trie`] and [`crate::mutable`] delegate here and
//! add no algorithms of their own.

use std::collections::btree_map;
use std::ops::ControlFlow;

use tracing::{debug, trace};

use crate::node::TrieNode;

/// The trie proper: an exclusively owned node tree plus the number of stored
/// strings, kept in lockstep by every mutation.
///
/// Traversals iterate with explicit stacks rather than native recursion, so
/// the longest stored string bounds heap usage, not call-stack depth.
#[derive(Debug, Clone, Default)]
pub(crate) struct TrieEngine {
    /// Root node, a sentinel for the empty prefix. The root being terminal
    /// means the empty string is stored.
    root: TrieNode,

    /// Number of stored strings. Always equals the number of reachable
    /// terminal nodes.
    len: usize,
}

impl TrieEngine {
    /// Creates an empty engine.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored strings. O(1).
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no strings are stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts a string, returning `true` iff it was not already present.
    ///
    /// Walks from the root, creating a child per character as needed, and
    /// marks the final node terminal. Inserting the empty string marks the
    /// root itself. Re-inserting an existing string is a no-op.
    pub fn insert(&mut self, string: &str) -> bool {
        let mut node = &mut self.root;
        for c in string.chars() {
            node = node.children.entry(c).or_default();
        }
        let newly_inserted = !node.is_terminal;
        node.is_terminal = true;
        if newly_inserted {
            self.len += 1;
            trace!(string, len = self.len, "inserted new string");
        }
        newly_inserted
    }

    /// Removes a string, returning `true` iff it was present.
    ///
    /// Unmarks the terminal node and then prunes: the chain of nodes left
    /// with no children and no terminal mark is detached from the deepest
    /// ancestor that must survive, in a single map removal.
    pub fn remove(&mut self, string: &str) -> bool {
        let path: Vec<char> = string.chars().collect();

        // First pass, read-only: confirm the path ends at a terminal node
        // and locate the deepest ancestor that survives pruning (the root,
        // a terminal node, or a node with a sibling branch).
        let mut anchor = 0usize;
        {
            let mut node = &self.root;
            for (depth, c) in path.iter().enumerate() {
                let Some(child) = node.children.get(c) else {
                    return false;
                };
                if depth + 1 < path.len() && (child.is_terminal || child.children.len() > 1) {
                    anchor = depth + 1;
                }
                node = child;
            }
            if !node.is_terminal {
                return false;
            }
        }

        // Second pass, mutating: unmark, then detach the chain below the
        // anchor if the leaf died. The root is never detached.
        let mut detach = false;
        if let Some(node) = self.node_mut(&path) {
            node.is_terminal = false;
            detach = !path.is_empty() && node.is_dead();
        }
        if detach {
            if let Some(node) = self.node_mut(&path[..anchor]) {
                node.children.remove(&path[anchor]);
            }
        }
        self.len -= 1;
        trace!(string, len = self.len, "removed string");
        true
    }

    /// Removes every stored string. The old tree is dropped in one cascade.
    pub fn clear(&mut self) {
        let removed = self.len;
        self.root = TrieNode::new();
        self.len = 0;
        if removed > 0 {
            debug!(removed, "cleared trie");
        }
    }

    /// Removes every string beginning with `prefix`, returning how many were
    /// removed.
    ///
    /// Detaches the subtree rooted at the prefix node with a single map
    /// removal at the deepest surviving ancestor; the count decrement comes
    /// from a terminal scan of the subtree performed during the detach walk.
    /// An empty prefix clears the whole trie.
    pub fn remove_prefix(&mut self, prefix: &str) -> usize {
        if prefix.is_empty() {
            let removed = self.len;
            self.clear();
            return removed;
        }

        let path: Vec<char> = prefix.chars().collect();
        let mut anchor = 0usize;
        let removed = {
            let mut node = &self.root;
            for (depth, c) in path.iter().enumerate() {
                let Some(child) = node.children.get(c) else {
                    return 0;
                };
                if depth + 1 < path.len() && (child.is_terminal || child.children.len() > 1) {
                    anchor = depth + 1;
                }
                node = child;
            }
            Self::terminal_count(node)
        };

        if let Some(node) = self.node_mut(&path[..anchor]) {
            node.children.remove(&path[anchor]);
        }
        self.len -= removed;
        debug!(prefix, removed, len = self.len, "removed strings by prefix");
        removed
    }

    /// Whether `string` is stored: the full path exists and ends terminal.
    /// O(length of string).
    pub fn contains(&self, string: &str) -> bool {
        self.node(string).is_some_and(|node| node.is_terminal)
    }

    /// Whether at least one stored string begins with `prefix`.
    ///
    /// Every non-root node guards at least one string under the pruning
    /// invariant, so a successful walk suffices. The empty prefix is a
    /// prefix of every string, hence true exactly when the trie is
    /// non-empty; in particular it is `false` on an empty trie.
    pub fn contains_prefix(&self, prefix: &str) -> bool {
        if prefix.is_empty() {
            return self.len > 0;
        }
        self.node(prefix).is_some()
    }

    /// Visits every stored string beginning with `prefix`, in depth-first
    /// pre-order with siblings in ascending character order.
    ///
    /// Each visit reconstructs the string into a shared scratch buffer and
    /// hands it to `visit`; returning [`ControlFlow::Break`] stops the walk
    /// immediately. A prefix with no matches visits nothing.
    pub fn for_each_with_prefix<F>(&self, prefix: &str, mut visit: F)
    where
        F: FnMut(&str) -> ControlFlow<()>,
    {
        let Some(start) = self.node(prefix) else {
            return;
        };
        let mut buf = String::with_capacity(prefix.len() + 16);
        buf.push_str(prefix);
        let _ = Self::walk(start, &mut buf, &mut visit);
    }

    /// Collects every stored string beginning with `prefix`.
    pub fn strings_with_prefix(&self, prefix: &str) -> Vec<String> {
        let mut out = Vec::new();
        self.for_each_with_prefix(prefix, |s| {
            out.push(s.to_owned());
            ControlFlow::Continue(())
        });
        out
    }

    /// Whether both engines store exactly the same set of strings.
    ///
    /// Counts are compared first as a cheap short-circuit. The pruning
    /// invariant makes tree shape canonical for a given string set, so the
    /// remaining check is a synchronized structural walk, again with an
    /// explicit stack.
    pub fn set_eq(&self, other: &TrieEngine) -> bool {
        if self.len != other.len {
            return false;
        }
        let mut stack = vec![(&self.root, &other.root)];
        while let Some((lhs, rhs)) = stack.pop() {
            if lhs.is_terminal != rhs.is_terminal || lhs.children.len() != rhs.children.len() {
                return false;
            }
            for ((lc, lnode), (rc, rnode)) in lhs.children.iter().zip(rhs.children.iter()) {
                if lc != rc {
                    return false;
                }
                stack.push((lnode, rnode));
            }
        }
        true
    }

    /// Walks the path for `key`, returning the node it ends at, if any.
    fn node(&self, key: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for c in key.chars() {
            node = node.children.get(&c)?;
        }
        Some(node)
    }

    /// Mutable variant of [`Self::node`] over an already-decomposed path.
    fn node_mut(&mut self, path: &[char]) -> Option<&mut TrieNode> {
        let mut node = &mut self.root;
        for c in path {
            node = node.children.get_mut(c)?;
        }
        Some(node)
    }

    /// Depth-first walk from `start`, reconstructing strings into `buf`.
    ///
    /// The stack holds one sibling iterator per open node, so traversal
    /// depth never touches the call stack. `buf` arrives holding the prefix
    /// and always leaves holding it again, one popped char per closed frame.
    fn walk(
        start: &TrieNode,
        buf: &mut String,
        visit: &mut impl FnMut(&str) -> ControlFlow<()>,
    ) -> ControlFlow<()> {
        if start.is_terminal {
            visit(buf)?;
        }
        let mut stack: Vec<btree_map::Iter<'_, char, TrieNode>> = vec![start.children.iter()];
        while let Some(siblings) = stack.last_mut() {
            match siblings.next() {
                Some((&c, child)) => {
                    buf.push(c);
                    if child.is_terminal {
                        visit(buf)?;
                    }
                    stack.push(child.children.iter());
                }
                None => {
                    stack.pop();
                    if !stack.is_empty() {
                        buf.pop();
                    }
                }
            }
        }
        ControlFlow::Continue(())
    }

    /// Number of terminal nodes in the subtree rooted at `start`, the root
    /// included.
    fn terminal_count(start: &TrieNode) -> usize {
        let mut count = usize::from(start.is_terminal);
        let mut stack: Vec<&TrieNode> = start.children.values().collect();
        while let Some(node) = stack.pop() {
            count += usize::from(node.is_terminal);
            stack.extend(node.children.values());
        }
        count
    }
}
