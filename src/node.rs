//! Node implementation for the Makai Trie.
//!
//! Nodes are the fundamental building blocks of the trie. Each node represents
//! one character position along some stored string and exclusively owns its
//! children, so dropping a node drops its entire subtree.

use std::collections::{btree_map, BTreeMap};
use std::mem;

/// A node in the Makai Trie.
///
/// Each node represents a character in a key path. Terminal nodes mark the end
/// of a complete stored string. `BTreeMap` keeps siblings in ascending
/// character order, which makes every traversal deterministic.
#[derive(Debug, Default)]
pub(crate) struct TrieNode {
    /// Map of characters to child nodes, in character-code order.
    pub children: BTreeMap<char, TrieNode>,

    /// Whether this node represents the end of a stored string.
    pub is_terminal: bool,
}

impl TrieNode {
    /// Creates a new empty trie node.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether this node holds neither a string end nor any subtree.
    ///
    /// Such a node is garbage under the pruning invariant; callers remove it
    /// from its parent as soon as this becomes true.
    pub fn is_dead(&self) -> bool {
        !self.is_terminal && self.children.is_empty()
    }
}

impl Clone for TrieNode {
    /// Deep clone with an explicit frame stack, like every other full-tree
    /// operation in the crate, so cloning a chain as deep as the longest
    /// stored string cannot overflow the call stack.
    fn clone(&self) -> Self {
        fn shallow(node: &TrieNode) -> TrieNode {
            TrieNode {
                children: BTreeMap::new(),
                is_terminal: node.is_terminal,
            }
        }

        // One open frame per source node: its remaining siblings, the key it
        // folds into its parent under, and the clone assembled so far.
        let mut frames: Vec<(btree_map::Iter<'_, char, TrieNode>, char, TrieNode)> = Vec::new();
        let mut current = (self.children.iter(), '\0', shallow(self));
        loop {
            match current.0.next() {
                Some((&key, child)) => {
                    frames.push(current);
                    current = (child.children.iter(), key, shallow(child));
                }
                None => match frames.pop() {
                    Some(mut parent) => {
                        parent.2.children.insert(current.1, current.2);
                        current = parent;
                    }
                    // The root frame closed; its placeholder key is unused.
                    None => return current.2,
                },
            }
        }
    }
}

impl Drop for TrieNode {
    /// Flattens the subtree before the compiler-generated drop glue runs, so
    /// releasing a node chain as deep as the longest stored string cannot
    /// overflow the call stack.
    fn drop(&mut self) {
        if self.children.is_empty() {
            return;
        }
        let mut pending = vec![mem::take(&mut self.children)];
        while let Some(map) = pending.pop() {
            for (_, mut child) in map {
                if !child.children.is_empty() {
                    pending.push(mem::take(&mut child.children));
                }
                // child drops here with no children left to recurse into
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_node_is_dead() {
        let node = TrieNode::new();
        assert!(node.is_dead());
        assert!(!node.is_terminal);
        assert!(node.children.is_empty());
    }

    #[test]
    fn test_terminal_node_is_not_dead() {
        let mut node = TrieNode::new();
        node.is_terminal = true;
        assert!(!node.is_dead());
    }

    #[test]
    fn test_node_with_child_is_not_dead() {
        let mut node = TrieNode::new();
        node.children.insert('a', TrieNode::new());
        assert!(!node.is_dead());
    }

    /// Builds a chain of `depth` single-child nodes ending in a terminal.
    fn chain(depth: usize) -> TrieNode {
        let mut node = TrieNode::new();
        node.is_terminal = true;
        for _ in 0..depth {
            let mut parent = TrieNode::new();
            parent.children.insert('a', node);
            node = parent;
        }
        node
    }

    #[test]
    fn test_clone_copies_structure() {
        let mut node = TrieNode::new();
        node.is_terminal = true;
        let mut child = TrieNode::new();
        child.is_terminal = true;
        child.children.insert('x', chain(0));
        node.children.insert('a', child);
        node.children.insert('b', chain(0));

        let cloned = node.clone();
        assert!(cloned.is_terminal);
        assert_eq!(cloned.children.len(), 2);
        let a = &cloned.children[&'a'];
        assert!(a.is_terminal);
        assert!(a.children[&'x'].is_terminal);
        assert!(cloned.children[&'b'].is_terminal);
    }

    #[test]
    fn test_cloning_deep_chain_does_not_recurse() {
        let node = chain(500_000);
        let cloned = node.clone();
        drop(node);

        // Spot-check that the clone kept the full chain.
        let mut depth = 0usize;
        let mut cursor = &cloned;
        while let Some(child) = cursor.children.get(&'a') {
            depth += 1;
            cursor = child;
        }
        assert_eq!(depth, 500_000);
        assert!(cursor.is_terminal);
    }

    #[test]
    fn test_dropping_deep_chain_does_not_recurse() {
        drop(chain(500_000));
    }
}
