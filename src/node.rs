//! Node storage unit of the trie.
//!
//! A `TrieNode` owns its children through the arena: each entry of `children`
//! maps an edge label to the `NodeId` of a node that is freed together with
//! its parent. The `parent` link is a plain id and never keeps anything alive.

use std::collections::BTreeMap;
use std::collections::HashSet;

use crate::arena::{Arena, NodeId, ROOT};
use crate::{Error, Violation};

/// Internal node type for the radix trie.
///
/// Children are kept in a `BTreeMap` so that walking them in map order visits
/// keys in lexicographic order.
#[derive(Debug, Clone, Default)]
pub(crate) struct TrieNode {
    /// Whether the path from the root to this node spells a member key
    pub is_end: bool,

    /// The node owning this one, `None` only for the root
    pub parent: Option<NodeId>,

    /// Child nodes indexed by their (non-empty) edge label
    pub children: BTreeMap<String, NodeId>,
}

impl TrieNode {
    /// Creates a new node with no children.
    pub fn new(is_end: bool, parent: Option<NodeId>) -> Self {
        TrieNode {
            is_end,
            parent,
            children: BTreeMap::new(),
        }
    }

    /// Returns whether this node is a leaf node (has no children)
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Finds the label under which `child` hangs off this node.
    pub fn label_of(&self, child: NodeId) -> Option<&str> {
        self.children
            .iter()
            .find(|&(_, &id)| id == child)
            .map(|(label, _)| label.as_str())
    }
}

impl Arena {
    /// Deep structural equality of the subtree at `id` in `self` and the
    /// subtree at `other_id` in `other`.
    pub(crate) fn subtree_eq(&self, id: NodeId, other: &Arena, other_id: NodeId) -> bool {
        let (a, b) = (&self[id], &other[other_id]);
        if a.is_end != b.is_end || a.children.len() != b.children.len() {
            return false;
        }

        a.children
            .iter()
            .zip(b.children.iter())
            .all(|((label_a, &child_a), (label_b, &child_b))| {
                label_a == label_b && self.subtree_eq(child_a, other, child_b)
            })
    }

    /// Walks the whole tree and reports the first structural rule it finds broken.
    pub(crate) fn check_invariants(&self) -> Result<(), Error> {
        if self[ROOT].parent.is_some() {
            return Err(Error::Invariant {
                node: ROOT.index(),
                violation: Violation::RootHasParent,
            });
        }

        let mut visited = 0usize;
        let mut stack = vec![ROOT];
        while let Some(id) = stack.pop() {
            visited += 1;
            let node = &self[id];
            let fail = |violation| Err(Error::Invariant { node: id.index(), violation });

            if id != ROOT {
                if node.is_leaf() && !node.is_end {
                    return fail(Violation::BareLeaf);
                }
                if !node.is_end && node.children.len() < 2 {
                    return fail(Violation::UnaryJunction);
                }
            }

            let mut seen = HashSet::new();
            for (label, &child) in &node.children {
                let first = match label.chars().next() {
                    Some(c) => c,
                    None => return fail(Violation::EmptyLabel),
                };
                if !seen.insert(first) {
                    return fail(Violation::SharedFirstChar(first));
                }
                if self[child].parent != Some(id) {
                    return fail(Violation::ParentMismatch);
                }
                stack.push(child);
            }
        }

        if visited != self.live() {
            return Err(Error::Invariant {
                node: ROOT.index(),
                violation: Violation::Unreachable(self.live() - visited),
            });
        }

        Ok(())
    }
}
