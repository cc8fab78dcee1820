//! Match engine: the three downward walks every trie operation is built from.
//!
//! Each walk follows at most one child per level. Because no two siblings
//! share a first character, the candidate child at a level can be found with
//! a single ordered range lookup on the label map.

use std::ops::Bound;

use crate::arena::{Arena, NodeId};
use crate::util::first_char;

impl Arena {
    /// Finds the child of `id` whose label is a prefix of `key`.
    ///
    /// Such a label is `<= key`, and any other label between it and `key`
    /// would have to share its first character, so the greatest label not
    /// exceeding `key` is the only candidate.
    fn child_prefixing(&self, id: NodeId, key: &str) -> Option<(&str, NodeId)> {
        let (label, &child) = self[id]
            .children
            .range::<str, _>((Bound::Unbounded, Bound::Included(key)))
            .next_back()?;
        if key.starts_with(label.as_str()) {
            Some((label, child))
        } else {
            None
        }
    }

    /// Returns the deepest node reachable from `id` by consuming child labels
    /// off the front of `key`, along with the unconsumed rest of `key`.
    pub fn approximate_match<'k>(&self, mut id: NodeId, mut key: &'k str) -> (NodeId, &'k str) {
        while !key.is_empty() {
            match self.child_prefixing(id, key) {
                Some((label, child)) => {
                    key = &key[label.len()..];
                    id = child;
                }
                None => break,
            }
        }
        (id, key)
    }

    /// Returns the prefix root for `prefix`: the node whose subtree holds
    /// exactly the keys starting with `prefix`.
    pub fn prefix_match(&self, id: NodeId, prefix: &str) -> Option<NodeId> {
        let (node, rest) = self.approximate_match(id, prefix);
        if rest.is_empty() {
            return Some(node);
        }

        // The smallest label >= rest is the only one that can extend it
        let (label, &child) = self[node]
            .children
            .range::<str, _>((Bound::Included(rest), Bound::Unbounded))
            .next()?;
        if label.starts_with(rest) {
            Some(child)
        } else {
            None
        }
    }

    /// Returns the node spelling exactly `word`, whether or not it is a key.
    pub fn exact_match(&self, id: NodeId, word: &str) -> Option<NodeId> {
        match self.approximate_match(id, word) {
            (node, "") => Some(node),
            _ => None,
        }
    }

    /// Finds the child of `id` whose label starts with the same character as `key`.
    pub fn child_sharing_first_char(&self, id: NodeId, key: &str) -> Option<(&str, NodeId)> {
        let first = first_char(key);
        if first.is_empty() {
            return None;
        }
        let (label, &child) = self[id]
            .children
            .range::<str, _>((Bound::Included(first), Bound::Unbounded))
            .next()?;
        if label.starts_with(first) {
            Some((label, child))
        } else {
            None
        }
    }

    /// Finds the first child of `id` that sorts after every key starting with
    /// `rest`: its label is greater than `rest` and does not extend it.
    pub fn first_child_after(&self, id: NodeId, rest: &str) -> Option<NodeId> {
        self[id]
            .children
            .range::<str, _>((Bound::Excluded(rest), Bound::Unbounded))
            .find(|(label, _)| !label.starts_with(rest))
            .map(|(_, &child)| child)
    }
}
