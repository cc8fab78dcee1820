//! Cursors and iterators over the keys of a trie.
//!
//! A `Cursor` is a position in the ordered key sequence: either a key node or
//! the end position. `Iter` walks the half-open range between two cursors from
//! either side. Both borrow the trie, so it cannot change underneath them.

use std::fmt;
use std::iter::FusedIterator;

use crate::arena::{NodeId, ROOT};
use crate::Trie;

/// A position in a trie's ordered key sequence.
///
/// The end cursor sits one past the last key. Two cursors are equal when they
/// belong to the same trie and point at the same position.
#[derive(Clone, Copy)]
pub struct Cursor<'a> {
    pub(crate) trie: &'a Trie,
    pub(crate) node: Option<NodeId>,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(trie: &'a Trie, node: Option<NodeId>) -> Self {
        Cursor { trie, node }
    }

    /// Returns `true` unless this is the end cursor.
    pub fn is_valid(&self) -> bool {
        self.node.is_some()
    }

    /// Rebuilds the key at this position, `None` at the end.
    pub fn key(&self) -> Option<String> {
        self.node.map(|id| self.trie.arena.underlying_string(id))
    }

    /// Number of keys in the subtree at this position, this key included.
    pub fn subtree_len(&self) -> usize {
        self.node.map_or(0, |id| self.trie.arena.key_count(id))
    }

    /// Advances to the next key; the end cursor stays at the end.
    pub fn move_next(&mut self) {
        if let Some(id) = self.node {
            self.node = successor(self.trie, id);
        }
    }

    /// Steps back to the previous key. From the end cursor this lands on the
    /// last key; at the first key it moves to the end position.
    pub fn move_prev(&mut self) {
        self.node = match self.node {
            Some(id) => self.trie.arena.prev_node(id),
            None => last(self.trie),
        };
    }
}

/// Next key in traversal order.
fn successor(trie: &Trie, id: NodeId) -> Option<NodeId> {
    let arena = &trie.arena;
    if arena[id].is_leaf() {
        arena.next_node(id)
    } else {
        arena.first_key(id)
    }
}

/// Last key of the whole trie.
fn last(trie: &Trie) -> Option<NodeId> {
    let arena = &trie.arena;
    arena
        .last_key(ROOT)
        .or_else(|| Some(ROOT).filter(|&root| arena[root].is_end))
}

impl PartialEq for Cursor<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.trie, other.trie) && self.node == other.node
    }
}

impl Eq for Cursor<'_> {}

impl fmt::Debug for Cursor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.key() {
            Some(key) => f.debug_tuple("Cursor").field(&key).finish(),
            None => f.write_str("Cursor(end)"),
        }
    }
}

/// A double-ended iterator over the keys in a cursor range.
///
/// Produced by [`Trie::iter`] and [`Trie::iter_prefix`].
#[derive(Clone)]
pub struct Iter<'a> {
    trie: &'a Trie,
    /// Next key to yield from the front
    front: Option<NodeId>,
    /// One past the next key to yield from the back
    back: Option<NodeId>,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(begin: Cursor<'a>, end: Cursor<'a>) -> Self {
        debug_assert!(std::ptr::eq(begin.trie, end.trie));
        Iter {
            trie: begin.trie,
            front: begin.node,
            back: end.node,
        }
    }
}

impl Iterator for Iter<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let id = self.front?;
        if self.front == self.back {
            return None;
        }
        self.front = successor(self.trie, id);
        Some(self.trie.arena.underlying_string(id))
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<String> {
        // An empty range may still carry a valid end position
        self.front?;
        if self.front == self.back {
            return None;
        }
        let id = match self.back {
            Some(id) => self.trie.arena.prev_node(id)?,
            None => last(self.trie)?,
        };
        self.back = Some(id);
        Some(self.trie.arena.underlying_string(id))
    }
}

impl FusedIterator for Iter<'_> {}
