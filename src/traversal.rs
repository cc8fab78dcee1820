//! In-order traversal driven purely by parent links.
//!
//! Keys come out in lexicographic order because a node's own key sorts before
//! every key below it and siblings are visited in label order. Moving to the
//! successor or predecessor never needs a stack: it climbs parent links until a
//! sibling exists on the requested side, then descends into that sibling.

use std::ops::Bound;

use crate::arena::{Arena, NodeId};

impl Arena {
    /// Number of keys stored at or under `id`.
    pub fn key_count(&self, id: NodeId) -> usize {
        let node = &self[id];
        let own = if node.is_end { 1 } else { 0 };
        own + node
            .children
            .values()
            .map(|&child| self.key_count(child))
            .sum::<usize>()
    }

    /// First key strictly below `id`, `None` if `id` has no children.
    pub fn first_key(&self, id: NodeId) -> Option<NodeId> {
        let mut current = *self[id].children.values().next()?;
        while !self[current].is_end {
            // A non-end node always has children
            current = *self[current].children.values().next()?;
        }
        Some(current)
    }

    /// Last key strictly below `id`, `None` if `id` has no children.
    ///
    /// This is the rightmost leaf, and every leaf is a key.
    pub fn last_key(&self, id: NodeId) -> Option<NodeId> {
        let mut current = *self[id].children.values().next_back()?;
        while let Some(&child) = self[current].children.values().next_back() {
            current = child;
        }
        Some(current)
    }

    /// Label under which `id` hangs off `parent`.
    fn label_under(&self, parent: NodeId, id: NodeId) -> &str {
        match self[parent].label_of(id) {
            Some(label) => label,
            None => panic!("node {} is not a child of its parent", id.index()),
        }
    }

    /// First key after the whole subtree of `id`.
    pub fn next_node(&self, id: NodeId) -> Option<NodeId> {
        let mut current = id;
        loop {
            let parent = self[current].parent?;
            let label = self.label_under(parent, current);
            let next = self[parent]
                .children
                .range::<str, _>((Bound::Excluded(label), Bound::Unbounded))
                .next();
            match next {
                Some((_, &sibling)) if self[sibling].is_end => return Some(sibling),
                Some((_, &sibling)) => return self.first_key(sibling),
                None => current = parent,
            }
        }
    }

    /// Last key before `id` in traversal order.
    pub fn prev_node(&self, id: NodeId) -> Option<NodeId> {
        let mut current = id;
        loop {
            let parent = self[current].parent?;
            let label = self.label_under(parent, current);
            let prev = self[parent]
                .children
                .range::<str, _>((Bound::Unbounded, Bound::Excluded(label)))
                .next_back();
            if let Some((_, &sibling)) = prev {
                return Some(self.last_key(sibling).unwrap_or(sibling));
            }
            if self[parent].is_end {
                return Some(parent);
            }
            current = parent;
        }
    }

    /// Rebuilds the key spelled by the path from the root to `id`.
    pub fn underlying_string(&self, id: NodeId) -> String {
        let mut labels = Vec::new();
        let mut current = id;
        while let Some(parent) = self[current].parent {
            labels.push(self.label_under(parent, current));
            current = parent;
        }

        let mut key = String::with_capacity(labels.iter().map(|l| l.len()).sum());
        for label in labels.into_iter().rev() {
            key.push_str(label);
        }
        key
    }
}

#[cfg(test)]
mod tests {
    use crate::arena::{Arena, ROOT};

    /// Keys: "", "a", "ab", "ac", "b"
    fn sample() -> Arena {
        let mut arena = Arena::new();
        arena[ROOT].is_end = true;
        let a = arena.attach_leaf(ROOT, "a");
        arena.attach_leaf(a, "b");
        arena.attach_leaf(a, "c");
        arena.attach_leaf(ROOT, "b");
        arena
    }

    fn walk_forward(arena: &Arena) -> Vec<String> {
        let mut out = vec![arena.underlying_string(ROOT)];
        let mut current = arena.first_key(ROOT);
        while let Some(id) = current {
            out.push(arena.underlying_string(id));
            current = if arena[id].is_leaf() {
                arena.next_node(id)
            } else {
                arena.first_key(id)
            };
        }
        out
    }

    #[test]
    fn test_key_count() {
        let arena = sample();
        let a = arena[ROOT].children["a"];

        assert_eq!(arena.key_count(ROOT), 5);
        assert_eq!(arena.key_count(a), 3);
    }

    #[test]
    fn test_first_and_last_key() {
        let arena = sample();
        let a = arena[ROOT].children["a"];
        let b = arena[ROOT].children["b"];

        assert_eq!(arena.first_key(ROOT), Some(a));
        assert_eq!(arena.last_key(ROOT), Some(b));
        assert_eq!(arena.first_key(b), None);
        assert_eq!(arena.last_key(b), None);
    }

    #[test]
    fn test_forward_walk() {
        assert_eq!(walk_forward(&sample()), vec!["", "a", "ab", "ac", "b"]);
    }

    #[test]
    fn test_prev_node() {
        let arena = sample();
        let a = arena[ROOT].children["a"];
        let ab = arena[a].children["b"];
        let ac = arena[a].children["c"];
        let b = arena[ROOT].children["b"];

        assert_eq!(arena.prev_node(b), Some(ac));
        assert_eq!(arena.prev_node(ac), Some(ab));
        assert_eq!(arena.prev_node(ab), Some(a));
        assert_eq!(arena.prev_node(a), Some(ROOT));
        assert_eq!(arena.prev_node(ROOT), None);
    }

    #[test]
    fn test_next_node_skips_subtree() {
        let arena = sample();
        let a = arena[ROOT].children["a"];
        let b = arena[ROOT].children["b"];

        assert_eq!(arena.next_node(a), Some(b));
        assert_eq!(arena.next_node(b), None);
        assert_eq!(arena.next_node(ROOT), None);
    }

    #[test]
    fn test_underlying_string() {
        let arena = sample();
        let a = arena[ROOT].children["a"];
        let ac = arena[a].children["c"];

        assert_eq!(arena.underlying_string(ac), "ac");
        assert_eq!(arena.underlying_string(ROOT), "");
    }
}
