//! Index-addressed storage for trie nodes.
//!
//! Nodes are stored contiguously in a `Vec` of slots and referenced by
//! `NodeId`. A parent owns its children by id: freeing a node frees the whole
//! subtree below it. Vacated slots go on a free list and are reused by later
//! allocations, so ids are stable for as long as the node they name is alive.

use std::ops::{Index, IndexMut};

use crate::node::TrieNode;

/// Handle to a node slot in an [`Arena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// The root is allocated first and never freed.
pub(crate) const ROOT: NodeId = NodeId(0);

#[derive(Debug, Clone)]
pub(crate) struct Arena {
    /// Slot storage; `None` marks a vacant slot listed in `free`
    slots: Vec<Option<TrieNode>>,

    /// Vacant slots available for reuse
    free: Vec<NodeId>,
}

impl Arena {
    /// Creates an arena holding only an unmarked root.
    pub fn new() -> Self {
        Arena {
            slots: vec![Some(TrieNode::new(false, None))],
            free: Vec::new(),
        }
    }

    /// Number of live nodes, the root included.
    pub fn live(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    fn alloc(&mut self, node: TrieNode) -> NodeId {
        match self.free.pop() {
            Some(id) => {
                self.slots[id.index()] = Some(node);
                id
            }
            None => {
                let id = NodeId(self.slots.len() as u32);
                self.slots.push(Some(node));
                id
            }
        }
    }

    /// Frees `id` and every node below it. The caller must already have
    /// unlinked `id` from its parent.
    fn free_subtree(&mut self, id: NodeId) {
        let mut stack = vec![id];
        while let Some(id) = stack.pop() {
            if let Some(node) = self.slots[id.index()].take() {
                stack.extend(node.children.into_values());
                self.free.push(id);
            }
        }
    }

    /// Drops every node except the root and unmarks the root.
    pub fn reset(&mut self) {
        self.slots.truncate(1);
        self.free.clear();
        self[ROOT] = TrieNode::new(false, None);
    }

    /// Allocates a new node under `parent`, linked by `label`.
    pub fn attach(&mut self, parent: NodeId, label: &str, is_end: bool) -> NodeId {
        debug_assert!(!label.is_empty(), "edge labels must be non-empty");
        let id = self.alloc(TrieNode::new(is_end, Some(parent)));
        self[parent].children.insert(label.to_owned(), id);
        id
    }

    /// Allocates a new key leaf under `parent`, linked by `label`.
    pub fn attach_leaf(&mut self, parent: NodeId, label: &str) -> NodeId {
        self.attach(parent, label, true)
    }

    /// Moves an already-allocated subtree under `parent`, linked by `label`.
    pub fn adopt(&mut self, parent: NodeId, label: String, child: NodeId) {
        self[child].parent = Some(parent);
        self[parent].children.insert(label, child);
    }

    /// Unlinks `id` from its parent and frees its subtree. Returns the parent.
    pub fn remove_subtree(&mut self, id: NodeId) -> Option<NodeId> {
        let parent = self[id].parent?;
        let label = self[parent].label_of(id).map(str::to_owned);
        if let Some(label) = label {
            self[parent].children.remove(&label);
        }
        self.free_subtree(id);
        Some(parent)
    }

    /// Splices the only child of `id` into `id`'s parent under the
    /// concatenated label and frees `id`.
    ///
    /// `id` must be a non-root node with exactly one child.
    pub fn merge_into_parent(&mut self, id: NodeId) {
        let parent = match self[id].parent {
            Some(parent) => parent,
            None => return,
        };
        let label = match self[parent].label_of(id) {
            Some(label) => label.to_owned(),
            None => return,
        };
        let (child_label, child) = match self[id].children.pop_first() {
            Some(entry) => entry,
            None => return,
        };
        debug_assert!(self[id].children.is_empty(), "merged node had several children");

        self[parent].children.remove(&label);
        self.free_subtree(id);

        let joined = label + &child_label;
        log::trace!("merged edge into {:?}", joined);
        self.adopt(parent, joined, child);
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<NodeId> for Arena {
    type Output = TrieNode;

    fn index(&self, id: NodeId) -> &TrieNode {
        match &self.slots[id.index()] {
            Some(node) => node,
            None => panic!("dangling node id {}", id.index()),
        }
    }
}

impl IndexMut<NodeId> for Arena {
    fn index_mut(&mut self, id: NodeId) -> &mut TrieNode {
        match &mut self.slots[id.index()] {
            Some(node) => node,
            None => panic!("dangling node id {}", id.index()),
        }
    }
}
