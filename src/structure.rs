//! Serializable view of the node layout.
//!
//! Without end markers a node is written as a map from edge label to child.
//! With end markers every node becomes `{"end": bool, "children": {...}}`.
//! The end cursor is written as an empty map.

use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Serialize, Serializer};

use crate::arena::{Arena, NodeId, ROOT};
use crate::{Cursor, Error, Trie};

/// A borrowed view of a subtree that serializes its structure.
///
/// Obtained from [`Trie::structure`] or [`Cursor::structure`].
#[derive(Clone, Copy)]
pub struct StructureView<'a> {
    arena: &'a Arena,
    node: Option<NodeId>,
    include_ends: bool,
}

impl StructureView<'_> {
    /// Renders the view as compact JSON.
    pub fn to_json(&self) -> Result<String, Error> {
        serde_json::to_string(self).map_err(|err| Error::Render(err.to_string()))
    }

    fn at(&self, node: NodeId) -> Self {
        StructureView {
            node: Some(node),
            ..*self
        }
    }
}

/// The child map of one node.
struct Children<'a>(StructureView<'a>, NodeId);

impl Serialize for Children<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let Children(view, id) = self;
        let children = &view.arena[*id].children;
        let mut map = serializer.serialize_map(Some(children.len()))?;
        for (label, &child) in children {
            map.serialize_entry(label, &view.at(child))?;
        }
        map.end()
    }
}

impl Serialize for StructureView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let id = match self.node {
            Some(id) => id,
            None => return serializer.serialize_map(Some(0))?.end(),
        };

        if self.include_ends {
            let mut node = serializer.serialize_struct("Node", 2)?;
            node.serialize_field("end", &self.arena[id].is_end)?;
            node.serialize_field("children", &Children(*self, id))?;
            node.end()
        } else {
            Children(*self, id).serialize(serializer)
        }
    }
}

impl Trie {
    /// Returns a serializable view of the whole node layout.
    pub fn structure(&self, include_ends: bool) -> StructureView<'_> {
        StructureView {
            arena: &self.arena,
            node: Some(ROOT),
            include_ends,
        }
    }

    /// Renders the node layout as compact JSON.
    ///
    /// # Examples
    ///
    /// ```
    /// use compact_trie::Trie;
    ///
    /// let trie = Trie::from(["corn", "corner", "mat"]);
    /// assert_eq!(trie.to_json(false).unwrap(), r#"{"corn":{"er":{}},"mat":{}}"#);
    /// ```
    pub fn to_json(&self, include_ends: bool) -> Result<String, Error> {
        self.structure(include_ends).to_json()
    }
}

impl<'a> Cursor<'a> {
    /// Returns a serializable view of the subtree at this position.
    pub fn structure(&self, include_ends: bool) -> StructureView<'a> {
        StructureView {
            arena: &self.trie.arena,
            node: self.node,
            include_ends,
        }
    }

    /// Renders the subtree at this position as compact JSON; `{}` at the end.
    pub fn to_json(&self, include_ends: bool) -> Result<String, Error> {
        self.structure(include_ends).to_json()
    }
}
