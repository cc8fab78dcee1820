//! # Compact Trie
//!
//! A compact prefix tree (radix trie) over string keys.
//!
//! This crate provides an ordered set of strings stored as a radix trie: every
//! edge carries a label, shared prefixes are stored once, and no node is left
//! with a single non-key child. Nodes keep a link to their parent, so cursors
//! and iterators walk the keys in lexicographic order without any auxiliary
//! stack.
//!
//! ## Features
//!
//! - **Prefix queries**: count, test, iterate or erase every key with a prefix
//! - **Parent-linked traversal**: double-ended iteration over the whole trie or a prefix range
//! - **Set algebra**: union and difference operators, equality and subset ordering
//! - **Structure dump**: serialize the node layout with serde (feature `json`)
//!
//! ## Example
//!
//! ```rust
//! use compact_trie::Trie;
//!
//! let mut trie = Trie::new();
//! trie.insert("compute");
//! trie.insert("computer");
//! trie.insert("corn");
//!
//! assert_eq!(trie.len(), 3);
//! assert_eq!(trie.len_prefix("comp"), 2);
//! assert_eq!(trie.find_prefix("co").key().as_deref(), Some("compute"));
//!
//! let keys: Vec<String> = trie.iter().collect();
//! assert_eq!(keys, ["compute", "computer", "corn"]);
//! ```

mod arena;
mod cursor;
mod matching;
mod node;
mod ops;
#[cfg(feature = "json")]
mod structure;
mod traversal;
mod trie;
mod util;

// Re-export public types
pub use crate::cursor::{Cursor, Iter};
#[cfg(feature = "json")]
pub use crate::structure::StructureView;
pub use crate::trie::Trie;

/// Structural rules a trie must satisfy between operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Violation {
    /// Two children of one node start with this character
    #[error("two sibling labels start with {0:?}")]
    SharedFirstChar(char),
    /// A child is linked by an empty label
    #[error("empty edge label")]
    EmptyLabel,
    /// A non-root leaf that is not a key
    #[error("leaf is not a key")]
    BareLeaf,
    /// A non-root, non-key node with fewer than two children
    #[error("non-key node with fewer than two children")]
    UnaryJunction,
    /// A child's parent link does not point at its owner
    #[error("child does not link back to its parent")]
    ParentMismatch,
    /// The root has a parent link
    #[error("root has a parent")]
    RootHasParent,
    /// Live nodes that cannot be reached from the root
    #[error("{0} live nodes are unreachable from the root")]
    Unreachable(usize),
}

/// Errors that can occur in trie operations.
///
/// Missing keys and prefixes are not errors: lookups report them through end
/// cursors and erasing them is a no-op.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The node layout broke a structural rule
    #[error("invariant violated at node {node}: {violation}")]
    Invariant {
        /// Arena slot of the offending node
        node: usize,
        /// The rule that was broken
        violation: Violation,
    },
    /// A state the trie's own bookkeeping should never produce
    #[error("internal error: {0}")]
    Internal(&'static str),
    /// The structure dump could not be rendered
    #[error("failed to render trie structure: {0}")]
    Render(String),
}
