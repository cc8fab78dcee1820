//! The main trie implementation.
//!
//! This module contains the `Trie` type, which provides the primary API for working
//! with the radix trie data structure.

use std::fmt;

use crate::arena::{Arena, NodeId, ROOT};
use crate::cursor::{Cursor, Iter};
use crate::util::common_prefix_len;
use crate::Error;

/// A compact radix trie holding a set of strings.
///
/// Each edge carries a non-empty label and the trie is kept maximally
/// compressed: siblings never share a first character and no non-key node
/// other than the root has fewer than two children. The empty string can be
/// stored like any other key.
///
/// Cursors and iterators borrow the trie, so the borrow checker rules out
/// mutating a trie while anything is still walking it.
#[derive(Clone, Default)]
pub struct Trie {
    /// Node storage; the root lives in the first slot
    pub(crate) arena: Arena,
}

impl Trie {
    /// Creates a new, empty trie.
    ///
    /// # Examples
    ///
    /// ```
    /// use compact_trie::Trie;
    ///
    /// let trie = Trie::new();
    /// assert!(trie.is_empty());
    /// ```
    pub fn new() -> Self {
        Trie {
            arena: Arena::new(),
        }
    }

    /// Returns the number of keys stored in the trie.
    ///
    /// # Examples
    ///
    /// ```
    /// use compact_trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// assert_eq!(trie.len(), 0);
    ///
    /// trie.insert("hello");
    /// trie.insert("hello");
    /// assert_eq!(trie.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.arena.key_count(ROOT)
    }

    /// Returns the number of keys starting with `prefix`.
    ///
    /// # Examples
    ///
    /// ```
    /// use compact_trie::Trie;
    ///
    /// let trie: Trie = ["math", "malleable", "regression"].into_iter().collect();
    /// assert_eq!(trie.len_prefix("m"), 2);
    /// assert_eq!(trie.len_prefix("mat"), 1);
    /// assert_eq!(trie.len_prefix("x"), 0);
    /// ```
    pub fn len_prefix(&self, prefix: &str) -> usize {
        self.arena
            .prefix_match(ROOT, prefix)
            .map_or(0, |id| self.arena.key_count(id))
    }

    /// Returns `true` if the trie contains no keys.
    pub fn is_empty(&self) -> bool {
        self.is_empty_prefix("")
    }

    /// Returns `true` if no key starts with `prefix`.
    ///
    /// # Examples
    ///
    /// ```
    /// use compact_trie::Trie;
    ///
    /// let trie = Trie::from(["single"]);
    /// assert!(!trie.is_empty_prefix("sin"));
    /// assert!(trie.is_empty_prefix("hello"));
    /// ```
    pub fn is_empty_prefix(&self, prefix: &str) -> bool {
        match self.arena.prefix_match(ROOT, prefix) {
            Some(id) => {
                let node = &self.arena[id];
                !node.is_end && node.is_leaf()
            }
            None => true,
        }
    }

    /// Returns `true` if `key` is stored in the trie.
    pub fn contains(&self, key: &str) -> bool {
        self.find(key).is_valid()
    }

    /// Searches for `key`, returning a cursor at it or the end cursor.
    ///
    /// # Examples
    ///
    /// ```
    /// use compact_trie::Trie;
    ///
    /// let trie = Trie::from(["corn", "corner"]);
    /// assert_eq!(trie.find("corn").key().as_deref(), Some("corn"));
    /// assert_eq!(trie.find("cor"), trie.end());
    /// ```
    pub fn find(&self, key: &str) -> Cursor<'_> {
        let node = self
            .arena
            .exact_match(ROOT, key)
            .filter(|&id| self.arena[id].is_end);
        Cursor::new(self, node)
    }

    /// Returns a cursor at the first key starting with `prefix`, or the end
    /// cursor if there is none.
    ///
    /// # Examples
    ///
    /// ```
    /// use compact_trie::Trie;
    ///
    /// let trie = Trie::from(["mat", "material", "maternal"]);
    /// assert_eq!(trie.find_prefix("mate").key().as_deref(), Some("material"));
    /// assert_eq!(trie.find_prefix("ma").key().as_deref(), Some("mat"));
    /// assert_eq!(trie.find_prefix("mo"), trie.end());
    /// ```
    pub fn find_prefix(&self, prefix: &str) -> Cursor<'_> {
        let node = self
            .arena
            .prefix_match(ROOT, prefix)
            .and_then(|id| self.first_at_or_below(id));
        Cursor::new(self, node)
    }

    /// `id` itself when it is a key, else the first key below it.
    pub(crate) fn first_at_or_below(&self, id: NodeId) -> Option<NodeId> {
        if self.arena[id].is_end {
            Some(id)
        } else {
            self.arena.first_key(id)
        }
    }

    /// Inserts `key`, returning a cursor at it. Inserting a key that is
    /// already present changes nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use compact_trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// assert_eq!(trie.insert("alphabet").key().as_deref(), Some("alphabet"));
    /// assert_eq!(trie.insert("alpha").key().as_deref(), Some("alpha"));
    ///
    /// assert!(trie.contains("alphabet"));
    /// assert!(!trie.contains("alph"));
    /// ```
    pub fn insert(&mut self, key: &str) -> Cursor<'_> {
        let node = self.insert_node(key);
        self.debug_check();
        Cursor::new(self, Some(node))
    }

    fn insert_node(&mut self, key: &str) -> NodeId {
        let (loc, rest) = self.arena.approximate_match(ROOT, key);
        if rest.is_empty() {
            self.arena[loc].is_end = true;
            return loc;
        }

        let (label, child) = match self.arena.child_sharing_first_char(loc, rest) {
            Some((label, child)) => (label.to_owned(), child),
            None => return self.arena.attach_leaf(loc, rest),
        };

        // Split the shared edge: loc -common-> junction -post_child-> child
        let common_len = common_prefix_len(rest, &label);
        let (common, post_key) = rest.split_at(common_len);
        let post_child = label[common_len..].to_owned();
        debug_assert!(!post_child.is_empty(), "approximate match stopped short");
        log::trace!("splitting edge {:?} at {:?}", label, common);

        self.arena[loc].children.remove(&label);
        let junction = self.arena.attach(loc, common, post_key.is_empty());
        self.arena.adopt(junction, post_child, child);

        if post_key.is_empty() {
            junction
        } else {
            self.arena.attach_leaf(junction, post_key)
        }
    }

    /// Removes `key` from the trie. Removing an absent key is a no-op.
    ///
    /// # Examples
    ///
    /// ```
    /// use compact_trie::Trie;
    ///
    /// let mut trie = Trie::from(["abc", "abcde"]);
    /// trie.erase("abc");
    /// trie.erase("missing");
    ///
    /// assert!(!trie.contains("abc"));
    /// assert!(trie.contains("abcde"));
    /// ```
    pub fn erase(&mut self, key: &str) {
        let target = match self.arena.exact_match(ROOT, key) {
            Some(id) => id,
            None => return,
        };
        self.arena[target].is_end = false;

        let parent = match self.arena[target].parent {
            Some(parent) => parent,
            None => {
                self.debug_check();
                return;
            }
        };

        match self.arena[target].children.len() {
            0 => {
                self.arena.remove_subtree(target);
                self.compress(parent);
            }
            1 => self.arena.merge_into_parent(target),
            _ => {}
        }
        self.debug_check();
    }

    /// Merges `id` into its parent if it is a non-root, non-key node left
    /// with a single child.
    fn compress(&mut self, id: NodeId) {
        let node = &self.arena[id];
        if id != ROOT && !node.is_end && node.children.len() == 1 {
            self.arena.merge_into_parent(id);
        }
    }

    /// Removes every key starting with `prefix`.
    ///
    /// # Examples
    ///
    /// ```
    /// use compact_trie::Trie;
    ///
    /// let mut trie = Trie::from(["contain", "contaminate", "corn"]);
    /// trie.erase_prefix("con");
    ///
    /// assert_eq!(trie.len(), 1);
    /// assert_eq!(trie.find_prefix("con"), trie.end());
    /// ```
    pub fn erase_prefix(&mut self, prefix: &str) {
        let target = match self.arena.prefix_match(ROOT, prefix) {
            Some(id) => id,
            None => return,
        };
        if target == ROOT {
            self.clear();
            return;
        }

        log::trace!("erasing subtree under prefix {:?}", prefix);
        if let Some(parent) = self.arena.remove_subtree(target) {
            self.compress(parent);
        }
        self.debug_check();
    }

    /// Removes every key, the empty string included.
    pub fn clear(&mut self) {
        log::trace!("clearing {} nodes", self.arena.live());
        self.arena.reset();
        self.debug_check();
    }

    /// Cursor at the first key in the trie.
    pub fn begin(&self) -> Cursor<'_> {
        Cursor::new(self, self.first_at_or_below(ROOT))
    }

    /// The end cursor, one past the last key.
    pub fn end(&self) -> Cursor<'_> {
        Cursor::new(self, None)
    }

    /// Cursor at the first key starting with `prefix`; same as [`Trie::find_prefix`].
    pub fn begin_prefix(&self, prefix: &str) -> Cursor<'_> {
        self.find_prefix(prefix)
    }

    /// Cursor one past the last key starting with `prefix`.
    ///
    /// This is a valid cursor even when no key has the prefix: it then points
    /// at the first key that would follow such keys.
    ///
    /// # Panics
    ///
    /// Panics if the trie's internal bookkeeping is inconsistent.
    ///
    /// # Examples
    ///
    /// ```
    /// use compact_trie::Trie;
    ///
    /// let trie = Trie::from(["contain", "contaminate", "corn"]);
    /// assert_eq!(trie.end_prefix("con").key().as_deref(), Some("corn"));
    /// assert_eq!(trie.end_prefix("cops").key().as_deref(), Some("corn"));
    /// assert_eq!(trie.end_prefix("corn"), trie.end());
    /// ```
    pub fn end_prefix(&self, prefix: &str) -> Cursor<'_> {
        match self.prefix_end(prefix) {
            Ok(node) => Cursor::new(self, node),
            Err(err) => panic!("{}", err),
        }
    }

    fn prefix_end(&self, prefix: &str) -> Result<Option<NodeId>, Error> {
        let (node, rest) = self.arena.approximate_match(ROOT, prefix);
        if rest.is_empty() {
            return Ok(self.arena.next_node(node));
        }
        if self.arena[node].children.contains_key(rest) {
            return Err(Error::Internal("prefix range ends on an unmatched edge"));
        }

        Ok(match self.arena.first_child_after(node, rest) {
            Some(child) => self.first_at_or_below(child),
            None => self.arena.next_node(node),
        })
    }

    /// Iterates over all keys in lexicographic order.
    ///
    /// # Examples
    ///
    /// ```
    /// use compact_trie::Trie;
    ///
    /// let trie = Trie::from(["math", "mat", "corn"]);
    /// let keys: Vec<String> = trie.iter().collect();
    /// assert_eq!(keys, ["corn", "mat", "math"]);
    ///
    /// let last = trie.iter().next_back();
    /// assert_eq!(last.as_deref(), Some("math"));
    /// ```
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self.begin(), self.end())
    }

    /// Iterates over the keys starting with `prefix` in lexicographic order.
    ///
    /// # Examples
    ///
    /// ```
    /// use compact_trie::Trie;
    ///
    /// let trie = Trie::from(["corn", "corner", "mat", "compute"]);
    /// let keys: Vec<String> = trie.iter_prefix("cor").collect();
    /// assert_eq!(keys, ["corn", "corner"]);
    /// ```
    pub fn iter_prefix(&self, prefix: &str) -> Iter<'_> {
        Iter::new(self.begin_prefix(prefix), self.end_prefix(prefix))
    }

    /// Checks every structural rule of the trie.
    ///
    /// Mutations already run this check and panic on failure in builds with
    /// debug assertions or the `strict-invariants` feature.
    pub fn check_invariants(&self) -> Result<(), Error> {
        self.arena.check_invariants()
    }

    fn debug_check(&self) {
        if cfg!(any(debug_assertions, feature = "strict-invariants")) {
            if let Err(err) = self.check_invariants() {
                panic!("{}", err);
            }
        }
    }
}

impl<S: AsRef<str>> Extend<S> for Trie {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for Trie {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut trie = Trie::new();
        trie.extend(iter);
        trie
    }
}

impl<S: AsRef<str>, const N: usize> From<[S; N]> for Trie {
    fn from(keys: [S; N]) -> Self {
        keys.into_iter().collect()
    }
}

impl<'a> IntoIterator for &'a Trie {
    type Item = String;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Writes one key per line in lexicographic order.
impl fmt::Display for Trie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for key in self {
            writeln!(f, "{}", key)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Trie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trie() {
        let trie = Trie::new();
        assert!(trie.is_empty());
        assert_eq!(trie.len(), 0);
        assert_eq!(trie.begin(), trie.end());
    }

    #[test]
    fn test_find_nonexistent() {
        let trie = Trie::new();
        assert_eq!(trie.find("hello"), trie.end());
        assert_eq!(trie.find(""), trie.end());
        assert_eq!(trie.find_prefix(""), trie.end());
    }

    #[test]
    fn test_empty_string_key() {
        let mut trie = Trie::new();
        trie.insert("");

        assert!(!trie.is_empty());
        assert!(trie.is_empty_prefix("hello"));
        assert_eq!(trie.len(), 1);
        assert_eq!(trie.begin().key().as_deref(), Some(""));
        assert_eq!(trie.find("").key().as_deref(), Some(""));
        assert_eq!(trie.find_prefix("").key().as_deref(), Some(""));

        trie.erase("");
        assert!(trie.is_empty());
    }

    #[test]
    fn test_insert_splits_edge() {
        let mut trie = Trie::from(["alphabet"]);
        trie.insert("alpine");

        // root -"alp"-> junction -> { "habet", "ine" }
        let junction = trie.arena[ROOT].children["alp"];
        assert!(!trie.arena[junction].is_end);
        assert_eq!(
            trie.arena[junction].children.keys().collect::<Vec<_>>(),
            ["habet", "ine"]
        );
        assert_eq!(trie.arena.live(), 4);
    }

    #[test]
    fn test_insert_prefix_of_existing_key() {
        let mut trie = Trie::from(["alphabet"]);
        let inserted = trie.insert("alpha").key();
        assert_eq!(inserted.as_deref(), Some("alpha"));

        let junction = trie.arena[ROOT].children["alpha"];
        assert!(trie.arena[junction].is_end);
        assert!(trie.arena[junction].children.contains_key("bet"));
    }

    #[test]
    fn test_insert_is_idempotent() {
        let mut trie = Trie::from(["math", "malleable"]);
        let live = trie.arena.live();

        trie.insert("math");
        assert_eq!(trie.len(), 2);
        assert_eq!(trie.arena.live(), live);
    }

    #[test]
    fn test_erase_leaf_merges_parent() {
        let mut trie = Trie::from(["alpine", "alphabet"]);
        trie.erase("alpine");

        assert_eq!(
            trie.arena[ROOT].children.keys().collect::<Vec<_>>(),
            ["alphabet"]
        );
        assert_eq!(trie.arena.live(), 2);
    }

    #[test]
    fn test_erase_unary_node_merges_child() {
        let mut trie = Trie::from(["abc", "abcde"]);
        trie.erase("abc");

        assert_eq!(
            trie.arena[ROOT].children.keys().collect::<Vec<_>>(),
            ["abcde"]
        );
        assert_eq!(trie.len(), 1);
    }

    #[test]
    fn test_erase_junction_keeps_structure() {
        let mut trie = Trie::from(["mat", "material", "math"]);
        trie.erase("mat");

        let mat = trie.arena[ROOT].children["mat"];
        assert!(!trie.arena[mat].is_end);
        assert_eq!(trie.arena[mat].children.len(), 2);
        assert_eq!(trie.find_prefix("mat").key().as_deref(), Some("material"));
    }

    #[test]
    fn test_erase_prefix_compresses_parent() {
        let mut trie = Trie::from(["abc", "abd", "x"]);
        trie.erase_prefix("abc");

        assert_eq!(
            trie.arena[ROOT].children.keys().collect::<Vec<_>>(),
            ["abd", "x"]
        );
        assert_eq!(trie.check_invariants(), Ok(()));
    }

    #[test]
    fn test_erase_prefix_root_clears() {
        let mut trie = Trie::from(["", "a", "b"]);
        trie.erase_prefix("");

        assert!(trie.is_empty());
        assert_eq!(trie.arena.live(), 1);
    }

    #[test]
    fn test_prefix_end_cursor() {
        let trie = Trie::from(["compute", "contain", "corn", "mat"]);

        assert_eq!(trie.prefix_end("co").unwrap(), trie.arena.exact_match(ROOT, "mat"));
        assert_eq!(trie.prefix_end("mat").unwrap(), None);
        assert_eq!(trie.prefix_end("").unwrap(), None);
    }

    #[test]
    fn test_display_and_debug() {
        let trie = Trie::from(["b", "a", ""]);

        assert_eq!(trie.to_string(), "\na\nb\n");
        assert_eq!(format!("{:?}", trie), r#"{"", "a", "b"}"#);
    }
}
