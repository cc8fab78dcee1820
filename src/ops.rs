//! Set algebra and comparison between tries.
//!
//! `a + b` is the union of two key sets and `a - b` the difference. Tries are
//! partially ordered by inclusion: `a < b` holds when every key of `a` is in
//! `b` and `b` has more keys.

use std::cmp::Ordering;
use std::ops::{Add, AddAssign, Sub, SubAssign};

use crate::arena::ROOT;
use crate::Trie;

impl Trie {
    /// Returns `true` if every key of `self` is also in `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use compact_trie::Trie;
    ///
    /// let small = Trie::from(["corn"]);
    /// let large = Trie::from(["corn", "corner"]);
    /// assert!(small.is_subset(&large));
    /// assert!(!large.is_subset(&small));
    /// ```
    pub fn is_subset(&self, other: &Trie) -> bool {
        // Both sequences are sorted, so walk them like a merge
        let mut theirs = other.iter();
        self.iter()
            .all(|key| theirs.by_ref().find(|candidate| *candidate >= key) == Some(key))
    }

    /// Returns `true` if every key of `other` is also in `self`.
    pub fn is_superset(&self, other: &Trie) -> bool {
        other.is_subset(self)
    }

    fn is_proper_subset(&self, other: &Trie) -> bool {
        self.len() < other.len() && self.is_subset(other)
    }
}

/// Inserts every key of `rhs`. Adding a trie to itself is rejected by the
/// borrow checker.
impl AddAssign<&Trie> for Trie {
    fn add_assign(&mut self, rhs: &Trie) {
        for key in rhs {
            self.insert(&key);
        }
    }
}

/// Erases every key of `rhs`.
impl SubAssign<&Trie> for Trie {
    fn sub_assign(&mut self, rhs: &Trie) {
        for key in rhs {
            self.erase(&key);
        }
    }
}

impl Add<&Trie> for Trie {
    type Output = Trie;

    fn add(mut self, rhs: &Trie) -> Trie {
        self += rhs;
        self
    }
}

impl Add<&Trie> for &Trie {
    type Output = Trie;

    fn add(self, rhs: &Trie) -> Trie {
        self.clone() + rhs
    }
}

impl Sub<&Trie> for Trie {
    type Output = Trie;

    fn sub(mut self, rhs: &Trie) -> Trie {
        self -= rhs;
        self
    }
}

impl Sub<&Trie> for &Trie {
    type Output = Trie;

    fn sub(self, rhs: &Trie) -> Trie {
        self.clone() - rhs
    }
}

/// Structural equality: both node trees have the same labels and key markers
/// at every level. Since the layout of a compressed trie is determined by its
/// key set, this is the same as comparing keys.
impl PartialEq for Trie {
    fn eq(&self, other: &Self) -> bool {
        self.arena.subtree_eq(ROOT, &other.arena, ROOT)
    }
}

impl Eq for Trie {}

/// Inclusion order. Two tries neither of which contains the other are not
/// comparable.
impl PartialOrd for Trie {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            Some(Ordering::Equal)
        } else if self.is_proper_subset(other) {
            Some(Ordering::Less)
        } else if other.is_proper_subset(self) {
            Some(Ordering::Greater)
        } else {
            None
        }
    }
}
