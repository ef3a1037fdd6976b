//! The Adaptive Radix Tree: a byte-keyed ordered map (spec §4.3).
//!
//! `Art<V>` is the standalone tree — every leaf owns its own key bytes.
//! [`crate::ast::AdaptiveSuffixTree`] is built on the same machinery
//! (`crate::radix`) but shares keys out of a [`crate::arena::KeyArena`]
//! instead.

use crate::radix::{Located, RadixTree, TreeLeaf};

struct ArtLeaf<V> {
    key: Box<[u8]>,
    value: V,
}

impl<V> TreeLeaf for ArtLeaf<V> {
    type Ctx = ();

    fn repr_bytes<'a>(&'a self, _ctx: &'a ()) -> &'a [u8] {
        &self.key
    }
}

/// An adaptive radix tree mapping byte strings to `V`.
///
/// Duplicate insertion and missing-key lookups are not errors (spec §7):
/// `insert` reports whether a prior value was replaced, `erase` reports
/// whether anything was removed.
pub struct Art<V> {
    tree: RadixTree<ArtLeaf<V>>,
    len: usize,
}

impl<V> Default for Art<V> {
    fn default() -> Self {
        Self { tree: RadixTree::new(), len: 0 }
    }
}

impl<V> Art<V> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts `key -> value`. A duplicate key is not overwritten: the
    /// existing value is left in place and `false` is returned (spec
    /// §4.3 insert, §8 invariant 2 — `insert` never clobbers). Returns
    /// `true` if `key` was fresh.
    pub fn insert(&mut self, key: &[u8], value: V) -> bool {
        match self.tree.locate(&(), key) {
            Located::Fresh(slot) => {
                *slot = crate::radix::Entry::Leaf(ArtLeaf { key: key.into(), value });
                self.len += 1;
                true
            }
            Located::Existing(_) => false,
        }
    }

    #[must_use]
    pub fn search(&self, key: &[u8]) -> Option<&V> {
        self.tree.search(&(), key).map(|leaf| &leaf.value)
    }

    #[must_use]
    pub fn search_mut(&mut self, key: &[u8]) -> Option<&mut V> {
        self.tree.search_mut(&(), key).map(|leaf| &mut leaf.value)
    }

    #[must_use]
    pub fn contains(&self, key: &[u8]) -> bool {
        self.search(key).is_some()
    }

    /// Removes `key`, returning its value if present.
    pub fn erase(&mut self, key: &[u8]) -> bool {
        let removed = self.tree.remove_where(&(), key, |_| true);
        if removed {
            self.len -= 1;
        }
        removed
    }

    /// All values whose key starts with `prefix`, capped at `limit`,
    /// in ascending key order (spec §4.3 `search_prefix`).
    #[must_use]
    pub fn search_prefix(&self, prefix: &[u8], limit: usize) -> Vec<&V> {
        let mut leaves = Vec::new();
        self.tree.search_prefix(&(), prefix, limit, &mut leaves);
        leaves.into_iter().map(|l| &l.value).collect()
    }

    /// Whether any key in the tree starts with `prefix` (spec §4.3
    /// `search_prefix_node`, used as a cheap existence probe).
    #[must_use]
    pub fn has_prefix(&self, prefix: &[u8]) -> bool {
        self.tree.search_prefix_node(&(), prefix).is_some()
    }

    pub fn for_each(&self, mut f: impl FnMut(&[u8], &V)) {
        self.tree.for_each_leaf(&(), &mut |leaf| f(&leaf.key, &leaf.value));
    }
}
