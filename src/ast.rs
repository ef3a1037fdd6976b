//! The Adaptive Suffix Tree: every suffix of every inserted key, indexed
//! over the same radix-tree machinery as [`crate::art::Art`] (spec §4.4).
//!
//! Leaves don't own bytes — they reference positions in a shared
//! [`KeyArena`], so a key inserted once costs one allocation no matter
//! how many of its suffixes land in the tree. A leaf that names exactly
//! one occurrence stores its [`KeyRef`] inline; a leaf shared by several
//! occurrences (the same suffix content reachable from more than one
//! inserted key, or more than one offset of the same key) promotes to a
//! small heap-allocated list. This is the "single-ref inline, multi-ref
//! heap" leaf shape spec.md §3 describes, realised as an enum instead of
//! a tagged pointer.

use crate::arena::{KeyArena, KeyRef};
use crate::radix::{Entry, Located, RadixTree, TreeLeaf};

enum AstLeaf {
    One(KeyRef),
    Many(Box<Vec<KeyRef>>),
}

impl AstLeaf {
    fn refs(&self) -> Vec<KeyRef> {
        match self {
            Self::One(r) => vec![*r],
            Self::Many(v) => (**v).clone(),
        }
    }

    fn push(&mut self, r: KeyRef) {
        match self {
            Self::One(existing) => {
                *self = Self::Many(Box::new(vec![*existing, r]));
            }
            Self::Many(v) => v.push(r),
        }
    }

    /// Removes `r`; returns `true` if the leaf is now empty and should
    /// be pruned from the tree.
    fn remove(&mut self, r: KeyRef) -> bool {
        match self {
            Self::One(x) => *x == r,
            Self::Many(v) => {
                v.retain(|&x| x != r);
                match v.len() {
                    0 => true,
                    1 => {
                        *self = Self::One(v[0]);
                        false
                    }
                    _ => false,
                }
            }
        }
    }
}

impl TreeLeaf for AstLeaf {
    type Ctx = KeyArena;

    fn repr_bytes<'a>(&'a self, ctx: &'a KeyArena) -> &'a [u8] {
        match self {
            Self::One(r) => ctx.lookup(*r),
            Self::Many(refs) => ctx.lookup(refs[0]),
        }
    }
}

/// Indexes every suffix of every inserted byte string.
pub struct AdaptiveSuffixTree {
    tree: RadixTree<AstLeaf>,
    arena: KeyArena,
}

impl Default for AdaptiveSuffixTree {
    fn default() -> Self {
        Self { tree: RadixTree::new(), arena: KeyArena::new() }
    }
}

impl AdaptiveSuffixTree {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copies `key` into the arena and inserts every one of its suffixes
    /// (positions `0..key.len()`) into the tree. Returns the key's arena
    /// index, which callers keep to later [`Self::erase`] it.
    pub fn insert(&mut self, key: &[u8]) -> u32 {
        let whole = self.arena.insert(key);
        let idx = whole.idx();
        for offset in 0..key.len() {
            let suffix_ref = KeyRef::new(idx, u32::try_from(offset).expect("key offset fits in u32"));
            let suffix = &key[offset..];
            match self.tree.locate(&self.arena, suffix) {
                Located::Fresh(slot) => *slot = Entry::Leaf(AstLeaf::One(suffix_ref)),
                Located::Existing(leaf) => leaf.push(suffix_ref),
            }
        }
        idx
    }

    /// Removes every suffix of the key previously inserted under `idx`.
    pub fn erase(&mut self, idx: u32) {
        let key = self.arena.key(idx).to_vec();
        let arena = &self.arena;
        let tree = &mut self.tree;
        for offset in 0..key.len() {
            let target = KeyRef::new(idx, u32::try_from(offset).expect("key offset fits in u32"));
            let suffix = &key[offset..];
            tree.remove_where(arena, suffix, |leaf| leaf.remove(target));
        }
    }

    /// Whether `key` was itself inserted as a complete key (not merely
    /// present as a suffix of some longer key).
    #[must_use]
    pub fn search_exact(&self, key: &[u8]) -> bool {
        self.tree
            .search(&self.arena, key)
            .is_some_and(|leaf| leaf.refs().into_iter().any(|r| r.offset() == 0))
    }

    /// The distinct original keys that end with `needle` (spec §4.4
    /// `search_suffix`). Every inserted key trivially ends with the
    /// empty string, so that case is answered directly rather than by
    /// storing a degenerate empty-suffix leaf that every key would
    /// collide on.
    #[must_use]
    pub fn search_suffix(&self, needle: &[u8]) -> Vec<&[u8]> {
        if needle.is_empty() {
            let count = u32::try_from(self.arena.len()).expect("arena record count fits in u32");
            return (0..count).map(|idx| self.arena.key(idx)).collect();
        }
        let Some(leaf) = self.tree.search(&self.arena, needle) else { return Vec::new() };
        let mut idxs: Vec<u32> = leaf.refs().into_iter().map(KeyRef::idx).collect();
        idxs.sort_unstable();
        idxs.dedup();
        idxs.into_iter().map(|idx| self.arena.key(idx)).collect()
    }

    /// Every occurrence of `needle` as the start of some suffix, capped
    /// at `limit` leaves visited (spec §4.4 `search_prefix`); callers
    /// typically dedupe by [`KeyRef::idx`] to get the distinct owning
    /// keys.
    pub fn search_prefix(&self, needle: &[u8], limit: usize) -> Vec<KeyRef> {
        let mut leaves = Vec::new();
        self.tree.search_prefix(&self.arena, needle, limit, &mut leaves);
        leaves.into_iter().flat_map(AstLeaf::refs).collect()
    }

    #[must_use]
    pub fn key(&self, idx: u32) -> &[u8] {
        self.arena.key(idx)
    }

    #[must_use]
    pub fn resolve(&self, r: KeyRef) -> &[u8] {
        self.arena.lookup(r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_exact_finds_only_whole_inserted_keys() {
        let mut ast = AdaptiveSuffixTree::new();
        ast.insert(b"banana");
        assert!(ast.search_exact(b"banana"));
        assert!(!ast.search_exact(b"anana"));
        assert!(!ast.search_exact(b"nan"));
    }

    #[test]
    fn search_suffix_finds_keys_ending_with_needle() {
        let mut ast = AdaptiveSuffixTree::new();
        ast.insert(b"main.rs");
        ast.insert(b"lib.rs");
        ast.insert(b"main.cpp");
        let mut hits: Vec<Vec<u8>> = ast.search_suffix(b".rs").into_iter().map(<[u8]>::to_vec).collect();
        hits.sort();
        assert_eq!(hits, vec![b"lib.rs".to_vec(), b"main.rs".to_vec()]);
        assert!(ast.search_suffix(b".py").is_empty());
    }

    #[test]
    fn search_prefix_finds_keys_containing_needle_at_any_offset() {
        let mut ast = AdaptiveSuffixTree::new();
        ast.insert(b"banana");
        ast.insert(b"ananas");
        let refs = ast.search_prefix(b"ana", 100);
        let mut idxs: Vec<u32> = refs.iter().map(|r| r.idx()).collect();
        idxs.sort_unstable();
        idxs.dedup();
        let keys: Vec<&[u8]> = idxs.iter().map(|&i| ast.key(i)).collect();
        assert!(keys.contains(&b"banana".as_slice()));
        assert!(keys.contains(&b"ananas".as_slice()));
    }

    #[test]
    fn multiple_keys_sharing_a_suffix_merge_into_one_leaf() {
        let mut ast = AdaptiveSuffixTree::new();
        ast.insert(b"cat");
        ast.insert(b"bat");
        ast.insert(b"hat");
        let mut owners = ast.search_suffix(b"at");
        owners.sort_unstable();
        assert_eq!(owners, vec![b"bat".as_slice(), b"cat".as_slice(), b"hat".as_slice()]);
    }

    #[test]
    fn search_suffix_with_empty_needle_returns_every_key() {
        let mut ast = AdaptiveSuffixTree::new();
        ast.insert(b"banana");
        ast.insert(b"ananas");
        let mut owners = ast.search_suffix(b"");
        owners.sort_unstable();
        assert_eq!(owners, vec![b"ananas".as_slice(), b"banana".as_slice()]);
    }

    #[test]
    fn erase_removes_every_suffix_of_a_key_without_disturbing_others() {
        let mut ast = AdaptiveSuffixTree::new();
        let banana = ast.insert(b"banana");
        ast.insert(b"ananas");
        ast.erase(banana);
        assert!(!ast.search_exact(b"banana"));
        assert!(ast.search_suffix(b"ananas").contains(&b"ananas".as_slice()));
        assert!(!ast.search_suffix(b"anana").iter().any(|k| *k == b"banana".as_slice()));
    }
}
