//! Node trait definitions.
//!
//! Nodes live in an [`Arena`](crate::arena::Arena) and refer to their
//! children by `Option<u32>` slot index. There are no parent links: every
//! upward walk is done with an explicit stack or a reconstructed
//! root-to-node path.

/// Child links (`l`, `r`).
pub trait Node {
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);
}

/// Key-carrying node interface used by the search helpers.
pub trait KvNode<K>: Node {
    fn key(&self) -> &K;
    fn key_mut(&mut self) -> &mut K;
}

/// Comparator derived from [`Ord`], used when no custom one is given.
pub fn default_comparator<K: Ord>(a: &K, b: &K) -> i32 {
    match a.cmp(b) {
        std::cmp::Ordering::Less => -1,
        std::cmp::Ordering::Equal => 0,
        std::cmp::Ordering::Greater => 1,
    }
}
