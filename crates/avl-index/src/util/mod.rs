//! Parent-free traversal helpers.
//!
//! Nodes carry no parent links, so anything that needs to look upward
//! either rebuilds the root-to-node path ([`path_to`]) or keeps its own
//! ancestor stack (see [`crate::avl::Iter`]).

use crate::arena::Arena;
use crate::types::{KvNode, Node};

#[inline]
pub(crate) fn get_l<N: Node>(arena: &Arena<N>, idx: u32) -> Option<u32> {
    arena[idx].l()
}

#[inline]
pub(crate) fn get_r<N: Node>(arena: &Arena<N>, idx: u32) -> Option<u32> {
    arena[idx].r()
}

#[inline]
pub(crate) fn set_l<N: Node>(arena: &mut Arena<N>, idx: u32, v: Option<u32>) {
    arena[idx].set_l(v);
}

#[inline]
pub(crate) fn set_r<N: Node>(arena: &mut Arena<N>, idx: u32, v: Option<u32>) {
    arena[idx].set_r(v);
}

/// Leftmost node under `root`.
pub fn first<N: Node>(arena: &Arena<N>, root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(l) = get_l(arena, curr) {
        curr = l;
    }
    Some(curr)
}

/// Rightmost node under `root`.
pub fn last<N: Node>(arena: &Arena<N>, root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(r) = get_r(arena, curr) {
        curr = r;
    }
    Some(curr)
}

fn size_inner<N: Node>(arena: &Arena<N>, root: u32) -> usize {
    1 + get_l(arena, root).map_or(0, |l| size_inner(arena, l))
        + get_r(arena, root).map_or(0, |r| size_inner(arena, r))
}

/// Number of nodes under `root`, counted by walking the tree.
pub fn size<N: Node>(arena: &Arena<N>, root: Option<u32>) -> usize {
    root.map_or(0, |r| size_inner(arena, r))
}

/// Finds the first node top-down whose key compares equal to `key`.
pub fn find<K, N, C>(arena: &Arena<N>, root: Option<u32>, key: &K, comparator: &C) -> Option<u32>
where
    N: KvNode<K>,
    C: Fn(&K, &K) -> i32,
{
    let mut curr = root;
    while let Some(i) = curr {
        let cmp = comparator(key, arena[i].key());
        if cmp == 0 {
            return Some(i);
        }
        curr = if cmp < 0 {
            get_l(arena, i)
        } else {
            get_r(arena, i)
        };
    }
    None
}

/// Root-to-node path for `key`.
///
/// Returns the visited node indices in descent order, with the matched
/// node last. Returns `None` when `key` is not in the tree.
pub fn path_to<K, N, C>(
    arena: &Arena<N>,
    root: Option<u32>,
    key: &K,
    comparator: &C,
) -> Option<Vec<u32>>
where
    N: KvNode<K>,
    C: Fn(&K, &K) -> i32,
{
    let mut path = Vec::new();
    let mut curr = root;
    while let Some(i) = curr {
        path.push(i);
        let cmp = comparator(key, arena[i].key());
        if cmp == 0 {
            return Some(path);
        }
        curr = if cmp < 0 {
            get_l(arena, i)
        } else {
            get_r(arena, i)
        };
    }
    None
}
