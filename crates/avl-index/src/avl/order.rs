//! Floor and ceiling of a stored key.
//!
//! Both queries rebuild the root-to-key path and walk it upward instead
//! of following parent links. Keys equal to the query are never an
//! answer, so a tree holding several copies of a key still reports its
//! strict neighbours.

use tracing::debug;

use crate::arena::Arena;
use crate::error::{AvlError, Result};
use crate::util::path_to;

use super::types::AvlNode;

/// Greatest key in the subtree at `root` comparing strictly below `key`.
fn greatest_below<K, C>(
    arena: &Arena<AvlNode<K>>,
    root: Option<u32>,
    key: &K,
    comparator: &C,
) -> Option<u32>
where
    C: Fn(&K, &K) -> i32,
{
    let mut curr = root;
    let mut best = None;
    while let Some(i) = curr {
        if comparator(&arena[i].k, key) < 0 {
            best = Some(i);
            curr = arena[i].r;
        } else {
            curr = arena[i].l;
        }
    }
    best
}

/// Least key in the subtree at `root` comparing strictly above `key`.
fn least_above<K, C>(
    arena: &Arena<AvlNode<K>>,
    root: Option<u32>,
    key: &K,
    comparator: &C,
) -> Option<u32>
where
    C: Fn(&K, &K) -> i32,
{
    let mut curr = root;
    let mut best = None;
    while let Some(i) = curr {
        if comparator(&arena[i].k, key) > 0 {
            best = Some(i);
            curr = arena[i].l;
        } else {
            curr = arena[i].r;
        }
    }
    best
}

/// Greatest stored key strictly below `key`, which must itself be stored.
///
/// Fails with [`AvlError::NotFound`] if `key` is absent and with
/// [`AvlError::NoFloor`] if no smaller key exists.
pub fn floor<'a, K, C>(
    arena: &'a Arena<AvlNode<K>>,
    root: Option<u32>,
    key: &K,
    comparator: &C,
) -> Result<&'a K>
where
    C: Fn(&K, &K) -> i32,
{
    let Some(path) = path_to(arena, root, key, comparator) else {
        debug!("floor: key not in tree");
        return Err(AvlError::NotFound);
    };
    let Some((&n, ancestors)) = path.split_last() else {
        return Err(AvlError::NotFound);
    };

    // The left subtree sits right before `n` in order but may hold copies
    // of `key`.
    if let Some(i) = greatest_below(arena, arena[n].l, key, comparator) {
        return Ok(&arena[i].k);
    }

    ancestors
        .iter()
        .rev()
        .map(|&i| &arena[i].k)
        .find(|k| comparator(*k, key) < 0)
        .ok_or_else(|| {
            debug!("floor: key is the minimum");
            AvlError::NoFloor
        })
}

/// Least stored key strictly above `key`, which must itself be stored.
///
/// Fails with [`AvlError::NotFound`] if `key` is absent and with
/// [`AvlError::NoCeiling`] if no larger key exists.
pub fn ceiling<'a, K, C>(
    arena: &'a Arena<AvlNode<K>>,
    root: Option<u32>,
    key: &K,
    comparator: &C,
) -> Result<&'a K>
where
    C: Fn(&K, &K) -> i32,
{
    let Some(path) = path_to(arena, root, key, comparator) else {
        debug!("ceiling: key not in tree");
        return Err(AvlError::NotFound);
    };
    let Some((&n, ancestors)) = path.split_last() else {
        return Err(AvlError::NotFound);
    };

    if let Some(i) = least_above(arena, arena[n].r, key, comparator) {
        return Ok(&arena[i].k);
    }

    ancestors
        .iter()
        .rev()
        .map(|&i| &arena[i].k)
        .find(|k| comparator(*k, key) > 0)
        .ok_or_else(|| {
            debug!("ceiling: key is the maximum");
            AvlError::NoCeiling
        })
}
