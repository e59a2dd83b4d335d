//! Recursive AVL engine over an arena.
//!
//! Every mutating function takes the root of a subtree and returns the
//! (possibly rotated) new root of that subtree; the caller re-links it.
//! Heights are recomputed bottom-up as the recursion unwinds.

use tracing::trace;

use crate::arena::Arena;
use crate::types::Node;
use crate::util::{get_l, get_r, set_l, set_r};

use super::types::AvlNodeLike;

/// Cached height of `node`, 0 when absent.
#[inline]
pub fn node_height<K, N>(arena: &Arena<N>, node: Option<u32>) -> u32
where
    N: AvlNodeLike<K>,
{
    node.map_or(0, |i| arena[i].height())
}

/// `height(left) - height(right)`, 0 for an absent node.
#[inline]
pub fn balance<K, N>(arena: &Arena<N>, node: Option<u32>) -> i32
where
    N: AvlNodeLike<K>,
{
    let Some(i) = node else {
        return 0;
    };
    let lh = node_height(arena, get_l(arena, i)) as i32;
    let rh = node_height(arena, get_r(arena, i)) as i32;
    lh - rh
}

#[inline]
fn update_height<K, N>(arena: &mut Arena<N>, n: u32)
where
    N: AvlNodeLike<K>,
{
    let lh = node_height(arena, get_l(arena, n));
    let rh = node_height(arena, get_r(arena, n));
    arena[n].set_height(1 + lh.max(rh));
}

/// Makes the left child of `n` the subtree root; `n` becomes its right
/// child. Returns the new subtree root.
pub fn rotate_right<K, N>(arena: &mut Arena<N>, n: u32) -> u32
where
    N: AvlNodeLike<K>,
{
    let l = get_l(arena, n).expect("right rotation needs a left child");
    let lr = get_r(arena, l);
    set_r(arena, l, Some(n));
    set_l(arena, n, lr);

    // `n` is now below `l`, so its height goes first.
    update_height(arena, n);
    update_height(arena, l);
    trace!("rotate right: slot {} -> slot {}", n, l);
    l
}

/// Makes the right child of `n` the subtree root; `n` becomes its left
/// child. Returns the new subtree root.
pub fn rotate_left<K, N>(arena: &mut Arena<N>, n: u32) -> u32
where
    N: AvlNodeLike<K>,
{
    let r = get_r(arena, n).expect("left rotation needs a right child");
    let rl = get_l(arena, r);
    set_l(arena, r, Some(n));
    set_r(arena, n, rl);

    update_height(arena, n);
    update_height(arena, r);
    trace!("rotate left: slot {} -> slot {}", n, r);
    r
}

/// Recomputes the height of `n` and restores its balance.
///
/// The rotation case is chosen by the heavy child's own balance factor:
///
/// | bf(n) | child bf       | action                     |
/// |-------|----------------|----------------------------|
/// | > 1   | bf(l) >= 0     | right rotation             |
/// | > 1   | bf(l) < 0      | left on `l`, then right    |
/// | < -1  | bf(r) <= 0     | left rotation              |
/// | < -1  | bf(r) > 0      | right on `r`, then left    |
///
/// After an insertion the heavy child is never level, so this picks the
/// same case as locating the inserted key in the left-left, left-right,
/// right-right or right-left grandchild.
fn rebalance<K, N>(arena: &mut Arena<N>, n: u32) -> u32
where
    N: AvlNodeLike<K>,
{
    update_height(arena, n);
    let bf = balance(arena, Some(n));

    if bf > 1 {
        let l = get_l(arena, n).expect("left-heavy node has a left child");
        if balance(arena, Some(l)) < 0 {
            let nl = rotate_left(arena, l);
            set_l(arena, n, Some(nl));
        }
        return rotate_right(arena, n);
    }

    if bf < -1 {
        let r = get_r(arena, n).expect("right-heavy node has a right child");
        if balance(arena, Some(r)) > 0 {
            let nr = rotate_right(arena, r);
            set_r(arena, n, Some(nr));
        }
        return rotate_left(arena, n);
    }

    n
}

/// Links the detached leaf `n` into the subtree at `root` and returns the
/// new subtree root.
///
/// A key equal to a node's key descends left, so repeated inserts of the
/// same key are all kept.
pub fn insert<K, N, C>(arena: &mut Arena<N>, root: Option<u32>, n: u32, comparator: &C) -> u32
where
    N: AvlNodeLike<K>,
    C: Fn(&K, &K) -> i32,
{
    let Some(curr) = root else {
        return n;
    };

    if comparator(arena[n].key(), arena[curr].key()) > 0 {
        let r = insert(arena, get_r(arena, curr), n, comparator);
        set_r(arena, curr, Some(r));
    } else {
        let l = insert(arena, get_l(arena, curr), n, comparator);
        set_l(arena, curr, Some(l));
    }

    rebalance(arena, curr)
}

/// Leftmost node of the subtree at `n`.
pub fn min_node<N: Node>(arena: &Arena<N>, n: u32) -> u32 {
    let mut curr = n;
    while let Some(l) = get_l(arena, curr) {
        curr = l;
    }
    curr
}

/// Unlinks the leftmost node of the subtree at `n`.
///
/// Returns the new subtree root and the detached node.
fn remove_min<K, N>(arena: &mut Arena<N>, n: u32) -> (Option<u32>, u32)
where
    N: AvlNodeLike<K>,
{
    match get_l(arena, n) {
        None => {
            let r = get_r(arena, n);
            set_r(arena, n, None);
            (r, n)
        }
        Some(l) => {
            let (nl, min) = remove_min(arena, l);
            set_l(arena, n, nl);
            (Some(rebalance(arena, n)), min)
        }
    }
}

/// Unlinks one node whose key equals `key` from the subtree at `root`.
///
/// Returns the new subtree root and the slot of the detached node, which
/// then holds the removed key. When `key` is absent nothing is touched and
/// the detached slot is `None`.
///
/// A node with two children takes over its in-order successor's key; the
/// successor's node (holding the removed key after the swap) is what gets
/// detached.
pub fn remove<K, N, C>(
    arena: &mut Arena<N>,
    root: Option<u32>,
    key: &K,
    comparator: &C,
) -> (Option<u32>, Option<u32>)
where
    N: AvlNodeLike<K>,
    C: Fn(&K, &K) -> i32,
{
    let Some(n) = root else {
        return (None, None);
    };

    let cmp = comparator(key, arena[n].key());
    if cmp < 0 {
        let (l, removed) = remove(arena, get_l(arena, n), key, comparator);
        if removed.is_none() {
            return (Some(n), None);
        }
        set_l(arena, n, l);
        return (Some(rebalance(arena, n)), removed);
    }
    if cmp > 0 {
        let (r, removed) = remove(arena, get_r(arena, n), key, comparator);
        if removed.is_none() {
            return (Some(n), None);
        }
        set_r(arena, n, r);
        return (Some(rebalance(arena, n)), removed);
    }

    match (get_l(arena, n), get_r(arena, n)) {
        (Some(_), Some(r)) => {
            let (nr, successor) = remove_min(arena, r);
            set_r(arena, n, nr);
            let (node, donor) = arena.pair_mut(n, successor);
            std::mem::swap(node.key_mut(), donor.key_mut());
            (Some(rebalance(arena, n)), Some(successor))
        }
        (l, r) => {
            set_l(arena, n, None);
            set_r(arena, n, None);
            (l.or(r), Some(n))
        }
    }
}

/// Checks ordering, balance and cached heights of the tree at `root`.
pub fn assert_avl_tree<K, N, C>(
    arena: &Arena<N>,
    root: Option<u32>,
    comparator: &C,
) -> Result<(), String>
where
    N: AvlNodeLike<K>,
    C: Fn(&K, &K) -> i32,
{
    fn check_heights<K, N>(arena: &Arena<N>, node: Option<u32>) -> Result<u32, String>
    where
        N: AvlNodeLike<K>,
    {
        let Some(i) = node else {
            return Ok(0);
        };
        let lh = check_heights(arena, get_l(arena, i))?;
        let rh = check_heights(arena, get_r(arena, i))?;
        let expected = 1 + lh.max(rh);
        let actual = arena[i].height();
        if actual != expected {
            return Err(format!(
                "Height mismatch at slot {i}: expected {expected}, got {actual}"
            ));
        }
        let bf = lh as i32 - rh as i32;
        if !(-1..=1).contains(&bf) {
            return Err(format!("AVL balance violated at slot {i}: bf = {bf}"));
        }
        Ok(expected)
    }

    check_heights(arena, root)?;

    let mut stack = Vec::new();
    let mut curr = root;
    let mut prev: Option<u32> = None;
    while curr.is_some() || !stack.is_empty() {
        while let Some(i) = curr {
            stack.push(i);
            curr = get_l(arena, i);
        }
        let Some(i) = stack.pop() else {
            break;
        };
        if let Some(p) = prev {
            if comparator(arena[p].key(), arena[i].key()) > 0 {
                return Err(format!("Node order violated between slots {p} and {i}"));
            }
        }
        prev = Some(i);
        curr = get_r(arena, i);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::avl::types::AvlNode;
    use crate::types::default_comparator;

    fn build(keys: &[i32]) -> (Arena<AvlNode<i32>>, Option<u32>) {
        let mut arena = Arena::new();
        let mut root = None;
        for &k in keys {
            let n = arena.alloc(AvlNode::new(k));
            root = Some(insert(&mut arena, root, n, &default_comparator::<i32>));
        }
        (arena, root)
    }

    #[test]
    fn rotate_right_recomputes_both_heights() {
        let mut arena = Arena::new();
        let a = arena.alloc(AvlNode::new(1));
        let b = arena.alloc(AvlNode::new(2));
        let c = arena.alloc(AvlNode::new(3));
        // c <- b <- a, left spine with stale heights.
        arena[c].l = Some(b);
        arena[b].l = Some(a);
        arena[b].height = 2;
        arena[c].height = 3;

        let root = rotate_right(&mut arena, c);
        assert_eq!(root, b);
        assert_eq!(arena[b].r, Some(c));
        assert_eq!(arena[c].l, None);
        assert_eq!(arena[c].height, 1);
        assert_eq!(arena[b].height, 2);
        assert_eq!(balance(&arena, Some(b)), 0);
    }

    #[test]
    fn rotate_left_moves_inner_grandchild() {
        let (mut arena, root) = build(&[2, 1, 4, 3, 5]);
        let root = root.unwrap();
        let new_root = rotate_left(&mut arena, root);
        assert_eq!(arena[new_root].k, 4);
        let old_root = arena[new_root].l.unwrap();
        assert_eq!(arena[old_root].k, 2);
        // 3 was the left child of 4 and is now the right child of 2.
        assert_eq!(arena[old_root].r.map(|i| arena[i].k), Some(3));
        assert_eq!(arena[old_root].height, 2);
        assert_eq!(arena[new_root].height, 3);
    }

    #[test]
    fn remove_two_child_node_takes_successor_key() {
        let (mut arena, root) = build(&[4, 2, 6, 1, 3, 5, 7]);
        let (root, removed) = remove(&mut arena, root, &4, &default_comparator::<i32>);
        let removed = removed.unwrap();
        assert_eq!(arena[removed].k, 4);
        assert_eq!(root.map(|i| arena[i].k), Some(5));
        arena.free(removed);
        assert_avl_tree(&arena, root, &default_comparator::<i32>).unwrap();
    }

    #[test]
    fn remove_missing_key_leaves_tree_untouched() {
        let (mut arena, root) = build(&[1, 2, 3]);
        let (new_root, removed) = remove(&mut arena, root, &9, &default_comparator::<i32>);
        assert_eq!(new_root, root);
        assert!(removed.is_none());
        assert_eq!(arena.len(), 3);
    }

    #[test]
    fn assert_avl_tree_reports_stale_height() {
        let (mut arena, root) = build(&[1, 2, 3]);
        let r = root.unwrap();
        arena[r].height = 5;
        let err = assert_avl_tree(&arena, root, &default_comparator::<i32>).unwrap_err();
        assert!(err.contains("Height mismatch"), "{err}");
    }

    #[test]
    fn min_node_follows_left_links() {
        let (arena, root) = build(&[5, 3, 8, 1, 4]);
        let root = root.unwrap();
        assert_eq!(arena[min_node(&arena, root)].k, 1);
        let right = arena[root].r.unwrap();
        assert_eq!(arena[min_node(&arena, right)].k, 8);
    }
}
