use std::collections::BTreeSet;

use avl_index::AvlTree;
use proptest::prelude::*;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;

fn height_bound(n: usize) -> u32 {
    (1.44 * ((n + 2) as f64).log2()).ceil() as u32
}

#[test]
fn avl_random_permutation_full_delete_matrix() {
    let mut rng = Xoshiro256StarStar::seed_from_u64(42);
    let mut keys: Vec<u32> = (0..100_000).collect();
    keys.shuffle(&mut rng);

    let mut tree = AvlTree::new();
    for &k in &keys {
        tree.insert(k);
    }
    assert_eq!(tree.len(), 100_000);
    assert!(tree.height() <= height_bound(100_000));
    tree.assert_valid().unwrap();
    assert!(tree.iter().copied().eq(0..100_000));

    keys.shuffle(&mut rng);
    for (i, k) in keys.iter().enumerate() {
        assert!(tree.delete(k), "delete {k}");
        if i % 25_000 == 0 {
            tree.assert_valid().unwrap();
        }
    }

    assert!(tree.is_empty());
    assert_eq!(tree.height(), 0);
    assert!(tree.root().is_none());
}

#[test]
fn avl_sequential_height_bound_matrix() {
    let mut tree = AvlTree::new();
    for n in 1..=4096usize {
        tree.insert(n);
        if n.is_power_of_two() {
            assert!(
                tree.height() <= height_bound(n),
                "height {} exceeds bound for {n} keys",
                tree.height()
            );
        }
    }
    tree.assert_valid().unwrap();
}

#[derive(Clone, Debug)]
enum Op {
    Insert(i16),
    Probe(i16),
    Delete(i16),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0i16..256).prop_map(Op::Insert),
        (0i16..256).prop_map(Op::Probe),
        (0i16..256).prop_map(Op::Delete),
    ]
}

proptest! {
    #[test]
    fn set_operations_match_btree_set(ops in prop::collection::vec(op(), 0..300)) {
        let mut tree = AvlTree::new();
        let mut model = BTreeSet::new();

        for op in ops {
            match op {
                // Keep raw insert on set semantics so the model stays a set.
                Op::Insert(k) => {
                    if model.insert(k) {
                        tree.insert(k);
                    }
                }
                Op::Probe(k) => prop_assert_eq!(tree.probe(k), model.insert(k)),
                Op::Delete(k) => prop_assert_eq!(tree.delete(&k), model.remove(&k)),
            }
            prop_assert!(tree.assert_valid().is_ok());
        }

        prop_assert_eq!(tree.len(), model.len());
        prop_assert!(tree.height() <= height_bound(model.len()));
        prop_assert!(tree.iter().eq(model.iter()));
        for k in 0i16..256 {
            prop_assert_eq!(tree.search(&k), model.contains(&k));
        }
    }

    #[test]
    fn floor_ceiling_bracket_present_keys(keys in prop::collection::btree_set(any::<i32>(), 1..200)) {
        let tree: AvlTree<i32> = keys.iter().copied().collect();
        let sorted: Vec<i32> = keys.iter().copied().collect();

        for (i, k) in sorted.iter().enumerate() {
            match tree.floor(k) {
                Ok(f) => prop_assert!(i > 0 && *f == sorted[i - 1] && f < k),
                Err(_) => prop_assert_eq!(i, 0),
            }
            match tree.ceiling(k) {
                Ok(c) => prop_assert!(i + 1 < sorted.len() && *c == sorted[i + 1] && c > k),
                Err(_) => prop_assert_eq!(i + 1, sorted.len()),
            }
        }
    }

    #[test]
    fn multiset_insert_keeps_every_copy(keys in prop::collection::vec(0u8..16, 0..200)) {
        let mut tree = AvlTree::new();
        for &k in &keys {
            tree.insert(k);
        }
        prop_assert!(tree.assert_valid().is_ok());

        let mut sorted = keys.clone();
        sorted.sort_unstable();
        prop_assert!(tree.iter().eq(sorted.iter()));

        for &k in &keys {
            prop_assert!(tree.delete(&k));
            prop_assert!(tree.assert_valid().is_ok());
        }
        prop_assert!(tree.is_empty());
    }

    #[test]
    fn floor_ceiling_skip_equal_copies(keys in prop::collection::vec(0u8..16, 1..200)) {
        let mut tree = AvlTree::new();
        for &k in &keys {
            tree.insert(k);
        }
        for &k in &keys {
            let below = keys.iter().filter(|&&x| x < k).max();
            let above = keys.iter().filter(|&&x| x > k).min();
            prop_assert_eq!(tree.floor(&k).ok(), below);
            prop_assert_eq!(tree.ceiling(&k).ok(), above);
        }
    }
}
