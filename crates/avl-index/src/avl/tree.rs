use std::fmt;

use tracing::debug;

use crate::arena::Arena;
use crate::error::Result;
use crate::types::default_comparator;
use crate::util::{find, first, last, size};

use super::iter::Iter;
use super::node_ref::NodeRef;
use super::order;
use super::types::AvlNode;
use super::util::{assert_avl_tree, insert, node_height, remove};

/// AVL tree over keys ordered by a three-way comparator.
///
/// [`probe`](Self::probe) gives set semantics and is the usual way in.
/// [`insert`](Self::insert) always adds a node, so inserting an equal key
/// twice stores it twice; [`search`](Self::search) and
/// [`delete`](Self::delete) then resolve to the first match from the root.
pub struct AvlTree<K, C = fn(&K, &K) -> i32>
where
    C: Fn(&K, &K) -> i32,
{
    root: Option<u32>,
    comparator: C,
    arena: Arena<AvlNode<K>>,
}

impl<K> AvlTree<K, fn(&K, &K) -> i32>
where
    K: Ord,
{
    /// An empty tree ordered by [`Ord`].
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<K>)
    }
}

impl<K> Default for AvlTree<K, fn(&K, &K) -> i32>
where
    K: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, C> AvlTree<K, C>
where
    C: Fn(&K, &K) -> i32,
{
    /// An empty tree ordered by `comparator`, which must be a total order
    /// returning a negative, zero or positive value.
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            root: None,
            comparator,
            arena: Arena::new(),
        }
    }

    /// Adds `key` unconditionally. An equal key already present is kept.
    pub fn insert(&mut self, key: K) {
        let node = self.arena.alloc(AvlNode::new(key));
        self.root = Some(insert(&mut self.arena, self.root, node, &self.comparator));
    }

    /// Adds `key` if no equal key is stored. Returns `true` if it was
    /// added, `false` if the tree is left unchanged.
    pub fn probe(&mut self, key: K) -> bool {
        if self.search(&key) {
            return false;
        }
        self.insert(key);
        true
    }

    /// Removes one key equal to `key`. Returns `false` if none is stored.
    pub fn delete(&mut self, key: &K) -> bool {
        let (root, removed) = remove(&mut self.arena, self.root, key, &self.comparator);
        let Some(removed) = removed else {
            debug!("delete: key not in tree");
            return false;
        };
        self.root = root;
        self.arena.free(removed);
        true
    }

    /// Whether a key equal to `key` is stored.
    pub fn search(&self, key: &K) -> bool {
        find(&self.arena, self.root, key, &self.comparator).is_some()
    }

    /// Alias of [`search`](Self::search).
    pub fn has(&self, key: &K) -> bool {
        self.search(key)
    }

    /// Greatest stored key strictly less than the stored key `key`.
    ///
    /// Other copies of `key` added through [`insert`](Self::insert) are
    /// skipped.
    pub fn floor(&self, key: &K) -> Result<&K> {
        order::floor(&self.arena, self.root, key, &self.comparator)
    }

    /// Least stored key strictly greater than the stored key `key`.
    ///
    /// Other copies of `key` are skipped, as in [`floor`](Self::floor).
    pub fn ceiling(&self, key: &K) -> Result<&K> {
        order::ceiling(&self.arena, self.root, key, &self.comparator)
    }

    /// Height of the root, 0 for an empty tree.
    pub fn height(&self) -> u32 {
        node_height(&self.arena, self.root)
    }

    pub fn root(&self) -> Option<NodeRef<'_, K>> {
        self.root.map(|i| NodeRef::new(&self.arena, i))
    }

    /// Smallest key.
    pub fn first(&self) -> Option<&K> {
        first(&self.arena, self.root).map(|i| &self.arena[i].k)
    }

    /// Largest key.
    pub fn last(&self) -> Option<&K> {
        last(&self.arena, self.root).map(|i| &self.arena[i].k)
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn clear(&mut self) {
        debug!("clear: dropping {} keys", self.arena.len());
        self.root = None;
        self.arena.clear();
    }

    /// Keys in ascending order.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter::new(&self.arena, self.root)
    }

    /// Checks ordering, balance, cached heights and the node count.
    pub fn assert_valid(&self) -> std::result::Result<(), String> {
        assert_avl_tree(&self.arena, self.root, &self.comparator)?;
        let counted = size(&self.arena, self.root);
        if counted != self.arena.len() {
            return Err(format!(
                "Node count mismatch: {counted} reachable, {} allocated",
                self.arena.len()
            ));
        }
        Ok(())
    }
}

impl<'a, K, C> IntoIterator for &'a AvlTree<K, C>
where
    C: Fn(&K, &K) -> i32,
{
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Iter<'a, K> {
        self.iter()
    }
}

impl<K, C> Extend<K> for AvlTree<K, C>
where
    C: Fn(&K, &K) -> i32,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.probe(key);
        }
    }
}

impl<K> FromIterator<K> for AvlTree<K, fn(&K, &K) -> i32>
where
    K: Ord,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K, C> fmt::Debug for AvlTree<K, C>
where
    K: fmt::Debug,
    C: Fn(&K, &K) -> i32,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
