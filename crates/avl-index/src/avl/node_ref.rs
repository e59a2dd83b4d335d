use std::fmt;

use crate::arena::Arena;

use super::types::AvlNode;
use super::util::min_node;

/// Read-only view of one node, borrowed from its tree.
pub struct NodeRef<'a, K> {
    arena: &'a Arena<AvlNode<K>>,
    idx: u32,
}

impl<K> Clone for NodeRef<'_, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for NodeRef<'_, K> {}

impl<'a, K> NodeRef<'a, K> {
    pub(crate) fn new(arena: &'a Arena<AvlNode<K>>, idx: u32) -> Self {
        Self { arena, idx }
    }

    #[inline]
    fn node(&self) -> &'a AvlNode<K> {
        let arena = self.arena;
        &arena[self.idx]
    }

    pub fn key(&self) -> &'a K {
        &self.node().k
    }

    pub fn height(&self) -> u32 {
        self.node().height
    }

    pub fn left(&self) -> Option<NodeRef<'a, K>> {
        self.node().l.map(|i| NodeRef::new(self.arena, i))
    }

    pub fn right(&self) -> Option<NodeRef<'a, K>> {
        self.node().r.map(|i| NodeRef::new(self.arena, i))
    }

    /// Leftmost node of the subtree rooted here.
    pub fn min_node(&self) -> NodeRef<'a, K> {
        NodeRef::new(self.arena, min_node(self.arena, self.idx))
    }
}

impl<K: fmt::Debug> fmt::Debug for NodeRef<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("key", self.key())
            .field("height", &self.height())
            .finish()
    }
}

/// Height of `node`, 0 when absent.
pub fn node_height<K>(node: Option<NodeRef<'_, K>>) -> u32 {
    node.map_or(0, |n| n.height())
}
