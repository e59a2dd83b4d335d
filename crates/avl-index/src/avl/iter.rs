use std::iter::FusedIterator;

use crate::arena::Arena;

use super::types::AvlNode;

/// Ascending in-order iterator over an [`AvlTree`](super::AvlTree).
///
/// Nodes have no parent links, so the iterator keeps the ancestors it
/// still has to visit on an explicit stack. The iterator borrows the tree,
/// which rules out mutation while it is alive.
pub struct Iter<'a, K> {
    arena: &'a Arena<AvlNode<K>>,
    current: Option<u32>,
    stack: Vec<u32>,
    remaining: usize,
}

impl<'a, K> Iter<'a, K> {
    pub(crate) fn new(arena: &'a Arena<AvlNode<K>>, root: Option<u32>) -> Self {
        let mut iter = Self {
            arena,
            current: None,
            stack: Vec::new(),
            remaining: arena.len(),
        };
        if let Some(root) = root {
            let leftmost = iter.descend_left(root);
            iter.current = Some(leftmost);
        }
        iter
    }

    /// Pushes the left chain below `from` and returns its leftmost node.
    fn descend_left(&mut self, from: u32) -> u32 {
        let mut curr = from;
        while let Some(l) = self.arena[curr].l {
            self.stack.push(curr);
            curr = l;
        }
        curr
    }

    /// `true` while a key is still to be yielded.
    pub fn has_next(&self) -> bool {
        self.current.is_some()
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        let curr = self.current?;
        let arena = self.arena;
        let node = &arena[curr];
        self.current = match node.r {
            Some(r) => Some(self.descend_left(r)),
            None => self.stack.pop(),
        };
        self.remaining -= 1;
        Some(&node.k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for Iter<'_, K> {}

impl<K> FusedIterator for Iter<'_, K> {}
