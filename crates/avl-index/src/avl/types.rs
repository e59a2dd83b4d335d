use crate::types::{KvNode, Node};

/// One stored key with its cached subtree height.
#[derive(Clone, Debug)]
pub struct AvlNode<K> {
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub k: K,
    /// `1 + max(height(l), height(r))`; an absent child counts as 0.
    pub height: u32,
}

impl<K> AvlNode<K> {
    /// A fresh leaf.
    pub fn new(k: K) -> Self {
        Self {
            l: None,
            r: None,
            k,
            height: 1,
        }
    }
}

impl<K> Node for AvlNode<K> {
    fn l(&self) -> Option<u32> {
        self.l
    }

    fn r(&self) -> Option<u32> {
        self.r
    }

    fn set_l(&mut self, v: Option<u32>) {
        self.l = v;
    }

    fn set_r(&mut self, v: Option<u32>) {
        self.r = v;
    }
}

impl<K> KvNode<K> for AvlNode<K> {
    fn key(&self) -> &K {
        &self.k
    }

    fn key_mut(&mut self) -> &mut K {
        &mut self.k
    }
}

/// AVL-specific node behavior.
pub trait AvlNodeLike<K>: KvNode<K> {
    fn height(&self) -> u32;
    fn set_height(&mut self, height: u32);
}

impl<K> AvlNodeLike<K> for AvlNode<K> {
    fn height(&self) -> u32 {
        self.height
    }

    fn set_height(&mut self, height: u32) {
        self.height = height;
    }
}
