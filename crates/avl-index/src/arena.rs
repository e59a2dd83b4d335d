//! Slot arena owning every node of a tree.
//!
//! Nodes are addressed by `u32` slot index. Freed slots are threaded onto a
//! free list and handed out again by [`Arena::alloc`], so the arena never
//! grows past the peak number of live nodes.

use std::ops::{Index, IndexMut};

#[derive(Clone, Debug)]
enum Slot<N> {
    Occupied(N),
    /// Link to the next free slot.
    Vacant(Option<u32>),
}

#[derive(Clone, Debug)]
pub struct Arena<N> {
    slots: Vec<Slot<N>>,
    free: Option<u32>,
    len: usize,
}

impl<N> Default for Arena<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> Arena<N> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: None,
            len: 0,
        }
    }

    /// Stores `node` and returns its slot index.
    pub fn alloc(&mut self, node: N) -> u32 {
        self.len += 1;
        if let Some(idx) = self.free {
            let slot = std::mem::replace(&mut self.slots[idx as usize], Slot::Occupied(node));
            match slot {
                Slot::Vacant(next) => self.free = next,
                Slot::Occupied(_) => unreachable!("free list points at a live slot"),
            }
            return idx;
        }
        let idx = u32::try_from(self.slots.len()).expect("arena exceeds u32 index space");
        self.slots.push(Slot::Occupied(node));
        idx
    }

    /// Removes the node at `idx` and returns it. The slot is recycled.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is not a live slot.
    pub fn free(&mut self, idx: u32) -> N {
        let slot = std::mem::replace(&mut self.slots[idx as usize], Slot::Vacant(self.free));
        match slot {
            Slot::Occupied(node) => {
                self.free = Some(idx);
                self.len -= 1;
                node
            }
            Slot::Vacant(next) => {
                self.slots[idx as usize] = Slot::Vacant(next);
                panic!("double free of arena slot {idx}");
            }
        }
    }

    pub fn get(&self, idx: u32) -> Option<&N> {
        match self.slots.get(idx as usize) {
            Some(Slot::Occupied(node)) => Some(node),
            _ => None,
        }
    }

    pub fn get_mut(&mut self, idx: u32) -> Option<&mut N> {
        match self.slots.get_mut(idx as usize) {
            Some(Slot::Occupied(node)) => Some(node),
            _ => None,
        }
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drops every node. The slot storage keeps its capacity.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free = None;
        self.len = 0;
    }

    /// Two distinct live nodes, mutably.
    pub fn pair_mut(&mut self, a: u32, b: u32) -> (&mut N, &mut N) {
        assert_ne!(a, b, "pair_mut needs distinct slots");
        let (lo, hi, swapped) = if a < b { (a, b, false) } else { (b, a, true) };
        let (head, tail) = self.slots.split_at_mut(hi as usize);
        let lo_node = match &mut head[lo as usize] {
            Slot::Occupied(node) => node,
            Slot::Vacant(_) => panic!("dangling arena index {lo}"),
        };
        let hi_node = match &mut tail[0] {
            Slot::Occupied(node) => node,
            Slot::Vacant(_) => panic!("dangling arena index {hi}"),
        };
        if swapped {
            (hi_node, lo_node)
        } else {
            (lo_node, hi_node)
        }
    }
}

impl<N> Index<u32> for Arena<N> {
    type Output = N;

    fn index(&self, idx: u32) -> &N {
        self.get(idx)
            .unwrap_or_else(|| panic!("dangling arena index {idx}"))
    }
}

impl<N> IndexMut<u32> for Arena<N> {
    fn index_mut(&mut self, idx: u32) -> &mut N {
        self.get_mut(idx)
            .unwrap_or_else(|| panic!("dangling arena index {idx}"))
    }
}
