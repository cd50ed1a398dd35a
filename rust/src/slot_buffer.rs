//! Growable slot buffer backing the tree's node storage.
//!
//! Slots are addressed by [`NodeId`]. Growth reallocates the underlying
//! `Vec`, which moves every slot in memory but never changes an index, so
//! callers hold indices across insertions and re-derive references after.
//! A removed slot is either recycled through a free list or retired for
//! good, depending on the [`SlotPolicy`].

use crate::types::{NodeId, NONE};
use std::ops::{Index, IndexMut};

/// What happens to a slot once its occupant is released.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlotPolicy {
    /// Released slots go on a free list and are handed out again by `append`.
    #[default]
    Reuse,
    /// Released slots stay empty forever; an index is never handed out twice.
    Retain,
}

/// Statistics for a slot buffer
#[derive(Debug, Clone, Copy)]
pub struct SlotBufferStats {
    pub total_capacity: usize,
    pub slot_count: usize,
    pub live_count: usize,
    pub free_count: usize,
    pub utilization: f64,
    pub fragmentation: f64,
}

/// Contiguous, index-stable storage with per-slot liveness.
#[derive(Debug, Clone)]
pub struct SlotBuffer<T> {
    /// `None` marks a released slot
    storage: Vec<Option<T>>,
    /// Released slot indices available for reuse
    free_list: Vec<NodeId>,
    live: usize,
    policy: SlotPolicy,
}

impl<T> SlotBuffer<T> {
    /// Create a new empty buffer
    pub fn new(policy: SlotPolicy) -> Self {
        Self::with_capacity(0, policy)
    }

    /// Create a new buffer with pre-allocated capacity
    pub fn with_capacity(capacity: usize, policy: SlotPolicy) -> Self {
        Self {
            storage: Vec::with_capacity(capacity),
            free_list: Vec::new(),
            live: 0,
            policy,
        }
    }

    /// Store `item` in the next free slot and return its index.
    ///
    /// Under [`SlotPolicy::Reuse`] the most recently released slot is filled
    /// first; otherwise the buffer appends, growing if necessary. Indices
    /// returned earlier stay valid either way.
    #[inline]
    pub fn append(&mut self, item: T) -> NodeId {
        self.live += 1;

        if let Some(free_id) = self.free_list.pop() {
            log::trace!("slot buffer reusing slot {}", free_id);
            self.storage[free_id as usize] = Some(item);
            return free_id;
        }

        let index = self.storage.len();
        assert!(
            index < NONE as usize,
            "SlotBuffer::append: slot index space exhausted at {} slots",
            index
        );
        if index == self.storage.capacity() {
            log::trace!("slot buffer growing past {} slots", index);
        }
        self.storage.push(Some(item));
        index as NodeId
    }

    /// Ensure capacity for at least `n` slots without changing the slot count.
    pub fn reserve(&mut self, n: usize) {
        if n > self.storage.capacity() {
            self.storage.reserve(n - self.storage.len());
        }
    }

    /// Take the occupant out of a live slot.
    ///
    /// Returns `None` if the slot is out of range or already released.
    pub fn release(&mut self, id: NodeId) -> Option<T> {
        let item = self.storage.get_mut(id as usize)?.take()?;
        self.live -= 1;
        if self.policy == SlotPolicy::Reuse {
            self.free_list.push(id);
        }
        Some(item)
    }

    /// Get a reference to a live slot
    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&T> {
        self.storage.get(id as usize)?.as_ref()
    }

    /// Get a mutable reference to a live slot
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.storage.get_mut(id as usize)?.as_mut()
    }

    /// Check if an index addresses a live slot
    pub fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    /// Iterate over live slots in physical order
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &T)> + '_ {
        self.storage
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|item| (index as NodeId, item)))
    }

    /// Iterate mutably over live slots in physical order
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (NodeId, &mut T)> + '_ {
        self.storage
            .iter_mut()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_mut().map(|item| (index as NodeId, item)))
    }

    /// Move every live slot to the front, preserving physical order.
    ///
    /// Returns the old-to-new index mapping (`NONE` for released slots).
    /// This is the only operation that changes the index of a live slot.
    pub fn compact(&mut self) -> Vec<NodeId> {
        let mut mapping = vec![NONE; self.storage.len()];
        let old_storage = std::mem::take(&mut self.storage);
        self.storage = Vec::with_capacity(self.live);

        for (old_index, slot) in old_storage.into_iter().enumerate() {
            if let Some(item) = slot {
                mapping[old_index] = self.storage.len() as NodeId;
                self.storage.push(Some(item));
            }
        }

        self.free_list.clear();
        mapping
    }

    /// Get buffer statistics
    pub fn stats(&self) -> SlotBufferStats {
        let total_capacity = self.storage.capacity();
        let slot_count = self.storage.len();
        let free_count = slot_count - self.live;
        let utilization = if total_capacity > 0 {
            self.live as f64 / total_capacity as f64
        } else {
            0.0
        };
        let fragmentation = if slot_count > 0 {
            free_count as f64 / slot_count as f64
        } else {
            0.0
        };

        SlotBufferStats {
            total_capacity,
            slot_count,
            live_count: self.live,
            free_count,
            utilization,
            fragmentation,
        }
    }

    /// Get the number of live slots
    pub fn len(&self) -> usize {
        self.live
    }

    /// Check if the buffer holds no live slots
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Get the number of slots ever handed out, live or released
    pub fn slot_count(&self) -> usize {
        self.storage.len()
    }

    /// Get the total capacity
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    /// Get the number of released slots waiting for reuse
    pub fn free_count(&self) -> usize {
        self.free_list.len()
    }

    pub fn policy(&self) -> SlotPolicy {
        self.policy
    }

    /// Clear all slots, keeping the allocation
    pub fn clear(&mut self) {
        self.storage.clear();
        self.free_list.clear();
        self.live = 0;
    }
}

impl<T> Default for SlotBuffer<T> {
    fn default() -> Self {
        Self::new(SlotPolicy::default())
    }
}

impl<T> Index<NodeId> for SlotBuffer<T> {
    type Output = T;

    #[inline]
    fn index(&self, id: NodeId) -> &T {
        match self.get(id) {
            Some(item) => item,
            None => panic!("SlotBuffer: slot {} is not live", id),
        }
    }
}

impl<T> IndexMut<NodeId> for SlotBuffer<T> {
    #[inline]
    fn index_mut(&mut self, id: NodeId) -> &mut T {
        match self.get_mut(id) {
            Some(item) => item,
            None => panic!("SlotBuffer: slot {} is not live", id),
        }
    }
}
