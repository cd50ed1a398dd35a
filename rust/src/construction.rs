//! Construction and configuration for RbTree.
//!
//! This module holds the tree's configuration type, its constructors, and
//! the std construction traits (`Default`, `FromIterator`, `Extend`).

use crate::comparator::{Comparator, NaturalOrder};
use crate::error::{InitResult, RbTreeError};
use crate::slot_buffer::{SlotBuffer, SlotPolicy};
use crate::types::{RbTree, NONE};

/// Default initial slot capacity
pub const DEFAULT_CAPACITY: usize = 16;

/// Construction-time settings for a tree.
///
/// ```
/// use rbarena::{RbTree, SlotPolicy, TreeConfig};
///
/// let config = TreeConfig::default()
///     .with_initial_capacity(1024)
///     .with_slot_policy(SlotPolicy::Retain);
/// let tree: RbTree<u64, String> = RbTree::with_config(config);
/// assert!(tree.slot_capacity() >= 1024);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeConfig {
    /// Number of node slots to allocate up front.
    pub initial_capacity: usize,
    /// Whether removed slots are recycled.
    pub slot_policy: SlotPolicy,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_CAPACITY,
            slot_policy: SlotPolicy::Reuse,
        }
    }
}

impl TreeConfig {
    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    pub fn with_slot_policy(mut self, slot_policy: SlotPolicy) -> Self {
        self.slot_policy = slot_policy;
        self
    }

    /// Reject capacities the index type cannot address.
    pub fn validate(&self) -> InitResult<()> {
        let max_slots = NONE as usize;
        if self.initial_capacity > max_slots {
            return Err(RbTreeError::invalid_capacity(self.initial_capacity, max_slots));
        }
        Ok(())
    }
}

impl<K, V> RbTree<K, V, NaturalOrder> {
    /// Create an empty tree ordered by `K`'s `PartialOrd`.
    pub fn new() -> Self {
        Self::with_config(TreeConfig::default())
    }

    /// Create an empty tree with room for `capacity` nodes before growing.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_config(TreeConfig::default().with_initial_capacity(capacity))
    }

    /// Create an empty tree from explicit settings.
    pub fn with_config(config: TreeConfig) -> Self {
        Self::with_config_and_comparator(config, NaturalOrder)
    }

    /// Like [`with_config`](Self::with_config), rejecting invalid settings.
    pub fn try_with_config(config: TreeConfig) -> InitResult<Self> {
        config.validate()?;
        Ok(Self::with_config(config))
    }
}

impl<K, V, C> RbTree<K, V, C> {
    /// Create an empty tree ordered by `comparator`.
    pub fn with_comparator(comparator: C) -> Self {
        Self::with_config_and_comparator(TreeConfig::default(), comparator)
    }

    pub fn with_config_and_comparator(config: TreeConfig, comparator: C) -> Self {
        log::debug!(
            "creating tree with {} slots, {:?} policy",
            config.initial_capacity,
            config.slot_policy
        );
        Self {
            nodes: SlotBuffer::with_capacity(config.initial_capacity, config.slot_policy),
            root: NONE,
            len: 0,
            comparator,
        }
    }

    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    pub fn slot_policy(&self) -> SlotPolicy {
        self.nodes.policy()
    }
}

impl<K, V, C: Default> Default for RbTree<K, V, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<K, V, C> FromIterator<(K, V)> for RbTree<K, V, C>
where
    C: Comparator<K> + Default,
{
    /// Builds a tree from pairs; for repeated keys the first pair wins.
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tree = Self::default();
        tree.extend(iter);
        tree
    }
}

impl<K, V, C: Comparator<K>> Extend<(K, V)> for RbTree<K, V, C> {
    /// Adds every pair; pairs whose key is already present are dropped.
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        self.reserve(lower);
        for (key, value) in iter {
            self.add(key, value);
        }
    }
}
