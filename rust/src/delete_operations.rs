//! DELETE operations for RbTree.
//!
//! Removal unlinks the node, rebalances, and then hands its slot back to the
//! slot buffer. No other node is moved, so every other slot index and
//! every `ChildRef` naming a surviving parent stays meaningful.

use crate::comparator::Comparator;
use crate::error::{ModifyResult, RbTreeError};
use crate::types::{NodeId, RbTree};

impl<K, V, C: Comparator<K>> RbTree<K, V, C> {
    /// Remove the entry whose key equals `key`, returning its value.
    ///
    /// ```
    /// use rbarena::RbTree;
    ///
    /// let mut tree: RbTree<i32, i32> = (1..=10).map(|k| (k, k * k)).collect();
    /// assert_eq!(tree.remove(&4), Some(16));
    /// assert_eq!(tree.remove(&4), None);
    /// assert_eq!(tree.len(), 9);
    /// ```
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.remove_entry(key).map(|(_, value)| value)
    }

    /// Remove the entry whose key equals `key`, returning the stored pair.
    pub fn remove_entry(&mut self, key: &K) -> Option<(K, V)> {
        let id = self.locate(key).ok()?;
        self.remove_slot(id)
    }

    /// Like [`remove`](Self::remove), reporting a missing key as `KeyNotFound`.
    pub fn try_remove(&mut self, key: &K) -> ModifyResult<V> {
        self.remove(key).ok_or(RbTreeError::KeyNotFound)
    }

    /// Remove and return the entry with the smallest key.
    pub fn pop_first(&mut self) -> Option<(K, V)> {
        let id = self.first_id()?;
        self.remove_slot(id)
    }

    /// Remove and return the entry with the largest key.
    pub fn pop_last(&mut self) -> Option<(K, V)> {
        let id = self.last_id()?;
        self.remove_slot(id)
    }

    /// Keep only the entries for which `keep` returns true.
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&K, &mut V) -> bool,
    {
        let mut doomed = Vec::new();
        self.traverse_ids_mut(|id, key, value| {
            if !keep(key, value) {
                doomed.push(id);
            }
        });
        for id in doomed {
            self.remove_slot(id);
        }
    }
}

impl<K, V, C> RbTree<K, V, C> {
    pub(crate) fn remove_slot(&mut self, id: NodeId) -> Option<(K, V)> {
        self.unlink(id);
        let node = self.nodes.release(id)?;
        self.len -= 1;
        log::trace!("released slot {} ({} live)", id, self.len);
        Some((node.key, node.value))
    }
}
