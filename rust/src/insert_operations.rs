//! INSERT operations for RbTree.
//!
//! Insertion is set-like: `add` never overwrites. `insert` is the upsert
//! variant for callers that want map semantics.

use crate::child_ref::ChildRef;
use crate::comparator::Comparator;
use crate::error::{ModifyResult, RbTreeError};
use crate::types::{Node, NodeId, RbTree};

impl<K, V, C: Comparator<K>> RbTree<K, V, C> {
    /// Add a key/value pair if no equal key is present.
    ///
    /// Returns `false` and drops the pair when the key already exists; the
    /// stored value is not overwritten.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbarena::RbTree;
    ///
    /// let mut tree = RbTree::new();
    /// assert!(tree.add(7, "first"));
    /// assert!(!tree.add(7, "second"));
    /// assert_eq!(tree.get(&7), Some(&"first"));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn add(&mut self, key: K, value: V) -> bool {
        match self.locate(&key) {
            Ok(_) => false,
            Err(position) => {
                self.attach_new(position, key, value);
                true
            }
        }
    }

    /// Like [`add`](Self::add), reporting a present key as `DuplicateKey`.
    pub fn try_add(&mut self, key: K, value: V) -> ModifyResult<()> {
        if self.add(key, value) {
            Ok(())
        } else {
            Err(RbTreeError::DuplicateKey)
        }
    }

    /// Insert a pair, replacing and returning the value of an equal key.
    ///
    /// The stored key is kept; only the value is swapped.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        match self.locate(&key) {
            Ok(id) => Some(std::mem::replace(&mut self.nodes[id].value, value)),
            Err(position) => {
                self.attach_new(position, key, value);
                None
            }
        }
    }
}

impl<K, V, C> RbTree<K, V, C> {
    /// Ensure the slot buffer can hold `additional` more nodes without
    /// growing. Slot indices are unaffected.
    pub fn reserve(&mut self, additional: usize) {
        self.nodes.reserve(self.nodes.slot_count() + additional);
    }

    /// Create a red node at the empty link `position` and rebalance.
    fn attach_new(&mut self, position: ChildRef, key: K, value: V) -> NodeId {
        debug_assert!(!self.exists(position), "attach_new: link is occupied");

        // The append may move every node; only indices are held across it.
        let id = self.nodes.append(Node::new(key, value, position.parent()));
        self.attach(position, id);
        self.len += 1;
        self.insert_fixup(id);
        id
    }
}
