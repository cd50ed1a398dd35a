//! Tree structure management operations for RbTree.
//!
//! Size queries, clearing, slot statistics and compaction.

use crate::child_ref::ChildRef;
use crate::slot_buffer::SlotBufferStats;
use crate::types::{NodeId, RbTree, NONE};

impl<K, V, C> RbTree<K, V, C> {
    /// Returns the number of elements in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the tree is empty.
    pub fn is_empty(&self) -> bool {
        self.root == NONE
    }

    /// Number of nodes on the longest root-to-leaf path (0 when empty).
    pub fn height(&self) -> usize {
        let mut deepest = 0;
        let mut stack = Vec::new();
        if self.root != NONE {
            stack.push((self.root, 1));
        }
        while let Some((id, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            let node = &self.nodes[id];
            for child in [node.left, node.right] {
                if child != NONE {
                    stack.push((child, depth + 1));
                }
            }
        }
        deepest
    }

    /// Clear all items from the tree, keeping the slot allocation.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = NONE;
        self.len = 0;
    }

    /// Slot of the root node, `NONE` when empty.
    pub fn root_id(&self) -> NodeId {
        self.root
    }

    pub(crate) fn first_id(&self) -> Option<NodeId> {
        (!self.is_empty()).then(|| self.resolve(self.leftmost_ref(ChildRef::Root)))
    }

    pub(crate) fn last_id(&self) -> Option<NodeId> {
        (!self.is_empty()).then(|| self.resolve(self.rightmost_ref(ChildRef::Root)))
    }

    // ============================================================================
    // SLOT STATISTICS
    // ============================================================================

    /// Get statistics for the node slot buffer.
    pub fn slot_stats(&self) -> SlotBufferStats {
        self.nodes.stats()
    }

    /// Number of slots ever handed out, including released ones.
    pub fn slot_count(&self) -> usize {
        self.nodes.slot_count()
    }

    /// Number of slots the buffer can hold before it grows.
    pub fn slot_capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Move all live nodes into a dense prefix of the buffer and rewrite
    /// every link to match.
    ///
    /// This is the only operation that changes the slot index of a live
    /// node. Released slots are gone afterwards.
    pub fn compact(&mut self) {
        let stats = self.nodes.stats();
        if stats.free_count == 0 {
            return;
        }

        let mapping = self.nodes.compact();
        let remap = |id: NodeId| if id == NONE { NONE } else { mapping[id as usize] };

        self.root = remap(self.root);
        for (_, node) in self.nodes.iter_mut() {
            node.set_parent(remap(node.parent()));
            node.set_left(remap(node.left()));
            node.set_right(remap(node.right()));
        }

        log::debug!(
            "compacted {} slots down to {}",
            stats.slot_count,
            self.nodes.slot_count()
        );
    }
}
