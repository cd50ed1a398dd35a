//! Core types and data structures for RbTree.
//!
//! Nodes live by value in a [`SlotBuffer`] and refer to each other by
//! [`NodeId`] rather than by pointer, so growing the buffer never breaks a
//! link.

use crate::comparator::NaturalOrder;
use crate::macros::link_accessors;
use crate::slot_buffer::SlotBuffer;

// ============================================================================
// TYPE DEFINITIONS
// ============================================================================

/// Slot index type for node storage
pub type NodeId = u32;

/// Reserved index meaning "no such slot"
pub const NONE: NodeId = u32::MAX;

/// Node color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Black,
}

/// Which child link of a parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// The other side.
    #[inline]
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

// ============================================================================
// CORE DATA STRUCTURES
// ============================================================================

/// One key/value pair stored in the tree, plus its color and links.
///
/// Every node except the root has a parent whose left or right link names
/// this node's slot.
#[derive(Debug, Clone)]
pub struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) color: Color,
    pub(crate) parent: NodeId,
    pub(crate) left: NodeId,
    pub(crate) right: NodeId,
}

impl<K, V> Node<K, V> {
    /// Creates a red, childless node hanging off `parent`.
    pub(crate) fn new(key: K, value: V, parent: NodeId) -> Self {
        Self {
            key,
            value,
            color: Color::Red,
            parent,
            left: NONE,
            right: NONE,
        }
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn is_red(&self) -> bool {
        self.color == Color::Red
    }

    link_accessors!(parent, left, right);

    /// Slot index of the child on `side`, or `NONE`.
    #[inline]
    pub fn child(&self, side: Side) -> NodeId {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    #[inline]
    pub(crate) fn set_child(&mut self, side: Side, id: NodeId) {
        match side {
            Side::Left => self.set_left(id),
            Side::Right => self.set_right(id),
        }
    }
}

/// Red-black tree whose nodes live in a flat, growable slot buffer.
///
/// Keys are ordered by a strict weak ordering supplied by the comparator
/// `C`; two keys are equal when neither is less than the other. Adding a key
/// that is already present is rejected and leaves the stored value alone.
///
/// # Examples
///
/// ```
/// use rbarena::RbTree;
///
/// let mut tree = RbTree::new();
/// assert!(tree.add(2, "two"));
/// assert!(tree.add(1, "one"));
/// assert!(!tree.add(2, "deux"));
///
/// assert_eq!(tree.get(&2), Some(&"two"));
/// assert_eq!(tree.len(), 2);
///
/// let keys: Vec<_> = tree.keys().copied().collect();
/// assert_eq!(keys, [1, 2]);
/// ```
///
/// # Performance Characteristics
///
/// - **Add / Find / Remove**: O(log n)
/// - **Min / Max**: O(log n)
/// - **Full iteration**: O(n)
/// - **Cursor step**: O(log n) worst case, O(1) amortized over a full walk
#[derive(Clone)]
pub struct RbTree<K, V, C = NaturalOrder> {
    /// Node storage, addressed by `NodeId`.
    pub(crate) nodes: SlotBuffer<Node<K, V>>,
    /// Slot of the root node, `NONE` when empty.
    pub(crate) root: NodeId,
    /// Number of live nodes.
    pub(crate) len: usize,
    pub(crate) comparator: C,
}
