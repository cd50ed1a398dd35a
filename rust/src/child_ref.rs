//! Uniform addressing of "where a node hangs".
//!
//! A [`ChildRef`] names a link rather than a node: either the tree's root
//! link or one child link of a live parent. Search descent, insertion and
//! cursor stepping all compute a `ChildRef`, check whether it exists and
//! resolve it to a slot, so attaching the very first node takes the same path
//! as attaching any other.

use crate::types::{NodeId, RbTree, Side, NONE};

/// Address of a node position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChildRef {
    /// The tree's root link.
    Root,
    /// The `side` link of the node in slot `parent`.
    Child { parent: NodeId, side: Side },
    /// Sentinel for "end" or "not found".
    Invalid,
}

impl ChildRef {
    #[inline]
    pub fn child(parent: NodeId, side: Side) -> Self {
        ChildRef::Child { parent, side }
    }

    #[inline]
    pub fn is_root(self) -> bool {
        matches!(self, ChildRef::Root)
    }

    /// False only for the sentinel.
    #[inline]
    pub fn is_valid(self) -> bool {
        !matches!(self, ChildRef::Invalid)
    }

    /// Slot of the owning parent, `NONE` for the root link and the sentinel.
    #[inline]
    pub fn parent(self) -> NodeId {
        match self {
            ChildRef::Child { parent, .. } => parent,
            ChildRef::Root | ChildRef::Invalid => NONE,
        }
    }

    /// Slot this reference currently points at, or `NONE`.
    pub fn resolve<K, V, C>(self, tree: &RbTree<K, V, C>) -> NodeId {
        tree.resolve(self)
    }

    /// True iff [`resolve`](Self::resolve) yields a live node.
    pub fn exists<K, V, C>(self, tree: &RbTree<K, V, C>) -> bool {
        tree.exists(self)
    }
}

impl<K, V, C> RbTree<K, V, C> {
    /// Slot the reference currently points at, or `NONE` if the link is empty.
    ///
    /// # Panics
    ///
    /// Panics if a `Child` reference names a parent slot that is not live.
    #[inline]
    pub fn resolve(&self, position: ChildRef) -> NodeId {
        match position {
            ChildRef::Root => self.root,
            ChildRef::Child { parent, side } => self.nodes[parent].child(side),
            ChildRef::Invalid => NONE,
        }
    }

    #[inline]
    pub fn exists(&self, position: ChildRef) -> bool {
        self.resolve(position) != NONE
    }

    /// The reference through which the live node `id` is reached.
    pub(crate) fn ref_of(&self, id: NodeId) -> ChildRef {
        let parent = self.nodes[id].parent;
        if parent == NONE {
            ChildRef::Root
        } else if self.nodes[parent].left == id {
            ChildRef::child(parent, Side::Left)
        } else {
            ChildRef::child(parent, Side::Right)
        }
    }

    /// Point the link named by `position` at `id` (which may be `NONE`).
    ///
    /// Only the downward link is written; the child's parent field is the
    /// caller's business.
    pub(crate) fn attach(&mut self, position: ChildRef, id: NodeId) {
        match position {
            ChildRef::Root => self.root = id,
            ChildRef::Child { parent, side } => self.nodes[parent].set_child(side, id),
            ChildRef::Invalid => panic!("RbTree::attach: cannot link node {} at the end sentinel", id),
        }
    }

    /// Follow left links from an existing position as far as they go.
    pub(crate) fn leftmost_ref(&self, position: ChildRef) -> ChildRef {
        self.extreme_ref(position, Side::Left)
    }

    /// Follow right links from an existing position as far as they go.
    pub(crate) fn rightmost_ref(&self, position: ChildRef) -> ChildRef {
        self.extreme_ref(position, Side::Right)
    }

    fn extreme_ref(&self, mut position: ChildRef, side: Side) -> ChildRef {
        loop {
            let id = self.resolve(position);
            debug_assert!(id != NONE, "extreme_ref started from an empty link");
            let next = ChildRef::child(id, side);
            if !self.exists(next) {
                return position;
            }
            position = next;
        }
    }

    /// In-order successor of the node at an existing `position`.
    ///
    /// With a right subtree the successor is that subtree's leftmost node.
    /// Otherwise climb: every step up a right link means the whole subtree
    /// below has been visited, so keep going; the first step up a left link
    /// lands on the successor. Climbing out through the root link, whichever
    /// kind of step came last, means iteration is exhausted.
    pub(crate) fn next_ref(&self, position: ChildRef) -> ChildRef {
        self.step_ref(position, Side::Right)
    }

    /// In-order predecessor; the mirror image of [`next_ref`](Self::next_ref).
    pub(crate) fn prev_ref(&self, position: ChildRef) -> ChildRef {
        self.step_ref(position, Side::Left)
    }

    fn step_ref(&self, position: ChildRef, toward: Side) -> ChildRef {
        let id = self.resolve(position);
        debug_assert!(id != NONE, "step_ref started from an empty link");

        let down = ChildRef::child(id, toward);
        if self.exists(down) {
            return self.extreme_ref(down, toward.opposite());
        }

        let mut here = position;
        loop {
            match here {
                ChildRef::Root | ChildRef::Invalid => return ChildRef::Invalid,
                ChildRef::Child { parent, side } if side == toward => {
                    here = self.ref_of(parent);
                }
                ChildRef::Child { parent, .. } => return self.ref_of(parent),
            }
        }
    }
}
