//! Rotations and the red-black fixup passes.
//!
//! All link surgery goes through [`ChildRef`] so rotating at the root needs
//! no special case. Absent children are `NONE` and count as black.

use crate::child_ref::ChildRef;
use crate::types::{Color, NodeId, RbTree, Side, NONE};

impl<K, V, C> RbTree<K, V, C> {
    #[inline]
    pub(crate) fn is_red(&self, id: NodeId) -> bool {
        id != NONE && self.nodes[id].color == Color::Red
    }

    #[inline]
    pub(crate) fn is_black(&self, id: NodeId) -> bool {
        !self.is_red(id)
    }

    #[inline]
    fn set_color(&mut self, id: NodeId, color: Color) {
        self.nodes[id].color = color;
    }

    /// Rotate `x` down toward `toward`; its child on the opposite side takes
    /// its place.
    ///
    /// `rotate(x, Side::Left)` is the classic left rotation.
    pub(crate) fn rotate(&mut self, x: NodeId, toward: Side) {
        let up = toward.opposite();
        let y = self.nodes[x].child(up);
        debug_assert!(y != NONE, "rotate: node {} has no {:?} child", x, up);

        let inner = self.nodes[y].child(toward);
        self.nodes[x].set_child(up, inner);
        if inner != NONE {
            self.nodes[inner].set_parent(x);
        }

        let position = self.ref_of(x);
        let x_parent = self.nodes[x].parent;
        self.nodes[y].set_parent(x_parent);
        self.attach(position, y);

        self.nodes[y].set_child(toward, x);
        self.nodes[x].set_parent(y);

        log::trace!("rotated slot {} {:?} under slot {}", x, toward, y);
    }

    /// Restore the red-black invariants after attaching the red node `z`.
    pub(crate) fn insert_fixup(&mut self, mut z: NodeId) {
        loop {
            let parent = self.nodes[z].parent;
            if parent == NONE || self.is_black(parent) {
                break;
            }

            // A red parent is never the root, so the grandparent exists.
            let grandparent = self.nodes[parent].parent;
            let parent_side = if self.nodes[grandparent].left == parent {
                Side::Left
            } else {
                Side::Right
            };
            let uncle = self.nodes[grandparent].child(parent_side.opposite());

            if self.is_red(uncle) {
                self.set_color(parent, Color::Black);
                self.set_color(uncle, Color::Black);
                self.set_color(grandparent, Color::Red);
                z = grandparent;
                continue;
            }

            let mut parent = parent;
            if self.nodes[parent].child(parent_side.opposite()) == z {
                // Inner grandchild: straighten into the outer case.
                self.rotate(parent, parent_side);
                z = parent;
                parent = self.nodes[z].parent;
            }

            self.set_color(parent, Color::Black);
            self.set_color(grandparent, Color::Red);
            self.rotate(grandparent, parent_side.opposite());
            break;
        }

        let root = self.root;
        self.set_color(root, Color::Black);
    }

    /// Replace the subtree at `u` with the subtree at `v` (which may be `NONE`).
    fn transplant(&mut self, u: NodeId, v: NodeId) {
        let position = self.ref_of(u);
        self.attach(position, v);
        if v != NONE {
            let u_parent = self.nodes[u].parent;
            self.nodes[v].set_parent(u_parent);
        }
    }

    /// Unlink the live node `z` from the tree and rebalance.
    ///
    /// The slot itself is left untouched; releasing it is the caller's job.
    /// No other node changes slot.
    pub(crate) fn unlink(&mut self, z: NodeId) {
        let z_left = self.nodes[z].left;
        let z_right = self.nodes[z].right;
        let mut removed_color = self.nodes[z].color;

        let (x, x_parent) = if z_left == NONE {
            let x_parent = self.nodes[z].parent;
            self.transplant(z, z_right);
            (z_right, x_parent)
        } else if z_right == NONE {
            let x_parent = self.nodes[z].parent;
            self.transplant(z, z_left);
            (z_left, x_parent)
        } else {
            // Two children: the successor y takes z's place and color.
            let y = self.resolve(self.leftmost_ref(ChildRef::child(z, Side::Right)));
            removed_color = self.nodes[y].color;
            let x = self.nodes[y].right;

            let x_parent = if self.nodes[y].parent == z {
                y
            } else {
                let x_parent = self.nodes[y].parent;
                self.transplant(y, x);
                self.nodes[y].set_right(z_right);
                self.nodes[z_right].set_parent(y);
                x_parent
            };

            self.transplant(z, y);
            self.nodes[y].set_left(z_left);
            self.nodes[z_left].set_parent(y);
            self.nodes[y].color = self.nodes[z].color;
            (x, x_parent)
        };

        if removed_color == Color::Black {
            self.delete_fixup(x, x_parent);
        }
    }

    /// Repair the black-height deficit left at `x` (possibly `NONE`) under
    /// `parent` after a black node was unlinked.
    fn delete_fixup(&mut self, mut x: NodeId, mut parent: NodeId) {
        while x != self.root && self.is_black(x) {
            let side = if self.nodes[parent].left == x {
                Side::Left
            } else {
                Side::Right
            };
            let far = side.opposite();

            // The deficit side is one black short, so the sibling exists.
            let mut sibling = self.nodes[parent].child(far);
            if self.is_red(sibling) {
                self.set_color(sibling, Color::Black);
                self.set_color(parent, Color::Red);
                self.rotate(parent, side);
                sibling = self.nodes[parent].child(far);
            }

            let near_nephew = self.nodes[sibling].child(side);
            let far_nephew = self.nodes[sibling].child(far);
            if self.is_black(near_nephew) && self.is_black(far_nephew) {
                self.set_color(sibling, Color::Red);
                x = parent;
                parent = self.nodes[x].parent;
                continue;
            }

            if self.is_black(far_nephew) {
                self.set_color(near_nephew, Color::Black);
                self.set_color(sibling, Color::Red);
                self.rotate(sibling, far);
                sibling = self.nodes[parent].child(far);
            }

            let parent_color = self.nodes[parent].color;
            self.set_color(sibling, parent_color);
            self.set_color(parent, Color::Black);
            let far_nephew = self.nodes[sibling].child(far);
            self.set_color(far_nephew, Color::Black);
            self.rotate(parent, side);
            x = self.root;
            break;
        }

        if x != NONE {
            self.set_color(x, Color::Black);
        }
    }
}
