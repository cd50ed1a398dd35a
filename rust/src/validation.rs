//! Validation and debugging utilities for RbTree.
//!
//! This module checks the structural invariants (search order, link
//! agreement, red-black coloring, counts) and renders the node layout for
//! debugging.

use crate::comparator::Comparator;
use crate::error::{RbTreeError, RbTreeResultExt, TreeResult};
use crate::types::{Color, RbTree, NONE};

// ============================================================================
// VALIDATION METHODS
// ============================================================================

impl<K, V, C: Comparator<K>> RbTree<K, V, C> {
    /// Check if the tree maintains all invariants.
    pub fn check_invariants(&self) -> bool {
        match self.check_invariants_detailed() {
            Ok(()) => true,
            Err(e) => {
                log::warn!("tree invariant violated: {}", e);
                false
            }
        }
    }

    /// Check invariants with detailed error reporting.
    pub fn check_invariants_detailed(&self) -> TreeResult<()> {
        self.check_root()?;
        let reachable = self.check_links_and_colors()?;
        self.check_counts(reachable)?;
        self.check_order()
    }

    /// Check the invariants, attributing any failure to `operation`.
    pub fn validate_for_operation(&self, operation: &str) -> TreeResult<()> {
        self.check_invariants_detailed().with_operation(operation)
    }

    fn check_root(&self) -> TreeResult<()> {
        if self.root == NONE {
            return Ok(());
        }
        let root = self.nodes.get(self.root).ok_or_else(|| {
            RbTreeError::slot_error("Root lookup", &format!("slot {} is not live", self.root))
        })?;
        if root.parent != NONE {
            return Err(RbTreeError::corrupted_tree(
                "Root",
                &format!("root slot {} has parent {}", self.root, root.parent),
            ));
        }
        if root.color != Color::Black {
            return Err(RbTreeError::data_integrity("Root color", "root is red"));
        }
        Ok(())
    }

    /// Walk every reachable node checking parent links, the no-red-red rule
    /// and equal black height. Returns the number of nodes reached.
    fn check_links_and_colors(&self) -> TreeResult<usize> {
        if self.root == NONE {
            return Ok(0);
        }

        let limit = self.nodes.slot_count();
        let mut reached = 0;
        let mut expected_black_height = None;
        // (slot, black nodes on the path above and including this slot)
        let mut stack = vec![(self.root, 1usize)];

        while let Some((id, blacks)) = stack.pop() {
            reached += 1;
            if reached > limit {
                return Err(RbTreeError::corrupted_tree(
                    "Links",
                    "more nodes reachable than slots allocated (cycle)",
                ));
            }

            let node = &self.nodes[id];
            for child in [node.left, node.right] {
                if child == NONE {
                    match expected_black_height {
                        None => expected_black_height = Some(blacks),
                        Some(expected) if expected != blacks => {
                            return Err(RbTreeError::data_integrity(
                                "Black height",
                                &format!(
                                    "path below slot {} has {} black nodes, expected {}",
                                    id, blacks, expected
                                ),
                            ));
                        }
                        Some(_) => {}
                    }
                    continue;
                }

                let child_node = self.nodes.get(child).ok_or_else(|| {
                    RbTreeError::slot_error(
                        "Child lookup",
                        &format!("slot {} links to released slot {}", id, child),
                    )
                })?;
                if child_node.parent != id {
                    return Err(RbTreeError::corrupted_tree(
                        "Links",
                        &format!(
                            "slot {} names child {} whose parent is {}",
                            id, child, child_node.parent
                        ),
                    ));
                }
                if node.color == Color::Red && child_node.color == Color::Red {
                    return Err(RbTreeError::data_integrity(
                        "Red rule",
                        &format!("red slot {} has red child {}", id, child),
                    ));
                }

                let child_blacks = blacks + usize::from(child_node.color == Color::Black);
                stack.push((child, child_blacks));
            }
        }

        Ok(reached)
    }

    fn check_counts(&self, reachable: usize) -> TreeResult<()> {
        if reachable != self.len || self.nodes.len() != self.len {
            return Err(RbTreeError::data_integrity(
                "Count",
                &format!(
                    "len {} vs {} reachable vs {} live slots",
                    self.len,
                    reachable,
                    self.nodes.len()
                ),
            ));
        }
        Ok(())
    }

    /// In-order keys must be strictly ascending under the comparator.
    fn check_order(&self) -> TreeResult<()> {
        let mut previous: Option<&K> = None;
        for (index, (key, _)) in self.iter().enumerate() {
            if let Some(prev) = previous {
                if !self.comparator.less(prev, key) {
                    return Err(RbTreeError::data_integrity(
                        "Order",
                        &format!("in-order entry {} is not greater than its predecessor", index),
                    ));
                }
            }
            previous = Some(key);
        }
        Ok(())
    }
}

// ============================================================================
// DEBUGGING AND TESTING UTILITIES
// ============================================================================

impl<K: std::fmt::Debug, V, C> RbTree<K, V, C> {
    /// Render the node layout, one node per line, indented by depth.
    #[cfg(any(test, feature = "testing"))]
    pub fn debug_dump(&self) -> String {
        use crate::types::NodeId;
        use std::fmt::Write;

        let mut out = String::new();
        if self.root == NONE {
            out.push_str("<empty>\n");
            return out;
        }

        let mut stack: Vec<(NodeId, usize)> = vec![(self.root, 0)];
        while let Some((id, depth)) = stack.pop() {
            let node = &self.nodes[id];
            let color = match node.color {
                Color::Red => 'R',
                Color::Black => 'B',
            };
            let parent = if node.parent == NONE {
                "-".to_string()
            } else {
                node.parent.to_string()
            };
            let _ = writeln!(
                out,
                "{}[{}] {:?} (slot {}, parent {})",
                "  ".repeat(depth),
                color,
                node.key,
                id,
                parent
            );
            for child in [node.right, node.left] {
                if child != NONE {
                    stack.push((child, depth + 1));
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Side;

    fn fixture() -> RbTree<i32, ()> {
        (1..=15).map(|k| (k, ())).collect()
    }

    #[test]
    fn test_valid_tree_passes() {
        let tree = fixture();
        assert!(tree.check_invariants());
        assert_eq!(tree.validate_for_operation("test"), Ok(()));

        let empty: RbTree<i32, ()> = RbTree::new();
        assert!(empty.check_invariants());
    }

    #[test]
    fn test_detects_red_root() {
        let mut tree = fixture();
        let root = tree.root;
        tree.nodes[root].color = Color::Red;
        let err = tree.check_invariants_detailed().unwrap_err();
        assert!(err.to_string().contains("root is red"), "{}", err);
    }

    #[test]
    fn test_detects_broken_parent_link() {
        let mut tree = fixture();
        let root = tree.root;
        let left = tree.nodes[root].child(Side::Left);
        tree.nodes[left].parent = NONE;
        assert!(matches!(
            tree.check_invariants_detailed(),
            Err(RbTreeError::CorruptedTree(_))
        ));
    }

    #[test]
    fn test_detects_order_violation() {
        let mut tree = fixture();
        let root = tree.root;
        tree.nodes[root].key = 1000;
        let err = tree.validate_for_operation("swap").unwrap_err();
        assert!(err.to_string().contains("Operation 'swap'"), "{}", err);
    }

    #[test]
    fn test_detects_black_height_mismatch() {
        let mut tree = fixture();
        let leftmost = tree.first_id().unwrap();
        let flipped = match tree.nodes[leftmost].color {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        };
        tree.nodes[leftmost].color = flipped;
        assert!(!tree.check_invariants());
    }

    #[test]
    fn test_detects_count_drift() {
        let mut tree = fixture();
        tree.len += 1;
        assert!(matches!(
            tree.check_invariants_detailed(),
            Err(RbTreeError::DataIntegrityError(_))
        ));
    }

    #[test]
    fn test_debug_dump_lists_every_node() {
        let tree = fixture();
        let dump = tree.debug_dump();
        assert_eq!(dump.lines().count(), 15);
        assert!(dump.starts_with("[B]"));

        let empty: RbTree<i32, ()> = RbTree::new();
        assert_eq!(empty.debug_dump(), "<empty>\n");
    }
}
