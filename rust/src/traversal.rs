//! Whole-tree walks.
//!
//! In-order walks use an explicit stack, so a deep tree cannot overflow the
//! call stack. `copy_unordered_to` and `unordered_iter` skip ordering and
//! read slots in physical order.

use crate::child_ref::ChildRef;
use crate::types::{NodeId, RbTree, NONE};

impl<K, V, C> RbTree<K, V, C> {
    /// Visit every entry in ascending key order. No-op on an empty tree.
    ///
    /// ```
    /// use rbarena::RbTree;
    ///
    /// let tree: RbTree<i32, char> = [(2, 'b'), (1, 'a'), (3, 'c')].into_iter().collect();
    /// let mut seen = String::new();
    /// tree.traverse(|_, c| seen.push(*c));
    /// assert_eq!(seen, "abc");
    /// ```
    pub fn traverse<F>(&self, visit: F)
    where
        F: FnMut(&K, &V),
    {
        if self.is_empty() {
            return;
        }
        self.traverse_from(ChildRef::Root, visit);
    }

    /// Visit every entry of the subtree hanging at `subtree`, in order.
    ///
    /// # Panics
    ///
    /// Panics if `subtree` does not resolve to a live node.
    pub fn traverse_from<F>(&self, subtree: ChildRef, mut visit: F)
    where
        F: FnMut(&K, &V),
    {
        let top = self.resolve(subtree);
        assert!(
            top != NONE,
            "RbTree::traverse_from: subtree {:?} does not exist",
            subtree
        );

        let mut stack = Vec::new();
        let mut current = top;
        loop {
            while current != NONE {
                stack.push(current);
                current = self.nodes[current].left;
            }
            let Some(id) = stack.pop() else { break };
            let node = &self.nodes[id];
            visit(&node.key, &node.value);
            current = node.right;
        }
    }

    /// Visit every entry in ascending key order with mutable access to values.
    pub fn traverse_mut<F>(&mut self, mut visit: F)
    where
        F: FnMut(&K, &mut V),
    {
        self.traverse_ids_mut(|_, key, value| visit(key, value));
    }

    pub(crate) fn traverse_ids_mut<F>(&mut self, mut visit: F)
    where
        F: FnMut(NodeId, &K, &mut V),
    {
        let mut stack = Vec::new();
        let mut current = self.root;
        loop {
            while current != NONE {
                stack.push(current);
                current = self.nodes[current].left;
            }
            let Some(id) = stack.pop() else { break };
            let node = &mut self.nodes[id];
            visit(id, &node.key, &mut node.value);
            current = node.right;
        }
    }

    /// Clone every entry into `out` in physical slot order, not key order.
    ///
    /// Returns the number of entries written, which equals [`len`](Self::len).
    ///
    /// # Panics
    ///
    /// Panics if `out` is shorter than `len()`.
    pub fn copy_unordered_to(&self, out: &mut [(K, V)]) -> usize
    where
        K: Clone,
        V: Clone,
    {
        assert!(
            out.len() >= self.len,
            "RbTree::copy_unordered_to: buffer holds {} entries, tree has {}",
            out.len(),
            self.len
        );

        let mut written = 0;
        for (slot, (key, value)) in out.iter_mut().zip(self.unordered_iter()) {
            *slot = (key.clone(), value.clone());
            written += 1;
        }
        written
    }

    /// Iterate over entries in physical slot order.
    pub fn unordered_iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.nodes.iter().map(|(_, node)| (&node.key, &node.value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Side;

    fn fixture() -> RbTree<i32, i32> {
        let mut tree = RbTree::new();
        for key in [6, 8, 4, 7, 9, 2, 3, 5, 1] {
            tree.add(key, -key);
        }
        tree
    }

    #[test]
    fn test_traverse_in_order() {
        let tree = fixture();
        let mut keys = Vec::new();
        tree.traverse(|k, v| {
            assert_eq!(*v, -*k);
            keys.push(*k);
        });
        assert_eq!(keys, (1..=9).collect::<Vec<_>>());
    }

    #[test]
    fn test_traverse_empty_is_noop() {
        let tree: RbTree<i32, i32> = RbTree::new();
        let mut calls = 0;
        tree.traverse(|_, _| calls += 1);
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_traverse_from_subtree() {
        let tree = fixture();
        let root = tree.root_id();
        let root_key = tree.nodes[root].key;
        let mut keys = Vec::new();
        tree.traverse_from(ChildRef::child(root, Side::Left), |k, _| keys.push(*k));
        assert!(!keys.is_empty());
        assert!(keys.windows(2).all(|w| w[0] < w[1]));
        assert!(keys.iter().all(|k| *k < root_key));
    }

    #[test]
    #[should_panic(expected = "does not exist")]
    fn test_traverse_from_missing_subtree_panics() {
        let tree: RbTree<i32, i32> = RbTree::new();
        tree.traverse_from(ChildRef::Root, |_, _| {});
    }

    #[test]
    fn test_traverse_mut_updates_values() {
        let mut tree = fixture();
        tree.traverse_mut(|k, v| *v = k * 100);
        assert_eq!(tree.get(&7), Some(&700));
    }

    #[test]
    fn test_copy_unordered_to() {
        let mut tree = fixture();
        tree.remove(&3);
        let mut out = vec![(0, 0); 10];
        assert_eq!(tree.copy_unordered_to(&mut out), 8);

        let mut copied: Vec<_> = out[..8].to_vec();
        copied.sort();
        let expected: Vec<_> = [1, 2, 4, 5, 6, 7, 8, 9].iter().map(|k| (*k, -*k)).collect();
        assert_eq!(copied, expected);
    }

    #[test]
    #[should_panic(expected = "buffer holds 2 entries, tree has 9")]
    fn test_copy_unordered_to_short_buffer_panics() {
        let tree = fixture();
        let mut out = vec![(0, 0); 2];
        tree.copy_unordered_to(&mut out);
    }

    #[test]
    fn test_unordered_iter_is_physical_order() {
        let tree = fixture();
        let keys: Vec<_> = tree.unordered_iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, [6, 8, 4, 7, 9, 2, 3, 5, 1]);
    }
}
