//! Strict weak ordering used to place keys.

use std::cmp::Ordering;

/// A strict weak ordering over `K`.
///
/// Only `less` is required. Equality is derived as "neither is less than the
/// other", so types need no `PartialEq` to be used as keys.
pub trait Comparator<K: ?Sized> {
    fn less(&self, a: &K, b: &K) -> bool;

    #[inline]
    fn equal(&self, a: &K, b: &K) -> bool {
        !self.less(a, b) && !self.less(b, a)
    }

    #[inline]
    fn order(&self, a: &K, b: &K) -> Ordering {
        if self.less(a, b) {
            Ordering::Less
        } else if self.less(b, a) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

/// Orders keys by their `PartialOrd` implementation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<K: PartialOrd + ?Sized> Comparator<K> for NaturalOrder {
    #[inline]
    fn less(&self, a: &K, b: &K) -> bool {
        a < b
    }
}

/// Orders keys descending by their `PartialOrd` implementation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReverseOrder;

impl<K: PartialOrd + ?Sized> Comparator<K> for ReverseOrder {
    #[inline]
    fn less(&self, a: &K, b: &K) -> bool {
        b < a
    }
}

/// Adapts a `less-than` closure into a [`Comparator`].
///
/// ```
/// use rbarena::{CompareFn, RbTree};
///
/// let by_len = CompareFn(|a: &&str, b: &&str| a.len() < b.len());
/// let mut tree = RbTree::with_comparator(by_len);
/// assert!(tree.add("ccc", 3));
/// assert!(tree.add("a", 1));
/// // Same length counts as the same key.
/// assert!(!tree.add("zzz", 0));
/// ```
#[derive(Clone, Copy)]
pub struct CompareFn<F>(pub F);

impl<K: ?Sized, F> Comparator<K> for CompareFn<F>
where
    F: Fn(&K, &K) -> bool,
{
    #[inline]
    fn less(&self, a: &K, b: &K) -> bool {
        (self.0)(a, b)
    }
}
