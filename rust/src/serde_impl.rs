//! Serde support, enabled by the `serde` feature.
//!
//! A tree serializes as a sequence of `[key, value]` pairs in ascending key
//! order, so keys need not be strings. Deserializing rebuilds the tree by
//! insertion and rejects a sequence that repeats a key.

use crate::comparator::Comparator;
use crate::types::RbTree;
use serde::de::{self, Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;

impl<K: Serialize, V: Serialize, C> Serialize for RbTree<K, V, C> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

/// Upper bound on slots reserved from a sequence's declared length.
const MAX_PREALLOCATED_ENTRIES: usize = 4096;

struct TreeVisitor<K, V, C> {
    marker: PhantomData<fn() -> RbTree<K, V, C>>,
}

impl<'de, K, V, C> Visitor<'de> for TreeVisitor<K, V, C>
where
    K: Deserialize<'de>,
    V: Deserialize<'de>,
    C: Comparator<K> + Default,
{
    type Value = RbTree<K, V, C>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence of [key, value] pairs")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut tree = RbTree::with_comparator(C::default());
        // A length prefix is untrusted input.
        if let Some(hint) = seq.size_hint() {
            tree.reserve(hint.min(MAX_PREALLOCATED_ENTRIES));
        }
        while let Some((key, value)) = seq.next_element::<(K, V)>()? {
            if !tree.add(key, value) {
                return Err(de::Error::custom(format!(
                    "duplicate key at entry {}",
                    tree.len()
                )));
            }
        }
        Ok(tree)
    }
}

impl<'de, K, V, C> Deserialize<'de> for RbTree<K, V, C>
where
    K: Deserialize<'de>,
    V: Deserialize<'de>,
    C: Comparator<K> + Default,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(TreeVisitor {
            marker: PhantomData,
        })
    }
}
