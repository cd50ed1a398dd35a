//! Red-black tree in Rust with nodes stored in a flat slot buffer.
//!
//! Nodes link to each other by slot index instead of by pointer. The buffer
//! can grow and relocate its storage without invalidating any link, and
//! positions are described by [`ChildRef`] (a parent slot plus a side) so
//! that a cursor stays meaningful across growth.
//!
//! Enable the `serde` feature to serialize trees as ordered `[key, value]`
//! sequences. Its tests only build with the feature on:
//! `cargo test --features serde`.
//!
//! ```
//! use rbarena::RbTree;
//!
//! let mut tree = RbTree::new();
//! for key in [6, 8, 4, 7, 9, 2, 3, 5, 1] {
//!     tree.add(key, key.to_string());
//! }
//! assert_eq!(tree.len(), 9);
//! assert_eq!(tree.get(&7).map(String::as_str), Some("7"));
//! assert_eq!(tree.keys().copied().collect::<Vec<_>>(), (1..=9).collect::<Vec<_>>());
//! ```

mod macros;

mod balance;
mod child_ref;
mod comparator;
mod construction;
mod cursor;
mod delete_operations;
mod error;
mod get_operations;
mod insert_operations;
mod iteration;
mod slot_buffer;
mod sorted_set;
mod traversal;
mod tree_structure;
mod types;
mod validation;

#[cfg(feature = "serde")]
mod serde_impl;

pub use child_ref::ChildRef;
pub use comparator::{CompareFn, Comparator, NaturalOrder, ReverseOrder};
pub use construction::{TreeConfig, DEFAULT_CAPACITY};
pub use cursor::{Cursor, CursorMut};
pub use error::{InitResult, KeyResult, ModifyResult, RbTreeError, RbTreeResultExt, TreeResult};
pub use iteration::{IntoIter, Iter, Keys, Values};
pub use slot_buffer::{SlotBuffer, SlotBufferStats, SlotPolicy};
pub use sorted_set::SortedSet;
pub use types::{Color, Node, NodeId, RbTree, Side, NONE};
