//! Array-backed generic segment tree.
//!
//! A [`SegmentTree`] holds a fixed-size sequence of elements together with
//! a caller-supplied associative combining operation and its identity
//! element. Replacing one element ([`SegmentTree::set`]) and aggregating
//! any contiguous range ([`SegmentTree::query`]) both run in O(log n).
//!
//! The operation must be associative over the values that occur;
//! commutativity is not required, since queries always combine the left
//! half of a range before the right half. The identity element must
//! satisfy `op(e, x) == op(x, e) == x`; it pads the leaf level up to a
//! power of two and is the result of empty queries. Neither law is
//! checked at construction.
//!
//! ```
//! use segtree::SegmentTree;
//!
//! let mut tree = SegmentTree::from_slice(&[1, 2, 3, 4, 5], |a: &i64, b: &i64| a + b, 0);
//! assert_eq!(tree.query(1..3)?, 5);
//!
//! tree.set(2, 10)?;
//! assert_eq!(tree.query(0..5)?, 22);
//! # Ok::<(), segtree::SegTreeError>(())
//! ```

mod error;
mod tree;

pub use crate::error::SegTreeError;
pub use crate::tree::SegmentTree;
