use std::error::Error;
use std::fmt::{self, Display, Formatter};

/// Errors reported by [`SegmentTree`](crate::SegmentTree) operations.
///
/// Every variant describes a caller mistake that is detected before any
/// mutation takes place; none of them leaves the tree in an inconsistent
/// state, and none is retryable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegTreeError {
    /// A leaf index at or past the logical length of the tree.
    IndexOutOfBounds { index: usize, len: usize },

    /// A query range that is inverted or extends past the padded capacity.
    InvalidRange {
        start: usize,
        end: usize,
        capacity: usize,
    },
}

impl Display for SegTreeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for tree of length {len}")
            }
            Self::InvalidRange {
                start,
                end,
                capacity,
            } => {
                write!(
                    f,
                    "invalid range {start}..{end} for tree of capacity {capacity}"
                )
            }
        }
    }
}

impl Error for SegTreeError {}
