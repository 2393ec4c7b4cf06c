use crate::error::SegTreeError;
use derivative::Derivative;
use log::{debug, trace};
use std::fmt::Debug;
use std::ops::Range;

/// Array-backed segment tree over a fixed-size sequence.
///
/// The tree stores `capacity` leaves, where `capacity` is the smallest
/// power of two at least as large as the logical length, and pads the
/// unused leaves with the identity element. Nodes live in a single flat
/// buffer in breadth-first order with the root at index 0, so the whole
/// structure is one allocation that is dropped with the tree.
///
/// The combining operation must be associative. It does not have to be
/// commutative: queries always combine the left half before the right
/// half, so order-sensitive operations like concatenation work correctly.
#[derive(Derivative)]
#[derivative(Debug(bound = "T: Debug"))]
#[derivative(Clone(bound = "T: Clone, F: Clone"))]
pub struct SegmentTree<T, F> {
    len: usize,
    capacity: usize,
    data: Vec<T>,
    identity: T,
    #[derivative(Debug = "ignore")]
    op: F,
}

fn left_child(index: usize) -> usize {
    2 * index + 1
}

fn right_child(index: usize) -> usize {
    2 * index + 2
}

fn parent(index: usize) -> usize {
    (index - 1) / 2
}

impl<T, F> SegmentTree<T, F>
where
    T: Clone,
    F: Fn(&T, &T) -> T,
{
    /// Creates a tree of `len` elements, all set to the identity element.
    ///
    /// No build pass is needed: every node of a tree whose leaves are all
    /// the identity element is itself the identity element.
    pub fn new(len: usize, op: F, identity: T) -> Self {
        let capacity = len.next_power_of_two();
        let data = vec![identity.clone(); 2 * capacity - 1];
        debug!(
            "new segment tree: len={}, capacity={}, nodes={}",
            len,
            capacity,
            data.len()
        );
        Self {
            len,
            capacity,
            data,
            identity,
            op,
        }
    }

    /// Creates a tree whose leaves are cloned from `values` in order.
    ///
    /// Leaves past `values.len()` hold the identity element. Internal
    /// nodes are computed bottom-up in reverse index order, so every node
    /// is combined only after both of its children are final.
    pub fn from_slice(values: &[T], op: F, identity: T) -> Self {
        let mut tree = Self::new(values.len(), op, identity);
        let first_leaf = tree.first_leaf();
        for (slot, value) in tree.data[first_leaf..].iter_mut().zip(values) {
            *slot = value.clone();
        }
        for index in (0..first_leaf).rev() {
            tree.recalc_at(index);
        }
        tree
    }

    fn first_leaf(&self) -> usize {
        self.data.len() / 2
    }

    fn recalc_at(&mut self, index: usize) {
        self.data[index] = (self.op)(
            &self.data[left_child(index)],
            &self.data[right_child(index)],
        );
    }

    fn check_index(&self, index: usize) -> Result<(), SegTreeError> {
        if index < self.len {
            Ok(())
        } else {
            Err(SegTreeError::IndexOutOfBounds {
                index,
                len: self.len,
            })
        }
    }

    /// Replaces the element at `index` and recomputes its ancestors.
    ///
    /// Runs in O(log n). Padding leaves are not addressable: `index` must
    /// be below the logical length.
    pub fn set(&mut self, index: usize, value: T) -> Result<(), SegTreeError> {
        self.update_with(index, |slot| *slot = value)
    }

    /// Mutates the element at `index` in place, then recomputes its
    /// ancestors. Runs in O(log n).
    pub fn update_with(
        &mut self,
        index: usize,
        f: impl FnOnce(&mut T),
    ) -> Result<(), SegTreeError> {
        self.check_index(index)?;
        trace!("updating leaf {}", index);
        let mut node = self.first_leaf() + index;
        f(&mut self.data[node]);
        while node > 0 {
            node = parent(node);
            self.recalc_at(node);
        }
        Ok(())
    }

    /// Mutates every logical element in place, then rebuilds all internal
    /// nodes in a single O(n) pass. Padding leaves are left untouched so
    /// they keep holding the identity element.
    pub fn update_all(&mut self, mut f: impl FnMut(&mut T)) {
        let first_leaf = self.first_leaf();
        for item in self.data[first_leaf..first_leaf + self.len].iter_mut() {
            f(item);
        }
        for index in (0..first_leaf).rev() {
            self.recalc_at(index);
        }
    }

    /// Reads the element at `index` directly from its leaf, in O(1).
    pub fn get(&self, index: usize) -> Result<&T, SegTreeError> {
        self.check_index(index)?;
        Ok(&self.data[self.first_leaf() + index])
    }

    /// Combines all elements in the half-open range `start..end`, in
    /// O(log n).
    ///
    /// An empty range yields a clone of the identity element. The range
    /// may extend up to the padded capacity; padding leaves contribute the
    /// identity element and leave the result unchanged, so
    /// `query(0..capacity)` equals the root aggregate.
    pub fn query(&self, range: Range<usize>) -> Result<T, SegTreeError> {
        if range.start > range.end || range.end > self.capacity {
            return Err(SegTreeError::InvalidRange {
                start: range.start,
                end: range.end,
                capacity: self.capacity,
            });
        }
        Ok(self.query_node(0, 0, self.capacity, &range))
    }

    fn query_node(&self, node: usize, seg_start: usize, seg_end: usize, range: &Range<usize>) -> T {
        if seg_end <= range.start || seg_start >= range.end {
            return self.identity.clone();
        }
        if range.start <= seg_start && seg_end <= range.end {
            return self.data[node].clone();
        }
        let mid = seg_start + (seg_end - seg_start) / 2;
        let left = self.query_node(left_child(node), seg_start, mid, range);
        let right = self.query_node(right_child(node), mid, seg_end, range);
        (self.op)(&left, &right)
    }

    /// The aggregate over all leaves, read from the root in O(1).
    ///
    /// Equal to `query(0..capacity)`.
    pub fn root(&self) -> &T {
        &self.data[0]
    }

    /// Logical number of elements, as requested at construction.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of leaves: the smallest power of two at least `len()`.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The full node buffer in breadth-first order, `2 * capacity() - 1`
    /// nodes with the leaves in the final `capacity()` slots.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// The combining operation supplied at construction.
    pub fn operation(&self) -> &F {
        &self.op
    }

    /// The identity element supplied at construction.
    pub fn identity(&self) -> &T {
        &self.identity
    }
}
