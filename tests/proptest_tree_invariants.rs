//! Property-based invariant tests for the segment tree.
//!
//! These verify the algebraic laws the structure promises for arbitrary
//! inputs:
//!
//! 1. Empty ranges aggregate to the identity element.
//! 2. The full-capacity query agrees with the O(1) root accessor.
//! 3. Splitting: aggregates over adjacent ranges combine to the aggregate
//!    over the enclosing range.
//! 4. Building from a sequence matches a left fold of the operation.
//! 5. A point update changes exactly the targeted leaf.
//! 6. Repeated reads without intervening updates agree.

use proptest::prelude::*;
use segtree::SegmentTree;

fn add(a: &i64, b: &i64) -> i64 {
    a + b
}

fn min(a: &i64, b: &i64) -> i64 {
    *a.min(b)
}

fn values_strategy() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-1_000_000i64..1_000_000, 0..64)
}

/// A vector plus three sorted cut points in `0..=capacity`.
fn values_with_cut_points() -> impl Strategy<Value = (Vec<i64>, usize, usize, usize)> {
    values_strategy()
        .prop_flat_map(|values| {
            let capacity = values.len().next_power_of_two();
            (Just(values), 0..=capacity, 0..=capacity, 0..=capacity)
        })
        .prop_map(|(values, a, b, c)| {
            let mut cuts = [a, b, c];
            cuts.sort_unstable();
            (values, cuts[0], cuts[1], cuts[2])
        })
}

/// A non-empty vector plus an index into it and a replacement value.
fn values_with_update() -> impl Strategy<Value = (Vec<i64>, usize, i64)> {
    prop::collection::vec(-1_000_000i64..1_000_000, 1..64).prop_flat_map(|values| {
        let len = values.len();
        (Just(values), 0..len, -1_000_000i64..1_000_000)
    })
}

proptest! {
    #[test]
    fn empty_ranges_yield_identity((values, a, _, _) in values_with_cut_points()) {
        let tree = SegmentTree::from_slice(&values, add, 0);
        prop_assert_eq!(tree.query(a..a).unwrap(), 0);
    }

    #[test]
    fn full_capacity_query_matches_root(values in values_strategy()) {
        let tree = SegmentTree::from_slice(&values, add, 0);
        prop_assert_eq!(tree.query(0..tree.capacity()).unwrap(), *tree.root());
    }

    #[test]
    fn adjacent_ranges_split((values, a, b, c) in values_with_cut_points()) {
        let tree = SegmentTree::from_slice(&values, add, 0);
        let left = tree.query(a..b).unwrap();
        let right = tree.query(b..c).unwrap();
        prop_assert_eq!(add(&left, &right), tree.query(a..c).unwrap());
    }

    #[test]
    fn sequence_build_matches_fold(values in values_strategy()) {
        let tree = SegmentTree::from_slice(&values, add, 0);
        let folded = values.iter().fold(0, |acc, value| add(&acc, value));
        prop_assert_eq!(tree.query(0..values.len()).unwrap(), folded);
    }

    #[test]
    fn min_build_matches_minimum(values in prop::collection::vec(any::<i64>(), 1..64)) {
        let tree = SegmentTree::from_slice(&values, min, i64::MAX);
        prop_assert_eq!(
            tree.query(0..values.len()).unwrap(),
            *values.iter().min().unwrap()
        );
    }

    #[test]
    fn point_update_changes_one_leaf((values, index, value) in values_with_update()) {
        let mut tree = SegmentTree::from_slice(&values, add, 0);
        tree.set(index, value).unwrap();

        prop_assert_eq!(*tree.get(index).unwrap(), value);
        prop_assert_eq!(tree.query(index..index + 1).unwrap(), value);
        for (other, original) in values.iter().enumerate() {
            if other != index {
                prop_assert_eq!(tree.get(other).unwrap(), original);
            }
        }

        let expected_total = tree.query(0..values.len()).unwrap();
        let recomputed: i64 = values
            .iter()
            .enumerate()
            .map(|(i, v)| if i == index { value } else { *v })
            .sum();
        prop_assert_eq!(expected_total, recomputed);
    }

    #[test]
    fn reads_are_idempotent((values, a, b, _) in values_with_cut_points()) {
        let tree = SegmentTree::from_slice(&values, add, 0);
        prop_assert_eq!(tree.query(a..b).unwrap(), tree.query(a..b).unwrap());
        if !values.is_empty() {
            prop_assert_eq!(tree.get(0).unwrap(), tree.get(0).unwrap());
        }
    }
}
