//! Augmentation policies.
//!
//! A policy derives a per-node value from the node's payload and the values
//! already stored on its two children. The tree calls [`Augment::combine`]
//! in exactly two places: right after a rotation (the node that moved down
//! first, then the node that moved up) and on the walk from a freshly
//! inserted node up to the root. The sentinel always carries
//! [`Augment::identity`].

use std::fmt::Debug;

use crate::interval::Interval;

/// Per-node recomputation rule.
pub trait Augment<T> {
    type Value: Clone + Debug + PartialEq;

    /// Value stored on the sentinel.
    fn identity(&self) -> Self::Value;

    /// Value for a node holding `item` whose children carry `left` and
    /// `right`.
    fn combine(&self, item: &T, left: &Self::Value, right: &Self::Value) -> Self::Value;
}

/// Number of nodes in the subtree, `1 + left + right`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SubtreeCount;

impl<T> Augment<T> for SubtreeCount {
    type Value = usize;

    fn identity(&self) -> usize {
        0
    }

    fn combine(&self, _item: &T, left: &usize, right: &usize) -> usize {
        1 + left + right
    }
}

/// Height of the subtree in edges, `1 + max(left, right)`.
///
/// The sentinel has height `-1`, so a leaf has height `0`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SubtreeHeight;

impl<T> Augment<T> for SubtreeHeight {
    type Value = i32;

    fn identity(&self) -> i32 {
        -1
    }

    fn combine(&self, _item: &T, left: &i32, right: &i32) -> i32 {
        1 + (*left).max(*right)
    }
}

/// Largest `high` bound of any interval in the subtree.
///
/// `None` stands for negative infinity and is the sentinel's value.
#[derive(Clone, Copy, Debug, Default)]
pub struct MaxEndpoint;

impl<T> Augment<Interval<T>> for MaxEndpoint
where
    T: PartialOrd + Clone + Debug,
{
    type Value = Option<T>;

    fn identity(&self) -> Option<T> {
        None
    }

    fn combine(&self, item: &Interval<T>, left: &Option<T>, right: &Option<T>) -> Option<T> {
        let mut max = item.high();
        for side in [left, right].into_iter().flatten() {
            if side > max {
                max = side;
            }
        }
        Some(max.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_leaf_and_inner() {
        let p = SubtreeCount;
        let id = <SubtreeCount as Augment<i32>>::identity(&p);
        assert_eq!(id, 0);
        assert_eq!(p.combine(&1, &id, &id), 1);
        assert_eq!(p.combine(&1, &3, &4), 8);
    }

    #[test]
    fn test_height_leaf_is_zero() {
        let p = SubtreeHeight;
        let id = <SubtreeHeight as Augment<i32>>::identity(&p);
        assert_eq!(id, -1);
        assert_eq!(p.combine(&1, &id, &id), 0);
        assert_eq!(p.combine(&1, &0, &2), 3);
    }

    #[test]
    fn test_max_endpoint_prefers_largest() {
        let p = MaxEndpoint;
        let item = Interval::new(5, 20).unwrap();
        assert_eq!(p.combine(&item, &None, &None), Some(20));
        assert_eq!(p.combine(&item, &Some(30), &None), Some(30));
        assert_eq!(p.combine(&item, &Some(3), &Some(19)), Some(20));
        assert_eq!(p.combine(&item, &None, &Some(40)), Some(40));
    }
}
