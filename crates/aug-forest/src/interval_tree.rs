//! Interval tree: a red-black tree ordered by interval `low`, augmented with
//! the largest `high` in each subtree.

use std::fmt::Debug;

use crate::augment::MaxEndpoint;
use crate::error::{Error, Violation};
use crate::interval::Interval;
use crate::red_black::{AugTree, InorderIter, Structure, TreeSnapshot};

/// Red-black interval tree.
///
/// ```
/// use aug_forest::{Interval, IntervalTree};
///
/// let mut tree = IntervalTree::new();
/// tree.insert(15, 20).unwrap();
/// tree.insert(30, 40).unwrap();
///
/// let hit = tree.overlap_search(&Interval::new(18, 25).unwrap());
/// assert_eq!(hit.map(|i| i.into_bounds()), Some((15, 20)));
/// assert!(tree.overlap_search(&Interval::new(41, 42).unwrap()).is_none());
/// ```
#[derive(Clone, Debug)]
pub struct IntervalTree<T>
where
    T: PartialOrd + Clone + Debug,
{
    inner: AugTree<Interval<T>, MaxEndpoint>,
}

impl<T> Default for IntervalTree<T>
where
    T: PartialOrd + Clone + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> IntervalTree<T>
where
    T: PartialOrd + Clone + Debug,
{
    pub fn new() -> Self {
        Self {
            inner: AugTree::new(),
        }
    }

    /// Inserts `[low, high]`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInterval`] when `high < low`; the tree is left
    /// untouched.
    pub fn insert(&mut self, low: T, high: T) -> Result<(), Error> {
        let interval = Interval::new(low, high)?;
        self.insert_interval(interval);
        Ok(())
    }

    pub fn insert_interval(&mut self, interval: Interval<T>) {
        self.inner.insert(interval);
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Largest `high` of any stored interval.
    pub fn max_endpoint(&self) -> Option<&T> {
        self.inner.root_aug().as_ref()
    }

    /// Returns one stored interval overlapping `query`, or `None` when no
    /// stored interval does.
    ///
    /// Follows a single root-to-leaf path: go left whenever the left
    /// subtree's max endpoint reaches `query.low`, otherwise right. A left
    /// subtree whose max endpoint is below `query.low` holds no overlap, and
    /// if the left subtree reaches `query.low` but holds no overlap, every
    /// interval to the right starts too late to overlap either.
    pub fn overlap_search(&self, query: &Interval<T>) -> Option<&Interval<T>> {
        let arena = self.inner.arena();
        let mut curr = self.inner.root_index();
        while !arena.is_nil(curr) {
            let item = arena.item(curr);
            if item.overlaps(query) {
                tracing::trace!(?query, found = ?item, "aug_forest: overlap_search");
                return Some(item);
            }
            let l = arena.left(curr);
            curr = match arena.aug(l) {
                Some(max) if !arena.is_nil(l) && max >= query.low() => l,
                _ => arena.right(curr),
            };
        }
        tracing::trace!(?query, "aug_forest: overlap_search found nothing");
        None
    }

    pub fn overlaps(&self, query: &Interval<T>) -> bool {
        self.overlap_search(query).is_some()
    }

    /// Every stored interval overlapping `query`, in ascending `low` order.
    ///
    /// Skips subtrees whose max endpoint is below `query.low` and stops at
    /// the first interval starting after `query.high`.
    pub fn overlap_search_all(&self, query: &Interval<T>) -> Vec<&Interval<T>> {
        let arena = self.inner.arena();
        let reaches = |i: u32| matches!(arena.aug(i), Some(max) if max >= query.low());

        let mut found = Vec::new();
        let mut stack = Vec::new();
        let mut curr = self.inner.root_index();
        loop {
            while !arena.is_nil(curr) && reaches(curr) {
                stack.push(curr);
                curr = arena.left(curr);
            }
            let Some(n) = stack.pop() else {
                break;
            };
            let item = arena.item(n);
            if item.overlaps(query) {
                found.push(item);
            }
            if item.low() > query.high() {
                break;
            }
            curr = arena.right(n);
        }
        tracing::trace!(?query, matches = found.len(), "aug_forest: overlap_search_all");
        found
    }

    pub fn traverse_inorder(&self) -> InorderIter<'_, Interval<T>, Option<T>> {
        self.inner.traverse_inorder()
    }

    pub fn structure(&self) -> Structure<'_, Interval<T>, Option<T>> {
        self.inner.structure()
    }

    pub fn snapshot(&self) -> TreeSnapshot<Interval<T>, Option<T>> {
        self.inner.snapshot()
    }

    /// # Errors
    ///
    /// Returns the first broken invariant, see [`AugTree::assert_valid`].
    pub fn assert_valid(&self) -> Result<(), Violation> {
        self.inner.assert_valid()
    }

    pub fn print(&self) -> String {
        self.inner.print()
    }

    pub fn as_tree(&self) -> &AugTree<Interval<T>, MaxEndpoint> {
        &self.inner
    }
}

impl<T> Extend<Interval<T>> for IntervalTree<T>
where
    T: PartialOrd + Clone + Debug,
{
    fn extend<I: IntoIterator<Item = Interval<T>>>(&mut self, iter: I) {
        self.inner.extend(iter);
    }
}

impl<T> FromIterator<Interval<T>> for IntervalTree<T>
where
    T: PartialOrd + Clone + Debug,
{
    fn from_iter<I: IntoIterator<Item = Interval<T>>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}
