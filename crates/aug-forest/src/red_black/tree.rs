use std::fmt::Debug;

use crate::augment::{Augment, SubtreeCount, SubtreeHeight};
use crate::error::Violation;
use crate::types::Keyed;

use super::arena::{Arena, NIL};
use super::iter::{InorderIter, Structure, Visit};
use super::snapshot::TreeSnapshot;
use super::util;

/// Red-black tree whose nodes carry a policy-defined augmentation.
///
/// Elements are ordered by [`Keyed::key`]; an element whose key is not less
/// than a node's key goes to that node's right, so duplicates are kept.
/// There is no removal.
///
/// ```
/// use aug_forest::CountTree;
///
/// let mut tree = CountTree::new();
/// for key in [20, 15, 25, 10, 5] {
///     tree.insert(key);
/// }
/// assert_eq!(*tree.root_aug(), 5);
/// let keys: Vec<i32> = tree.traverse_inorder().map(|v| *v.item).collect();
/// assert_eq!(keys, vec![5, 10, 15, 20, 25]);
/// ```
#[derive(Clone, Debug)]
pub struct AugTree<T, A>
where
    A: Augment<T>,
{
    arena: Arena<T, A::Value>,
    root: u32,
    policy: A,
}

/// Tree augmented with subtree sizes.
pub type CountTree<K> = AugTree<K, SubtreeCount>;

/// Tree augmented with subtree heights.
pub type HeightTree<K> = AugTree<K, SubtreeHeight>;

impl<T, A> AugTree<T, A>
where
    A: Augment<T> + Default,
{
    pub fn new() -> Self {
        Self::with_policy(A::default())
    }
}

impl<T, A> Default for AugTree<T, A>
where
    A: Augment<T> + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, A> AugTree<T, A>
where
    A: Augment<T>,
{
    pub fn with_policy(policy: A) -> Self {
        Self {
            arena: Arena::new(policy.identity()),
            root: NIL,
            policy,
        }
    }

    pub fn policy(&self) -> &A {
        &self.policy
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    pub fn insert(&mut self, item: T)
    where
        T: Keyed,
    {
        let identity = self.arena.aug(NIL);
        let aug = self.policy.combine(&item, identity, identity);
        let n = self.arena.push(item, aug);
        self.root = util::insert(&mut self.arena, &self.policy, self.root, n);
        tracing::trace!(len = self.len(), "aug_forest: insert");
    }

    pub fn root_item(&self) -> Option<&T> {
        if self.arena.is_nil(self.root) {
            None
        } else {
            Some(self.arena.item(self.root))
        }
    }

    /// Augmentation of the whole tree: the root's value, or the policy's
    /// identity when empty.
    pub fn root_aug(&self) -> &A::Value {
        self.arena.aug(self.root)
    }

    /// Lazy in-order traversal. Restartable: each call starts from the root.
    pub fn traverse_inorder(&self) -> InorderIter<'_, T, A::Value> {
        InorderIter::new(&self.arena, self.root)
    }

    /// Pre-order structural view for renderers.
    pub fn structure(&self) -> Structure<'_, T, A::Value> {
        Structure::new(&self.arena, self.root)
    }

    pub fn snapshot(&self) -> TreeSnapshot<T, A::Value>
    where
        T: Clone,
    {
        TreeSnapshot::capture(&self.arena, self.root)
    }

    /// Checks every invariant the tree is supposed to maintain.
    ///
    /// # Errors
    ///
    /// Returns the first [`Violation`] found.
    pub fn assert_valid(&self) -> Result<(), Violation>
    where
        T: Keyed,
    {
        util::assert_red_black_tree(&self.arena, &self.policy, self.root, self.len())
    }

    /// Indented dump of the tree with colors and augmentations.
    pub fn print(&self) -> String
    where
        T: Debug,
    {
        util::print(&self.arena, self.root, "")
    }

    pub(crate) fn arena(&self) -> &Arena<T, A::Value> {
        &self.arena
    }

    pub(crate) fn root_index(&self) -> u32 {
        self.root
    }
}

impl<T, A> Extend<T> for AugTree<T, A>
where
    T: Keyed,
    A: Augment<T>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<T, A> FromIterator<T> for AugTree<T, A>
where
    T: Keyed,
    A: Augment<T> + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<'a, T, A> IntoIterator for &'a AugTree<T, A>
where
    A: Augment<T>,
{
    type Item = Visit<'a, T, A::Value>;
    type IntoIter = InorderIter<'a, T, A::Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.traverse_inorder()
    }
}
