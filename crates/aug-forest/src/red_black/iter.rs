//! Read-only traversals.
//!
//! All iterators keep an explicit stack so traversal depth is not bound to
//! the call stack.

use crate::types::Color;

use super::arena::Arena;

/// Arena indices in ascending key order.
pub(crate) struct InorderIndices<'a, T, V> {
    arena: &'a Arena<T, V>,
    stack: Vec<u32>,
    curr: u32,
}

impl<'a, T, V> InorderIndices<'a, T, V> {
    pub(crate) fn new(arena: &'a Arena<T, V>, root: u32) -> Self {
        Self {
            arena,
            stack: Vec::new(),
            curr: root,
        }
    }
}

impl<T, V> Iterator for InorderIndices<'_, T, V> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        while !self.arena.is_nil(self.curr) {
            self.stack.push(self.curr);
            self.curr = self.arena.left(self.curr);
        }
        let node = self.stack.pop()?;
        self.curr = self.arena.right(node);
        Some(node)
    }
}

/// One step of an in-order traversal.
#[derive(Debug, PartialEq)]
pub struct Visit<'a, T, V> {
    pub item: &'a T,
    pub color: Color,
    pub aug: &'a V,
}

// Manual impls: `&T` is `Copy` regardless of `T`.
impl<T, V> Clone for Visit<'_, T, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, V> Copy for Visit<'_, T, V> {}

/// Lazy in-order traversal yielding `(item, color, augmentation)`.
///
/// Created by [`AugTree::traverse_inorder`](crate::AugTree::traverse_inorder).
pub struct InorderIter<'a, T, V> {
    indices: InorderIndices<'a, T, V>,
}

impl<'a, T, V> InorderIter<'a, T, V> {
    pub(crate) fn new(arena: &'a Arena<T, V>, root: u32) -> Self {
        Self {
            indices: InorderIndices::new(arena, root),
        }
    }
}

impl<'a, T, V> Iterator for InorderIter<'a, T, V> {
    type Item = Visit<'a, T, V>;

    fn next(&mut self) -> Option<Self::Item> {
        let i = self.indices.next()?;
        let arena = self.indices.arena;
        Some(Visit {
            item: arena.item(i),
            color: arena.color(i),
            aug: arena.aug(i),
        })
    }
}

/// Structural view of one node: its payload, color and the payloads of its
/// children. Internal indices are never exposed.
#[derive(Debug, PartialEq)]
pub struct NodeView<'a, T> {
    pub item: &'a T,
    pub color: Color,
    pub left: Option<&'a T>,
    pub right: Option<&'a T>,
}

/// Pre-order walk over [`NodeView`]s, root first.
///
/// Created by [`AugTree::structure`](crate::AugTree::structure).
pub struct Structure<'a, T, V> {
    arena: &'a Arena<T, V>,
    stack: Vec<u32>,
}

impl<'a, T, V> Structure<'a, T, V> {
    pub(crate) fn new(arena: &'a Arena<T, V>, root: u32) -> Self {
        let mut stack = Vec::new();
        if !arena.is_nil(root) {
            stack.push(root);
        }
        Self { arena, stack }
    }

    fn child(&self, i: u32) -> Option<&'a T> {
        let arena = self.arena;
        if arena.is_nil(i) {
            None
        } else {
            Some(arena.item(i))
        }
    }
}

impl<'a, T, V> Iterator for Structure<'a, T, V> {
    type Item = NodeView<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let i = self.stack.pop()?;
        let arena = self.arena;
        let l = arena.left(i);
        let r = arena.right(i);
        if !arena.is_nil(r) {
            self.stack.push(r);
        }
        if !arena.is_nil(l) {
            self.stack.push(l);
        }
        Some(NodeView {
            item: arena.item(i),
            color: arena.color(i),
            left: self.child(l),
            right: self.child(r),
        })
    }
}
