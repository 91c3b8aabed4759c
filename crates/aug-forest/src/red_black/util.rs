use crate::augment::Augment;
use crate::error::Violation;
use crate::types::{Color, Keyed};

use super::arena::Arena;

#[path = "util/print.rs"]
mod print_impl;

pub use print_impl::print;

/// Recomputes the augmentation of `n` from its children's stored values.
#[inline]
pub fn refresh<T, A>(arena: &mut Arena<T, A::Value>, policy: &A, n: u32)
where
    A: Augment<T>,
{
    if arena.is_nil(n) {
        return;
    }
    let value = policy.combine(
        arena.item(n),
        arena.aug(arena.left(n)),
        arena.aug(arena.right(n)),
    );
    arena.set_aug(n, value);
}

/// Refreshes every node from `n` up to the root.
///
/// Never stops early: a node whose value did not change can still have
/// ancestors that need recomputing.
pub fn refresh_upward<T, A>(arena: &mut Arena<T, A::Value>, policy: &A, mut n: u32)
where
    A: Augment<T>,
{
    while !arena.is_nil(n) {
        refresh(arena, policy, n);
        match arena.parent(n) {
            Some(p) => n = p,
            None => break,
        }
    }
}

/// Rotates `n` down to the left; its right child takes its place.
///
/// Returns the root after the rotation.
pub fn rotate_left<T, A>(arena: &mut Arena<T, A::Value>, policy: &A, root: u32, n: u32) -> u32
where
    A: Augment<T>,
{
    let nr = arena.right(n);
    assert!(!arena.is_nil(nr), "rotate_left needs a right child");

    let nrl = arena.left(nr);
    arena.set_right(n, nrl);
    if !arena.is_nil(nrl) {
        arena.set_parent(nrl, Some(n));
    }

    let p = arena.parent(n);
    arena.set_parent(nr, p);
    arena.replace_child(p, n, nr);

    arena.set_left(nr, n);
    arena.set_parent(n, Some(nr));

    refresh(arena, policy, n);
    refresh(arena, policy, nr);

    if p.is_none() {
        nr
    } else {
        root
    }
}

/// Rotates `n` down to the right; its left child takes its place.
///
/// Returns the root after the rotation.
pub fn rotate_right<T, A>(arena: &mut Arena<T, A::Value>, policy: &A, root: u32, n: u32) -> u32
where
    A: Augment<T>,
{
    let nl = arena.left(n);
    assert!(!arena.is_nil(nl), "rotate_right needs a left child");

    let nlr = arena.right(nl);
    arena.set_left(n, nlr);
    if !arena.is_nil(nlr) {
        arena.set_parent(nlr, Some(n));
    }

    let p = arena.parent(n);
    arena.set_parent(nl, p);
    arena.replace_child(p, n, nl);

    arena.set_right(nl, n);
    arena.set_parent(n, Some(nl));

    refresh(arena, policy, n);
    refresh(arena, policy, nl);

    if p.is_none() {
        nl
    } else {
        root
    }
}

/// Links the detached node `n` into the tree rooted at `root`, rebalances
/// and refreshes augmentations. Returns the new root.
pub fn insert<T, A>(arena: &mut Arena<T, A::Value>, policy: &A, root: u32, n: u32) -> u32
where
    T: Keyed,
    A: Augment<T>,
{
    let mut parent = None;
    let mut go_left = false;
    let mut curr = root;
    while !arena.is_nil(curr) {
        parent = Some(curr);
        go_left = arena.item(n).key() < arena.item(curr).key();
        curr = if go_left {
            arena.left(curr)
        } else {
            arena.right(curr)
        };
    }

    arena.set_parent(n, parent);
    let root = match parent {
        None => n,
        Some(p) => {
            if go_left {
                arena.set_left(p, n);
            } else {
                arena.set_right(p, n);
            }
            root
        }
    };

    let root = insert_fixup(arena, policy, root, n);
    refresh_upward(arena, policy, n);
    root
}

/// Restores the red-black invariants after `z` was linked in red.
///
/// On entry the only possible violation is `z` and its parent both being
/// red. Returns the new root.
pub fn insert_fixup<T, A>(
    arena: &mut Arena<T, A::Value>,
    policy: &A,
    mut root: u32,
    mut z: u32,
) -> u32
where
    A: Augment<T>,
{
    while let Some(p) = arena.parent(z) {
        if arena.color(p).is_black() {
            break;
        }
        let g = arena.parent(p).expect("red parent is never the root");

        if arena.left(g) == p {
            let u = arena.right(g);
            if arena.color(u).is_red() {
                arena.set_color(p, Color::Black);
                arena.set_color(u, Color::Black);
                arena.set_color(g, Color::Red);
                z = g;
                continue;
            }
            if arena.right(p) == z {
                z = p;
                root = rotate_left(arena, policy, root, z);
            }
            let p = arena.parent(z).expect("rotated node has a parent");
            let g = arena.parent(p).expect("rotated parent has a grandparent");
            arena.set_color(p, Color::Black);
            arena.set_color(g, Color::Red);
            root = rotate_right(arena, policy, root, g);
        } else {
            let u = arena.left(g);
            if arena.color(u).is_red() {
                arena.set_color(p, Color::Black);
                arena.set_color(u, Color::Black);
                arena.set_color(g, Color::Red);
                z = g;
                continue;
            }
            if arena.left(p) == z {
                z = p;
                root = rotate_right(arena, policy, root, z);
            }
            let p = arena.parent(z).expect("rotated node has a parent");
            let g = arena.parent(p).expect("rotated parent has a grandparent");
            arena.set_color(p, Color::Black);
            arena.set_color(g, Color::Red);
            root = rotate_left(arena, policy, root, g);
        }
    }

    if !arena.is_nil(root) {
        arena.set_color(root, Color::Black);
    }
    root
}

/// Checks ordering, coloring, links and augmentation of the whole tree.
///
/// `expected_len` is the number of elements the caller believes it inserted.
pub fn assert_red_black_tree<T, A>(
    arena: &Arena<T, A::Value>,
    policy: &A,
    root: u32,
    expected_len: usize,
) -> Result<(), Violation>
where
    T: Keyed,
    A: Augment<T>,
{
    if arena.is_nil(root) {
        return if expected_len == 0 {
            Ok(())
        } else {
            Err(Violation::Count {
                expected: expected_len,
                found: 0,
            })
        };
    }
    if arena.parent(root).is_some() {
        return Err(Violation::RootHasParent);
    }
    if arena.color(root).is_red() {
        return Err(Violation::RootNotBlack);
    }

    fn check<T, A>(
        arena: &Arena<T, A::Value>,
        policy: &A,
        node: u32,
        count: &mut usize,
    ) -> Result<usize, Violation>
    where
        T: Keyed,
        A: Augment<T>,
    {
        if arena.is_nil(node) {
            return Ok(1);
        }
        *count += 1;

        let l = arena.left(node);
        let r = arena.right(node);
        for child in [l, r] {
            if !arena.is_nil(child) && arena.parent(child) != Some(node) {
                return Err(Violation::BrokenParentLink(node));
            }
        }

        if arena.color(node).is_red() && (arena.color(l).is_red() || arena.color(r).is_red()) {
            return Err(Violation::RedRed(node));
        }

        let lh = check(arena, policy, l, count)?;
        let rh = check(arena, policy, r, count)?;
        if lh != rh {
            return Err(Violation::BlackHeight(node));
        }

        let expected = policy.combine(arena.item(node), arena.aug(l), arena.aug(r));
        if *arena.aug(node) != expected {
            return Err(Violation::StaleAugmentation(node));
        }

        Ok(lh + usize::from(arena.color(node).is_black()))
    }

    let mut count = 0;
    check(arena, policy, root, &mut count)?;
    if count != expected_len {
        return Err(Violation::Count {
            expected: expected_len,
            found: count,
        });
    }

    let mut prev: Option<u32> = None;
    for curr in super::iter::InorderIndices::new(arena, root) {
        if let Some(prev) = prev {
            if arena.item(curr).key() < arena.item(prev).key() {
                return Err(Violation::Order(curr));
            }
        }
        prev = Some(curr);
    }

    Ok(())
}
