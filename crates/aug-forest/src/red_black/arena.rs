use crate::types::Color;

/// Index of the sentinel leaf.
///
/// Every tree owns exactly one sentinel; both children of a leaf point at it.
/// "Empty" is decided by comparing indices against `NIL`, never by looking at
/// a payload.
pub const NIL: u32 = u32::MAX;

/// Arena slot for a real node.
#[derive(Clone, Debug)]
pub struct RbNode<T, V> {
    pub(crate) p: Option<u32>,
    pub(crate) l: u32,
    pub(crate) r: u32,
    pub(crate) item: T,
    pub(crate) color: Color,
    pub(crate) aug: V,
}

impl<T, V> RbNode<T, V> {
    fn new(item: T, aug: V) -> Self {
        Self {
            p: None,
            l: NIL,
            r: NIL,
            item,
            color: Color::Red,
            aug,
        }
    }
}

/// Node storage plus the per-tree sentinel.
///
/// Reads accept `NIL` and resolve it to the sentinel (black, identity
/// augmentation, children `NIL`, no parent). Writes to `NIL` panic: the
/// sentinel is immutable once the arena exists.
#[derive(Clone, Debug)]
pub struct Arena<T, V> {
    nodes: Vec<RbNode<T, V>>,
    nil_aug: V,
}

impl<T, V> Arena<T, V> {
    pub fn new(nil_aug: V) -> Self {
        Self {
            nodes: Vec::new(),
            nil_aug,
        }
    }

    /// Allocates a red, childless node and returns its index.
    pub fn push(&mut self, item: T, aug: V) -> u32 {
        let idx = u32::try_from(self.nodes.len())
            .ok()
            .filter(|&i| i != NIL)
            .expect("arena index space exhausted");
        self.nodes.push(RbNode::new(item, aug));
        idx
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn is_nil(&self, i: u32) -> bool {
        i == NIL
    }

    #[inline]
    fn node(&self, i: u32) -> &RbNode<T, V> {
        assert!(i != NIL, "sentinel has no node data");
        &self.nodes[i as usize]
    }

    #[inline]
    fn node_mut(&mut self, i: u32) -> &mut RbNode<T, V> {
        assert!(i != NIL, "sentinel is immutable");
        &mut self.nodes[i as usize]
    }

    #[inline]
    pub fn item(&self, i: u32) -> &T {
        &self.node(i).item
    }

    #[inline]
    pub fn parent(&self, i: u32) -> Option<u32> {
        if i == NIL {
            None
        } else {
            self.node(i).p
        }
    }

    #[inline]
    pub fn left(&self, i: u32) -> u32 {
        if i == NIL {
            NIL
        } else {
            self.node(i).l
        }
    }

    #[inline]
    pub fn right(&self, i: u32) -> u32 {
        if i == NIL {
            NIL
        } else {
            self.node(i).r
        }
    }

    #[inline]
    pub fn color(&self, i: u32) -> Color {
        if i == NIL {
            Color::Black
        } else {
            self.node(i).color
        }
    }

    #[inline]
    pub fn aug(&self, i: u32) -> &V {
        if i == NIL {
            &self.nil_aug
        } else {
            &self.node(i).aug
        }
    }

    #[inline]
    pub fn set_parent(&mut self, i: u32, v: Option<u32>) {
        self.node_mut(i).p = v;
    }

    #[inline]
    pub fn set_left(&mut self, i: u32, v: u32) {
        self.node_mut(i).l = v;
    }

    #[inline]
    pub fn set_right(&mut self, i: u32, v: u32) {
        self.node_mut(i).r = v;
    }

    #[inline]
    pub fn set_color(&mut self, i: u32, color: Color) {
        self.node_mut(i).color = color;
    }

    #[inline]
    pub fn set_aug(&mut self, i: u32, aug: V) {
        self.node_mut(i).aug = aug;
    }

    /// Points `parent`'s child slot that currently holds `old` at `new`.
    /// With no parent, nothing is relinked (the caller owns the root).
    pub fn replace_child(&mut self, parent: Option<u32>, old: u32, new: u32) {
        if let Some(p) = parent {
            if self.left(p) == old {
                self.set_left(p, new);
            } else {
                self.set_right(p, new);
            }
        }
    }
}
