//! Shared node-level types.
//!
//! Nodes live in a `Vec`-backed arena and link to each other by `u32` index.
//! Children always point at a slot: either a real node or the tree's
//! sentinel. Parents are `Option<u32>`, with `None` marking the root.

use serde::Serialize;

/// Node color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Black,
}

impl Color {
    pub fn is_red(self) -> bool {
        self == Color::Red
    }

    pub fn is_black(self) -> bool {
        self == Color::Black
    }
}

/// Payloads that carry their own ordering key.
///
/// Keys are compared with `<` only: a payload whose key is not less than the
/// node it is compared against descends to the right, so equal keys
/// accumulate in the right subtree.
pub trait Keyed {
    type Key: PartialOrd;

    fn key(&self) -> &Self::Key;
}

macro_rules! impl_keyed_for_self {
    ($($t:ty),* $(,)?) => {
        $(
            impl Keyed for $t {
                type Key = $t;

                #[inline]
                fn key(&self) -> &$t {
                    self
                }
            }
        )*
    };
}

impl_keyed_for_self!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, char, bool, String,
    &'static str,
);

impl<A: PartialOrd, B> Keyed for (A, B) {
    type Key = A;

    #[inline]
    fn key(&self) -> &A {
        &self.0
    }
}
