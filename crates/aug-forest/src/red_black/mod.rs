//! Augmented red-black tree core.
//!
//! | Module | Contents |
//! |--------|----------|
//! `arena` | node storage and the per-tree sentinel |
//! `util` | rotations, insertion fixup, augmentation refresh, validator |
//! [`tree`] | [`AugTree`], the public surface |
//! [`iter`] | in-order traversal and structural views |
//! [`snapshot`] | owned, serializable tree pictures |

pub(crate) mod arena;
pub mod iter;
pub mod snapshot;
pub mod tree;
pub(crate) mod util;

pub use iter::{InorderIter, NodeView, Structure, Visit};
pub use snapshot::{NodeSnapshot, TreeSnapshot};
pub use tree::{AugTree, CountTree, HeightTree};
