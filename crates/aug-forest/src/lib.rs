//! Arena-based augmented red-black trees.
//!
//! Every node stores a value derived from its own payload and its children's
//! values: subtree size, subtree height or, for intervals, the largest upper
//! bound in the subtree. Values are kept exact through rotations and
//! insertions, which is what makes [`IntervalTree::overlap_search`] sound.
//!
//! Nodes live in a `Vec` arena and point at each other by `u32` index. Each
//! tree owns a single black sentinel used as the empty child of every leaf;
//! it is never written after the tree is created.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`types`] | [`Color`], the [`Keyed`] ordering trait |
//! [`augment`] | [`Augment`] and the [`SubtreeCount`], [`SubtreeHeight`], [`MaxEndpoint`] policies |
//! [`interval`] | [`Interval`] |
//! [`red_black`] | [`AugTree`], traversals, snapshots |
//! [`interval_tree`] | [`IntervalTree`] overlap queries |
//! [`error`] | [`Error`], [`Violation`] |

pub mod augment;
pub mod error;
pub mod interval;
pub mod interval_tree;
pub mod red_black;
pub mod types;

pub use augment::{Augment, MaxEndpoint, SubtreeCount, SubtreeHeight};
pub use error::{Error, Violation};
pub use interval::Interval;
pub use interval_tree::IntervalTree;
pub use red_black::{
    AugTree, CountTree, HeightTree, InorderIter, NodeSnapshot, NodeView, Structure,
    TreeSnapshot, Visit,
};
pub use types::{Color, Keyed};
