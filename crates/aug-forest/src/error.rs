use thiserror::Error;

/// Errors surfaced to callers.
#[derive(Debug, Error)]
pub enum Error {
    /// Interval whose upper bound is below its lower bound, or whose bounds
    /// do not compare (e.g. `NaN`).
    #[error("invalid interval: high is less than low")]
    InvalidInterval,
    #[error("failed to encode tree snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),
}

/// Broken tree invariant reported by
/// [`AugTree::assert_valid`](crate::AugTree::assert_valid).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Violation {
    #[error("root has parent")]
    RootHasParent,
    #[error("root is not black")]
    RootNotBlack,
    #[error("broken parent link below node {0}")]
    BrokenParentLink(u32),
    #[error("red node {0} has a red child")]
    RedRed(u32),
    #[error("black height mismatch at node {0}")]
    BlackHeight(u32),
    #[error("node order violated at node {0}")]
    Order(u32),
    #[error("stale augmentation at node {0}")]
    StaleAugmentation(u32),
    #[error("tree holds {found} nodes, expected {expected}")]
    Count { expected: usize, found: usize },
}
