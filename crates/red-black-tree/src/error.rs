use std::fmt;

use thiserror::Error;

/// Which end of the ordering was requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Extreme {
    Min,
    Max,
}

impl fmt::Display for Extreme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Extreme::Min => f.write_str("min"),
            Extreme::Max => f.write_str("max"),
        }
    }
}

/// Returned by [`crate::RedBlackTree::min`] and [`crate::RedBlackTree::max`]
/// when the tree holds no values.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("red-black tree is empty, cannot get {extreme} value")]
pub struct EmptyContainerError {
    pub extreme: Extreme,
}

/// Structural fault reported by [`crate::RedBlackTree::assert_valid`].
///
/// Node positions are arena indices.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvariantError {
    #[error("root {root} is red")]
    RootNotBlack { root: u32 },
    #[error("root {root} has a parent link")]
    RootHasParent { root: u32 },
    #[error("node {child} does not point back to its parent {parent}")]
    BrokenParentLink { parent: u32, child: u32 },
    #[error("in-order sequence is not strictly increasing at node {node}")]
    OutOfOrder { node: u32 },
    #[error("red node {node} has a red child")]
    RedRedViolation { node: u32 },
    #[error("black height differs under node {node}: left {left}, right {right}")]
    BlackHeightMismatch { node: u32, left: usize, right: usize },
    #[error("reachable node count {reachable} does not match size {size}")]
    SizeMismatch { reachable: usize, size: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_matrix() {
        assert_eq!(
            EmptyContainerError { extreme: Extreme::Min }.to_string(),
            "red-black tree is empty, cannot get min value"
        );
        assert_eq!(
            EmptyContainerError { extreme: Extreme::Max }.to_string(),
            "red-black tree is empty, cannot get max value"
        );
        assert_eq!(
            InvariantError::BlackHeightMismatch { node: 3, left: 2, right: 1 }.to_string(),
            "black height differs under node 3: left 2, right 1"
        );
    }
}
