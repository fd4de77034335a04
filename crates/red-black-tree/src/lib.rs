//! Ordered set of unique values backed by an arena red-black tree.
//!
//! Insert, remove and search run in worst-case `O(log n)`. Nodes are stored
//! in a single arena owned by the tree and linked by `u32` indices; the
//! absent link `None` stands in for the black sentinel leaf.
//!
//! ```
//! use red_black_tree::{RedBlackTree, TraversalOrder};
//!
//! let mut tree: RedBlackTree<i32> = [10, 20, 30, 15, 25, 5].into();
//! tree.remove(&20);
//!
//! let mut seen = Vec::new();
//! tree.traverse(TraversalOrder::InOrder, |v| seen.push(*v));
//! assert_eq!(seen, [5, 10, 15, 25, 30]);
//! assert_eq!(tree.min(), Ok(&5));
//! ```

pub mod error;
pub mod node;
pub mod print;
pub mod tree;
pub mod types;
pub mod util;

pub use error::{EmptyContainerError, Extreme, InvariantError};
pub use tree::{DefaultComparator, Iter, RedBlackTree, TraversalOrder};
pub use types::Color;
