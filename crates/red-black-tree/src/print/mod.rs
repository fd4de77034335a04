//! Diagnostic tree-shape rendering.

mod binary;
mod types;

pub use binary::print_binary;
pub use types::{PrintChild, Printable};
