//! Index-walking helpers over any arena of [`crate::types::Node`]s.

mod first;
mod next;

pub use first::{first, last};
pub use next::{next, prev};
