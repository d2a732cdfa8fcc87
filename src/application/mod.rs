//! Application layer: use cases behind the CLI
//!
//! Resolves fixtures by name and runs the conformance script per backing.

pub mod catalog;
pub mod conform;
pub mod error;

pub use catalog::{Fixture, GRAPH_FIXTURES, TREE_FIXTURES};
pub use conform::{check_kinds, ConformOutcome};
pub use error::{ApplicationError, ApplicationResult};
