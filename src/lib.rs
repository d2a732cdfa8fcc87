//! Ordered-list contract, its conformance script, and static fixtures.
//!
//! - [`list`]: the [`OrderedList`] trait plus array, linked and ring backings
//! - [`conformance`]: one fixed script that every backing must pass unmodified
//! - [`fixtures`]: weighted graphs, binary trees and grid points used as
//!   inputs by algorithms elsewhere
//!
//! ```
//! use dsakit::{conformance, ArrayList, OrderedList};
//!
//! let mut list = ArrayList::<i32>::new();
//! let report = conformance::run(&mut list).unwrap();
//! assert_eq!(list.to_vec(), report.contents);
//! ```

pub mod application;
pub mod cli;
pub mod config;
pub mod conformance;
pub mod exitcode;
pub mod fixtures;
pub mod list;
pub mod tree_traits;
pub mod util;

pub use list::{ArrayList, LinkedList, ListError, ListKind, OrderedList, RingList};
