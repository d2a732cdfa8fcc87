//! Ordered-list contract and its concrete backings
//!
//! Two failure channels, never mixed:
//! - structural index violations (`insert_at` past the tail) panic, or
//!   surface as [`ListError`] through [`OrderedList::try_insert_at`]
//! - lookups and removals by position or value return `Option`

pub mod array;
pub mod error;
pub mod linked;
pub mod ring;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use array::ArrayList;
pub use error::{ListError, ListResult};
pub use linked::LinkedList;
pub use ring::RingList;

/// Zero-indexed, duplicate-tolerant sequence container.
///
/// Indices are always contiguous in `[0, len)`. Implementors supply the core
/// operations; `insert_at` and the convenience methods are derived from them.
pub trait OrderedList<T: PartialEq> {
    /// Number of live elements.
    fn len(&self) -> usize;

    /// Insert `item` at index 0, shifting every existing element by one.
    fn prepend(&mut self, item: T);

    /// Insert `item` after the current last element.
    fn append(&mut self, item: T);

    /// Insert `item` at `idx`, shifting elements at `>= idx` by one.
    ///
    /// `idx == len` is the tail position and behaves like `append`.
    /// Anything past it is rejected and the list is left unchanged.
    fn try_insert_at(&mut self, item: T, idx: usize) -> ListResult<()>;

    /// Element at `idx`, `None` when `idx >= len`.
    fn get(&self, idx: usize) -> Option<&T>;

    /// Remove and return the element at `idx`; later elements shift down by one.
    fn remove_at(&mut self, idx: usize) -> Option<T>;

    /// Remove and return the first element equal to `item` in index order.
    fn remove(&mut self, item: &T) -> Option<T>;

    /// Insert `item` at `idx`.
    ///
    /// # Panics
    /// If `idx > len`. An invalid insertion point is a caller bug, not an
    /// expected outcome; use [`OrderedList::try_insert_at`] to handle it.
    fn insert_at(&mut self, item: T, idx: usize) {
        if let Err(e) = self.try_insert_at(item, idx) {
            panic!("insert_at: {e}");
        }
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn contains(&self, item: &T) -> bool {
        (0..self.len()).any(|i| self.get(i) == Some(item))
    }

    /// Clone the contents into a `Vec` in index order.
    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        (0..self.len()).filter_map(|i| self.get(i).cloned()).collect()
    }
}

/// Shared bounds check for insertion points, `[0, len]` inclusive.
pub(crate) fn check_insertion_point(idx: usize, len: usize) -> ListResult<()> {
    if idx > len {
        return Err(ListError::IndexOutOfBounds { index: idx, len });
    }
    Ok(())
}

/// Selects one of the concrete list backings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ListKind {
    #[default]
    Array,
    Linked,
    Ring,
}

impl ListKind {
    pub const ALL: [ListKind; 3] = [ListKind::Array, ListKind::Linked, ListKind::Ring];

    pub fn name(&self) -> &'static str {
        match self {
            ListKind::Array => "array",
            ListKind::Linked => "linked",
            ListKind::Ring => "ring",
        }
    }
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
