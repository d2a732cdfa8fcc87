use std::fmt;

use tracing::instrument;

use crate::list::{check_insertion_point, ListResult, OrderedList};

/// Array-backed list over contiguous storage.
///
/// Growth is left to `Vec`, so appends are amortized O(1).
/// Positional inserts and removals shift the tail and are O(n).
pub struct ArrayList<T> {
    items: Vec<T>,
}

impl<T> ArrayList<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }
}

impl<T> Default for ArrayList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

impl<T: PartialEq> OrderedList<T> for ArrayList<T> {
    fn len(&self) -> usize {
        self.items.len()
    }

    fn prepend(&mut self, item: T) {
        self.items.insert(0, item);
    }

    fn append(&mut self, item: T) {
        self.items.push(item);
    }

    #[instrument(level = "trace", skip(self, item))]
    fn try_insert_at(&mut self, item: T, idx: usize) -> ListResult<()> {
        check_insertion_point(idx, self.items.len())?;
        self.items.insert(idx, item);
        Ok(())
    }

    fn get(&self, idx: usize) -> Option<&T> {
        self.items.get(idx)
    }

    #[instrument(level = "trace", skip(self))]
    fn remove_at(&mut self, idx: usize) -> Option<T> {
        if idx >= self.items.len() {
            return None;
        }
        Some(self.items.remove(idx))
    }

    fn remove(&mut self, item: &T) -> Option<T> {
        let idx = self.items.iter().position(|x| x == item)?;
        Some(self.items.remove(idx))
    }

    fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }

    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.clone()
    }
}

impl<T> FromIterator<T> for ArrayList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
