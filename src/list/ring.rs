use std::collections::VecDeque;
use std::fmt;

use tracing::instrument;

use crate::list::{check_insertion_point, ListResult, OrderedList};

/// Ring-buffer list: O(1) at both ends, positional ops shift the shorter side.
pub struct RingList<T> {
    buf: VecDeque<T>,
}

impl<T> RingList<T> {
    pub fn new() -> Self {
        Self {
            buf: VecDeque::new(),
        }
    }
}

impl<T> Default for RingList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for RingList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.buf.iter()).finish()
    }
}

impl<T: PartialEq> OrderedList<T> for RingList<T> {
    fn len(&self) -> usize {
        self.buf.len()
    }

    fn prepend(&mut self, item: T) {
        self.buf.push_front(item);
    }

    fn append(&mut self, item: T) {
        self.buf.push_back(item);
    }

    #[instrument(level = "trace", skip(self, item))]
    fn try_insert_at(&mut self, item: T, idx: usize) -> ListResult<()> {
        check_insertion_point(idx, self.buf.len())?;
        self.buf.insert(idx, item);
        Ok(())
    }

    fn get(&self, idx: usize) -> Option<&T> {
        self.buf.get(idx)
    }

    #[instrument(level = "trace", skip(self))]
    fn remove_at(&mut self, idx: usize) -> Option<T> {
        self.buf.remove(idx)
    }

    fn remove(&mut self, item: &T) -> Option<T> {
        let idx = self.buf.iter().position(|x| x == item)?;
        self.buf.remove(idx)
    }

    fn contains(&self, item: &T) -> bool {
        self.buf.contains(item)
    }

    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.buf.iter().cloned().collect()
    }
}

impl<T> FromIterator<T> for RingList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            buf: iter.into_iter().collect(),
        }
    }
}
