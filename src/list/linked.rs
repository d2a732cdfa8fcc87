use std::fmt;

use tracing::instrument;

use crate::list::{check_insertion_point, ListError, ListResult, OrderedList};

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    value: T,
    next: Link<T>,
}

/// Singly linked list; each node exclusively owns the next one.
///
/// `prepend` is O(1), everything positional walks from the head.
pub struct LinkedList<T> {
    head: Link<T>,
    len: usize,
}

impl<T> LinkedList<T> {
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    /// The link that owns the node at `idx`; `idx == len` yields the empty tail link.
    fn link_mut(&mut self, idx: usize) -> Option<&mut Link<T>> {
        let mut cur = &mut self.head;
        for _ in 0..idx {
            cur = &mut cur.as_mut()?.next;
        }
        Some(cur)
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedList<T> {
    // iterative, so long lists don't recurse through Box drops
    fn drop(&mut self) {
        let mut cur = self.head.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> OrderedList<T> for LinkedList<T> {
    fn len(&self) -> usize {
        self.len
    }

    fn prepend(&mut self, item: T) {
        let next = self.head.take();
        self.head = Some(Box::new(Node { value: item, next }));
        self.len += 1;
    }

    fn append(&mut self, item: T) {
        let len = self.len;
        self.insert_at(item, len);
    }

    #[instrument(level = "trace", skip(self, item))]
    fn try_insert_at(&mut self, item: T, idx: usize) -> ListResult<()> {
        let len = self.len;
        check_insertion_point(idx, len)?;
        let Some(link) = self.link_mut(idx) else {
            return Err(ListError::IndexOutOfBounds { index: idx, len });
        };
        let next = link.take();
        *link = Some(Box::new(Node { value: item, next }));
        self.len += 1;
        Ok(())
    }

    fn get(&self, idx: usize) -> Option<&T> {
        self.iter().nth(idx)
    }

    #[instrument(level = "trace", skip(self))]
    fn remove_at(&mut self, idx: usize) -> Option<T> {
        if idx >= self.len {
            return None;
        }
        let link = self.link_mut(idx)?;
        let node = link.take()?;
        let Node { value, next } = *node;
        *link = next;
        self.len -= 1;
        Some(value)
    }

    fn remove(&mut self, item: &T) -> Option<T> {
        let idx = self.iter().position(|x| x == item)?;
        self.remove_at(idx)
    }

    fn contains(&self, item: &T) -> bool {
        self.iter().any(|x| x == item)
    }

    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let items: Vec<T> = iter.into_iter().collect();
        let mut list = Self::new();
        for value in items.into_iter().rev() {
            let next = list.head.take();
            list.head = Some(Box::new(Node { value, next }));
            list.len += 1;
        }
        list
    }
}

/// Borrowing iterator over a [`LinkedList`], head to tail.
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.value
        })
    }
}
