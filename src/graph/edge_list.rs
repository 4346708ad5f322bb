//! Ordered Edge List
//!
//! A duplicate-free sequence kept in ascending byte-wise order of a string key.
//! Backs a user's friend edges, a user's followed brands, and the user registry.

use std::cmp::Ordering;
use std::slice;

/// Anything stored in an [`OrderedEdgeList`] exposes the key it is ordered by
pub trait EdgeKey {
    fn edge_key(&self) -> &str;
}

impl EdgeKey for String {
    fn edge_key(&self) -> &str {
        self.as_str()
    }
}

/// Sorted, duplicate-free list keyed by [`EdgeKey::edge_key`]
#[derive(Debug, Clone)]
pub struct OrderedEdgeList<T> {
    entries: Vec<T>,
}

impl<T> Default for OrderedEdgeList<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T: EdgeKey> OrderedEdgeList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.position(key).is_ok()
    }

    pub fn get(&self, key: &str) -> Option<&T> {
        self.position(key).ok().map(|idx| &self.entries[idx])
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut T> {
        match self.position(key) {
            Ok(idx) => Some(&mut self.entries[idx]),
            Err(_) => None,
        }
    }

    /// Insert `item` at the position that keeps keys ascending.
    ///
    /// Returns `false` and leaves the list untouched when the key is already present.
    pub fn insert(&mut self, item: T) -> bool {
        // New smallest key goes straight to the front.
        if let Some(head) = self.entries.first() {
            if item.edge_key() < head.edge_key() {
                self.entries.insert(0, item);
                return true;
            }
        }

        match self.position(item.edge_key()) {
            Ok(_) => false,
            Err(idx) => {
                self.entries.insert(idx, item);
                true
            }
        }
    }

    /// Unlink the entry with `key`, handing it back to the caller.
    ///
    /// Returns `None` when the key is absent.
    pub fn remove(&mut self, key: &str) -> Option<T> {
        self.position(key).ok().map(|idx| self.entries.remove(idx))
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.entries.iter()
    }

    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.entries.iter_mut()
    }

    /// Keys in ascending order
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(EdgeKey::edge_key)
    }

    fn position(&self, key: &str) -> Result<usize, usize> {
        self.entries
            .binary_search_by(|entry| entry.edge_key().cmp(key))
    }
}

impl<'a, T> IntoIterator for &'a OrderedEdgeList<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Byte-wise lexicographic comparison used for every key in the engine
pub fn compare_keys(a: &str, b: &str) -> Ordering {
    a.as_bytes().cmp(b.as_bytes())
}
