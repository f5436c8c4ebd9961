//! Keyed reference-data stores.
//!
//! A registry maps natural keys (subject code, teacher id, class id) to
//! records. Re-inserting a key overwrites the stored record in place, so
//! iteration keeps first-insertion order.

use serde::{Deserialize, Serialize};

use crate::models::{SchoolClass, Subject, Teacher};

/// A record with a natural key.
pub trait Keyed {
    /// The record's unique key.
    fn key(&self) -> &str;
}

impl Keyed for Subject {
    fn key(&self) -> &str {
        &self.code
    }
}

impl Keyed for Teacher {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for SchoolClass {
    fn key(&self) -> &str {
        &self.id
    }
}

/// Insertion-ordered store with unique keys and silent overwrite.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Registry<T> {
    items: Vec<T>,
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Keyed> Registry<T> {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a record, replacing any record with the same key.
    ///
    /// Returns the replaced record, if any.
    pub fn insert(&mut self, item: T) -> Option<T> {
        match self.items.iter().position(|i| i.key() == item.key()) {
            Some(idx) => Some(std::mem::replace(&mut self.items[idx], item)),
            None => {
                self.items.push(item);
                None
            }
        }
    }

    /// Looks up a record by key.
    pub fn get(&self, key: &str) -> Option<&T> {
        self.items.iter().find(|i| i.key() == key)
    }

    /// Whether a record with this key exists.
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Records in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a, T: Keyed> IntoIterator for &'a Registry<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
