//! Group-and-count helper shared by every ranking.

use std::collections::HashMap;
use std::hash::Hash;

use crate::types::PlayCount;

/// Counts occurrences per key, remembering the order keys were first seen.
///
/// Ranking relies on that order: groups with equal counts stay in
/// first-seen order because the final sort is stable.
#[derive(Debug, Clone)]
pub struct Tally<K> {
    index: HashMap<K, usize>,
    groups: Vec<(K, PlayCount)>,
}

impl<K: Eq + Hash + Clone> Tally<K> {
    /// Create an empty tally.
    #[must_use]
    pub fn new() -> Self {
        Self {
            index: HashMap::new(),
            groups: Vec::new(),
        }
    }

    /// Count one occurrence of `key`.
    pub fn add(&mut self, key: K) {
        if let Some(&slot) = self.index.get(&key) {
            self.groups[slot].1.increment();
        } else {
            self.index.insert(key.clone(), self.groups.len());
            self.groups.push((key, PlayCount::new(1)));
        }
    }

    /// Number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether nothing was counted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Groups by descending count, ties in first-seen order.
    #[must_use]
    pub fn ranked(mut self) -> Vec<(K, PlayCount)> {
        // `sort_by` is stable
        self.groups.sort_by(|a, b| b.1.cmp(&a.1));
        self.groups
    }

    /// Groups by ascending key.
    #[must_use]
    pub fn by_key(mut self) -> Vec<(K, PlayCount)>
    where
        K: Ord,
    {
        self.groups.sort_by(|a, b| a.0.cmp(&b.0));
        self.groups
    }
}

impl<K: Eq + Hash + Clone> Default for Tally<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash + Clone> FromIterator<K> for Tally<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tally = Self::new();
        for key in iter {
            tally.add(key);
        }
        tally
    }
}
