//! Natural-key selection sets (favorites, document list).
//!
//! A set holds full `Country` snapshots in insertion order, with membership
//! keyed by the common name only: two snapshots with the same name are the same
//! member even if their other fields have since diverged. A name→position index
//! keeps membership checks O(1) instead of a linear scan over snapshots.
//!
//! Every mutation rewrites the whole serialized set to its durable key. This is
//! a deliberate full-overwrite policy, not incremental deltas.

use crate::error::Result;
use crate::model::Country;
use crate::store::{Scope, StateStore};
use std::collections::HashMap;

/// Outcome of a toggle, carrying the affected key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Toggle {
    Added(String),
    Removed(String),
}

pub struct SelectionSet {
    key: &'static str,
    entries: Vec<Country>,
    index: HashMap<String, usize>,
}

impl SelectionSet {
    /// Load the set from its durable key. A missing or malformed value falls
    /// back to an empty set; duplicate names in stored data are dropped,
    /// first occurrence wins.
    pub fn hydrate<S: StateStore>(store: &S, key: &'static str) -> Self {
        let stored: Vec<Country> = store
            .get(Scope::Durable, key)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default();

        let mut set = Self {
            key,
            entries: Vec::with_capacity(stored.len()),
            index: HashMap::with_capacity(stored.len()),
        };
        for country in stored {
            if !set.index.contains_key(&country.name) {
                set.index.insert(country.name.clone(), set.entries.len());
                set.entries.push(country);
            }
        }
        set
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Snapshots in insertion order.
    pub fn entries(&self) -> &[Country] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Add a snapshot of `record`, or remove the member with its name.
    /// Persists the full set either way.
    pub fn toggle<S: StateStore>(&mut self, store: &mut S, record: &Country) -> Result<Toggle> {
        let outcome = match self.index.get(&record.name).copied() {
            Some(position) => {
                self.entries.remove(position);
                self.rebuild_index();
                Toggle::Removed(record.name.clone())
            }
            None => {
                self.index.insert(record.name.clone(), self.entries.len());
                self.entries.push(record.clone());
                Toggle::Added(record.name.clone())
            }
        };
        self.persist(store)?;
        Ok(outcome)
    }

    /// Delete by list position (used by the document-list view). Out-of-range
    /// positions are a no-op and do not persist.
    pub fn remove_at<S: StateStore>(
        &mut self,
        store: &mut S,
        position: usize,
    ) -> Result<Option<String>> {
        if position >= self.entries.len() {
            return Ok(None);
        }
        let removed = self.entries.remove(position);
        self.rebuild_index();
        self.persist(store)?;
        Ok(Some(removed.name))
    }

    fn rebuild_index(&mut self) {
        self.index = self
            .entries
            .iter()
            .enumerate()
            .map(|(i, c)| (c.name.clone(), i))
            .collect();
    }

    fn persist<S: StateStore>(&self, store: &mut S) -> Result<()> {
        let json = serde_json::to_string(&self.entries)?;
        store.set(Scope::Durable, self.key, &json)
    }
}
