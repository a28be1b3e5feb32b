//! Entity List
//!
//! Ordered records keyed by unique ID. Only ever reloaded wholesale,
//! appended to, replaced by ID or filtered by ID; never reordered.

use std::collections::HashSet;

use crate::domain::{Entity, FoodRecord};

/// The food list rendered by the dashboard
pub type FoodList = EntityList<FoodRecord>;

/// A change to apply to an [`EntityList`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation<T: Entity> {
    /// Replace the whole list
    Load(Vec<T>),
    /// Add a record at the end
    Append(T),
    /// Substitute the record with the same ID
    Replace(T),
    /// Drop the record with this ID
    Remove(T::Id),
    Nothing,
}

impl<T: Entity> Mutation<T> {
    pub fn is_nothing(&self) -> bool {
        matches!(self, Mutation::Nothing)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityList<T> {
    records: Vec<T>,
}

impl<T> Default for EntityList<T> {
    fn default() -> Self {
        Self { records: Vec::new() }
    }
}

impl<T: Entity> EntityList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the entire list. Later duplicates of an ID are dropped.
    pub fn load(&mut self, records: Vec<T>) {
        let mut seen = HashSet::with_capacity(records.len());
        self.records = records
            .into_iter()
            .filter(|record| {
                let fresh = seen.insert(record.id());
                if !fresh {
                    log::warn!("[STATE] Dropping duplicate id {:?} from load", record.id());
                }
                fresh
            })
            .collect();
    }

    /// Add to the end. An ID already present is substituted in place instead.
    pub fn append(&mut self, record: T) {
        match self.position(record.id()) {
            Some(index) => {
                log::warn!("[STATE] Append of existing id {:?}, replacing in place", record.id());
                self.records[index] = record;
            }
            None => self.records.push(record),
        }
    }

    /// Substitute the record with the same ID; no-op if absent
    pub fn replace(&mut self, record: T) {
        if let Some(index) = self.position(record.id()) {
            self.records[index] = record;
        }
    }

    /// Drop the record with this ID; no-op if absent
    pub fn remove(&mut self, id: T::Id) {
        self.records.retain(|record| record.id() != id);
    }

    pub fn apply(&mut self, mutation: Mutation<T>) {
        match mutation {
            Mutation::Load(records) => self.load(records),
            Mutation::Append(record) => self.append(record),
            Mutation::Replace(record) => self.replace(record),
            Mutation::Remove(id) => self.remove(id),
            Mutation::Nothing => {}
        }
    }

    pub fn get(&self, id: T::Id) -> Option<&T> {
        self.records.iter().find(|record| record.id() == id)
    }

    pub fn contains(&self, id: T::Id) -> bool {
        self.position(id).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn position(&self, id: T::Id) -> Option<usize> {
        self.records.iter().position(|record| record.id() == id)
    }
}

impl<'a, T> IntoIterator for &'a EntityList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
