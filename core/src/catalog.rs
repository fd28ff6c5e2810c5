//! # Record Collections
//!
//! [`Registry`] is the ordered, growable collection behind every manager. It owns
//! its records outright: inserts clone the caller's value in, reads clone
//! stored values out, so nothing outside the registry can reach stored state.
//!
//! * [`students::Students`] and [`books::Books`] are plain registries.
//! * [`loans::Loans`] adds the return transition and filtered queries.

pub mod books;
pub mod loans;
pub mod students;

pub use books::Books;
pub use loans::Loans;
pub use students::Students;

use biblio_common::records::Record;
use biblio_common::{LibraryError, Result};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct Registry<T> {
    records: Vec<T>,
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self { records: Vec::new() }
    }
}

impl<T: Record> Registry<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a copy of `record`, failing if its identity is already present.
    pub fn insert(&mut self, record: &T) -> Result<()> {
        if self.position(record).is_some() {
            return Err(LibraryError::duplicate_key(T::KIND, record.key()));
        }
        self.records.push(record.clone());
        debug!("stored {} {}", T::KIND, record.key());
        Ok(())
    }

    /// Returns a copy of the stored record sharing `record`'s identity.
    pub fn search(&self, record: &T) -> Option<T> {
        self.position(record).map(|idx| self.records[idx].clone())
    }

    /// Removes the stored record sharing `record`'s identity. Remaining records keep their order.
    pub fn delete(&mut self, record: &T) -> Result<()> {
        let Some(idx) = self.position(record) else {
            return Err(LibraryError::not_found(T::KIND, record.key()));
        };
        self.records.remove(idx);
        debug!("removed {} {}", T::KIND, record.key());
        Ok(())
    }

    /// Copies of every record, in insertion order.
    pub fn list(&self) -> Vec<T> {
        self.records.clone()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub(crate) fn find_mut(&mut self, record: &T) -> Option<&mut T> {
        self.records.iter_mut().find(|stored| stored.same_identity(record))
    }

    pub(crate) fn filter<P>(&self, predicate: P) -> Vec<T>
    where
        P: Fn(&T) -> bool,
    {
        self.records
            .iter()
            .filter(|stored| predicate(stored))
            .cloned()
            .collect()
    }

    fn position(&self, record: &T) -> Option<usize> {
        self.records.iter().position(|stored| stored.same_identity(record))
    }
}
