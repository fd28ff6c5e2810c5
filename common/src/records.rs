//! # Domain Records
//!
//! The entities kept by the library and the rule that decides when two of
//! them are "the same" record.
//!
//! ## Entities
//! * [`student::Student`]: identified by email.
//! * [`book::Book`]: identified by title and author.
//! * [`loan::Loan`]: identified by student, book and loan date.
//!
//! Records derive a full structural `PartialEq`. Collections never use it for
//! uniqueness; they compare [`Record::key`] instead, so two records with the same
//! key but different payload (e.g. a renamed student) still collide.

pub mod book;
pub mod loan;
pub mod student;

pub use book::{Book, BookKey};
pub use loan::{Loan, LoanKey, LoanState};
pub use student::{Course, Student};

use std::fmt::{Debug, Display};

/// A value that can be stored in a record collection.
pub trait Record: Clone + Debug {
    /// Human-readable name of the record type, used in messages.
    const KIND: &'static str;

    /// Borrowed view over the identity fields.
    type Key<'a>: PartialEq + Display
    where
        Self: 'a;

    fn key(&self) -> Self::Key<'_>;

    /// Whether `other` denotes the same stored record.
    fn same_identity(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

/// Trims `value` and collapses inner runs of whitespace to a single space.
pub(crate) fn normalize_text(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}
