use biblio_common::records::{Book, Loan, Record, Student};
use biblio_common::{LibraryError, Result};
use chrono::{Datelike, NaiveDate};
use tracing::{debug, warn};

use crate::catalog::Registry;

/// Loans, unique by student, book and loan date.
#[derive(Debug, Clone, Default)]
pub struct Loans {
    registry: Registry<Loan>,
}

impl Loans {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, loan: &Loan) -> Result<()> {
        self.registry.insert(loan)
    }

    pub fn search(&self, loan: &Loan) -> Option<Loan> {
        self.registry.search(loan)
    }

    pub fn delete(&mut self, loan: &Loan) -> Result<()> {
        self.registry.delete(loan)
    }

    pub fn list(&self) -> Vec<Loan> {
        self.registry.list()
    }

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// Sets the return date of the stored loan matching `loan`.
    ///
    /// A loan that was already returned gets its date overwritten. The date is not
    /// checked against the loan date; an earlier one is only reported.
    pub fn return_loan(&mut self, loan: &Loan, returned_on: NaiveDate) -> Result<()> {
        let Some(stored) = self.registry.find_mut(loan) else {
            return Err(LibraryError::not_found(Loan::KIND, loan.key()));
        };

        if returned_on < stored.loaned_on() {
            warn!(
                "loan {} marked as returned on {returned_on}, before it was lent",
                stored.key()
            );
        }

        stored.mark_returned(returned_on);
        debug!("returned loan {} on {returned_on}", stored.key());
        Ok(())
    }

    /// Every loan made to `student`.
    pub fn by_student(&self, student: &Student) -> Vec<Loan> {
        self.registry
            .filter(|loan| loan.student().same_identity(student))
    }

    /// Every loan of `book`.
    pub fn by_book(&self, book: &Book) -> Vec<Loan> {
        self.registry.filter(|loan| loan.book().same_identity(book))
    }

    /// Every loan made in the calendar month (and year) of `date`. The day is ignored.
    pub fn by_month(&self, date: NaiveDate) -> Vec<Loan> {
        self.registry
            .filter(|loan| same_month(loan.loaned_on(), date))
    }
}

fn same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}
