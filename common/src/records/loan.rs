use std::fmt;

use chrono::NaiveDate;

use crate::records::{Book, BookKey, Record, Student};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoanState {
    Active,
    Returned,
}

/// A book lent to a student on a given day.
///
/// The student and book are owned snapshots: later edits to the catalogue do
/// not reach loans already made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loan {
    student: Student,
    book: Book,
    loaned_on: NaiveDate,
    returned_on: Option<NaiveDate>,
}

/// Identity fields of a [`Loan`]. The loan date distinguishes repeated
/// borrowings of the same book by the same student.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoanKey<'a> {
    pub student: &'a str,
    pub book: BookKey<'a>,
    pub loaned_on: NaiveDate,
}

impl fmt::Display for LoanKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "of {} to {} on {}", self.book, self.student, self.loaned_on)
    }
}

impl Loan {
    /// Creates an active loan.
    pub fn new(student: Student, book: Book, loaned_on: NaiveDate) -> Self {
        Self {
            student,
            book,
            loaned_on,
            returned_on: None,
        }
    }

    pub fn student(&self) -> &Student {
        &self.student
    }

    pub fn book(&self) -> &Book {
        &self.book
    }

    pub fn loaned_on(&self) -> NaiveDate {
        self.loaned_on
    }

    pub fn returned_on(&self) -> Option<NaiveDate> {
        self.returned_on
    }

    pub fn state(&self) -> LoanState {
        match self.returned_on {
            Some(_) => LoanState::Returned,
            None => LoanState::Active,
        }
    }

    /// Records the return. Calling it again overwrites the previous date.
    pub fn mark_returned(&mut self, returned_on: NaiveDate) {
        self.returned_on = Some(returned_on);
    }
}

impl Record for Loan {
    const KIND: &'static str = "loan";

    type Key<'a> = LoanKey<'a>;

    fn key(&self) -> LoanKey<'_> {
        LoanKey {
            student: self.student.key(),
            book: self.book.key(),
            loaned_on: self.loaned_on,
        }
    }
}

impl fmt::Display for Loan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "loan {}", self.key())?;
        match self.returned_on {
            Some(date) => write!(f, ", returned on {date}"),
            None => write!(f, ", not returned"),
        }
    }
}
