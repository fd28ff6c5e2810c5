//! # Library Service
//!
//! The entry point the outside world talks to. It owns the three collections
//! and enforces the one rule that spans them: a loan may only reference a
//! student and a book that are registered, and it captures *their* stored copies.

use biblio_common::records::{Book, Loan, Record, Student};
use biblio_common::{ErrorKind, LibraryError, Result};
use chrono::NaiveDate;
use tracing::info;

use crate::catalog::{Books, Loans, Students};

#[derive(Debug, Clone, Default)]
pub struct Library {
    students: Students,
    books: Books,
    loans: Loans,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_student(&mut self, student: &Student) -> Result<()> {
        self.students.insert(student)
    }

    pub fn search_student(&self, student: &Student) -> Option<Student> {
        self.students.search(student)
    }

    /// Loans already made to the student keep their own snapshot of it.
    pub fn delete_student(&mut self, student: &Student) -> Result<()> {
        self.students.delete(student)
    }

    pub fn students(&self) -> Vec<Student> {
        self.students.list()
    }

    pub fn insert_book(&mut self, book: &Book) -> Result<()> {
        self.books.insert(book)
    }

    pub fn search_book(&self, book: &Book) -> Option<Book> {
        self.books.search(book)
    }

    pub fn delete_book(&mut self, book: &Book) -> Result<()> {
        self.books.delete(book)
    }

    pub fn books(&self) -> Vec<Book> {
        self.books.list()
    }

    /// Lends `book` to `student` on `loaned_on` and returns the stored loan.
    ///
    /// Both records are resolved against their collections first; the loan is
    /// built from the resolved copies, not from the arguments, so a caller
    /// holding a stale or partial record (e.g. a probe) still produces a loan
    /// that mirrors what is registered.
    pub fn lend(&mut self, student: &Student, book: &Book, loaned_on: NaiveDate) -> Result<Loan> {
        let student = self
            .students
            .search(student)
            .ok_or_else(|| LibraryError::related_not_found(Student::KIND, student.key()))?;
        let book = self
            .books
            .search(book)
            .ok_or_else(|| LibraryError::related_not_found(Book::KIND, book.key()))?;

        let loan = Loan::new(student, book, loaned_on);
        self.loans.insert(&loan)?;
        info!("lent {} to {} on {loaned_on}", loan.book().key(), loan.student().key());
        Ok(loan)
    }

    /// Marks an existing loan as returned on `returned_on`.
    pub fn give_back(&mut self, loan: &Loan, returned_on: NaiveDate) -> Result<()> {
        if self.loans.search(loan).is_none() {
            return Err(LibraryError::new(
                ErrorKind::NotFound,
                format!("cannot return loan {}: it was never lent", loan.key()),
            ));
        }
        self.loans.return_loan(loan, returned_on)?;
        info!("returned loan {} on {returned_on}", loan.key());
        Ok(())
    }

    pub fn search_loan(&self, loan: &Loan) -> Option<Loan> {
        self.loans.search(loan)
    }

    pub fn delete_loan(&mut self, loan: &Loan) -> Result<()> {
        self.loans.delete(loan)
    }

    pub fn loans(&self) -> Vec<Loan> {
        self.loans.list()
    }

    pub fn loans_by_student(&self, student: &Student) -> Vec<Loan> {
        self.loans.by_student(student)
    }

    pub fn loans_by_book(&self, book: &Book) -> Vec<Loan> {
        self.loans.by_book(book)
    }

    pub fn loans_by_month(&self, date: NaiveDate) -> Vec<Loan> {
        self.loans.by_month(date)
    }
}
