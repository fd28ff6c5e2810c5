pub mod book;
pub mod loan;
pub mod student;

use std::path::PathBuf;

use biblio_common::records::{Book, Course, Loan, Student};
use chrono::NaiveDate;
use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "biblio")]
#[command(about = "Keeps track of a small library's students, books and loans.")]
pub struct CommandLine {
    /// Print less: once drops headers, twice prints only summaries
    #[arg(short, long, action = ArgAction::Count)]
    pub quiet: u8,
    /// Show diagnostics: once for debug, twice for trace (overridden by RUST_LOG)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
    /// Do not print the startup banner
    #[arg(long)]
    pub no_banner: bool,
    /// Read commands from a file instead of standard input
    #[arg(long, value_name = "FILE")]
    pub script: Option<PathBuf>,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// One line typed into the shell.
#[derive(Parser, Debug)]
#[command(name = "biblio", no_binary_name = true, disable_version_flag = true)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

#[derive(Subcommand, Debug)]
pub enum ShellCommand {
    /// Manage students
    #[command(subcommand, alias = "s")]
    Student(StudentCommand),
    /// Manage the book catalogue
    #[command(subcommand, alias = "b")]
    Book(BookCommand),
    /// Lend, return and query loans
    #[command(subcommand, alias = "l")]
    Loan(LoanCommand),
    /// Leave the shell
    #[command(alias = "quit", alias = "q")]
    Exit,
}

#[derive(Subcommand, Debug)]
pub enum StudentCommand {
    /// Register a new student
    Add {
        name: String,
        email: String,
        /// 1-4, or first..fourth
        course: Course,
    },
    /// Show the student with this email
    Find { email: String },
    /// Remove the student with this email
    Remove { email: String },
    /// List every student
    List,
}

#[derive(Subcommand, Debug)]
pub enum BookCommand {
    /// Add a book to the catalogue
    Add {
        title: String,
        author: String,
        pages: u32,
    },
    /// Show the book with this title and author
    Find(BookRef),
    /// Remove the book with this title and author
    Remove(BookRef),
    /// List every book
    List,
}

#[derive(Subcommand, Debug)]
pub enum LoanCommand {
    /// Lend a registered book to a registered student
    Lend {
        email: String,
        #[command(flatten)]
        book: BookRef,
        /// Loan date (YYYY-MM-DD), today if omitted
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Mark a loan as returned
    Return {
        #[command(flatten)]
        loan: LoanRef,
        /// Return date (YYYY-MM-DD), today if omitted
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Show one loan
    Find(LoanRef),
    /// Remove one loan
    Remove(LoanRef),
    /// List every loan
    List,
    /// Loans made to a student
    ByStudent { email: String },
    /// Loans of a book
    ByBook(BookRef),
    /// Loans made in the month of the given date (YYYY-MM-DD)
    ByMonth { date: NaiveDate },
}

#[derive(Args, Debug)]
pub struct BookRef {
    pub title: String,
    pub author: String,
}

impl BookRef {
    pub fn to_probe(&self) -> biblio_common::Result<Book> {
        Book::probe(&self.title, &self.author)
    }
}

/// Identity of a loan as typed by the user.
#[derive(Args, Debug)]
pub struct LoanRef {
    pub email: String,
    pub title: String,
    pub author: String,
    /// Date the loan was made (YYYY-MM-DD)
    pub loaned_on: NaiveDate,
}

impl LoanRef {
    pub fn to_probe(&self) -> biblio_common::Result<Loan> {
        Ok(Loan::new(
            Student::probe(&self.email)?,
            Book::probe(&self.title, &self.author)?,
            self.loaned_on,
        ))
    }
}

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
