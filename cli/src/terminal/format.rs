use biblio_common::records::{Book, Loan, LoanState, Student};
use colored::*;

use crate::terminal::colors;

pub type Detail = (String, ColoredString);

pub fn student_to_details(student: &Student) -> Vec<Detail> {
    vec![
        (String::from("Email"), student.email().color(colors::ACCENT)),
        (String::from("Course"), student.course().to_string().normal()),
    ]
}

pub fn book_to_details(book: &Book) -> Vec<Detail> {
    vec![
        (String::from("Author"), book.author().normal()),
        (String::from("Pages"), book.pages().to_string().normal()),
    ]
}

pub fn loan_to_details(loan: &Loan) -> Vec<Detail> {
    let mut details: Vec<Detail> = vec![
        (
            String::from("Student"),
            format!("{} <{}>", loan.student().name(), loan.student().email()).normal(),
        ),
        (String::from("Lent"), loan.loaned_on().to_string().color(colors::DATE)),
    ];

    details.push(match loan.state() {
        LoanState::Active => (String::from("Status"), "on loan".color(colors::ACTIVE)),
        LoanState::Returned => (
            String::from("Status"),
            loan.returned_on()
                .map(|date| format!("returned on {date}"))
                .unwrap_or_default()
                .color(colors::RETURNED),
        ),
    });

    details
}

/// Tree heading for a loan: the book it is about.
pub fn loan_title(loan: &Loan) -> String {
    format!("{} ({})", loan.book().title(), loan.book().author())
}
