use biblio_common::config::Config;
use biblio_common::records::{Loan, Student};
use biblio_core::Library;
use chrono::NaiveDate;

use crate::commands::{LoanCommand, today};
use crate::terminal::{format, print};

pub fn loan(command: LoanCommand, library: &mut Library, cfg: &Config) -> biblio_common::Result<()> {
    match command {
        LoanCommand::Lend { email, book, date } => {
            let loaned_on = date.unwrap_or_else(today);
            let loan = library.lend(&Student::probe(&email)?, &book.to_probe()?, loaned_on)?;
            print::print_status(format!(
                "Lent \"{}\" to {} on {loaned_on}",
                loan.book().title(),
                loan.student().name()
            ));
        }
        LoanCommand::Return { loan, date } => {
            let returned_on = date.unwrap_or_else(today);
            library.give_back(&loan.to_probe()?, returned_on)?;
            print::print_status(format!("\"{}\" returned on {returned_on}", loan.title));
        }
        LoanCommand::Find(loan) => match library.search_loan(&loan.to_probe()?) {
            Some(found) => print_loans(&[found], cfg),
            None => print::no_results("loan"),
        },
        LoanCommand::Remove(loan) => {
            library.delete_loan(&loan.to_probe()?)?;
            print::print_status(format!("Removed the {} loan of \"{}\"", loan.loaned_on, loan.title));
        }
        LoanCommand::List => list("loans", &library.loans(), cfg),
        LoanCommand::ByStudent { email } => {
            let loans = library.loans_by_student(&Student::probe(&email)?);
            list(&format!("loans of {email}"), &loans, cfg);
        }
        LoanCommand::ByBook(book) => {
            let loans = library.loans_by_book(&book.to_probe()?);
            list(&format!("loans of {}", book.title), &loans, cfg);
        }
        LoanCommand::ByMonth { date } => {
            let loans = library.loans_by_month(date);
            list(&format!("loans of {}", month_label(date)), &loans, cfg);
        }
    }
    Ok(())
}

fn list(title: &str, loans: &[Loan], cfg: &Config) {
    print::header(title, cfg.quiet);
    print_loans(loans, cfg);
    print::summary(loans.len(), "loan", cfg);
}

fn print_loans(loans: &[Loan], cfg: &Config) {
    if loans.is_empty() {
        print::no_results("loans");
        return;
    }
    if cfg.quiet > 1 {
        return;
    }

    for (idx, loan) in loans.iter().enumerate() {
        print::tree_head(idx, &format::loan_title(loan));
        print::as_tree_one_level(format::loan_to_details(loan));
    }
}

fn month_label(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}
