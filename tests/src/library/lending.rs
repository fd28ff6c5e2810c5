use biblio_common::ErrorKind;
use biblio_common::records::{Book, Course, Loan, LoanState, Student};
use chrono::NaiveDate;
use pretty_assertions::assert_eq;

use crate::fixtures::{ana, bob, date, lazarillo, quijote, stocked_library};

fn loaned_dates(loans: &[Loan]) -> Vec<NaiveDate> {
    loans.iter().map(Loan::loaned_on).collect()
}

#[test]
fn lend_uses_registered_copies() {
    let mut library = stocked_library().unwrap();
    let stale_ana = Student::new("A. López (old record)", "ana@example.com", Course::First).unwrap();
    let stale_quijote = Book::new("Don Quijote", "Cervantes", 10).unwrap();

    let loan = library.lend(&stale_ana, &stale_quijote, date(2024, 3, 15)).unwrap();

    assert_eq!(loan.student(), &ana());
    assert_eq!(loan.book(), &quijote());
    assert_eq!(loan.state(), LoanState::Active);
}

#[test]
fn lend_with_unknown_party_creates_nothing() {
    let mut library = stocked_library().unwrap();
    let eve = Student::new("Eve", "eve@example.com", Course::Third).unwrap();
    let celestina = Book::new("La Celestina", "Fernando de Rojas", 300).unwrap();

    let err = library.lend(&eve, &quijote(), date(2024, 3, 15)).unwrap_err();
    assert_eq!(err.kind, ErrorKind::RelatedRecordNotFound);

    let err = library.lend(&ana(), &celestina, date(2024, 3, 15)).unwrap_err();
    assert_eq!(err.kind, ErrorKind::RelatedRecordNotFound);

    assert!(library.loans().is_empty());
}

#[test]
fn loans_snapshot_students_at_creation() {
    let mut library = stocked_library().unwrap();
    library.lend(&ana(), &quijote(), date(2024, 3, 15)).unwrap();

    library.delete_student(&ana()).unwrap();
    let renamed = Student::new("Ana López García", "ana@example.com", Course::Third).unwrap();
    library.insert_student(&renamed).unwrap();

    let loans = library.loans_by_student(&renamed);
    assert_eq!(loans.len(), 1);
    assert_eq!(loans[0].student().name(), "Ana López");
}

#[test]
fn give_back_overwrites_previous_return() {
    let mut library = stocked_library().unwrap();
    let loan = library.lend(&ana(), &quijote(), date(2024, 3, 15)).unwrap();

    library.give_back(&loan, date(2024, 3, 20)).unwrap();
    library.give_back(&loan, date(2024, 4, 2)).unwrap();

    let stored = library.search_loan(&loan).unwrap();
    assert_eq!(stored.state(), LoanState::Returned);
    assert_eq!(stored.returned_on(), Some(date(2024, 4, 2)));
}

#[test]
fn give_back_unknown_loan_is_not_found() {
    let mut library = stocked_library().unwrap();
    library.lend(&ana(), &quijote(), date(2024, 3, 15)).unwrap();

    let other_day = Loan::new(ana(), quijote(), date(2024, 3, 16));
    let err = library.give_back(&other_day, date(2024, 3, 20)).unwrap_err();

    assert_eq!(err.kind, ErrorKind::NotFound);
    assert_eq!(library.loans()[0].state(), LoanState::Active);
}

#[test]
fn filtered_queries() {
    let mut library = stocked_library().unwrap();
    library.lend(&ana(), &quijote(), date(2024, 3, 1)).unwrap();
    library.lend(&bob(), &quijote(), date(2024, 4, 15)).unwrap();
    library.lend(&ana(), &lazarillo(), date(2023, 3, 15)).unwrap();
    library.lend(&bob(), &lazarillo(), date(2024, 3, 28)).unwrap();

    assert_eq!(
        loaned_dates(&library.loans_by_month(date(2024, 3, 15))),
        vec![date(2024, 3, 1), date(2024, 3, 28)]
    );
    assert_eq!(
        loaned_dates(&library.loans_by_student(&ana())),
        vec![date(2024, 3, 1), date(2023, 3, 15)]
    );
    assert_eq!(
        loaned_dates(&library.loans_by_book(&lazarillo())),
        vec![date(2023, 3, 15), date(2024, 3, 28)]
    );
}

#[test]
fn delete_loan_then_lend_again() {
    let mut library = stocked_library().unwrap();
    let loan = library.lend(&ana(), &quijote(), date(2024, 3, 15)).unwrap();

    library.delete_loan(&loan).unwrap();
    assert!(library.search_loan(&loan).is_none());
    assert_eq!(library.delete_loan(&loan).unwrap_err().kind, ErrorKind::NotFound);

    library.lend(&ana(), &quijote(), date(2024, 3, 15)).unwrap();
    assert_eq!(library.loans().len(), 1);
}
