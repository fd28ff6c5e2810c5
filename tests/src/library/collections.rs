use biblio_common::ErrorKind;
use biblio_common::records::{Book, Course, Student};
use biblio_core::Library;
use pretty_assertions::assert_eq;

use crate::fixtures::{ana, bob, lazarillo, quijote, stocked_library};

#[test]
fn list_after_inserts_returns_equal_copies_in_order() {
    let library = stocked_library().unwrap();

    assert_eq!(library.students(), vec![ana(), bob()]);
    assert_eq!(library.books(), vec![quijote(), lazarillo()]);
}

#[test]
fn search_returns_equal_value_not_alias() {
    let library = stocked_library().unwrap();

    let first = library.search_student(&Student::probe("ana@example.com").unwrap()).unwrap();
    let second = library.search_student(&Student::probe("ana@example.com").unwrap()).unwrap();

    assert_eq!(first, ana());
    assert_eq!(first, second);
    assert!(!std::ptr::eq(first.email(), second.email()));
}

#[test]
fn callers_copy_cannot_reach_stored_state() {
    let mut library = Library::new();
    let mut ana = ana();
    library.insert_student(&ana).unwrap();

    ana = Student::new("Someone Else", ana.email(), Course::First).unwrap();

    let stored = library.search_student(&ana).unwrap();
    assert_eq!(stored.name(), "Ana López");
    assert_eq!(stored.course(), Course::Second);
}

#[test]
fn duplicate_insert_keeps_size() {
    let mut library = stocked_library().unwrap();

    let renamed = Student::new("Ana Again", "ana@example.com", Course::First).unwrap();
    let err = library.insert_student(&renamed).unwrap_err();
    assert_eq!(err.kind, ErrorKind::DuplicateKey);

    let err = library
        .insert_book(&Book::new("Don Quijote", "Cervantes", 1).unwrap())
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::DuplicateKey);

    assert_eq!(library.students().len(), 2);
    assert_eq!(library.books().len(), 2);
}

#[test]
fn deleting_missing_record_changes_nothing() {
    let mut library = stocked_library().unwrap();
    let before = library.books();

    let err = library
        .delete_book(&Book::probe("La Celestina", "Fernando de Rojas").unwrap())
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::NotFound);
    assert_eq!(library.books(), before);
}

#[test]
fn delete_compacts_without_gaps() {
    let mut library = stocked_library().unwrap();

    library.delete_student(&Student::probe("ana@example.com").unwrap()).unwrap();
    assert_eq!(library.students(), vec![bob()]);

    library.insert_student(&ana()).unwrap();
    assert_eq!(library.students(), vec![bob(), ana()]);
}
