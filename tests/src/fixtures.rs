use biblio_common::records::{Book, Course, Student};
use biblio_core::Library;
use chrono::NaiveDate;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn ana() -> Student {
    Student::new("Ana López", "ana@example.com", Course::Second).unwrap()
}

pub fn bob() -> Student {
    Student::new("Bob Ruiz", "bob@example.com", Course::Fourth).unwrap()
}

pub fn quijote() -> Book {
    Book::new("Don Quijote", "Cervantes", 863).unwrap()
}

pub fn lazarillo() -> Book {
    Book::new("Lazarillo de Tormes", "Anonymous", 120).unwrap()
}

/// A library holding Ana, Bob, Don Quijote and Lazarillo, with no loans.
pub fn stocked_library() -> anyhow::Result<Library> {
    let mut library = Library::new();
    library.insert_student(&ana())?;
    library.insert_student(&bob())?;
    library.insert_book(&quijote())?;
    library.insert_book(&lazarillo())?;
    Ok(library)
}
