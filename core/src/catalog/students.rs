use biblio_common::records::Student;

use crate::catalog::Registry;

/// Registered students, unique by email.
pub type Students = Registry<Student>;
