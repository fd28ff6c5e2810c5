use biblio_common::records::Book;

use crate::catalog::Registry;

/// The catalogue, unique by title and author.
pub type Books = Registry<Book>;
