use std::fmt;

use crate::error::{LibraryError, Result};
use crate::records::{Record, normalize_text};

/// A title in the catalogue. There is no numeric id: title and author together
/// identify the book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    title: String,
    author: String,
    pages: u32,
}

/// Identity fields of a [`Book`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookKey<'a> {
    pub title: &'a str,
    pub author: &'a str,
}

impl fmt::Display for BookKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" by {}", self.title, self.author)
    }
}

impl Book {
    pub fn new(title: &str, author: &str, pages: u32) -> Result<Self> {
        let title = normalize_text(title);
        if title.is_empty() {
            return Err(LibraryError::invalid("a book's title cannot be blank"));
        }

        let author = normalize_text(author);
        if author.is_empty() {
            return Err(LibraryError::invalid("a book's author cannot be blank"));
        }

        if pages == 0 {
            return Err(LibraryError::invalid(format!("\"{title}\" must have at least one page")));
        }

        Ok(Self {
            title,
            author,
            pages,
        })
    }

    /// A book carrying only its identity, for lookups against a collection.
    pub fn probe(title: &str, author: &str) -> Result<Self> {
        Self::new(title, author, 1)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn pages(&self) -> u32 {
        self.pages
    }
}

impl Record for Book {
    const KIND: &'static str = "book";

    type Key<'a> = BookKey<'a>;

    fn key(&self) -> BookKey<'_> {
        BookKey {
            title: &self.title,
            author: &self.author,
        }
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {} pages", self.key(), self.pages)
    }
}
