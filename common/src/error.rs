//! # Library Errors
//!
//! Every failure in the record layer is a [`LibraryError`] tagged with an
//! [`ErrorKind`]. Failures are synchronous and leave the collections untouched.

use std::fmt;
use thiserror::Error;

/// What went wrong, independent of the record involved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Insert attempted on an identity that is already stored.
    DuplicateKey,
    /// Delete / return targeted a record that is not stored.
    NotFound,
    /// A loan referenced a student or book unknown to its collection.
    RelatedRecordNotFound,
    /// A record could not be built from the given fields.
    InvalidRecord,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::DuplicateKey => "duplicate_key",
            ErrorKind::NotFound => "not_found",
            ErrorKind::RelatedRecordNotFound => "related_record_not_found",
            ErrorKind::InvalidRecord => "invalid_record",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("[{kind}] {message}")]
pub struct LibraryError {
    pub kind: ErrorKind,
    pub message: String,
}

impl LibraryError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn duplicate_key(kind: &str, key: impl fmt::Display) -> Self {
        Self::new(ErrorKind::DuplicateKey, format!("{kind} {key} already exists"))
    }

    pub fn not_found(kind: &str, key: impl fmt::Display) -> Self {
        Self::new(ErrorKind::NotFound, format!("{kind} {key} does not exist"))
    }

    pub fn related_not_found(kind: &str, key: impl fmt::Display) -> Self {
        Self::new(
            ErrorKind::RelatedRecordNotFound,
            format!("the loan's {kind} {key} is not registered"),
        )
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidRecord, message)
    }
}

pub type Result<T> = std::result::Result<T, LibraryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LibraryError::duplicate_key("student", "`ana@example.com`");
        assert_eq!(
            err.to_string(),
            "[duplicate_key] student `ana@example.com` already exists"
        );
    }

    #[test]
    fn test_constructors_set_kind() {
        assert_eq!(LibraryError::not_found("book", "x").kind, ErrorKind::NotFound);
        assert_eq!(
            LibraryError::related_not_found("book", "x").kind,
            ErrorKind::RelatedRecordNotFound
        );
        assert_eq!(LibraryError::invalid("bad").kind, ErrorKind::InvalidRecord);
    }

    #[test]
    fn test_result_propagation() {
        fn inner() -> Result<()> {
            Err(LibraryError::not_found("loan", "x"))
        }

        fn outer() -> Result<()> {
            inner()?;
            Ok(())
        }

        let err = outer().unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
        assert!(err.message.contains("loan"));
    }
}
