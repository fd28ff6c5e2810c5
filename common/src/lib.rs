//! # Biblio Common
//!
//! Types shared by every layer of `biblio`:
//!
//! * **[`records`]**: The domain records (students, books, loans) and their identity keys.
//! * **[`error`]**: The error taxonomy of the record layer.
//! * **[`config`]**: Runtime options chosen by the user.

pub mod config;
pub mod error;
pub mod records;

pub use error::{ErrorKind, LibraryError, Result};
