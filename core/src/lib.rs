//! # Biblio Core
//!
//! The record-keeping layer of `biblio`.
//!
//! * **[`catalog`]**: The per-record collections (students, books, loans).
//! * **[`library`]**: The service composing them and enforcing cross-collection rules.
//!
//! Everything here is synchronous and in-memory; the collections are expected
//! to hold tens to hundreds of records and are scanned linearly.

pub mod catalog;
pub mod library;

pub use library::Library;
