//! Storage layer for recipebook
//!
//! SQLite-backed persistence for ingredients, recipes, and their
//! ingredient-name associations, built on an async sqlx pool with an
//! explicit open/close lifecycle.

#![allow(clippy::missing_docs_in_private_items, reason = "Internal crate")]
#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::min_ident_chars, reason = "Short closure params are idiomatic")]

mod error;
mod migrations;
mod storage;
#[cfg(test)]
mod tests;

pub use error::StorageError;
pub use storage::Storage;
