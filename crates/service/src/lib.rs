//! Service layer for recipebook
//!
//! Centralizes business logic between the HTTP handlers and storage:
//! input validation, existence checks, blank-entry skipping, and the
//! duplicate-recipe scan.

#![allow(clippy::missing_docs_in_private_items, reason = "Internal crate")]
#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::min_ident_chars, reason = "Short error vars are idiomatic")]

mod error;
mod ingredient_service;
mod recipe_service;

pub use error::ServiceError;
pub use ingredient_service::IngredientService;
pub use recipe_service::RecipeService;

/// Trims an optional value, treating missing and blank-after-trim alike.
pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
