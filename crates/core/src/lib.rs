//! Core domain types for recipebook
//!
//! Ingredient and recipe records plus the ingredient-set fingerprint used
//! for duplicate-recipe detection.

#![allow(clippy::missing_docs_in_private_items, reason = "Internal crate")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::min_ident_chars, reason = "Short closure params are idiomatic")]
#![allow(clippy::exhaustive_structs, reason = "Domain types are stable")]

mod ingredient;
mod recipe;

pub use ingredient::Ingredient;
pub use recipe::{Recipe, RecipeWithIngredients, normalized_ingredient_set};
