pub mod ingredients;
pub mod recipes;
