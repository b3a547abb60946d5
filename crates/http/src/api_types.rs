//! Request and response body types.
//!
//! Name/ingredient fields are `Option` so that a missing field flows through
//! the service-layer validation (and its 400 messages) instead of being
//! rejected by serde.

use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct CreateIngredientRequest {
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateIngredientRequest {
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateRecipeRequest {
    pub name: Option<String>,
    pub ingredients: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateRecipeRequest {
    pub name: Option<String>,
    pub ingredients: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
pub struct VersionResponse {
    pub version: &'static str,
}
