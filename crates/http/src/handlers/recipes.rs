use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use std::sync::Arc;

use recipebook_core::RecipeWithIngredients;

use crate::AppState;
use crate::api_error::ApiError;
use crate::api_types::{CreateRecipeRequest, UpdateRecipeRequest};

pub async fn list_recipes(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<RecipeWithIngredients>>, ApiError> {
    Ok(Json(state.recipes.list().await?))
}

pub async fn create_recipe(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateRecipeRequest>,
) -> Result<(StatusCode, Json<RecipeWithIngredients>), ApiError> {
    let recipe =
        state.recipes.create(req.name.as_deref(), req.ingredients.as_deref()).await?;
    Ok((StatusCode::CREATED, Json(recipe)))
}

pub async fn update_recipe(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateRecipeRequest>,
) -> Result<Json<RecipeWithIngredients>, ApiError> {
    Ok(Json(state.recipes.update(id, req.name.as_deref(), req.ingredients.as_deref()).await?))
}

pub async fn delete_recipe(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.recipes.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
