use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use std::sync::Arc;

use recipebook_core::Ingredient;

use crate::AppState;
use crate::api_error::ApiError;
use crate::api_types::{CreateIngredientRequest, UpdateIngredientRequest};

pub async fn list_ingredients(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Ingredient>>, ApiError> {
    Ok(Json(state.ingredients.list().await?))
}

pub async fn create_ingredient(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateIngredientRequest>,
) -> Result<(StatusCode, Json<Ingredient>), ApiError> {
    let ingredient = state.ingredients.create(req.name.as_deref()).await?;
    Ok((StatusCode::CREATED, Json(ingredient)))
}

pub async fn update_ingredient(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateIngredientRequest>,
) -> Result<Json<Ingredient>, ApiError> {
    Ok(Json(state.ingredients.update(id, req.name.as_deref()).await?))
}

pub async fn delete_ingredient(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.ingredients.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
