//! HTTP API server for recipebook.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(unreachable_pub, reason = "pub items are re-exported")]
#![allow(clippy::missing_docs_in_private_items, reason = "Internal crate")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::min_ident_chars, reason = "Short closure params are idiomatic")]
#![allow(clippy::exhaustive_structs, reason = "HTTP types are stable")]

pub mod api_error;
mod api_types;
mod handlers;

use std::sync::Arc;

use axum::{
    Json, Router,
    routing::{get, put},
};
use tower_http::cors::CorsLayer;

use recipebook_service::{IngredientService, RecipeService};

pub use api_types::VersionResponse;

/// Shared application state for all HTTP handlers.
///
/// Holds the two services (which share one storage pool underneath).
/// Wrapped in `Arc` for thread-safe sharing across handlers.
pub struct AppState {
    /// CRUD over the flat ingredient reference list
    pub ingredients: IngredientService,
    /// CRUD over the recipe catalog, with duplicate detection
    pub recipes: RecipeService,
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/version", get(version))
        .route(
            "/api/ingredients",
            get(handlers::ingredients::list_ingredients)
                .post(handlers::ingredients::create_ingredient),
        )
        .route(
            "/api/ingredients/{id}",
            put(handlers::ingredients::update_ingredient)
                .delete(handlers::ingredients::delete_ingredient),
        )
        .route(
            "/api/recipes",
            get(handlers::recipes::list_recipes).post(handlers::recipes::create_recipe),
        )
        .route(
            "/api/recipes/{id}",
            put(handlers::recipes::update_recipe).delete(handlers::recipes::delete_recipe),
        )
        // The API serves a browser frontend from another origin.
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse { version: env!("CARGO_PKG_VERSION") })
}
