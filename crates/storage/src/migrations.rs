//! Database migrations

use sqlx::SqlitePool;

use crate::StorageError;

pub const SCHEMA_VERSION: i32 = 1;

pub async fn run_migrations(pool: &SqlitePool) -> Result<(), StorageError> {
    let current_version: i32 =
        sqlx::query_scalar("PRAGMA user_version").fetch_one(pool).await?;

    tracing::info!(
        "Database schema version: {} (target: {})",
        current_version,
        SCHEMA_VERSION
    );

    if current_version < 1 {
        tracing::info!("Running migration v1: initial schema");
        sqlx::raw_sql(
            r#"
            CREATE TABLE IF NOT EXISTS ingredients (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS recipes (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            );

            -- ingredient_name is free text, not a foreign key into the
            -- ingredients reference table.
            CREATE TABLE IF NOT EXISTS recipe_ingredients (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                recipe_id INTEGER NOT NULL REFERENCES recipes(id) ON DELETE CASCADE,
                ingredient_name TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_recipe_ingredients_recipe
                ON recipe_ingredients(recipe_id);

            PRAGMA user_version = 1;
            "#,
        )
        .execute(pool)
        .await
        .map_err(|e| StorageError::Migration(e.to_string()))?;
    }

    Ok(())
}
