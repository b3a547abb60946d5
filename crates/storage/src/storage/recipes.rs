//! Recipe and association table operations.
//!
//! A recipe and its `recipe_ingredients` rows always change together:
//! creation inserts both in one transaction, ingredient replacement is
//! delete-all-then-insert in one transaction, and deletion cascades through
//! the foreign key.

use std::collections::HashMap;

use chrono::Utc;
use recipebook_core::{Recipe, RecipeWithIngredients};
use sqlx::{Sqlite, Transaction};

use super::Storage;
use crate::StorageError;

impl Storage {
    /// All recipes, newest first, each joined with its ingredient names in
    /// stored insertion order.
    pub async fn list_recipes(&self) -> Result<Vec<RecipeWithIngredients>, StorageError> {
        let recipes = sqlx::query_as::<_, Recipe>(
            "SELECT id, name, created_at, updated_at
             FROM recipes
             ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        let rows: Vec<(i64, String)> = sqlx::query_as(
            "SELECT recipe_id, ingredient_name FROM recipe_ingredients ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        let mut by_recipe: HashMap<i64, Vec<String>> = HashMap::new();
        for (recipe_id, name) in rows {
            by_recipe.entry(recipe_id).or_default().push(name);
        }

        Ok(recipes
            .into_iter()
            .map(|recipe| {
                let ingredients = by_recipe.remove(&recipe.id).unwrap_or_default();
                RecipeWithIngredients { recipe, ingredients }
            })
            .collect())
    }

    pub async fn get_recipe(&self, id: i64) -> Result<Option<Recipe>, StorageError> {
        let row = sqlx::query_as::<_, Recipe>(
            "SELECT id, name, created_at, updated_at FROM recipes WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn get_recipe_with_ingredients(
        &self,
        id: i64,
    ) -> Result<Option<RecipeWithIngredients>, StorageError> {
        let Some(recipe) = self.get_recipe(id).await? else {
            return Ok(None);
        };

        let names: Vec<(String,)> = sqlx::query_as(
            "SELECT ingredient_name FROM recipe_ingredients WHERE recipe_id = ?1 ORDER BY id",
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        Ok(Some(RecipeWithIngredients {
            recipe,
            ingredients: names.into_iter().map(|(n,)| n).collect(),
        }))
    }

    /// Inserts the recipe and its ingredient rows as one transaction, then
    /// returns the stored state. Entries are persisted verbatim in the
    /// order given.
    pub async fn create_recipe(
        &self,
        name: &str,
        ingredients: &[String],
    ) -> Result<RecipeWithIngredients, StorageError> {
        let mut tx = self.pool.begin().await?;

        let now = Utc::now();
        let result =
            sqlx::query("INSERT INTO recipes (name, created_at, updated_at) VALUES (?1, ?2, ?3)")
                .bind(name)
                .bind(now)
                .bind(now)
                .execute(&mut *tx)
                .await?;
        let id = result.last_insert_rowid();

        insert_association_rows(&mut tx, id, ingredients).await?;
        tx.commit().await?;

        self.get_recipe_with_ingredients(id)
            .await?
            .ok_or(StorageError::NotFound { entity: "recipe", id })
    }

    /// Applies a rename and/or a full ingredient replacement in one
    /// transaction. `updated_at` is refreshed whenever either field is
    /// present. Returns the current enriched state.
    pub async fn update_recipe(
        &self,
        id: i64,
        name: Option<&str>,
        ingredients: Option<&[String]>,
    ) -> Result<RecipeWithIngredients, StorageError> {
        if name.is_some() || ingredients.is_some() {
            let mut tx = self.pool.begin().await?;

            if let Some(name) = name {
                sqlx::query("UPDATE recipes SET name = ?1 WHERE id = ?2")
                    .bind(name)
                    .bind(id)
                    .execute(&mut *tx)
                    .await?;
            }

            if let Some(entries) = ingredients {
                sqlx::query("DELETE FROM recipe_ingredients WHERE recipe_id = ?1")
                    .bind(id)
                    .execute(&mut *tx)
                    .await?;
                insert_association_rows(&mut tx, id, entries).await?;
            }

            sqlx::query("UPDATE recipes SET updated_at = ?1 WHERE id = ?2")
                .bind(Utc::now())
                .bind(id)
                .execute(&mut *tx)
                .await?;

            tx.commit().await?;
        }

        self.get_recipe_with_ingredients(id)
            .await?
            .ok_or(StorageError::NotFound { entity: "recipe", id })
    }

    /// Deletes the recipe; its association rows go with it via the
    /// `ON DELETE CASCADE` foreign key.
    pub async fn delete_recipe(&self, id: i64) -> Result<(), StorageError> {
        let result =
            sqlx::query("DELETE FROM recipes WHERE id = ?1").bind(id).execute(&self.pool).await?;
        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound { entity: "recipe", id });
        }
        Ok(())
    }

    /// Count of association rows for a recipe, alive or orphaned. Used by
    /// tests to verify the cascade.
    pub async fn count_association_rows(&self, recipe_id: i64) -> Result<i64, StorageError> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM recipe_ingredients WHERE recipe_id = ?1")
                .bind(recipe_id)
                .fetch_one(&self.pool)
                .await?;
        Ok(count)
    }
}

async fn insert_association_rows(
    tx: &mut Transaction<'_, Sqlite>,
    recipe_id: i64,
    ingredients: &[String],
) -> Result<(), StorageError> {
    for ingredient in ingredients {
        sqlx::query("INSERT INTO recipe_ingredients (recipe_id, ingredient_name) VALUES (?1, ?2)")
            .bind(recipe_id)
            .bind(ingredient)
            .execute(&mut **tx)
            .await?;
    }
    Ok(())
}
