//! Ingredient table operations.

use chrono::Utc;
use recipebook_core::Ingredient;

use super::Storage;
use crate::StorageError;

impl Storage {
    /// All ingredients, newest first.
    pub async fn list_ingredients(&self) -> Result<Vec<Ingredient>, StorageError> {
        let rows = sqlx::query_as::<_, Ingredient>(
            "SELECT id, name, created_at, updated_at
             FROM ingredients
             ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn get_ingredient(&self, id: i64) -> Result<Option<Ingredient>, StorageError> {
        let row = sqlx::query_as::<_, Ingredient>(
            "SELECT id, name, created_at, updated_at FROM ingredients WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    /// Inserts a new ingredient and returns the stored row.
    pub async fn insert_ingredient(&self, name: &str) -> Result<Ingredient, StorageError> {
        let now = Utc::now();
        let result = sqlx::query(
            "INSERT INTO ingredients (name, created_at, updated_at) VALUES (?1, ?2, ?3)",
        )
        .bind(name)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        self.get_ingredient(id).await?.ok_or(StorageError::NotFound { entity: "ingredient", id })
    }

    /// Renames an ingredient and refreshes its `updated_at`.
    pub async fn update_ingredient_name(
        &self,
        id: i64,
        name: &str,
    ) -> Result<Ingredient, StorageError> {
        let result =
            sqlx::query("UPDATE ingredients SET name = ?1, updated_at = ?2 WHERE id = ?3")
                .bind(name)
                .bind(Utc::now())
                .bind(id)
                .execute(&self.pool)
                .await?;
        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound { entity: "ingredient", id });
        }

        self.get_ingredient(id).await?.ok_or(StorageError::NotFound { entity: "ingredient", id })
    }

    pub async fn delete_ingredient(&self, id: i64) -> Result<(), StorageError> {
        let result =
            sqlx::query("DELETE FROM ingredients WHERE id = ?1").bind(id).execute(&self.pool).await?;
        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound { entity: "ingredient", id });
        }
        Ok(())
    }
}
