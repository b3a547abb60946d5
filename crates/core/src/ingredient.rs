//! Standalone ingredient records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Reference-list ingredient, independent of any recipe.
///
/// Recipes associate ingredient names as free text, so renaming or deleting
/// an `Ingredient` never touches existing recipes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx-types", derive(sqlx::FromRow))]
pub struct Ingredient {
    /// Unique identifier (database-generated)
    pub id: i64,
    /// Display name, stored trimmed
    pub name: String,
    /// When this ingredient was created
    pub created_at: DateTime<Utc>,
    /// When this ingredient was last renamed
    pub updated_at: DateTime<Utc>,
}
