//! Recipe records and the duplicate-detection fingerprint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Named recipe owning a list of ingredient-name associations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx-types", derive(sqlx::FromRow))]
pub struct Recipe {
    /// Unique identifier (database-generated)
    pub id: i64,
    /// Display name, stored trimmed
    pub name: String,
    /// When this recipe was created
    pub created_at: DateTime<Utc>,
    /// When the name or ingredient set was last changed
    pub updated_at: DateTime<Utc>,
}

/// Recipe joined with its ingredient names, in stored insertion order.
///
/// This is the shape the API serves: recipe fields flattened to the top
/// level with an `ingredients` array alongside.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeWithIngredients {
    #[serde(flatten)]
    pub recipe: Recipe,
    pub ingredients: Vec<String>,
}

/// Canonical fingerprint of an ingredient list for duplicate detection.
///
/// Each entry is trimmed and lower-cased, then the whole list is sorted
/// lexicographically. Two recipes are duplicates when their fingerprints are
/// equal. Repeated entries are kept as-is: `["salt", "salt"]` does not
/// collapse to `["salt"]`, so a recipe listing an ingredient twice is
/// distinct from one listing it once.
#[must_use]
pub fn normalized_ingredient_set(entries: &[String]) -> Vec<String> {
    let mut normalized: Vec<String> = entries.iter().map(|e| e.trim().to_lowercase()).collect();
    normalized.sort_unstable();
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(entries: &[&str]) -> Vec<String> {
        normalized_ingredient_set(&entries.iter().map(|s| (*s).to_owned()).collect::<Vec<_>>())
    }

    #[test]
    fn test_fingerprint_ignores_case_order_and_whitespace() {
        assert_eq!(set(&["Water", "Tea Leaves"]), set(&["tea leaves", " WATER "]));
    }

    #[test]
    fn test_fingerprint_distinguishes_different_sets() {
        assert_ne!(set(&["water", "tea leaves"]), set(&["water", "mint"]));
        assert_ne!(set(&["water"]), set(&["water", "mint"]));
    }

    #[test]
    fn test_fingerprint_keeps_repeated_entries() {
        assert_ne!(set(&["salt", "salt"]), set(&["salt"]));
        assert_eq!(set(&["salt", "Salt"]), set(&["salt", "salt"]));
    }

    #[test]
    fn test_fingerprint_keeps_blank_entries() {
        // Blank entries normalize to "" and still participate in comparison;
        // they are only skipped at persistence time.
        assert_ne!(set(&["salt", "  "]), set(&["salt"]));
        assert_eq!(set(&["salt", ""]), set(&["  ", "salt"]));
    }
}
