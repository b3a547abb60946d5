//! CRUD over the recipe catalog, including duplicate detection.

use std::sync::Arc;

use recipebook_core::{RecipeWithIngredients, normalized_ingredient_set};
use recipebook_storage::Storage;

use crate::{ServiceError, non_blank};

pub struct RecipeService {
    storage: Arc<Storage>,
}

impl RecipeService {
    #[must_use]
    pub fn new(storage: Arc<Storage>) -> Self {
        Self { storage }
    }

    pub async fn list(&self) -> Result<Vec<RecipeWithIngredients>, ServiceError> {
        Ok(self.storage.list_recipes().await?)
    }

    /// Creates a recipe with its ingredient associations.
    ///
    /// Validation runs before any mutation: the name must be non-blank and
    /// at least one ingredient entry must be present. The duplicate scan
    /// fingerprints the RAW entry list (blank entries normalize to "" and
    /// participate in comparison), while persistence stores only the
    /// trimmed non-blank entries, in request order.
    pub async fn create(
        &self,
        name: Option<&str>,
        ingredients: Option<&[String]>,
    ) -> Result<RecipeWithIngredients, ServiceError> {
        let name = non_blank(name)
            .ok_or_else(|| ServiceError::InvalidInput("Recipe name is required".to_owned()))?;
        let entries = ingredients.filter(|list| !list.is_empty()).ok_or_else(|| {
            ServiceError::InvalidInput("At least one ingredient is required".to_owned())
        })?;

        self.check_duplicate(entries).await?;

        let cleaned = cleaned_entries(entries);
        Ok(self.storage.create_recipe(name, &cleaned).await?)
    }

    /// Renames and/or replaces the ingredient set of an existing recipe.
    ///
    /// Existence is checked first, then the name (when supplied). An
    /// ingredient replacement swaps the entire association set and does NOT
    /// re-run the duplicate scan.
    pub async fn update(
        &self,
        id: i64,
        name: Option<&str>,
        ingredients: Option<&[String]>,
    ) -> Result<RecipeWithIngredients, ServiceError> {
        if self.storage.get_recipe(id).await?.is_none() {
            return Err(ServiceError::NotFound { entity: "Recipe", id });
        }

        let name = match name {
            Some(n) => Some(
                non_blank(Some(n))
                    .ok_or_else(|| ServiceError::InvalidInput("Invalid recipe name".to_owned()))?,
            ),
            None => None,
        };
        let cleaned = ingredients.map(cleaned_entries);

        Ok(self.storage.update_recipe(id, name, cleaned.as_deref()).await?)
    }

    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        if self.storage.get_recipe(id).await?.is_none() {
            return Err(ServiceError::NotFound { entity: "Recipe", id });
        }
        Ok(self.storage.delete_recipe(id).await?)
    }

    /// Rejects the candidate when any existing recipe has the same
    /// normalized ingredient fingerprint. Linear scan over the catalog.
    async fn check_duplicate(&self, entries: &[String]) -> Result<(), ServiceError> {
        let candidate = normalized_ingredient_set(entries);
        for existing in self.storage.list_recipes().await? {
            if normalized_ingredient_set(&existing.ingredients) == candidate {
                tracing::debug!(
                    recipe_id = existing.recipe.id,
                    "candidate ingredient set matches existing recipe"
                );
                return Err(ServiceError::Duplicate(
                    "A recipe with these ingredients already exists".to_owned(),
                ));
            }
        }
        Ok(())
    }
}

/// Trims every entry and drops the blank ones, preserving order.
fn cleaned_entries(entries: &[String]) -> Vec<String> {
    entries.iter().map(|e| e.trim()).filter(|e| !e.is_empty()).map(str::to_owned).collect()
}
