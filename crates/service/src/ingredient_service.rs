//! CRUD over the flat ingredient reference list.

use std::sync::Arc;

use recipebook_core::Ingredient;
use recipebook_storage::Storage;

use crate::{ServiceError, non_blank};

pub struct IngredientService {
    storage: Arc<Storage>,
}

impl IngredientService {
    #[must_use]
    pub fn new(storage: Arc<Storage>) -> Self {
        Self { storage }
    }

    pub async fn list(&self) -> Result<Vec<Ingredient>, ServiceError> {
        Ok(self.storage.list_ingredients().await?)
    }

    /// Creates an ingredient from a raw request name; the trimmed value is
    /// what gets stored.
    pub async fn create(&self, name: Option<&str>) -> Result<Ingredient, ServiceError> {
        let name = non_blank(name)
            .ok_or_else(|| ServiceError::InvalidInput("Ingredient name is required".to_owned()))?;
        Ok(self.storage.insert_ingredient(name).await?)
    }

    /// Renames an ingredient. Existence is checked before the name is
    /// validated, so an unknown id reports not-found even with a bad name.
    pub async fn update(&self, id: i64, name: Option<&str>) -> Result<Ingredient, ServiceError> {
        if self.storage.get_ingredient(id).await?.is_none() {
            return Err(ServiceError::NotFound { entity: "Ingredient", id });
        }

        let name = non_blank(name)
            .ok_or_else(|| ServiceError::InvalidInput("Invalid ingredient name".to_owned()))?;
        Ok(self.storage.update_ingredient_name(id, name).await?)
    }

    /// Deletes an ingredient. Recipes are untouched: associations are by
    /// name, not by id.
    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        if self.storage.get_ingredient(id).await?.is_none() {
            return Err(ServiceError::NotFound { entity: "Ingredient", id });
        }
        Ok(self.storage.delete_ingredient(id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    async fn create_test_service() -> (IngredientService, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let storage = Storage::new(&temp_dir.path().join("test.db")).await.unwrap();
        (IngredientService::new(Arc::new(storage)), temp_dir)
    }

    #[tokio::test]
    async fn test_create_trims_name_before_storage() {
        let (service, _temp_dir) = create_test_service().await;

        let created = service.create(Some(" Salt ")).await.unwrap();
        assert_eq!(created.name, "Salt");
    }

    #[tokio::test]
    async fn test_create_rejects_missing_and_blank_names() {
        let (service, _temp_dir) = create_test_service().await;

        for bad in [None, Some(""), Some("   ")] {
            let err = service.create(bad).await.unwrap_err();
            assert!(matches!(
                err,
                ServiceError::InvalidInput(ref msg) if msg == "Ingredient name is required"
            ));
        }
    }

    #[tokio::test]
    async fn test_update_checks_existence_before_name() {
        let (service, _temp_dir) = create_test_service().await;

        // Unknown id wins over the bad name.
        assert!(service.update(999, Some("")).await.unwrap_err().is_not_found());

        let created = service.create(Some("Sugar")).await.unwrap();
        let err = service.update(created.id, Some("  ")).await.unwrap_err();
        assert!(matches!(
            err,
            ServiceError::InvalidInput(ref msg) if msg == "Invalid ingredient name"
        ));

        let renamed = service.update(created.id, Some(" Brown Sugar ")).await.unwrap();
        assert_eq!(renamed.name, "Brown Sugar");
    }

    #[tokio::test]
    async fn test_delete_unknown_ingredient_is_not_found() {
        let (service, _temp_dir) = create_test_service().await;

        assert!(service.delete(999).await.unwrap_err().is_not_found());

        let created = service.create(Some("Flour")).await.unwrap();
        service.delete(created.id).await.unwrap();
        assert!(service.list().await.unwrap().is_empty());
    }
}
