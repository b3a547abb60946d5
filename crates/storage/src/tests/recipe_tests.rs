use super::{create_test_storage, names};
use crate::StorageError;

#[tokio::test]
async fn test_create_recipe_stores_ingredients_in_order() {
    let (storage, _temp_dir) = create_test_storage().await;

    let created =
        storage.create_recipe("Tea", &names(&["Water", "Tea Leaves"])).await.unwrap();

    assert_eq!(created.recipe.name, "Tea");
    assert_eq!(created.ingredients, vec!["Water", "Tea Leaves"]);

    let fetched =
        storage.get_recipe_with_ingredients(created.recipe.id).await.unwrap().unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_list_recipes_newest_first_with_ingredients() {
    let (storage, _temp_dir) = create_test_storage().await;

    let tea = storage.create_recipe("Tea", &names(&["Water", "Tea Leaves"])).await.unwrap();
    let toast = storage.create_recipe("Toast", &names(&["Bread", "Butter"])).await.unwrap();

    let listed = storage.list_recipes().await.unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].recipe.id, toast.recipe.id);
    assert_eq!(listed[0].ingredients, vec!["Bread", "Butter"]);
    assert_eq!(listed[1].recipe.id, tea.recipe.id);
    assert_eq!(listed[1].ingredients, vec!["Water", "Tea Leaves"]);
}

#[tokio::test]
async fn test_update_recipe_replaces_ingredient_set() {
    let (storage, _temp_dir) = create_test_storage().await;

    let created = storage.create_recipe("Soup", &names(&["a", "b"])).await.unwrap();
    let id = created.recipe.id;

    let updated = storage.update_recipe(id, None, Some(&names(&["c"]))).await.unwrap();
    assert_eq!(updated.ingredients, vec!["c"]);
    assert_eq!(updated.recipe.name, "Soup");

    let fetched = storage.get_recipe_with_ingredients(id).await.unwrap().unwrap();
    assert_eq!(fetched.ingredients, vec!["c"]);
}

#[tokio::test]
async fn test_update_recipe_name_only_keeps_ingredients() {
    let (storage, _temp_dir) = create_test_storage().await;

    let created = storage.create_recipe("Tea", &names(&["Water"])).await.unwrap();
    let updated =
        storage.update_recipe(created.recipe.id, Some("Green Tea"), None).await.unwrap();

    assert_eq!(updated.recipe.name, "Green Tea");
    assert_eq!(updated.ingredients, vec!["Water"]);
    assert!(updated.recipe.updated_at >= created.recipe.updated_at);
}

#[tokio::test]
async fn test_update_with_no_fields_is_a_plain_fetch() {
    let (storage, _temp_dir) = create_test_storage().await;

    let created = storage.create_recipe("Tea", &names(&["Water"])).await.unwrap();
    let untouched = storage.update_recipe(created.recipe.id, None, None).await.unwrap();

    assert_eq!(untouched, created);
}

#[tokio::test]
async fn test_delete_recipe_cascades_to_associations() {
    let (storage, _temp_dir) = create_test_storage().await;

    let created = storage.create_recipe("Tea", &names(&["Water", "Tea Leaves"])).await.unwrap();
    let id = created.recipe.id;
    assert_eq!(storage.count_association_rows(id).await.unwrap(), 2);

    storage.delete_recipe(id).await.unwrap();

    assert!(storage.get_recipe(id).await.unwrap().is_none());
    assert_eq!(storage.count_association_rows(id).await.unwrap(), 0);
}

#[tokio::test]
async fn test_delete_missing_recipe_is_not_found() {
    let (storage, _temp_dir) = create_test_storage().await;

    let err = storage.delete_recipe(999).await.unwrap_err();
    assert!(matches!(err, StorageError::NotFound { entity: "recipe", id: 999 }));
}

#[tokio::test]
async fn test_recipe_allows_empty_set_after_replacement() {
    // Non-emptiness is a creation-time rule enforced by the service layer;
    // storage accepts a full replacement down to zero rows.
    let (storage, _temp_dir) = create_test_storage().await;

    let created = storage.create_recipe("Soup", &names(&["a"])).await.unwrap();
    let updated =
        storage.update_recipe(created.recipe.id, None, Some(&[])).await.unwrap();

    assert!(updated.ingredients.is_empty());
}
