//! Item Service - orchestration layer

use std::sync::Arc;
use tracing::instrument;

use crate::error::ItemResult;
use crate::models::{Item, ItemInput};
use crate::repository::ItemRepository;

/// Item service translating external requests into store operations.
///
/// The layer is deliberately thin: no validation, no business rules. Its one
/// normalization is that `update` forces the path-supplied id onto the
/// payload, so a mismatched body id can never redirect a write to a
/// different record.
pub struct ItemService<R: ItemRepository> {
    repository: Arc<R>,
}

impl<R: ItemRepository> ItemService<R> {
    /// Create a new ItemService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List all items in a type bucket
    #[instrument(skip(self))]
    pub async fn find_by_type(&self, item_type: &str) -> ItemResult<Vec<Item>> {
        self.repository.list_by_type(item_type).await
    }

    /// Keyword search within a type bucket
    #[instrument(skip(self))]
    pub async fn search(&self, item_type: &str, query: &str) -> ItemResult<Vec<Item>> {
        self.repository.search(item_type, query).await
    }

    /// Persist a new item and return the stored record
    #[instrument(skip(self, input))]
    pub async fn save(&self, input: ItemInput) -> ItemResult<Item> {
        self.repository.create(input).await
    }

    /// Full-replacement update of the record at `id`
    #[instrument(skip(self, input))]
    pub async fn update(&self, id: i64, mut input: ItemInput) -> ItemResult<Item> {
        // The path id wins over whatever the body carries
        input.id = Some(id);
        self.repository.update(id, input).await
    }

    /// Delete the record at `id`; missing ids are a silent no-op
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> ItemResult<()> {
        self.repository.delete_by_id(id).await
    }
}

impl<R: ItemRepository> Clone for ItemService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Item;
    use crate::repository::MockItemRepository;

    fn item_from(id: i64, input: &ItemInput) -> Item {
        Item {
            id,
            item_type: input.item_type.clone(),
            name: input.name.clone(),
            artist: input.artist.clone(),
            year: input.year,
            category: input.category.clone(),
            quantity: input.quantity,
            location: input.location.clone(),
            notes: input.notes.clone(),
        }
    }

    #[tokio::test]
    async fn test_update_forces_path_id_onto_payload() {
        let mut repo = MockItemRepository::new();
        repo.expect_update()
            .withf(|id, input| *id == 7 && input.id == Some(7))
            .returning(|id, input| Ok(item_from(id, &input)));

        let service = ItemService::new(repo);

        // Body claims a different record; the path must win
        let input = ItemInput {
            id: Some(99),
            name: Some("Test Album".to_string()),
            ..Default::default()
        };

        let updated = service.update(7, input).await.unwrap();
        assert_eq!(updated.id, 7);
        assert_eq!(updated.name.as_deref(), Some("Test Album"));
    }

    #[tokio::test]
    async fn test_save_passes_through_to_create() {
        let mut repo = MockItemRepository::new();
        repo.expect_create()
            .withf(|input| input.item_type.as_deref() == Some("vinyl"))
            .returning(|input| Ok(item_from(1, &input)));

        let service = ItemService::new(repo);

        let input = ItemInput {
            item_type: Some("vinyl".to_string()),
            name: Some("Abbey Road".to_string()),
            ..Default::default()
        };

        let created = service.save(input).await.unwrap();
        assert_eq!(created.id, 1);
    }

    #[tokio::test]
    async fn test_delete_passes_through() {
        let mut repo = MockItemRepository::new();
        repo.expect_delete_by_id()
            .withf(|id| *id == 42)
            .returning(|_| Ok(()));

        let service = ItemService::new(repo);
        service.delete(42).await.unwrap();
    }
}
