use async_trait::async_trait;

use crate::error::ItemResult;
use crate::models::{Item, ItemInput};

/// Repository trait for Item persistence
///
/// This trait defines the data access interface for items. Implementations
/// can use different storage backends (PostgreSQL, etc.); the service takes
/// an implementation by injection rather than reaching for a global store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// List all items whose type bucket matches exactly.
    ///
    /// Unknown types yield an empty list, never an error.
    async fn list_by_type(&self, item_type: &str) -> ItemResult<Vec<Item>>;

    /// Keyword search within a type bucket.
    ///
    /// Matches items where `query` is a case-insensitive substring of any of
    /// name, artist, category or location.
    async fn search(&self, item_type: &str, query: &str) -> ItemResult<Vec<Item>>;

    /// Persist a new item, ignoring any caller-supplied id, and return the
    /// stored record with its generated id.
    async fn create(&self, input: ItemInput) -> ItemResult<Item>;

    /// Replace all mutable fields of the record at `id` with the payload's
    /// values. Fails with NotFound if `id` does not exist.
    async fn update(&self, id: i64, input: ItemInput) -> ItemResult<Item>;

    /// Remove the record at `id`. Deleting a missing id is a no-op.
    async fn delete_by_id(&self, id: i64) -> ItemResult<()>;
}
