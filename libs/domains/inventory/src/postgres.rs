//! PostgreSQL implementation of ItemRepository

use async_trait::async_trait;
use database::BaseRepository;
use sea_orm::ActiveValue::Set;
use sea_orm::sea_query::{Expr, SimpleExpr, extension::postgres::PgExpr};
use sea_orm::{ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use tracing::instrument;

use crate::entity;
use crate::error::{ItemError, ItemResult};
use crate::models::{Item, ItemInput};
use crate::repository::ItemRepository;

/// PostgreSQL implementation of the ItemRepository
pub struct PgItemRepository {
    base: BaseRepository<entity::Entity>,
}

impl PgItemRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Case-insensitive substring match against one column. NULL columns
    /// never match, mirroring SQL LIKE semantics.
    fn contains_ci(column: entity::Column, pattern: &str) -> SimpleExpr {
        Expr::col((entity::Entity, column)).ilike(pattern)
    }
}

#[async_trait]
impl ItemRepository for PgItemRepository {
    #[instrument(skip(self))]
    async fn list_by_type(&self, item_type: &str) -> ItemResult<Vec<Item>> {
        let models = entity::Entity::find()
            .filter(entity::Column::ItemType.eq(item_type))
            .order_by_asc(entity::Column::Id)
            .all(self.base.db())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    #[instrument(skip(self))]
    async fn search(&self, item_type: &str, query: &str) -> ItemResult<Vec<Item>> {
        // %/_ in the query act as wildcards, as the original LIKE-based
        // search did. An empty query matches everything in the bucket.
        let pattern = format!("%{}%", query);

        let matches_query = Condition::any()
            .add(Self::contains_ci(entity::Column::Name, &pattern))
            .add(Self::contains_ci(entity::Column::Artist, &pattern))
            .add(Self::contains_ci(entity::Column::Category, &pattern))
            .add(Self::contains_ci(entity::Column::Location, &pattern));

        let models = entity::Entity::find()
            .filter(entity::Column::ItemType.eq(item_type))
            .filter(matches_query)
            .order_by_asc(entity::Column::Id)
            .all(self.base.db())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    #[instrument(skip(self, input))]
    async fn create(&self, input: ItemInput) -> ItemResult<Item> {
        // The conversion drops any caller-supplied id; the database assigns
        // the surrogate key.
        let active: entity::ActiveModel = input.into();
        let model = self.base.insert(active).await?;

        tracing::info!(item_id = model.id, "Created item");
        Ok(model.into())
    }

    #[instrument(skip(self, input))]
    async fn update(&self, id: i64, input: ItemInput) -> ItemResult<Item> {
        self.base
            .find_by_id(id)
            .await?
            .ok_or(ItemError::NotFound(id))?;

        // Full replacement: every mutable column is overwritten with the
        // payload's value, absent payload fields clear the column.
        let mut active: entity::ActiveModel = input.into();
        active.id = Set(id);

        let model = self.base.update(active).await?;

        tracing::info!(item_id = id, "Updated item");
        Ok(model.into())
    }

    #[instrument(skip(self))]
    async fn delete_by_id(&self, id: i64) -> ItemResult<()> {
        let rows_affected = self.base.delete_by_id(id).await?;

        if rows_affected == 0 {
            // Idempotent delete: a missing id is not an error
            tracing::debug!(item_id = id, "Delete of missing item ignored");
        } else {
            tracing::info!(item_id = id, "Deleted item");
        }

        Ok(())
    }
}
