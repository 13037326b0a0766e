//! Generic repository base over a SeaORM entity.
//!
//! Domain repositories wrap a [`BaseRepository`] for the common single-row
//! operations and fall back to `Entity::find()` queries for anything
//! filter-shaped.

use std::marker::PhantomData;

use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PrimaryKeyTrait,
};

/// Shared CRUD plumbing for a single SeaORM entity.
///
/// Holds the connection and exposes insert / find / update / delete keyed by
/// the entity's primary key. Clone is cheap; `DatabaseConnection` shares the
/// underlying pool.
#[derive(Clone)]
pub struct BaseRepository<E: EntityTrait> {
    db: DatabaseConnection,
    entity: PhantomData<E>,
}

impl<E: EntityTrait> BaseRepository<E> {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            entity: PhantomData,
        }
    }

    /// Access the underlying connection for custom queries.
    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Insert an active model and return the stored record.
    pub async fn insert<A>(&self, model: A) -> Result<E::Model, DbErr>
    where
        A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
        E::Model: IntoActiveModel<A>,
    {
        model.insert(&self.db).await
    }

    /// Fetch a record by primary key.
    pub async fn find_by_id(
        &self,
        id: <E::PrimaryKey as PrimaryKeyTrait>::ValueType,
    ) -> Result<Option<E::Model>, DbErr> {
        E::find_by_id(id).one(&self.db).await
    }

    /// Update an active model (primary key must be set) and return the
    /// stored record.
    pub async fn update<A>(&self, model: A) -> Result<E::Model, DbErr>
    where
        A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
        E::Model: IntoActiveModel<A>,
    {
        model.update(&self.db).await
    }

    /// Delete a record by primary key, returning the number of affected rows
    /// (0 when the key does not exist).
    pub async fn delete_by_id(
        &self,
        id: <E::PrimaryKey as PrimaryKeyTrait>::ValueType,
    ) -> Result<u64, DbErr> {
        let result = E::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected)
    }
}
