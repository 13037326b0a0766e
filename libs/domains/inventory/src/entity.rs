use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::models::{Item, ItemInput};

/// Sea-ORM Entity for the items table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "type")]
    pub item_type: Option<String>,
    pub name: Option<String>,
    pub artist: Option<String>,
    pub year: Option<i32>,
    pub category: Option<String>,
    pub quantity: Option<i32>,
    pub location: Option<String>,
    pub notes: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// Conversion from Sea-ORM Model to domain Item
impl From<Model> for Item {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            item_type: model.item_type,
            name: model.name,
            artist: model.artist,
            year: model.year,
            category: model.category,
            quantity: model.quantity,
            location: model.location,
            notes: model.notes,
        }
    }
}

// Conversion from an incoming payload to an ActiveModel ready for insert.
// The id is left unset so the database assigns it; callers that update
// overwrite it with the path id afterwards.
impl From<ItemInput> for ActiveModel {
    fn from(input: ItemInput) -> Self {
        ActiveModel {
            id: NotSet,
            item_type: Set(input.item_type),
            name: Set(input.name),
            artist: Set(input.artist),
            year: Set(input.year),
            category: Set(input.category),
            quantity: Set(input.quantity),
            location: Set(input.location),
            notes: Set(input.notes),
        }
    }
}
