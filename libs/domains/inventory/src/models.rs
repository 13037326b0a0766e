use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Item entity - one inventory unit, stored in the `items` table.
///
/// The schema is flat on purpose: `type` is a free-text partition bucket
/// ("vinyl", "bike", ...), not a closed enumeration, and fields that do not
/// apply to a given kind of item are simply left unset. Nothing ties fields
/// together; a "vinyl" record with a `quantity` is legal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Item {
    /// Unique identifier, assigned by the store on first persist
    pub id: i64,
    /// Free-text type bucket used as the query partition key
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub item_type: Option<String>,
    /// Item name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Artist, meaningful for media-type items
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    /// Release year, meaningful for media-type items
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    /// Category, meaningful for goods-type items
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Quantity on hand, meaningful for goods-type items
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i32>,
    /// Storage location
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Free-form notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Incoming item payload for create and update.
///
/// Every field is individually optional and defaulted, so any JSON object
/// shape deserializes; absent keys mean unset. The `id` is carried only so
/// the service can normalize it - the store ignores it on create and the
/// path id always wins on update.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct ItemInput {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default, rename = "type")]
    pub item_type: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub artist: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub quantity: Option<i32>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Query parameters for keyword search within a type bucket.
#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams)]
pub struct SearchParams {
    /// Case-insensitive substring matched against name, artist, category and
    /// location. Empty matches everything in the bucket.
    #[serde(default)]
    pub q: String,
}
