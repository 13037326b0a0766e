use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use axum_helpers::{
    IdPath,
    errors::responses::{BadRequestIdResponse, InternalServerErrorResponse, NotFoundResponse},
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ItemResult;
use crate::models::{Item, ItemInput, SearchParams};
use crate::repository::ItemRepository;
use crate::service::ItemService;

/// OpenAPI documentation for the Items API
#[derive(OpenApi)]
#[openapi(
    paths(list_items, search_items, create_item, update_item, delete_item),
    components(
        schemas(Item, ItemInput, SearchParams),
        responses(NotFoundResponse, BadRequestIdResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = "Items", description = "Inventory item endpoints (PostgreSQL)")
    )
)]
pub struct ApiDoc;

/// Create the items router with all HTTP endpoints
///
/// The single `/{...}` segment doubles as the type bucket for GET and the
/// numeric id for PUT/DELETE, mirroring the external contract; axum requires
/// one registration for both.
pub fn router<R: ItemRepository + 'static>(service: ItemService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", post(create_item))
        .route(
            "/{type}",
            get(list_items).put(update_item).delete(delete_item),
        )
        .route("/{type}/search", get(search_items))
        .with_state(shared_service)
}

/// List all items in a type bucket
#[utoipa::path(
    get,
    path = "/{type}",
    tag = "Items",
    params(
        ("type" = String, Path, description = "Free-text type bucket, e.g. vinyl or bike")
    ),
    responses(
        (status = 200, description = "Items in the bucket (empty for unknown types)", body = Vec<Item>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_items<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    Path(item_type): Path<String>,
) -> ItemResult<Json<Vec<Item>>> {
    let items = service.find_by_type(&item_type).await?;
    Ok(Json(items))
}

/// Keyword search within a type bucket
#[utoipa::path(
    get,
    path = "/{type}/search",
    tag = "Items",
    params(
        ("type" = String, Path, description = "Free-text type bucket"),
        SearchParams
    ),
    responses(
        (status = 200, description = "Matching items", body = Vec<Item>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn search_items<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    Path(item_type): Path<String>,
    Query(params): Query<SearchParams>,
) -> ItemResult<Json<Vec<Item>>> {
    let items = service.search(&item_type, &params.q).await?;
    Ok(Json(items))
}

/// Create a new item
#[utoipa::path(
    post,
    path = "",
    tag = "Items",
    request_body = ItemInput,
    responses(
        (status = 200, description = "Stored item with its generated id", body = Item),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    Json(input): Json<ItemInput>,
) -> ItemResult<Json<Item>> {
    let item = service.save(input).await?;
    Ok(Json(item))
}

/// Full-replacement update of an item
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Items",
    params(
        ("id" = i64, Path, description = "Item id")
    ),
    request_body = ItemInput,
    responses(
        (status = 200, description = "Updated item", body = Item),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    IdPath(id): IdPath,
    Json(input): Json<ItemInput>,
) -> ItemResult<Json<Item>> {
    let item = service.update(id, input).await?;
    Ok(Json(item))
}

/// Delete an item
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Items",
    params(
        ("id" = i64, Path, description = "Item id")
    ),
    responses(
        (status = 204, description = "Item deleted (also returned for missing ids)"),
        (status = 400, response = BadRequestIdResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    IdPath(id): IdPath,
) -> ItemResult<impl IntoResponse> {
    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
