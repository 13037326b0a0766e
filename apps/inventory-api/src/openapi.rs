//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for all APIs
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Inventory API",
        version = "0.1.0",
        description = "REST API for tracking inventory items grouped by type",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    nest(
        (path = "/api/items", api = domain_inventory::ApiDoc)
    ),
    tags(
        (name = "Items", description = "Inventory item endpoints (PostgreSQL)")
    )
)]
pub struct ApiDoc;
