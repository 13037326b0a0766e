//! Inventory Domain
//!
//! This module provides the item domain: a flat inventory record partitioned
//! by a free-text `type` bucket, persisted in PostgreSQL.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Orchestration, id normalization
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + Postgres implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entity, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_inventory::{ItemService, PgItemRepository, handlers};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let db = database::postgres::connect("postgresql://localhost/inventory").await?;
//!
//! let repository = PgItemRepository::new(db);
//! let service = ItemService::new(repository);
//!
//! // Create Axum router
//! let router = handlers::router(service);
//! # Ok(())
//! # }
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{ItemError, ItemResult};
pub use handlers::ApiDoc;
pub use models::{Item, ItemInput, SearchParams};
pub use postgres::PgItemRepository;
pub use repository::ItemRepository;
pub use service::ItemService;
