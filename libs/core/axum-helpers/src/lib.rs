//! # Axum Helpers
//!
//! A collection of utilities, middleware, and helpers for building Axum web
//! applications.
//!
//! ## Modules
//!
//! - **[`errors`]**: Structured error responses with error codes
//! - **[`extractors`]**: Custom extractors (numeric id path)
//! - **[`http`]**: HTTP middleware (CORS interceptor, security headers)
//! - **[`server`]**: Server setup, health checks, graceful shutdown
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::server::{create_app, create_router, health_router};
//! use core_config::{app_info, server::ServerConfig};
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths())]
//! struct ApiDoc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api_routes = Router::new(); // Add your routes
//!     let router = create_router::<ApiDoc>(api_routes);
//!     let app = router.merge(health_router(app_info!()));
//!
//!     create_app(app, &ServerConfig::default()).await?;
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

// Re-export error types
pub use errors::{AppError, ErrorCode, ErrorResponse};

// Re-export extractors
pub use extractors::IdPath;

// Re-export HTTP middleware
pub use http::{permissive_cors, security_headers};

// Re-export server types
pub use server::{
    HealthCheckFuture, HealthResponse, ShutdownCoordinator, create_app, create_production_app,
    create_router, health_router, run_health_checks, shutdown_signal,
};
