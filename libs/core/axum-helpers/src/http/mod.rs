//! HTTP middleware module.
//!
//! This module provides HTTP-level middleware for:
//! - CORS decoration (explicit interceptor, not a framework layer)
//! - Security headers
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::http::{permissive_cors, security_headers};
//!
//! let app = Router::new()
//!     .layer(axum::middleware::from_fn(security_headers))
//!     .layer(axum::middleware::from_fn(permissive_cors));
//! ```

pub mod cors;
pub mod security;

// Re-export commonly used functions
pub use cors::permissive_cors;
pub use security::security_headers;
