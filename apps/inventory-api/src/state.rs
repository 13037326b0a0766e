//! Application state management.
//!
//! This module defines the shared application state passed to all request
//! handlers.

use database::postgres::DatabaseConnection;

/// Shared application state.
///
/// This struct is cloned for each handler (inexpensive: the connection shares
/// its underlying pool), providing access to:
/// - Application configuration
/// - PostgreSQL connection
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// PostgreSQL connection (cloneable, shares the underlying pool)
    pub db: DatabaseConnection,
}
