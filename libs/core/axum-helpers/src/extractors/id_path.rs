//! Numeric id path parameter extractor with automatic validation.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
    response::{IntoResponse, Response},
};

/// Extractor for numeric id path parameters.
///
/// Automatically parses an `i64` from the path parameter, returning a proper
/// 400 error response if the segment is not a number.
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum::routing::get;
/// use axum_helpers::extractors::IdPath;
///
/// async fn get_item(IdPath(id): IdPath) -> String {
///     format!("Item id: {}", id)
/// }
///
/// let app = Router::new().route("/items/{id}", get(get_item));
/// ```
pub struct IdPath(pub i64);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| e.into_response())?;

        match raw.parse::<i64>() {
            Ok(id) => Ok(IdPath(id)),
            Err(_) => Err(AppError::BadRequest(format!("Invalid item id: {}", raw)).into_response()),
        }
    }
}
