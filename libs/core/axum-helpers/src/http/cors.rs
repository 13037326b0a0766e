use axum::{
    extract::Request,
    http::{HeaderMap, HeaderValue, Method, StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::debug;

/// CORS interceptor wrapping every route.
///
/// Preflight `OPTIONS` requests short-circuit with an empty 200 carrying the
/// CORS header set and never reach the router. Every other response, errors
/// and fallbacks included, is decorated with the same headers on the way out.
///
/// `Access-Control-Allow-Origin` echoes the request's `Origin` header
/// verbatim, falling back to `*` when absent, so browser clients with
/// credentials are accepted from any origin.
///
/// # Example
/// ```ignore
/// use axum::{middleware, Router};
/// use axum_helpers::http::permissive_cors;
///
/// let app = Router::new().layer(middleware::from_fn(permissive_cors));
/// ```
pub async fn permissive_cors(request: Request, next: Next) -> Response {
    let origin = request.headers().get(header::ORIGIN).cloned();

    debug!(
        method = %request.method(),
        path = %request.uri().path(),
        origin = origin.as_ref().and_then(|o| o.to_str().ok()),
        "Handling cross-origin request"
    );

    if request.method() == Method::OPTIONS {
        let mut response = StatusCode::OK.into_response();
        apply_cors_headers(response.headers_mut(), origin.as_ref());
        return response;
    }

    let mut response = next.run(request).await;
    apply_cors_headers(response.headers_mut(), origin.as_ref());
    response
}

fn apply_cors_headers(headers: &mut HeaderMap, origin: Option<&HeaderValue>) {
    let allow_origin = origin
        .cloned()
        .unwrap_or_else(|| HeaderValue::from_static("*"));

    headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, allow_origin);
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, POST, PUT, DELETE, OPTIONS"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type, Authorization, X-Requested-With, Accept"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
        HeaderValue::from_static("true"),
    );
    headers.insert(header::ACCESS_CONTROL_MAX_AGE, HeaderValue::from_static("3600"));
    headers.insert(
        header::ACCESS_CONTROL_EXPOSE_HEADERS,
        HeaderValue::from_static("*"),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::Request as HttpRequest, middleware, routing::get};
    use tower::ServiceExt;

    async fn ping() -> &'static str {
        "pong"
    }

    fn app() -> Router {
        Router::new()
            .route("/ping", get(ping))
            .layer(middleware::from_fn(permissive_cors))
    }

    #[tokio::test]
    async fn test_echoes_request_origin() {
        let request = HttpRequest::builder()
            .method("GET")
            .uri("/ping")
            .header("Origin", "http://localhost:5173")
            .body(Body::empty())
            .unwrap();

        let response = app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "http://localhost:5173"
        );
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_CREDENTIALS],
            "true"
        );
        assert_eq!(response.headers()[header::ACCESS_CONTROL_MAX_AGE], "3600");
    }

    #[tokio::test]
    async fn test_wildcard_without_origin() {
        let request = HttpRequest::builder()
            .method("GET")
            .uri("/ping")
            .body(Body::empty())
            .unwrap();

        let response = app().oneshot(request).await.unwrap();

        assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_METHODS],
            "GET, POST, PUT, DELETE, OPTIONS"
        );
    }

    #[tokio::test]
    async fn test_options_short_circuits_before_routing() {
        // No /missing route exists; the interceptor must answer anyway.
        let request = HttpRequest::builder()
            .method("OPTIONS")
            .uri("/missing")
            .header("Origin", "https://example.com")
            .body(Body::empty())
            .unwrap();

        let response = app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "https://example.com"
        );
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_EXPOSE_HEADERS],
            "*"
        );
    }
}
