//! CORS middleware configuration.

use axum::http::header::{ACCEPT, CONTENT_TYPE};
use axum::http::{HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};

/// Create a CORS layer from configuration.
///
/// With no configured origins (or none that parse) any origin is allowed.
pub fn create_cors_layer(origins: &[String]) -> CorsLayer {
    let methods = [Method::GET, Method::POST, Method::OPTIONS];

    let parsed_origins: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();

    if parsed_origins.is_empty() {
        if !origins.is_empty() {
            tracing::warn!("No valid CORS origins configured, allowing any origin");
        }
        CorsLayer::new()
            .allow_methods(methods)
            .allow_headers(Any)
            .allow_origin(Any)
    } else {
        CorsLayer::new()
            .allow_methods(methods)
            .allow_headers([CONTENT_TYPE, ACCEPT])
            .allow_credentials(true)
            .allow_origin(parsed_origins)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::header::{
        ACCESS_CONTROL_ALLOW_CREDENTIALS, ACCESS_CONTROL_ALLOW_METHODS,
        ACCESS_CONTROL_ALLOW_ORIGIN, ACCESS_CONTROL_REQUEST_METHOD, ORIGIN,
    };
    use axum::http::{Request, Response, StatusCode};
    use axum::routing::get;
    use axum::Router;
    use tower::ServiceExt;

    fn app(origins: &[&str]) -> Router {
        let origins: Vec<String> = origins.iter().map(|o| o.to_string()).collect();
        Router::new()
            .route("/boards/", get(|| async { "[]" }).post(|| async { "{}" }))
            .layer(create_cors_layer(&origins))
    }

    async fn get_with_origin(app: Router, origin: &str) -> Response<Body> {
        app.oneshot(
            Request::get("/boards/")
                .header(ORIGIN, origin)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
    }

    async fn preflight(app: Router, origin: &str) -> Response<Body> {
        app.oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/boards/")
                .header(ORIGIN, origin)
                .header(ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
    }

    fn allow_origin(response: &Response<Body>) -> Option<&str> {
        response
            .headers()
            .get(ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok())
    }

    #[tokio::test]
    async fn test_no_origins_allows_any() {
        let response = get_with_origin(app(&[]), "http://anywhere.example").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(allow_origin(&response), Some("*"));
        assert!(response
            .headers()
            .get(ACCESS_CONTROL_ALLOW_CREDENTIALS)
            .is_none());
    }

    #[tokio::test]
    async fn test_listed_origin_is_echoed() {
        let app = app(&["http://a.example", "http://b.example"]);
        let response = get_with_origin(app, "http://b.example").await;

        assert_eq!(allow_origin(&response), Some("http://b.example"));
        assert_eq!(
            response
                .headers()
                .get(ACCESS_CONTROL_ALLOW_CREDENTIALS)
                .unwrap(),
            "true"
        );
    }

    #[tokio::test]
    async fn test_unlisted_origin_gets_no_header() {
        let response = get_with_origin(app(&["http://a.example"]), "http://evil.example").await;

        assert_eq!(allow_origin(&response), None);
    }

    #[tokio::test]
    async fn test_invalid_origins_fall_back_to_any() {
        let response = get_with_origin(app(&["bad\norigin"]), "http://anywhere.example").await;

        assert_eq!(allow_origin(&response), Some("*"));
    }

    #[tokio::test]
    async fn test_preflight_allows_post() {
        let response = preflight(app(&[]), "http://anywhere.example").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(allow_origin(&response), Some("*"));
        let methods = response
            .headers()
            .get(ACCESS_CONTROL_ALLOW_METHODS)
            .unwrap()
            .to_str()
            .unwrap();
        assert!(methods.contains("POST"));
        assert!(methods.contains("GET"));
    }

    #[tokio::test]
    async fn test_preflight_listed_origin() {
        let response = preflight(app(&["http://a.example"]), "http://a.example").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(allow_origin(&response), Some("http://a.example"));

        let response = preflight(app(&["http://a.example"]), "http://evil.example").await;
        assert_eq!(allow_origin(&response), None);
    }
}
