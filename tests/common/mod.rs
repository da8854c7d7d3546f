use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;
use ziyarat::router::init_router;
use ziyarat::state::AppState;
use ziyarat_config::{CorsConfig, RbacConfig, ServerConfig};

/// Build the application router with default configuration.
pub fn setup_test_app() -> axum::Router {
    let state = AppState {
        server_config: ServerConfig::default(),
        cors_config: CorsConfig::default(),
        rbac_config: RbacConfig {
            strict_coverage: true,
        },
    };
    init_router(state)
}

/// Issue a GET request and return the status with the parsed JSON body.
/// Non-JSON bodies come back as `Value::Null`.
#[allow(dead_code)]
pub async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, body)
}
