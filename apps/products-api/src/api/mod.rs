//! API routes module

pub mod health;
pub mod products;

use axum::Router;

use crate::state::AppState;

/// Create all API routes
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .nest("/products", products::router(state))
        .merge(health::router(state.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::openapi::ApiDoc;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum_helpers::{create_permissive_cors_layer, create_router, health_router};
    use domain_products::InMemoryProductRepository;
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app(repository: InMemoryProductRepository) -> Router {
        let config = temp_env::with_vars_unset(
            ["APP_ENV", "HOST", "PORT", "CATALOG_SEED", "SHUTDOWN_TIMEOUT_SECS"],
            || Config::from_env().unwrap(),
        );
        let state = AppState {
            config: config.clone(),
            repository,
        };

        create_router::<ApiDoc>(routes(&state), create_permissive_cors_layer())
            .merge(health_router(config.app))
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_products_are_served_at_root_path() {
        let (status, body) = send(app(InMemoryProductRepository::seeded()), get("/products")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().map(Vec::len), Some(3));
    }

    #[tokio::test]
    async fn test_create_then_filter_through_full_stack() {
        let app = app(InMemoryProductRepository::new());

        let create = Request::builder()
            .method("POST")
            .uri("/products")
            .header("content-type", "application/json")
            .body(Body::from(
                json!({"name": "Quill", "type": "book", "inventory": 5, "cost": 9.99}).to_string(),
            ))
            .unwrap();
        let (status, body) = send(app.clone(), create).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body, json!({"id": 1}));

        let (status, body) = send(app, get("/products?type=book")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0]["name"], "Quill");
    }

    #[tokio::test]
    async fn test_unknown_route_uses_error_envelope() {
        let (status, body) = send(app(InMemoryProductRepository::new()), get("/nope")).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["status"], 404);
        assert_eq!(body["error"], "Not Found");
        assert_eq!(body["path"], "/nope");
    }

    #[tokio::test]
    async fn test_health_and_ready() {
        let (status, body) = send(app(InMemoryProductRepository::new()), get("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["name"], "products_api");

        let (status, body) = send(app(InMemoryProductRepository::new()), get("/ready")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": "ready", "catalog": "connected"}));
    }

    #[tokio::test]
    async fn test_openapi_document_lists_products_path() {
        let (status, body) = send(
            app(InMemoryProductRepository::new()),
            get("/api-docs/openapi.json"),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(body["paths"]["/products"]["get"].is_object());
        assert!(body["paths"]["/products"]["post"].is_object());
    }
}
