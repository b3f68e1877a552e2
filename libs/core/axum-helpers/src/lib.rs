//! # Axum Helpers
//!
//! Shared building blocks for the catalog's Axum services.
//!
//! ## Modules
//!
//! - **[`errors`]**: The `{timestamp, status, error, path}` error envelope
//! - **[`extractors`]**: JSON extractor that validates and reports the request path
//! - **[`http`]**: HTTP middleware (CORS, security headers)
//! - **[`server`]**: Router assembly, health checks, graceful shutdown
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::{cors_layer_from_env, create_production_app, create_router};
//! use core_config::{server::ServerConfig, Environment};
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths())]
//! struct ApiDoc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let cors = cors_layer_from_env(&Environment::from_env())?;
//!     let router = create_router::<ApiDoc>(Router::new(), cors);
//!
//!     let config = ServerConfig::default();
//!     create_production_app(router, &config, std::time::Duration::from_secs(30), async {}).await?;
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

// Re-export server types
pub use server::{
    HealthCheckFuture, HealthResponse, ShutdownCoordinator, create_production_app,
    create_router, health_router, run_health_checks, shutdown_signal,
};

// Re-export HTTP middleware
pub use http::{
    cors_layer_from_env, create_cors_layer, create_permissive_cors_layer, security_headers,
};

// Re-export error types
pub use errors::{ApiError, ErrorResponseBody, request_path};

// Re-export extractors
pub use extractors::ValidatedJson;
