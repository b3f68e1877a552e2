//! Products API routes

use axum::Router;
use domain_products::{handlers, ProductService};

use crate::state::AppState;

/// Create products router backed by the shared catalog
pub fn router(state: &AppState) -> Router {
    let service = ProductService::new(state.repository.clone());
    handlers::router(service)
}
