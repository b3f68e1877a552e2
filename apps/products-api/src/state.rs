//! Application state management

use domain_products::InMemoryProductRepository;

/// Shared application state
///
/// Clones share the same catalog.
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub repository: InMemoryProductRepository,
}
