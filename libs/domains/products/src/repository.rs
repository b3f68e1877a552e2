use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::ProductResult;
use crate::models::{Product, ProductType};

/// Repository trait for Product persistence
///
/// Products are append-only: there is no update or delete, so insertion
/// order is also id order.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All products in insertion order
    async fn get_all(&self) -> ProductResult<Vec<Product>>;

    /// Append a product. The id is assigned by the caller.
    async fn add(&self, product: Product) -> ProductResult<()>;

    /// Number of stored products
    async fn count(&self) -> ProductResult<usize>;
}

/// In-memory implementation of ProductRepository
///
/// Clones share the same underlying list.
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<Vec<Product>>>,
}

impl InMemoryProductRepository {
    /// Empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog pre-loaded with the demo products the service ships with
    pub fn seeded() -> Self {
        Self::with_products(seed_products())
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: Arc::new(RwLock::new(products)),
        }
    }

    /// Drop every stored product
    pub async fn reset(&self) {
        self.products.write().await.clear();
        tracing::debug!("Catalog reset");
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn get_all(&self) -> ProductResult<Vec<Product>> {
        Ok(self.products.read().await.clone())
    }

    async fn add(&self, product: Product) -> ProductResult<()> {
        let mut products = self.products.write().await;
        tracing::info!(product_id = product.id, product_type = %product.product_type, "Stored product");
        products.push(product);
        Ok(())
    }

    async fn count(&self) -> ProductResult<usize> {
        Ok(self.products.read().await.len())
    }
}

fn seed_products() -> Vec<Product> {
    [
        ("Magical Wand", ProductType::Gadget, 2, 80.50),
        ("Flying broomstick", ProductType::Book, 20, 275.00),
        ("Book of magic spells", ProductType::Food, 30, 45.90),
    ]
    .into_iter()
    .zip(1..)
    .map(|((name, product_type, inventory, cost), id)| Product {
        id,
        name: name.to_string(),
        product_type,
        inventory,
        cost,
    })
    .collect()
}
