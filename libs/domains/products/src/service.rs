//! Product Service - Business logic layer

use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::instrument;
use validator::Validate;

use crate::error::{ProductError, ProductResult};
use crate::models::{Product, ProductId, ProductRequest, ProductType};
use crate::repository::ProductRepository;

/// Product service providing the catalog operations
///
/// Creation holds a service-wide lock from reading the product count until
/// the new product is stored, so concurrent creates get distinct ids.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
    create_lock: Arc<Mutex<()>>,
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new ProductService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
            create_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// List products, optionally restricted to one type tag
    ///
    /// - no tag: every product
    /// - unknown tag: [`ProductError::InvalidType`]
    /// - known tag, nothing matches: [`ProductError::NoProductsOfType`]
    #[instrument(skip(self))]
    pub async fn list_products(&self, product_type: Option<&str>) -> ProductResult<Vec<Product>> {
        let products = self.repository.get_all().await?;

        let Some(tag) = product_type else {
            return Ok(products);
        };

        let product_type =
            ProductType::from_tag(tag).ok_or_else(|| ProductError::InvalidType(tag.to_string()))?;

        let matching: Vec<Product> = products
            .into_iter()
            .filter(|p| p.product_type == product_type)
            .collect();

        if matching.is_empty() {
            return Err(ProductError::NoProductsOfType(product_type));
        }

        Ok(matching)
    }

    /// Validate and store a new product, returning its id
    #[instrument(skip(self, input), fields(product_name = ?input.name))]
    pub async fn create_product(&self, input: ProductRequest) -> ProductResult<ProductId> {
        input
            .validate()
            .map_err(|e| ProductError::Validation(e.to_string()))?;

        if let Some(name) = input.name.as_deref() {
            check_name(name)?;
        }

        let _guard = self.create_lock.lock().await;

        let id = self.repository.count().await? as u64 + 1;
        let product = Product::from_request(id, input)
            .ok_or_else(|| ProductError::Validation("missing required field".to_string()))?;
        self.repository.add(product).await?;

        tracing::info!(product_id = id, "Created product");
        Ok(ProductId { id })
    }
}

/// Name rules applied after the required-field checks, in order.
///
/// Only ASCII decimal digits make a name numeric.
fn check_name(name: &str) -> ProductResult<()> {
    if !name.is_empty() && name.chars().all(|c| c.is_ascii_digit()) {
        return Err(ProductError::NumericName(name.to_string()));
    }

    if name.eq_ignore_ascii_case("true") || name.eq_ignore_ascii_case("false") {
        return Err(ProductError::BooleanName(name.to_string()));
    }

    Ok(())
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            create_lock: Arc::clone(&self.create_lock),
        }
    }
}
