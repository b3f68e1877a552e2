use axum::http::StatusCode;
use axum_helpers::ApiError;
use thiserror::Error;

use crate::models::ProductType;

/// Catalog failures. The display text is the message clients receive.
#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Invalid type parameter")]
    InvalidType(String),

    #[error("No products found of this type")]
    NoProductsOfType(ProductType),

    #[error("Bad Request")]
    Validation(String),

    #[error("Name must not be a numeric value")]
    NumericName(String),

    #[error("Name must not be boolean")]
    BooleanName(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

pub type ProductResult<T> = Result<T, ProductError>;

impl ProductError {
    pub fn status(&self) -> StatusCode {
        match self {
            ProductError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    /// Bind this error to the request path it was raised for.
    pub fn at(self, path: impl Into<String>) -> ApiError {
        let path = path.into();
        match self {
            ProductError::Storage(details) => {
                tracing::error!(%path, %details, "Catalog storage failure");
                ApiError::internal(path)
            }
            other => ApiError::new(other.status(), other.to_string(), path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_errors_keep_fixed_messages() {
        let cases = [
            (ProductError::InvalidType("bogus".into()), "Invalid type parameter"),
            (
                ProductError::NoProductsOfType(ProductType::Gadget),
                "No products found of this type",
            ),
            (ProductError::Validation("name: required".into()), "Bad Request"),
            (ProductError::NumericName("42".into()), "Name must not be a numeric value"),
            (ProductError::BooleanName("TRUE".into()), "Name must not be boolean"),
        ];

        for (error, message) in cases {
            let api = error.at("/products");
            assert_eq!(api.status(), StatusCode::BAD_REQUEST);
            assert_eq!(api.message(), message);
            assert_eq!(api.path(), "/products");
        }
    }

    #[test]
    fn test_storage_error_hides_details() {
        let api = ProductError::Storage("lock poisoned".into()).at("/products");
        assert_eq!(api.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!api.message().contains("lock poisoned"));
    }
}
