//! HTTP handlers for Products API

use axum::{
    extract::{rejection::QueryRejection, OriginalUri, Query, State},
    http::{StatusCode, Uri},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use axum_helpers::{
    errors::responses::{BadRequestResponse, InternalServerErrorResponse, NotFoundResponse},
    request_path, ApiError, ErrorResponseBody, ValidatedJson,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ProductError;
use crate::models::{Product, ProductId, ProductQuery, ProductRequest, ProductType};
use crate::repository::ProductRepository;
use crate::service::ProductService;

/// OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    paths(list_products, create_product),
    components(
        schemas(Product, ProductRequest, ProductId, ProductType, ErrorResponseBody),
        responses(BadRequestResponse, NotFoundResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = "Products", description = "Product catalog endpoints")
    )
)]
pub struct ApiDoc;

/// Create the products router, to be nested at `/products`
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_products).post(create_product))
        .with_state(shared_service)
}

/// List products, optionally filtered by type
#[utoipa::path(
    get,
    path = "",
    tag = "Products",
    params(ProductQuery),
    responses(
        (status = 200, description = "Matching products in insertion order", body = Vec<Product>),
        (status = 400, description = "Unknown type, or no products of that type", body = ErrorResponseBody),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    OriginalUri(uri): OriginalUri,
    query: Result<Query<ProductQuery>, QueryRejection>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let path = request_path(&uri);
    let Query(query) = query.map_err(|rejection| {
        tracing::debug!(%path, error = %rejection.body_text(), "Rejected query string");
        undecodable_query(&uri).at(&path)
    })?;

    let products = service
        .list_products(query.product_type.as_deref())
        .await
        .map_err(|e| e.at(&path))?;
    Ok(Json(products))
}

/// Only `type` is read, so a query that fails to decode can only be a bad `type`.
fn undecodable_query(uri: &Uri) -> ProductError {
    ProductError::InvalidType(uri.query().unwrap_or_default().to_string())
}

/// Create a new product
#[utoipa::path(
    post,
    path = "",
    tag = "Products",
    request_body = ProductRequest,
    responses(
        (status = 201, description = "Product created", body = ProductId),
        (status = 400, response = BadRequestResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    OriginalUri(uri): OriginalUri,
    ValidatedJson(input): ValidatedJson<ProductRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let id = service
        .create_product(input)
        .await
        .map_err(|e| e.at(request_path(&uri)))?;
    Ok((StatusCode::CREATED, Json(id)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undecodable_query_carries_raw_query() {
        let uri: Uri = "/products?type=a&type=b".parse().unwrap();
        assert!(matches!(
            undecodable_query(&uri),
            ProductError::InvalidType(ref raw) if raw == "type=a&type=b"
        ));
    }

    #[test]
    fn test_api_doc_registers_error_responses() {
        let doc = ApiDoc::openapi();
        let responses = doc.components.unwrap().responses;
        for name in ["BadRequestResponse", "NotFoundResponse", "InternalServerErrorResponse"] {
            assert!(responses.contains_key(name), "missing {name}");
        }
    }
}
