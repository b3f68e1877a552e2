//! Reusable OpenAPI response types for consistent API documentation.

use super::ErrorResponseBody;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Bad Request",
    content_type = "application/json",
    example = json!({
        "timestamp": "2024-05-01T10:15:30.123Z",
        "status": 400,
        "error": "Bad Request",
        "path": "/products"
    })
)]
pub struct BadRequestResponse(pub ErrorResponseBody);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({
        "timestamp": "2024-05-01T10:15:30.123Z",
        "status": 404,
        "error": "Not Found",
        "path": "/unknown"
    })
)]
pub struct NotFoundResponse(pub ErrorResponseBody);

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({
        "timestamp": "2024-05-01T10:15:30.123Z",
        "status": 500,
        "error": "Internal Server Error",
        "path": "/products"
    })
)]
pub struct InternalServerErrorResponse(pub ErrorResponseBody);
