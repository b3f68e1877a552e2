//! JSON extractor with automatic validation using the validator crate.

use crate::errors::{ApiError, reason, request_path};
use axum::{
    extract::{FromRequest, Json, OriginalUri, Request, rejection::JsonRejection},
    http::StatusCode,
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON extractor with automatic validation.
///
/// Deserializes the body, then runs the `validator` crate's `Validate` impl.
/// Any failure is rejected with a 400 "Bad Request" envelope carrying the
/// request path. A missing `Content-Type: application/json` header keeps its
/// 415 status.
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum::routing::post;
/// use axum_helpers::extractors::ValidatedJson;
/// use serde::Deserialize;
/// use validator::Validate;
///
/// #[derive(Deserialize, Validate)]
/// struct CreateItem {
///     #[validate(required, length(min = 1))]
///     name: Option<String>,
/// }
///
/// async fn create_item(ValidatedJson(payload): ValidatedJson<CreateItem>) -> String {
///     format!("Creating {:?}", payload.name)
/// }
///
/// let app = Router::new().route("/items", post(create_item));
/// ```
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let path = req
            .extensions()
            .get::<OriginalUri>()
            .map(|OriginalUri(uri)| request_path(uri))
            .unwrap_or_else(|| request_path(req.uri()));

        let Json(data) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| rejection_to_error(rejection, &path))?;

        data.validate().map_err(|errors| {
            tracing::debug!(%path, ?errors, "Request body failed validation");
            ApiError::bad_request(reason(StatusCode::BAD_REQUEST), &path)
        })?;

        Ok(ValidatedJson(data))
    }
}

fn rejection_to_error(rejection: JsonRejection, path: &str) -> ApiError {
    tracing::debug!(%path, error = %rejection.body_text(), "Rejected JSON body");

    let status = match rejection {
        JsonRejection::MissingJsonContentType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
        _ => StatusCode::BAD_REQUEST,
    };
    ApiError::new(status, reason(status), path)
}
