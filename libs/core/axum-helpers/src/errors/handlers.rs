use axum::extract::OriginalUri;

use super::{ApiError, request_path};

/// Fallback handler for unmatched routes.
///
/// Answers with a 404 in the standard error envelope.
pub async fn not_found(OriginalUri(uri): OriginalUri) -> ApiError {
    ApiError::not_found(request_path(&uri))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorResponseBody;
    use axum::{Router, body::Body, http::Request, http::StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_fallback_reports_requested_path() {
        let app = Router::new().fallback(not_found);

        let response = app
            .oneshot(Request::get("/missing?x=1").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: ErrorResponseBody = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.path, "/missing?x=1");
        assert_eq!(body.error, "Not Found");
    }
}
