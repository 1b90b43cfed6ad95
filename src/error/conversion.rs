/**
 * Error Conversion
 *
 * This module provides the HTTP response conversion for `AuthError`,
 * allowing handlers to return the error directly.
 *
 * # Response Format
 *
 * Error responses are returned as JSON with the following structure:
 * ```json
 * {
 *   "error": "Error message",
 *   "status": 400
 * }
 * ```
 */

use axum::response::{IntoResponse, Json, Response};

use crate::error::types::AuthError;

impl IntoResponse for AuthError {
    /// Convert an auth error into an HTTP response
    ///
    /// The response carries the status code from `status_code` and a JSON
    /// body with the user-facing message and the numeric status.
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = serde_json::json!({
            "error": self.message(),
            "status": status.as_u16(),
        });

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::users::UniqueField;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_conflict_into_response() {
        let response = AuthError::Conflict(UniqueField::Username).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "Username already exists");
        assert_eq!(body["status"], 409);
    }

    #[tokio::test]
    async fn test_unauthorized_into_response() {
        let response = AuthError::Unauthorized.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "Invalid username or password");
    }
}
