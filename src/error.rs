// src/error.rs

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

/// Global Application Error Enum.
/// Every variant renders as `{success: false, error: <status>, message}`.
#[derive(Debug)]
pub enum AppError {
    // 404 Not Found (missing resource, empty page, unknown route)
    NotFound,

    // 422 Unprocessable Entity (failed write, wrongly typed body)
    Unprocessable(String),

    // 400 Bad Request (body is not JSON at all)
    BadRequest(String),

    // 500 Internal Server Error (store failure while reading)
    InternalServerError(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing message. The detail carried by a variant is only logged.
    pub fn message(&self) -> &'static str {
        match self {
            AppError::NotFound => "resource not found",
            AppError::Unprocessable(_) => "unprocessable",
            AppError::BadRequest(_) => "bad request",
            AppError::InternalServerError(_) => "internal server error",
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for AppError {}

/// Implements `IntoResponse` for `AppError`.
/// Converts the error into a JSON response with appropriate HTTP status code.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::InternalServerError(msg) => {
                tracing::error!("Internal Server Error: {}", msg);
            }
            AppError::Unprocessable(msg) => tracing::warn!("Unprocessable: {}", msg),
            AppError::BadRequest(msg) => tracing::warn!("Bad Request: {}", msg),
            AppError::NotFound => {}
        }

        let status = self.status();
        let body = Json(json!({
            "success": false,
            "error": status.as_u16(),
            "message": self.message(),
        }));

        (status, body).into_response()
    }
}

/// Converts `sqlx::Error` into `AppError::InternalServerError`.
/// Allows using `?` operator on read queries; writes map their errors explicitly.
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::InternalServerError(err.to_string())
    }
}

/// Well-formed JSON of the wrong shape is unprocessable; anything else is a bad request.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(err) => AppError::Unprocessable(err.body_text()),
            other => AppError::BadRequest(other.body_text()),
        }
    }
}

/// Route ids are integers; `/questions/abc` does not name a resource.
impl From<PathRejection> for AppError {
    fn from(_: PathRejection) -> Self {
        AppError::NotFound
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_of(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn not_found_body() {
        let (status, body) = body_of(AppError::NotFound).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            body,
            json!({"success": false, "error": 404, "message": "resource not found"})
        );
    }

    #[tokio::test]
    async fn unprocessable_body_hides_cause() {
        let (status, body) =
            body_of(AppError::Unprocessable("violates not-null constraint".into())).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            body,
            json!({"success": false, "error": 422, "message": "unprocessable"})
        );
    }

    #[tokio::test]
    async fn internal_error_body() {
        let (status, body) = body_of(AppError::from(sqlx::Error::PoolTimedOut)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], 500);
        assert_eq!(body["success"], false);
    }
}
