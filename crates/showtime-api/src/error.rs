//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::error;

use showtime_core::error::{AppError, ErrorKind};
use showtime_core::types::response::Response as Envelope;

const INTERNAL_MESSAGE: &str = "Internal server error";
const UNAVAILABLE_MESSAGE: &str = "Service temporarily unavailable";

/// HTTP-facing wrapper around [`AppError`].
#[derive(Debug)]
pub struct ApiError(pub AppError);

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn status(&self) -> StatusCode {
        status_for(&self.0.kind)
    }
}

impl From<AppError> for ApiError {
    fn from(e: AppError) -> Self {
        Self(e)
    }
}

/// Status code for each error kind.
pub fn status_for(kind: &ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::Validation => StatusCode::BAD_REQUEST,
        ErrorKind::Authentication => StatusCode::UNAUTHORIZED,
        ErrorKind::Authorization => StatusCode::FORBIDDEN,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::Conflict => StatusCode::CONFLICT,
        ErrorKind::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        // 5xx bodies never echo the internal message.
        let message = if status == StatusCode::SERVICE_UNAVAILABLE {
            error!(error = %self.0, kind = ?self.0.kind, "Dependency unavailable");
            UNAVAILABLE_MESSAGE.to_string()
        } else if status.is_server_error() {
            error!(error = %self.0, kind = ?self.0.kind, "Internal server error");
            INTERNAL_MESSAGE.to_string()
        } else {
            self.0.message
        };

        (status, Json(Envelope::error(message))).into_response()
    }
}

/// Malformed JSON bodies are validation failures.
pub fn json_rejection(rejection: JsonRejection) -> ApiError {
    ApiError(AppError::validation(rejection.body_text()))
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_of(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = ApiError(err).into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), 1024 * 16)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn client_errors_keep_their_message() {
        let (status, body) = body_of(AppError::conflict("Role 'x' already exists")).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Role 'x' already exists");
    }

    #[tokio::test]
    async fn server_errors_are_generic() {
        let (status, body) = body_of(AppError::database("relation \"users\" is missing")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], INTERNAL_MESSAGE);

        let (status, body) = body_of(AppError::service_unavailable("redis refused")).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["message"], UNAVAILABLE_MESSAGE);
    }

    #[test]
    fn kind_table() {
        assert_eq!(status_for(&ErrorKind::Validation), StatusCode::BAD_REQUEST);
        assert_eq!(status_for(&ErrorKind::Authentication), StatusCode::UNAUTHORIZED);
        assert_eq!(status_for(&ErrorKind::Authorization), StatusCode::FORBIDDEN);
        assert_eq!(status_for(&ErrorKind::NotFound), StatusCode::NOT_FOUND);
        assert_eq!(status_for(&ErrorKind::Internal), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
