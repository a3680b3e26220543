use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use favorites_core::error::{CoreError, DecodeError, EditError};
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `favorites_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A request that must carry an asset arrived with an empty body.
    #[error("No request body")]
    MissingBody,
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<DecodeError> for AppError {
    fn from(err: DecodeError) -> Self {
        AppError::Core(CoreError::Decode(err))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            AppError::Core(core) => match core {
                CoreError::NotFound { .. } => (StatusCode::NOT_FOUND, "NOT_FOUND"),
                CoreError::AssetExists(_) => (StatusCode::BAD_REQUEST, "ASSET_EXISTS"),
                CoreError::InvalidEdit(EditError::IdMismatch { .. }) => {
                    (StatusCode::BAD_REQUEST, "ID_MISMATCH")
                }
                CoreError::InvalidEdit(EditError::KindMismatch { .. }) => {
                    (StatusCode::BAD_REQUEST, "KIND_MISMATCH")
                }
                CoreError::Decode(DecodeError::Malformed(_)) => {
                    (StatusCode::BAD_REQUEST, "MALFORMED_ASSET")
                }
                CoreError::Decode(DecodeError::UnknownKind(_)) => {
                    (StatusCode::BAD_REQUEST, "INVALID_ASSET_TYPE")
                }
            },
            AppError::MissingBody => (StatusCode::BAD_REQUEST, "MISSING_BODY"),
        };

        let body = json!({
            "error": self.to_string(),
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
