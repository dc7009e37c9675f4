use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use dolls_db::gateway::StoreError;

/// Application-level error type for HTTP handlers.
///
/// The mapping to status codes is per handler/operation, not uniform by
/// error kind: a store failure is a 500 on reads and deletes but a 400 on
/// create and replace, matching the service's external contract. Handlers
/// pick the write-path mapping explicitly via [`AppError::WriteRejected`];
/// the `From<StoreError>` impl covers the read-path default.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// No resource under the requested id. Also produced for an id segment
    /// that does not parse as an integer, so parsing details never leak.
    #[error("no such doll")]
    NotFound,

    /// Extra segments after the id in the resource path.
    #[error("malformed resource path")]
    BadPath,

    /// The request body did not decode into the expected shape.
    #[error("request body decode failed")]
    Decode,

    /// A store failure on a write path (create or replace).
    #[error("write rejected by the store: {0}")]
    WriteRejected(#[source] StoreError),

    /// A store failure on a read or delete path.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub(crate) fn decode(rejection: JsonRejection) -> Self {
        tracing::debug!(error = %rejection, "request body decode failed");
        AppError::Decode
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::BadPath | AppError::Decode => StatusCode::BAD_REQUEST,
            AppError::WriteRejected(err) => {
                tracing::error!(error = %err, "store rejected a write");
                StatusCode::BAD_REQUEST
            }
            AppError::Store(err) => {
                tracing::error!(error = %err, "store failure");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        // Failures are status-code-only; no structured error body.
        status.into_response()
    }
}
