use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use planforge_core::types::DbId;
use planforge_versioning::VersionError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`VersionError`] for versioning-domain errors and adds HTTP-specific
/// variants. Implements [`IntoResponse`] to produce consistent JSON error
/// responses with stable machine-readable codes.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from the versioning subsystem.
    #[error(transparent)]
    Version(#[from] VersionError),

    /// A referenced entity does not exist (plain CRUD paths).
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Version(err) => classify_version_error(err),

            AppError::NotFound { entity, id } => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                format!("{entity} with id {id} not found"),
            ),

            AppError::Database(err) => classify_sqlx_error(err),

            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Map a versioning-domain error onto an HTTP status and stable code.
///
/// The composite workflow failures keep distinct codes so the client can
/// advise the user which step is unfinished and what is safe to retry.
fn classify_version_error(err: &VersionError) -> (StatusCode, &'static str, String) {
    match err {
        VersionError::NotFound { .. } => (StatusCode::NOT_FOUND, "NOT_FOUND", err.to_string()),
        VersionError::DuplicateVersion { .. } => {
            tracing::error!(error = %err, "Version number collision");
            (StatusCode::CONFLICT, "DUPLICATE_VERSION", err.to_string())
        }
        VersionError::InvalidVersion { .. } => (
            StatusCode::UNPROCESSABLE_ENTITY,
            "INVALID_VERSION",
            err.to_string(),
        ),
        VersionError::TransientStore(_) => {
            tracing::error!(error = %err, "Backing store unavailable");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                "STORE_UNAVAILABLE",
                "The data store is temporarily unavailable; please retry".to_string(),
            )
        }
        VersionError::VersionCreationFailed { .. } => {
            tracing::error!(error = %err, "Version creation failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "VERSION_CREATE_FAILED",
                err.to_string(),
            )
        }
        VersionError::PointerUpdateFailed { .. } => {
            tracing::error!(error = %err, "Version pointer update failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "POINTER_UPDATE_FAILED",
                err.to_string(),
            )
        }
        VersionError::PartialRestore { .. } => {
            tracing::error!(error = %err, "Partial restore");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "PARTIAL_RESTORE",
                err.to_string(),
            )
        }
        VersionError::RestoreSucceededVersionLogFailed { .. } => {
            tracing::error!(error = %err, "Restore succeeded but was not logged");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "RESTORE_NOT_LOGGED",
                err.to_string(),
            )
        }
    }
}

/// Classify a sqlx error reaching a plain CRUD handler.
///
/// Version-number collisions never arrive here: the versioning layer
/// classifies them into `DuplicateVersion` first. A unique violation on this
/// path can only come from the one-output-per-project key, so it is reported
/// as a plain conflict with the constraint named.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some("23505") => {
            let constraint = db_err.constraint().unwrap_or("unknown");
            tracing::error!(%constraint, "Unique violation outside the versioning workflow");
            (
                StatusCode::CONFLICT,
                "CONFLICT",
                format!("Duplicate value violates unique constraint: {constraint}"),
            )
        }
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}
