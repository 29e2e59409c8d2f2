use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use linkbio_core::{CoreError, LinkId, StorageError, ValidationErrors};
use thiserror::Error;
use tracing::{debug, error};

use crate::model::ErrorResponse;

pub type Result<T> = std::result::Result<T, AppError>;

const INTERNAL_ERROR_MESSAGE: &str = "internal server error";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid request body: {0}")]
    InvalidBody(String),
    #[error("validation failed: {0}")]
    Validation(ValidationErrors),
    #[error("invalid link id: {0}")]
    InvalidLinkId(String),
    #[error("link not found: {0}")]
    NotFound(LinkId),
    #[error("storage operation failed: {0}")]
    Storage(#[source] StorageError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidBody(_) | AppError::Validation(_) | AppError::InvalidLinkId(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Store failures are logged here, inside the handler's span, since their
/// detail never reaches the client.
impl From<StorageError> for AppError {
    fn from(value: StorageError) -> Self {
        match value {
            StorageError::NotFound(id) => {
                debug!(%id, "link not found");
                AppError::NotFound(id)
            }
            source => {
                error!(error = %source, "storage operation failed");
                AppError::Storage(source)
            }
        }
    }
}

impl From<CoreError> for AppError {
    fn from(value: CoreError) -> Self {
        match value {
            CoreError::InvalidLinkId(raw) => AppError::InvalidLinkId(raw),
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(value: ValidationErrors) -> Self {
        AppError::Validation(value)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidBody(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            AppError::Validation(errors) => {
                ErrorResponse::new("validation failed").with_details(errors.into_fields())
            }
            AppError::NotFound(_) => ErrorResponse::new("link not found"),
            AppError::Storage(_) => ErrorResponse::new(INTERNAL_ERROR_MESSAGE),
            other => ErrorResponse::new(other.to_string()),
        };

        (status, Json(body)).into_response()
    }
}
