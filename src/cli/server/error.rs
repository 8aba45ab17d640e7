//! Error handling for the formula HTTP server

use crate::cli::server::handlers::files_handler::StorageError;
use crate::cli::server::models::ErrorResponse;
use crate::formula::ParamError;
use axum::{
    Json,
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::{error, warn};

/// Server-specific errors
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Missing required fields")]
    MissingFields,

    #[error("Invalid function type")]
    InvalidFunctionType,

    #[error(transparent)]
    Params(#[from] ParamError),

    #[error("Invalid data: result is NaN")]
    InvalidResult,

    #[error("Missing fileName for read action")]
    MissingReadFields,

    #[error("Missing fileName or content for write action")]
    MissingWriteFields,

    #[error("Invalid fileName: {file_name}")]
    InvalidFileName { file_name: String },

    #[error("Error reading the file: {0}")]
    FileRead(#[source] std::io::Error),

    #[error("Error writing to the file: {0}")]
    FileWrite(#[source] std::io::Error),

    #[error("Unreadable request body: {0}")]
    Body(#[from] BytesRejection),

    #[error("Invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl ServerError {
    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::MissingFields
            | ServerError::InvalidFunctionType
            | ServerError::Params(_)
            | ServerError::InvalidResult
            | ServerError::MissingReadFields
            | ServerError::MissingWriteFields
            | ServerError::InvalidFileName { .. } => StatusCode::BAD_REQUEST,
            ServerError::FileRead(_)
            | ServerError::FileWrite(_)
            | ServerError::Body(_)
            | ServerError::InvalidJson(_)
            | ServerError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message returned to the client; 500s never carry the underlying cause
    pub fn client_message(&self) -> String {
        match self {
            ServerError::InvalidFileName { .. } => "Invalid fileName".to_string(),
            ServerError::FileRead(_) => "Error reading the file".to_string(),
            ServerError::FileWrite(_) => "Error writing to the file".to_string(),
            ServerError::Body(_) | ServerError::InvalidJson(_) | ServerError::Internal(_) => {
                "Internal Server Error".to_string()
            }
            other => other.to_string(),
        }
    }

    /// Map a storage failure onto the read or write variant
    pub fn from_storage(err: StorageError, writing: bool) -> Self {
        match err {
            StorageError::InvalidName { name } => ServerError::InvalidFileName { file_name: name },
            StorageError::Io(e) if writing => ServerError::FileWrite(e),
            StorageError::Io(e) => ServerError::FileRead(e),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("request failed: {}", self);
        } else {
            warn!("rejected request: {}", self);
        }

        let body = ErrorResponse {
            error: self.client_message(),
        };
        (status, Json(body)).into_response()
    }
}

/// Result type for server operations
pub type ServerResult<T> = Result<T, ServerError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formula::FunctionKind;

    #[test]
    fn client_errors_are_bad_request() {
        assert_eq!(ServerError::MissingFields.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ServerError::InvalidResult.status(), StatusCode::BAD_REQUEST);
        let params = ServerError::from(ParamError::Missing {
            kind: FunctionKind::FirstFc,
        });
        assert_eq!(params.status(), StatusCode::BAD_REQUEST);
        assert_eq!(params.client_message(), "Missing parameters for FirstFc");
    }

    #[test]
    fn server_errors_hide_their_cause() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "/secret/path");
        let err = ServerError::FileRead(io);
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.client_message(), "Error reading the file");

        let internal = ServerError::Internal(anyhow::anyhow!("boom"));
        assert_eq!(internal.client_message(), "Internal Server Error");
    }

    #[test]
    fn storage_errors_follow_the_action() {
        let io = || std::io::Error::other("disk");
        assert!(matches!(
            ServerError::from_storage(StorageError::Io(io()), true),
            ServerError::FileWrite(_)
        ));
        assert!(matches!(
            ServerError::from_storage(StorageError::Io(io()), false),
            ServerError::FileRead(_)
        ));
        assert!(matches!(
            ServerError::from_storage(
                StorageError::InvalidName {
                    name: "../x".to_string()
                },
                false
            ),
            ServerError::InvalidFileName { .. }
        ));
    }
}
