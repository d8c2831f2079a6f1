use axum::http::StatusCode;
use thiserror::Error;

/// Failures reading or writing the data file.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Rejections of a single record-store operation. The store is left
/// unchanged whenever one of these is returned.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("A subject named '{0}' already exists.")]
    DuplicateName(String),

    #[error("{0}")]
    Validation(String),

    #[error("No {kind} at index {index}.")]
    IndexOutOfRange { kind: &'static str, index: usize },

    #[error("Failed to save records: {0}")]
    Storage(#[from] StorageError),
}

impl StoreError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn internal(err: impl std::error::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        let status = match &err {
            StoreError::DuplicateName(_) => StatusCode::CONFLICT,
            StoreError::Validation(_) => StatusCode::BAD_REQUEST,
            StoreError::IndexOutOfRange { .. } => StatusCode::NOT_FOUND,
            StoreError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}
