//! Typed error enum for the service layer.
//!
//! Unifies request validation, catalog and storage failures so transports can
//! pick a status from [`ServiceError::code`] instead of inspecting messages.

use roster_core::{CoreError, ErrorCode, PaginationError};
use roster_storage::StorageError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// The list request failed validation; storage was not touched.
    #[error("{0}")]
    Pagination(#[from] PaginationError),

    /// Storage operation failed.
    #[error("storage: {0}")]
    Storage(#[from] StorageError),

    #[error("{0}")]
    Core(#[from] CoreError),

    /// A stored row could not be decoded into its typed form.
    #[error("serialization: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("import holds {got} rows, at most {max} are accepted")]
    TooManyRows { got: usize, max: usize },
}

impl ServiceError {
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Pagination(e) => e.code(),
            Self::Core(e) => e.code(),
            Self::Storage(e) if e.is_transient() => ErrorCode::Unavailable,
            Self::Storage(e) if e.is_invalid_row() => ErrorCode::InvalidArgument,
            Self::TooManyRows { .. } => ErrorCode::InvalidArgument,
            Self::Storage(_) | Self::Serialization(_) => ErrorCode::Internal,
        }
    }

    /// Whether this error is likely transient (worth retrying).
    #[must_use]
    pub fn is_transient(&self) -> bool {
        self.code() == ErrorCode::Unavailable
    }
}
