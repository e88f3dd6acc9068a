//! Mapping of service errors onto gRPC status codes.

use roster_core::ErrorCode;
use tonic::Status;

use crate::ServiceError;

impl From<ServiceError> for Status {
    fn from(err: ServiceError) -> Self {
        match err.code() {
            ErrorCode::InvalidArgument => Self::invalid_argument(err.to_string()),
            ErrorCode::NotFound => Self::not_found(err.to_string()),
            ErrorCode::Unavailable => {
                tracing::warn!(error = %err, "list backend unavailable");
                Self::unavailable("storage temporarily unavailable")
            },
            _ => {
                tracing::error!(error = %err, "list operation failed");
                Self::internal("internal error")
            },
        }
    }
}
