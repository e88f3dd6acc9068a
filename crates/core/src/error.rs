use std::result::Result as StdResult;

use serde::Serialize;
use thiserror::Error;

use crate::column::ColumnKind;
use crate::constants::{MAX_FILTERS, MAX_SORT_COLUMN_LEN};
use crate::filter::FilterOp;
use crate::resource::Resource;

/// Transport-neutral error class.
///
/// HTTP and gRPC layers map this onto their own status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum ErrorCode {
    /// Caller sent a request that can never succeed as-is.
    InvalidArgument,
    /// Addressed entity (resource, row) does not exist.
    NotFound,
    /// Backend is temporarily unable to serve; retry per transport policy.
    Unavailable,
    /// Unexpected failure; details are logged server-side only.
    Internal,
}

/// A list request rejected before any storage access.
///
/// Every variant is a client error and maps to [`ErrorCode::InvalidArgument`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum PaginationError {
    #[error("offset must be >= 0, got {0}")]
    NegativeOffset(i64),

    #[error("page size must be >= 0, got {0}")]
    NegativePageSize(i64),

    #[error("pagination is required")]
    MissingPagination,

    #[error("sort column must be between 1 and {max} characters, got {0}", max = MAX_SORT_COLUMN_LEN)]
    SortColumnLength(usize),

    #[error("{resource} cannot be sorted by '{column}'")]
    UnknownSortColumn { resource: Resource, column: String },

    #[error("{resource} cannot be filtered by '{column}'")]
    UnknownFilterColumn { resource: Resource, column: String },

    #[error("'{op}' is not supported on {kind} column '{column}'")]
    UnsupportedFilterOp { column: &'static str, kind: ColumnKind, op: FilterOp },

    #[error("invalid value '{value}' for {kind} column '{column}'")]
    InvalidFilterValue { column: &'static str, kind: ColumnKind, value: String },

    #[error("at most {max} filters are allowed, got {0}", max = MAX_FILTERS)]
    TooManyFilters(usize),

    #[error("unknown filter operator {0}")]
    UnknownFilterOp(i32),
}

impl PaginationError {
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        ErrorCode::InvalidArgument
    }
}

/// Errors that are not caused by a single list request.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CoreError {
    #[error("invalid page limits: {0}")]
    InvalidLimits(String),

    #[error("unknown resource: {0}")]
    UnknownResource(String),

    #[error("invalid timestamp '{value}': {source}")]
    InvalidTimestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("{resource} row must be a JSON object")]
    RowNotObject { resource: Resource },

    #[error("{resource} column '{column}' expects {expected}, got {value}")]
    ColumnType { resource: Resource, column: &'static str, expected: &'static str, value: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CoreError {
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::UnknownResource(_) => ErrorCode::NotFound,
            Self::InvalidTimestamp { .. }
            | Self::RowNotObject { .. }
            | Self::ColumnType { .. } => {
                ErrorCode::InvalidArgument
            },
            Self::InvalidLimits(_) | Self::Serialization(_) => ErrorCode::Internal,
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
