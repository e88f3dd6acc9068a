use prost::Message;
use serde::{Deserialize, Serialize};

use super::{PageLimits, PageWindow};
use crate::error::PaginationError;

/// Page request embedded in every `List*Request`.
///
/// Wire: `{ int64 offset = 1; optional int64 page_size = 2; }`.
#[derive(Clone, Copy, PartialEq, Eq, Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationRequest {
    /// Zero-based row offset.
    #[prost(int64, tag = "1")]
    #[serde(default)]
    pub offset: i64,
    /// Rows wanted; `None` means the resource default.
    #[prost(int64, optional, tag = "2")]
    #[serde(default, alias = "page_size", skip_serializing_if = "Option::is_none")]
    pub page_size: Option<i64>,
}

impl PaginationRequest {
    #[must_use]
    pub const fn new(offset: i64, page_size: Option<i64>) -> Self {
        Self { offset, page_size }
    }

    /// Validate against `limits` and produce the window the server applies.
    ///
    /// Negative values are rejected; sizes above the maximum are clamped.
    pub fn window(&self, limits: PageLimits) -> Result<PageWindow, PaginationError> {
        if self.offset < 0 {
            return Err(PaginationError::NegativeOffset(self.offset));
        }
        let page_size = match self.page_size {
            None => limits.default_page_size(),
            Some(requested) if requested < 0 => {
                return Err(PaginationError::NegativePageSize(requested));
            },
            Some(requested) => {
                let applied = limits.clamp(requested);
                if applied != requested {
                    tracing::debug!(requested, applied, "page size clamped to resource maximum");
                }
                applied
            },
        };
        PageWindow::new(self.offset, page_size)
    }
}
