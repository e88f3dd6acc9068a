use serde::Serialize;

use crate::error::CoreError;

/// Default and maximum page size of one resource.
///
/// Both are positive and `default_page_size <= max_page_size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageLimits {
    default_page_size: i64,
    max_page_size: i64,
}

impl PageLimits {
    /// Unchecked constructor for the built-in tables.
    pub(crate) const fn const_new(default_page_size: i64, max_page_size: i64) -> Self {
        Self { default_page_size, max_page_size }
    }

    pub fn new(default_page_size: i64, max_page_size: i64) -> Result<Self, CoreError> {
        if default_page_size <= 0 || max_page_size <= 0 {
            return Err(CoreError::InvalidLimits(format!(
                "page sizes must be positive (default {default_page_size}, max {max_page_size})"
            )));
        }
        if default_page_size > max_page_size {
            return Err(CoreError::InvalidLimits(format!(
                "default page size {default_page_size} exceeds max {max_page_size}"
            )));
        }
        Ok(Self { default_page_size, max_page_size })
    }

    #[must_use]
    pub const fn default_page_size(self) -> i64 {
        self.default_page_size
    }

    #[must_use]
    pub const fn max_page_size(self) -> i64 {
        self.max_page_size
    }

    /// Clamp a non-negative requested size to the maximum.
    #[must_use]
    pub fn clamp(self, requested: i64) -> i64 {
        requested.min(self.max_page_size)
    }
}
