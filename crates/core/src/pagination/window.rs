use serde::Serialize;

use super::PaginationResponse;
use crate::error::PaginationError;

/// The validated `(offset, page_size)` a server actually applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageWindow {
    offset: i64,
    page_size: i64,
}

impl PageWindow {
    pub fn new(offset: i64, page_size: i64) -> Result<Self, PaginationError> {
        if offset < 0 {
            return Err(PaginationError::NegativeOffset(offset));
        }
        if page_size < 0 {
            return Err(PaginationError::NegativePageSize(page_size));
        }
        Ok(Self { offset, page_size })
    }

    #[must_use]
    pub const fn offset(self) -> i64 {
        self.offset
    }

    #[must_use]
    pub const fn page_size(self) -> i64 {
        self.page_size
    }

    #[must_use]
    pub fn offset_usize(self) -> usize {
        usize::try_from(self.offset).unwrap_or(usize::MAX)
    }

    #[must_use]
    pub fn limit_usize(self) -> usize {
        usize::try_from(self.page_size).unwrap_or(usize::MAX)
    }

    /// Whether no row can come back: zero-size page, or offset at/after the end.
    #[must_use]
    pub const fn is_exhausted(self, total_count: i64) -> bool {
        self.page_size == 0 || self.offset >= total_count
    }

    /// Build the response for a page that returned `returned` rows.
    ///
    /// `returned` is capped at `page_size`; callers truncate their rows first.
    #[must_use]
    pub fn respond(self, total_count: i64, returned: usize) -> PaginationResponse {
        let returned = i64::try_from(returned).unwrap_or(i64::MAX).min(self.page_size);
        PaginationResponse {
            total_count,
            offset: self.offset,
            end: self.offset.saturating_add(returned),
            page_size: self.page_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_respond_full_first_page() {
        let window = PageWindow::new(0, 20).unwrap();
        let resp = window.respond(5, 5);
        assert_eq!(resp, PaginationResponse { total_count: 5, offset: 0, end: 5, page_size: 20 });
    }

    #[test]
    fn test_respond_past_end() {
        let window = PageWindow::new(10, 20).unwrap();
        assert!(window.is_exhausted(5));
        let resp = window.respond(5, 0);
        assert_eq!(resp.end, resp.offset);
        assert_eq!(resp.offset, 10);
        assert_eq!(resp.total_count, 5);
    }

    #[test]
    fn test_offset_equal_to_total_is_exhausted() {
        assert!(PageWindow::new(5, 20).unwrap().is_exhausted(5));
        assert!(!PageWindow::new(4, 20).unwrap().is_exhausted(5));
    }

    #[test]
    fn test_zero_page_is_exhausted() {
        assert!(PageWindow::new(0, 0).unwrap().is_exhausted(100));
    }

    #[test]
    fn test_returned_capped_at_page_size() {
        let resp = PageWindow::new(0, 3).unwrap().respond(10, 7);
        assert_eq!(resp.end, 3);
    }

    #[test]
    fn test_new_rejects_negatives() {
        assert_eq!(PageWindow::new(-3, 1).unwrap_err(), PaginationError::NegativeOffset(-3));
        assert_eq!(PageWindow::new(0, -1).unwrap_err(), PaginationError::NegativePageSize(-1));
    }
}
