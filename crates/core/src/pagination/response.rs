use prost::Message;
use serde::{Deserialize, Serialize};

use super::PaginationRequest;

/// Page metadata returned by every `List*Response`.
///
/// Wire: `{ int64 total_count = 1; int64 offset = 2; int64 end = 3; int64 page_size = 4; }`.
#[derive(Clone, Copy, PartialEq, Eq, Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationResponse {
    /// Rows matching the query, ignoring pagination.
    #[prost(int64, tag = "1")]
    pub total_count: i64,
    /// Offset that was applied.
    #[prost(int64, tag = "2")]
    pub offset: i64,
    /// Offset of the first row not included in this page.
    #[prost(int64, tag = "3")]
    pub end: i64,
    /// Page size that was applied.
    #[prost(int64, tag = "4")]
    pub page_size: i64,
}

impl PaginationResponse {
    #[must_use]
    pub const fn returned(&self) -> i64 {
        self.end.saturating_sub(self.offset)
    }

    #[must_use]
    pub const fn has_more(&self) -> bool {
        self.end < self.total_count
    }

    /// Request for the page following this one, if any.
    #[must_use]
    pub fn next_page(&self) -> Option<PaginationRequest> {
        (self.has_more() && self.page_size > 0)
            .then(|| PaginationRequest::new(self.end, Some(self.page_size)))
    }

    /// Request for the page preceding this one, if any.
    #[must_use]
    pub fn previous_page(&self) -> Option<PaginationRequest> {
        (self.offset > 0 && self.page_size > 0).then(|| {
            PaginationRequest::new(
                self.offset.saturating_sub(self.page_size).max(0),
                Some(self.page_size),
            )
        })
    }

    /// 1-based page number for "page N of M" pagers.
    #[must_use]
    pub const fn current_page(&self) -> i64 {
        if self.page_size <= 0 {
            return 1;
        }
        self.offset / self.page_size + 1
    }

    /// Number of pages; `0` for an empty result set.
    #[must_use]
    pub const fn total_pages(&self) -> i64 {
        if self.page_size <= 0 || self.total_count <= 0 {
            return 0;
        }
        (self.total_count - 1) / self.page_size + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resp(total_count: i64, offset: i64, end: i64, page_size: i64) -> PaginationResponse {
        PaginationResponse { total_count, offset, end, page_size }
    }

    #[test]
    fn test_next_page() {
        let r = resp(45, 20, 40, 20);
        assert!(r.has_more());
        assert_eq!(r.next_page(), Some(PaginationRequest::new(40, Some(20))));
        assert_eq!(resp(45, 40, 45, 20).next_page(), None);
    }

    #[test]
    fn test_previous_page() {
        assert_eq!(resp(45, 0, 20, 20).previous_page(), None);
        assert_eq!(resp(45, 30, 45, 20).previous_page(), Some(PaginationRequest::new(10, Some(20))));
        assert_eq!(resp(45, 5, 25, 20).previous_page(), Some(PaginationRequest::new(0, Some(20))));
    }

    #[test]
    fn test_page_numbers() {
        let r = resp(45, 40, 45, 20);
        assert_eq!(r.current_page(), 3);
        assert_eq!(r.total_pages(), 3);
        assert_eq!(resp(40, 0, 20, 20).total_pages(), 2);
        assert_eq!(resp(0, 0, 0, 20).total_pages(), 0);
    }

    #[test]
    fn test_wire_field_numbers() {
        let bytes = resp(5, 0, 5, 20).encode_to_vec();
        // offset = 0 is the proto3 default and is not emitted
        assert_eq!(bytes, vec![0x08, 5, 0x18, 5, 0x20, 20]);
    }

    #[test]
    fn test_json_uses_camel_case() {
        let json = serde_json::to_value(resp(5, 0, 5, 20)).unwrap();
        assert_eq!(json, serde_json::json!({"totalCount": 5, "offset": 0, "end": 5, "pageSize": 20}));
    }
}
