//! The pagination and sorting contract shared by every list operation.
//!
//! A client sends a [`PaginationRequest`] (and optionally a [`Sort`]); the
//! server validates it into a [`PageWindow`] against the resource's
//! [`PageLimits`], runs the query, and answers with a [`PaginationResponse`].

mod limits;
mod request;
mod response;
mod sort;
mod window;

pub use limits::PageLimits;
pub use request::PaginationRequest;
pub use response::PaginationResponse;
pub use sort::{OrderBy, Sort, SortSpec};
pub use window::PageWindow;
