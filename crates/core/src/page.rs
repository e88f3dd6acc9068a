use serde::{Deserialize, Serialize};

use crate::pagination::PaginationResponse;

/// One page of rows plus the metadata describing it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub pagination: PaginationResponse,
    pub rows: Vec<T>,
}

impl<T> Page<T> {
    #[must_use]
    pub const fn new(pagination: PaginationResponse, rows: Vec<T>) -> Self {
        Self { pagination, rows }
    }

    pub fn try_map<U, E>(self, f: impl FnMut(T) -> Result<U, E>) -> Result<Page<U>, E> {
        let rows = self.rows.into_iter().map(f).collect::<Result<Vec<_>, _>>()?;
        Ok(Page { pagination: self.pagination, rows })
    }
}
