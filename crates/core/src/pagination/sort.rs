use prost::Message;
use serde::{Deserialize, Serialize};

use crate::column::Column;
use crate::constants::MAX_SORT_COLUMN_LEN;
use crate::error::PaginationError;
use crate::resource::Resource;

/// Requested ordering. Wire: `{ string column = 1; bool desc = 2; }`.
#[derive(Clone, PartialEq, Eq, Message, Serialize, Deserialize)]
pub struct Sort {
    #[prost(string, tag = "1")]
    pub column: String,
    #[prost(bool, tag = "2")]
    #[serde(default)]
    pub desc: bool,
}

/// Name used for the same message by the newer list RPCs.
pub type OrderBy = Sort;

impl Sort {
    pub fn asc(column: impl Into<String>) -> Self {
        Self { column: column.into(), desc: false }
    }

    pub fn desc(column: impl Into<String>) -> Self {
        Self { column: column.into(), desc: true }
    }

    /// Check the column against `resource`'s schema.
    pub fn resolve(&self, resource: Resource) -> Result<SortSpec, PaginationError> {
        let len = self.column.chars().count();
        if len == 0 || len > MAX_SORT_COLUMN_LEN {
            return Err(PaginationError::SortColumnLength(len));
        }
        match resource.column(&self.column) {
            Some(column) if column.sortable => Ok(SortSpec::new(column, self.desc)),
            _ => Err(PaginationError::UnknownSortColumn {
                resource,
                column: self.column.clone(),
            }),
        }
    }
}

/// A sort resolved against a resource schema. Only ever names a declared,
/// sortable column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    column: &'static Column,
    desc: bool,
}

impl SortSpec {
    #[must_use]
    pub const fn new(column: &'static Column, desc: bool) -> Self {
        Self { column, desc }
    }

    #[must_use]
    pub const fn column(&self) -> &'static Column {
        self.column
    }

    #[must_use]
    pub const fn is_desc(&self) -> bool {
        self.desc
    }

    #[must_use]
    pub fn to_sort(&self) -> Sort {
        Sort { column: self.column.name.to_owned(), desc: self.desc }
    }
}
