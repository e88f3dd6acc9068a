//! Storage port for the list operations.

use async_trait::async_trait;
use roster_core::{ListFilter, ListQuery, Resource};
use serde_json::Value;

use crate::error::StorageError;

/// A row store that can count and page through rows of every resource.
///
/// Rows travel as JSON objects whose keys are the resource's column names.
/// Implementations order by the sort column, then by insertion id ascending,
/// treat NULL/missing values as smaller than any value, compare integers
/// numerically and text bytewise.
#[async_trait]
pub trait ListStore: Send + Sync {
    /// Number of rows of `resource` matching `filter`, ignoring pagination.
    async fn count(&self, resource: Resource, filter: &ListFilter) -> Result<i64, StorageError>;

    /// Rows `[offset, offset + page_size)` of the filtered, ordered set.
    async fn fetch(&self, query: &ListQuery) -> Result<Vec<Value>, StorageError>;

    /// Store one row. Returns its insertion id.
    async fn insert(&self, resource: Resource, row: Value) -> Result<i64, StorageError>;

    /// Store many rows. Returns how many were written.
    async fn insert_many(&self, resource: Resource, rows: Vec<Value>) -> Result<usize, StorageError> {
        let mut written = 0;
        for row in rows {
            self.insert(resource, row).await?;
            written += 1;
        }
        Ok(written)
    }
}
