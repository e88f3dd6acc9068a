//! Async `ListStore` implementation for `SQLite` `Storage` via `spawn_blocking`.

use async_trait::async_trait;
use roster_core::{ListFilter, ListQuery, Resource};
use serde_json::Value;

use crate::Storage;
use crate::error::StorageError;
use crate::traits::ListStore;

/// Helper: run a blocking closure on the tokio blocking pool.
async fn blocking<F, T>(f: F) -> Result<T, StorageError>
where
    F: FnOnce() -> Result<T, StorageError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f).await?
}

#[async_trait]
impl ListStore for Storage {
    async fn count(&self, resource: Resource, filter: &ListFilter) -> Result<i64, StorageError> {
        let s = self.clone();
        let filter = filter.clone();
        blocking(move || s.count_rows(resource, &filter)).await
    }

    async fn fetch(&self, query: &ListQuery) -> Result<Vec<Value>, StorageError> {
        let s = self.clone();
        let query = query.clone();
        blocking(move || s.fetch_rows(&query)).await
    }

    async fn insert(&self, resource: Resource, row: Value) -> Result<i64, StorageError> {
        let s = self.clone();
        blocking(move || s.insert_row(resource, row)).await
    }

    async fn insert_many(&self, resource: Resource, rows: Vec<Value>) -> Result<usize, StorageError> {
        let s = self.clone();
        blocking(move || s.insert_rows(resource, rows)).await
    }
}
