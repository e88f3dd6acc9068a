//! In-process row store.

use std::collections::HashMap;

use async_trait::async_trait;
use roster_core::{ListFilter, ListQuery, Resource, prepare_row};
use serde_json::Value;
use tokio::sync::RwLock;

use crate::error::StorageError;
use crate::ordering::compare_json;
use crate::traits::ListStore;

#[derive(Debug, Default)]
struct Tables {
    rows: HashMap<Resource, Vec<(i64, Value)>>,
    next_id: i64,
}

/// Row store kept entirely in memory.
///
/// Rows are held per resource in insertion order; ids increase monotonically
/// across all resources, as in the `SQLite` store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ListStore for MemoryStore {
    async fn count(&self, resource: Resource, filter: &ListFilter) -> Result<i64, StorageError> {
        let tables = self.tables.read().await;
        let count = tables
            .rows
            .get(&resource)
            .map_or(0, |rows| rows.iter().filter(|(_, row)| filter.matches(row)).count());
        Ok(i64::try_from(count).unwrap_or(i64::MAX))
    }

    async fn fetch(&self, query: &ListQuery) -> Result<Vec<Value>, StorageError> {
        let tables = self.tables.read().await;
        let Some(rows) = tables.rows.get(&query.resource()) else {
            return Ok(Vec::new());
        };

        let mut matched: Vec<&(i64, Value)> =
            rows.iter().filter(|(_, row)| query.filter().matches(row)).collect();

        let column = query.sort().column().name;
        let desc = query.sort().is_desc();
        matched.sort_by(|(id_a, a), (id_b, b)| {
            let by_column = compare_json(a.get(column), b.get(column));
            let by_column = if desc { by_column.reverse() } else { by_column };
            by_column.then(id_a.cmp(id_b))
        });

        let window = query.window();
        Ok(matched
            .into_iter()
            .skip(window.offset_usize())
            .take(window.limit_usize())
            .map(|(_, row)| row.clone())
            .collect())
    }

    async fn insert(&self, resource: Resource, row: Value) -> Result<i64, StorageError> {
        let row = prepare_row(resource, row)?;
        let mut tables = self.tables.write().await;
        tables.next_id += 1;
        let id = tables.next_id;
        tables.rows.entry(resource).or_default().push((id, row));
        Ok(id)
    }

    async fn insert_many(&self, resource: Resource, rows: Vec<Value>) -> Result<usize, StorageError> {
        let prepared =
            rows.into_iter().map(|row| prepare_row(resource, row)).collect::<Result<Vec<_>, _>>()?;
        let written = prepared.len();
        let mut tables = self.tables.write().await;
        for row in prepared {
            tables.next_id += 1;
            let id = tables.next_id;
            tables.rows.entry(resource).or_default().push((id, row));
        }
        Ok(written)
    }
}
