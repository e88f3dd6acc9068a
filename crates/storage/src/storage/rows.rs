//! Count, page and insert queries over the `rows` table.

use roster_core::{Condition, FilterOp, FilterValue, ListFilter, ListQuery, Resource, prepare_row};
use rusqlite::params_from_iter;
use rusqlite::types::Value as SqlValue;
use serde_json::Value;

use super::{Storage, escape_like_pattern, get_conn};
use crate::error::StorageError;

/// `json_extract` expression for a schema column.
///
/// `name` always comes from a `&'static Column` of the resource schema.
fn column_expr(name: &str) -> String {
    format!("json_extract(data, '$.{name}')")
}

/// Build the WHERE clause and its parameters for `resource` + `filter`.
fn where_clause(resource: Resource, filter: &ListFilter) -> (String, Vec<SqlValue>) {
    let mut sql = String::from("WHERE resource = ?1");
    let mut params = vec![SqlValue::Text(resource.as_str().to_owned())];
    for condition in filter.conditions() {
        params.push(condition_param(condition));
        let expr = column_expr(condition.column().name);
        let n = params.len();
        match condition.op() {
            FilterOp::Eq => sql.push_str(&format!(" AND {expr} = ?{n}")),
            FilterOp::Contains => sql.push_str(&format!(" AND {expr} LIKE ?{n} ESCAPE '\\'")),
        }
    }
    (sql, params)
}

fn condition_param(condition: &Condition) -> SqlValue {
    match (condition.op(), condition.value()) {
        (FilterOp::Contains, FilterValue::Text(s)) => {
            SqlValue::Text(format!("%{}%", escape_like_pattern(s)))
        },
        (_, FilterValue::Text(s)) => SqlValue::Text(s.clone()),
        (_, FilterValue::Integer(n)) => SqlValue::Integer(*n),
        // json_extract yields 1/0 for JSON booleans
        (_, FilterValue::Bool(b)) => SqlValue::Integer(i64::from(*b)),
    }
}

impl Storage {
    pub fn count_rows(&self, resource: Resource, filter: &ListFilter) -> Result<i64, StorageError> {
        let conn = get_conn(&self.pool)?;
        let (where_sql, params) = where_clause(resource, filter);
        let sql = format!("SELECT COUNT(*) FROM rows {where_sql}");
        let count: i64 = conn.query_row(&sql, params_from_iter(params), |row| row.get(0))?;
        Ok(count)
    }

    pub fn fetch_rows(&self, query: &ListQuery) -> Result<Vec<Value>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let (where_sql, mut params) = where_clause(query.resource(), query.filter());
        let order_expr = column_expr(query.sort().column().name);
        let direction = if query.sort().is_desc() { "DESC" } else { "ASC" };
        let window = query.window();
        params.push(SqlValue::Integer(window.page_size()));
        let limit_n = params.len();
        params.push(SqlValue::Integer(window.offset()));
        let offset_n = params.len();

        let sql = format!(
            "SELECT data FROM rows {where_sql}
             ORDER BY {order_expr} {direction}, id ASC
             LIMIT ?{limit_n} OFFSET ?{offset_n}"
        );

        let mut stmt = conn.prepare(&sql)?;
        let raw: Vec<String> = stmt
            .query_map(params_from_iter(params), |row| row.get::<_, String>(0))?
            .collect::<Result<_, _>>()?;

        raw.iter().map(|data| serde_json::from_str(data).map_err(StorageError::from)).collect()
    }

    pub fn insert_row(&self, resource: Resource, row: Value) -> Result<i64, StorageError> {
        let row = prepare_row(resource, row)?;
        let conn = get_conn(&self.pool)?;
        conn.execute(
            "INSERT INTO rows (resource, data) VALUES (?1, ?2)",
            rusqlite::params![resource.as_str(), serde_json::to_string(&row)?],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// Insert all rows in one transaction; nothing is written if any row is invalid.
    pub fn insert_rows(&self, resource: Resource, rows: Vec<Value>) -> Result<usize, StorageError> {
        let prepared = rows
            .into_iter()
            .map(|row| -> Result<String, StorageError> {
                let row = prepare_row(resource, row)?;
                Ok(serde_json::to_string(&row)?)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut conn = get_conn(&self.pool)?;
        let tx = conn.transaction()?;
        {
            let mut stmt = tx.prepare("INSERT INTO rows (resource, data) VALUES (?1, ?2)")?;
            for data in &prepared {
                stmt.execute(rusqlite::params![resource.as_str(), data])?;
            }
        }
        tx.commit()?;
        tracing::debug!(%resource, rows = prepared.len(), "inserted rows");
        Ok(prepared.len())
    }
}
