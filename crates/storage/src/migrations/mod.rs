use rusqlite::Connection;

use crate::error::StorageError;

mod v1;
mod v2;

pub const SCHEMA_VERSION: i32 = 2;

fn step(name: &str) -> impl FnOnce(rusqlite::Error) -> StorageError + '_ {
    move |err| StorageError::Migration(format!("{name}: {err}"))
}

pub fn run_migrations(conn: &Connection) -> Result<(), StorageError> {
    let current_version: i32 = conn
        .pragma_query_value(None, "user_version", |row| row.get(0))
        .map_err(step("read user_version"))?;

    tracing::info!("Database schema version: {} (target: {})", current_version, SCHEMA_VERSION);

    if current_version < 1i32 {
        tracing::info!("Running migration v1: rows table");
        conn.execute_batch(v1::SQL).map_err(step("v1"))?;
    }

    if current_version < 2i32 {
        tracing::info!("Running migration v2: default sort indexes");
        conn.execute_batch(v2::SQL).map_err(step("v2"))?;
    }

    if current_version < SCHEMA_VERSION {
        conn.pragma_update(None, "user_version", SCHEMA_VERSION)
            .map_err(step("update user_version"))?;
    }

    Ok(())
}
