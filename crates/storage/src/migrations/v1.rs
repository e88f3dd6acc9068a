//! Migration v1: rows table

pub(super) const SQL: &str = "
CREATE TABLE IF NOT EXISTS rows (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    resource TEXT NOT NULL,
    data TEXT NOT NULL CHECK (json_valid(data)),
    inserted_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
);

CREATE INDEX IF NOT EXISTS idx_rows_resource ON rows(resource, id);
";
