//! Migration v2: expression indexes for the default orderings

pub(super) const SQL: &str = "
CREATE INDEX IF NOT EXISTS idx_rows_created_at
    ON rows(resource, json_extract(data, '$.createdAt'), id);
CREATE INDEX IF NOT EXISTS idx_rows_lastname
    ON rows(resource, json_extract(data, '$.lastname'), id);
CREATE INDEX IF NOT EXISTS idx_rows_plate
    ON rows(resource, json_extract(data, '$.plate'), id);
CREATE INDEX IF NOT EXISTS idx_rows_path
    ON rows(resource, json_extract(data, '$.path'), id);
";
