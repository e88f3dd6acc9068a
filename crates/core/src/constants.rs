//! Shared constants for roster.

/// Longest accepted sort column name, in characters.
pub const MAX_SORT_COLUMN_LEN: usize = 64;

/// Maximum number of filter conditions in one list request (DoS protection).
pub const MAX_FILTERS: usize = 16;

/// Prefix of every environment variable roster reads.
pub const ENV_PREFIX: &str = "ROSTER";

/// `SQLite` connection pool: default maximum connections.
pub const DEFAULT_DB_POOL_SIZE: u32 = 8;

/// Content type of protobuf request and response bodies.
pub const PROTOBUF_CONTENT_TYPE: &str = "application/x-protobuf";

/// Maximum rows accepted by one import call.
pub const MAX_IMPORT_ROWS: usize = 10_000;
