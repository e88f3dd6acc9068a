//! Storage layer for roster
//!
//! The [`ListStore`] port plus two implementations: [`MemoryStore`] and the
//! `SQLite`-backed [`Storage`].

mod error;
mod memory;
#[cfg(feature = "sqlite")]
mod migrations;
mod ordering;
#[cfg(feature = "sqlite")]
mod sqlite_async;
#[cfg(feature = "sqlite")]
mod storage;
#[cfg(all(test, feature = "sqlite"))]
mod tests;
mod traits;

pub use error::StorageError;
pub use memory::MemoryStore;
#[cfg(feature = "sqlite")]
pub use storage::Storage;
pub use traits::ListStore;
