//! Core types for roster
//!
//! The pagination and sorting contract shared by every list operation, the
//! catalog of listable resources, and the row types those lists return.

mod column;
mod constants;
mod env_config;
mod error;
mod filter;
mod list;
mod page;
mod pagination;
mod policy;
mod query;
mod resource;
mod rows;
mod timestamp;

pub use column::*;
pub use constants::*;
pub use env_config::*;
pub use error::*;
pub use filter::*;
pub use list::*;
pub use page::*;
pub use pagination::*;
pub use policy::*;
pub use query::*;
pub use resource::*;
pub use rows::*;
pub use timestamp::*;
