//! Service layer for roster
//!
//! Applies the pagination contract between transports (HTTP, CLI) and the
//! row store.

#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]

mod error;
mod grpc;
mod list_service;

pub use error::ServiceError;
pub use list_service::ListService;
