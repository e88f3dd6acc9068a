//! Response types (Serialize)

use roster_core::ResourceDescriptor;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct VersionResponse {
    pub version: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ResourceCatalog {
    pub resources: Vec<ResourceDescriptor>,
}
