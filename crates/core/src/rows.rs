//! Row types returned by the list operations.
//!
//! Each row is both a protobuf message (fixed tags) and a serde type whose
//! camelCase JSON keys match the resource's column names.

use prost::Message;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::column::{Column, ColumnKind};
use crate::error::CoreError;
use crate::resource::Resource;
use crate::timestamp::normalize_timestamp;

/// A row type served by exactly one resource.
pub trait Row: Message + Default + Clone + Serialize + DeserializeOwned + 'static {
    const RESOURCE: Resource;
}

#[derive(Clone, PartialEq, Eq, Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Citizen {
    #[prost(string, tag = "1")]
    pub identifier: String,
    #[prost(string, tag = "2")]
    pub firstname: String,
    #[prost(string, tag = "3")]
    pub lastname: String,
    #[prost(string, tag = "4")]
    pub dateofbirth: String,
    #[prost(string, tag = "5")]
    pub sex: String,
    #[prost(string, tag = "6")]
    pub job: String,
    #[prost(int32, tag = "7")]
    pub job_grade: i32,
    #[prost(string, optional, tag = "8")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[prost(bool, tag = "9")]
    pub wanted: bool,
    #[prost(string, tag = "10")]
    pub created_at: String,
}

impl Row for Citizen {
    const RESOURCE: Resource = Resource::Citizens;
}

#[derive(Clone, PartialEq, Eq, Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Vehicle {
    #[prost(string, tag = "1")]
    pub plate: String,
    #[prost(string, tag = "2")]
    pub model: String,
    #[prost(string, tag = "3")]
    pub vehicle_type: String,
    #[prost(string, tag = "4")]
    pub owner_identifier: String,
    #[prost(bool, tag = "5")]
    pub wanted: bool,
    #[prost(string, tag = "6")]
    pub created_at: String,
}

impl Row for Vehicle {
    const RESOURCE: Resource = Resource::Vehicles;
}

/// Internet domain registered in the in-game network.
#[derive(Clone, PartialEq, Eq, Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Domain {
    #[prost(int64, tag = "1")]
    pub id: i64,
    #[prost(string, tag = "2")]
    pub name: String,
    #[prost(string, tag = "3")]
    pub tld: String,
    #[prost(bool, tag = "4")]
    pub active: bool,
    #[prost(string, tag = "5")]
    pub owner_identifier: String,
    #[prost(string, tag = "6")]
    pub created_at: String,
}

impl Row for Domain {
    const RESOURCE: Resource = Resource::Domains;
}

#[derive(Clone, PartialEq, Eq, Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WikiPage {
    #[prost(int64, tag = "1")]
    pub id: i64,
    #[prost(string, tag = "2")]
    pub job: String,
    #[prost(string, tag = "3")]
    pub path: String,
    #[prost(string, tag = "4")]
    pub title: String,
    #[prost(string, tag = "5")]
    pub description: String,
    #[prost(bool, tag = "6")]
    pub public: bool,
    #[prost(string, tag = "7")]
    pub created_at: String,
    #[prost(string, optional, tag = "8")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Row for WikiPage {
    const RESOURCE: Resource = Resource::WikiPages;
}

/// Entry in a job's conduct register (notes, warnings, suspensions).
#[derive(Clone, PartialEq, Eq, Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConductEntry {
    #[prost(int64, tag = "1")]
    pub id: i64,
    #[prost(string, tag = "2")]
    pub job: String,
    #[prost(string, tag = "3")]
    pub entry_type: String,
    #[prost(string, tag = "4")]
    pub target_identifier: String,
    #[prost(string, tag = "5")]
    pub creator_identifier: String,
    #[prost(string, tag = "6")]
    pub message: String,
    #[prost(string, tag = "7")]
    pub created_at: String,
}

impl Row for ConductEntry {
    const RESOURCE: Resource = Resource::Conduct;
}

#[derive(Clone, PartialEq, Eq, Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Account {
    #[prost(int64, tag = "1")]
    pub id: i64,
    #[prost(string, tag = "2")]
    pub license: String,
    #[prost(string, tag = "3")]
    pub username: String,
    #[prost(bool, tag = "4")]
    pub enabled: bool,
    #[prost(string, tag = "5")]
    pub created_at: String,
}

impl Row for Account {
    const RESOURCE: Resource = Resource::Accounts;
}

/// Check a JSON row for `resource` and canonicalize its timestamp columns.
///
/// Every declared column present in the row must hold a value its typed row
/// field can decode; `null` only where the field is optional. Missing columns
/// are left alone and decode to their defaults.
pub fn prepare_row(resource: Resource, mut row: Value) -> Result<Value, CoreError> {
    let Some(object) = row.as_object_mut() else {
        return Err(CoreError::RowNotObject { resource });
    };
    for column in resource.columns() {
        let Some(value) = object.get_mut(column.name) else {
            continue;
        };
        if !column.accepts(value) {
            return Err(CoreError::ColumnType {
                resource,
                column: column.name,
                expected: expected_value(column),
                value: value.to_string(),
            });
        }
        if column.kind == ColumnKind::Timestamp {
            if let Value::String(raw) = value {
                *raw = normalize_timestamp(raw)?;
            }
        }
    }
    Ok(row)
}

const fn expected_value(column: &Column) -> &'static str {
    match column.kind {
        ColumnKind::Text => "a string",
        ColumnKind::Timestamp => "a timestamp string",
        ColumnKind::Integer if column.integer_range.1 == i32::MAX as i64 => "a 32-bit integer",
        ColumnKind::Integer => "an integer",
        ColumnKind::Bool => "a boolean",
    }
}
