//! Column schema of a listable resource.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

/// Value type of a column as it appears in a row's JSON form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    Text,
    Integer,
    Bool,
    /// UTC RFC 3339 string with millisecond precision; sorts lexically.
    Timestamp,
}

impl ColumnKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Integer => "integer",
            Self::Bool => "bool",
            Self::Timestamp => "timestamp",
        }
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One column a resource exposes for sorting and filtering.
///
/// Names are `'static` and match the camelCase JSON keys of the row type, so
/// anything holding a `&'static Column` refers to a whitelisted identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Column {
    pub name: &'static str,
    pub kind: ColumnKind,
    pub sortable: bool,
    pub filterable: bool,
    /// Whether a row may hold `null` here; only for optional row fields.
    pub nullable: bool,
    /// Inclusive range accepted by an integer column.
    #[serde(skip)]
    pub integer_range: (i64, i64),
}

impl Column {
    const fn new(name: &'static str, kind: ColumnKind) -> Self {
        Self {
            name,
            kind,
            sortable: true,
            filterable: true,
            nullable: false,
            integer_range: (i64::MIN, i64::MAX),
        }
    }

    #[must_use]
    pub const fn text(name: &'static str) -> Self {
        Self::new(name, ColumnKind::Text)
    }

    #[must_use]
    pub const fn integer(name: &'static str) -> Self {
        Self::new(name, ColumnKind::Integer)
    }

    /// Integer column backed by a 32-bit row field.
    #[must_use]
    pub const fn int32(name: &'static str) -> Self {
        let mut column = Self::new(name, ColumnKind::Integer);
        column.integer_range = (i32::MIN as i64, i32::MAX as i64);
        column
    }

    #[must_use]
    pub const fn boolean(name: &'static str) -> Self {
        Self::new(name, ColumnKind::Bool)
    }

    #[must_use]
    pub const fn timestamp(name: &'static str) -> Self {
        Self::new(name, ColumnKind::Timestamp)
    }

    #[must_use]
    pub const fn unsortable(mut self) -> Self {
        self.sortable = false;
        self
    }

    #[must_use]
    pub const fn unfilterable(mut self) -> Self {
        self.filterable = false;
        self
    }

    #[must_use]
    pub const fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// Whether `value` can be stored in this column.
    ///
    /// Text and timestamp columns take strings, integer columns take whole
    /// numbers inside [`Column::integer_range`], bool columns take booleans.
    #[must_use]
    pub fn accepts(&self, value: &Value) -> bool {
        match (self.kind, value) {
            (_, Value::Null) => self.nullable,
            (ColumnKind::Text | ColumnKind::Timestamp, Value::String(_)) => true,
            (ColumnKind::Integer, Value::Number(n)) => n
                .as_i64()
                .is_some_and(|n| n >= self.integer_range.0 && n <= self.integer_range.1),
            (ColumnKind::Bool, Value::Bool(_)) => true,
            _ => false,
        }
    }
}
