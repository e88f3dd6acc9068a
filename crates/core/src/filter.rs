//! Typed filter conditions for list requests.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::column::{Column, ColumnKind};
use crate::constants::MAX_FILTERS;
use crate::error::PaginationError;
use crate::resource::Resource;
use crate::timestamp::normalize_timestamp;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterOp {
    /// Exact match.
    Eq,
    /// ASCII case-insensitive substring match; text columns only.
    Contains,
}

impl fmt::Display for FilterOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Eq => "eq",
            Self::Contains => "contains",
        })
    }
}

/// A filter operand, typed by the column it applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    Text(String),
    Integer(i64),
    Bool(bool),
}

impl FilterValue {
    fn parse(column: &'static Column, raw: &str) -> Result<Self, PaginationError> {
        let invalid = || PaginationError::InvalidFilterValue {
            column: column.name,
            kind: column.kind,
            value: raw.to_owned(),
        };
        match column.kind {
            ColumnKind::Text => Ok(Self::Text(raw.to_owned())),
            ColumnKind::Integer => raw.trim().parse().map(Self::Integer).map_err(|_| invalid()),
            ColumnKind::Bool => match raw.trim().to_ascii_lowercase().as_str() {
                "true" | "1" => Ok(Self::Bool(true)),
                "false" | "0" => Ok(Self::Bool(false)),
                _ => Err(invalid()),
            },
            ColumnKind::Timestamp => normalize_timestamp(raw).map(Self::Text).map_err(|_| invalid()),
        }
    }

    fn matches(&self, op: FilterOp, value: Option<&Value>) -> bool {
        let Some(value) = value else {
            return false;
        };
        match (op, self) {
            (FilterOp::Eq, Self::Text(expected)) => value.as_str() == Some(expected.as_str()),
            (FilterOp::Eq, Self::Integer(expected)) => value.as_i64() == Some(*expected),
            (FilterOp::Eq, Self::Bool(expected)) => value.as_bool() == Some(*expected),
            (FilterOp::Contains, Self::Text(needle)) => value
                .as_str()
                .is_some_and(|s| s.to_ascii_lowercase().contains(&needle.to_ascii_lowercase())),
            (FilterOp::Contains, _) => false,
        }
    }
}

/// One validated condition; `column` is always a declared filterable column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    column: &'static Column,
    op: FilterOp,
    value: FilterValue,
}

impl Condition {
    #[must_use]
    pub const fn column(&self) -> &'static Column {
        self.column
    }

    #[must_use]
    pub const fn op(&self) -> FilterOp {
        self.op
    }

    #[must_use]
    pub const fn value(&self) -> &FilterValue {
        &self.value
    }
}

/// Conjunction of conditions over one resource.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFilter {
    conditions: Vec<Condition>,
}

impl ListFilter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and append a condition.
    pub fn add(
        &mut self,
        resource: Resource,
        column: &str,
        op: FilterOp,
        raw: &str,
    ) -> Result<(), PaginationError> {
        if self.conditions.len() >= MAX_FILTERS {
            return Err(PaginationError::TooManyFilters(self.conditions.len() + 1));
        }
        let column = resource.column(column).filter(|c| c.filterable).ok_or_else(|| {
            PaginationError::UnknownFilterColumn { resource, column: column.to_owned() }
        })?;
        if op == FilterOp::Contains && column.kind != ColumnKind::Text {
            return Err(PaginationError::UnsupportedFilterOp {
                column: column.name,
                kind: column.kind,
                op,
            });
        }
        let value = FilterValue::parse(column, raw)?;
        self.conditions.push(Condition { column, op, value });
        Ok(())
    }

    /// Builder form of [`ListFilter::add`].
    pub fn with(
        mut self,
        resource: Resource,
        column: &str,
        op: FilterOp,
        raw: &str,
    ) -> Result<Self, PaginationError> {
        self.add(resource, column, op, raw)?;
        Ok(self)
    }

    #[must_use]
    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Evaluate against a row in JSON form.
    #[must_use]
    pub fn matches(&self, row: &Value) -> bool {
        self.conditions.iter().all(|c| c.value.matches(c.op, row.get(c.column.name)))
    }
}
