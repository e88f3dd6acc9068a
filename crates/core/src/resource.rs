//! The closed set of listable resources and their column schemas.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::column::Column;
use crate::error::CoreError;
use crate::pagination::{PageLimits, SortSpec};

static CITIZEN_COLUMNS: [Column; 10] = [
    Column::text("identifier"),
    Column::text("firstname"),
    Column::text("lastname"),
    Column::text("dateofbirth"),
    Column::text("sex").unsortable(),
    Column::text("job"),
    Column::int32("jobGrade"),
    Column::text("phoneNumber").unsortable().nullable(),
    Column::boolean("wanted"),
    Column::timestamp("createdAt"),
];

static VEHICLE_COLUMNS: [Column; 6] = [
    Column::text("plate"),
    Column::text("model"),
    Column::text("vehicleType"),
    Column::text("ownerIdentifier").unsortable(),
    Column::boolean("wanted"),
    Column::timestamp("createdAt"),
];

static DOMAIN_COLUMNS: [Column; 6] = [
    Column::integer("id"),
    Column::text("name"),
    Column::text("tld"),
    Column::boolean("active"),
    Column::text("ownerIdentifier").unsortable(),
    Column::timestamp("createdAt"),
];

static WIKI_PAGE_COLUMNS: [Column; 8] = [
    Column::integer("id"),
    Column::text("job"),
    Column::text("path"),
    Column::text("title"),
    Column::text("description").unsortable().unfilterable(),
    Column::boolean("public"),
    Column::timestamp("createdAt"),
    Column::timestamp("updatedAt").nullable(),
];

static CONDUCT_COLUMNS: [Column; 7] = [
    Column::integer("id"),
    Column::text("job"),
    Column::text("entryType"),
    Column::text("targetIdentifier"),
    Column::text("creatorIdentifier"),
    Column::text("message").unsortable(),
    Column::timestamp("createdAt"),
];

static ACCOUNT_COLUMNS: [Column; 5] = [
    Column::integer("id"),
    Column::text("license"),
    Column::text("username"),
    Column::boolean("enabled"),
    Column::timestamp("createdAt"),
];

/// A resource served by a `List*` operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resource {
    Citizens,
    Vehicles,
    Domains,
    WikiPages,
    Conduct,
    Accounts,
}

impl Resource {
    pub const ALL: [Self; 6] = [
        Self::Citizens,
        Self::Vehicles,
        Self::Domains,
        Self::WikiPages,
        Self::Conduct,
        Self::Accounts,
    ];

    /// Stable identifier used in URLs, storage keys and env var names.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Citizens => "citizens",
            Self::Vehicles => "vehicles",
            Self::Domains => "domains",
            Self::WikiPages => "wiki_pages",
            Self::Conduct => "conduct",
            Self::Accounts => "accounts",
        }
    }

    #[must_use]
    pub fn columns(self) -> &'static [Column] {
        match self {
            Self::Citizens => &CITIZEN_COLUMNS,
            Self::Vehicles => &VEHICLE_COLUMNS,
            Self::Domains => &DOMAIN_COLUMNS,
            Self::WikiPages => &WIKI_PAGE_COLUMNS,
            Self::Conduct => &CONDUCT_COLUMNS,
            Self::Accounts => &ACCOUNT_COLUMNS,
        }
    }

    #[must_use]
    pub fn column(self, name: &str) -> Option<&'static Column> {
        self.columns().iter().find(|c| c.name == name)
    }

    /// Text column matched by the free-text `search` field of a list request.
    #[must_use]
    pub const fn search_column(self) -> &'static str {
        match self {
            Self::Citizens => "lastname",
            Self::Vehicles => "plate",
            Self::Domains => "name",
            Self::WikiPages => "title",
            Self::Conduct => "message",
            Self::Accounts => "username",
        }
    }

    const fn default_order(self) -> (&'static str, bool) {
        match self {
            Self::Citizens => ("lastname", false),
            Self::Vehicles => ("plate", false),
            Self::WikiPages => ("path", false),
            Self::Domains | Self::Conduct | Self::Accounts => ("createdAt", true),
        }
    }

    /// Ordering applied when a request carries no sort.
    #[must_use]
    pub fn default_sort(self) -> SortSpec {
        let (name, desc) = self.default_order();
        let columns = self.columns();
        let column = columns.iter().find(|c| c.name == name).unwrap_or(&columns[0]);
        SortSpec::new(column, desc)
    }

    /// Built-in page limits, before any environment override.
    #[must_use]
    pub const fn default_limits(self) -> PageLimits {
        match self {
            Self::Citizens | Self::Vehicles | Self::Domains | Self::Conduct => {
                PageLimits::const_new(20, 100)
            },
            Self::WikiPages => PageLimits::const_new(50, 2000),
            Self::Accounts => PageLimits::const_new(20, 500),
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Resource {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|r| r.as_str() == normalized)
            .ok_or_else(|| CoreError::UnknownResource(s.to_owned()))
    }
}
