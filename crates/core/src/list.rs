//! Generic list request and the per-resource list responses.

use prost::{Enumeration, Message};

use crate::filter::FilterOp;
use crate::page::Page;
use crate::pagination::{PaginationRequest, PaginationResponse, Sort};
use crate::rows::{Account, Citizen, ConductEntry, Domain, Row, Vehicle, WikiPage};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Enumeration)]
#[repr(i32)]
pub enum FilterOperator {
    Eq = 0,
    Contains = 1,
}

impl From<FilterOperator> for FilterOp {
    fn from(op: FilterOperator) -> Self {
        match op {
            FilterOperator::Eq => Self::Eq,
            FilterOperator::Contains => Self::Contains,
        }
    }
}

impl From<FilterOp> for FilterOperator {
    fn from(op: FilterOp) -> Self {
        match op {
            FilterOp::Eq => Self::Eq,
            FilterOp::Contains => Self::Contains,
        }
    }
}

#[derive(Clone, PartialEq, Eq, Message)]
pub struct Filter {
    #[prost(string, tag = "1")]
    pub column: String,
    #[prost(enumeration = "FilterOperator", tag = "2")]
    pub op: i32,
    #[prost(string, tag = "3")]
    pub value: String,
}

/// Request body shared by every `List*` operation.
#[derive(Clone, PartialEq, Eq, Message)]
pub struct ListRequest {
    #[prost(message, optional, tag = "1")]
    pub pagination: Option<PaginationRequest>,
    #[prost(message, optional, tag = "2")]
    pub sort: Option<Sort>,
    #[prost(message, repeated, tag = "3")]
    pub filters: Vec<Filter>,
    /// Free-text match on the resource's search column.
    #[prost(string, optional, tag = "4")]
    pub search: Option<String>,
}

impl ListRequest {
    #[must_use]
    pub fn new(pagination: PaginationRequest) -> Self {
        Self { pagination: Some(pagination), ..Self::default() }
    }

    #[must_use]
    pub fn with_sort(mut self, sort: Sort) -> Self {
        self.sort = Some(sort);
        self
    }

    #[must_use]
    pub fn with_filter(mut self, column: impl Into<String>, op: FilterOp, value: impl Into<String>) -> Self {
        self.filters.push(Filter {
            column: column.into(),
            op: FilterOperator::from(op).into(),
            value: value.into(),
        });
        self
    }

    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }
}

/// A `List<Resource>Response` message: pagination plus typed rows.
pub trait ListResponse: Message + Default {
    type Row: Row;

    fn from_page(page: Page<Self::Row>) -> Self;

    fn into_page(self) -> Page<Self::Row>;
}

macro_rules! list_response {
    ($(#[$meta:meta])* $name:ident, $row:ty) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Message)]
        pub struct $name {
            #[prost(message, optional, tag = "1")]
            pub pagination: Option<PaginationResponse>,
            #[prost(message, repeated, tag = "2")]
            pub rows: Vec<$row>,
        }

        impl ListResponse for $name {
            type Row = $row;

            fn from_page(page: Page<$row>) -> Self {
                Self { pagination: Some(page.pagination), rows: page.rows }
            }

            fn into_page(self) -> Page<$row> {
                Page::new(self.pagination.unwrap_or_default(), self.rows)
            }
        }
    };
}

list_response!(ListCitizensResponse, Citizen);
list_response!(ListVehiclesResponse, Vehicle);
list_response!(ListDomainsResponse, Domain);
list_response!(ListWikiPagesResponse, WikiPage);
list_response!(
    /// Conduct register entries.
    ListConductEntriesResponse,
    ConductEntry
);
list_response!(ListAccountsResponse, Account);
