use crate::error::PaginationError;
use crate::filter::{FilterOp, ListFilter};
use crate::list::{FilterOperator, ListRequest};
use crate::pagination::{PageWindow, SortSpec};
use crate::policy::ResourcePolicy;
use crate::resource::Resource;

/// A list request fully validated against a resource policy.
///
/// Holding one means every check of the contract has passed; stores only
/// ever receive this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    resource: Resource,
    window: PageWindow,
    sort: SortSpec,
    filter: ListFilter,
}

impl ListQuery {
    #[must_use]
    pub const fn new(resource: Resource, window: PageWindow, sort: SortSpec, filter: ListFilter) -> Self {
        Self { resource, window, sort, filter }
    }

    /// Validate `request`: pagination first, then sort, then filters.
    pub fn prepare(policy: &ResourcePolicy, request: &ListRequest) -> Result<Self, PaginationError> {
        let resource = policy.resource();
        let pagination = request.pagination.ok_or(PaginationError::MissingPagination)?;
        let window = pagination.window(policy.limits())?;

        let sort = match &request.sort {
            Some(sort) => sort.resolve(resource)?,
            None => resource.default_sort(),
        };

        let mut filter = ListFilter::new();
        for f in &request.filters {
            let op = FilterOperator::try_from(f.op)
                .map_err(|_| PaginationError::UnknownFilterOp(f.op))?;
            filter.add(resource, &f.column, op.into(), &f.value)?;
        }
        if let Some(search) = request.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            filter.add(resource, resource.search_column(), FilterOp::Contains, search)?;
        }

        Ok(Self { resource, window, sort, filter })
    }

    #[must_use]
    pub const fn resource(&self) -> Resource {
        self.resource
    }

    #[must_use]
    pub const fn window(&self) -> PageWindow {
        self.window
    }

    #[must_use]
    pub const fn sort(&self) -> &SortSpec {
        &self.sort
    }

    #[must_use]
    pub const fn filter(&self) -> &ListFilter {
        &self.filter
    }
}
