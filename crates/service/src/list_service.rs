use std::sync::Arc;

use prost::Message;

use roster_core::{
    ListAccountsResponse, ListCitizensResponse, ListConductEntriesResponse, ListDomainsResponse,
    ListQuery, ListRequest, ListResponse, ListVehiclesResponse, ListWikiPagesResponse,
    MAX_IMPORT_ROWS, Page, PolicyRegistry, Resource, ResourcePolicy, Row,
};
use roster_storage::ListStore;
use serde_json::Value;

use crate::ServiceError;

/// Serves every `List*` operation over one row store.
pub struct ListService {
    store: Arc<dyn ListStore>,
    policies: PolicyRegistry,
}

impl ListService {
    #[must_use]
    pub fn new(store: Arc<dyn ListStore>, policies: PolicyRegistry) -> Self {
        Self { store, policies }
    }

    #[must_use]
    pub fn policy(&self, resource: Resource) -> ResourcePolicy {
        self.policies.get(resource)
    }

    #[must_use]
    pub const fn policies(&self) -> &PolicyRegistry {
        &self.policies
    }

    /// Validate `request`, count the matching rows, then fetch the window.
    ///
    /// Validation errors are returned before the store is touched. When the
    /// window cannot hold a row (`pageSize == 0` or `offset >= totalCount`)
    /// only the count runs.
    pub async fn list(
        &self,
        resource: Resource,
        request: &ListRequest,
    ) -> Result<Page<Value>, ServiceError> {
        let query = ListQuery::prepare(&self.policies.get(resource), request)?;
        let window = query.window();

        let total_count = self.store.count(resource, query.filter()).await.inspect_err(|e| {
            tracing::warn!(%resource, error = %e, "count failed");
        })?;

        let mut rows = if window.is_exhausted(total_count) {
            Vec::new()
        } else {
            self.store.fetch(&query).await.inspect_err(|e| {
                tracing::warn!(%resource, error = %e, "fetch failed");
            })?
        };
        rows.truncate(window.limit_usize());

        let pagination = window.respond(total_count, rows.len());
        tracing::debug!(
            %resource,
            total_count,
            offset = pagination.offset,
            page_size = pagination.page_size,
            end = pagination.end,
            sort = query.sort().column().name,
            desc = query.sort().is_desc(),
            filters = query.filter().conditions().len(),
            "list"
        );
        Ok(Page::new(pagination, rows))
    }

    /// [`ListService::list`] decoding rows into their typed form.
    pub async fn list_typed<T: Row>(&self, request: &ListRequest) -> Result<Page<T>, ServiceError> {
        let page = self.list(T::RESOURCE, request).await?;
        Ok(page.try_map(serde_json::from_value)?)
    }

    /// Run a list and encode the resource's `List*Response` message.
    pub async fn list_encoded(
        &self,
        resource: Resource,
        request: &ListRequest,
    ) -> Result<Vec<u8>, ServiceError> {
        match resource {
            Resource::Citizens => self.encode::<ListCitizensResponse>(request).await,
            Resource::Vehicles => self.encode::<ListVehiclesResponse>(request).await,
            Resource::Domains => self.encode::<ListDomainsResponse>(request).await,
            Resource::WikiPages => self.encode::<ListWikiPagesResponse>(request).await,
            Resource::Conduct => self.encode::<ListConductEntriesResponse>(request).await,
            Resource::Accounts => self.encode::<ListAccountsResponse>(request).await,
        }
    }

    async fn encode<R: ListResponse>(&self, request: &ListRequest) -> Result<Vec<u8>, ServiceError> {
        let page = self.list_typed::<R::Row>(request).await?;
        Ok(R::from_page(page).encode_to_vec())
    }

    pub async fn insert<T: Row>(&self, row: &T) -> Result<i64, ServiceError> {
        let value = serde_json::to_value(row)?;
        Ok(self.store.insert(T::RESOURCE, value).await?)
    }

    /// Bulk-load rows given in JSON form. All rows are checked before any is written.
    pub async fn import(&self, resource: Resource, rows: Vec<Value>) -> Result<usize, ServiceError> {
        if rows.len() > MAX_IMPORT_ROWS {
            return Err(ServiceError::TooManyRows { got: rows.len(), max: MAX_IMPORT_ROWS });
        }
        let written = self.store.insert_many(resource, rows).await?;
        tracing::info!(%resource, written, "rows imported");
        Ok(written)
    }
}
