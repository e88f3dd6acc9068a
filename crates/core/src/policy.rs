//! Per-resource page limits, with environment overrides.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::column::Column;
use crate::env_config::{env_var_name, parse_with_default};
use crate::pagination::{PageLimits, Sort};
use crate::resource::Resource;

/// Effective pagination policy of one resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourcePolicy {
    resource: Resource,
    limits: PageLimits,
}

/// Catalog entry describing how a resource can be listed.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceDescriptor {
    pub resource: Resource,
    pub limits: PageLimits,
    pub columns: &'static [Column],
    pub search_column: &'static str,
    pub default_sort: Sort,
}

impl ResourcePolicy {
    #[must_use]
    pub const fn new(resource: Resource, limits: PageLimits) -> Self {
        Self { resource, limits }
    }

    #[must_use]
    pub const fn builtin(resource: Resource) -> Self {
        Self::new(resource, resource.default_limits())
    }

    /// Built-in limits overridden by `ROSTER_<RESOURCE>_DEFAULT_PAGE_SIZE`
    /// and `ROSTER_<RESOURCE>_MAX_PAGE_SIZE`.
    #[must_use]
    pub fn from_env(resource: Resource) -> Self {
        Self::from_lookup(resource, |var| std::env::var(var).ok())
    }

    /// Like [`ResourcePolicy::from_env`] with a custom variable source.
    ///
    /// An override pair that does not form valid limits is ignored with a warning.
    pub fn from_lookup(resource: Resource, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let builtin = resource.default_limits();
        let default_var = env_var_name(&[resource.as_str(), "default_page_size"]);
        let max_var = env_var_name(&[resource.as_str(), "max_page_size"]);
        let default_page_size =
            parse_with_default(&default_var, lookup(&default_var), builtin.default_page_size());
        let max_page_size = parse_with_default(&max_var, lookup(&max_var), builtin.max_page_size());

        let limits = match PageLimits::new(default_page_size, max_page_size) {
            Ok(limits) => limits,
            Err(e) => {
                tracing::warn!(%resource, error = %e, "ignoring page limit override");
                builtin
            },
        };
        Self::new(resource, limits)
    }

    #[must_use]
    pub const fn resource(&self) -> Resource {
        self.resource
    }

    #[must_use]
    pub const fn limits(&self) -> PageLimits {
        self.limits
    }

    #[must_use]
    pub fn describe(&self) -> ResourceDescriptor {
        ResourceDescriptor {
            resource: self.resource,
            limits: self.limits,
            columns: self.resource.columns(),
            search_column: self.resource.search_column(),
            default_sort: self.resource.default_sort().to_sort(),
        }
    }
}

/// Policies for every resource. Always complete.
#[derive(Debug, Clone)]
pub struct PolicyRegistry {
    policies: BTreeMap<Resource, ResourcePolicy>,
}

impl PolicyRegistry {
    #[must_use]
    pub fn builtin() -> Self {
        Self::build(ResourcePolicy::builtin)
    }

    #[must_use]
    pub fn from_env() -> Self {
        Self::build(ResourcePolicy::from_env)
    }

    fn build(policy: impl Fn(Resource) -> ResourcePolicy) -> Self {
        Self { policies: Resource::ALL.into_iter().map(|r| (r, policy(r))).collect() }
    }

    #[must_use]
    pub fn get(&self, resource: Resource) -> ResourcePolicy {
        self.policies.get(&resource).copied().unwrap_or_else(|| ResourcePolicy::builtin(resource))
    }

    #[must_use]
    pub fn with_limits(mut self, resource: Resource, limits: PageLimits) -> Self {
        self.policies.insert(resource, ResourcePolicy::new(resource, limits));
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &ResourcePolicy> {
        self.policies.values()
    }
}

impl Default for PolicyRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
