//! Query-string form of a list request.

use roster_core::{FilterOp, ListRequest, PaginationRequest, Resource, Sort};

use crate::api_error::ApiError;

fn parse_int(key: &str, value: &str) -> Result<i64, ApiError> {
    value
        .trim()
        .parse()
        .map_err(|_| ApiError::BadRequest(format!("{key} must be an integer, got '{value}'")))
}

fn parse_flag(key: &str, value: &str) -> Result<bool, ApiError> {
    match value.trim() {
        "" | "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(ApiError::BadRequest(format!("{key} must be true or false, got '{value}'"))),
    }
}

/// Build a [`ListRequest`] from `?offset=&pageSize=&sort=&desc=&q=&<column>=`.
///
/// Any key without a fixed meaning becomes an `eq` filter on that column.
/// Pagination is always present: a missing `offset` means 0 and a missing
/// page size means the resource default. `desc` without `sort` applies to the
/// resource's default sort column.
pub fn list_request_from_params(
    resource: Resource,
    params: &[(String, String)],
) -> Result<ListRequest, ApiError> {
    let mut offset = 0;
    let mut page_size = None;
    let mut sort_column = None;
    let mut desc = None;
    let mut search = None;
    let mut filters = Vec::new();

    for (key, value) in params {
        match key.as_str() {
            "offset" => offset = parse_int(key, value)?,
            "pageSize" | "page_size" => page_size = Some(parse_int(key, value)?),
            "sort" => sort_column = Some(value.clone()),
            "desc" => desc = Some(parse_flag(key, value)?),
            "q" => search = Some(value.clone()),
            column => filters.push((column, value)),
        }
    }

    let mut request = ListRequest::new(PaginationRequest::new(offset, page_size));
    let sort = match (sort_column, desc) {
        (Some(column), desc) => Some(Sort { column, desc: desc.unwrap_or(false) }),
        (None, Some(desc)) => {
            Some(Sort { column: resource.default_sort().column().name.to_owned(), desc })
        },
        (None, None) => None,
    };
    if let Some(sort) = sort {
        request = request.with_sort(sort);
    }
    for (column, value) in filters {
        request = request.with_filter(column, FilterOp::Eq, value.as_str());
    }
    if let Some(search) = search {
        request = request.with_search(search);
    }
    Ok(request)
}
