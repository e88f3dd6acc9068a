use anyhow::{Result, anyhow};
use roster_core::{FilterOp, ListRequest, PaginationRequest, PaginationResponse, Resource, Sort};

use crate::open_service;

pub(crate) struct ListArgs {
    pub offset: i64,
    pub page_size: Option<i64>,
    pub sort: Option<String>,
    pub desc: bool,
    pub q: Option<String>,
    pub filters: Vec<String>,
}

fn build_request(resource: Resource, args: ListArgs) -> Result<ListRequest> {
    let mut request = ListRequest::new(PaginationRequest::new(args.offset, args.page_size));
    match args.sort {
        Some(column) => request = request.with_sort(Sort { column, desc: args.desc }),
        None if args.desc => {
            let column = resource.default_sort().column().name;
            request = request.with_sort(Sort::desc(column));
        },
        None => {},
    }
    for filter in &args.filters {
        let (column, value) = filter
            .split_once('=')
            .ok_or_else(|| anyhow!("filter must look like column=value, got '{filter}'"))?;
        request = request.with_filter(column.trim(), FilterOp::Eq, value);
    }
    if let Some(q) = args.q {
        request = request.with_search(q);
    }
    Ok(request)
}

/// One-line pager for stderr, e.g. `page 2 of 5, 20 of 93 rows; next: --offset 40`.
fn pager_summary(pagination: &PaginationResponse) -> String {
    if pagination.total_pages() == 0 {
        return format!("no rows at offset {}", pagination.offset);
    }
    let mut summary = format!(
        "page {} of {}, {} of {} rows",
        pagination.current_page(),
        pagination.total_pages(),
        pagination.returned(),
        pagination.total_count,
    );
    if let Some(next) = pagination.next_page() {
        summary.push_str(&format!("; next: --offset {}", next.offset));
    }
    if let Some(previous) = pagination.previous_page() {
        summary.push_str(&format!("; previous: --offset {}", previous.offset));
    }
    summary
}

pub(crate) async fn run(resource: &str, args: ListArgs) -> Result<()> {
    let resource: Resource = resource.parse()?;
    let request = build_request(resource, args)?;
    let page = open_service()?.list(resource, &request).await?;
    println!("{}", serde_json::to_string_pretty(&page)?);
    eprintln!("{}", pager_summary(&page.pagination));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> ListArgs {
        ListArgs { offset: 0, page_size: None, sort: None, desc: false, q: None, filters: vec![] }
    }

    #[test]
    fn test_filters_split_on_first_equals() {
        let request = build_request(
            Resource::WikiPages,
            ListArgs { filters: vec!["title=a=b".into()], ..args() },
        )
        .unwrap();
        assert_eq!(request.filters[0].column, "title");
        assert_eq!(request.filters[0].value, "a=b");
    }

    #[test]
    fn test_filter_without_equals_is_rejected() {
        let err =
            build_request(Resource::Citizens, ListArgs { filters: vec!["job".into()], ..args() })
                .unwrap_err();
        assert!(err.to_string().contains("column=value"));
    }

    #[test]
    fn test_desc_without_sort_uses_default_column() {
        let request =
            build_request(Resource::Citizens, ListArgs { desc: true, ..args() }).unwrap();
        assert_eq!(request.sort, Some(Sort::desc("lastname")));
    }

    #[test]
    fn test_pager_summary_middle_page() {
        let pagination = PaginationResponse { total_count: 93, offset: 20, end: 40, page_size: 20 };
        assert_eq!(
            pager_summary(&pagination),
            "page 2 of 5, 20 of 93 rows; next: --offset 40; previous: --offset 0"
        );
    }

    #[test]
    fn test_pager_summary_last_page() {
        let pagination = PaginationResponse { total_count: 93, offset: 80, end: 93, page_size: 20 };
        assert_eq!(pager_summary(&pagination), "page 5 of 5, 13 of 93 rows; previous: --offset 60");
    }

    #[test]
    fn test_pager_summary_empty_result() {
        let pagination = PaginationResponse { total_count: 0, offset: 0, end: 0, page_size: 20 };
        assert_eq!(pager_summary(&pagination), "no rows at offset 0");
    }
}
