//! Behavior every `ListStore` must share, run against both stores.

use roster_core::{FilterOp, ListFilter, Resource, Sort};
use serde_json::json;

use super::{citizens, identifiers, page, query, seed};
use crate::ListStore;

async fn counts_ignore_pagination(store: &dyn ListStore) {
    seed(store).await;
    let all = store.count(Resource::Citizens, &ListFilter::new()).await.unwrap();
    assert_eq!(all, 7);
    let police = ListFilter::new().with(Resource::Citizens, "job", FilterOp::Eq, "police").unwrap();
    assert_eq!(store.count(Resource::Citizens, &police).await.unwrap(), 5);
}

async fn sorts_ascending_with_id_tiebreak(store: &dyn ListStore) {
    seed(store).await;
    let rows = store.fetch(&query(page(0, 20, Some(Sort::asc("lastname"))))).await.unwrap();
    assert_eq!(identifiers(&rows), ["c6", "c2", "c7", "c1", "c3", "c5", "c4"]);
}

async fn sorts_descending_with_id_tiebreak(store: &dyn ListStore) {
    seed(store).await;
    let rows = store.fetch(&query(page(0, 20, Some(Sort::desc("lastname"))))).await.unwrap();
    assert_eq!(identifiers(&rows), ["c4", "c5", "c1", "c3", "c2", "c7", "c6"]);
}

async fn sorts_integers_numerically(store: &dyn ListStore) {
    seed(store).await;
    let rows = store.fetch(&query(page(0, 20, Some(Sort::asc("jobGrade"))))).await.unwrap();
    assert_eq!(identifiers(&rows), ["c4", "c2", "c5", "c1", "c7", "c6", "c3"]);
}

async fn default_sort_applies(store: &dyn ListStore) {
    seed(store).await;
    // citizens default: lastname ascending
    let rows = store.fetch(&query(page(0, 20, None))).await.unwrap();
    assert_eq!(identifiers(&rows), ["c6", "c2", "c7", "c1", "c3", "c5", "c4"]);
}

async fn pages_through_window(store: &dyn ListStore) {
    seed(store).await;
    let rows = store.fetch(&query(page(2, 3, Some(Sort::asc("lastname"))))).await.unwrap();
    assert_eq!(identifiers(&rows), ["c7", "c1", "c3"]);
    let rows = store.fetch(&query(page(6, 3, Some(Sort::asc("lastname"))))).await.unwrap();
    assert_eq!(identifiers(&rows), ["c4"]);
}

async fn offset_past_end_is_empty(store: &dyn ListStore) {
    seed(store).await;
    let rows = store.fetch(&query(page(10, 20, None))).await.unwrap();
    assert!(rows.is_empty());
}

async fn filters_combine(store: &dyn ListStore) {
    seed(store).await;
    let request = page(0, 20, Some(Sort::desc("createdAt")))
        .with_filter("job", FilterOp::Eq, "police")
        .with_filter("jobGrade", FilterOp::Eq, "2");
    let rows = store.fetch(&query(request)).await.unwrap();
    assert_eq!(identifiers(&rows), ["c7", "c1"]);
}

async fn contains_is_case_insensitive(store: &dyn ListStore) {
    seed(store).await;
    let rows = store.fetch(&query(page(0, 20, None).with_search("SMI"))).await.unwrap();
    assert_eq!(identifiers(&rows), ["c1", "c3"]);
}

async fn contains_treats_wildcards_literally(store: &dyn ListStore) {
    seed(store).await;
    store
        .insert(Resource::Citizens, super::citizen("c8", Some("O_Brien"), "police", 1, false, 8))
        .await
        .unwrap();
    let rows = store.fetch(&query(page(0, 20, None).with_search("o_b"))).await.unwrap();
    assert_eq!(identifiers(&rows), ["c8"]);
    let rows = store.fetch(&query(page(0, 20, None).with_search("%"))).await.unwrap();
    assert!(rows.is_empty());
}

async fn bool_filter(store: &dyn ListStore) {
    seed(store).await;
    let rows = store.fetch(&query(page(0, 20, None).with_filter("wanted", FilterOp::Eq, "true")))
        .await
        .unwrap();
    assert_eq!(identifiers(&rows), ["c2", "c4"]);
}

async fn timestamps_are_normalized_on_insert(store: &dyn ListStore) {
    seed(store).await;
    let request =
        page(0, 20, None).with_filter("createdAt", FilterOp::Eq, "2024-01-03T01:00:00+01:00");
    let rows = store.fetch(&query(request)).await.unwrap();
    assert_eq!(identifiers(&rows), ["c1"]);
    assert_eq!(rows[0]["createdAt"], "2024-01-03T00:00:00.000Z");
}

async fn resources_are_isolated(store: &dyn ListStore) {
    seed(store).await;
    store
        .insert(Resource::Vehicles, json!({"plate": "ABC 123", "createdAt": "2024-01-01T00:00:00Z"}))
        .await
        .unwrap();
    assert_eq!(store.count(Resource::Citizens, &ListFilter::new()).await.unwrap(), 7);
    assert_eq!(store.count(Resource::Vehicles, &ListFilter::new()).await.unwrap(), 1);
    assert_eq!(store.count(Resource::Accounts, &ListFilter::new()).await.unwrap(), 0);
}

async fn rejects_invalid_rows(store: &dyn ListStore) {
    let err = store.insert(Resource::Citizens, json!("not an object")).await.unwrap_err();
    assert!(err.is_invalid_row());
    let err = store
        .insert_many(Resource::Citizens, vec![citizens()[0].clone(), json!({"createdAt": "never"})])
        .await
        .unwrap_err();
    assert!(err.is_invalid_row());
    assert_eq!(store.count(Resource::Citizens, &ListFilter::new()).await.unwrap(), 0);
}

async fn rejects_values_of_wrong_kind(store: &dyn ListStore) {
    let mismatched = [
        json!({"identifier": "c1", "wanted": 1}),
        json!({"identifier": "c2", "lastname": ["a"]}),
        json!({"identifier": "c3", "lastname": 5}),
        json!({"identifier": "c4", "jobGrade": "3"}),
        json!({"identifier": "c5", "firstname": null}),
    ];
    for row in mismatched {
        let err = store.insert(Resource::Citizens, row.clone()).await.unwrap_err();
        assert!(err.is_invalid_row(), "{row} was accepted");
    }
    assert_eq!(store.count(Resource::Citizens, &ListFilter::new()).await.unwrap(), 0);

    store.insert(Resource::Citizens, json!({"identifier": "c6", "phoneNumber": null})).await.unwrap();
    assert_eq!(store.count(Resource::Citizens, &ListFilter::new()).await.unwrap(), 1);
}

async fn insert_many_keeps_order(store: &dyn ListStore) {
    let written = store.insert_many(Resource::Citizens, citizens()).await.unwrap();
    assert_eq!(written, 7);
    let rows = store.fetch(&query(page(0, 20, Some(Sort::asc("job"))))).await.unwrap();
    assert_eq!(identifiers(&rows), ["c2", "c1", "c3", "c5", "c6", "c7", "c4"]);
}

macro_rules! conformance_tests {
    ($($name:ident),* $(,)?) => {
        mod memory {
            $(
                #[tokio::test]
                async fn $name() {
                    let store = crate::MemoryStore::new();
                    super::$name(&store).await;
                }
            )*
        }

        mod sqlite {
            $(
                #[tokio::test]
                async fn $name() {
                    let (store, _temp_dir) = super::super::create_test_storage();
                    super::$name(&store).await;
                }
            )*
        }
    };
}

conformance_tests!(
    counts_ignore_pagination,
    sorts_ascending_with_id_tiebreak,
    sorts_descending_with_id_tiebreak,
    sorts_integers_numerically,
    default_sort_applies,
    pages_through_window,
    offset_past_end_is_empty,
    filters_combine,
    contains_is_case_insensitive,
    contains_treats_wildcards_literally,
    bool_filter,
    timestamps_are_normalized_on_insert,
    resources_are_isolated,
    rejects_invalid_rows,
    rejects_values_of_wrong_kind,
    insert_many_keeps_order,
);
