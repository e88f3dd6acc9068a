//! Test utilities and module declarations for storage tests.

use roster_core::{ListQuery, ListRequest, PaginationRequest, Resource, ResourcePolicy, Sort};
use serde_json::{Value, json};
use tempfile::TempDir;

use crate::{ListStore, Storage};

pub fn create_test_storage() -> (Storage, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("test.db");
    let storage = Storage::new(&db_path).unwrap();
    (storage, temp_dir)
}

pub fn citizen(id: &str, lastname: Option<&str>, job: &str, grade: i32, wanted: bool, day: u32) -> Value {
    let mut row = json!({
        "identifier": id,
        "firstname": "Test",
        "job": job,
        "jobGrade": grade,
        "wanted": wanted,
        "createdAt": format!("2024-01-{day:02}T00:00:00Z"),
    });
    if let Some(lastname) = lastname {
        row["lastname"] = json!(lastname);
    }
    row
}

/// Seven citizens with ties on `lastname`, `job` and `jobGrade`, one without a lastname.
pub fn citizens() -> Vec<Value> {
    vec![
        citizen("c1", Some("Smith"), "police", 2, false, 3),
        citizen("c2", Some("Adams"), "ambulance", 1, true, 1),
        citizen("c3", Some("Smith"), "police", 4, false, 5),
        citizen("c4", Some("brown"), "unemployed", 0, true, 2),
        citizen("c5", Some("Zimmer"), "police", 1, false, 4),
        citizen("c6", None, "police", 3, false, 6),
        citizen("c7", Some("Adams"), "police", 2, false, 7),
    ]
}

pub async fn seed(store: &dyn ListStore) {
    for row in citizens() {
        store.insert(Resource::Citizens, row).await.unwrap();
    }
}

pub fn query(request: ListRequest) -> ListQuery {
    ListQuery::prepare(&ResourcePolicy::builtin(Resource::Citizens), &request).unwrap()
}

pub fn page(offset: i64, page_size: i64, sort: Option<Sort>) -> ListRequest {
    let request = ListRequest::new(PaginationRequest::new(offset, Some(page_size)));
    match sort {
        Some(sort) => request.with_sort(sort),
        None => request,
    }
}

pub fn identifiers(rows: &[Value]) -> Vec<&str> {
    rows.iter().map(|r| r["identifier"].as_str().unwrap()).collect()
}

mod conformance;
