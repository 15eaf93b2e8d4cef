//! Pipeline tests for `run_listing`.
//!
//! These drive the validator, assembler, store and calculator together
//! through `MockStore`, so no Postgres connection is required.
//!
//! Tests that need a real Postgres instance live in `crates/db/tests/` and
//! are gated behind the `integration` feature flag.

use serde_json::json;

use crate::mock::{MockFailure, MockStore, MockStoreError};
use crate::{run_listing, EntityListing, ListParams, ListResult};

const PEOPLE: EntityListing = EntityListing {
    table: "people",
    columns: &["id", "name"],
    primary_key: "id",
    default_sort: "id",
    sortable: &["id", "name"],
    searchable: &["name"],
};

#[derive(Debug, Clone)]
struct PersonRow {
    id: i64,
    name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
struct Person {
    id: i64,
    name: String,
}

impl From<PersonRow> for Person {
    fn from(row: PersonRow) -> Self {
        Self { id: row.id, name: row.name.unwrap_or_default() }
    }
}

/// `count` rows named `person-<n>`, with "Smith" planted in rows 7 and 19.
fn table(count: i64) -> Vec<PersonRow> {
    (1..=count)
        .map(|id| PersonRow {
            id,
            name: Some(match id {
                7 => "Anna Smith".to_string(),
                19 => "SMITHERS".to_string(),
                _ => format!("person-{id}"),
            }),
        })
        .collect()
}

fn name_contains(row: &PersonRow, term: &str) -> bool {
    row.name
        .as_deref()
        .is_some_and(|name| name.to_lowercase().contains(&term.to_lowercase()))
}

fn query(pairs: &[(&str, &str)]) -> ListParams {
    let get = |key: &str| pairs.iter().find(|(k, _)| *k == key).map(|(_, v)| v.to_string());
    ListParams {
        page: get("page"),
        page_size: get("page_size"),
        sort_by: get("sort_by"),
        sort_order: get("sort_order"),
        search: get("search"),
    }
}

async fn list(store: &MockStore<PersonRow>, pairs: &[(&str, &str)]) -> Result<ListResult<Person>, MockStoreError> {
    let request = query(pairs).validate(&PEOPLE).expect("valid params");
    run_listing(store, &PEOPLE, &request).await
}

// ============================================================
// Scenarios
// ============================================================

#[tokio::test]
async fn second_page_of_twenty_five_rows() {
    let store = MockStore::with_rows(table(25));
    let result = list(&store, &[("page", "2"), ("page_size", "10")]).await.unwrap();

    assert_eq!(result.data.len(), 10);
    assert_eq!(result.total, 25);
    assert_eq!(result.page, 2);
    assert_eq!(result.page_size, 10);
    assert_eq!(result.total_pages, 3);
    assert_eq!(result.data.first().map(|p| p.id), Some(11));
}

#[tokio::test]
async fn last_page_is_partial_and_past_the_end_is_empty() {
    let store = MockStore::with_rows(table(25));

    let last = list(&store, &[("page", "3")]).await.unwrap();
    assert_eq!(last.data.len(), 5);

    let beyond = list(&store, &[("page", "9")]).await.unwrap();
    assert!(beyond.data.is_empty());
    assert_eq!(beyond.total, 25);
    assert_eq!(beyond.page, 9);
}

#[tokio::test]
async fn empty_table_yields_empty_envelope() {
    let store = MockStore::<PersonRow>::with_rows(Vec::new());
    let result = list(&store, &[]).await.unwrap();

    assert_eq!(
        serde_json::to_value(&result).unwrap(),
        json!({ "data": [], "total": 0, "page": 1, "page_size": 10, "total_pages": 0 })
    );
}

#[tokio::test]
async fn response_echoes_clamped_values() {
    let store = MockStore::with_rows(table(3));
    let result = list(&store, &[("page", "-4"), ("page_size", "5000")]).await.unwrap();

    assert_eq!(result.page, 1);
    assert_eq!(result.page_size, 10);
    assert_eq!(result.data.len(), 3);
}

#[tokio::test]
async fn search_filters_count_and_page_alike() {
    let store = MockStore::with_rows(table(25)).searching_with(name_contains);
    let result = list(&store, &[("search", "smith")]).await.unwrap();

    assert_eq!(result.total, 2);
    assert_eq!(result.total_pages, 1);
    assert!(result.data.len() <= 10);
    assert!(result.data.iter().all(|p| p.name.to_lowercase().contains("smith")));

    let issued = store.issued();
    assert_eq!(issued.len(), 2);
    assert_eq!(issued[0].binds[0], issued[1].binds[0]);
}

#[tokio::test]
async fn empty_search_equals_no_search() {
    let store = MockStore::with_rows(table(25)).searching_with(name_contains);

    let absent = list(&store, &[]).await.unwrap();
    let empty = list(&store, &[("search", "")]).await.unwrap();

    assert_eq!(absent, empty);
    let issued = store.issued();
    assert_eq!(issued[0], issued[2]);
    assert_eq!(issued[1], issued[3]);
}

#[tokio::test]
async fn metacharacters_in_search_only_match_literally() {
    let store = MockStore::with_rows(table(25)).searching_with(name_contains);
    let result = list(&store, &[("search", "' OR 1=1 --")]).await.unwrap();

    assert_eq!(result.total, 0);
    for statement in store.issued() {
        assert!(!statement.sql.contains("1=1"));
    }
}

// ============================================================
// Failure handling
// ============================================================

#[tokio::test]
async fn count_failure_aborts_before_page_query() {
    let store = MockStore::<PersonRow>::failing(MockFailure::Count);
    let err = list(&store, &[]).await.unwrap_err();

    assert_eq!(err, MockStoreError("count failed".into()));
    let issued = store.issued();
    assert_eq!(issued.len(), 1, "page query must not run after a failed count");
    assert!(issued[0].sql.starts_with("SELECT COUNT(*)"));
}

#[tokio::test]
async fn fetch_failure_returns_no_partial_result() {
    let store = MockStore::<PersonRow>::failing(MockFailure::Fetch);
    let result = list(&store, &[]).await;

    assert!(matches!(result, Err(MockStoreError(_))));
    assert_eq!(store.issued().len(), 2);
}
