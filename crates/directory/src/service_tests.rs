// ============================================================
// Employee listing tests (run against the in-memory store)
// ============================================================

use chrono::{NaiveDate, NaiveDateTime};
use db::models::EmployeeRow;
use listing::mock::{MockFailure, MockStore};
use listing::{BindValue, ListError, ListParams};
use serde_json::json;
use uuid::Uuid;

use crate::employees::list_employees;
use crate::DirectoryError;

fn employee(n: u32, first: &str, last: &str) -> EmployeeRow {
    let created = NaiveDate::from_ymd_opt(2024, 1, 1)
        .and_then(|d| d.and_hms_opt(9, 0, n % 60))
        .unwrap();
    EmployeeRow {
        employee_id: Uuid::from_u128(u128::from(n)),
        employment_type: Some(1),
        title: None,
        first_name_en: first.into(),
        last_name_en: last.into(),
        first_name_th: None,
        last_name_th: None,
        nick_name_en: None,
        nick_name_th: None,
        phone_number: None,
        company_email: Some(format!("{}.{}@example.com", first.to_lowercase(), n)),
        nationality: None,
        gender: None,
        tax_id: None,
        birth_date: None,
        start_work_date: NaiveDate::from_ymd_opt(2023, 6, 1),
        status: Some(1),
        remark: None,
        department: Some("Engineering".into()),
        position: None,
        photo: None,
        custom_attributes: None,
        created_by: Uuid::nil(),
        created_date: Some(created),
        updated_by: None,
        updated_date: None::<NaiveDateTime>,
        is_active: true,
    }
}

fn staff(count: u32) -> Vec<EmployeeRow> {
    (1..=count).map(|n| employee(n, "Staff", &format!("Member{n}"))).collect()
}

fn matches_name(row: &EmployeeRow, term: &str) -> bool {
    let term = term.to_lowercase();
    [
        Some(row.first_name_en.as_str()),
        Some(row.last_name_en.as_str()),
        row.company_email.as_deref(),
    ]
    .into_iter()
    .flatten()
    .any(|value| value.to_lowercase().contains(&term))
}

fn params(pairs: &[(&str, &str)]) -> ListParams {
    let mut p = ListParams::default();
    for (key, value) in pairs {
        let value = Some(value.to_string());
        match *key {
            "page" => p.page = value,
            "page_size" => p.page_size = value,
            "sort_by" => p.sort_by = value,
            "sort_order" => p.sort_order = value,
            "search" => p.search = value,
            other => panic!("unknown param {other}"),
        }
    }
    p
}

#[tokio::test]
async fn second_page_of_employees() {
    let store = MockStore::with_rows(staff(25));

    let page = list_employees(&store, &params(&[("page", "2"), ("page_size", "10")]))
        .await
        .unwrap();

    assert_eq!(page.data.len(), 10);
    assert_eq!(page.total, 25);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.data[0].last_name_en, "Member11");
    assert_eq!(page.data[0].start_work_date, "2023-06-01");
    assert_eq!(page.data[0].created_date, "2024-01-01 09:00:11");
}

#[tokio::test]
async fn default_listing_sorts_by_creation_then_id() {
    let store = MockStore::with_rows(staff(3));

    list_employees(&store, &ListParams::default()).await.unwrap();

    let issued = store.issued();
    assert_eq!(issued.len(), 2);
    assert!(issued[1]
        .sql
        .ends_with("ORDER BY created_date ASC, employee_id ASC LIMIT $1 OFFSET $2"));
}

#[tokio::test]
async fn search_filters_by_name_or_email() {
    let mut rows = staff(5);
    rows.push(employee(6, "John", "Smith"));
    rows.push(employee(7, "Jane", "Smithson"));
    let store = MockStore::with_rows(rows).searching_with(matches_name);

    let page = list_employees(&store, &params(&[("search", "smith")]))
        .await
        .unwrap();

    assert_eq!(page.total, 2);
    let names: Vec<_> = page.data.iter().map(|e| e.last_name_en.as_str()).collect();
    assert_eq!(names, ["Smith", "Smithson"]);

    let issued = store.issued();
    assert_eq!(issued[0].binds, vec![BindValue::Text("%smith%".into())]);
    assert!(issued[0].sql.contains("company_email ILIKE $1"));
}

#[tokio::test]
async fn unknown_sort_field_is_rejected_before_any_statement() {
    let store = MockStore::with_rows(staff(3));

    let err = list_employees(&store, &params(&[("sort_by", "salary; DROP TABLE m_employee")]))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        DirectoryError::Listing(ListError::UnknownSortField(_))
    ));
    assert!(store.issued().is_empty());
}

#[tokio::test]
async fn store_failure_is_a_database_error() {
    let store = MockStore::<EmployeeRow>::failing(MockFailure::Fetch);

    let err = list_employees(&store, &ListParams::default())
        .await
        .unwrap_err();

    assert!(matches!(err, DirectoryError::Database(_)));
    assert_eq!(store.issued().len(), 2);
}

#[tokio::test]
async fn empty_directory_serializes_to_an_empty_envelope() {
    let store = MockStore::<EmployeeRow>::with_rows(Vec::new());

    let page = list_employees(&store, &ListParams::default()).await.unwrap();

    assert_eq!(
        serde_json::to_value(&page).unwrap(),
        json!({ "data": [], "total": 0, "page": 1, "page_size": 10, "total_pages": 0 })
    );
}

#[tokio::test]
async fn listed_employee_omits_unset_update_fields() {
    let store = MockStore::with_rows(staff(1));

    let page = list_employees(&store, &ListParams::default()).await.unwrap();
    let value = serde_json::to_value(&page.data[0]).unwrap();

    assert_eq!(value["employee_id"], json!(Uuid::from_u128(1).to_string()));
    assert_eq!(value["title"], json!(0));
    assert_eq!(value["remark"], json!(""));
    assert!(value.get("updated_by").is_none());
    assert!(value.get("updated_date").is_none());
}
