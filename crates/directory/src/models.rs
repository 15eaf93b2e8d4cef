//! Records served to clients, and the employee request body.
//!
//! Every nullable column has already been coalesced by the time a record
//! exists (see [`crate::materialize`]): strings are `""`, numbers are `0`,
//! timestamps are pre-formatted strings. Fields marked
//! `skip_serializing_if = "String::is_empty"` are omitted from JSON when
//! empty; every other field is always present.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Employee
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Employee {
    pub employee_id: String,
    pub employment_type: i32,
    pub title: i32,
    pub first_name_en: String,
    pub last_name_en: String,
    pub first_name_th: String,
    pub last_name_th: String,
    pub nick_name_en: String,
    pub nick_name_th: String,
    pub phone_number: String,
    pub company_email: String,
    pub nationality: String,
    pub gender: i32,
    pub tax_id: String,
    /// `YYYY-MM-DD`
    pub birth_date: String,
    /// `YYYY-MM-DD`
    pub start_work_date: String,
    pub status: i32,
    pub remark: String,
    pub department: String,
    pub position: String,
    pub photo: String,
    pub custom_attributes: String,
    pub created_by: String,
    /// `YYYY-MM-DD HH:MM:SS`
    pub created_date: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub updated_by: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub updated_date: String,
    pub is_active: bool,
}

/// Request body for create and full-row update.
///
/// Missing fields take their zero value, except `is_active` which defaults
/// to `true` when absent from the body. Server-assigned fields
/// (`employee_id`, `created_date`, `updated_date`) are ignored if present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EmployeeInput {
    pub employment_type: i16,
    pub title: i16,
    pub first_name_en: String,
    pub last_name_en: String,
    pub first_name_th: String,
    pub last_name_th: String,
    pub nick_name_en: String,
    pub nick_name_th: String,
    pub phone_number: String,
    pub company_email: String,
    pub nationality: String,
    pub gender: i16,
    pub tax_id: String,
    pub birth_date: String,
    pub start_work_date: String,
    pub status: i16,
    pub remark: String,
    pub department: String,
    pub position: String,
    pub photo: String,
    pub custom_attributes: String,
    /// Creating user; only read on create. Empty means the nil UUID.
    pub created_by: String,
    /// Updating user; only read on update. Empty leaves it null.
    pub updated_by: String,
    #[serde(default = "active")]
    pub is_active: bool,
}

fn active() -> bool {
    true
}

// ---------------------------------------------------------------------------
// Department / Position
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Department {
    pub department_id: i32,
    pub department_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub created_date: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub updated_date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Position {
    pub position_id: i32,
    pub department_id: i32,
    pub position_name: String,
    pub acronym: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub created_date: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub updated_date: String,
}

// ---------------------------------------------------------------------------
// Location hierarchy
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Geography {
    pub geography_id: i32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Province {
    pub province_id: i32,
    pub province_name_th: String,
    pub province_name_en: String,
    pub geography_id: i32,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub created_at: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub updated_at: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub deleted_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct District {
    pub district_id: i32,
    pub name_th: String,
    pub name_en: String,
    pub province_id: i32,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub created_at: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub updated_at: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub deleted_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubDistrict {
    pub sub_district_id: i32,
    pub zip_code: i32,
    pub name_th: String,
    pub name_en: String,
    pub district_id: i32,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub lat: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub long: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub created_at: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub updated_at: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub deleted_at: String,
}
