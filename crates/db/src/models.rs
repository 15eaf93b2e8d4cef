//! Row structs that map 1-to-1 onto database tables.
//!
//! These are *persistence* models — nullable columns stay `Option` here.
//! The output records (with their null→default policy and date formatting)
//! live in the `directory` crate.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

// ---------------------------------------------------------------------------
// m_employee
// ---------------------------------------------------------------------------

/// A persisted employee row.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct EmployeeRow {
    pub employee_id: Uuid,
    pub employment_type: Option<i16>,
    pub title: Option<i16>,
    pub first_name_en: String,
    pub last_name_en: String,
    pub first_name_th: Option<String>,
    pub last_name_th: Option<String>,
    pub nick_name_en: Option<String>,
    pub nick_name_th: Option<String>,
    pub phone_number: Option<String>,
    pub company_email: Option<String>,
    pub nationality: Option<String>,
    pub gender: Option<i16>,
    pub tax_id: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub start_work_date: Option<NaiveDate>,
    pub status: Option<i16>,
    pub remark: Option<String>,
    pub department: Option<String>,
    pub position: Option<String>,
    pub photo: Option<String>,
    pub custom_attributes: Option<String>,
    pub created_by: Uuid,
    pub created_date: Option<NaiveDateTime>,
    pub updated_by: Option<Uuid>,
    pub updated_date: Option<NaiveDateTime>,
    pub is_active: bool,
}

/// Client-editable employee columns, shared by insert and full-row update.
///
/// Identity and audit columns are assigned by the server and are not part
/// of this struct.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeFields {
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
    pub birth_date: Option<NaiveDate>,
    pub start_work_date: Option<NaiveDate>,
    pub status: i16,
    pub remark: String,
    pub department: String,
    pub position: String,
    pub photo: String,
    pub custom_attributes: String,
    pub is_active: bool,
}

// ---------------------------------------------------------------------------
// r_department / r_position
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DepartmentRow {
    pub department_id: i32,
    pub department_name: String,
    pub created_date: Option<NaiveDateTime>,
    pub updated_date: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PositionRow {
    pub position_id: i32,
    pub department_id: i32,
    pub position_name: String,
    pub acronym: Option<String>,
    pub created_date: Option<NaiveDateTime>,
    pub updated_date: Option<NaiveDateTime>,
}

// ---------------------------------------------------------------------------
// Location hierarchy
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct GeographyRow {
    pub geography_id: i32,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProvinceRow {
    pub province_id: i32,
    pub province_name_th: String,
    pub province_name_en: String,
    pub geography_id: i32,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
    /// Always `None` for rows returned by the live-row queries.
    pub deleted_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DistrictRow {
    pub district_id: i32,
    pub name_th: String,
    pub name_en: String,
    pub province_id: i32,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
    pub deleted_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SubDistrictRow {
    pub sub_district_id: i32,
    pub zip_code: Option<i32>,
    pub name_th: String,
    pub name_en: String,
    pub district_id: i32,
    pub lat: Option<String>,
    pub long: Option<String>,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
    pub deleted_at: Option<NaiveDateTime>,
}
