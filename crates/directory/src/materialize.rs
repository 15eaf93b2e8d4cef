//! Row → record conversion.
//!
//! Null policy, applied the same way for every table:
//! - optional text → `""`
//! - optional number → `0`
//! - optional date/timestamp → `""`, otherwise formatted:
//!   audit columns (created/updated/deleted) with [`TIMESTAMP_FORMAT`],
//!   birth/start-of-work dates with [`DATE_FORMAT`].

use chrono::{NaiveDate, NaiveDateTime};
use uuid::Uuid;

use db::models::{
    DepartmentRow, DistrictRow, EmployeeRow, GeographyRow, PositionRow, ProvinceRow,
    SubDistrictRow,
};

use crate::models::{Department, District, Employee, Geography, Position, Province, SubDistrict};

/// Format for audit timestamps.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format for calendar dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn format_timestamp(value: Option<NaiveDateTime>) -> String {
    value
        .map(|ts| ts.format(TIMESTAMP_FORMAT).to_string())
        .unwrap_or_default()
}

pub fn format_date(value: Option<NaiveDate>) -> String {
    value
        .map(|date| date.format(DATE_FORMAT).to_string())
        .unwrap_or_default()
}

fn number(value: Option<i16>) -> i32 {
    value.map(i32::from).unwrap_or_default()
}

fn uuid_text(value: Option<Uuid>) -> String {
    value.map(|id| id.to_string()).unwrap_or_default()
}

impl From<EmployeeRow> for Employee {
    fn from(row: EmployeeRow) -> Self {
        Self {
            employee_id: row.employee_id.to_string(),
            employment_type: number(row.employment_type),
            title: number(row.title),
            first_name_en: row.first_name_en,
            last_name_en: row.last_name_en,
            first_name_th: row.first_name_th.unwrap_or_default(),
            last_name_th: row.last_name_th.unwrap_or_default(),
            nick_name_en: row.nick_name_en.unwrap_or_default(),
            nick_name_th: row.nick_name_th.unwrap_or_default(),
            phone_number: row.phone_number.unwrap_or_default(),
            company_email: row.company_email.unwrap_or_default(),
            nationality: row.nationality.unwrap_or_default(),
            gender: number(row.gender),
            tax_id: row.tax_id.unwrap_or_default(),
            birth_date: format_date(row.birth_date),
            start_work_date: format_date(row.start_work_date),
            status: number(row.status),
            remark: row.remark.unwrap_or_default(),
            department: row.department.unwrap_or_default(),
            position: row.position.unwrap_or_default(),
            photo: row.photo.unwrap_or_default(),
            custom_attributes: row.custom_attributes.unwrap_or_default(),
            created_by: row.created_by.to_string(),
            created_date: format_timestamp(row.created_date),
            updated_by: uuid_text(row.updated_by),
            updated_date: format_timestamp(row.updated_date),
            is_active: row.is_active,
        }
    }
}

impl From<DepartmentRow> for Department {
    fn from(row: DepartmentRow) -> Self {
        Self {
            department_id: row.department_id,
            department_name: row.department_name,
            created_date: format_timestamp(row.created_date),
            updated_date: format_timestamp(row.updated_date),
        }
    }
}

impl From<PositionRow> for Position {
    fn from(row: PositionRow) -> Self {
        Self {
            position_id: row.position_id,
            department_id: row.department_id,
            position_name: row.position_name,
            acronym: row.acronym.unwrap_or_default(),
            created_date: format_timestamp(row.created_date),
            updated_date: format_timestamp(row.updated_date),
        }
    }
}

impl From<GeographyRow> for Geography {
    fn from(row: GeographyRow) -> Self {
        Self {
            geography_id: row.geography_id,
            name: row.name,
        }
    }
}

impl From<ProvinceRow> for Province {
    fn from(row: ProvinceRow) -> Self {
        Self {
            province_id: row.province_id,
            province_name_th: row.province_name_th,
            province_name_en: row.province_name_en,
            geography_id: row.geography_id,
            created_at: format_timestamp(row.created_at),
            updated_at: format_timestamp(row.updated_at),
            deleted_at: format_timestamp(row.deleted_at),
        }
    }
}

impl From<DistrictRow> for District {
    fn from(row: DistrictRow) -> Self {
        Self {
            district_id: row.district_id,
            name_th: row.name_th,
            name_en: row.name_en,
            province_id: row.province_id,
            created_at: format_timestamp(row.created_at),
            updated_at: format_timestamp(row.updated_at),
            deleted_at: format_timestamp(row.deleted_at),
        }
    }
}

impl From<SubDistrictRow> for SubDistrict {
    fn from(row: SubDistrictRow) -> Self {
        Self {
            sub_district_id: row.sub_district_id,
            zip_code: row.zip_code.unwrap_or_default(),
            name_th: row.name_th,
            name_en: row.name_en,
            district_id: row.district_id,
            lat: row.lat.unwrap_or_default(),
            long: row.long.unwrap_or_default(),
            created_at: format_timestamp(row.created_at),
            updated_at: format_timestamp(row.updated_at),
            deleted_at: format_timestamp(row.deleted_at),
        }
    }
}

/// Convert a batch of rows, preserving order.
pub fn records<R, T: From<R>>(rows: Vec<R>) -> Vec<T> {
    rows.into_iter().map(T::from).collect()
}
