//! Employee CRUD operations and the employee listing description.

use listing::EntityListing;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    DbError,
    models::{EmployeeFields, EmployeeRow},
};

/// Column list shared by every statement returning an [`EmployeeRow`].
macro_rules! employee_columns {
    () => {
        "employee_id, employment_type, title, first_name_en, last_name_en, first_name_th, \
         last_name_th, nick_name_en, nick_name_th, phone_number, company_email, nationality, \
         gender, tax_id, birth_date, start_work_date, status, remark, department, position, \
         photo, custom_attributes, created_by, created_date, updated_by, updated_date, is_active"
    };
}

/// How `GET /employees` may be paged, sorted and searched.
pub const LISTING: EntityListing = EntityListing {
    table: "m_employee",
    columns: &[
        "employee_id",
        "employment_type",
        "title",
        "first_name_en",
        "last_name_en",
        "first_name_th",
        "last_name_th",
        "nick_name_en",
        "nick_name_th",
        "phone_number",
        "company_email",
        "nationality",
        "gender",
        "tax_id",
        "birth_date",
        "start_work_date",
        "status",
        "remark",
        "department",
        "position",
        "photo",
        "custom_attributes",
        "created_by",
        "created_date",
        "updated_by",
        "updated_date",
        "is_active",
    ],
    primary_key: "employee_id",
    default_sort: "created_date",
    sortable: &[
        "employee_id",
        "first_name_en",
        "last_name_en",
        "first_name_th",
        "last_name_th",
        "company_email",
        "department",
        "position",
        "employment_type",
        "status",
        "birth_date",
        "start_work_date",
        "created_date",
        "updated_date",
    ],
    searchable: &["first_name_en", "last_name_en", "company_email"],
};

/// Fetch a single employee by primary key.
pub async fn get_employee(pool: &PgPool, id: Uuid) -> Result<EmployeeRow, DbError> {
    let row = sqlx::query_as::<_, EmployeeRow>(concat!(
        "SELECT ",
        employee_columns!(),
        " FROM m_employee WHERE employee_id = $1"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or(DbError::NotFound)?;

    Ok(row)
}

/// Insert a new employee; the id and `created_date` are assigned by the database.
pub async fn create_employee(
    pool: &PgPool,
    fields: &EmployeeFields,
    created_by: Uuid,
) -> Result<EmployeeRow, DbError> {
    let row = sqlx::query_as::<_, EmployeeRow>(concat!(
        r#"
        INSERT INTO m_employee (
            employment_type, title, first_name_en, last_name_en, first_name_th, last_name_th,
            nick_name_en, nick_name_th, phone_number, company_email, nationality, gender,
            tax_id, birth_date, start_work_date, status, remark, department, position,
            photo, custom_attributes, is_active, created_by
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12,
                $13, $14, $15, $16, $17, $18, $19, $20, $21, $22, $23)
        RETURNING "#,
        employee_columns!()
    ))
    .bind(fields.employment_type)
    .bind(fields.title)
    .bind(&fields.first_name_en)
    .bind(&fields.last_name_en)
    .bind(&fields.first_name_th)
    .bind(&fields.last_name_th)
    .bind(&fields.nick_name_en)
    .bind(&fields.nick_name_th)
    .bind(&fields.phone_number)
    .bind(&fields.company_email)
    .bind(&fields.nationality)
    .bind(fields.gender)
    .bind(&fields.tax_id)
    .bind(fields.birth_date)
    .bind(fields.start_work_date)
    .bind(fields.status)
    .bind(&fields.remark)
    .bind(&fields.department)
    .bind(&fields.position)
    .bind(&fields.photo)
    .bind(&fields.custom_attributes)
    .bind(fields.is_active)
    .bind(created_by)
    .fetch_one(pool)
    .await?;

    Ok(row)
}

/// Overwrite every editable column and stamp `updated_date`.
///
/// Returns `DbError::NotFound` if no row has this id.
pub async fn update_employee(
    pool: &PgPool,
    id: Uuid,
    fields: &EmployeeFields,
    updated_by: Option<Uuid>,
) -> Result<EmployeeRow, DbError> {
    let row = sqlx::query_as::<_, EmployeeRow>(concat!(
        r#"
        UPDATE m_employee
        SET employment_type = $1, title = $2, first_name_en = $3, last_name_en = $4,
            first_name_th = $5, last_name_th = $6, nick_name_en = $7, nick_name_th = $8,
            phone_number = $9, company_email = $10, nationality = $11, gender = $12,
            tax_id = $13, birth_date = $14, start_work_date = $15, status = $16,
            remark = $17, department = $18, position = $19, photo = $20,
            custom_attributes = $21, is_active = $22, updated_by = $23,
            updated_date = CURRENT_TIMESTAMP
        WHERE employee_id = $24
        RETURNING "#,
        employee_columns!()
    ))
    .bind(fields.employment_type)
    .bind(fields.title)
    .bind(&fields.first_name_en)
    .bind(&fields.last_name_en)
    .bind(&fields.first_name_th)
    .bind(&fields.last_name_th)
    .bind(&fields.nick_name_en)
    .bind(&fields.nick_name_th)
    .bind(&fields.phone_number)
    .bind(&fields.company_email)
    .bind(&fields.nationality)
    .bind(fields.gender)
    .bind(&fields.tax_id)
    .bind(fields.birth_date)
    .bind(fields.start_work_date)
    .bind(fields.status)
    .bind(&fields.remark)
    .bind(&fields.department)
    .bind(&fields.position)
    .bind(&fields.photo)
    .bind(&fields.custom_attributes)
    .bind(fields.is_active)
    .bind(updated_by)
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or(DbError::NotFound)?;

    Ok(row)
}

/// Permanently delete an employee by its primary key.
///
/// Returns `DbError::NotFound` if no row was deleted.
pub async fn delete_employee(pool: &PgPool, id: Uuid) -> Result<(), DbError> {
    let result = sqlx::query("DELETE FROM m_employee WHERE employee_id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(DbError::NotFound);
    }

    Ok(())
}
