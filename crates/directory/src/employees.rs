//! Employee operations: paged listing, lookup by id, create, update, delete.

use chrono::NaiveDate;
use db::{
    models::{EmployeeFields, EmployeeRow},
    repository::employees::{self, LISTING},
    DbPool,
};
use listing::{run_listing, ListParams, ListResult, ListStore};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::{DirectoryError, Employee, EmployeeInput};

const ENTITY: &str = "employee";

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

/// One page of employees, sorted and filtered per `params`.
///
/// Any store failure fails the whole call; no partial page is returned.
pub async fn list_employees<S>(
    store: &S,
    params: &ListParams,
) -> Result<ListResult<Employee>, DirectoryError>
where
    S: ListStore<EmployeeRow>,
    S::Error: std::error::Error + Send + Sync + 'static,
{
    let request = params.validate(&LISTING)?;

    run_listing(store, &LISTING, &request)
        .await
        .map_err(|err| DirectoryError::Database(Box::new(err)))
}

// ---------------------------------------------------------------------------
// Single-record operations
// ---------------------------------------------------------------------------

/// Parse a path id into the employee primary key.
pub fn parse_employee_id(raw: &str) -> Result<Uuid, DirectoryError> {
    Uuid::parse_str(raw.trim())
        .map_err(|_| DirectoryError::Invalid(format!("invalid employee id: '{raw}'")))
}

#[instrument(skip(pool))]
pub async fn get_employee(pool: &DbPool, id: Uuid) -> Result<Employee, DirectoryError> {
    let row = employees::get_employee(pool, id)
        .await
        .map_err(|err| DirectoryError::from_db(ENTITY, err))?;
    Ok(row.into())
}

#[instrument(skip(pool, input))]
pub async fn create_employee(
    pool: &DbPool,
    input: &EmployeeInput,
) -> Result<Employee, DirectoryError> {
    let fields = employee_fields(input)?;
    let created_by = optional_uuid("created_by", &input.created_by)?.unwrap_or_else(Uuid::nil);

    let row = employees::create_employee(pool, &fields, created_by).await?;
    info!(employee_id = %row.employee_id, "employee created");
    Ok(row.into())
}

#[instrument(skip(pool, input))]
pub async fn update_employee(
    pool: &DbPool,
    id: Uuid,
    input: &EmployeeInput,
) -> Result<Employee, DirectoryError> {
    let fields = employee_fields(input)?;
    let updated_by = optional_uuid("updated_by", &input.updated_by)?;

    let row = employees::update_employee(pool, id, &fields, updated_by)
        .await
        .map_err(|err| DirectoryError::from_db(ENTITY, err))?;
    info!(employee_id = %id, "employee updated");
    Ok(row.into())
}

#[instrument(skip(pool))]
pub async fn delete_employee(pool: &DbPool, id: Uuid) -> Result<(), DirectoryError> {
    employees::delete_employee(pool, id)
        .await
        .map_err(|err| DirectoryError::from_db(ENTITY, err))?;
    info!(employee_id = %id, "employee deleted");
    Ok(())
}

// ---------------------------------------------------------------------------
// Input validation
// ---------------------------------------------------------------------------

/// Check a request body and convert it into typed columns.
///
/// # Errors
/// - [`DirectoryError::Invalid`] if an English name is blank or a date does
///   not start with `YYYY-MM-DD`.
pub fn employee_fields(input: &EmployeeInput) -> Result<EmployeeFields, DirectoryError> {
    if input.first_name_en.trim().is_empty() {
        return Err(DirectoryError::Invalid("first_name_en is required".into()));
    }
    if input.last_name_en.trim().is_empty() {
        return Err(DirectoryError::Invalid("last_name_en is required".into()));
    }

    Ok(EmployeeFields {
        employment_type: input.employment_type,
        title: input.title,
        first_name_en: input.first_name_en.clone(),
        last_name_en: input.last_name_en.clone(),
        first_name_th: input.first_name_th.clone(),
        last_name_th: input.last_name_th.clone(),
        nick_name_en: input.nick_name_en.clone(),
        nick_name_th: input.nick_name_th.clone(),
        phone_number: input.phone_number.clone(),
        company_email: input.company_email.clone(),
        nationality: input.nationality.clone(),
        gender: input.gender,
        tax_id: input.tax_id.clone(),
        birth_date: parse_date("birth_date", &input.birth_date)?,
        start_work_date: parse_date("start_work_date", &input.start_work_date)?,
        status: input.status,
        remark: input.remark.clone(),
        department: input.department.clone(),
        position: input.position.clone(),
        photo: input.photo.clone(),
        custom_attributes: input.custom_attributes.clone(),
        is_active: input.is_active,
    })
}

/// `""` → `None`; otherwise a `YYYY-MM-DD` date, optionally followed by a
/// time part (`T...` or ` ...`), which is dropped.
fn parse_date(field: &str, raw: &str) -> Result<Option<NaiveDate>, DirectoryError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }

    match NaiveDate::parse_and_remainder(raw, "%Y-%m-%d") {
        Ok((date, rest)) if rest.is_empty() || rest.starts_with(['T', ' ']) => Ok(Some(date)),
        _ => Err(DirectoryError::Invalid(format!(
            "{field} must be a YYYY-MM-DD date, got '{raw}'"
        ))),
    }
}

fn optional_uuid(field: &str, raw: &str) -> Result<Option<Uuid>, DirectoryError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    Uuid::parse_str(raw)
        .map(Some)
        .map_err(|_| DirectoryError::Invalid(format!("{field} must be a UUID, got '{raw}'")))
}
