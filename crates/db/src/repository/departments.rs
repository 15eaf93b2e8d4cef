//! Department and position lookups.

use sqlx::PgPool;

use crate::{
    DbError,
    models::{DepartmentRow, PositionRow},
};

/// Return all departments ordered by id.
pub async fn list_departments(pool: &PgPool) -> Result<Vec<DepartmentRow>, DbError> {
    let rows = sqlx::query_as::<_, DepartmentRow>(
        r#"
        SELECT department_id, department_name, created_date, updated_date
        FROM r_department
        ORDER BY department_id
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Return positions ordered by name, optionally only those of one department.
pub async fn list_positions(
    pool: &PgPool,
    department_id: Option<i32>,
) -> Result<Vec<PositionRow>, DbError> {
    let rows = sqlx::query_as::<_, PositionRow>(
        r#"
        SELECT position_id, department_id, position_name, acronym, created_date, updated_date
        FROM r_position
        WHERE ($1::INTEGER IS NULL OR department_id = $1)
        ORDER BY position_name, position_id
        "#,
    )
    .bind(department_id)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}
