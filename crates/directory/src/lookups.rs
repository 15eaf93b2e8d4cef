//! Reference-data lookups: departments, positions and the location hierarchy.
//!
//! Each lookup returns every matching row in a fixed order; there is no
//! paging. Parent filters come straight from the query string and are
//! parsed with [`parse_filter`].

use db::{
    repository::{departments as department_repo, locations as location_repo},
    DbPool,
};
use tracing::instrument;

use crate::{
    materialize::records, Department, DirectoryError, District, Geography, Position, Province,
    SubDistrict,
};

/// Parse an optional integer filter. Absent or empty means "no filter".
pub fn parse_filter(name: &str, raw: Option<&str>) -> Result<Option<i32>, DirectoryError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse::<i32>().map(Some).map_err(|_| {
            DirectoryError::Invalid(format!("{name} must be an integer, got '{value}'"))
        }),
    }
}

#[instrument(skip(pool))]
pub async fn departments(pool: &DbPool) -> Result<Vec<Department>, DirectoryError> {
    Ok(records(department_repo::list_departments(pool).await?))
}

#[instrument(skip(pool))]
pub async fn positions(
    pool: &DbPool,
    department_id: Option<i32>,
) -> Result<Vec<Position>, DirectoryError> {
    Ok(records(department_repo::list_positions(pool, department_id).await?))
}

#[instrument(skip(pool))]
pub async fn geographies(pool: &DbPool) -> Result<Vec<Geography>, DirectoryError> {
    Ok(records(location_repo::list_geographies(pool).await?))
}

#[instrument(skip(pool))]
pub async fn provinces(
    pool: &DbPool,
    geography_id: Option<i32>,
) -> Result<Vec<Province>, DirectoryError> {
    Ok(records(location_repo::list_provinces(pool, geography_id).await?))
}

#[instrument(skip(pool))]
pub async fn districts(
    pool: &DbPool,
    province_id: Option<i32>,
) -> Result<Vec<District>, DirectoryError> {
    Ok(records(location_repo::list_districts(pool, province_id).await?))
}

#[instrument(skip(pool))]
pub async fn sub_districts(
    pool: &DbPool,
    district_id: Option<i32>,
) -> Result<Vec<SubDistrict>, DirectoryError> {
    Ok(records(location_repo::list_sub_districts(pool, district_id).await?))
}
