//! Location hierarchy lookups.
//!
//! Geography rows are never deleted. Provinces, districts and sub-districts
//! are soft-deleted: only rows with `deleted_at IS NULL` are returned, and
//! nothing in this module physically removes a location.

use sqlx::PgPool;

use crate::{
    DbError,
    models::{DistrictRow, GeographyRow, ProvinceRow, SubDistrictRow},
};

/// Return all geographies ordered by id.
pub async fn list_geographies(pool: &PgPool) -> Result<Vec<GeographyRow>, DbError> {
    let rows = sqlx::query_as::<_, GeographyRow>(
        "SELECT geography_id, name FROM m_geography ORDER BY geography_id",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Return live provinces ordered by English name, optionally within one geography.
pub async fn list_provinces(
    pool: &PgPool,
    geography_id: Option<i32>,
) -> Result<Vec<ProvinceRow>, DbError> {
    let rows = sqlx::query_as::<_, ProvinceRow>(
        r#"
        SELECT province_id, province_name_th, province_name_en, geography_id,
               created_at, updated_at, deleted_at
        FROM m_province
        WHERE deleted_at IS NULL
          AND ($1::INTEGER IS NULL OR geography_id = $1)
        ORDER BY province_name_en, province_id
        "#,
    )
    .bind(geography_id)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Return live districts ordered by English name, optionally within one province.
pub async fn list_districts(
    pool: &PgPool,
    province_id: Option<i32>,
) -> Result<Vec<DistrictRow>, DbError> {
    let rows = sqlx::query_as::<_, DistrictRow>(
        r#"
        SELECT district_id, name_th, name_en, province_id,
               created_at, updated_at, deleted_at
        FROM m_district
        WHERE deleted_at IS NULL
          AND ($1::INTEGER IS NULL OR province_id = $1)
        ORDER BY name_en, district_id
        "#,
    )
    .bind(province_id)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Return live sub-districts ordered by English name, optionally within one district.
pub async fn list_sub_districts(
    pool: &PgPool,
    district_id: Option<i32>,
) -> Result<Vec<SubDistrictRow>, DbError> {
    let rows = sqlx::query_as::<_, SubDistrictRow>(
        r#"
        SELECT sub_district_id, zip_code, name_th, name_en, district_id,
               lat, long, created_at, updated_at, deleted_at
        FROM m_sub_district
        WHERE deleted_at IS NULL
          AND ($1::INTEGER IS NULL OR district_id = $1)
        ORDER BY name_en, sub_district_id
        "#,
    )
    .bind(district_id)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}
