use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use directory::{
    lookups::{self, parse_filter},
    Department, District, Geography, Position, Province, SubDistrict,
};

use crate::{ApiError, AppState};

type Filters = Result<Query<Vec<(String, String)>>, QueryRejection>;

/// Read the optional integer `name` from the query string. The first
/// occurrence wins if the key is repeated.
fn filter(query: Filters, name: &str) -> Result<Option<i32>, ApiError> {
    let Query(pairs) = query?;
    let raw = pairs
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.as_str());
    Ok(parse_filter(name, raw)?)
}

pub async fn departments(State(state): State<AppState>) -> Result<Json<Vec<Department>>, ApiError> {
    Ok(Json(lookups::departments(&state.pool).await?))
}

pub async fn positions(
    State(state): State<AppState>,
    query: Filters,
) -> Result<Json<Vec<Position>>, ApiError> {
    let department_id = filter(query, "department_id")?;
    Ok(Json(lookups::positions(&state.pool, department_id).await?))
}

pub async fn geographies(State(state): State<AppState>) -> Result<Json<Vec<Geography>>, ApiError> {
    Ok(Json(lookups::geographies(&state.pool).await?))
}

pub async fn provinces(
    State(state): State<AppState>,
    query: Filters,
) -> Result<Json<Vec<Province>>, ApiError> {
    let geography_id = filter(query, "geography_id")?;
    Ok(Json(lookups::provinces(&state.pool, geography_id).await?))
}

pub async fn districts(
    State(state): State<AppState>,
    query: Filters,
) -> Result<Json<Vec<District>>, ApiError> {
    let province_id = filter(query, "province_id")?;
    Ok(Json(lookups::districts(&state.pool, province_id).await?))
}

pub async fn sub_districts(
    State(state): State<AppState>,
    query: Filters,
) -> Result<Json<Vec<SubDistrict>>, ApiError> {
    let district_id = filter(query, "district_id")?;
    Ok(Json(lookups::sub_districts(&state.pool, district_id).await?))
}
