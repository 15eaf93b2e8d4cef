use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use db::PgStore;
use directory::{employees as service, Employee, EmployeeInput};
use listing::{ListParams, ListResult};
use serde_json::{json, Value};

use crate::{ApiError, AppState};

pub async fn list(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<ListResult<Employee>>, ApiError> {
    let Query(pairs) = query?;
    let params = ListParams::from_pairs(pairs);
    let store = PgStore::new(state.pool.clone());
    Ok(Json(service::list_employees(&store, &params).await?))
}

pub async fn get(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Employee>, ApiError> {
    let id = service::parse_employee_id(&id)?;
    Ok(Json(service::get_employee(&state.pool, id).await?))
}

pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<EmployeeInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Employee>), ApiError> {
    let Json(input) = payload?;
    let employee = service::create_employee(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(employee)))
}

pub async fn update(
    Path(id): Path<String>,
    State(state): State<AppState>,
    payload: Result<Json<EmployeeInput>, JsonRejection>,
) -> Result<Json<Employee>, ApiError> {
    let id = service::parse_employee_id(&id)?;
    let Json(input) = payload?;
    Ok(Json(service::update_employee(&state.pool, id, &input).await?))
}

pub async fn delete(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Value>, ApiError> {
    let id = service::parse_employee_id(&id)?;
    service::delete_employee(&state.pool, id).await?;
    Ok(Json(json!({
        "message": "Employee deleted successfully",
        "id": id.to_string(),
    })))
}
