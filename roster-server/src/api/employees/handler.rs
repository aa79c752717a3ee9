//! Employee API Handlers

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};

use crate::core::ServerState;
use crate::db::repository::employee;
use crate::utils::validation::is_blank;
use crate::utils::{AppError, AppResult};
use shared::models::{Employee, EmployeeCreate, EmployeeUpdate};
use shared::response::{DeleteResponse, MSG_REQUIRED_FIELDS};

/// Path ids that are not integers are reported exactly like unknown ids
fn parse_id(raw: &str) -> AppResult<i64> {
    raw.parse::<i64>().map_err(|_| AppError::employee_not_found())
}

/// Extract the `{id}` segment; undecodable segments (e.g. invalid UTF-8)
/// are unknown ids too
fn employee_id(path: Result<Path<String>, PathRejection>) -> AppResult<i64> {
    let Path(raw) = path.map_err(|_| AppError::employee_not_found())?;
    parse_id(&raw)
}

/// GET /employees - 获取所有员工
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Employee>>> {
    let employees = employee::find_all(state.pool()).await?;
    Ok(Json(employees))
}

/// GET /employees/{id} - 获取单个员工
pub async fn get_by_id(
    State(state): State<ServerState>,
    id: Result<Path<String>, PathRejection>,
) -> AppResult<Json<Employee>> {
    let id = employee_id(id)?;
    let employee = employee::find_by_id(state.pool(), id)
        .await?
        .ok_or_else(AppError::employee_not_found)?;
    Ok(Json(employee))
}

/// POST /employees - 创建员工
///
/// Required fields are checked here, before the store is touched.
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<EmployeeCreate>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Employee>)> {
    let Json(payload) = payload?;

    if is_blank(payload.name.as_deref())
        || is_blank(payload.email.as_deref())
        || is_blank(payload.position.as_deref())
    {
        return Err(AppError::validation(MSG_REQUIRED_FIELDS));
    }

    let employee = employee::create(state.pool(), payload)
        .await
        .map_err(AppError::from_write)?;

    tracing::info!(id = employee.id, "Employee created");
    Ok((StatusCode::CREATED, Json(employee)))
}

/// PUT /employees/{id} - 更新员工 (部分更新)
pub async fn update(
    State(state): State<ServerState>,
    id: Result<Path<String>, PathRejection>,
    payload: Result<Json<EmployeeUpdate>, JsonRejection>,
) -> AppResult<Json<Employee>> {
    let id = employee_id(id)?;
    let Json(payload) = payload?;

    let employee = employee::update(state.pool(), id, payload)
        .await
        .map_err(AppError::from_write)?;

    tracing::info!(id, "Employee updated");
    Ok(Json(employee))
}

/// DELETE /employees/{id} - 删除员工 (硬删除)
pub async fn delete(
    State(state): State<ServerState>,
    id: Result<Path<String>, PathRejection>,
) -> AppResult<Json<DeleteResponse>> {
    let id = employee_id(id)?;
    employee::delete(state.pool(), id).await?;

    tracing::info!(id, "Employee deleted");
    Ok(Json(DeleteResponse::deleted(id)))
}
