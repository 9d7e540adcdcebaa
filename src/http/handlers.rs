//! Request handlers for the employee REST surface.
//!
//! Handlers only extract parameters, call the service and pick a status.
//! Every outcome is counted in `facade_requests_total`.

use std::time::Instant;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::employee::{CreateEmployeeRequest, EmployeeResult};
use crate::http::response::status_for;
use crate::http::server::AppState;
use crate::observability::metrics;

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
}

fn respond<T: Serialize>(
    operation: &'static str,
    start: Instant,
    success: StatusCode,
    result: EmployeeResult<T>,
) -> Response {
    match result {
        Ok(body) => {
            metrics::record_request(operation, success.as_u16(), start);
            (success, Json(body)).into_response()
        }
        Err(e) => {
            let status = status_for(e.kind());
            tracing::warn!(operation, status = status.as_u16(), error = %e, "Operation failed");
            metrics::record_request(operation, status.as_u16(), start);
            e.into_response()
        }
    }
}

pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub async fn list_all(State(state): State<AppState>) -> Response {
    let start = Instant::now();
    let result = state.service.list_all().await;
    respond("list_all", start, StatusCode::OK, result)
}

pub async fn search(State(state): State<AppState>, Path(name): Path<String>) -> Response {
    let start = Instant::now();
    let result = state.service.search_by_name(&name).await;
    respond("search", start, StatusCode::OK, result)
}

pub async fn get_by_id(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let start = Instant::now();
    let result = state.service.get_by_id(&id).await;
    respond("get_by_id", start, StatusCode::OK, result)
}

pub async fn highest_salary(State(state): State<AppState>) -> Response {
    let start = Instant::now();
    let result = state.service.highest_salary().await;
    respond("highest_salary", start, StatusCode::OK, result)
}

pub async fn top_ten_names(State(state): State<AppState>) -> Response {
    let start = Instant::now();
    let result = state.service.top_ten_names().await;
    respond("top_ten_names", start, StatusCode::OK, result)
}

pub async fn create(
    State(state): State<AppState>,
    Json(request): Json<CreateEmployeeRequest>,
) -> Response {
    let start = Instant::now();
    let result = state.service.create(request).await;
    respond("create", start, StatusCode::CREATED, result)
}

pub async fn delete_by_id(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let start = Instant::now();
    let result = state.service.delete_by_id(&id).await;
    respond("delete_by_id", start, StatusCode::OK, result)
}
