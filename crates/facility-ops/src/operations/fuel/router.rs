use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Local;
use serde::Deserialize;

use super::domain::{FuelLevelLog, FuelLevelReading, ReorderRequest, ReorderStatus};
use super::service::FuelService;
use crate::operations::OperationError;

/// Relative-path router; the API service nests it under `/api/v1/fuel`.
pub fn fuel_router(service: Arc<FuelService>) -> Router {
    Router::new()
        .route("/logs", get(logs_handler).post(record_handler))
        .route("/reorder-requests", get(reorders_handler))
        .route("/reorder-requests/:id/status", post(reorder_status_handler))
        .with_state(service)
}

#[derive(Debug, Deserialize)]
struct ReorderStatusRequest {
    status: ReorderStatus,
}

async fn logs_handler(
    State(service): State<Arc<FuelService>>,
) -> Result<Json<Vec<FuelLevelLog>>, OperationError> {
    service.logs().map(Json)
}

async fn record_handler(
    State(service): State<Arc<FuelService>>,
    Json(reading): Json<FuelLevelReading>,
) -> Result<(StatusCode, Json<FuelLevelLog>), OperationError> {
    let log = service.record_level(reading, Local::now().date_naive())?;
    Ok((StatusCode::CREATED, Json(log)))
}

async fn reorders_handler(
    State(service): State<Arc<FuelService>>,
) -> Result<Json<Vec<ReorderRequest>>, OperationError> {
    service.reorder_requests().map(Json)
}

async fn reorder_status_handler(
    State(service): State<Arc<FuelService>>,
    Path(id): Path<String>,
    Json(request): Json<ReorderStatusRequest>,
) -> Result<Json<ReorderRequest>, OperationError> {
    service.set_reorder_status(&id, request.status).map(Json)
}
