use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post, put};
use axum::{Json, Router};
use chrono::{Local, NaiveDate};
use serde::Deserialize;

use super::domain::{WorkOrder, WorkOrderDraft};
use super::service::WorkOrderService;
use crate::operations::OperationError;

/// Router exposing the work-order collection. Mounted by the API service
/// under `/api/v1/work-orders`.
pub fn work_order_router(service: Arc<WorkOrderService>) -> Router {
    Router::new()
        .route("/", get(list_handler).post(create_handler))
        .route("/:id", put(update_handler).delete(delete_handler))
        .route("/:id/close", post(close_handler))
        .with_state(service)
}

#[derive(Debug, Deserialize)]
struct CloseRequest {
    #[serde(default)]
    closed_on: Option<NaiveDate>,
}

async fn list_handler(
    State(service): State<Arc<WorkOrderService>>,
) -> Result<Json<Vec<WorkOrder>>, OperationError> {
    service.list().map(Json)
}

async fn create_handler(
    State(service): State<Arc<WorkOrderService>>,
    Json(draft): Json<WorkOrderDraft>,
) -> Result<(StatusCode, Json<WorkOrder>), OperationError> {
    let order = service.add(draft, Local::now().date_naive())?;
    Ok((StatusCode::CREATED, Json(order)))
}

async fn update_handler(
    State(service): State<Arc<WorkOrderService>>,
    Path(id): Path<String>,
    Json(mut updated): Json<WorkOrder>,
) -> Result<Json<WorkOrder>, OperationError> {
    updated.id = id;
    service
        .update(updated, Local::now().date_naive())
        .map(Json)
}

async fn close_handler(
    State(service): State<Arc<WorkOrderService>>,
    Path(id): Path<String>,
    Json(request): Json<CloseRequest>,
) -> Result<Json<WorkOrder>, OperationError> {
    service
        .close(&id, request.closed_on, Local::now().date_naive())
        .map(Json)
}

async fn delete_handler(
    State(service): State<Arc<WorkOrderService>>,
    Path(id): Path<String>,
) -> Result<StatusCode, OperationError> {
    service.delete(&id)?;
    Ok(StatusCode::NO_CONTENT)
}
