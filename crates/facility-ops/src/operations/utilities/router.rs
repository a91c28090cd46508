use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Local;

use super::domain::{BillStatusChange, UtilityBill, UtilityBillDraft};
use super::service::UtilityBillService;
use crate::operations::OperationError;

/// Relative-path router; the API service nests one instance per utility kind
/// (`/api/v1/bills/electricity`, `/api/v1/bills/water`).
pub fn utility_bill_router(service: Arc<UtilityBillService>) -> Router {
    Router::new()
        .route("/", get(list_handler).post(create_handler))
        .route("/:id", axum::routing::delete(delete_handler))
        .route("/:id/status", post(status_handler))
        .route("/:id/coupa-upload", post(coupa_handler))
        .with_state(service)
}

async fn list_handler(
    State(service): State<Arc<UtilityBillService>>,
) -> Result<Json<Vec<UtilityBill>>, OperationError> {
    service.list().map(Json)
}

async fn create_handler(
    State(service): State<Arc<UtilityBillService>>,
    Json(draft): Json<UtilityBillDraft>,
) -> Result<(StatusCode, Json<UtilityBill>), OperationError> {
    let bill = service.add(draft)?;
    Ok((StatusCode::CREATED, Json(bill)))
}

async fn status_handler(
    State(service): State<Arc<UtilityBillService>>,
    Path(id): Path<String>,
    Json(change): Json<BillStatusChange>,
) -> Result<Json<UtilityBill>, OperationError> {
    service
        .apply_change(&id, &change, Local::now().date_naive())
        .map(Json)
}

async fn coupa_handler(
    State(service): State<Arc<UtilityBillService>>,
    Path(id): Path<String>,
) -> Result<Json<UtilityBill>, OperationError> {
    service.mark_coupa_upload(&id).map(Json)
}

async fn delete_handler(
    State(service): State<Arc<UtilityBillService>>,
    Path(id): Path<String>,
) -> Result<StatusCode, OperationError> {
    service.delete(&id)?;
    Ok(StatusCode::NO_CONTENT)
}
