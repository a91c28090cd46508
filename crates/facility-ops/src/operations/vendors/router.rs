use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, put};
use axum::{Json, Router};
use chrono::{Local, NaiveDate};
use serde::Deserialize;

use super::domain::{Vendor, VendorDraft};
use super::scorecard::VendorScorecard;
use super::service::VendorService;
use crate::operations::OperationError;

/// Mounted by the API service under `/api/v1/vendors`.
pub fn vendor_router(service: Arc<VendorService>) -> Router {
    Router::new()
        .route("/", get(list_handler).post(create_handler))
        .route("/:id", put(update_handler).delete(delete_handler))
        .route("/:id/scorecard", get(scorecard_handler))
        .with_state(service)
}

#[derive(Debug, Deserialize)]
struct ScorecardQuery {
    /// Reference date for the current-month KPI; defaults to today.
    #[serde(default)]
    as_of: Option<NaiveDate>,
}

async fn list_handler(
    State(service): State<Arc<VendorService>>,
) -> Result<Json<Vec<Vendor>>, OperationError> {
    service.list().map(Json)
}

async fn create_handler(
    State(service): State<Arc<VendorService>>,
    Json(draft): Json<VendorDraft>,
) -> Result<(StatusCode, Json<Vendor>), OperationError> {
    let vendor = service.add(draft)?;
    Ok((StatusCode::CREATED, Json(vendor)))
}

async fn update_handler(
    State(service): State<Arc<VendorService>>,
    Path(id): Path<String>,
    Json(mut updated): Json<Vendor>,
) -> Result<Json<Vendor>, OperationError> {
    updated.id = id;
    service.update(updated).map(Json)
}

async fn delete_handler(
    State(service): State<Arc<VendorService>>,
    Path(id): Path<String>,
) -> Result<StatusCode, OperationError> {
    service.delete(&id)?;
    Ok(StatusCode::NO_CONTENT)
}

async fn scorecard_handler(
    State(service): State<Arc<VendorService>>,
    Path(id): Path<String>,
    Query(query): Query<ScorecardQuery>,
) -> Result<Json<VendorScorecard>, OperationError> {
    let as_of = query.as_of.unwrap_or_else(|| Local::now().date_naive());
    service.scorecard(&id, as_of).map(Json)
}
