use std::sync::Arc;

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use chrono::{Local, NaiveDate};
use serde::Deserialize;

use super::service::DashboardService;
use super::summary::DashboardSummary;
use super::window::TimeWindow;
use crate::operations::{OperationError, ValidationError};

/// Mounted by the API service under `/api/v1/dashboard`.
pub fn dashboard_router(service: Arc<DashboardService>) -> Router {
    Router::new()
        .route("/summary", get(summary_handler))
        .with_state(service)
}

#[derive(Debug, Deserialize)]
struct SummaryQuery {
    /// Window specifier as the screens send it (`7days`, `30days`, `month`,
    /// `last_month`). Defaults to the 30-day view.
    #[serde(default)]
    window: Option<String>,
    #[serde(default)]
    as_of: Option<NaiveDate>,
}

async fn summary_handler(
    State(service): State<Arc<DashboardService>>,
    Query(query): Query<SummaryQuery>,
) -> Result<Json<DashboardSummary>, OperationError> {
    let window = match query.window.as_deref() {
        None => TimeWindow::Last30Days,
        Some(raw) => {
            TimeWindow::parse(raw).ok_or(ValidationError { field: "window" })?
        }
    };

    let as_of = query.as_of.unwrap_or_else(|| Local::now().date_naive());
    service.summary(window, as_of).map(Json)
}
