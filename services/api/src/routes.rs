use crate::infra::{AppServices, AppState};
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Extension, Json, Router};
use chrono::Local;
use facility_ops::error::AppError;
use facility_ops::operations::dashboard::dashboard_router;
use facility_ops::operations::directory::directory_router;
use facility_ops::operations::fuel::fuel_router;
use facility_ops::operations::reports::{export_csv, printable_report, ReportError};
use facility_ops::operations::utilities::utility_bill_router;
use facility_ops::operations::vendors::vendor_router;
use facility_ops::operations::workorders::work_order_router;
use facility_ops::operations::OperationError;
use serde::Serialize;
use serde_json::{json, Value};

pub(crate) fn app_router(services: AppServices) -> Router {
    let exports = Router::new()
        .route("/:collection/csv", get(export_csv_endpoint))
        .route("/:collection/print", get(export_print_endpoint))
        .with_state(services.clone());

    let api = Router::new()
        .nest(
            "/work-orders",
            work_order_router(services.work_orders.clone()),
        )
        .nest("/vendors", vendor_router(services.vendors.clone()))
        .nest(
            "/bills/electricity",
            utility_bill_router(services.electricity_bills.clone()),
        )
        .nest(
            "/bills/water",
            utility_bill_router(services.water_bills.clone()),
        )
        .nest("/fuel", fuel_router(services.fuel.clone()))
        .nest("/dashboard", dashboard_router(services.dashboard.clone()))
        .nest("/exports", exports)
        .merge(directory_router(services.directory));

    Router::new()
        .nest("/api/v1", api)
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn export_csv_endpoint(
    State(services): State<AppServices>,
    Path(collection): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let (_, rows) = export_rows(&services, &collection)?;
    let body = export_csv(&rows)?;
    Ok((StatusCode::OK, [(header::CONTENT_TYPE, "text/csv")], body))
}

pub(crate) async fn export_print_endpoint(
    State(services): State<AppServices>,
    Path(collection): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let (title, rows) = export_rows(&services, &collection)?;
    let body = printable_report(title, &rows, Local::now().date_naive())?;
    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
        body,
    ))
}

/// Resolve an export name to its collection, loaded as JSON rows so both
/// export formats share one shape. Unknown names are a 404.
fn export_rows(
    services: &AppServices,
    collection: &str,
) -> Result<(&'static str, Vec<Value>), AppError> {
    let (title, rows) = match collection {
        "work-orders" => ("Work Orders", json_rows(&services.work_orders.list()?)?),
        "vendors" => ("Vendors", json_rows(&services.vendors.list()?)?),
        "branches" => ("Branches", json_rows(&services.directory.branches.list()?)?),
        "assets" => ("Assets", json_rows(&services.directory.assets.list()?)?),
        "users" => ("Users", json_rows(&services.directory.users.list()?)?),
        "electricity-bills" => (
            "Electricity Bills",
            json_rows(&services.electricity_bills.list()?)?,
        ),
        "water-bills" => ("Water Bills", json_rows(&services.water_bills.list()?)?),
        "fuel-logs" => ("Fuel Level Logs", json_rows(&services.fuel.logs()?)?),
        "reorder-requests" => (
            "Reorder Requests",
            json_rows(&services.fuel.reorder_requests()?)?,
        ),
        other => return Err(OperationError::NotFound(other.to_string()).into()),
    };

    Ok((title, rows))
}

fn json_rows<T: Serialize>(records: &[T]) -> Result<Vec<Value>, AppError> {
    let value = serde_json::to_value(records).map_err(ReportError::Serialize)?;
    match value {
        Value::Array(rows) => Ok(rows),
        _ => Ok(Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use facility_ops::operations::workorders::{WorkOrderDraft, WorkOrderType};
    use facility_ops::store::InMemoryStore;
    use std::sync::Arc;

    fn services() -> AppServices {
        AppServices::from_store(Arc::new(InMemoryStore::default()))
    }

    #[tokio::test]
    async fn healthcheck_reports_ok() {
        let Json(body) = healthcheck().await;
        assert_eq!(body, json!({ "status": "ok" }));
    }

    #[tokio::test]
    async fn csv_export_for_empty_collection_is_empty() {
        let response = export_csv_endpoint(
            State(services()),
            Path("work-orders".to_string()),
        )
        .await
        .expect("export succeeds")
        .into_response();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), 1024)
            .await
            .expect("read body");
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn csv_export_carries_a_header_row() {
        let services = services();
        services
            .work_orders
            .add(
                WorkOrderDraft {
                    asset_id: "AST-000001".to_string(),
                    vendor_id: "VEN-000001".to_string(),
                    description: "Replace filters".to_string(),
                    work_order_type: WorkOrderType::Ppm,
                    created_date: None,
                    due_date: NaiveDate::from_ymd_opt(2026, 9, 1).expect("date"),
                    estimated_cost: 180.0,
                },
                NaiveDate::from_ymd_opt(2026, 8, 1).expect("date"),
            )
            .expect("seed order");

        let response = export_csv_endpoint(
            State(services),
            Path("work-orders".to_string()),
        )
        .await
        .expect("export succeeds")
        .into_response();

        let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .expect("read body");
        let text = String::from_utf8(body.to_vec()).expect("utf8");
        assert!(text.lines().next().expect("header").contains("\"id\""));
        assert_eq!(text.lines().count(), 2);
    }

    #[tokio::test]
    async fn unknown_export_collection_is_not_found() {
        let err = export_csv_endpoint(State(services()), Path("invoices".to_string()))
            .await
            .err()
            .expect("unknown collection rejected");

        assert_eq!(
            err.into_response().status(),
            StatusCode::NOT_FOUND
        );
    }
}
