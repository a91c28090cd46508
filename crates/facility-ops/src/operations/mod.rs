//! Operational modules: one per administrative area, each composing typed
//! collection handles from [`crate::store`] with the derivation logic that
//! area owns.

pub mod dashboard;
pub mod directory;
pub mod fuel;
pub mod reports;
pub mod utilities;
pub mod vendors;
pub mod workorders;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::store::StoreError;

/// Raised when a required form field arrives empty. Mutations abort before
/// any write, so a failed validation never leaves a partial collection.
#[derive(Debug, thiserror::Error)]
#[error("{field} is required")]
pub struct ValidationError {
    pub field: &'static str,
}

pub(crate) fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError { field })
    } else {
        Ok(())
    }
}

/// Error surface shared by the collection services.
#[derive(Debug, thiserror::Error)]
pub enum OperationError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("record {0} not found")]
    NotFound(String),
}

impl IntoResponse for OperationError {
    fn into_response(self) -> Response {
        let status = match &self {
            OperationError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            OperationError::NotFound(_) => StatusCode::NOT_FOUND,
            OperationError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

/// Next sequential display id for a collection, derived from the highest
/// numeric suffix already present (`WO-000123` style). Ids that do not match
/// the prefix are skipped rather than rejected, since collections may carry
/// hand-entered identifiers.
pub(crate) fn next_record_id<'a>(
    prefix: &str,
    existing: impl Iterator<Item = &'a str>,
) -> String {
    let highest = existing
        .filter_map(|id| id.strip_prefix(prefix)?.strip_prefix('-'))
        .filter_map(|suffix| suffix.parse::<u64>().ok())
        .max()
        .unwrap_or(0);

    format!("{prefix}-{:06}", highest + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_id_starts_at_one() {
        let ids: Vec<&str> = Vec::new();
        assert_eq!(next_record_id("WO", ids.into_iter()), "WO-000001");
    }

    #[test]
    fn id_continues_from_highest_suffix() {
        let ids = ["WO-000002", "WO-000010", "legacy-7"];
        assert_eq!(next_record_id("WO", ids.into_iter()), "WO-000011");
    }

    #[test]
    fn blank_field_fails_validation() {
        let err = require("branch_site", "  ").expect_err("blank rejected");
        assert_eq!(err.field, "branch_site");
    }
}
