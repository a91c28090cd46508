use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// `reorder_required` is fixed when the log is written and never re-derived,
/// so a later change to the minimum level does not rewrite history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuelLevelLog {
    pub id: String,
    pub branch_site: String,
    pub generator_id: String,
    pub recorded_fuel_level: f64,
    pub minimum_required_level: f64,
    pub reorder_required: bool,
    pub logged_on: NaiveDate,
    pub recorded_by: String,
}

/// Form payload for a level reading; the service derives the flag and stamps
/// the log date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FuelLevelReading {
    pub branch_site: String,
    pub generator_id: String,
    pub recorded_fuel_level: f64,
    pub minimum_required_level: f64,
    pub recorded_by: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReorderStatus {
    Pending,
    Ordered,
    Delivered,
}

impl ReorderStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Ordered => "Ordered",
            Self::Delivered => "Delivered",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReorderRequest {
    pub id: String,
    pub branch_site: String,
    pub generator_id: String,
    pub requested_litres: f64,
    pub status: ReorderStatus,
    pub requested_on: NaiveDate,
}

pub fn reorder_required(recorded_fuel_level: f64, minimum_required_level: f64) -> bool {
    recorded_fuel_level < minimum_required_level
}
