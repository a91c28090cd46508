use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkOrderStatus {
    Open,
    Closed,
    Rejected,
}

impl WorkOrderStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::Closed => "Closed",
            Self::Rejected => "Rejected",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkOrderType {
    Ppm,
    Reactive,
}

impl WorkOrderType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ppm => "PPM",
            Self::Reactive => "Reactive",
        }
    }
}

/// Binary service-level flag per work order, from due-date comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlaStatus {
    Met,
    Breached,
}

impl SlaStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Met => "Met",
            Self::Breached => "Breached",
        }
    }
}

/// `asset_id` and `vendor_id` are loose references into the asset and vendor
/// collections; nothing enforces that a matching record exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkOrder {
    pub id: String,
    pub asset_id: String,
    pub vendor_id: String,
    pub description: String,
    pub status: WorkOrderStatus,
    pub work_order_type: WorkOrderType,
    pub created_date: NaiveDate,
    pub due_date: NaiveDate,
    pub closed_date: Option<NaiveDate>,
    pub sla_status: SlaStatus,
    pub estimated_cost: f64,
}

/// Form payload for raising a work order; the service assigns the id and
/// derives the initial SLA standing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkOrderDraft {
    pub asset_id: String,
    pub vendor_id: String,
    pub description: String,
    pub work_order_type: WorkOrderType,
    #[serde(default)]
    pub created_date: Option<NaiveDate>,
    pub due_date: NaiveDate,
    pub estimated_cost: f64,
}

/// A closed order met its SLA when it closed on or before the due date. An
/// open order is only counted as breached once the due date has passed.
pub fn derive_sla_status(
    due_date: NaiveDate,
    closed_date: Option<NaiveDate>,
    today: NaiveDate,
) -> SlaStatus {
    match closed_date {
        Some(closed) if closed <= due_date => SlaStatus::Met,
        Some(_) => SlaStatus::Breached,
        None if today > due_date => SlaStatus::Breached,
        None => SlaStatus::Met,
    }
}
