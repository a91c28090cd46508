use chrono::NaiveDate;
use serde::Serialize;

use super::window::{MonthRef, TimeWindow};
use crate::operations::directory::{Asset, AssetStatus, Branch, BranchStatus};
use crate::operations::fuel::{ReorderRequest, ReorderStatus};
use crate::operations::utilities::UtilityBill;
use crate::operations::workorders::{SlaStatus, WorkOrder, WorkOrderStatus, WorkOrderType};

/// Borrowed snapshot of every collection the dashboard reads.
#[derive(Debug, Clone, Copy)]
pub struct DashboardInputs<'a> {
    pub work_orders: &'a [WorkOrder],
    pub electricity_bills: &'a [UtilityBill],
    pub water_bills: &'a [UtilityBill],
    pub reorder_requests: &'a [ReorderRequest],
    pub branches: &'a [Branch],
    pub assets: &'a [Asset],
}

/// Flat struct of named scalars consumed by the dashboard screen.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    pub window: TimeWindow,
    pub window_label: &'static str,
    pub open_work_orders: usize,
    pub closed_work_orders: usize,
    pub sla_breached_count: usize,
    pub ppm_compliance_rate: f64,
    pub estimated_cost_total: f64,
    pub utility_spend: f64,
    pub pending_reorders: usize,
    pub active_branches: usize,
    pub active_assets: usize,
    /// Work orders raised this month vs. last month; `None` when last month
    /// had none, so the screen shows a dash instead of a runaway percentage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_orders_vs_last_month: Option<f64>,
}

impl DashboardSummary {
    pub fn build(inputs: DashboardInputs<'_>, window: TimeWindow, today: NaiveDate) -> Self {
        let in_window: Vec<&WorkOrder> = inputs
            .work_orders
            .iter()
            .filter(|order| window.contains(order.created_date, today))
            .collect();

        let open_work_orders = in_window
            .iter()
            .filter(|order| order.status == WorkOrderStatus::Open)
            .count();
        let closed_work_orders = in_window
            .iter()
            .filter(|order| order.status == WorkOrderStatus::Closed)
            .count();
        let sla_breached_count = in_window
            .iter()
            .filter(|order| order.sla_status == SlaStatus::Breached)
            .count();

        let ppm: Vec<&&WorkOrder> = in_window
            .iter()
            .filter(|order| order.work_order_type == WorkOrderType::Ppm)
            .collect();
        let ppm_on_time = ppm
            .iter()
            .filter(|order| order.sla_status == SlaStatus::Met)
            .count();
        let ppm_compliance_rate = ratio(ppm_on_time, ppm.len());

        let estimated_cost_total = in_window.iter().map(|order| order.estimated_cost).sum();

        let month = window.month_ref(today);
        let utility_spend = bill_total(inputs.electricity_bills, month)
            + bill_total(inputs.water_bills, month);

        let pending_reorders = inputs
            .reorder_requests
            .iter()
            .filter(|request| request.status == ReorderStatus::Pending)
            .count();

        let active_branches = inputs
            .branches
            .iter()
            .filter(|branch| branch.status == BranchStatus::Active)
            .count();
        let active_assets = inputs
            .assets
            .iter()
            .filter(|asset| asset.status == AssetStatus::Active)
            .count();

        let current_month = MonthRef::containing(today);
        let raised_current = orders_created_in(inputs.work_orders, current_month);
        let raised_previous = orders_created_in(inputs.work_orders, current_month.previous());
        let work_orders_vs_last_month =
            percent_change(raised_current as f64, raised_previous as f64);

        Self {
            window,
            window_label: window.label(),
            open_work_orders,
            closed_work_orders,
            sla_breached_count,
            ppm_compliance_rate,
            estimated_cost_total,
            utility_spend,
            pending_reorders,
            active_branches,
            active_assets,
            work_orders_vs_last_month,
        }
    }
}

/// Ratio guarded against an empty denominator.
fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

fn orders_created_in(orders: &[WorkOrder], month: MonthRef) -> usize {
    orders
        .iter()
        .filter(|order| month.matches(order.created_date))
        .count()
}

/// Bills carry their period as entered text; anything that does not match the
/// month key is silently excluded.
fn bill_total(bills: &[UtilityBill], month: MonthRef) -> f64 {
    let key = month.key();
    bills
        .iter()
        .filter(|bill| bill.month == key)
        .map(|bill| bill.bill_amount)
        .sum()
}

/// Month-over-month percent change; `None` unless the previous value is
/// positive.
pub fn percent_change(current: f64, previous: f64) -> Option<f64> {
    if previous > 0.0 {
        Some((current - previous) / previous * 100.0)
    } else {
        None
    }
}
