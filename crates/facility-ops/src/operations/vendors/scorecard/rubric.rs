use chrono::{Datelike, NaiveDate};

use super::{KpiId, KpiScore};
use crate::operations::workorders::{SlaStatus, WorkOrder, WorkOrderStatus, WorkOrderType};

/// Shared banding for the ratio-based KPIs.
fn ratio_band(ratio: f64) -> u8 {
    if ratio >= 0.9 {
        3
    } else if ratio >= 0.7 {
        2
    } else {
        1
    }
}

fn on_time_ratio(orders: &[&WorkOrder]) -> f64 {
    let met = orders
        .iter()
        .filter(|order| order.sla_status == SlaStatus::Met)
        .count();
    met as f64 / orders.len() as f64
}

pub(super) fn ppm_timeliness(history: &[&WorkOrder]) -> KpiScore {
    let ppm: Vec<&WorkOrder> = history
        .iter()
        .copied()
        .filter(|order| order.work_order_type == WorkOrderType::Ppm)
        .collect();

    if ppm.is_empty() {
        return KpiScore {
            id: KpiId::PpmTimeliness,
            score: 0,
            notes: "no PPM work orders".to_string(),
        };
    }

    let ratio = on_time_ratio(&ppm);
    KpiScore {
        id: KpiId::PpmTimeliness,
        score: ratio_band(ratio),
        notes: format!("on-time ratio {:.2} across {} PPM orders", ratio, ppm.len()),
    }
}

pub(super) fn reactive_sla(history: &[&WorkOrder]) -> KpiScore {
    let reactive: Vec<&WorkOrder> = history
        .iter()
        .copied()
        .filter(|order| order.work_order_type != WorkOrderType::Ppm)
        .collect();

    if reactive.is_empty() {
        return KpiScore {
            id: KpiId::ReactiveSla,
            score: 0,
            notes: "no reactive work orders".to_string(),
        };
    }

    let ratio = on_time_ratio(&reactive);
    KpiScore {
        id: KpiId::ReactiveSla,
        score: ratio_band(ratio),
        notes: format!(
            "on-time ratio {:.2} across {} reactive orders",
            ratio,
            reactive.len()
        ),
    }
}

pub(super) fn completion_rate(history: &[&WorkOrder]) -> KpiScore {
    let closed = history
        .iter()
        .filter(|order| order.status == WorkOrderStatus::Closed)
        .count();
    let ratio = closed as f64 / history.len() as f64;

    KpiScore {
        id: KpiId::CompletionRate,
        score: ratio_band(ratio),
        notes: format!("{closed} of {} orders closed", history.len()),
    }
}

/// Binary proxy carried over from the source rubric: any history at all earns
/// 2 and the KPI never reaches 3.
pub(super) fn stock_availability(history: &[&WorkOrder]) -> KpiScore {
    let score = if history.is_empty() { 0 } else { 2 };
    KpiScore {
        id: KpiId::StockAvailability,
        score,
        notes: format!("{} orders on record", history.len()),
    }
}

pub(super) fn monthly_reporting(history: &[&WorkOrder], today: NaiveDate) -> KpiScore {
    let current_month = history.iter().any(|order| {
        order.created_date.year() == today.year() && order.created_date.month() == today.month()
    });

    let (score, notes) = if current_month {
        (3, "activity recorded this calendar month".to_string())
    } else {
        (2, "historical activity only".to_string())
    };

    KpiScore {
        id: KpiId::MonthlyReporting,
        score,
        notes,
    }
}
