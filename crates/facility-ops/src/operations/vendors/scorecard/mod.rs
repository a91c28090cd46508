//! Fixed-rubric vendor scoring: five KPIs at 0-3 points each, summed into a
//! 0-15 total and banded into an overall rating. Deterministic for a given
//! work-order snapshot and reference date, so it is recomputed per request
//! rather than cached.

mod rubric;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::operations::workorders::WorkOrder;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KpiId {
    PpmTimeliness,
    ReactiveSla,
    CompletionRate,
    StockAvailability,
    MonthlyReporting,
}

impl KpiId {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::PpmTimeliness,
            Self::ReactiveSla,
            Self::CompletionRate,
            Self::StockAvailability,
            Self::MonthlyReporting,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::PpmTimeliness => "PPM Timeliness",
            Self::ReactiveSla => "Reactive SLA Adherence",
            Self::CompletionRate => "Completion Rate",
            Self::StockAvailability => "Stock Availability",
            Self::MonthlyReporting => "Monthly Reporting",
        }
    }
}

/// Discrete contribution to a scorecard, so reviewers can audit each band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiScore {
    pub id: KpiId,
    pub score: u8,
    pub notes: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverallRating {
    NotRated,
    Poor,
    Good,
    Excellent,
}

impl OverallRating {
    /// Step function over the summed KPI scores.
    pub const fn from_total(total: u8) -> Self {
        match total {
            0 => Self::NotRated,
            1..=8 => Self::Poor,
            9..=12 => Self::Good,
            _ => Self::Excellent,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::NotRated => "Not Rated",
            Self::Poor => "Poor",
            Self::Good => "Good",
            Self::Excellent => "Excellent",
        }
    }
}

/// View model recomputed on every request from work-order history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendorScorecard {
    pub vendor_id: String,
    pub kpis: Vec<KpiScore>,
    pub total_score: u8,
    pub overall_rating: OverallRating,
}

/// Score a vendor against the full work-order collection. A vendor with no
/// work orders on record scores zero on every KPI and stays unrated.
pub fn score_vendor(vendor_id: &str, orders: &[WorkOrder], today: NaiveDate) -> VendorScorecard {
    let history: Vec<&WorkOrder> = orders
        .iter()
        .filter(|order| order.vendor_id == vendor_id)
        .collect();

    let kpis = if history.is_empty() {
        KpiId::ordered()
            .into_iter()
            .map(|id| KpiScore {
                id,
                score: 0,
                notes: "no work orders on record".to_string(),
            })
            .collect()
    } else {
        vec![
            rubric::ppm_timeliness(&history),
            rubric::reactive_sla(&history),
            rubric::completion_rate(&history),
            rubric::stock_availability(&history),
            rubric::monthly_reporting(&history, today),
        ]
    };

    let total_score = kpis.iter().map(|kpi| kpi.score).sum();

    VendorScorecard {
        vendor_id: vendor_id.to_string(),
        kpis,
        total_score,
        overall_rating: OverallRating::from_total(total_score),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operations::workorders::{SlaStatus, WorkOrderStatus, WorkOrderType};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn order(
        vendor_id: &str,
        work_order_type: WorkOrderType,
        sla_status: SlaStatus,
        status: WorkOrderStatus,
        created: NaiveDate,
    ) -> WorkOrder {
        WorkOrder {
            id: "WO-000001".to_string(),
            asset_id: "AST-000001".to_string(),
            vendor_id: vendor_id.to_string(),
            description: "Service visit".to_string(),
            status,
            work_order_type,
            created_date: created,
            due_date: created,
            closed_date: None,
            sla_status,
            estimated_cost: 100.0,
        }
    }

    fn ppm_orders(vendor_id: &str, met: usize, breached: usize) -> Vec<WorkOrder> {
        let created = date(2026, 3, 10);
        let mut orders = Vec::new();
        for _ in 0..met {
            orders.push(order(
                vendor_id,
                WorkOrderType::Ppm,
                SlaStatus::Met,
                WorkOrderStatus::Closed,
                created,
            ));
        }
        for _ in 0..breached {
            orders.push(order(
                vendor_id,
                WorkOrderType::Ppm,
                SlaStatus::Breached,
                WorkOrderStatus::Closed,
                created,
            ));
        }
        orders
    }

    fn kpi(scorecard: &VendorScorecard, id: KpiId) -> u8 {
        scorecard
            .kpis
            .iter()
            .find(|kpi| kpi.id == id)
            .expect("kpi present")
            .score
    }

    #[test]
    fn ppm_timeliness_is_zero_iff_no_ppm_orders() {
        let today = date(2026, 4, 1);
        let reactive_only = vec![order(
            "VEN-000001",
            WorkOrderType::Reactive,
            SlaStatus::Met,
            WorkOrderStatus::Closed,
            date(2026, 3, 1),
        )];
        let scorecard = score_vendor("VEN-000001", &reactive_only, today);
        assert_eq!(kpi(&scorecard, KpiId::PpmTimeliness), 0);

        let with_ppm = ppm_orders("VEN-000001", 1, 0);
        let scorecard = score_vendor("VEN-000001", &with_ppm, today);
        assert!(kpi(&scorecard, KpiId::PpmTimeliness) > 0);
    }

    #[test]
    fn ninety_percent_on_time_scores_three() {
        let orders = ppm_orders("VEN-000001", 9, 1);
        let scorecard = score_vendor("VEN-000001", &orders, date(2026, 4, 1));
        assert_eq!(kpi(&scorecard, KpiId::PpmTimeliness), 3);
    }

    #[test]
    fn seventy_percent_on_time_scores_two() {
        let orders = ppm_orders("VEN-000001", 7, 3);
        let scorecard = score_vendor("VEN-000001", &orders, date(2026, 4, 1));
        assert_eq!(kpi(&scorecard, KpiId::PpmTimeliness), 2);
    }

    #[test]
    fn vendor_without_history_is_unrated() {
        let orders = ppm_orders("VEN-000002", 5, 0);
        let scorecard = score_vendor("VEN-000001", &orders, date(2026, 4, 1));
        assert_eq!(scorecard.total_score, 0);
        assert_eq!(scorecard.overall_rating, OverallRating::NotRated);
        assert!(scorecard.kpis.iter().all(|kpi| kpi.score == 0));
    }

    #[test]
    fn stock_availability_caps_at_two() {
        let orders = ppm_orders("VEN-000001", 20, 0);
        let scorecard = score_vendor("VEN-000001", &orders, date(2026, 4, 1));
        assert_eq!(kpi(&scorecard, KpiId::StockAvailability), 2);
    }

    #[test]
    fn monthly_reporting_prefers_current_month_activity() {
        let today = date(2026, 3, 20);
        let current = ppm_orders("VEN-000001", 1, 0);
        let scorecard = score_vendor("VEN-000001", &current, today);
        assert_eq!(kpi(&scorecard, KpiId::MonthlyReporting), 3);

        let stale = vec![order(
            "VEN-000001",
            WorkOrderType::Ppm,
            SlaStatus::Met,
            WorkOrderStatus::Closed,
            date(2025, 11, 2),
        )];
        let scorecard = score_vendor("VEN-000001", &stale, today);
        assert_eq!(kpi(&scorecard, KpiId::MonthlyReporting), 2);
    }

    #[test]
    fn rating_is_monotonic_in_total_score() {
        fn rank(rating: OverallRating) -> u8 {
            match rating {
                OverallRating::NotRated => 0,
                OverallRating::Poor => 1,
                OverallRating::Good => 2,
                OverallRating::Excellent => 3,
            }
        }

        let mut previous = rank(OverallRating::from_total(0));
        for total in 1..=15 {
            let current = rank(OverallRating::from_total(total));
            assert!(current >= previous, "rating regressed at total {total}");
            previous = current;
        }
        assert_eq!(OverallRating::from_total(15), OverallRating::Excellent);
    }
}
