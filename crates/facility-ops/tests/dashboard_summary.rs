use std::sync::Arc;

use chrono::NaiveDate;
use facility_ops::operations::dashboard::{DashboardService, TimeWindow};
use facility_ops::operations::directory::{AssetCategory, AssetDraft, AssetService, BranchDraft, BranchService};
use facility_ops::operations::fuel::{FuelLevelReading, FuelService};
use facility_ops::operations::utilities::{UtilityBillDraft, UtilityBillService};
use facility_ops::operations::workorders::{WorkOrderDraft, WorkOrderService, WorkOrderType};
use facility_ops::store::{InMemoryStore, KeyValueStore};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn order(vendor_id: &str, created: NaiveDate, due: NaiveDate, cost: f64) -> WorkOrderDraft {
    WorkOrderDraft {
        asset_id: "AST-000001".to_string(),
        vendor_id: vendor_id.to_string(),
        description: "Service visit".to_string(),
        work_order_type: WorkOrderType::Reactive,
        created_date: Some(created),
        due_date: due,
        estimated_cost: cost,
    }
}

#[test]
fn summary_reflects_every_collection() {
    let store: Arc<dyn KeyValueStore> = Arc::new(InMemoryStore::default());
    let today = date(2026, 8, 10);

    let branches = BranchService::new(store.clone());
    branches
        .add(BranchDraft {
            name: "Accra North".to_string(),
            code: "ACC-N".to_string(),
            region: "Greater Accra".to_string(),
            employees: 42,
            floor_area_sqm: 640.0,
        })
        .expect("branch");

    let assets = AssetService::new(store.clone());
    assets
        .add(AssetDraft {
            name: "Generator 7".to_string(),
            category: AssetCategory::Generator,
            branch_site: "Accra North".to_string(),
        })
        .expect("asset");

    let orders = WorkOrderService::new(store.clone());
    // One open in the window, one closed late, one outside the window.
    orders
        .add(order("VEN-000001", date(2026, 8, 8), date(2026, 8, 20), 200.0), today)
        .expect("add");
    let late = orders
        .add(order("VEN-000001", date(2026, 8, 5), date(2026, 8, 6), 300.0), today)
        .expect("add");
    orders
        .close(&late.id, Some(date(2026, 8, 9)), today)
        .expect("close");
    orders
        .add(order("VEN-000001", date(2026, 6, 1), date(2026, 6, 10), 900.0), today)
        .expect("add");

    let electricity = UtilityBillService::electricity(store.clone());
    electricity
        .add(UtilityBillDraft {
            month: "2026-08".to_string(),
            branch_site: "Accra North".to_string(),
            bill_amount: 1500.0,
            recorded_by: "k.mensah".to_string(),
        })
        .expect("bill");
    let water = UtilityBillService::water(store.clone());
    water
        .add(UtilityBillDraft {
            month: "2026-08".to_string(),
            branch_site: "Accra North".to_string(),
            bill_amount: 320.0,
            recorded_by: "k.mensah".to_string(),
        })
        .expect("bill");

    let fuel = FuelService::new(store.clone());
    fuel.record_level(
        FuelLevelReading {
            branch_site: "Accra North".to_string(),
            generator_id: "GEN-07".to_string(),
            recorded_fuel_level: 500.0,
            minimum_required_level: 800.0,
            recorded_by: "j.annan".to_string(),
        },
        today,
    )
    .expect("fuel log");

    let summary = DashboardService::new(store)
        .summary(TimeWindow::Last30Days, today)
        .expect("summary");

    assert_eq!(summary.open_work_orders, 1);
    assert_eq!(summary.closed_work_orders, 1);
    assert_eq!(summary.sla_breached_count, 1);
    assert!((summary.estimated_cost_total - 500.0).abs() < f64::EPSILON);
    assert!((summary.utility_spend - 1820.0).abs() < f64::EPSILON);
    assert_eq!(summary.pending_reorders, 1);
    assert_eq!(summary.active_branches, 1);
    assert_eq!(summary.active_assets, 1);
}

#[test]
fn last_month_in_january_reaches_back_to_december() {
    let store: Arc<dyn KeyValueStore> = Arc::new(InMemoryStore::default());
    let today = date(2026, 1, 10);

    let orders = WorkOrderService::new(store.clone());
    orders
        .add(
            order("VEN-000001", date(2025, 12, 20), date(2025, 12, 28), 150.0),
            today,
        )
        .expect("add");
    orders
        .add(
            order("VEN-000001", date(2026, 1, 5), date(2026, 1, 15), 150.0),
            today,
        )
        .expect("add");

    let december = UtilityBillService::electricity(store.clone());
    december
        .add(UtilityBillDraft {
            month: "2025-12".to_string(),
            branch_site: "Accra North".to_string(),
            bill_amount: 990.0,
            recorded_by: "k.mensah".to_string(),
        })
        .expect("bill");

    let summary = DashboardService::new(store)
        .summary(TimeWindow::LastMonth, today)
        .expect("summary");

    // The window and the billing month both land on December 2025.
    assert_eq!(summary.open_work_orders + summary.closed_work_orders, 1);
    assert!((summary.utility_spend - 990.0).abs() < f64::EPSILON);
    // One order raised in January against one in December.
    assert_eq!(summary.work_orders_vs_last_month, Some(0.0));
}

#[test]
fn empty_store_summarizes_to_zeroes() {
    let summary = DashboardService::new(Arc::new(InMemoryStore::default()))
        .summary(TimeWindow::CurrentMonth, date(2026, 8, 10))
        .expect("summary");

    assert_eq!(summary.open_work_orders, 0);
    assert_eq!(summary.ppm_compliance_rate, 0.0);
    assert_eq!(summary.utility_spend, 0.0);
    assert!(summary.work_orders_vs_last_month.is_none());
}
