use crate::infra::{build_store, parse_date, AppServices};
use chrono::{Duration, Local, NaiveDate};
use clap::Args;
use facility_ops::config::AppConfig;
use facility_ops::error::AppError;
use facility_ops::operations::dashboard::{
    DashboardService, DashboardSummary, MonthRef, TimeWindow,
};
use facility_ops::operations::directory::{AssetCategory, AssetDraft, BranchDraft};
use facility_ops::operations::fuel::FuelLevelReading;
use facility_ops::operations::reports::export_csv;
use facility_ops::operations::utilities::{
    ApprovalStatus, BillStatusChange, PaymentStatus, UtilityBillDraft,
};
use facility_ops::operations::vendors::{Vendor, VendorDraft, VendorScorecard};
use facility_ops::operations::workorders::{WorkOrderDraft, WorkOrderType};
use facility_ops::operations::{OperationError, ValidationError};
use facility_ops::store::InMemoryStore;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct DashboardArgs {
    /// Window specifier: 7days, 30days, month, or last_month
    #[arg(long)]
    pub(crate) window: Option<String>,
    /// Reference date for the summary (YYYY-MM-DD, defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) as_of: Option<NaiveDate>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Override the demo's reference date (YYYY-MM-DD, defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Skip the CSV export preview at the end of the demo
    #[arg(long)]
    pub(crate) skip_exports: bool,
}

/// Print the dashboard summary over the persisted collections, using the
/// same store the `serve` command reads.
pub(crate) fn run_dashboard(args: DashboardArgs) -> Result<(), AppError> {
    let DashboardArgs { window, as_of } = args;

    let window = match window.as_deref() {
        None => TimeWindow::Last30Days,
        Some(raw) => TimeWindow::parse(raw)
            .ok_or(OperationError::Validation(ValidationError { field: "window" }))?,
    };
    let as_of = as_of.unwrap_or_else(|| Local::now().date_naive());

    let config = AppConfig::load()?;
    let store = build_store(&config.store)?;
    let dashboard = DashboardService::new(store);

    let summary = dashboard.summary(window, as_of)?;
    render_dashboard_summary(&summary, as_of);
    Ok(())
}

/// Seed an in-memory store with sample collections and walk the vendor
/// scorecard, utility bill cascade, and fuel reorder workflows end to end.
pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        today,
        skip_exports,
    } = args;
    let today = today.unwrap_or_else(|| Local::now().date_naive());

    println!("Facility operations demo (in-memory store, reference date {today})");

    let services = AppServices::from_store(Arc::new(InMemoryStore::default()));
    let vendor = seed_collections(&services, today)?;

    let summary = services.dashboard.summary(TimeWindow::CurrentMonth, today)?;
    render_dashboard_summary(&summary, today);

    let scorecard = services.vendors.scorecard(&vendor.id, today)?;
    render_scorecard(&vendor, &scorecard);

    walk_bill_cascade(&services, today)?;
    walk_fuel_reorder(&services, today)?;

    if !skip_exports {
        render_export_preview(&services)?;
    }

    Ok(())
}

/// Sample data in every collection: two branches, their assets, two vendors
/// with contrasting work-order histories, and one bill per utility.
fn seed_collections(services: &AppServices, today: NaiveDate) -> Result<Vendor, AppError> {
    services.directory.branches.add(BranchDraft {
        name: "Accra North".to_string(),
        code: "ACC-N".to_string(),
        region: "Greater Accra".to_string(),
        employees: 42,
        floor_area_sqm: 640.0,
    })?;
    services.directory.branches.add(BranchDraft {
        name: "Kumasi Central".to_string(),
        code: "KSI-C".to_string(),
        region: "Ashanti".to_string(),
        employees: 28,
        floor_area_sqm: 410.0,
    })?;

    let generator = services.directory.assets.add(AssetDraft {
        name: "Generator 7".to_string(),
        category: AssetCategory::Generator,
        branch_site: "Accra North".to_string(),
    })?;
    services.directory.assets.add(AssetDraft {
        name: "Pool Vehicle GR-1182-20".to_string(),
        category: AssetCategory::Vehicle,
        branch_site: "Kumasi Central".to_string(),
    })?;

    let mechserve = services.vendors.add(VendorDraft {
        name: "Mechserve Ltd".to_string(),
        contact: "ops@mechserve.example".to_string(),
        category: "Generators".to_string(),
    })?;
    let aircon = services.vendors.add(VendorDraft {
        name: "Aircon Partners".to_string(),
        contact: "dispatch@airconpartners.example".to_string(),
        category: "HVAC".to_string(),
    })?;

    // Ten PPM visits for the first vendor, nine closed on time: on-time
    // ratio lands exactly on the 0.9 band edge.
    for _ in 0..9 {
        let order = services.work_orders.add(
            WorkOrderDraft {
                asset_id: generator.id.clone(),
                vendor_id: mechserve.id.clone(),
                description: "Scheduled generator service".to_string(),
                work_order_type: WorkOrderType::Ppm,
                created_date: Some(today - Duration::days(10)),
                due_date: today + Duration::days(2),
                estimated_cost: 450.0,
            },
            today,
        )?;
        services.work_orders.close(&order.id, Some(today), today)?;
    }
    let late = services.work_orders.add(
        WorkOrderDraft {
            asset_id: generator.id.clone(),
            vendor_id: mechserve.id.clone(),
            description: "Scheduled generator service".to_string(),
            work_order_type: WorkOrderType::Ppm,
            created_date: Some(today - Duration::days(20)),
            due_date: today - Duration::days(5),
            estimated_cost: 450.0,
        },
        today,
    )?;
    services.work_orders.close(&late.id, Some(today), today)?;

    // A reactive pair for the second vendor: one clean close, one overdue
    // and still open.
    let repair = services.work_orders.add(
        WorkOrderDraft {
            asset_id: generator.id.clone(),
            vendor_id: aircon.id.clone(),
            description: "Server room cooling fault".to_string(),
            work_order_type: WorkOrderType::Reactive,
            created_date: Some(today - Duration::days(6)),
            due_date: today - Duration::days(2),
            estimated_cost: 300.0,
        },
        today,
    )?;
    services
        .work_orders
        .close(&repair.id, Some(today - Duration::days(3)), today)?;
    services.work_orders.add(
        WorkOrderDraft {
            asset_id: generator.id,
            vendor_id: aircon.id,
            description: "Lobby AC intermittent".to_string(),
            work_order_type: WorkOrderType::Reactive,
            created_date: Some(today - Duration::days(4)),
            due_date: today - Duration::days(1),
            estimated_cost: 180.0,
        },
        today,
    )?;

    let month = MonthRef::containing(today).key();
    services.electricity_bills.add(UtilityBillDraft {
        month: month.clone(),
        branch_site: "Accra North".to_string(),
        bill_amount: 1820.0,
        recorded_by: "k.mensah".to_string(),
    })?;
    services.water_bills.add(UtilityBillDraft {
        month,
        branch_site: "Kumasi Central".to_string(),
        bill_amount: 640.25,
        recorded_by: "a.owusu".to_string(),
    })?;

    Ok(mechserve)
}

fn render_dashboard_summary(summary: &DashboardSummary, as_of: NaiveDate) {
    println!("\nDashboard summary ({}, as of {})", summary.window_label, as_of);
    println!(
        "- Work orders: {} open, {} closed, {} SLA breached",
        summary.open_work_orders, summary.closed_work_orders, summary.sla_breached_count
    );
    println!(
        "- PPM compliance {:.0}% | estimated cost {:.2}",
        summary.ppm_compliance_rate * 100.0,
        summary.estimated_cost_total
    );
    println!(
        "- Utility spend {:.2} | pending reorders {}",
        summary.utility_spend, summary.pending_reorders
    );
    println!(
        "- Active branches {} | active assets {}",
        summary.active_branches, summary.active_assets
    );
    match summary.work_orders_vs_last_month {
        Some(change) => println!("- Work orders vs last month: {:+.0}%", change),
        None => println!("- Work orders vs last month: n/a (no baseline)"),
    }
}

fn render_scorecard(vendor: &Vendor, scorecard: &VendorScorecard) {
    println!("\nVendor scorecard: {} ({})", vendor.name, vendor.id);
    for kpi in &scorecard.kpis {
        println!("- {}: {}/3 ({})", kpi.id.label(), kpi.score, kpi.notes);
    }
    println!(
        "Total {}/15 -> {}",
        scorecard.total_score,
        scorecard.overall_rating.label()
    );
}

fn walk_bill_cascade(services: &AppServices, today: NaiveDate) -> Result<(), AppError> {
    let bills = services.electricity_bills.list()?;
    let Some(bill) = bills.first() else {
        println!("\nUtility bill workflow: no bills seeded");
        return Ok(());
    };

    println!("\nUtility bill workflow ({}, {})", bill.id, bill.branch_site);
    println!("- entered as {}", bill.bill_status.label());

    let bill = services.electricity_bills.apply_change(
        &bill.id,
        &BillStatusChange {
            approval_status: Some(ApprovalStatus::Approved),
            ..Default::default()
        },
        today,
    )?;
    println!("- approved -> {}", bill.bill_status.label());

    let bill = services.electricity_bills.apply_change(
        &bill.id,
        &BillStatusChange {
            payment_status: Some(PaymentStatus::Paid),
            receipt_uploaded: Some(true),
            ..Default::default()
        },
        today,
    )?;
    println!("- paid with receipt -> {}", bill.bill_status.label());
    if let (Some(approved), Some(paid), Some(reconciled)) =
        (bill.approved_date, bill.paid_date, bill.reconciled_date)
    {
        println!("  stamps: approved {approved}, paid {paid}, reconciled {reconciled}");
    }

    Ok(())
}

fn walk_fuel_reorder(services: &AppServices, today: NaiveDate) -> Result<(), AppError> {
    println!("\nFuel level workflow");

    let healthy = services.fuel.record_level(
        FuelLevelReading {
            branch_site: "Kumasi Central".to_string(),
            generator_id: "GEN-02".to_string(),
            recorded_fuel_level: 900.0,
            minimum_required_level: 800.0,
            recorded_by: "j.annan".to_string(),
        },
        today,
    )?;
    println!(
        "- {} at {:.0}L (min {:.0}L): reorder required = {}",
        healthy.generator_id,
        healthy.recorded_fuel_level,
        healthy.minimum_required_level,
        healthy.reorder_required
    );

    let short = services.fuel.record_level(
        FuelLevelReading {
            branch_site: "Accra North".to_string(),
            generator_id: "GEN-07".to_string(),
            recorded_fuel_level: 500.0,
            minimum_required_level: 800.0,
            recorded_by: "j.annan".to_string(),
        },
        today,
    )?;
    println!(
        "- {} at {:.0}L (min {:.0}L): reorder required = {}",
        short.generator_id,
        short.recorded_fuel_level,
        short.minimum_required_level,
        short.reorder_required
    );

    for request in services.fuel.reorder_requests()? {
        println!(
            "  raised {} for {:.0}L at {} ({})",
            request.id,
            request.requested_litres,
            request.branch_site,
            request.status.label()
        );
    }

    Ok(())
}

fn render_export_preview(services: &AppServices) -> Result<(), AppError> {
    let orders = services.work_orders.list()?;
    let csv = export_csv(&orders)?;

    println!("\nCSV export preview (work orders, first rows)");
    for line in csv.lines().take(3) {
        println!("  {line}");
    }
    Ok(())
}
