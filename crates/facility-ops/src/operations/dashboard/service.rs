use std::sync::Arc;

use chrono::NaiveDate;

use super::summary::{DashboardInputs, DashboardSummary};
use super::window::TimeWindow;
use crate::operations::directory::{Asset, Branch};
use crate::operations::fuel::ReorderRequest;
use crate::operations::utilities::UtilityBill;
use crate::operations::workorders::WorkOrder;
use crate::operations::OperationError;
use crate::store::{keys, Collection, KeyValueStore};

/// Loads every collection the dashboard reads and builds the summary. Purely
/// a read model; it never writes back.
#[derive(Clone)]
pub struct DashboardService {
    work_orders: Collection<WorkOrder>,
    electricity_bills: Collection<UtilityBill>,
    water_bills: Collection<UtilityBill>,
    reorder_requests: Collection<ReorderRequest>,
    branches: Collection<Branch>,
    assets: Collection<Asset>,
}

impl DashboardService {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            work_orders: Collection::new(store.clone(), keys::WORK_ORDERS),
            electricity_bills: Collection::new(store.clone(), keys::ECG_BILLS),
            water_bills: Collection::new(store.clone(), keys::WATER_BILLS),
            reorder_requests: Collection::new(store.clone(), keys::REORDER_REQUESTS),
            branches: Collection::new(store.clone(), keys::BRANCHES),
            assets: Collection::new(store, keys::ASSETS),
        }
    }

    pub fn summary(
        &self,
        window: TimeWindow,
        today: NaiveDate,
    ) -> Result<DashboardSummary, OperationError> {
        let work_orders = self.work_orders.load()?;
        let electricity_bills = self.electricity_bills.load()?;
        let water_bills = self.water_bills.load()?;
        let reorder_requests = self.reorder_requests.load()?;
        let branches = self.branches.load()?;
        let assets = self.assets.load()?;

        Ok(DashboardSummary::build(
            DashboardInputs {
                work_orders: &work_orders,
                electricity_bills: &electricity_bills,
                water_bills: &water_bills,
                reorder_requests: &reorder_requests,
                branches: &branches,
                assets: &assets,
            },
            window,
            today,
        ))
    }
}
