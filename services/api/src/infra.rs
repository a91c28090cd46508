use chrono::NaiveDate;
use facility_ops::config::StoreConfig;
use facility_ops::error::AppError;
use facility_ops::operations::dashboard::DashboardService;
use facility_ops::operations::directory::{
    AssetService, BranchService, DirectoryState, UserService,
};
use facility_ops::operations::fuel::FuelService;
use facility_ops::operations::utilities::UtilityBillService;
use facility_ops::operations::vendors::VendorService;
use facility_ops::operations::workorders::WorkOrderService;
use facility_ops::store::{FileStore, InMemoryStore, KeyValueStore};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// One service per collection, all sharing a single key-value store. Cloning
/// clones the `Arc` handles, not the collections.
#[derive(Clone)]
pub(crate) struct AppServices {
    pub(crate) work_orders: Arc<WorkOrderService>,
    pub(crate) vendors: Arc<VendorService>,
    pub(crate) directory: DirectoryState,
    pub(crate) electricity_bills: Arc<UtilityBillService>,
    pub(crate) water_bills: Arc<UtilityBillService>,
    pub(crate) fuel: Arc<FuelService>,
    pub(crate) dashboard: Arc<DashboardService>,
}

impl AppServices {
    pub(crate) fn from_store(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            work_orders: Arc::new(WorkOrderService::new(store.clone())),
            vendors: Arc::new(VendorService::new(store.clone())),
            directory: DirectoryState {
                branches: Arc::new(BranchService::new(store.clone())),
                assets: Arc::new(AssetService::new(store.clone())),
                users: Arc::new(UserService::new(store.clone())),
            },
            electricity_bills: Arc::new(UtilityBillService::electricity(store.clone())),
            water_bills: Arc::new(UtilityBillService::water(store.clone())),
            fuel: Arc::new(FuelService::new(store.clone())),
            dashboard: Arc::new(DashboardService::new(store)),
        }
    }
}

/// A configured path means a file-backed store that persists between runs;
/// no path keeps everything in memory.
pub(crate) fn build_store(config: &StoreConfig) -> Result<Arc<dyn KeyValueStore>, AppError> {
    match &config.path {
        Some(path) => {
            let store = FileStore::open(path.clone())?;
            Ok(Arc::new(store))
        }
        None => Ok(Arc::new(InMemoryStore::default())),
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}
