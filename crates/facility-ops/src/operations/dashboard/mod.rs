//! Dashboard aggregation: counts, sums, and ratios over the domain
//! collections for a chosen time window, recomputed on every request.

pub mod router;
pub mod service;
pub mod summary;
pub mod window;

pub use router::dashboard_router;
pub use service::DashboardService;
pub use summary::{percent_change, DashboardInputs, DashboardSummary};
pub use window::{MonthRef, TimeWindow};
