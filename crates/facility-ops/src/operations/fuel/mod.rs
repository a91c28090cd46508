//! Generator fuel tracking: level logs with a write-time reorder flag, and
//! the reorder requests those logs raise.

pub mod domain;
pub mod router;
pub mod service;

pub use domain::{FuelLevelLog, FuelLevelReading, ReorderRequest, ReorderStatus};
pub use router::fuel_router;
pub use service::FuelService;
