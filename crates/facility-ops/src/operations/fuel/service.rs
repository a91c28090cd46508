use std::sync::Arc;

use chrono::NaiveDate;

use super::domain::{
    reorder_required, FuelLevelLog, FuelLevelReading, ReorderRequest, ReorderStatus,
};
use crate::operations::{next_record_id, require, OperationError};
use crate::store::{keys, Collection, KeyValueStore};

/// Fuel logs and the reorder queue they feed. Logging a short level raises a
/// pending reorder request in the same operation.
#[derive(Clone)]
pub struct FuelService {
    logs: Collection<FuelLevelLog>,
    reorders: Collection<ReorderRequest>,
}

impl FuelService {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            logs: Collection::new(store.clone(), keys::FUEL_LOGS),
            reorders: Collection::new(store, keys::REORDER_REQUESTS),
        }
    }

    pub fn logs(&self) -> Result<Vec<FuelLevelLog>, OperationError> {
        Ok(self.logs.load()?)
    }

    pub fn reorder_requests(&self) -> Result<Vec<ReorderRequest>, OperationError> {
        Ok(self.reorders.load()?)
    }

    /// Record a level reading. The reorder flag is derived here, once, and a
    /// shortfall raises a reorder request for the difference.
    pub fn record_level(
        &self,
        reading: FuelLevelReading,
        today: NaiveDate,
    ) -> Result<FuelLevelLog, OperationError> {
        require("branch_site", &reading.branch_site)?;
        require("generator_id", &reading.generator_id)?;
        require("recorded_by", &reading.recorded_by)?;

        let needs_reorder =
            reorder_required(reading.recorded_fuel_level, reading.minimum_required_level);

        let mut logs = self.logs.load()?;
        let id = next_record_id("FUEL", logs.iter().map(|log| log.id.as_str()));

        let log = FuelLevelLog {
            id,
            branch_site: reading.branch_site.clone(),
            generator_id: reading.generator_id.clone(),
            recorded_fuel_level: reading.recorded_fuel_level,
            minimum_required_level: reading.minimum_required_level,
            reorder_required: needs_reorder,
            logged_on: today,
            recorded_by: reading.recorded_by,
        };

        logs.push(log.clone());
        self.logs.save(&logs)?;

        if needs_reorder {
            let mut reorders = self.reorders.load()?;
            let id = next_record_id("RO", reorders.iter().map(|request| request.id.as_str()));
            reorders.push(ReorderRequest {
                id,
                branch_site: reading.branch_site,
                generator_id: reading.generator_id,
                requested_litres: reading.minimum_required_level - reading.recorded_fuel_level,
                status: ReorderStatus::Pending,
                requested_on: today,
            });
            self.reorders.save(&reorders)?;
        }

        Ok(log)
    }

    pub fn set_reorder_status(
        &self,
        id: &str,
        status: ReorderStatus,
    ) -> Result<ReorderRequest, OperationError> {
        let mut reorders = self.reorders.load()?;
        let request = reorders
            .iter_mut()
            .find(|request| request.id == id)
            .ok_or_else(|| OperationError::NotFound(id.to_string()))?;

        request.status = status;
        let updated = request.clone();
        self.reorders.save(&reorders)?;
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryStore;

    fn service() -> FuelService {
        FuelService::new(Arc::new(InMemoryStore::default()))
    }

    fn reading(level: f64, minimum: f64) -> FuelLevelReading {
        FuelLevelReading {
            branch_site: "Takoradi Harbour".to_string(),
            generator_id: "GEN-07".to_string(),
            recorded_fuel_level: level,
            minimum_required_level: minimum,
            recorded_by: "j.annan".to_string(),
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn short_level_flags_and_raises_a_reorder() {
        let service = service();
        let log = service
            .record_level(reading(500.0, 800.0), date(2026, 8, 1))
            .expect("record");

        assert!(log.reorder_required);
        let reorders = service.reorder_requests().expect("reorders");
        assert_eq!(reorders.len(), 1);
        assert_eq!(reorders[0].status, ReorderStatus::Pending);
        assert!((reorders[0].requested_litres - 300.0).abs() < f64::EPSILON);
    }

    #[test]
    fn healthy_level_raises_nothing() {
        let service = service();
        let log = service
            .record_level(reading(900.0, 800.0), date(2026, 8, 1))
            .expect("record");

        assert!(!log.reorder_required);
        assert!(service.reorder_requests().expect("reorders").is_empty());
    }

    #[test]
    fn reorder_status_can_progress() {
        let service = service();
        service
            .record_level(reading(500.0, 800.0), date(2026, 8, 1))
            .expect("record");

        let updated = service
            .set_reorder_status("RO-000001", ReorderStatus::Ordered)
            .expect("status update");
        assert_eq!(updated.status, ReorderStatus::Ordered);
    }
}
