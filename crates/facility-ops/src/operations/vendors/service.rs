use std::sync::Arc;

use chrono::NaiveDate;

use super::domain::{Vendor, VendorDraft};
use super::scorecard::{score_vendor, VendorScorecard};
use crate::operations::workorders::WorkOrder;
use crate::operations::{next_record_id, require, OperationError};
use crate::store::{keys, Collection, KeyValueStore};

/// Vendor directory plus the scorecard read model. Holds a second handle on
/// the work-order collection because performance is derived, not stored.
#[derive(Clone)]
pub struct VendorService {
    vendors: Collection<Vendor>,
    work_orders: Collection<WorkOrder>,
}

impl VendorService {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            vendors: Collection::new(store.clone(), keys::VENDORS),
            work_orders: Collection::new(store, keys::WORK_ORDERS),
        }
    }

    pub fn list(&self) -> Result<Vec<Vendor>, OperationError> {
        Ok(self.vendors.load()?)
    }

    pub fn add(&self, draft: VendorDraft) -> Result<Vendor, OperationError> {
        require("name", &draft.name)?;
        require("category", &draft.category)?;

        let mut vendors = self.vendors.load()?;
        let id = next_record_id("VEN", vendors.iter().map(|vendor| vendor.id.as_str()));

        let vendor = Vendor {
            id,
            name: draft.name,
            contact: draft.contact,
            category: draft.category,
        };

        vendors.push(vendor.clone());
        self.vendors.save(&vendors)?;
        Ok(vendor)
    }

    pub fn update(&self, updated: Vendor) -> Result<Vendor, OperationError> {
        require("name", &updated.name)?;
        require("category", &updated.category)?;

        let mut vendors = self.vendors.load()?;
        let slot = vendors
            .iter_mut()
            .find(|vendor| vendor.id == updated.id)
            .ok_or_else(|| OperationError::NotFound(updated.id.clone()))?;

        *slot = updated.clone();
        self.vendors.save(&vendors)?;
        Ok(updated)
    }

    pub fn delete(&self, id: &str) -> Result<(), OperationError> {
        let vendors = self.vendors.load()?;
        let before = vendors.len();
        let remaining: Vec<Vendor> = vendors
            .into_iter()
            .filter(|vendor| vendor.id != id)
            .collect();

        if remaining.len() == before {
            return Err(OperationError::NotFound(id.to_string()));
        }

        self.vendors.save(&remaining)?;
        Ok(())
    }

    /// Scorecard for a known vendor. Unknown ids are a 404 rather than an
    /// unrated card, so a mistyped id is distinguishable from a quiet vendor.
    pub fn scorecard(&self, id: &str, today: NaiveDate) -> Result<VendorScorecard, OperationError> {
        let vendors = self.vendors.load()?;
        if !vendors.iter().any(|vendor| vendor.id == id) {
            return Err(OperationError::NotFound(id.to_string()));
        }

        let orders = self.work_orders.load()?;
        Ok(score_vendor(id, &orders, today))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryStore;

    fn service() -> VendorService {
        VendorService::new(Arc::new(InMemoryStore::default()))
    }

    fn draft() -> VendorDraft {
        VendorDraft {
            name: "Mechserve Ltd".to_string(),
            contact: "ops@mechserve.example".to_string(),
            category: "Generators".to_string(),
        }
    }

    #[test]
    fn add_then_scorecard_for_quiet_vendor_is_unrated() {
        let service = service();
        let vendor = service.add(draft()).expect("add");
        let scorecard = service
            .scorecard(&vendor.id, NaiveDate::from_ymd_opt(2026, 5, 1).expect("date"))
            .expect("scorecard");
        assert_eq!(scorecard.total_score, 0);
    }

    #[test]
    fn scorecard_for_unknown_vendor_is_not_found() {
        let service = service();
        let err = service
            .scorecard("VEN-404", NaiveDate::from_ymd_opt(2026, 5, 1).expect("date"))
            .expect_err("missing vendor");
        assert!(matches!(err, OperationError::NotFound(_)));
    }

    #[test]
    fn blank_name_is_rejected() {
        let service = service();
        let mut bad = draft();
        bad.name = " ".to_string();
        let err = service.add(bad).expect_err("rejected");
        assert!(matches!(err, OperationError::Validation(_)));
    }
}
