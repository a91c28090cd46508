use std::sync::Arc;

use chrono::NaiveDate;

use super::cascade::{apply_status_change, mark_uploaded_to_coupa};
use super::domain::{
    ApprovalStatus, BillStatus, BillStatusChange, PaymentStatus, UtilityBill, UtilityBillDraft,
    UtilityKind,
};
use crate::operations::{next_record_id, require, OperationError};
use crate::store::{keys, Collection, KeyValueStore};

/// One service per utility kind; electricity and water share the record shape
/// but live under separate collection keys.
#[derive(Clone)]
pub struct UtilityBillService {
    kind: UtilityKind,
    collection: Collection<UtilityBill>,
}

impl UtilityBillService {
    pub fn electricity(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            kind: UtilityKind::Electricity,
            collection: Collection::new(store, keys::ECG_BILLS),
        }
    }

    pub fn water(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            kind: UtilityKind::Water,
            collection: Collection::new(store, keys::WATER_BILLS),
        }
    }

    pub fn kind(&self) -> UtilityKind {
        self.kind
    }

    fn id_prefix(&self) -> &'static str {
        match self.kind {
            UtilityKind::Electricity => "ECG",
            UtilityKind::Water => "WTR",
        }
    }

    pub fn list(&self) -> Result<Vec<UtilityBill>, OperationError> {
        Ok(self.collection.load()?)
    }

    pub fn add(&self, draft: UtilityBillDraft) -> Result<UtilityBill, OperationError> {
        require("month", &draft.month)?;
        require("branch_site", &draft.branch_site)?;
        require("recorded_by", &draft.recorded_by)?;

        let mut bills = self.collection.load()?;
        let id = next_record_id(self.id_prefix(), bills.iter().map(|bill| bill.id.as_str()));

        let bill = UtilityBill {
            id,
            month: draft.month,
            branch_site: draft.branch_site,
            bill_amount: draft.bill_amount,
            bill_status: BillStatus::Received,
            approval_status: ApprovalStatus::Pending,
            payment_status: PaymentStatus::Unpaid,
            receipt_uploaded: false,
            approved_date: None,
            paid_date: None,
            reconciled_date: None,
            recorded_by: draft.recorded_by,
        };

        bills.push(bill.clone());
        self.collection.save(&bills)?;
        Ok(bill)
    }

    /// Apply a sub-status change, run the cascade, persist the collection.
    pub fn apply_change(
        &self,
        id: &str,
        change: &BillStatusChange,
        today: NaiveDate,
    ) -> Result<UtilityBill, OperationError> {
        let mut bills = self.collection.load()?;
        let bill = bills
            .iter_mut()
            .find(|bill| bill.id == id)
            .ok_or_else(|| OperationError::NotFound(id.to_string()))?;

        apply_status_change(bill, change, today);
        let updated = bill.clone();
        self.collection.save(&bills)?;
        Ok(updated)
    }

    /// The manual Coupa override from the bill detail screen.
    pub fn mark_coupa_upload(&self, id: &str) -> Result<UtilityBill, OperationError> {
        let mut bills = self.collection.load()?;
        let bill = bills
            .iter_mut()
            .find(|bill| bill.id == id)
            .ok_or_else(|| OperationError::NotFound(id.to_string()))?;

        mark_uploaded_to_coupa(bill);
        let updated = bill.clone();
        self.collection.save(&bills)?;
        Ok(updated)
    }

    pub fn delete(&self, id: &str) -> Result<(), OperationError> {
        let bills = self.collection.load()?;
        let before = bills.len();
        let remaining: Vec<UtilityBill> =
            bills.into_iter().filter(|bill| bill.id != id).collect();

        if remaining.len() == before {
            return Err(OperationError::NotFound(id.to_string()));
        }

        self.collection.save(&remaining)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryStore;

    fn draft() -> UtilityBillDraft {
        UtilityBillDraft {
            month: "2026-07".to_string(),
            branch_site: "Kumasi Central".to_string(),
            bill_amount: 940.5,
            recorded_by: "a.owusu".to_string(),
        }
    }

    #[test]
    fn electricity_and_water_do_not_share_a_collection() {
        let store: Arc<dyn KeyValueStore> = Arc::new(InMemoryStore::default());
        let electricity = UtilityBillService::electricity(store.clone());
        let water = UtilityBillService::water(store);

        electricity.add(draft()).expect("add electricity");
        assert!(water.list().expect("list water").is_empty());
        assert_eq!(electricity.list().expect("list electricity").len(), 1);
    }

    #[test]
    fn new_bills_enter_as_received() {
        let store: Arc<dyn KeyValueStore> = Arc::new(InMemoryStore::default());
        let service = UtilityBillService::water(store);
        let bill = service.add(draft()).expect("add");
        assert_eq!(bill.bill_status, BillStatus::Received);
        assert_eq!(bill.id, "WTR-000001");
    }

    #[test]
    fn apply_change_persists_the_cascaded_status() {
        let store: Arc<dyn KeyValueStore> = Arc::new(InMemoryStore::default());
        let service = UtilityBillService::electricity(store);
        let bill = service.add(draft()).expect("add");

        let today = NaiveDate::from_ymd_opt(2026, 7, 12).expect("date");
        service
            .apply_change(
                &bill.id,
                &BillStatusChange {
                    approval_status: Some(ApprovalStatus::Approved),
                    ..Default::default()
                },
                today,
            )
            .expect("apply change");

        let stored = &service.list().expect("list")[0];
        assert_eq!(stored.bill_status, BillStatus::Approved);
        assert_eq!(stored.approved_date, Some(today));
    }
}
