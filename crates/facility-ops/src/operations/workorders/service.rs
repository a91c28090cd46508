use std::sync::Arc;

use chrono::NaiveDate;

use super::domain::{derive_sla_status, WorkOrder, WorkOrderDraft, WorkOrderStatus};
use crate::operations::{next_record_id, require, OperationError};
use crate::store::{keys, Collection, KeyValueStore};

/// CRUD service over the work-order collection. Every mutation validates,
/// transforms the in-memory array, and rewrites the whole collection.
#[derive(Clone)]
pub struct WorkOrderService {
    collection: Collection<WorkOrder>,
}

impl WorkOrderService {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            collection: Collection::new(store, keys::WORK_ORDERS),
        }
    }

    pub fn list(&self) -> Result<Vec<WorkOrder>, OperationError> {
        Ok(self.collection.load()?)
    }

    pub fn get(&self, id: &str) -> Result<WorkOrder, OperationError> {
        self.collection
            .load()?
            .into_iter()
            .find(|order| order.id == id)
            .ok_or_else(|| OperationError::NotFound(id.to_string()))
    }

    pub fn add(&self, draft: WorkOrderDraft, today: NaiveDate) -> Result<WorkOrder, OperationError> {
        require("asset_id", &draft.asset_id)?;
        require("vendor_id", &draft.vendor_id)?;
        require("description", &draft.description)?;

        let mut orders = self.collection.load()?;
        let id = next_record_id("WO", orders.iter().map(|order| order.id.as_str()));
        let created_date = draft.created_date.unwrap_or(today);

        let order = WorkOrder {
            id,
            asset_id: draft.asset_id,
            vendor_id: draft.vendor_id,
            description: draft.description,
            status: WorkOrderStatus::Open,
            work_order_type: draft.work_order_type,
            created_date,
            due_date: draft.due_date,
            closed_date: None,
            sla_status: derive_sla_status(draft.due_date, None, today),
            estimated_cost: draft.estimated_cost,
        };

        orders.push(order.clone());
        self.collection.save(&orders)?;
        Ok(order)
    }

    /// Replace a stored order with the edited record, re-deriving the SLA
    /// standing from the edited dates.
    pub fn update(&self, mut updated: WorkOrder, today: NaiveDate) -> Result<WorkOrder, OperationError> {
        require("asset_id", &updated.asset_id)?;
        require("vendor_id", &updated.vendor_id)?;
        require("description", &updated.description)?;

        let mut orders = self.collection.load()?;
        let slot = orders
            .iter_mut()
            .find(|order| order.id == updated.id)
            .ok_or_else(|| OperationError::NotFound(updated.id.clone()))?;

        updated.sla_status = derive_sla_status(updated.due_date, updated.closed_date, today);
        *slot = updated.clone();
        self.collection.save(&orders)?;
        Ok(updated)
    }

    pub fn close(
        &self,
        id: &str,
        closed_on: Option<NaiveDate>,
        today: NaiveDate,
    ) -> Result<WorkOrder, OperationError> {
        let mut orders = self.collection.load()?;
        let order = orders
            .iter_mut()
            .find(|order| order.id == id)
            .ok_or_else(|| OperationError::NotFound(id.to_string()))?;

        let closed_date = closed_on.unwrap_or(today);
        order.status = WorkOrderStatus::Closed;
        order.closed_date = Some(closed_date);
        order.sla_status = derive_sla_status(order.due_date, Some(closed_date), today);

        let closed = order.clone();
        self.collection.save(&orders)?;
        Ok(closed)
    }

    /// Delete is array-filter by id; no undo.
    pub fn delete(&self, id: &str) -> Result<(), OperationError> {
        let orders = self.collection.load()?;
        let before = orders.len();
        let remaining: Vec<WorkOrder> = orders
            .into_iter()
            .filter(|order| order.id != id)
            .collect();

        if remaining.len() == before {
            return Err(OperationError::NotFound(id.to_string()));
        }

        self.collection.save(&remaining)?;
        Ok(())
    }
}
