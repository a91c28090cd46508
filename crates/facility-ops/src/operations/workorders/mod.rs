//! Work orders: the central fact collection. Vendor scorecards and the
//! dashboard both derive their numbers from this history.

pub mod domain;
pub mod router;
pub mod service;

pub use domain::{
    derive_sla_status, SlaStatus, WorkOrder, WorkOrderDraft, WorkOrderStatus, WorkOrderType,
};
pub use router::work_order_router;
pub use service::WorkOrderService;
