//! Utility bills (electricity and water) and the status cascade that keeps
//! the stored display status in step with the approval/payment sub-statuses.

pub mod cascade;
pub mod domain;
pub mod router;
pub mod service;

pub use cascade::{apply_status_change, mark_uploaded_to_coupa};
pub use domain::{
    ApprovalStatus, BillStatus, BillStatusChange, PaymentStatus, UtilityBill, UtilityBillDraft,
    UtilityKind,
};
pub use router::utility_bill_router;
pub use service::UtilityBillService;
