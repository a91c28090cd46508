//! Priority cascade recomputing the stored bill status from its sub-statuses.
//!
//! The date-stamp fields are a one-way ratchet: each stamps the first time
//! its condition holds and is never cleared if the condition later regresses.
//! The cascade itself is idempotent on the status field.

use chrono::NaiveDate;

use super::domain::{ApprovalStatus, BillStatus, BillStatusChange, PaymentStatus, UtilityBill};

/// Apply a sub-status change and re-derive the display status.
pub fn apply_status_change(bill: &mut UtilityBill, change: &BillStatusChange, today: NaiveDate) {
    if let Some(approval) = change.approval_status {
        bill.approval_status = approval;
    }
    if let Some(payment) = change.payment_status {
        bill.payment_status = payment;
    }
    if let Some(receipt) = change.receipt_uploaded {
        bill.receipt_uploaded = receipt;
    }

    stamp_milestones(bill, today);
    bill.bill_status = cascade(bill);
}

/// Manual override: the only path into `UploadedToCoupa`. The cascade never
/// produces this state, and the next sub-status change cascades over it.
pub fn mark_uploaded_to_coupa(bill: &mut UtilityBill) {
    bill.bill_status = BillStatus::UploadedToCoupa;
}

fn stamp_milestones(bill: &mut UtilityBill, today: NaiveDate) {
    if bill.approval_status == ApprovalStatus::Approved && bill.approved_date.is_none() {
        bill.approved_date = Some(today);
    }
    if bill.payment_status == PaymentStatus::Paid && bill.paid_date.is_none() {
        bill.paid_date = Some(today);
    }
    if bill.payment_status == PaymentStatus::Paid
        && bill.receipt_uploaded
        && bill.reconciled_date.is_none()
    {
        bill.reconciled_date = Some(today);
    }
}

/// Highest-precedence rule wins; when nothing matches the stored status is
/// left as-is.
fn cascade(bill: &UtilityBill) -> BillStatus {
    if bill.approval_status == ApprovalStatus::NotApproved {
        BillStatus::RemediationRequired
    } else if bill.payment_status == PaymentStatus::Paid && bill.receipt_uploaded {
        BillStatus::ReconciliationComplete
    } else if bill.payment_status == PaymentStatus::Paid {
        BillStatus::Paid
    } else if bill.approval_status == ApprovalStatus::Approved {
        BillStatus::Approved
    } else {
        bill.bill_status
    }
}
