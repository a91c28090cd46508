use std::sync::Arc;

use chrono::NaiveDate;
use facility_ops::operations::utilities::{
    ApprovalStatus, BillStatus, BillStatusChange, PaymentStatus, UtilityBillDraft,
    UtilityBillService,
};
use facility_ops::store::InMemoryStore;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn service() -> UtilityBillService {
    UtilityBillService::water(Arc::new(InMemoryStore::default()))
}

fn draft() -> UtilityBillDraft {
    UtilityBillDraft {
        month: "2026-07".to_string(),
        branch_site: "Accra North".to_string(),
        bill_amount: 940.5,
        recorded_by: "k.mensah".to_string(),
    }
}

#[test]
fn approval_then_payment_with_receipt_completes_reconciliation() {
    let service = service();
    let bill = service.add(draft()).expect("add");
    assert_eq!(bill.bill_status, BillStatus::Received);

    let bill = service
        .apply_change(
            &bill.id,
            &BillStatusChange {
                approval_status: Some(ApprovalStatus::Approved),
                ..Default::default()
            },
            date(2026, 7, 3),
        )
        .expect("approve");
    assert_eq!(bill.bill_status, BillStatus::Approved);

    let bill = service
        .apply_change(
            &bill.id,
            &BillStatusChange {
                payment_status: Some(PaymentStatus::Paid),
                receipt_uploaded: Some(true),
                ..Default::default()
            },
            date(2026, 7, 10),
        )
        .expect("pay");
    assert_eq!(bill.bill_status, BillStatus::ReconciliationComplete);

    // The persisted record carries the cascaded status and all three stamps.
    let stored = service.list().expect("list").remove(0);
    assert_eq!(stored.bill_status, BillStatus::ReconciliationComplete);
    assert_eq!(stored.approved_date, Some(date(2026, 7, 3)));
    assert_eq!(stored.paid_date, Some(date(2026, 7, 10)));
    assert_eq!(stored.reconciled_date, Some(date(2026, 7, 10)));
}

#[test]
fn rejection_forces_remediation_regardless_of_payment() {
    let service = service();
    let bill = service.add(draft()).expect("add");

    let bill = service
        .apply_change(
            &bill.id,
            &BillStatusChange {
                approval_status: Some(ApprovalStatus::NotApproved),
                payment_status: Some(PaymentStatus::Paid),
                receipt_uploaded: Some(true),
                ..Default::default()
            },
            date(2026, 7, 5),
        )
        .expect("change");
    assert_eq!(bill.bill_status, BillStatus::RemediationRequired);
}

#[test]
fn repeated_change_is_idempotent_but_stamps_ratchet() {
    let service = service();
    let bill = service.add(draft()).expect("add");

    let change = BillStatusChange {
        payment_status: Some(PaymentStatus::Paid),
        ..Default::default()
    };
    let first = service
        .apply_change(&bill.id, &change, date(2026, 7, 5))
        .expect("first");
    let second = service
        .apply_change(&bill.id, &change, date(2026, 7, 20))
        .expect("second");

    // Same status, and the paid stamp keeps its original date.
    assert_eq!(second.bill_status, first.bill_status);
    assert_eq!(second.paid_date, Some(date(2026, 7, 5)));

    let reverted = service
        .apply_change(
            &bill.id,
            &BillStatusChange {
                payment_status: Some(PaymentStatus::Unpaid),
                ..Default::default()
            },
            date(2026, 7, 22),
        )
        .expect("revert");
    assert_eq!(reverted.paid_date, Some(date(2026, 7, 5)));
}

#[test]
fn coupa_upload_is_only_reachable_by_override() {
    let service = service();
    let bill = service.add(draft()).expect("add");

    let bill = service.mark_coupa_upload(&bill.id).expect("override");
    assert_eq!(bill.bill_status, BillStatus::UploadedToCoupa);

    // The next cascaded change moves past the override.
    let bill = service
        .apply_change(
            &bill.id,
            &BillStatusChange {
                payment_status: Some(PaymentStatus::Paid),
                ..Default::default()
            },
            date(2026, 7, 9),
        )
        .expect("pay");
    assert_eq!(bill.bill_status, BillStatus::Paid);
}
