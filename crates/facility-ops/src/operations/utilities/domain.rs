use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UtilityKind {
    Electricity,
    Water,
}

impl UtilityKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Electricity => "Electricity",
            Self::Water => "Water",
        }
    }
}

/// Stored display status. Derived from the sub-statuses by the cascade and
/// persisted, because downstream readers consume the stored field directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillStatus {
    Received,
    PendingApproval,
    Approved,
    UploadedToCoupa,
    Paid,
    ReconciliationComplete,
    RemediationRequired,
}

impl BillStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Received => "Received",
            Self::PendingApproval => "Pending Approval",
            Self::Approved => "Approved",
            Self::UploadedToCoupa => "Uploaded to Coupa",
            Self::Paid => "Paid",
            Self::ReconciliationComplete => "Reconciliation Complete",
            Self::RemediationRequired => "Remediation Required",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalStatus {
    Pending,
    Approved,
    NotApproved,
}

impl ApprovalStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::NotApproved => "Not Approved",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Unpaid,
    Paid,
}

impl PaymentStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Unpaid => "Unpaid",
            Self::Paid => "Paid",
        }
    }
}

/// `month` is the billing period as entered (`2026-07` by convention) and
/// `branch_site` is a loose match against the branch collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UtilityBill {
    pub id: String,
    pub month: String,
    pub branch_site: String,
    pub bill_amount: f64,
    pub bill_status: BillStatus,
    pub approval_status: ApprovalStatus,
    pub payment_status: PaymentStatus,
    pub receipt_uploaded: bool,
    pub approved_date: Option<NaiveDate>,
    pub paid_date: Option<NaiveDate>,
    pub reconciled_date: Option<NaiveDate>,
    pub recorded_by: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UtilityBillDraft {
    pub month: String,
    pub branch_site: String,
    pub bill_amount: f64,
    pub recorded_by: String,
}

/// Partial update from the edit form: only the sub-statuses present are
/// applied before the cascade runs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BillStatusChange {
    #[serde(default)]
    pub approval_status: Option<ApprovalStatus>,
    #[serde(default)]
    pub payment_status: Option<PaymentStatus>,
    #[serde(default)]
    pub receipt_uploaded: Option<bool>,
}
