//! Vendor directory and performance scorecards. Performance is always
//! recomputed from work-order history, never stored on the vendor record.

pub mod domain;
pub mod router;
pub mod scorecard;
pub mod service;

pub use domain::{Vendor, VendorDraft};
pub use router::vendor_router;
pub use scorecard::{score_vendor, KpiId, KpiScore, OverallRating, VendorScorecard};
pub use service::VendorService;
