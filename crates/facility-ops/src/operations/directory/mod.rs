//! Master records: branches, assets, and user accounts. Plain CRUD over
//! their collections; other modules reference these records by loose string
//! match only.

pub mod domain;
pub mod router;
pub mod service;

pub use domain::{
    AdminAction, Asset, AssetCategory, AssetDraft, AssetStatus, Branch, BranchDraft, BranchStatus,
    Role, UserAccount, UserDraft,
};
pub use router::{directory_router, DirectoryState};
pub use service::{AssetService, BranchService, UserService};
