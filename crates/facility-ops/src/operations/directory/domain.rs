use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BranchStatus {
    Active,
    UnderRenovation,
    Closed,
}

impl BranchStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::UnderRenovation => "Under Renovation",
            Self::Closed => "Closed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Branch {
    pub id: String,
    pub name: String,
    pub code: String,
    pub region: String,
    pub employees: u32,
    pub floor_area_sqm: f64,
    pub status: BranchStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BranchDraft {
    pub name: String,
    pub code: String,
    pub region: String,
    pub employees: u32,
    pub floor_area_sqm: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetCategory {
    Vehicle,
    Generator,
    Hvac,
    Other,
}

impl AssetCategory {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Vehicle => "Vehicle",
            Self::Generator => "Generator",
            Self::Hvac => "HVAC",
            Self::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetStatus {
    Active,
    UnderMaintenance,
    Retired,
}

impl AssetStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::UnderMaintenance => "Under Maintenance",
            Self::Retired => "Retired",
        }
    }
}

/// `branch_site` is the branch name as entered, not an enforced reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub id: String,
    pub name: String,
    pub category: AssetCategory,
    pub branch_site: String,
    pub status: AssetStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetDraft {
    pub name: String,
    pub category: AssetCategory,
    pub branch_site: String,
}

/// What a signed-in role may do. The data layer takes the acting user's name
/// as free text (`recorded_by`), so this matrix governs screens, not rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdminAction {
    ManageUsers,
    EditRecords,
    ApproveBills,
    ViewReports,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Manager,
    Technician,
    Viewer,
}

impl Role {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Manager => "Manager",
            Self::Technician => "Technician",
            Self::Viewer => "Viewer",
        }
    }

    pub const fn permits(self, action: AdminAction) -> bool {
        match (self, action) {
            (Self::Admin, _) => true,
            (Self::Manager, AdminAction::ManageUsers) => false,
            (Self::Manager, _) => true,
            (Self::Technician, AdminAction::EditRecords | AdminAction::ViewReports) => true,
            (Self::Technician, _) => false,
            (Self::Viewer, AdminAction::ViewReports) => true,
            (Self::Viewer, _) => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserAccount {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
    pub role: Role,
}
