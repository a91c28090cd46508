use std::sync::Arc;

use super::domain::{
    Asset, AssetDraft, AssetStatus, Branch, BranchDraft, BranchStatus, UserAccount, UserDraft,
};
use crate::operations::{next_record_id, require, OperationError};
use crate::store::{keys, Collection, KeyValueStore};

#[derive(Clone)]
pub struct BranchService {
    collection: Collection<Branch>,
}

impl BranchService {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            collection: Collection::new(store, keys::BRANCHES),
        }
    }

    pub fn list(&self) -> Result<Vec<Branch>, OperationError> {
        Ok(self.collection.load()?)
    }

    pub fn add(&self, draft: BranchDraft) -> Result<Branch, OperationError> {
        require("name", &draft.name)?;
        require("code", &draft.code)?;
        require("region", &draft.region)?;

        let mut branches = self.collection.load()?;
        let id = next_record_id("BR", branches.iter().map(|branch| branch.id.as_str()));

        let branch = Branch {
            id,
            name: draft.name,
            code: draft.code,
            region: draft.region,
            employees: draft.employees,
            floor_area_sqm: draft.floor_area_sqm,
            status: BranchStatus::Active,
        };

        branches.push(branch.clone());
        self.collection.save(&branches)?;
        Ok(branch)
    }

    pub fn update(&self, updated: Branch) -> Result<Branch, OperationError> {
        require("name", &updated.name)?;
        require("code", &updated.code)?;

        let mut branches = self.collection.load()?;
        let slot = branches
            .iter_mut()
            .find(|branch| branch.id == updated.id)
            .ok_or_else(|| OperationError::NotFound(updated.id.clone()))?;

        *slot = updated.clone();
        self.collection.save(&branches)?;
        Ok(updated)
    }

    pub fn delete(&self, id: &str) -> Result<(), OperationError> {
        let branches = self.collection.load()?;
        let before = branches.len();
        let remaining: Vec<Branch> = branches
            .into_iter()
            .filter(|branch| branch.id != id)
            .collect();

        if remaining.len() == before {
            return Err(OperationError::NotFound(id.to_string()));
        }

        self.collection.save(&remaining)?;
        Ok(())
    }
}

#[derive(Clone)]
pub struct AssetService {
    collection: Collection<Asset>,
}

impl AssetService {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            collection: Collection::new(store, keys::ASSETS),
        }
    }

    pub fn list(&self) -> Result<Vec<Asset>, OperationError> {
        Ok(self.collection.load()?)
    }

    pub fn add(&self, draft: AssetDraft) -> Result<Asset, OperationError> {
        require("name", &draft.name)?;
        require("branch_site", &draft.branch_site)?;

        let mut assets = self.collection.load()?;
        let id = next_record_id("AST", assets.iter().map(|asset| asset.id.as_str()));

        let asset = Asset {
            id,
            name: draft.name,
            category: draft.category,
            branch_site: draft.branch_site,
            status: AssetStatus::Active,
        };

        assets.push(asset.clone());
        self.collection.save(&assets)?;
        Ok(asset)
    }

    pub fn update(&self, updated: Asset) -> Result<Asset, OperationError> {
        require("name", &updated.name)?;
        require("branch_site", &updated.branch_site)?;

        let mut assets = self.collection.load()?;
        let slot = assets
            .iter_mut()
            .find(|asset| asset.id == updated.id)
            .ok_or_else(|| OperationError::NotFound(updated.id.clone()))?;

        *slot = updated.clone();
        self.collection.save(&assets)?;
        Ok(updated)
    }

    pub fn delete(&self, id: &str) -> Result<(), OperationError> {
        let assets = self.collection.load()?;
        let before = assets.len();
        let remaining: Vec<Asset> = assets.into_iter().filter(|asset| asset.id != id).collect();

        if remaining.len() == before {
            return Err(OperationError::NotFound(id.to_string()));
        }

        self.collection.save(&remaining)?;
        Ok(())
    }
}

#[derive(Clone)]
pub struct UserService {
    collection: Collection<UserAccount>,
}

impl UserService {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            collection: Collection::new(store, keys::USERS),
        }
    }

    pub fn list(&self) -> Result<Vec<UserAccount>, OperationError> {
        Ok(self.collection.load()?)
    }

    pub fn add(&self, draft: UserDraft) -> Result<UserAccount, OperationError> {
        require("name", &draft.name)?;
        require("email", &draft.email)?;

        let mut users = self.collection.load()?;
        let id = next_record_id("USR", users.iter().map(|user| user.id.as_str()));

        let user = UserAccount {
            id,
            name: draft.name,
            email: draft.email,
            role: draft.role,
        };

        users.push(user.clone());
        self.collection.save(&users)?;
        Ok(user)
    }

    pub fn update(&self, updated: UserAccount) -> Result<UserAccount, OperationError> {
        require("name", &updated.name)?;
        require("email", &updated.email)?;

        let mut users = self.collection.load()?;
        let slot = users
            .iter_mut()
            .find(|user| user.id == updated.id)
            .ok_or_else(|| OperationError::NotFound(updated.id.clone()))?;

        *slot = updated.clone();
        self.collection.save(&users)?;
        Ok(updated)
    }

    pub fn delete(&self, id: &str) -> Result<(), OperationError> {
        let users = self.collection.load()?;
        let before = users.len();
        let remaining: Vec<UserAccount> =
            users.into_iter().filter(|user| user.id != id).collect();

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
    use crate::operations::directory::domain::{AssetCategory, Role};
    use crate::store::InMemoryStore;

    #[test]
    fn branch_crud_round_trip() {
        let service = BranchService::new(Arc::new(InMemoryStore::default()));
        let branch = service
            .add(BranchDraft {
                name: "Accra North".to_string(),
                code: "ACC-N".to_string(),
                region: "Greater Accra".to_string(),
                employees: 42,
                floor_area_sqm: 640.0,
            })
            .expect("add");

        assert_eq!(branch.id, "BR-000001");
        assert_eq!(branch.status, BranchStatus::Active);

        let mut renamed = branch.clone();
        renamed.name = "Accra North Annex".to_string();
        service.update(renamed).expect("update");

        service.delete(&branch.id).expect("delete");
        assert!(service.list().expect("list").is_empty());
    }

    #[test]
    fn asset_draft_requires_branch_site() {
        let service = AssetService::new(Arc::new(InMemoryStore::default()));
        let err = service
            .add(AssetDraft {
                name: "Generator 7".to_string(),
                category: AssetCategory::Generator,
                branch_site: "".to_string(),
            })
            .expect_err("rejected");
        assert!(matches!(err, OperationError::Validation(_)));
    }

    #[test]
    fn users_keep_their_assigned_role() {
        let service = UserService::new(Arc::new(InMemoryStore::default()));
        let user = service
            .add(UserDraft {
                name: "Kwame Mensah".to_string(),
                email: "k.mensah@example.com".to_string(),
                role: Role::Technician,
            })
            .expect("add");
        assert_eq!(user.role, Role::Technician);
    }
}
