use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, put};
use axum::{Json, Router};

use super::domain::{Asset, AssetDraft, Branch, BranchDraft, UserAccount, UserDraft};
use super::service::{AssetService, BranchService, UserService};
use crate::operations::OperationError;

#[derive(Clone)]
pub struct DirectoryState {
    pub branches: Arc<BranchService>,
    pub assets: Arc<AssetService>,
    pub users: Arc<UserService>,
}

/// One router for the three master collections; the API service nests it
/// under `/api/v1`.
pub fn directory_router(state: DirectoryState) -> Router {
    Router::new()
        .route("/branches", get(list_branches).post(create_branch))
        .route("/branches/:id", put(update_branch).delete(delete_branch))
        .route("/assets", get(list_assets).post(create_asset))
        .route("/assets/:id", put(update_asset).delete(delete_asset))
        .route("/users", get(list_users).post(create_user))
        .route("/users/:id", put(update_user).delete(delete_user))
        .with_state(state)
}

async fn list_branches(
    State(state): State<DirectoryState>,
) -> Result<Json<Vec<Branch>>, OperationError> {
    state.branches.list().map(Json)
}

async fn create_branch(
    State(state): State<DirectoryState>,
    Json(draft): Json<BranchDraft>,
) -> Result<(StatusCode, Json<Branch>), OperationError> {
    let branch = state.branches.add(draft)?;
    Ok((StatusCode::CREATED, Json(branch)))
}

async fn update_branch(
    State(state): State<DirectoryState>,
    Path(id): Path<String>,
    Json(mut updated): Json<Branch>,
) -> Result<Json<Branch>, OperationError> {
    updated.id = id;
    state.branches.update(updated).map(Json)
}

async fn delete_branch(
    State(state): State<DirectoryState>,
    Path(id): Path<String>,
) -> Result<StatusCode, OperationError> {
    state.branches.delete(&id)?;
    Ok(StatusCode::NO_CONTENT)
}

async fn list_assets(
    State(state): State<DirectoryState>,
) -> Result<Json<Vec<Asset>>, OperationError> {
    state.assets.list().map(Json)
}

async fn create_asset(
    State(state): State<DirectoryState>,
    Json(draft): Json<AssetDraft>,
) -> Result<(StatusCode, Json<Asset>), OperationError> {
    let asset = state.assets.add(draft)?;
    Ok((StatusCode::CREATED, Json(asset)))
}

async fn update_asset(
    State(state): State<DirectoryState>,
    Path(id): Path<String>,
    Json(mut updated): Json<Asset>,
) -> Result<Json<Asset>, OperationError> {
    updated.id = id;
    state.assets.update(updated).map(Json)
}

async fn delete_asset(
    State(state): State<DirectoryState>,
    Path(id): Path<String>,
) -> Result<StatusCode, OperationError> {
    state.assets.delete(&id)?;
    Ok(StatusCode::NO_CONTENT)
}

async fn list_users(
    State(state): State<DirectoryState>,
) -> Result<Json<Vec<UserAccount>>, OperationError> {
    state.users.list().map(Json)
}

async fn create_user(
    State(state): State<DirectoryState>,
    Json(draft): Json<UserDraft>,
) -> Result<(StatusCode, Json<UserAccount>), OperationError> {
    let user = state.users.add(draft)?;
    Ok((StatusCode::CREATED, Json(user)))
}

async fn update_user(
    State(state): State<DirectoryState>,
    Path(id): Path<String>,
    Json(mut updated): Json<UserAccount>,
) -> Result<Json<UserAccount>, OperationError> {
    updated.id = id;
    state.users.update(updated).map(Json)
}

async fn delete_user(
    State(state): State<DirectoryState>,
    Path(id): Path<String>,
) -> Result<StatusCode, OperationError> {
    state.users.delete(&id)?;
    Ok(StatusCode::NO_CONTENT)
}
