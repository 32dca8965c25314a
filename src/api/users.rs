use axum::{Json, extract::State};
use std::sync::Arc;
use tracing::{debug, info};

use crate::api::errors::{ApiJson, ApiPath, ApiResult};
use crate::api::payloads::{CountResponse, MessageResponse, UpdateUserResponse, WelcomeResponse};
use crate::api::server::AppState;
use crate::store::ids::IdStrategy;
use crate::store::models::{User, UserFields};

pub async fn home<S: IdStrategy>(State(state): State<Arc<AppState<S>>>) -> Json<WelcomeResponse> {
    let total_users = state.users.read().await.count();
    Json(WelcomeResponse {
        message: "User Management API",
        version: env!("CARGO_PKG_VERSION"),
        total_users,
    })
}

pub async fn create_user<S: IdStrategy>(
    State(state): State<Arc<AppState<S>>>,
    ApiJson(payload): ApiJson<UserFields>,
) -> Json<User<S::Id>> {
    let user = state.users.write().await.create(payload);
    info!(user_id = %user.id, "user created");
    Json(user)
}

pub async fn list_users<S: IdStrategy>(
    State(state): State<Arc<AppState<S>>>,
) -> Json<Vec<User<S::Id>>> {
    Json(state.users.read().await.list().to_vec())
}

pub async fn count_users<S: IdStrategy>(
    State(state): State<Arc<AppState<S>>>,
) -> Json<CountResponse> {
    let total_users = state.users.read().await.count();
    Json(CountResponse { total_users })
}

pub async fn get_user<S: IdStrategy>(
    State(state): State<Arc<AppState<S>>>,
    ApiPath(user_id): ApiPath<S::Id>,
) -> ApiResult<Json<User<S::Id>>> {
    let users = state.users.read().await;
    let user = users.get(&user_id).inspect_err(|_| {
        debug!(user_id = %user_id, "user lookup missed");
    })?;
    Ok(Json(user.clone()))
}

pub async fn update_user<S: IdStrategy>(
    State(state): State<Arc<AppState<S>>>,
    ApiPath(user_id): ApiPath<S::Id>,
    ApiJson(payload): ApiJson<UserFields>,
) -> ApiResult<Json<UpdateUserResponse<S::Id>>> {
    let update = state
        .users
        .write()
        .await
        .update(&user_id, payload)
        .inspect_err(|_| debug!(user_id = %user_id, "update target missing"))?;
    info!(user_id = %user_id, "user updated");
    Ok(Json(update.into()))
}

pub async fn delete_user<S: IdStrategy>(
    State(state): State<Arc<AppState<S>>>,
    ApiPath(user_id): ApiPath<S::Id>,
) -> ApiResult<Json<MessageResponse>> {
    state
        .users
        .write()
        .await
        .delete(&user_id)
        .inspect_err(|_| debug!(user_id = %user_id, "delete target missing"))?;
    info!(user_id = %user_id, "user deleted");
    Ok(Json(MessageResponse {
        message: "User deleted successfully",
    }))
}
