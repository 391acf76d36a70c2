use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use validator::Validate;

use crate::error::ApiError;
use crate::middleware::BearerToken;
use crate::models::{CreateUserPayload, PaginatedUsers, UpdateUserPayload, User};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/users", get(list_users))
        .route("/users", post(create_user))
        .route("/users/{id}", put(update_user))
        .route("/users/{id}", delete(delete_user))
}

/// Unlike bookings and packages, the user listing is paginated by the
/// travel API itself; page/pageSize translate to skip/limit upstream.
#[derive(Debug, Deserialize)]
pub struct UsersQuery {
    pub page: Option<u32>,
    #[serde(rename = "pageSize")]
    pub page_size: Option<u32>,
    pub search: Option<String>,
}

// GET /api/users
async fn list_users(
    State(state): State<Arc<AppState>>,
    BearerToken(token): BearerToken,
    Query(params): Query<UsersQuery>,
) -> Result<Json<PaginatedUsers>, ApiError> {
    let page = params.page.unwrap_or(1).max(1);
    let page_size = params.page_size.unwrap_or(10).clamp(1, 100);
    // the upstream query is u32; saturate instead of overflowing
    let skip = (page - 1).saturating_mul(page_size);

    let users = state
        .travel_api
        .list_users(&token, skip, page_size, params.search.as_deref().unwrap_or_default())
        .await?;
    Ok(Json(users))
}

// POST /api/users
async fn create_user(
    State(state): State<Arc<AppState>>,
    BearerToken(token): BearerToken,
    Json(payload): Json<CreateUserPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload.validate()?;
    let user = state.travel_api.create_user(&token, &payload).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

// PUT /api/users/{id}
async fn update_user(
    State(state): State<Arc<AppState>>,
    BearerToken(token): BearerToken,
    Path(id): Path<String>,
    Json(payload): Json<UpdateUserPayload>,
) -> Result<Json<User>, ApiError> {
    payload.validate()?;
    let user = state.travel_api.update_user(&token, &id, &payload).await?;
    Ok(Json(user))
}

// DELETE /api/users/{id}
async fn delete_user(
    State(state): State<Arc<AppState>>,
    BearerToken(token): BearerToken,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    state.travel_api.delete_user(&token, &id).await?;
    Ok(Json(serde_json::json!({ "message": "Usuário excluído com sucesso" })))
}
