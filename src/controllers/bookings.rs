use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use validator::Validate;

use crate::error::ApiError;
use crate::listing;
use crate::middleware::{BearerToken, MaybeToken};
use crate::models::{Booking, CreateBookingPayload};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/bookings", get(list_bookings))
        .route("/bookings", post(create_booking))
        .route("/bookings/{id}", get(get_booking))
        .route("/bookings/{id}", delete(delete_booking))
}

/// Deep-linkable list state: `?search=&page=&limit=`.
#[derive(Debug, Deserialize)]
pub struct BookingsQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub search: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BookingsPage {
    bookings: Vec<Booking>,
    total_count: usize,
}

// GET /api/bookings
async fn list_bookings(
    State(state): State<Arc<AppState>>,
    MaybeToken(token): MaybeToken,
    Query(params): Query<BookingsQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let page = params.page.unwrap_or(1).max(1);
    let limit = params.limit.unwrap_or(10).clamp(1, 100);
    // widen before multiplying, page is attacker-controlled
    let skip = (page as usize - 1) * limit as usize;

    let all = state.travel_api.list_bookings(token.as_deref()).await?;
    let filtered = listing::filter_bookings(all, params.search.as_deref().unwrap_or_default());
    let page = listing::page_of(filtered, skip, limit as usize);

    Ok(Json(BookingsPage {
        bookings: page.items,
        total_count: page.total_count,
    }))
}

// GET /api/bookings/{id}
async fn get_booking(
    State(state): State<Arc<AppState>>,
    BearerToken(token): BearerToken,
    Path(id): Path<String>,
) -> Result<Json<Booking>, ApiError> {
    Ok(Json(state.travel_api.get_booking(&token, &id).await?))
}

// POST /api/bookings
async fn create_booking(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateBookingPayload>,
) -> Result<impl IntoResponse, ApiError> {
    // rejected here, before any network call
    payload.validate()?;
    let booking = state.travel_api.create_booking(&payload).await?;
    Ok((StatusCode::CREATED, Json(booking)))
}

// DELETE /api/bookings/{id}
async fn delete_booking(
    State(state): State<Arc<AppState>>,
    BearerToken(token): BearerToken,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    state.travel_api.delete_booking(&token, &id).await?;
    Ok(Json(serde_json::json!({ "message": "Reserva excluída com sucesso" })))
}
