use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use validator::Validate;

use crate::error::ApiError;
use crate::middleware::BearerToken;
use crate::models::{CourseGroup, CreateVideoPayload, Video};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/videos", get(list_videos))
        .route("/videos", post(create_video))
        .route("/videos/total", get(total_videos))
        .route("/courses/{course_id}/groups", get(course_groups))
}

#[derive(Debug, Serialize)]
struct VideosResponse {
    videos: Vec<Video>,
}

#[derive(Debug, Serialize)]
struct TotalVideosResponse {
    total: u64,
}

// GET /api/videos
async fn list_videos(
    State(state): State<Arc<AppState>>,
) -> Result<Json<VideosResponse>, ApiError> {
    let videos = state.travel_api.list_videos().await?;
    Ok(Json(VideosResponse { videos }))
}

// POST /api/videos
async fn create_video(
    State(state): State<Arc<AppState>>,
    BearerToken(token): BearerToken,
    Json(payload): Json<CreateVideoPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload.validate()?;
    let video = state.travel_api.create_video(&token, &payload).await?;
    Ok((StatusCode::CREATED, Json(video)))
}

// GET /api/courses/{course_id}/groups
async fn course_groups(
    State(state): State<Arc<AppState>>,
    Path(course_id): Path<String>,
) -> Result<Json<Vec<CourseGroup>>, ApiError> {
    Ok(Json(state.travel_api.course_groups(&course_id).await?))
}

// GET /api/videos/total
async fn total_videos(
    State(state): State<Arc<AppState>>,
) -> Result<Json<TotalVideosResponse>, ApiError> {
    let total = state.travel_api.total_videos().await?;
    Ok(Json(TotalVideosResponse { total }))
}
