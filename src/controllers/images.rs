use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use reqwest::multipart::Form;
use std::sync::Arc;

use super::upload::{forward_part, read_file};
use crate::error::ApiError;
use crate::middleware::BearerToken;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/images/upload", post(upload_image))
}

// POST /api/images/upload
//
// Forwards the single `file` field upstream and answers with the stored
// image id.
async fn upload_image(
    State(state): State<Arc<AppState>>,
    BearerToken(token): BearerToken,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, ApiError> {
    let mut file = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Formulário multipart inválido: {e}")))?
    {
        if field.name() == Some("file") {
            file = Some(read_file(field).await?);
        }
    }

    let file = file.ok_or_else(|| ApiError::BadRequest("Arquivo de imagem é obrigatório".to_string()))?;
    let form = Form::new().part("file", forward_part(file)?);
    let uploaded = state.travel_api.upload_image(&token, form).await?;
    Ok((StatusCode::CREATED, Json(uploaded)))
}
