use axum::{
    extract::State,
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;
use validator::Validate;

use crate::error::ApiError;
use crate::services::crypto;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/auth/login", post(login))
        .route("/auth/logout", post(logout))
}

#[derive(Debug, Deserialize, Validate)]
pub struct LoginPayload {
    #[validate(email(message = "Email inválido"))]
    pub email: String,
    #[validate(length(min = 1, message = "Senha é obrigatória"))]
    pub password: String,
}

// POST /api/auth/login
//
// The session cookie carries the upstream token sealed with the shared
// secret; only this service can read it back.
async fn login(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Json(payload): Json<LoginPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload.validate()?;

    let session = state
        .travel_api
        .login(&payload.email, &payload.password)
        .await?;

    let sealed = crypto::encrypt(&state.config.auth.crypt_secret, &session.access_token)
        .map_err(|e| ApiError::Internal(format!("Falha ao proteger a sessão: {e}")))?;

    let cookie = Cookie::build((state.config.auth.token_cookie.clone(), sealed))
        .path("/")
        .http_only(true)
        .max_age(time::Duration::hours(state.config.auth.cookie_max_age_hours))
        .build();

    info!("login succeeded for {}", session.email);
    Ok((
        jar.add(cookie),
        Json(serde_json::json!({
            "id": session.id,
            "name": session.name,
            "email": session.email,
            "token": session.access_token,
            "role": session.role.as_deref().unwrap_or("user"),
        })),
    ))
}

// POST /api/auth/logout
async fn logout(State(state): State<Arc<AppState>>, jar: CookieJar) -> impl IntoResponse {
    let cleared = jar.remove(
        Cookie::build((state.config.auth.token_cookie.clone(), ""))
            .path("/")
            .build(),
    );
    (
        cleared,
        Json(serde_json::json!({ "message": "Sessão encerrada" })),
    )
}
