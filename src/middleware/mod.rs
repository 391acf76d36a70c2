//! Token retrieval for outgoing travel API calls.
//!
//! The dashboard historically looked for the credential in several places;
//! the extractors keep that fallback order:
//! 1. the encrypted `token` session cookie (sealed at login);
//! 2. the plain `access_token` cookie some older clients still set;
//! 3. the `Authorization: Bearer` header.
//!
//! `BearerToken` rejects with 401 when nothing is found. `MaybeToken`
//! never fails: listing endpoints tolerate unauthenticated reads.

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use axum_extra::extract::cookie::CookieJar;
use std::convert::Infallible;
use std::sync::Arc;
use tracing::warn;

use crate::{error::ApiError, services::crypto, AppState};

#[derive(Debug, Clone)]
pub struct BearerToken(pub String);

#[derive(Debug, Clone, Default)]
pub struct MaybeToken(pub Option<String>);

fn resolve_token(parts: &Parts, state: &AppState) -> Option<String> {
    let jar = CookieJar::from_headers(&parts.headers);

    // 1. encrypted session cookie
    if let Some(cookie) = jar.get(&state.config.auth.token_cookie) {
        match crypto::decrypt(&state.config.auth.crypt_secret, cookie.value()) {
            Ok(token) if !token.is_empty() => return Some(token),
            Ok(_) => {}
            Err(e) => warn!("failed to unseal token cookie: {}", e),
        }
    }

    // 2. plain fallback cookie
    if let Some(cookie) = jar.get(&state.config.auth.fallback_cookie) {
        if !cookie.value().is_empty() {
            return Some(cookie.value().to_string());
        }
    }

    // 3. Authorization header
    parts
        .headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .filter(|token| !token.is_empty())
        .map(String::from)
}

impl FromRequestParts<Arc<AppState>> for MaybeToken {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        Ok(MaybeToken(resolve_token(parts, state)))
    }
}

impl FromRequestParts<Arc<AppState>> for BearerToken {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        resolve_token(parts, state)
            .map(BearerToken)
            .ok_or(ApiError::MissingToken)
    }
}
