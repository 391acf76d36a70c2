//! Client for the remote travel API. Every dashboard resource lives behind
//! this API; the gateway holds no state of its own.
//!
//! The error contract mirrors the dashboard's expectations: a non-2xx
//! answer becomes `ApiError::Upstream` carrying the server's `message`
//! field verbatim when the body has one, so the UI can show it in a toast
//! unchanged. There are no retries; a failed call is terminal for that
//! request.

use axum::http::StatusCode;
use reqwest::multipart::Form;
use reqwest::{Method, RequestBuilder};
use serde_json::Value;
use std::time::Duration;
use tracing::{error, warn};

use crate::config::UpstreamConfig;
use crate::error::ApiError;
use crate::models::{
    Booking, CourseGroup, CreateBookingPayload, CreateUserPayload, CreateVideoPayload,
    LoginResponse, PaginatedUsers, TravelPackage, UpdateTravelPackagePayload, UpdateUserPayload,
    UploadedImage, User, Video,
};

#[derive(Clone)]
pub struct TravelApiClient {
    base_url: String,
    http_client: reqwest::Client,
}

impl TravelApiClient {
    pub fn from_config(config: &UpstreamConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http_client: reqwest::Client::builder()
                .timeout(Duration::from_secs(config.timeout_seconds))
                .build()
                .expect("Failed to create HTTP client"),
        }
    }

    /// Tokenless variant for endpoints that tolerate unauthenticated reads.
    fn request(&self, method: Method, path: &str, token: Option<&str>) -> RequestBuilder {
        let mut req = self
            .http_client
            .request(method, format!("{}{}", self.base_url, path));
        if let Some(token) = token {
            req = req.bearer_auth(token);
        }
        req
    }

    /// Turn a non-2xx response into `ApiError::Upstream`, preferring the
    /// server's own `message` over the bare status line.
    async fn check(resp: reqwest::Response, context: &str) -> Result<reqwest::Response, ApiError> {
        if resp.status().is_success() {
            return Ok(resp);
        }

        let status =
            StatusCode::from_u16(resp.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
        let reason = status.canonical_reason().unwrap_or("").to_string();
        let body = resp.text().await.unwrap_or_default();
        let message = serde_json::from_str::<Value>(&body)
            .ok()
            .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from))
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| format!("{}: {} {}", context, status.as_u16(), reason));

        error!("travel API error on {}: {} {}", context, status, message);
        Err(ApiError::Upstream { status, message })
    }

    /* ---------- bookings ---------- */

    /// The bookings endpoint returns the whole collection; search and
    /// pagination happen in the `listing` module. Reads tolerate a missing
    /// token.
    pub async fn list_bookings(&self, token: Option<&str>) -> Result<Vec<Booking>, ApiError> {
        let resp = self.request(Method::GET, "/bookings", token).send().await?;
        let resp = Self::check(resp, "buscar reservas").await?;
        Ok(resp.json().await?)
    }

    pub async fn get_booking(&self, token: &str, id: &str) -> Result<Booking, ApiError> {
        let resp = self
            .request(Method::GET, &format!("/bookings/{id}"), Some(token))
            .send()
            .await?;
        let resp = Self::check(resp, "buscar reserva").await?;
        Ok(resp.json().await?)
    }

    /// Booking creation is the public passenger-facing flow and carries no
    /// authorization header.
    pub async fn create_booking(&self, payload: &CreateBookingPayload) -> Result<Booking, ApiError> {
        let resp = self
            .request(Method::POST, "/bookings", None)
            .json(payload)
            .send()
            .await?;
        let resp = Self::check(resp, "criar reserva").await?;
        Ok(resp.json().await?)
    }

    pub async fn delete_booking(&self, token: &str, id: &str) -> Result<(), ApiError> {
        let resp = self
            .request(Method::DELETE, &format!("/bookings/{id}"), Some(token))
            .send()
            .await?;
        Self::check(resp, "excluir reserva").await?;
        Ok(())
    }

    /* ---------- travel packages ---------- */

    pub async fn list_travel_packages(&self, token: &str) -> Result<Vec<TravelPackage>, ApiError> {
        let resp = self
            .request(Method::GET, "/travel-packages", Some(token))
            .send()
            .await?;
        let resp = Self::check(resp, "buscar pacotes de viagem").await?;
        Ok(resp.json().await?)
    }

    pub async fn get_travel_package(&self, token: &str, id: &str) -> Result<TravelPackage, ApiError> {
        let resp = self
            .request(Method::GET, &format!("/travel-packages/{id}"), Some(token))
            .send()
            .await?;
        let resp = Self::check(resp, "buscar pacote de viagem").await?;
        Ok(resp.json().await?)
    }

    /// Create carries the cover image (and optionally the itinerary PDF) as
    /// multipart form data.
    pub async fn create_travel_package(
        &self,
        token: &str,
        form: Form,
    ) -> Result<TravelPackage, ApiError> {
        let resp = self
            .request(Method::POST, "/travel-packages", Some(token))
            .multipart(form)
            .send()
            .await?;
        let resp = Self::check(resp, "criar pacote de viagem").await?;
        Ok(resp.json().await?)
    }

    pub async fn update_travel_package(
        &self,
        token: &str,
        id: &str,
        payload: &UpdateTravelPackagePayload,
    ) -> Result<TravelPackage, ApiError> {
        let resp = self
            .request(Method::PUT, &format!("/travel-packages/{id}"), Some(token))
            .json(payload)
            .send()
            .await?;
        let resp = Self::check(resp, "atualizar pacote de viagem").await?;
        Ok(resp.json().await?)
    }

    pub async fn update_travel_package_with_files(
        &self,
        token: &str,
        id: &str,
        form: Form,
    ) -> Result<TravelPackage, ApiError> {
        let resp = self
            .request(Method::PUT, &format!("/travel-packages/{id}"), Some(token))
            .multipart(form)
            .send()
            .await?;
        let resp = Self::check(resp, "atualizar pacote de viagem").await?;
        Ok(resp.json().await?)
    }

    pub async fn delete_travel_package(&self, token: &str, id: &str) -> Result<(), ApiError> {
        let resp = self
            .request(Method::DELETE, &format!("/travel-packages/{id}"), Some(token))
            .send()
            .await?;
        Self::check(resp, "excluir pacote de viagem").await?;
        Ok(())
    }

    /* ---------- users ---------- */

    /// The user listing is natively paginated upstream; skip/limit/search
    /// pass straight through.
    pub async fn list_users(
        &self,
        token: &str,
        skip: u32,
        limit: u32,
        search: &str,
    ) -> Result<PaginatedUsers, ApiError> {
        let mut req = self
            .request(Method::GET, "/user/admin/users", Some(token))
            .query(&[("skip", skip.to_string()), ("limit", limit.to_string())]);
        if !search.is_empty() {
            req = req.query(&[("search", search)]);
        }
        let resp = req.send().await?;
        let resp = Self::check(resp, "buscar usuários").await?;
        Ok(resp.json().await?)
    }

    pub async fn create_user(&self, token: &str, payload: &CreateUserPayload) -> Result<User, ApiError> {
        let resp = self
            .request(Method::POST, "/user/admin/users", Some(token))
            .json(payload)
            .send()
            .await?;
        let resp = Self::check(resp, "criar usuário").await?;
        Ok(resp.json().await?)
    }

    pub async fn update_user(
        &self,
        token: &str,
        id: &str,
        payload: &UpdateUserPayload,
    ) -> Result<User, ApiError> {
        let resp = self
            .request(Method::PUT, &format!("/user/admin/users/{id}"), Some(token))
            .json(payload)
            .send()
            .await?;
        let resp = Self::check(resp, "atualizar usuário").await?;
        Ok(resp.json().await?)
    }

    pub async fn delete_user(&self, token: &str, id: &str) -> Result<(), ApiError> {
        let resp = self
            .request(Method::DELETE, &format!("/user/admin/users/{id}"), Some(token))
            .send()
            .await?;
        Self::check(resp, "excluir usuário").await?;
        Ok(())
    }

    /* ---------- images ---------- */

    /// Standalone image upload, used before video creation to obtain the
    /// image and thumbnail ids.
    pub async fn upload_image(&self, token: &str, form: Form) -> Result<UploadedImage, ApiError> {
        let resp = self
            .request(Method::POST, "/image/upload", Some(token))
            .multipart(form)
            .send()
            .await?;
        let resp = Self::check(resp, "fazer upload da imagem").await?;
        Ok(resp.json().await?)
    }

    /* ---------- course videos ---------- */

    /// The videos endpoint has been seen answering with shapes other than
    /// `{ "videos": [...] }`; tolerate that with an empty list instead of
    /// failing the whole screen.
    pub async fn list_videos(&self) -> Result<Vec<Video>, ApiError> {
        let resp = self.request(Method::GET, "/course/videos", None).send().await?;
        let resp = Self::check(resp, "buscar vídeos").await?;
        let body: Value = resp.json().await?;

        match body.get("videos") {
            Some(videos) if videos.is_array() => {
                serde_json::from_value(videos.clone()).map_err(|e| {
                    warn!("unexpected video payload: {}", e);
                    ApiError::Internal("Resposta inesperada da API de vídeos".to_string())
                })
            }
            _ => {
                warn!("unexpected videos response shape: {}", body);
                Ok(Vec::new())
            }
        }
    }

    pub async fn create_video(
        &self,
        token: &str,
        payload: &CreateVideoPayload,
    ) -> Result<Video, ApiError> {
        let resp = self
            .request(Method::POST, "/course/video", Some(token))
            .json(payload)
            .send()
            .await?;
        let resp = Self::check(resp, "criar vídeo").await?;
        Ok(resp.json().await?)
    }

    /// Groups answer as a bare array.
    pub async fn course_groups(&self, course_id: &str) -> Result<Vec<CourseGroup>, ApiError> {
        let resp = self
            .request(Method::GET, &format!("/course/{course_id}/groups"), None)
            .send()
            .await?;
        let resp = Self::check(resp, "buscar grupos do curso").await?;
        Ok(resp.json().await?)
    }

    pub async fn total_videos(&self) -> Result<u64, ApiError> {
        let resp = self
            .request(Method::GET, "/course/videos/total", None)
            .send()
            .await?;
        let resp = Self::check(resp, "buscar total de vídeos").await?;
        let body: Value = resp.json().await?;
        Ok(body.get("total").and_then(Value::as_u64).unwrap_or(0))
    }

    /* ---------- auth ---------- */

    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let resp = self
            .request(Method::POST, "/auth/login", None)
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await?;
        let resp = Self::check(resp, "fazer login").await?;
        Ok(resp.json().await?)
    }
}
