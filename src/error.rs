use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Every failure a request can hit, per the dashboard's error contract:
/// missing token means "go log in again", upstream errors carry the remote
/// API's message verbatim, validation failures never reach the network.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Token de autenticação não encontrado. Por favor, faça login novamente.")]
    MissingToken,

    /// Non-2xx answer from the travel API. `message` is the server-provided
    /// message when the body had one, otherwise "status + reason".
    #[error("{message}")]
    Upstream { status: StatusCode, message: String },

    /// Network-level failure reaching the travel API.
    #[error("Erro ao contatar a API de viagens: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Dados inválidos")]
    Validation(#[from] validator::ValidationErrors),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::MissingToken => StatusCode::UNAUTHORIZED,
            ApiError::Upstream { status, .. } => *status,
            ApiError::Request(_) => StatusCode::BAD_GATEWAY,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let message = self.to_string();
        let body = match &self {
            ApiError::Validation(errors) => json!({ "message": message, "errors": errors }),
            _ => json!({ "message": message }),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_error_keeps_server_message() {
        let err = ApiError::Upstream {
            status: StatusCode::NOT_FOUND,
            message: "Reserva não encontrada".to_string(),
        };
        assert_eq!(err.to_string(), "Reserva não encontrada");
    }

    #[test]
    fn missing_token_maps_to_unauthorized() {
        let response = ApiError::MissingToken.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
