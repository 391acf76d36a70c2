pub mod config;
pub mod controllers;
pub mod error;
pub mod export;
pub mod listing;
pub mod middleware;
pub mod models;
pub mod services;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

// Shared state for the whole application
#[derive(Clone)]
pub struct AppState {
    pub config: config::Config,
    pub travel_api: services::travel_api::TravelApiClient,
}

impl AppState {
    pub fn new(config: config::Config) -> Arc<Self> {
        let travel_api = services::travel_api::TravelApiClient::from_config(&config.upstream);
        Arc::new(Self { config, travel_api })
    }
}

/// Build the full application router over the shared state.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(|| async { "Vandre Admin API v1.0" }))
        .route("/health", get(|| async { "OK" }))
        // Mount the routes from the controllers module
        .nest("/api", controllers::routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
