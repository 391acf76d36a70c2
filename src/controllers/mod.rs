pub mod auth;
pub mod bookings;
pub mod images;
pub mod travel_packages;
pub mod users;
pub mod videos;

pub(crate) mod upload;

use axum::Router;
use std::sync::Arc;

pub fn routes() -> Router<Arc<crate::AppState>> {
    Router::new()
        .merge(auth::routes())
        .merge(bookings::routes())
        .merge(images::routes())
        .merge(travel_packages::routes())
        .merge(users::routes())
        .merge(videos::routes())
}
