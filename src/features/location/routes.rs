use std::sync::Arc;

use axum::{routing::post, Router};

use crate::features::location::handlers;
use crate::features::location::services::LocationService;

/// Create routes for the location feature (all require authentication)
pub fn routes(service: Arc<LocationService>) -> Router {
    Router::new()
        .route("/api/location/resolve", post(handlers::resolve_location))
        .with_state(service)
}
