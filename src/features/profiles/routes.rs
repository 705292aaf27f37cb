use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::features::profiles::handlers;
use crate::features::profiles::services::ProfileService;

/// Create routes for the profiles feature (all require authentication)
pub fn routes(service: Arc<ProfileService>) -> Router {
    Router::new()
        .route(
            "/api/profiles/me",
            get(handlers::get_profile).patch(handlers::update_profile),
        )
        .route(
            "/api/profiles/me/emergency-contact",
            put(handlers::update_emergency_contact),
        )
        .route("/api/profiles/me/avatar", post(handlers::upload_avatar))
        .with_state(service)
}
