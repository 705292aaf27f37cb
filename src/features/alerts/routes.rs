use std::sync::Arc;

use axum::{routing::post, Router};

use crate::features::alerts::handlers::{self, AlertState};
use crate::features::alerts::services::AlertService;
use crate::features::profiles::services::ProfileService;

/// Create routes for the alerts feature (all require authentication)
pub fn routes(alert_service: Arc<AlertService>, profile_service: Arc<ProfileService>) -> Router {
    let state = AlertState {
        alert_service,
        profile_service,
    };

    Router::new()
        .route("/api/alerts", post(handlers::submit_alert))
        .with_state(state)
}
