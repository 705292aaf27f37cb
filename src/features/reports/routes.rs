use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::profiles::services::ProfileService;
use crate::features::reports::handlers::{self, ReportState};
use crate::features::reports::services::ReportService;

/// Create routes for the reports feature (all require authentication)
pub fn routes(
    report_service: Arc<ReportService>,
    profile_service: Arc<ProfileService>,
) -> Router {
    let state = ReportState {
        report_service,
        profile_service,
    };

    Router::new()
        .route(
            "/api/reports",
            get(handlers::list_reports).post(handlers::submit_report),
        )
        .route("/api/reports/{id}", get(handlers::get_report))
        .with_state(state)
}
