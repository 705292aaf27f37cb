use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::alerts::dtos::{AlertResponseDto, SubmitAlertDto};
use crate::features::alerts::services::{AlertService, SubmitAlert};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::profiles::services::ProfileService;
use crate::shared::types::ApiResponse;

/// State for alert handlers
#[derive(Clone)]
pub struct AlertState {
    pub alert_service: Arc<AlertService>,
    pub profile_service: Arc<ProfileService>,
}

/// Submit an SOS emergency alert
#[utoipa::path(
    post,
    path = "/api/alerts",
    request_body = SubmitAlertDto,
    responses(
        (status = 201, description = "Emergency alert sent", body = ApiResponse<AlertResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "alerts"
)]
pub async fn submit_alert(
    user: AuthenticatedUser,
    State(state): State<AlertState>,
    AppJson(dto): AppJson<SubmitAlertDto>,
) -> Result<(StatusCode, Json<ApiResponse<AlertResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    // Reporter identity comes from the caller's profile, not the payload
    let reporter_id = user.user_id()?;
    let profile = state.profile_service.get_required(reporter_id).await?;

    let incident = state
        .alert_service
        .submit(SubmitAlert {
            reporter_id,
            reporter_name: profile.name,
            reporter_contact: profile.mobile_no,
            details: dto.details,
            latitude: dto.latitude,
            longitude: dto.longitude,
            location_address: dto.location_address,
            emergency_contact_name: dto.emergency_contact_name,
            emergency_contact_number: dto.emergency_contact_number,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(incident.into()),
            Some("Emergency report sent".to_string()),
            None,
        )),
    ))
}
