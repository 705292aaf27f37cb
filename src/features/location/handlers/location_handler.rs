use std::sync::Arc;

use axum::{extract::State, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::model::AuthenticatedUser;
use crate::features::location::dtos::{ResolveLocationDto, UserLocationDto};
use crate::features::location::services::{LocationService, ReportedPosition};
use crate::shared::types::ApiResponse;

/// Resolve the device's current GPS fix to a readable address
#[utoipa::path(
    post,
    path = "/api/location/resolve",
    request_body = ResolveLocationDto,
    responses(
        (status = 200, description = "Location resolved", body = ApiResponse<UserLocationDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 502, description = "Reverse geocoding unavailable")
    ),
    security(("bearer_auth" = [])),
    tag = "location"
)]
pub async fn resolve_location(
    _user: AuthenticatedUser,
    State(service): State<Arc<LocationService>>,
    AppJson(dto): AppJson<ResolveLocationDto>,
) -> Result<Json<ApiResponse<UserLocationDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let source = ReportedPosition::new(dto.latitude, dto.longitude);
    let location = service.current_location(&source).await?;

    Ok(Json(ApiResponse::success(Some(location.into()), None, None)))
}
