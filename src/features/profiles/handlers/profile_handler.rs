use axum::{
    extract::{Multipart, State},
    Json,
};
use std::sync::Arc;
use tracing::debug;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::model::AuthenticatedUser;
use crate::features::profiles::dtos::{
    is_avatar_content_type_allowed, ProfileResponseDto, UpdateEmergencyContactDto,
    UpdateProfileDto, ALLOWED_AVATAR_MIME_TYPES, MAX_AVATAR_SIZE,
};
use crate::features::profiles::services::ProfileService;
use crate::shared::types::ApiResponse;

/// Get the authenticated user's profile
#[utoipa::path(
    get,
    path = "/api/profiles/me",
    responses(
        (status = 200, description = "Profile found", body = ApiResponse<ProfileResponseDto>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Profile not found")
    ),
    security(("bearer_auth" = [])),
    tag = "profiles"
)]
pub async fn get_profile(
    user: AuthenticatedUser,
    State(service): State<Arc<ProfileService>>,
) -> Result<Json<ApiResponse<ProfileResponseDto>>> {
    let profile = service.get_required(user.user_id()?).await?;
    Ok(Json(ApiResponse::success(Some(profile.into()), None, None)))
}

/// Profile completion: update personal information
#[utoipa::path(
    patch,
    path = "/api/profiles/me",
    request_body = UpdateProfileDto,
    responses(
        (status = 200, description = "Profile updated", body = ApiResponse<ProfileResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Profile not found")
    ),
    security(("bearer_auth" = [])),
    tag = "profiles"
)]
pub async fn update_profile(
    user: AuthenticatedUser,
    State(service): State<Arc<ProfileService>>,
    AppJson(dto): AppJson<UpdateProfileDto>,
) -> Result<Json<ApiResponse<ProfileResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let profile = service.update_profile(user.user_id()?, &dto).await?;
    Ok(Json(ApiResponse::success(Some(profile.into()), None, None)))
}

/// Set the emergency contact
#[utoipa::path(
    put,
    path = "/api/profiles/me/emergency-contact",
    request_body = UpdateEmergencyContactDto,
    responses(
        (status = 200, description = "Emergency contact updated", body = ApiResponse<ProfileResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Profile not found")
    ),
    security(("bearer_auth" = [])),
    tag = "profiles"
)]
pub async fn update_emergency_contact(
    user: AuthenticatedUser,
    State(service): State<Arc<ProfileService>>,
    AppJson(dto): AppJson<UpdateEmergencyContactDto>,
) -> Result<Json<ApiResponse<ProfileResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let profile = service
        .update_emergency_contact(user.user_id()?, &dto)
        .await?;
    Ok(Json(ApiResponse::success(Some(profile.into()), None, None)))
}

/// Upload a new avatar
///
/// Accepts multipart/form-data with a single `file` field.
#[utoipa::path(
    post,
    path = "/api/profiles/me/avatar",
    request_body(
        content = String,
        content_type = "multipart/form-data",
        description = "Avatar image (jpeg, png, or webp) in a `file` field",
    ),
    responses(
        (status = 200, description = "Avatar updated", body = ApiResponse<ProfileResponseDto>),
        (status = 400, description = "Invalid file"),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "profiles"
)]
pub async fn upload_avatar(
    user: AuthenticatedUser,
    State(service): State<Arc<ProfileService>>,
    mut multipart: Multipart,
) -> Result<Json<ApiResponse<ProfileResponseDto>>> {
    let mut file_data: Option<Vec<u8>> = None;
    let mut content_type: Option<String> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        debug!("Failed to read multipart field: {}", e);
        AppError::BadRequest(format!("Failed to read multipart data: {}", e))
    })? {
        let field_name = field.name().unwrap_or("").to_string();

        if field_name == "file" {
            let ct = field
                .content_type()
                .map(|s| s.to_string())
                .unwrap_or_else(|| "application/octet-stream".to_string());

            let data = field.bytes().await.map_err(|e| {
                debug!("Failed to read file bytes: {}", e);
                AppError::BadRequest(format!("Failed to read file data: {}", e))
            })?;

            file_data = Some(data.to_vec());
            content_type = Some(ct);
        } else {
            debug!("Ignoring unknown field: {}", field_name);
        }
    }

    let file_data =
        file_data.ok_or_else(|| AppError::BadRequest("File is required".to_string()))?;
    let content_type =
        content_type.ok_or_else(|| AppError::BadRequest("Content type is required".to_string()))?;

    if file_data.len() > MAX_AVATAR_SIZE {
        return Err(AppError::BadRequest(format!(
            "File too large. Maximum size is {} bytes ({} MB)",
            MAX_AVATAR_SIZE,
            MAX_AVATAR_SIZE / 1024 / 1024
        )));
    }

    if !is_avatar_content_type_allowed(&content_type) {
        return Err(AppError::BadRequest(format!(
            "File type '{}' is not allowed. Allowed types: {}",
            content_type,
            ALLOWED_AVATAR_MIME_TYPES.join(", ")
        )));
    }

    let profile = service
        .update_avatar(user.user_id()?, file_data, &content_type)
        .await?;

    Ok(Json(ApiResponse::success(Some(profile.into()), None, None)))
}
