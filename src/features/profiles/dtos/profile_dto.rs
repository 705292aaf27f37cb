use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::profiles::models::Profile;
use crate::shared::validation::MOBILE_NO_REGEX;

/// Maximum avatar size in bytes (5 MB)
pub const MAX_AVATAR_SIZE: usize = 5 * 1024 * 1024;

/// MIME types accepted for avatar uploads
pub const ALLOWED_AVATAR_MIME_TYPES: &[&str] = &["image/jpeg", "image/png", "image/webp"];

pub fn is_avatar_content_type_allowed(content_type: &str) -> bool {
    ALLOWED_AVATAR_MIME_TYPES.contains(&content_type)
}

pub fn extension_for_avatar_content_type(content_type: &str) -> &'static str {
    match content_type {
        "image/png" => "png",
        "image/webp" => "webp",
        _ => "jpg",
    }
}

/// Response DTO for a profile
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProfileResponseDto {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub mobile_no: String,
    pub avatar_url: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub permanent_address: Option<String>,
    pub bio: Option<String>,
    pub emergency_contact_name: Option<String>,
    pub emergency_contact_number: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Profile> for ProfileResponseDto {
    fn from(p: Profile) -> Self {
        Self {
            id: p.id,
            name: p.name,
            email: p.email,
            mobile_no: p.mobile_no,
            avatar_url: p.avatar_url,
            birth_date: p.birth_date,
            permanent_address: p.permanent_address,
            bio: p.bio,
            emergency_contact_name: p.emergency_contact_name,
            emergency_contact_number: p.emergency_contact_number,
            created_at: p.created_at,
        }
    }
}

/// Request DTO for profile completion; absent fields are left unchanged
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateProfileDto {
    #[validate(length(min = 1, max = 120, message = "Name cannot be empty"))]
    pub name: Option<String>,

    #[validate(regex(path = *MOBILE_NO_REGEX, message = "Invalid mobile number"))]
    pub mobile_no: Option<String>,

    pub birth_date: Option<NaiveDate>,

    #[validate(length(max = 500, message = "Address is too long"))]
    pub permanent_address: Option<String>,

    #[validate(length(max = 1000, message = "Bio is too long"))]
    pub bio: Option<String>,
}

/// Request DTO for setting the emergency contact
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateEmergencyContactDto {
    #[validate(length(min = 1, max = 120, message = "Contact name is required"))]
    pub emergency_contact_name: String,

    #[validate(regex(path = *MOBILE_NO_REGEX, message = "Invalid contact number"))]
    pub emergency_contact_number: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_avatar_content_type_allowlist() {
        assert!(is_avatar_content_type_allowed("image/jpeg"));
        assert!(is_avatar_content_type_allowed("image/png"));
        assert!(!is_avatar_content_type_allowed("application/pdf"));
        assert!(!is_avatar_content_type_allowed("image/svg+xml"));
    }

    #[test]
    fn test_avatar_extension_mapping() {
        assert_eq!(extension_for_avatar_content_type("image/png"), "png");
        assert_eq!(extension_for_avatar_content_type("image/jpeg"), "jpg");
        assert_eq!(extension_for_avatar_content_type("image/webp"), "webp");
    }

    #[test]
    fn test_update_emergency_contact_validation() {
        let dto = UpdateEmergencyContactDto {
            emergency_contact_name: "Jane Doe".to_string(),
            emergency_contact_number: "09171234567".to_string(),
        };
        assert!(dto.validate().is_ok());

        let dto = UpdateEmergencyContactDto {
            emergency_contact_name: "".to_string(),
            emergency_contact_number: "nope".to_string(),
        };
        assert!(dto.validate().is_err());
    }
}
