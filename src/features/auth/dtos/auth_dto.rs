use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::auth::model::AuthenticatedUser;
use crate::shared::validation::MOBILE_NO_REGEX;

/// Request DTO for sign-up
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct RegisterRequestDto {
    #[validate(length(min = 1, max = 120, message = "Name is required"))]
    pub name: String,

    #[validate(regex(path = *MOBILE_NO_REGEX, message = "Invalid mobile number"))]
    pub mobile_no: String,

    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
}

/// Request DTO for password sign-in
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct LoginRequestDto {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Request DTO for federated (Google) sign-in
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct GoogleSignInRequestDto {
    #[validate(length(min = 1, message = "ID token is required"))]
    pub id_token: String,
}

/// Session user returned on sign-up / sign-in
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthUserDto {
    pub id: String,
    pub email: String,
}

/// Response DTO carrying the provider session
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthResponseDto {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub refresh_token: String,
    pub user: AuthUserDto,
}

/// Response DTO for /api/auth/me
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MeResponseDto {
    pub id: String,
    pub email: String,
}

impl From<AuthenticatedUser> for MeResponseDto {
    fn from(user: AuthenticatedUser) -> Self {
        Self {
            id: user.sub,
            email: user.email,
        }
    }
}

/// Response DTO for sign-out
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SignOutResponseDto {
    pub signed_out: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_register_dto_accepts_valid_input() {
        let dto = RegisterRequestDto {
            name: "Juan Dela Cruz".to_string(),
            mobile_no: "09171234567".to_string(),
            email: "juan@example.com".to_string(),
            password: "correct-horse".to_string(),
        };
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_register_dto_rejects_bad_mobile_no() {
        let dto = RegisterRequestDto {
            name: "Juan Dela Cruz".to_string(),
            mobile_no: "12345".to_string(),
            email: "juan@example.com".to_string(),
            password: "correct-horse".to_string(),
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_register_dto_accepts_generated_identities() {
        use fake::faker::internet::en::SafeEmail;
        use fake::faker::name::en::Name;
        use fake::Fake;

        for _ in 0..20 {
            let dto = RegisterRequestDto {
                name: Name().fake(),
                mobile_no: "09171234567".to_string(),
                email: SafeEmail().fake(),
                password: "correct-horse".to_string(),
            };
            assert!(
                dto.validate().is_ok(),
                "rejected generated identity: {:?}",
                dto
            );
        }
    }

    #[test]
    fn test_register_dto_rejects_short_password() {
        let dto = RegisterRequestDto {
            name: "Juan Dela Cruz".to_string(),
            mobile_no: "09171234567".to_string(),
            email: "juan@example.com".to_string(),
            password: "short".to_string(),
        };
        assert!(dto.validate().is_err());
    }
}
