use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Identity extracted from a validated session token.
///
/// This is the only identity state in the service: it is materialized per
/// request by the auth middleware and passed explicitly into service calls.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthenticatedUser {
    /// Provider-assigned user id (UUID string)
    pub sub: String,
    pub email: String,
}

impl AuthenticatedUser {
    /// Parse the subject claim as the profile UUID
    pub fn user_id(&self) -> Result<uuid::Uuid, crate::core::error::AppError> {
        uuid::Uuid::parse_str(&self.sub).map_err(|_| {
            crate::core::error::AppError::Auth("Subject claim is not a valid user id".to_string())
        })
    }
}
