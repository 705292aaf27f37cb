use std::sync::Arc;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::auth::clients::{GoTrueClient, ProviderSession};
use crate::features::auth::dtos::{
    AuthResponseDto, AuthUserDto, GoogleSignInRequestDto, LoginRequestDto, MeResponseDto,
    RegisterRequestDto,
};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::profiles::models::NewProfile;
use crate::features::profiles::services::ProfileService;

/// Service for authentication operations (register, login, federated sign-in)
pub struct AuthService {
    provider_client: Arc<GoTrueClient>,
    profile_service: Arc<ProfileService>,
}

impl AuthService {
    pub fn new(provider_client: Arc<GoTrueClient>, profile_service: Arc<ProfileService>) -> Self {
        Self {
            provider_client,
            profile_service,
        }
    }

    /// Register a new user at the provider and create the initial profile row
    pub async fn register(&self, dto: RegisterRequestDto) -> Result<AuthResponseDto> {
        let email = dto.email.trim().to_lowercase();

        let session = self.provider_client.sign_up(&email, &dto.password).await?;

        let user_id = parse_user_id(&session.user.id)?;

        self.profile_service
            .create(&NewProfile {
                id: user_id,
                name: dto.name.trim().to_string(),
                email: email.clone(),
                mobile_no: dto.mobile_no,
            })
            .await?;

        tracing::info!("Registered user {} ({})", user_id, email);

        Ok(session_to_response(session, email))
    }

    /// Login with email and password
    pub async fn login(&self, dto: LoginRequestDto) -> Result<AuthResponseDto> {
        let email = dto.email.trim().to_lowercase();
        let session = self.provider_client.sign_in(&email, &dto.password).await?;
        Ok(session_to_response(session, email))
    }

    /// Federated sign-in: exchange a Google ID token for a provider session.
    ///
    /// First-time federated users get a profile row seeded from the token's
    /// identity; returning users keep their existing profile.
    pub async fn login_with_google(&self, dto: GoogleSignInRequestDto) -> Result<AuthResponseDto> {
        let session = self
            .provider_client
            .sign_in_with_google(&dto.id_token)
            .await?;

        let user_id = parse_user_id(&session.user.id)?;
        let email = session.user.email.clone().unwrap_or_default();

        if self.profile_service.get_by_id(user_id).await?.is_none() {
            self.profile_service
                .create(&NewProfile {
                    id: user_id,
                    name: email.split('@').next().unwrap_or("").to_string(),
                    email: email.clone(),
                    mobile_no: String::new(),
                })
                .await?;
            tracing::info!("Seeded profile for federated user {}", user_id);
        }

        Ok(session_to_response(session, email))
    }

    /// Revoke the session at the provider
    pub async fn sign_out(&self, access_token: &str) -> Result<()> {
        self.provider_client.sign_out(access_token).await
    }

    /// Get current user info (for /me endpoint)
    pub fn current_user(&self, user: AuthenticatedUser) -> MeResponseDto {
        user.into()
    }
}

fn parse_user_id(id: &str) -> Result<Uuid> {
    Uuid::parse_str(id).map_err(|_| {
        AppError::ExternalServiceError("Provider returned a non-UUID user id".to_string())
    })
}

fn session_to_response(session: ProviderSession, email: String) -> AuthResponseDto {
    AuthResponseDto {
        access_token: session.access_token,
        token_type: session.token_type,
        expires_in: session.expires_in,
        refresh_token: session.refresh_token,
        user: AuthUserDto {
            id: session.user.id,
            email,
        },
    }
}
