use serde::{Deserialize, Serialize};

use crate::core::config::AuthConfig;
use crate::core::error::{AppError, Result};

/// User record returned by the identity provider
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Session returned by the identity provider on sign-up / sign-in
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderSession {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub refresh_token: String,
    pub user: ProviderUser,
}

#[derive(Debug, Serialize)]
struct PasswordCredentials<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct IdTokenExchange<'a> {
    provider: &'a str,
    id_token: &'a str,
}

/// Provider error body; GoTrue variants differ between endpoints
#[derive(Debug, Deserialize)]
struct ProviderErrorResponse {
    #[serde(default)]
    msg: String,
    #[serde(default)]
    error_description: String,
    #[serde(default, rename = "error_code")]
    code: String,
}

impl ProviderErrorResponse {
    fn message(&self) -> String {
        if !self.msg.is_empty() {
            self.msg.clone()
        } else if !self.error_description.is_empty() {
            self.error_description.clone()
        } else {
            "Unknown provider error".to_string()
        }
    }
}

/// Client for the hosted identity provider's auth API (GoTrue-style)
pub struct GoTrueClient {
    base_url: String,
    api_key: String,
    http_client: reqwest::Client,
}

impl GoTrueClient {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            base_url: config.provider_url.trim_end_matches('/').to_string(),
            api_key: config.provider_api_key.clone(),
            http_client: reqwest::Client::new(),
        }
    }

    /// Sign up with email and password. Returns a live session.
    ///
    /// Duplicate email surfaces as Conflict.
    pub async fn sign_up(&self, email: &str, password: &str) -> Result<ProviderSession> {
        let url = format!("{}/signup", self.base_url);
        tracing::debug!("Signing up user at provider: {}", email);

        let response = self
            .http_client
            .post(&url)
            .header("apikey", &self.api_key)
            .json(&PasswordCredentials { email, password })
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Provider sign-up request failed: {}", e);
                AppError::ExternalServiceError(format!("Sign-up failed: {}", e))
            })?;

        let status = response.status();
        if status.is_success() {
            return response.json::<ProviderSession>().await.map_err(|e| {
                tracing::error!("Failed to parse provider session: {}", e);
                AppError::ExternalServiceError(format!("Failed to parse session: {}", e))
            });
        }

        let body = response.text().await.unwrap_or_default();
        if let Ok(err) = serde_json::from_str::<ProviderErrorResponse>(&body) {
            if status.as_u16() == 422
                || err.code == "user_already_exists"
                || err.message().contains("already registered")
            {
                return Err(AppError::Conflict("Email already registered".to_string()));
            }
            if status.as_u16() == 400 {
                return Err(AppError::Validation(err.message()));
            }
        }

        tracing::error!("Provider sign-up error: HTTP {} - {}", status, body);
        Err(AppError::ExternalServiceError(format!(
            "Identity provider error: HTTP {}",
            status
        )))
    }

    /// Sign in with the password grant
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<ProviderSession> {
        let url = format!("{}/token?grant_type=password", self.base_url);
        tracing::debug!("Password sign-in at provider: {}", email);

        let response = self
            .http_client
            .post(&url)
            .header("apikey", &self.api_key)
            .json(&PasswordCredentials { email, password })
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Provider sign-in request failed: {}", e);
                AppError::ExternalServiceError(format!("Sign-in failed: {}", e))
            })?;

        let status = response.status();
        if status.is_success() {
            return response.json::<ProviderSession>().await.map_err(|e| {
                AppError::ExternalServiceError(format!("Failed to parse session: {}", e))
            });
        }

        if status.as_u16() == 400 || status.as_u16() == 401 {
            return Err(AppError::Unauthorized("Invalid credentials".to_string()));
        }

        let body = response.text().await.unwrap_or_default();
        tracing::error!("Provider sign-in error: HTTP {} - {}", status, body);
        Err(AppError::ExternalServiceError(format!(
            "Identity provider error: HTTP {}",
            status
        )))
    }

    /// Exchange a Google ID token for a provider session (federated sign-in)
    pub async fn sign_in_with_google(&self, id_token: &str) -> Result<ProviderSession> {
        let url = format!("{}/token?grant_type=id_token", self.base_url);

        let response = self
            .http_client
            .post(&url)
            .header("apikey", &self.api_key)
            .json(&IdTokenExchange {
                provider: "google",
                id_token,
            })
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Provider token exchange failed: {}", e);
                AppError::ExternalServiceError(format!("Token exchange failed: {}", e))
            })?;

        let status = response.status();
        if status.is_success() {
            return response.json::<ProviderSession>().await.map_err(|e| {
                AppError::ExternalServiceError(format!("Failed to parse session: {}", e))
            });
        }

        if status.as_u16() == 400 || status.as_u16() == 401 {
            return Err(AppError::Unauthorized("Invalid Google token".to_string()));
        }

        let body = response.text().await.unwrap_or_default();
        tracing::error!("Provider token exchange error: HTTP {} - {}", status, body);
        Err(AppError::ExternalServiceError(format!(
            "Identity provider error: HTTP {}",
            status
        )))
    }

    /// Revoke the session at the provider
    pub async fn sign_out(&self, access_token: &str) -> Result<()> {
        let url = format!("{}/logout", self.base_url);

        let response = self
            .http_client
            .post(&url)
            .header("apikey", &self.api_key)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Provider sign-out request failed: {}", e);
                AppError::ExternalServiceError(format!("Sign-out failed: {}", e))
            })?;

        // 401 means the session is already gone; treat as signed out
        if response.status().is_success() || response.status().as_u16() == 401 {
            Ok(())
        } else {
            Err(AppError::ExternalServiceError(format!(
                "Identity provider error: HTTP {}",
                response.status()
            )))
        }
    }
}
