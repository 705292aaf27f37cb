use jsonwebtoken::{decode, decode_header, Algorithm, DecodingKey, Validation};
use serde::Deserialize;
use std::time::Duration;

use super::model::AuthenticatedUser;
use crate::core::error::AppError;

/// Validates HS256 session tokens signed by the identity provider with the
/// shared project secret.
pub struct JwtValidator {
    decoding_key: DecodingKey,
    issuer: String,
    audience: String,
    leeway: u64,
}

#[derive(Debug, Clone, Deserialize)]
struct Claims {
    sub: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(rename = "iss")]
    _iss: String,
    #[serde(rename = "aud")]
    _aud: AudienceClaim,
    #[serde(rename = "exp")]
    _exp: u64,
}

/// Audience can be either a single string or an array of strings
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
#[allow(dead_code)]
enum AudienceClaim {
    Single(String),
    Multiple(Vec<String>),
}

impl JwtValidator {
    pub fn new(jwt_secret: String, issuer: String, audience: String, leeway: Duration) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(jwt_secret.as_bytes()),
            issuer,
            audience,
            leeway: leeway.as_secs(),
        }
    }

    pub fn validate_token(&self, token: &str) -> Result<AuthenticatedUser, AppError> {
        let header = decode_header(token).map_err(|e| AppError::Auth(e.to_string()))?;

        if header.alg != Algorithm::HS256 {
            return Err(AppError::Auth(format!(
                "Unsupported algorithm: {:?}. Only HS256 is allowed",
                header.alg
            )));
        }

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&self.issuer]);
        validation.set_audience(&[&self.audience]);
        validation.leeway = self.leeway;
        validation.validate_nbf = true;

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|e| AppError::Auth(e.to_string()))?;

        let claims = token_data.claims;
        let email = claims
            .email
            .ok_or_else(|| AppError::Auth("Token has no email claim".to_string()))?;

        Ok(AuthenticatedUser {
            sub: claims.sub,
            email,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};
    use serde::Serialize;

    const SECRET: &str = "super-secret-jwt-token-with-at-least-32-characters";
    const ISSUER: &str = "http://localhost:9999/auth/v1";

    #[derive(Serialize)]
    struct TestClaims {
        sub: String,
        email: String,
        iss: String,
        aud: String,
        iat: u64,
        nbf: u64,
        exp: u64,
    }

    fn mint_token(secret: &str, aud: &str, exp_offset_secs: i64) -> String {
        let now = chrono::Utc::now().timestamp();
        let claims = TestClaims {
            sub: "7e0b6b5e-9f3a-4a1c-8a6a-111111111111".to_string(),
            email: "citizen@example.com".to_string(),
            iss: ISSUER.to_string(),
            aud: aud.to_string(),
            iat: now as u64,
            nbf: (now - 10) as u64,
            exp: (now + exp_offset_secs) as u64,
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    fn validator() -> JwtValidator {
        JwtValidator::new(
            SECRET.to_string(),
            ISSUER.to_string(),
            "authenticated".to_string(),
            Duration::from_secs(60),
        )
    }

    #[test]
    fn test_validate_token_accepts_valid_session() {
        let token = mint_token(SECRET, "authenticated", 3600);
        let user = validator().validate_token(&token).unwrap();
        assert_eq!(user.sub, "7e0b6b5e-9f3a-4a1c-8a6a-111111111111");
        assert_eq!(user.email, "citizen@example.com");
        assert!(user.user_id().is_ok());
    }

    #[test]
    fn test_validate_token_rejects_wrong_secret() {
        let token = mint_token("the-wrong-secret-the-wrong-secret!!", "authenticated", 3600);
        assert!(matches!(
            validator().validate_token(&token),
            Err(AppError::Auth(_))
        ));
    }

    #[test]
    fn test_validate_token_rejects_wrong_audience() {
        let token = mint_token(SECRET, "service_role", 3600);
        assert!(matches!(
            validator().validate_token(&token),
            Err(AppError::Auth(_))
        ));
    }

    #[test]
    fn test_validate_token_rejects_expired() {
        // Expired well past the 60s leeway
        let token = mint_token(SECRET, "authenticated", -3600);
        assert!(matches!(
            validator().validate_token(&token),
            Err(AppError::Auth(_))
        ));
    }
}
