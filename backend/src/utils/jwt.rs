//! JWT token utilities for authentication.
//!
//! Provides session token creation and validation. Tokens are HS256-signed,
//! carry the account id as `sub`, an audience tag and an expiry.

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;

/// Audience of tokens issued to the web UI.
pub const UI_AUDIENCE: &str = "ui";

/// JWT Claims structure
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Audience the token was issued for
    pub aud: String,
    /// Token expiration timestamp
    pub exp: usize,
    /// Token issued at timestamp
    pub iat: usize,
}

impl Claims {
    pub fn user_id(&self) -> &str {
        &self.sub
    }
}

/// JWT token utility for creating and validating tokens
#[derive(Clone)]
pub struct JwtUtils {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    expires_in_seconds: u64,
}

impl JwtUtils {
    /// Create a new JwtUtils instance from the signing secret.
    pub fn new(secret: &[u8], expires_in_seconds: u64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.set_audience(&[UI_AUDIENCE]);

        JwtUtils {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            expires_in_seconds,
        }
    }

    /// Generate a signed token for `user_id`, scoped to `audience`.
    pub fn generate_token(&self, user_id: &str, audience: &str) -> Result<String, ServiceError> {
        let now = Utc::now();
        let exp = i64::try_from(self.expires_in_seconds)
            .ok()
            .and_then(Duration::try_seconds)
            .and_then(|lifetime| now.checked_add_signed(lifetime))
            .ok_or_else(|| {
                ServiceError::validation(format!(
                    "Token generation failed: lifetime of {}s is out of range",
                    self.expires_in_seconds
                ))
            })?;

        let claims = Claims {
            sub: user_id.to_string(),
            aud: audience.to_string(),
            exp: exp.timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| ServiceError::validation(format!("Token generation failed: {}", e)))
    }

    /// Validate and decode a UI token
    pub fn validate_token(&self, token: &str) -> Result<Claims, ServiceError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| ServiceError::unauthorized(format!("Token validation failed: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_round_trip() {
        let jwt = JwtUtils::new(b"test-secret", 3600);
        let token = jwt.generate_token("user-1", UI_AUDIENCE).unwrap();

        let claims = jwt.validate_token(&token).unwrap();
        assert_eq!(claims.user_id(), "user-1");
        assert_eq!(claims.aud, UI_AUDIENCE);
        assert!(claims.exp > claims.iat);
        assert!(claims.exp as i64 > Utc::now().timestamp());
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = JwtUtils::new(b"one", 3600)
            .generate_token("user-1", UI_AUDIENCE)
            .unwrap();

        let err = JwtUtils::new(b"two", 3600).validate_token(&token).unwrap_err();
        assert!(matches!(err, ServiceError::Unauthorized { .. }));
    }

    #[test]
    fn test_other_audience_rejected() {
        let jwt = JwtUtils::new(b"test-secret", 3600);
        let token = jwt.generate_token("user-1", "device").unwrap();

        assert!(jwt.validate_token(&token).is_err());
    }

    #[test]
    fn test_oversized_lifetime_is_an_error() {
        for lifetime in [u64::MAX, i64::MAX as u64] {
            let err = JwtUtils::new(b"test-secret", lifetime)
                .generate_token("user-1", UI_AUDIENCE)
                .unwrap_err();
            assert!(matches!(err, ServiceError::Validation { .. }));
        }
    }
}
