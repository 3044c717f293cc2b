//! JWT utilities for admin authentication
//!
//! Provides token issuing and verification using the `jsonwebtoken` crate.
//! There is no refresh flow and no revocation list; expiry is the only
//! invalidation mechanism.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (administrator ID)
    pub sub: String,
    /// Administrator email
    pub email: String,
    /// Administrator role
    pub role: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Get the administrator ID from the subject
    ///
    /// # Errors
    /// Returns an error if the subject cannot be parsed as an ID
    pub fn admin_id(&self) -> Result<i64, AppError> {
        self.sub.parse::<i64>().map_err(|_| AppError::InvalidToken)
    }

    /// Check if the token is expired
    #[must_use]
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }
}

/// Token service for issuing and verifying signed admin identity tokens
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    token_expiry: i64,
}

impl TokenService {
    /// Create a new token service with the given secret and expiry in seconds
    #[must_use]
    pub fn new(secret: &str, token_expiry: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            token_expiry,
        }
    }

    /// Expiry in seconds applied to issued tokens
    #[must_use]
    pub fn token_expiry(&self) -> i64 {
        self.token_expiry
    }

    /// Issue a signed, time-limited token for an administrator
    ///
    /// # Errors
    /// Returns an error if token encoding fails
    pub fn issue(&self, admin_id: i64, email: &str, role: &str) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: admin_id.to_string(),
            email: email.to_string(),
            role: role.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(self.token_expiry)).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|_| AppError::Internal(anyhow::anyhow!("Failed to encode JWT")))
    }

    /// Verify a token and return its claims
    ///
    /// Fails closed: an expired signature maps to `TokenExpired`, every other
    /// failure (malformed token, signature mismatch) to `InvalidToken`.
    ///
    /// # Errors
    /// Returns an error if the token is invalid or expired
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        let validation = Validation::default();

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::TokenExpired,
                _ => AppError::InvalidToken,
            }
        })?;

        Ok(token_data.claims)
    }
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("token_expiry", &self.token_expiry)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_service() -> TokenService {
        TokenService::new("test-secret-key-that-is-long-enough", 86400)
    }

    #[test]
    fn test_issue_and_verify() {
        let service = create_test_service();

        let token = service.issue(42, "admin@example.com", "SUPER_ADMIN").unwrap();
        let claims = service.verify(&token).unwrap();

        assert_eq!(claims.sub, "42");
        assert_eq!(claims.admin_id().unwrap(), 42);
        assert_eq!(claims.email, "admin@example.com");
        assert_eq!(claims.role, "SUPER_ADMIN");
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_invalid_token() {
        let service = create_test_service();

        let result = service.verify("invalid.token.here");
        assert!(matches!(result, Err(AppError::InvalidToken)));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let service = create_test_service();
        let other = TokenService::new("a-completely-different-secret", 86400);

        let token = service.issue(1, "admin@example.com", "ADMIN").unwrap();
        let result = other.verify(&token);
        assert!(matches!(result, Err(AppError::InvalidToken)));
    }

    #[test]
    fn test_expired_token() {
        // Expiry far enough in the past to beat the default 60s leeway.
        let service = TokenService::new("test-secret-key-that-is-long-enough", -3600);

        let token = service.issue(1, "admin@example.com", "ADMIN").unwrap();
        let result = service.verify(&token);
        assert!(matches!(result, Err(AppError::TokenExpired)));
    }

    #[test]
    fn test_claims_admin_id_rejects_garbage() {
        let claims = Claims {
            sub: "not-a-number".to_string(),
            email: "a@b.com".to_string(),
            role: "ADMIN".to_string(),
            iat: 0,
            exp: i64::MAX,
        };

        assert!(matches!(claims.admin_id(), Err(AppError::InvalidToken)));
    }
}
