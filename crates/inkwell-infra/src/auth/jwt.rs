//! JWT token service implementation.

use chrono::{TimeDelta, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use inkwell_core::ports::{AuthError, TokenClaims, TokenService};

/// Default issuer claim for tokens minted by this service.
pub const DEFAULT_ISSUER: &str = "inkwell-api";

/// Longest token lifetime accepted from configuration (one year).
pub const MAX_EXPIRATION_HOURS: i64 = 24 * 365;

/// JWT token service configuration.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub expiration_hours: i64,
    pub issuer: String,
}

impl JwtConfig {
    /// Configuration with the default one-day lifetime and issuer.
    pub fn with_secret(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            expiration_hours: 24,
            issuer: DEFAULT_ISSUER.to_string(),
        }
    }
}

/// Internal JWT claims structure for serialization.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String, // author id
    exp: i64,
    iat: i64,
    iss: String,
}

/// HS256 token service; the only credential an author ever receives.
pub struct JwtTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    config: JwtConfig,
}

impl JwtTokenService {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        Self {
            encoding_key,
            decoding_key,
            config,
        }
    }
}

impl TokenService for JwtTokenService {
    fn generate_token(&self, author_id: Uuid) -> Result<String, AuthError> {
        let now = Utc::now();
        let exp = TimeDelta::try_hours(self.config.expiration_hours)
            .and_then(|lifetime| now.checked_add_signed(lifetime))
            .ok_or_else(|| {
                AuthError::Encoding(format!(
                    "token lifetime of {} hours is out of range",
                    self.config.expiration_hours
                ))
            })?;

        let claims = Claims {
            sub: author_id.to_string(),
            exp: exp.timestamp(),
            iat: now.timestamp(),
            iss: self.config.issuer.clone(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AuthError::Encoding(e.to_string()))
    }

    fn validate_token(&self, token: &str) -> Result<TokenClaims, AuthError> {
        let mut validation = Validation::default();
        validation.set_issuer(&[&self.config.issuer]);

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::InvalidToken(e.to_string()),
            }
        })?;

        let author_id = Uuid::parse_str(&token_data.claims.sub)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))?;

        Ok(TokenClaims {
            author_id,
            issued_at: token_data.claims.iat,
            expires_at: token_data.claims.exp,
        })
    }

    fn expiration_seconds(&self) -> i64 {
        self.config.expiration_hours.saturating_mul(3600)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret-key".to_string(),
            expiration_hours: 1,
            issuer: "test-issuer".to_string(),
        }
    }

    #[test]
    fn test_token_decodes_to_author_id() {
        let service = JwtTokenService::new(test_config());
        let author_id = Uuid::new_v4();

        let token = service.generate_token(author_id).unwrap();
        let claims = service.validate_token(&token).unwrap();

        assert_eq!(claims.author_id, author_id);
        assert_eq!(claims.expires_at - claims.issued_at, 3600);
    }

    #[test]
    fn test_validate_invalid_token() {
        let service = JwtTokenService::new(test_config());

        let result = service.validate_token("invalid-token");

        assert!(matches!(result.unwrap_err(), AuthError::InvalidToken(_)));
    }

    #[test]
    fn test_validate_token_signed_with_other_secret() {
        let signer = JwtTokenService::new(JwtConfig {
            secret: "another-secret".to_string(),
            ..test_config()
        });
        let verifier = JwtTokenService::new(test_config());

        let token = signer.generate_token(Uuid::new_v4()).unwrap();

        assert!(matches!(
            verifier.validate_token(&token).unwrap_err(),
            AuthError::InvalidToken(_)
        ));
    }

    #[test]
    fn test_validate_wrong_issuer_token() {
        let service1 = JwtTokenService::new(JwtConfig {
            issuer: "issuer1".to_string(),
            ..test_config()
        });
        let service2 = JwtTokenService::new(JwtConfig {
            issuer: "issuer2".to_string(),
            ..test_config()
        });

        let token = service1.generate_token(Uuid::new_v4()).unwrap();

        assert!(service2.validate_token(&token).is_err());
    }

    #[test]
    fn test_expired_token_is_rejected() {
        // Past the default 60s leeway.
        let service = JwtTokenService::new(JwtConfig {
            expiration_hours: -1,
            ..test_config()
        });

        let token = service.generate_token(Uuid::new_v4()).unwrap();

        assert!(matches!(
            service.validate_token(&token).unwrap_err(),
            AuthError::TokenExpired
        ));
    }

    #[test]
    fn test_out_of_range_lifetime_is_an_error() {
        let service = JwtTokenService::new(JwtConfig {
            expiration_hours: 3_000_000_000,
            ..test_config()
        });

        assert!(matches!(
            service.generate_token(Uuid::new_v4()).unwrap_err(),
            AuthError::Encoding(_)
        ));
        assert_eq!(service.expiration_seconds(), 3_000_000_000 * 3600);
        assert_eq!(
            JwtTokenService::new(JwtConfig {
                expiration_hours: i64::MAX,
                ..test_config()
            })
            .expiration_seconds(),
            i64::MAX
        );
    }

    #[test]
    fn test_default_lifetime_is_one_day() {
        let service = JwtTokenService::new(JwtConfig::with_secret("test"));

        assert_eq!(service.expiration_seconds(), 86400);
    }
}
