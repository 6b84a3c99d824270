//! HS256 signing and verification of bearer tokens.

use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use thiserror::Error;

use crate::claims::{JwtClaims, TokenValidationError, validate_claims};

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("failed to encode token")]
    Encode,

    /// Malformed token or bad signature. Deliberately opaque.
    #[error("token rejected")]
    Rejected,

    #[error(transparent)]
    Claims(#[from] TokenValidationError),
}

/// Issues signed bearer tokens from a claims payload.
pub trait JwtSigner: Send + Sync {
    fn sign(&self, claims: &JwtClaims) -> Result<String, TokenError>;
}

/// Verifies a bearer token and returns its claims.
pub trait JwtValidator: Send + Sync {
    fn validate(&self, token: &str, now: DateTime<Utc>) -> Result<JwtClaims, TokenError>;
}

pub struct Hs256JwtSigner {
    key: EncodingKey,
}

impl Hs256JwtSigner {
    pub fn new(secret: Vec<u8>) -> Self {
        Self {
            key: EncodingKey::from_secret(&secret),
        }
    }
}

impl JwtSigner for Hs256JwtSigner {
    fn sign(&self, claims: &JwtClaims) -> Result<String, TokenError> {
        jsonwebtoken::encode(&Header::new(Algorithm::HS256), claims, &self.key)
            .map_err(|_| TokenError::Encode)
    }
}

pub struct Hs256JwtValidator {
    key: DecodingKey,
}

impl Hs256JwtValidator {
    pub fn new(secret: Vec<u8>) -> Self {
        Self {
            key: DecodingKey::from_secret(&secret),
        }
    }
}

impl JwtValidator for Hs256JwtValidator {
    fn validate(&self, token: &str, now: DateTime<Utc>) -> Result<JwtClaims, TokenError> {
        // The expiry window lives in our own claims, checked by
        // `validate_claims` against the caller-supplied clock.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.required_spec_claims = Default::default();

        let data = jsonwebtoken::decode::<JwtClaims>(token, &self.key, &validation)
            .map_err(|_| TokenError::Rejected)?;

        validate_claims(&data.claims, now)?;
        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use resido_core::UserId;

    use super::*;

    fn claims_for(now: DateTime<Utc>) -> JwtClaims {
        JwtClaims {
            sub: UserId::new(),
            email: "marcos@mail.com".to_string(),
            issued_at: now,
            expires_at: now + Duration::minutes(10),
        }
    }

    #[test]
    fn sign_then_validate_round_trips() {
        let now = Utc::now();
        let claims = claims_for(now);

        let signer = Hs256JwtSigner::new(b"test-secret".to_vec());
        let validator = Hs256JwtValidator::new(b"test-secret".to_vec());

        let token = signer.sign(&claims).unwrap();
        let decoded = validator
            .validate(&token, now + Duration::minutes(1))
            .unwrap();
        assert_eq!(decoded, claims);
    }

    #[test]
    fn rejects_wrong_secret() {
        let now = Utc::now();
        let signer = Hs256JwtSigner::new(b"test-secret".to_vec());
        let validator = Hs256JwtValidator::new(b"other-secret".to_vec());

        let token = signer.sign(&claims_for(now)).unwrap();
        assert!(matches!(
            validator.validate(&token, now),
            Err(TokenError::Rejected)
        ));
    }

    #[test]
    fn rejects_expired_token() {
        let now = Utc::now();
        let signer = Hs256JwtSigner::new(b"test-secret".to_vec());
        let validator = Hs256JwtValidator::new(b"test-secret".to_vec());

        let token = signer.sign(&claims_for(now)).unwrap();
        let later = now + Duration::minutes(11);
        assert!(matches!(
            validator.validate(&token, later),
            Err(TokenError::Claims(TokenValidationError::Expired))
        ));
    }

    #[test]
    fn rejects_garbage() {
        let validator = Hs256JwtValidator::new(b"test-secret".to_vec());
        assert!(matches!(
            validator.validate("not.a.token", Utc::now()),
            Err(TokenError::Rejected)
        ));
    }
}
