use std::sync::Arc;

use chrono::{Duration, Utc};

use resido_auth::{Hs256JwtSigner, JwtClaims, JwtSigner, verify_password};
use resido_core::{DomainError, DomainResult};
use resido_infra::{InMemoryAddressStore, InMemoryUserStore};
use resido_registry::{AddressService, UserService};

/// Lifetime of issued bearer tokens.
const TOKEN_TTL_MINUTES: i64 = 60;

/// Minimal identity produced by a successful credential check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthIdentity {
    pub email: String,
}

pub struct AppServices {
    pub users: UserService<InMemoryUserStore, InMemoryAddressStore>,
    pub addresses: AddressService<InMemoryAddressStore, InMemoryUserStore>,
    signer: Hs256JwtSigner,
}

pub fn build_services(jwt_secret: &str) -> AppServices {
    let user_store = Arc::new(InMemoryUserStore::new());
    let address_store = Arc::new(InMemoryAddressStore::new());

    AppServices {
        users: UserService::new(user_store.clone(), address_store.clone()),
        addresses: AddressService::new(address_store, user_store),
        signer: Hs256JwtSigner::new(jwt_secret.as_bytes().to_vec()),
    }
}

impl AppServices {
    /// Check email + password against the stored hash.
    ///
    /// A miss (unknown email or wrong password) is a normal outcome, not an
    /// error; the two cases are indistinguishable to the caller.
    pub async fn validate_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> DomainResult<Option<AuthIdentity>> {
        let Some(user) = self.users.find_by_email(email).await? else {
            return Ok(None);
        };

        if verify_password(password, &user.password_hash) {
            Ok(Some(AuthIdentity { email: user.email }))
        } else {
            Ok(None)
        }
    }

    /// Sign a bearer token for an already-validated email.
    ///
    /// The subject claim is the user's id; callers must have run
    /// [`Self::validate_credentials`] first.
    pub async fn issue_token(&self, email: &str) -> DomainResult<String> {
        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or(DomainError::NotFound)?;

        let now = Utc::now();
        let claims = JwtClaims {
            sub: user.id,
            email: user.email,
            issued_at: now,
            expires_at: now + Duration::minutes(TOKEN_TTL_MINUTES),
        };

        self.signer
            .sign(&claims)
            .map_err(|e| DomainError::internal(e.to_string()))
    }
}
