//! `resido-auth` — pure authentication/authorization boundary.
//!
//! This crate is intentionally decoupled from HTTP and storage: claims,
//! tokens, password hashing, and ownership predicates all operate on plain
//! values handed in by the caller.

pub mod authorize;
pub mod claims;
pub mod password;
pub mod token;

pub use authorize::{AuthzError, authorize_address_owner, authorize_self};
pub use claims::{JwtClaims, TokenValidationError, validate_claims};
pub use password::{PasswordError, hash_password, verify_password};
pub use token::{Hs256JwtSigner, Hs256JwtValidator, JwtSigner, JwtValidator, TokenError};
