//! API-side ownership checks.
//!
//! These compose the pure predicates from `resido-auth` with the request's
//! caller context. They run **after** the bearer token has been verified and
//! **before** the workflow call they guard.

use resido_auth::{AuthzError, authorize_address_owner, authorize_self};
use resido_core::UserId;

use crate::context::CallerContext;

/// The caller may only mutate their own user record.
pub fn require_self(caller: &CallerContext, target: UserId) -> Result<(), AuthzError> {
    authorize_self(caller.user_id(), target)
}

/// The caller must be the recorded owner of the resolved address.
pub fn require_address_owner(caller: &CallerContext, owner: UserId) -> Result<(), AuthzError> {
    authorize_address_owner(caller.user_id(), owner)
}
