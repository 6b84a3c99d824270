//! Ownership predicates.
//!
//! These are pure allow/deny checks over already-resolved identities: the
//! bearer token has been verified upstream, and any resource lookup has
//! already happened. No storage access here.

use thiserror::Error;

use resido_core::UserId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthzError {
    #[error("caller does not own this resource")]
    NotOwner,
}

/// Self-ownership: a caller may only mutate their own user record.
pub fn authorize_self(caller: UserId, target: UserId) -> Result<(), AuthzError> {
    if caller == target {
        Ok(())
    } else {
        Err(AuthzError::NotOwner)
    }
}

/// Address ownership: the caller must match the address's recorded owner.
pub fn authorize_address_owner(caller: UserId, owner: UserId) -> Result<(), AuthzError> {
    if caller == owner {
        Ok(())
    } else {
        Err(AuthzError::NotOwner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn self_check_allows_same_user() {
        let id = UserId::new();
        assert!(authorize_self(id, id).is_ok());
    }

    #[test]
    fn self_check_denies_other_user() {
        assert_eq!(
            authorize_self(UserId::new(), UserId::new()),
            Err(AuthzError::NotOwner)
        );
    }

    #[test]
    fn owner_check_compares_recorded_owner() {
        let owner = UserId::new();
        assert!(authorize_address_owner(owner, owner).is_ok());
        assert_eq!(
            authorize_address_owner(UserId::new(), owner),
            Err(AuthzError::NotOwner)
        );
    }
}
