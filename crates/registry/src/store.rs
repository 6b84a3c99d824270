//! Store contracts for the two record types.
//!
//! Implementations own mutation serialization: uniqueness constraints
//! (email, one address per owner) are checked and enforced inside a single
//! store call, so a conflict reported here is authoritative even when two
//! requests race past the workflow's pre-check.

use async_trait::async_trait;

use resido_core::{AddressId, DomainResult, UserId};

use crate::address::Address;
use crate::user::User;

#[async_trait]
pub trait UserStore: Send + Sync {
    /// Persist a new user. Fails with `Conflict` if the email is taken.
    async fn insert(&self, user: User) -> DomainResult<User>;

    async fn get(&self, id: UserId) -> DomainResult<Option<User>>;

    async fn get_by_email(&self, email: &str) -> DomainResult<Option<User>>;

    /// All users in store-defined order.
    async fn list(&self) -> DomainResult<Vec<User>>;

    /// Replace a stored user. Fails with `NotFound` if the id is unknown and
    /// with `Conflict` if the email belongs to a different user.
    async fn update(&self, user: User) -> DomainResult<User>;

    /// Fails with `NotFound` if the id is unknown.
    async fn delete(&self, id: UserId) -> DomainResult<()>;
}

#[async_trait]
pub trait AddressStore: Send + Sync {
    /// Persist a new address. Fails with `Conflict` if the owner already has
    /// one.
    async fn insert(&self, address: Address) -> DomainResult<Address>;

    async fn get(&self, id: AddressId) -> DomainResult<Option<Address>>;

    /// The at-most-one address owned by the given user.
    async fn get_by_owner(&self, owner: UserId) -> DomainResult<Option<Address>>;

    /// All addresses in store-defined order.
    async fn list(&self) -> DomainResult<Vec<Address>>;

    /// Replace a stored address. Fails with `NotFound` if the id is unknown.
    async fn update(&self, address: Address) -> DomainResult<Address>;

    /// Fails with `NotFound` if the id is unknown.
    async fn delete(&self, id: AddressId) -> DomainResult<()>;
}
