//! User workflow: signup, lookup, partial update, removal.

use std::sync::Arc;

use chrono::Utc;

use resido_auth::hash_password;
use resido_core::{DomainError, DomainResult, UserId};

use crate::store::{AddressStore, UserStore};
use crate::user::{NewUser, User, UserPatch, UserView};

pub struct UserService<U: UserStore, A: AddressStore> {
    users: Arc<U>,
    addresses: Arc<A>,
}

impl<U: UserStore, A: AddressStore> UserService<U, A> {
    pub fn new(users: Arc<U>, addresses: Arc<A>) -> Self {
        Self { users, addresses }
    }

    /// Sign up a new user.
    ///
    /// The email pre-check mirrors what the store enforces; the store's own
    /// conflict under its write lock is the authoritative signal when two
    /// signups race.
    pub async fn create(&self, input: NewUser) -> DomainResult<UserView> {
        input.validate()?;

        if self.users.get_by_email(&input.email).await?.is_some() {
            return Err(DomainError::conflict("user already exists"));
        }

        let password_hash =
            hash_password(&input.password).map_err(|e| DomainError::internal(e.to_string()))?;

        let now = Utc::now();
        let user = User {
            id: UserId::new(),
            name: input.name,
            email: input.email,
            password_hash,
            profession: input.profession,
            created_at: now,
            updated_at: now,
        };

        let user = self.users.insert(user).await?;
        tracing::info!(user_id = %user.id, "user created");

        Ok(UserView::of(&user, None))
    }

    /// All users with their owned address (if any) attached.
    pub async fn find_all(&self) -> DomainResult<Vec<UserView>> {
        let users = self.users.list().await?;

        let mut views = Vec::with_capacity(users.len());
        for user in &users {
            let address = self.addresses.get_by_owner(user.id).await?;
            views.push(UserView::of(user, address.as_ref()));
        }

        Ok(views)
    }

    pub async fn find_one(&self, id: UserId) -> DomainResult<UserView> {
        let user = self.users.get(id).await?.ok_or(DomainError::NotFound)?;
        let address = self.addresses.get_by_owner(user.id).await?;
        Ok(UserView::of(&user, address.as_ref()))
    }

    /// Internal lookup feeding the authentication flow; returns the full
    /// record including the password hash.
    pub async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        self.users.get_by_email(email).await
    }

    /// Merge the supplied fields into the stored record.
    ///
    /// A supplied password is re-hashed before storage; email uniqueness is
    /// enforced by the store on write.
    pub async fn update(&self, id: UserId, patch: UserPatch) -> DomainResult<UserView> {
        patch.validate()?;

        let mut user = self.users.get(id).await?.ok_or(DomainError::NotFound)?;

        let password_hash = match &patch.password {
            Some(password) => {
                Some(hash_password(password).map_err(|e| DomainError::internal(e.to_string()))?)
            }
            None => None,
        };

        user.merge(patch, password_hash, Utc::now());
        let user = self.users.update(user).await?;

        let address = self.addresses.get_by_owner(user.id).await?;
        Ok(UserView::of(&user, address.as_ref()))
    }

    /// Delete a user and, explicitly, the address it owns.
    pub async fn remove(&self, id: UserId) -> DomainResult<()> {
        if self.users.get(id).await?.is_none() {
            return Err(DomainError::NotFound);
        }

        // Owned address goes first so no orphan is left behind.
        if let Some(address) = self.addresses.get_by_owner(id).await? {
            self.addresses.delete(address.id).await?;
            tracing::info!(user_id = %id, address_id = %address.id, "owned address removed with user");
        }

        self.users.delete(id).await
    }
}
