use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use resido_core::{DomainResult, UserId, validate};

use crate::address::{Address, AddressView};

pub const NAME_MAX: usize = 150;
pub const PROFESSION_MAX: usize = 150;
pub const PASSWORD_MIN: usize = 8;

/// A stored user record.
///
/// `password_hash` never leaves the store/workflow layer; every outward-facing
/// representation goes through [`UserView`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub profession: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Apply a partial update: only fields present in the patch change.
    ///
    /// The password arrives pre-hashed; the workflow owns the hashing step.
    pub fn merge(&mut self, patch: UserPatch, password_hash: Option<String>, now: DateTime<Utc>) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(profession) = patch.profession {
            self.profession = Some(profession);
        }
        if let Some(hash) = password_hash {
            self.password_hash = hash;
        }
        self.updated_at = now;
    }
}

/// Input for the signup workflow. Carries the plaintext password; it is
/// hashed before anything is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub profession: Option<String>,
}

impl NewUser {
    pub fn validate(&self) -> DomainResult<()> {
        validate::require("name", &self.name)?;
        validate::max_len("name", &self.name, NAME_MAX)?;
        validate::require("email", &self.email)?;
        validate::email_syntax(&self.email)?;
        validate::require("password", &self.password)?;
        validate::min_len("password", &self.password, PASSWORD_MIN)?;
        if let Some(profession) = &self.profession {
            validate::max_len("profession", profession, PROFESSION_MAX)?;
        }
        Ok(())
    }
}

/// Partial update for a user. Absent fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub profession: Option<String>,
}

impl UserPatch {
    /// Validate only the fields that are present.
    pub fn validate(&self) -> DomainResult<()> {
        if let Some(name) = &self.name {
            validate::require("name", name)?;
            validate::max_len("name", name, NAME_MAX)?;
        }
        if let Some(email) = &self.email {
            validate::require("email", email)?;
            validate::email_syntax(email)?;
        }
        if let Some(password) = &self.password {
            validate::min_len("password", password, PASSWORD_MIN)?;
        }
        if let Some(profession) = &self.profession {
            validate::max_len("profession", profession, PROFESSION_MAX)?;
        }
        Ok(())
    }
}

/// Public projection of a user: everything except the password hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserView {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub profession: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub address: Option<AddressView>,
}

impl UserView {
    pub fn of(user: &User, address: Option<&Address>) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            profession: user.profession.clone(),
            created_at: user.created_at,
            updated_at: user.updated_at,
            address: address.map(AddressView::of),
        }
    }
}
