use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use resido_core::{DomainError, DomainResult, UserId};
use resido_registry::{User, UserStore};

/// In-memory user store.
///
/// The email-uniqueness constraint is checked under the write lock, so a
/// conflict reported here is authoritative even when two requests race past
/// the workflow's pre-check.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    inner: RwLock<HashMap<UserId, User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned() -> DomainError {
    DomainError::internal("user store lock poisoned")
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn insert(&self, user: User) -> DomainResult<User> {
        let mut map = self.inner.write().map_err(|_| poisoned())?;

        if map.values().any(|u| u.email == user.email) {
            return Err(DomainError::conflict("user already exists"));
        }

        map.insert(user.id, user.clone());
        Ok(user)
    }

    async fn get(&self, id: UserId) -> DomainResult<Option<User>> {
        let map = self.inner.read().map_err(|_| poisoned())?;
        Ok(map.get(&id).cloned())
    }

    async fn get_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        let map = self.inner.read().map_err(|_| poisoned())?;
        Ok(map.values().find(|u| u.email == email).cloned())
    }

    async fn list(&self) -> DomainResult<Vec<User>> {
        let map = self.inner.read().map_err(|_| poisoned())?;
        let mut users: Vec<User> = map.values().cloned().collect();
        // Store-defined order: creation order (ids are time-ordered).
        users.sort_by_key(|u| *u.id.as_uuid());
        Ok(users)
    }

    async fn update(&self, user: User) -> DomainResult<User> {
        let mut map = self.inner.write().map_err(|_| poisoned())?;

        if !map.contains_key(&user.id) {
            return Err(DomainError::NotFound);
        }
        if map.values().any(|u| u.id != user.id && u.email == user.email) {
            return Err(DomainError::conflict("email already in use"));
        }

        map.insert(user.id, user.clone());
        Ok(user)
    }

    async fn delete(&self, id: UserId) -> DomainResult<()> {
        let mut map = self.inner.write().map_err(|_| poisoned())?;
        map.remove(&id).map(|_| ()).ok_or(DomainError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn user(email: &str) -> User {
        let now = Utc::now();
        User {
            id: UserId::new(),
            name: "Marcos".to_string(),
            email: email.to_string(),
            password_hash: "$argon2id$stub".to_string(),
            profession: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn insert_enforces_unique_email() {
        let store = InMemoryUserStore::new();
        store.insert(user("marcos@mail.com")).await.unwrap();

        let err = store.insert(user("marcos@mail.com")).await.unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[tokio::test]
    async fn update_enforces_unique_email_across_records() {
        let store = InMemoryUserStore::new();
        store.insert(user("a@mail.com")).await.unwrap();
        let mut second = store.insert(user("b@mail.com")).await.unwrap();

        second.email = "a@mail.com".to_string();
        let err = store.update(second).await.unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[tokio::test]
    async fn update_and_delete_require_existing_record() {
        let store = InMemoryUserStore::new();
        assert!(matches!(
            store.update(user("a@mail.com")).await.unwrap_err(),
            DomainError::NotFound
        ));
        assert!(matches!(
            store.delete(UserId::new()).await.unwrap_err(),
            DomainError::NotFound
        ));
    }

    #[tokio::test]
    async fn list_returns_creation_order() {
        let store = InMemoryUserStore::new();
        let first = store.insert(user("a@mail.com")).await.unwrap();
        let second = store.insert(user("b@mail.com")).await.unwrap();

        let ids: Vec<UserId> = store.list().await.unwrap().iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![first.id, second.id]);
    }
}
