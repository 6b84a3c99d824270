use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use resido_core::{AddressId, DomainError, DomainResult, UserId};
use resido_registry::{Address, AddressStore};

/// In-memory address store.
///
/// The one-address-per-owner constraint is checked under the write lock; see
/// [`crate::stores::users::InMemoryUserStore`] for the same pattern on email.
#[derive(Debug, Default)]
pub struct InMemoryAddressStore {
    inner: RwLock<HashMap<AddressId, Address>>,
}

impl InMemoryAddressStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned() -> DomainError {
    DomainError::internal("address store lock poisoned")
}

#[async_trait]
impl AddressStore for InMemoryAddressStore {
    async fn insert(&self, address: Address) -> DomainResult<Address> {
        let mut map = self.inner.write().map_err(|_| poisoned())?;

        if map.values().any(|a| a.owner == address.owner) {
            return Err(DomainError::conflict(
                "this user already has an address registered",
            ));
        }

        map.insert(address.id, address.clone());
        Ok(address)
    }

    async fn get(&self, id: AddressId) -> DomainResult<Option<Address>> {
        let map = self.inner.read().map_err(|_| poisoned())?;
        Ok(map.get(&id).cloned())
    }

    async fn get_by_owner(&self, owner: UserId) -> DomainResult<Option<Address>> {
        let map = self.inner.read().map_err(|_| poisoned())?;
        Ok(map.values().find(|a| a.owner == owner).cloned())
    }

    async fn list(&self) -> DomainResult<Vec<Address>> {
        let map = self.inner.read().map_err(|_| poisoned())?;
        let mut addresses: Vec<Address> = map.values().cloned().collect();
        // Store-defined order: creation order (ids are time-ordered).
        addresses.sort_by_key(|a| *a.id.as_uuid());
        Ok(addresses)
    }

    async fn update(&self, address: Address) -> DomainResult<Address> {
        let mut map = self.inner.write().map_err(|_| poisoned())?;

        if !map.contains_key(&address.id) {
            return Err(DomainError::NotFound);
        }

        map.insert(address.id, address.clone());
        Ok(address)
    }

    async fn delete(&self, id: AddressId) -> DomainResult<()> {
        let mut map = self.inner.write().map_err(|_| poisoned())?;
        map.remove(&id).map(|_| ()).ok_or(DomainError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn address(owner: UserId) -> Address {
        let now = Utc::now();
        Address {
            id: AddressId::new(),
            owner,
            road: "Rua das Flores".to_string(),
            district: "Centro".to_string(),
            city: "Curitiba".to_string(),
            house_number: 123,
            postal_code: "80010000".to_string(),
            state: "PR".to_string(),
            complement: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn insert_enforces_one_address_per_owner() {
        let store = InMemoryAddressStore::new();
        let owner = UserId::new();

        store.insert(address(owner)).await.unwrap();
        let err = store.insert(address(owner)).await.unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));

        // A different owner is unaffected.
        store.insert(address(UserId::new())).await.unwrap();
    }

    #[tokio::test]
    async fn get_by_owner_finds_the_owned_record() {
        let store = InMemoryAddressStore::new();
        let owner = UserId::new();
        let stored = store.insert(address(owner)).await.unwrap();

        let found = store.get_by_owner(owner).await.unwrap().unwrap();
        assert_eq!(found.id, stored.id);
        assert!(store.get_by_owner(UserId::new()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn update_and_delete_require_existing_record() {
        let store = InMemoryAddressStore::new();
        assert!(matches!(
            store.update(address(UserId::new())).await.unwrap_err(),
            DomainError::NotFound
        ));
        assert!(matches!(
            store.delete(AddressId::new()).await.unwrap_err(),
            DomainError::NotFound
        ));
    }
}
