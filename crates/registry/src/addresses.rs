//! Address workflow: owner validation, creation, lookup, partial update,
//! removal.

use std::sync::Arc;

use chrono::Utc;

use resido_core::{AddressId, DomainError, DomainResult, UserId};

use crate::address::{Address, AddressDetail, AddressPatch, AddressView, NewAddress};
use crate::store::{AddressStore, UserStore};
use crate::user::{User, UserView};

pub struct AddressService<A: AddressStore, U: UserStore> {
    addresses: Arc<A>,
    users: Arc<U>,
}

impl<A: AddressStore, U: UserStore> AddressService<A, U> {
    pub fn new(addresses: Arc<A>, users: Arc<U>) -> Self {
        Self { addresses, users }
    }

    /// Resolve the prospective owner and check the one-address invariant.
    ///
    /// An unknown user id is invalid input (the reference arrived with the
    /// request), not a missing resource.
    pub async fn validate_owner(&self, user_id: UserId) -> DomainResult<User> {
        let user = self
            .users
            .get(user_id)
            .await?
            .ok_or_else(|| DomainError::invalid_input("invalid user id"))?;

        if self.addresses.get_by_owner(user_id).await?.is_some() {
            return Err(DomainError::conflict(
                "this user already has an address registered",
            ));
        }

        Ok(user)
    }

    pub async fn create(&self, input: NewAddress, owner: UserId) -> DomainResult<AddressDetail> {
        let user = self.validate_owner(owner).await?;
        input.validate()?;

        let now = Utc::now();
        let address = Address {
            id: AddressId::new(),
            owner: user.id,
            road: input.road,
            district: input.district,
            city: input.city,
            house_number: input.house_number,
            postal_code: input.postal_code,
            state: input.state,
            complement: input.complement,
            created_at: now,
            updated_at: now,
        };

        let address = self.addresses.insert(address).await?;
        tracing::info!(address_id = %address.id, owner = %user.id, "address created");

        Ok(AddressDetail {
            address: AddressView::of(&address),
            owner: UserView::of(&user, None),
        })
    }

    /// All addresses with their owner's public view attached.
    pub async fn find_all(&self) -> DomainResult<Vec<AddressDetail>> {
        let addresses = self.addresses.list().await?;

        let mut details = Vec::with_capacity(addresses.len());
        for address in &addresses {
            match self.users.get(address.owner).await? {
                Some(owner) => details.push(AddressDetail {
                    address: AddressView::of(address),
                    owner: UserView::of(&owner, None),
                }),
                None => {
                    tracing::warn!(address_id = %address.id, "skipping address with missing owner");
                }
            }
        }

        Ok(details)
    }

    /// Lookup by primary key: at most one record.
    pub async fn find_one(&self, id: AddressId) -> DomainResult<AddressDetail> {
        let address = self.addresses.get(id).await?.ok_or(DomainError::NotFound)?;

        let owner = self
            .users
            .get(address.owner)
            .await?
            .ok_or_else(|| DomainError::internal("address owner record is missing"))?;

        Ok(AddressDetail {
            address: AddressView::of(&address),
            owner: UserView::of(&owner, None),
        })
    }

    pub async fn update(&self, id: AddressId, patch: AddressPatch) -> DomainResult<AddressView> {
        patch.validate()?;

        let mut address = self.addresses.get(id).await?.ok_or(DomainError::NotFound)?;
        address.merge(patch, Utc::now());

        let address = self.addresses.update(address).await?;
        Ok(AddressView::of(&address))
    }

    pub async fn remove(&self, id: AddressId) -> DomainResult<()> {
        if self.addresses.get(id).await?.is_none() {
            return Err(DomainError::NotFound);
        }

        self.addresses.delete(id).await
    }
}
