use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use resido_core::{AddressId, DomainResult, UserId, validate};

use crate::user::UserView;

pub const FIELD_MAX: usize = 150;
pub const POSTAL_CODE_LEN: usize = 8;
pub const STATE_LEN: usize = 2;

/// A stored address record.
///
/// `owner` is set at creation and never changes; there is no transfer
/// operation anywhere in the workflows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    pub id: AddressId,
    pub owner: UserId,
    pub road: String,
    pub district: String,
    pub city: String,
    pub house_number: i32,
    pub postal_code: String,
    pub state: String,
    pub complement: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Address {
    /// Apply a partial update: only fields present in the patch change.
    pub fn merge(&mut self, patch: AddressPatch, now: DateTime<Utc>) {
        if let Some(road) = patch.road {
            self.road = road;
        }
        if let Some(district) = patch.district {
            self.district = district;
        }
        if let Some(city) = patch.city {
            self.city = city;
        }
        if let Some(house_number) = patch.house_number {
            self.house_number = house_number;
        }
        if let Some(postal_code) = patch.postal_code {
            self.postal_code = postal_code;
        }
        if let Some(state) = patch.state {
            self.state = state;
        }
        if let Some(complement) = patch.complement {
            self.complement = Some(complement);
        }
        self.updated_at = now;
    }
}

/// Input for the create-address workflow. The owner comes from the verified
/// caller identity, not from the payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAddress {
    pub road: String,
    pub district: String,
    pub city: String,
    pub house_number: i32,
    pub postal_code: String,
    pub state: String,
    pub complement: Option<String>,
}

impl NewAddress {
    pub fn validate(&self) -> DomainResult<()> {
        validate::require("road", &self.road)?;
        validate::max_len("road", &self.road, FIELD_MAX)?;
        validate::require("district", &self.district)?;
        validate::max_len("district", &self.district, FIELD_MAX)?;
        validate::require("city", &self.city)?;
        validate::max_len("city", &self.city, FIELD_MAX)?;
        validate::exact_len("postal_code", &self.postal_code, POSTAL_CODE_LEN)?;
        validate::exact_len("state", &self.state, STATE_LEN)?;
        Ok(())
    }
}

/// Partial update for an address. Absent fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressPatch {
    pub road: Option<String>,
    pub district: Option<String>,
    pub city: Option<String>,
    pub house_number: Option<i32>,
    pub postal_code: Option<String>,
    pub state: Option<String>,
    pub complement: Option<String>,
}

impl AddressPatch {
    /// Validate only the fields that are present.
    pub fn validate(&self) -> DomainResult<()> {
        if let Some(road) = &self.road {
            validate::require("road", road)?;
            validate::max_len("road", road, FIELD_MAX)?;
        }
        if let Some(district) = &self.district {
            validate::require("district", district)?;
            validate::max_len("district", district, FIELD_MAX)?;
        }
        if let Some(city) = &self.city {
            validate::require("city", city)?;
            validate::max_len("city", city, FIELD_MAX)?;
        }
        if let Some(postal_code) = &self.postal_code {
            validate::exact_len("postal_code", postal_code, POSTAL_CODE_LEN)?;
        }
        if let Some(state) = &self.state {
            validate::exact_len("state", state, STATE_LEN)?;
        }
        Ok(())
    }
}

/// Public projection of an address without its owner relation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressView {
    pub id: AddressId,
    pub road: String,
    pub district: String,
    pub city: String,
    pub house_number: i32,
    pub postal_code: String,
    pub state: String,
    pub complement: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl AddressView {
    pub fn of(address: &Address) -> Self {
        Self {
            id: address.id,
            road: address.road.clone(),
            district: address.district.clone(),
            city: address.city.clone(),
            house_number: address.house_number,
            postal_code: address.postal_code.clone(),
            state: address.state.clone(),
            complement: address.complement.clone(),
            created_at: address.created_at,
            updated_at: address.updated_at,
        }
    }
}

/// An address together with its owner's public view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressDetail {
    #[serde(flatten)]
    pub address: AddressView,
    pub owner: UserView,
}
