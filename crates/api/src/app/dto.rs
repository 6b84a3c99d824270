use serde::Deserialize;

use resido_registry::{AddressPatch, NewAddress, NewUser, UserPatch};

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub profession: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub profession: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateAddressRequest {
    pub road: String,
    pub district: String,
    pub city: String,
    pub house_number: i32,
    pub postal_code: String,
    pub state: String,
    pub complement: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct UpdateAddressRequest {
    pub road: Option<String>,
    pub district: Option<String>,
    pub city: Option<String>,
    pub house_number: Option<i32>,
    pub postal_code: Option<String>,
    pub state: Option<String>,
    pub complement: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

// -------------------------
// Mapping into domain inputs
// -------------------------

impl From<CreateUserRequest> for NewUser {
    fn from(req: CreateUserRequest) -> Self {
        Self {
            name: req.name,
            email: req.email,
            password: req.password,
            profession: req.profession,
        }
    }
}

impl From<UpdateUserRequest> for UserPatch {
    fn from(req: UpdateUserRequest) -> Self {
        Self {
            name: req.name,
            email: req.email,
            password: req.password,
            profession: req.profession,
        }
    }
}

impl From<CreateAddressRequest> for NewAddress {
    fn from(req: CreateAddressRequest) -> Self {
        Self {
            road: req.road,
            district: req.district,
            city: req.city,
            house_number: req.house_number,
            postal_code: req.postal_code,
            state: req.state,
            complement: req.complement,
        }
    }
}

impl From<UpdateAddressRequest> for AddressPatch {
    fn from(req: UpdateAddressRequest) -> Self {
        Self {
            road: req.road,
            district: req.district,
            city: req.city,
            house_number: req.house_number,
            postal_code: req.postal_code,
            state: req.state,
            complement: req.complement,
        }
    }
}
