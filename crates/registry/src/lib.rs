//! `resido-registry` — the user/address domain: records, views, validation,
//! store contracts, and the request workflows.
//!
//! Storage implementations live in `resido-infra`; HTTP mapping lives in
//! `resido-api`.

pub mod address;
pub mod addresses;
pub mod store;
pub mod user;
pub mod users;

pub use address::{Address, AddressDetail, AddressPatch, AddressView, NewAddress};
pub use addresses::AddressService;
pub use store::{AddressStore, UserStore};
pub use user::{NewUser, User, UserPatch, UserView};
pub use users::UserService;
