//! `resido-infra` — store implementations.
//!
//! Currently in-memory only: a `RwLock<HashMap>` per record type, with the
//! uniqueness constraints enforced inside the write lock. A SQL-backed
//! implementation would satisfy the same `resido-registry` store traits.

pub mod stores;


pub use stores::{InMemoryAddressStore, InMemoryUserStore};
