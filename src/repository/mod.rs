//! Storage capability traits and their Postgres implementations.
//!
//! Services depend on the traits only; tests substitute in-memory fakes
//! satisfying the same contracts.

use thiserror::Error;

pub mod address;
pub mod contact;
pub mod user;

pub use address::{AddressRepository, PgAddressRepository};
pub use contact::{ContactRepository, PgContactRepository};
pub use user::{PgUserRepository, UserRepository};

#[derive(Debug, Error)]
pub enum StorageError {
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}
