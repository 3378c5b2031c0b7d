use sqlx::PgPool;
use std::sync::Arc;

use crate::repository::{
    AddressRepository, ContactRepository, PgAddressRepository, PgContactRepository,
    PgUserRepository, UserRepository,
};
use crate::services::{AddressService, ContactService, UserService};

/// Shared application state: the three services over injected storage
/// capabilities. Constructed once at startup and cloned into the router.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService>,
    pub contact_service: Arc<ContactService>,
    pub address_service: Arc<AddressService>,
}

impl AppState {
    pub fn new(
        users: Arc<dyn UserRepository>,
        contacts: Arc<dyn ContactRepository>,
        addresses: Arc<dyn AddressRepository>,
    ) -> Self {
        Self {
            user_service: Arc::new(UserService::new(users)),
            contact_service: Arc::new(ContactService::new(Arc::clone(&contacts))),
            address_service: Arc::new(AddressService::new(addresses, contacts)),
        }
    }

    /// State backed by the Postgres repositories sharing one pool.
    pub fn postgres(pool: PgPool) -> Self {
        Self::new(
            Arc::new(PgUserRepository::new(pool.clone())),
            Arc::new(PgContactRepository::new(pool.clone())),
            Arc::new(PgAddressRepository::new(pool)),
        )
    }
}
