use std::sync::Arc;

use crate::error::ApiError;
use crate::models::{Address, AddressRequest, AddressResponse};
use crate::repository::{AddressRepository, ContactRepository};
use crate::validation;

/// Address operations enforce the full ownership chain: the contact must
/// belong to the caller before the address is even looked at.
pub struct AddressService {
    addresses: Arc<dyn AddressRepository>,
    contacts: Arc<dyn ContactRepository>,
}

impl AddressService {
    pub fn new(addresses: Arc<dyn AddressRepository>, contacts: Arc<dyn ContactRepository>) -> Self {
        Self { addresses, contacts }
    }

    /// First hop of the ownership chain.
    async fn ensure_contact_owned(&self, contact_id: i64, username: &str) -> Result<(), ApiError> {
        if self.contacts.count_by_id(contact_id, username).await? == 0 {
            return Err(ApiError::not_found("contact is not found"));
        }
        Ok(())
    }

    /// Second hop; only called once the contact hop succeeded.
    async fn ensure_address_owned(&self, id: i64, contact_id: i64) -> Result<(), ApiError> {
        if self.addresses.count_by_id(id, contact_id).await? == 0 {
            return Err(ApiError::not_found("address is not found"));
        }
        Ok(())
    }

    pub async fn create(
        &self,
        contact_id: i64,
        username: &str,
        req: AddressRequest,
    ) -> Result<AddressResponse, ApiError> {
        self.ensure_contact_owned(contact_id, username).await?;
        validation::validate(&req)?;

        let mut address = Address {
            id: 0,
            street: req.street,
            city: req.city,
            province: req.province,
            country: req.country,
            postal_code: req.postal_code,
            contact_id,
        };
        address.id = self.addresses.create(&address).await?;

        Ok(AddressResponse::from(&address))
    }

    pub async fn get_by_id(
        &self,
        id: i64,
        contact_id: i64,
        username: &str,
    ) -> Result<AddressResponse, ApiError> {
        self.ensure_contact_owned(contact_id, username).await?;

        let address = self
            .addresses
            .find_by_id(id, contact_id)
            .await?
            .ok_or_else(|| ApiError::not_found("address is not found"))?;
        Ok(AddressResponse::from(&address))
    }

    pub async fn update(
        &self,
        id: i64,
        contact_id: i64,
        username: &str,
        req: AddressRequest,
    ) -> Result<AddressResponse, ApiError> {
        self.ensure_contact_owned(contact_id, username).await?;
        validation::validate(&req)?;
        self.ensure_address_owned(id, contact_id).await?;

        let address = Address {
            id,
            street: req.street,
            city: req.city,
            province: req.province,
            country: req.country,
            postal_code: req.postal_code,
            contact_id,
        };
        self.addresses.update(&address).await?;

        Ok(AddressResponse::from(&address))
    }

    pub async fn delete(&self, id: i64, contact_id: i64, username: &str) -> Result<(), ApiError> {
        self.ensure_contact_owned(contact_id, username).await?;
        self.ensure_address_owned(id, contact_id).await?;
        self.addresses.delete(id, contact_id).await?;
        Ok(())
    }

    pub async fn list(
        &self,
        contact_id: i64,
        username: &str,
    ) -> Result<Vec<AddressResponse>, ApiError> {
        self.ensure_contact_owned(contact_id, username).await?;

        let addresses = self.addresses.find_by_contact_id(contact_id).await?;
        Ok(addresses.iter().map(AddressResponse::from).collect())
    }
}
