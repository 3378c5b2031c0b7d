use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Persisted address row, reachable only through its owning contact.
#[derive(Debug, Clone, FromRow)]
pub struct Address {
    pub id: i64,
    pub street: Option<String>,
    pub city: Option<String>,
    pub province: Option<String>,
    pub country: String,
    pub postal_code: String,
    /// Owning contact id; immutable after creation.
    pub contact_id: i64,
}

#[derive(Debug, Deserialize, Validate)]
pub struct AddressRequest {
    #[validate(length(max = 255))]
    #[serde(default, deserialize_with = "crate::models::empty_string_as_none")]
    pub street: Option<String>,
    #[validate(length(max = 100))]
    #[serde(default, deserialize_with = "crate::models::empty_string_as_none")]
    pub city: Option<String>,
    #[validate(length(max = 100))]
    #[serde(default, deserialize_with = "crate::models::empty_string_as_none")]
    pub province: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub country: String,
    #[validate(length(min = 1, max = 10))]
    pub postal_code: String,
}

#[derive(Debug, Serialize)]
pub struct AddressResponse {
    pub id: i64,
    pub street: Option<String>,
    pub city: Option<String>,
    pub province: Option<String>,
    pub country: String,
    pub postal_code: String,
}

impl From<&Address> for AddressResponse {
    fn from(address: &Address) -> Self {
        Self {
            id: address.id,
            street: address.street.clone(),
            city: address.city.clone(),
            province: address.province.clone(),
            country: address.country.clone(),
            postal_code: address.postal_code.clone(),
        }
    }
}
