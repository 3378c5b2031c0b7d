use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Persisted contact row, always owned by exactly one user.
#[derive(Debug, Clone, FromRow)]
pub struct Contact {
    pub id: i64,
    pub first_name: String,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// Owning username; immutable after creation.
    pub username: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct ContactRequest {
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,
    #[validate(length(max = 100))]
    #[serde(default, deserialize_with = "crate::models::empty_string_as_none")]
    pub last_name: Option<String>,
    #[validate(email, length(max = 200))]
    #[serde(default, deserialize_with = "crate::models::empty_string_as_none")]
    pub email: Option<String>,
    #[validate(length(max = 20))]
    #[serde(default, deserialize_with = "crate::models::empty_string_as_none")]
    pub phone: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl From<&Contact> for ContactResponse {
    fn from(contact: &Contact) -> Self {
        Self {
            id: contact.id,
            first_name: contact.first_name.clone(),
            last_name: contact.last_name.clone(),
            email: contact.email.clone(),
            phone: contact.phone.clone(),
        }
    }
}

/// Query-string parameters for contact search. Page and size arrive as raw
/// strings so a non-numeric value falls back to the default instead of
/// failing the whole request; valid values still clamp silently.
#[derive(Debug, Default, Deserialize)]
pub struct ContactSearchQuery {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub page: Option<String>,
    pub size: Option<String>,
}

/// Substring filters applied on top of the mandatory owner filter.
#[derive(Debug, Default)]
pub struct ContactFilter {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ContactSearchResponse {
    pub data: Vec<ContactResponse>,
    pub paging: Paging,
}

#[derive(Debug, Serialize)]
pub struct Paging {
    pub page: i64,
    pub total_page: i64,
    pub total_item: i64,
}
