use std::sync::Arc;

use crate::error::ApiError;
use crate::models::{
    Contact, ContactFilter, ContactRequest, ContactResponse, ContactSearchQuery,
    ContactSearchResponse, Paging,
};
use crate::repository::ContactRepository;
use crate::validation;

const DEFAULT_PAGE: i64 = 1;
const DEFAULT_SIZE: i64 = 10;
const MAX_SIZE: i64 = 100;

pub struct ContactService {
    contacts: Arc<dyn ContactRepository>,
}

impl ContactService {
    pub fn new(contacts: Arc<dyn ContactRepository>) -> Self {
        Self { contacts }
    }

    pub async fn create(
        &self,
        username: &str,
        req: ContactRequest,
    ) -> Result<ContactResponse, ApiError> {
        validation::validate(&req)?;

        let mut contact = Contact {
            id: 0,
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
            phone: req.phone,
            username: username.to_string(),
        };
        contact.id = self.contacts.create(&contact).await?;

        Ok(ContactResponse::from(&contact))
    }

    pub async fn get_by_id(&self, id: i64, username: &str) -> Result<ContactResponse, ApiError> {
        let contact = self
            .contacts
            .find_by_id(id, username)
            .await?
            .ok_or_else(|| ApiError::not_found("contact is not found"))?;
        Ok(ContactResponse::from(&contact))
    }

    pub async fn update(
        &self,
        id: i64,
        username: &str,
        req: ContactRequest,
    ) -> Result<ContactResponse, ApiError> {
        validation::validate(&req)?;

        if self.contacts.count_by_id(id, username).await? == 0 {
            return Err(ApiError::not_found("contact is not found"));
        }

        let contact = Contact {
            id,
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
            phone: req.phone,
            username: username.to_string(),
        };
        self.contacts.update(&contact).await?;

        Ok(ContactResponse::from(&contact))
    }

    pub async fn delete(&self, id: i64, username: &str) -> Result<(), ApiError> {
        if self.contacts.count_by_id(id, username).await? == 0 {
            return Err(ApiError::not_found("contact is not found"));
        }
        self.contacts.delete(id, username).await?;
        Ok(())
    }

    /// Filtered, paginated search over the caller's own contacts. Pages
    /// beyond the last return an empty data array with unchanged totals.
    pub async fn search(
        &self,
        username: &str,
        query: ContactSearchQuery,
    ) -> Result<ContactSearchResponse, ApiError> {
        let page = normalize_page(parse_numeric(query.page.as_deref()));
        let size = normalize_size(parse_numeric(query.size.as_deref()));
        // page is client-controlled and unbounded; saturate instead of
        // overflowing into a negative offset.
        let offset = page.saturating_sub(1).saturating_mul(size);

        let filter = ContactFilter {
            name: query.name,
            email: query.email,
            phone: query.phone,
        };

        let (contacts, total_item) = self.contacts.search(username, &filter, size, offset).await?;

        Ok(ContactSearchResponse {
            data: contacts.iter().map(ContactResponse::from).collect(),
            paging: Paging {
                page,
                total_page: total_pages(total_item, size),
                total_item,
            },
        })
    }
}

/// Page and size come off the query string as raw text; anything that does
/// not parse counts as absent.
fn parse_numeric(value: Option<&str>) -> Option<i64> {
    value.and_then(|v| v.parse().ok())
}

/// Invalid page values silently fall back to the first page.
fn normalize_page(page: Option<i64>) -> i64 {
    match page {
        Some(p) if p >= 1 => p,
        _ => DEFAULT_PAGE,
    }
}

/// Invalid sizes silently fall back to the default; oversized requests are
/// clamped, not rejected.
fn normalize_size(size: Option<i64>) -> i64 {
    match size {
        Some(s) if s >= 1 => s.min(MAX_SIZE),
        _ => DEFAULT_SIZE,
    }
}

fn total_pages(total_item: i64, size: i64) -> i64 {
    (total_item + size - 1) / size
}
