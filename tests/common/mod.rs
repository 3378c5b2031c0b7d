#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use contact_api::models::{Address, Contact, ContactFilter, User};
use contact_api::repository::{
    AddressRepository, ContactRepository, StorageError, UserRepository,
};
use contact_api::state::AppState;

/// In-memory fakes satisfying the storage capability contracts, so the full
/// router can be exercised without a database.
#[derive(Default)]
pub struct InMemoryUserRepo {
    users: Mutex<HashMap<String, User>>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepo {
    async fn create(&self, user: &User) -> Result<(), StorageError> {
        self.users
            .lock()
            .unwrap()
            .insert(user.username.clone(), user.clone());
        Ok(())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StorageError> {
        Ok(self.users.lock().unwrap().get(username).cloned())
    }

    async fn find_by_token(&self, token: &str) -> Result<Option<User>, StorageError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .find(|u| u.token.as_deref() == Some(token))
            .cloned())
    }

    async fn update(&self, user: &User) -> Result<(), StorageError> {
        self.users
            .lock()
            .unwrap()
            .insert(user.username.clone(), user.clone());
        Ok(())
    }

    async fn count_by_username(&self, username: &str) -> Result<i64, StorageError> {
        Ok(i64::from(self.users.lock().unwrap().contains_key(username)))
    }
}

#[derive(Default)]
pub struct InMemoryContactRepo {
    next_id: AtomicI64,
    rows: Mutex<Vec<Contact>>,
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[async_trait]
impl ContactRepository for InMemoryContactRepo {
    async fn create(&self, contact: &Contact) -> Result<i64, StorageError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let mut row = contact.clone();
        row.id = id;
        self.rows.lock().unwrap().push(row);
        Ok(id)
    }

    async fn find_by_id(&self, id: i64, username: &str) -> Result<Option<Contact>, StorageError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == id && c.username == username)
            .cloned())
    }

    async fn update(&self, contact: &Contact) -> Result<(), StorageError> {
        let mut rows = self.rows.lock().unwrap();
        if let Some(row) = rows
            .iter_mut()
            .find(|c| c.id == contact.id && c.username == contact.username)
        {
            *row = contact.clone();
        }
        Ok(())
    }

    async fn delete(&self, id: i64, username: &str) -> Result<(), StorageError> {
        self.rows
            .lock()
            .unwrap()
            .retain(|c| !(c.id == id && c.username == username));
        Ok(())
    }

    async fn search(
        &self,
        username: &str,
        filter: &ContactFilter,
        size: i64,
        offset: i64,
    ) -> Result<(Vec<Contact>, i64), StorageError> {
        let rows = self.rows.lock().unwrap();
        let mut matches: Vec<Contact> = rows
            .iter()
            .filter(|c| c.username == username)
            .filter(|c| match filter.name.as_deref().filter(|s| !s.is_empty()) {
                Some(name) => {
                    contains_ci(&c.first_name, name)
                        || c.last_name.as_deref().is_some_and(|l| contains_ci(l, name))
                }
                None => true,
            })
            .filter(|c| match filter.email.as_deref().filter(|s| !s.is_empty()) {
                Some(email) => c.email.as_deref().is_some_and(|e| contains_ci(e, email)),
                None => true,
            })
            .filter(|c| match filter.phone.as_deref().filter(|s| !s.is_empty()) {
                Some(phone) => c.phone.as_deref().is_some_and(|p| contains_ci(p, phone)),
                None => true,
            })
            .cloned()
            .collect();
        matches.sort_by_key(|c| c.id);

        let total = matches.len() as i64;
        let page: Vec<Contact> = matches
            .into_iter()
            .skip(offset.max(0) as usize)
            .take(size.max(0) as usize)
            .collect();
        Ok((page, total))
    }

    async fn count_by_id(&self, id: i64, username: &str) -> Result<i64, StorageError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.id == id && c.username == username)
            .count() as i64)
    }
}

#[derive(Default)]
pub struct InMemoryAddressRepo {
    next_id: AtomicI64,
    rows: Mutex<Vec<Address>>,
}

#[async_trait]
impl AddressRepository for InMemoryAddressRepo {
    async fn create(&self, address: &Address) -> Result<i64, StorageError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let mut row = address.clone();
        row.id = id;
        self.rows.lock().unwrap().push(row);
        Ok(id)
    }

    async fn find_by_id(&self, id: i64, contact_id: i64) -> Result<Option<Address>, StorageError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.id == id && a.contact_id == contact_id)
            .cloned())
    }

    async fn update(&self, address: &Address) -> Result<(), StorageError> {
        let mut rows = self.rows.lock().unwrap();
        if let Some(row) = rows
            .iter_mut()
            .find(|a| a.id == address.id && a.contact_id == address.contact_id)
        {
            *row = address.clone();
        }
        Ok(())
    }

    async fn delete(&self, id: i64, contact_id: i64) -> Result<(), StorageError> {
        self.rows
            .lock()
            .unwrap()
            .retain(|a| !(a.id == id && a.contact_id == contact_id));
        Ok(())
    }

    async fn find_by_contact_id(&self, contact_id: i64) -> Result<Vec<Address>, StorageError> {
        let mut addresses: Vec<Address> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|a| a.contact_id == contact_id)
            .cloned()
            .collect();
        addresses.sort_by_key(|a| a.id);
        Ok(addresses)
    }

    async fn count_by_id(&self, id: i64, contact_id: i64) -> Result<i64, StorageError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|a| a.id == id && a.contact_id == contact_id)
            .count() as i64)
    }
}

/// The real router over in-memory storage.
pub fn test_app() -> Router {
    contact_api::app(AppState::new(
        Arc::new(InMemoryUserRepo::default()),
        Arc::new(InMemoryContactRepo::default()),
        Arc::new(InMemoryAddressRepo::default()),
    ))
}

/// Drive one request through the router and decode the JSON body.
pub async fn request(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", token);
    }
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

pub async fn register(app: &Router, username: &str, password: &str, name: &str) {
    let (status, _) = request(
        app,
        "POST",
        "/api/users",
        None,
        Some(json!({ "username": username, "password": password, "name": name })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

pub async fn login(app: &Router, username: &str, password: &str) -> String {
    let (status, body) = request(
        app,
        "POST",
        "/api/users/login",
        None,
        Some(json!({ "username": username, "password": password })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "login failed: {}", body);
    body["data"]["token"].as_str().unwrap().to_string()
}

/// Register + login in one step.
pub async fn authenticated_user(app: &Router, username: &str) -> String {
    register(app, username, "rahasia", username).await;
    login(app, username, "rahasia").await
}

pub async fn create_contact(app: &Router, token: &str, first_name: &str) -> i64 {
    let (status, body) = request(
        app,
        "POST",
        "/api/contacts",
        Some(token),
        Some(json!({ "first_name": first_name })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "create contact failed: {}", body);
    body["data"]["id"].as_i64().unwrap()
}

pub async fn create_address(app: &Router, token: &str, contact_id: i64) -> i64 {
    let (status, body) = request(
        app,
        "POST",
        &format!("/api/contacts/{}/addresses", contact_id),
        Some(token),
        Some(json!({ "country": "Indonesia", "postal_code": "12345" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "create address failed: {}", body);
    body["data"]["id"].as_i64().unwrap()
}
