use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Persisted user row. The password hash and session token never leave the
/// service layer; responses use [`UserResponse`].
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub username: String,
    pub password: String,
    pub name: String,
    /// Current opaque session token; NULL means not logged in.
    pub token: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UserRegisterRequest {
    #[validate(length(min = 1, max = 100))]
    pub username: String,
    #[validate(length(min = 1, max = 100))]
    pub password: String,
    #[validate(length(min = 1, max = 100))]
    pub name: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UserLoginRequest {
    #[validate(length(min = 1, max = 100))]
    pub username: String,
    #[validate(length(min = 1, max = 100))]
    pub password: String,
}

/// Partial update: omitted and empty fields are left unchanged.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UserUpdateRequest {
    #[validate(length(min = 1, max = 100))]
    #[serde(default, deserialize_with = "crate::models::empty_string_as_none")]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 100))]
    #[serde(default, deserialize_with = "crate::models::empty_string_as_none")]
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub username: String,
    pub name: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            username: user.username.clone(),
            name: user.name.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
}
