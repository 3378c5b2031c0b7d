use std::sync::Arc;
use uuid::Uuid;

use crate::error::ApiError;
use crate::models::{
    LoginResponse, User, UserLoginRequest, UserRegisterRequest, UserResponse, UserUpdateRequest,
};
use crate::repository::UserRepository;
use crate::security;
use crate::validation;

pub struct UserService {
    users: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub async fn register(&self, req: UserRegisterRequest) -> Result<UserResponse, ApiError> {
        validation::validate(&req)?;

        if self.users.count_by_username(&req.username).await? > 0 {
            return Err(ApiError::conflict("username already exists"));
        }

        let user = User {
            username: req.username,
            password: security::hash_password(&req.password)?,
            name: req.name,
            token: None,
        };
        self.users.create(&user).await?;

        Ok(UserResponse::from(&user))
    }

    /// Unknown username and wrong password produce the same error, so the
    /// response never reveals which check failed.
    pub async fn login(&self, req: UserLoginRequest) -> Result<LoginResponse, ApiError> {
        validation::validate(&req)?;

        let mut user = self
            .users
            .find_by_username(&req.username)
            .await?
            .ok_or(ApiError::InvalidCredentials)?;

        if !security::verify_password(&req.password, &user.password) {
            return Err(ApiError::InvalidCredentials);
        }

        // A fresh token overwrites any previous one: at most one live
        // session per user.
        let token = Uuid::new_v4().to_string();
        user.token = Some(token.clone());
        self.users.update(&user).await?;

        Ok(LoginResponse { token })
    }

    /// Resolve an opaque session token to its user, for the auth gate.
    pub async fn resolve_token(&self, token: &str) -> Result<Option<User>, ApiError> {
        Ok(self.users.find_by_token(token).await?)
    }

    pub async fn get_current(&self, username: &str) -> Result<UserResponse, ApiError> {
        let user = self
            .users
            .find_by_username(username)
            .await?
            .ok_or_else(|| ApiError::not_found("user is not found"))?;
        Ok(UserResponse::from(&user))
    }

    /// Partial update: fields absent from the request stay unchanged.
    pub async fn update(
        &self,
        username: &str,
        req: UserUpdateRequest,
    ) -> Result<UserResponse, ApiError> {
        validation::validate(&req)?;

        let mut user = self
            .users
            .find_by_username(username)
            .await?
            .ok_or_else(|| ApiError::not_found("user is not found"))?;

        if let Some(name) = req.name {
            user.name = name;
        }
        if let Some(password) = req.password {
            user.password = security::hash_password(&password)?;
        }

        self.users.update(&user).await?;
        Ok(UserResponse::from(&user))
    }

    /// Clears the stored token. Succeeds even when already logged out; only
    /// a missing user row is an error.
    pub async fn logout(&self, username: &str) -> Result<(), ApiError> {
        let mut user = self
            .users
            .find_by_username(username)
            .await?
            .ok_or_else(|| ApiError::not_found("user is not found"))?;

        user.token = None;
        self.users.update(&user).await?;
        Ok(())
    }
}
