use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::User;
use crate::repository::StorageError;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: &User) -> Result<(), StorageError>;
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StorageError>;
    /// Single-row lookup by session token; this is the hot path behind the
    /// authentication gate.
    async fn find_by_token(&self, token: &str) -> Result<Option<User>, StorageError>;
    /// Full-row update keyed by username, including the token column.
    async fn update(&self, user: &User) -> Result<(), StorageError>;
    async fn count_by_username(&self, username: &str) -> Result<i64, StorageError>;
}

pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn create(&self, user: &User) -> Result<(), StorageError> {
        sqlx::query("INSERT INTO users (username, password, name) VALUES ($1, $2, $3)")
            .bind(&user.username)
            .bind(&user.password)
            .bind(&user.name)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StorageError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT username, password, name, token FROM users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    async fn find_by_token(&self, token: &str) -> Result<Option<User>, StorageError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT username, password, name, token FROM users WHERE token = $1",
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    async fn update(&self, user: &User) -> Result<(), StorageError> {
        sqlx::query("UPDATE users SET password = $1, name = $2, token = $3 WHERE username = $4")
            .bind(&user.password)
            .bind(&user.name)
            .bind(&user.token)
            .bind(&user.username)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn count_by_username(&self, username: &str) -> Result<i64, StorageError> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE username = $1")
                .bind(username)
                .fetch_one(&self.pool)
                .await?;
        Ok(count)
    }
}
