use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::Address;
use crate::repository::StorageError;

#[async_trait]
pub trait AddressRepository: Send + Sync {
    /// Insert and return the generated id.
    async fn create(&self, address: &Address) -> Result<i64, StorageError>;
    async fn find_by_id(&self, id: i64, contact_id: i64) -> Result<Option<Address>, StorageError>;
    async fn update(&self, address: &Address) -> Result<(), StorageError>;
    async fn delete(&self, id: i64, contact_id: i64) -> Result<(), StorageError>;
    async fn find_by_contact_id(&self, contact_id: i64) -> Result<Vec<Address>, StorageError>;
    /// Ownership probe: rows matching (id, contact_id).
    async fn count_by_id(&self, id: i64, contact_id: i64) -> Result<i64, StorageError>;
}

pub struct PgAddressRepository {
    pool: PgPool,
}

impl PgAddressRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AddressRepository for PgAddressRepository {
    async fn create(&self, address: &Address) -> Result<i64, StorageError> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO addresses (street, city, province, country, postal_code, contact_id) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING id",
        )
        .bind(&address.street)
        .bind(&address.city)
        .bind(&address.province)
        .bind(&address.country)
        .bind(&address.postal_code)
        .bind(address.contact_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    async fn find_by_id(&self, id: i64, contact_id: i64) -> Result<Option<Address>, StorageError> {
        let address = sqlx::query_as::<_, Address>(
            "SELECT id, street, city, province, country, postal_code, contact_id \
             FROM addresses WHERE id = $1 AND contact_id = $2",
        )
        .bind(id)
        .bind(contact_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(address)
    }

    async fn update(&self, address: &Address) -> Result<(), StorageError> {
        sqlx::query(
            "UPDATE addresses SET street = $1, city = $2, province = $3, country = $4, \
             postal_code = $5 WHERE id = $6 AND contact_id = $7",
        )
        .bind(&address.street)
        .bind(&address.city)
        .bind(&address.province)
        .bind(&address.country)
        .bind(&address.postal_code)
        .bind(address.id)
        .bind(address.contact_id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn delete(&self, id: i64, contact_id: i64) -> Result<(), StorageError> {
        sqlx::query("DELETE FROM addresses WHERE id = $1 AND contact_id = $2")
            .bind(id)
            .bind(contact_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn find_by_contact_id(&self, contact_id: i64) -> Result<Vec<Address>, StorageError> {
        let addresses = sqlx::query_as::<_, Address>(
            "SELECT id, street, city, province, country, postal_code, contact_id \
             FROM addresses WHERE contact_id = $1 ORDER BY id ASC",
        )
        .bind(contact_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(addresses)
    }

    async fn count_by_id(&self, id: i64, contact_id: i64) -> Result<i64, StorageError> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM addresses WHERE id = $1 AND contact_id = $2")
                .bind(id)
                .bind(contact_id)
                .fetch_one(&self.pool)
                .await?;
        Ok(count)
    }
}
