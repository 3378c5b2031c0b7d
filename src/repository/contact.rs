use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::{Contact, ContactFilter};
use crate::repository::StorageError;

#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Insert and return the generated id.
    async fn create(&self, contact: &Contact) -> Result<i64, StorageError>;
    async fn find_by_id(&self, id: i64, username: &str) -> Result<Option<Contact>, StorageError>;
    async fn update(&self, contact: &Contact) -> Result<(), StorageError>;
    async fn delete(&self, id: i64, username: &str) -> Result<(), StorageError>;
    /// One page of the owner's contacts matching the filter, plus the total
    /// match count. Results are ordered by id ascending so pagination is
    /// stable for a fixed filter set.
    async fn search(
        &self,
        username: &str,
        filter: &ContactFilter,
        size: i64,
        offset: i64,
    ) -> Result<(Vec<Contact>, i64), StorageError>;
    /// Ownership probe: rows matching (id, username).
    async fn count_by_id(&self, id: i64, username: &str) -> Result<i64, StorageError>;
}

pub struct PgContactRepository {
    pool: PgPool,
}

impl PgContactRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Conjunction of the mandatory owner filter and any present substring
/// filters. Returns the WHERE clause with `$n` placeholders and the string
/// arguments to bind, in order.
fn search_conditions(username: &str, filter: &ContactFilter) -> (String, Vec<String>) {
    let mut conditions = vec!["username = $1".to_string()];
    let mut args = vec![username.to_string()];

    if let Some(name) = filter.name.as_deref().filter(|s| !s.is_empty()) {
        let pattern = format!("%{}%", name);
        conditions.push(format!(
            "(first_name ILIKE ${} OR last_name ILIKE ${})",
            args.len() + 1,
            args.len() + 2
        ));
        args.push(pattern.clone());
        args.push(pattern);
    }

    if let Some(email) = filter.email.as_deref().filter(|s| !s.is_empty()) {
        conditions.push(format!("email ILIKE ${}", args.len() + 1));
        args.push(format!("%{}%", email));
    }

    if let Some(phone) = filter.phone.as_deref().filter(|s| !s.is_empty()) {
        conditions.push(format!("phone ILIKE ${}", args.len() + 1));
        args.push(format!("%{}%", phone));
    }

    (conditions.join(" AND "), args)
}

#[async_trait]
impl ContactRepository for PgContactRepository {
    async fn create(&self, contact: &Contact) -> Result<i64, StorageError> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO contacts (first_name, last_name, email, phone, username) \
             VALUES ($1, $2, $3, $4, $5) RETURNING id",
        )
        .bind(&contact.first_name)
        .bind(&contact.last_name)
        .bind(&contact.email)
        .bind(&contact.phone)
        .bind(&contact.username)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    async fn find_by_id(&self, id: i64, username: &str) -> Result<Option<Contact>, StorageError> {
        let contact = sqlx::query_as::<_, Contact>(
            "SELECT id, first_name, last_name, email, phone, username \
             FROM contacts WHERE id = $1 AND username = $2",
        )
        .bind(id)
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;
        Ok(contact)
    }

    async fn update(&self, contact: &Contact) -> Result<(), StorageError> {
        sqlx::query(
            "UPDATE contacts SET first_name = $1, last_name = $2, email = $3, phone = $4 \
             WHERE id = $5 AND username = $6",
        )
        .bind(&contact.first_name)
        .bind(&contact.last_name)
        .bind(&contact.email)
        .bind(&contact.phone)
        .bind(contact.id)
        .bind(&contact.username)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn delete(&self, id: i64, username: &str) -> Result<(), StorageError> {
        sqlx::query("DELETE FROM contacts WHERE id = $1 AND username = $2")
            .bind(id)
            .bind(username)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn search(
        &self,
        username: &str,
        filter: &ContactFilter,
        size: i64,
        offset: i64,
    ) -> Result<(Vec<Contact>, i64), StorageError> {
        let (where_clause, args) = search_conditions(username, filter);

        let count_sql = format!("SELECT COUNT(*) FROM contacts WHERE {}", where_clause);
        let mut count_query = sqlx::query_scalar::<_, i64>(&count_sql);
        for arg in &args {
            count_query = count_query.bind(arg);
        }
        let total_items = count_query.fetch_one(&self.pool).await?;

        let page_sql = format!(
            "SELECT id, first_name, last_name, email, phone, username \
             FROM contacts WHERE {} ORDER BY id ASC LIMIT ${} OFFSET ${}",
            where_clause,
            args.len() + 1,
            args.len() + 2
        );
        let mut page_query = sqlx::query_as::<_, Contact>(&page_sql);
        for arg in &args {
            page_query = page_query.bind(arg);
        }
        let contacts = page_query
            .bind(size)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;

        Ok((contacts, total_items))
    }

    async fn count_by_id(&self, id: i64, username: &str) -> Result<i64, StorageError> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM contacts WHERE id = $1 AND username = $2")
                .bind(id)
                .bind(username)
                .fetch_one(&self.pool)
                .await?;
        Ok(count)
    }
}
