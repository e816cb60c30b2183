//! PostgreSQL implementation of UserRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::user::{NewUser, User};
use crate::ports::{RepositoryError, UserRepository};

/// PostgreSQL implementation of the UserRepository port.
///
/// Uses sqlx with connection pooling. The `users_email_key` unique
/// constraint backstops concurrent signups with the same email.
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Creates a repository over the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of a user.
#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    email: String,
    password_hash: String,
    billing_customer_id: String,
    #[allow(dead_code)]
    created_at: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: row.id,
            email: row.email,
            password_hash: row.password_hash,
            billing_customer_id: row.billing_customer_id,
        }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
            SELECT id, email, password_hash, billing_customer_id, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::database(format!("Failed to find user: {e}")))?;

        Ok(row.map(User::from))
    }

    async fn insert(&self, user: NewUser) -> Result<User, RepositoryError> {
        let id = Uuid::new_v4();

        let row: UserRow = sqlx::query_as(
            r#"
            INSERT INTO users (id, email, password_hash, billing_customer_id, created_at)
            VALUES ($1, $2, $3, $4, NOW())
            RETURNING id, email, password_hash, billing_customer_id, created_at
            "#,
        )
        .bind(id)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(&user.billing_customer_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.constraint() == Some("users_email_key") {
                    return RepositoryError::DuplicateEmail;
                }
            }
            RepositoryError::database(format!("Failed to insert user: {e}"))
        })?;

        Ok(User::from(row))
    }
}
