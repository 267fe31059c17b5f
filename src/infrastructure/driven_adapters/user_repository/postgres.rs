//! PostgreSQL User Repository Implementation
//!
//! Implements the UserRepository trait using SQLx for PostgreSQL.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;

use crate::domain::gateways::UserRepository;
use crate::domain::models::user::{CreateUserData, User, UserId};
use crate::infrastructure::driven_adapters::database::map_write_error;
use crate::shared::errors::RepositoryError;

/// Database row representation for users table
#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: i32,
    given_name: String,
    family_name: String,
    email: String,
    birth_date: NaiveDate,
    address: Option<String>,
    phone: Option<String>,
    base_salary: i32,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User::restore(
            UserId::new(row.id),
            CreateUserData {
                given_name: row.given_name,
                family_name: row.family_name,
                email: row.email,
                birth_date: row.birth_date,
                address: row.address,
                phone: row.phone,
                base_salary: row.base_salary,
            },
        )
    }
}

/// PostgreSQL implementation of UserRepository
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    /// Create a new PostgresUserRepository
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn save(&self, user: &User) -> Result<User, RepositoryError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (
                given_name, family_name, email, birth_date,
                address, phone, base_salary
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, given_name, family_name, email, birth_date,
                      address, phone, base_salary
            "#,
        )
        .bind(user.given_name())
        .bind(user.family_name())
        .bind(user.email())
        .bind(user.birth_date())
        .bind(user.address())
        .bind(user.phone())
        .bind(user.base_salary())
        .fetch_one(&self.pool)
        .await
        .map_err(map_write_error)?;

        Ok(User::from(row))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, given_name, family_name, email, birth_date,
                   address, phone, base_salary
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(User::from))
    }
}
