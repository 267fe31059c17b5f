//! PostgreSQL Loan Product Repository Implementation
//!
//! Implements the LoanProductRepository trait using SQLx for PostgreSQL.

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::domain::gateways::LoanProductRepository;
use crate::domain::models::loan_product::{LoanProduct, LoanProductId};
use crate::shared::errors::RepositoryError;

/// Database row representation for loan_products table
#[derive(Debug, sqlx::FromRow)]
struct LoanProductRow {
    id: i32,
    name: String,
    min_amount: i64,
    max_amount: i64,
    interest_rate: Decimal,
    automatic_validation: Option<bool>,
}

impl From<LoanProductRow> for LoanProduct {
    fn from(row: LoanProductRow) -> Self {
        LoanProduct {
            id: LoanProductId::new(row.id),
            name: row.name,
            min_amount: row.min_amount,
            max_amount: row.max_amount,
            interest_rate: row.interest_rate,
            automatic_validation: row.automatic_validation.unwrap_or(false),
        }
    }
}

/// PostgreSQL implementation of LoanProductRepository
pub struct PostgresLoanProductRepository {
    pool: PgPool,
}

impl PostgresLoanProductRepository {
    /// Create a new PostgresLoanProductRepository
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LoanProductRepository for PostgresLoanProductRepository {
    async fn find_by_id(&self, id: LoanProductId) -> Result<Option<LoanProduct>, RepositoryError> {
        let row = sqlx::query_as::<_, LoanProductRow>(
            r#"
            SELECT id, name, min_amount, max_amount, interest_rate, automatic_validation
            FROM loan_products
            WHERE id = $1
            "#,
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(LoanProduct::from))
    }
}
