//! PostgreSQL Loan Application Repository Implementation
//!
//! Implements the LoanApplicationRepository trait using SQLx for PostgreSQL.
//! Applications store only the status and product ids; reads join both back in.

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::domain::gateways::LoanApplicationRepository;
use crate::domain::models::loan_application::{
    LoanApplication, LoanApplicationId, LoanApplicationStatus,
};
use crate::domain::models::loan_product::{LoanProduct, LoanProductId};
use crate::infrastructure::driven_adapters::database::map_write_error;
use crate::shared::errors::RepositoryError;

/// Joined row of loan_applications with its status and product
#[derive(Debug, sqlx::FromRow)]
struct LoanApplicationRow {
    id: i32,
    amount: Option<i64>,
    term_months: i32,
    email: String,
    status_id: i32,
    status_name: String,
    status_description: String,
    product_id: i32,
    product_name: String,
    product_min_amount: i64,
    product_max_amount: i64,
    product_interest_rate: Decimal,
    product_automatic_validation: Option<bool>,
}

impl From<LoanApplicationRow> for LoanApplication {
    fn from(row: LoanApplicationRow) -> Self {
        LoanApplication::restore(
            LoanApplicationId::new(row.id),
            row.amount,
            row.term_months,
            row.email,
            LoanApplicationStatus {
                id: row.status_id,
                name: row.status_name,
                description: row.status_description,
            },
            LoanProduct {
                id: LoanProductId::new(row.product_id),
                name: row.product_name,
                min_amount: row.product_min_amount,
                max_amount: row.product_max_amount,
                interest_rate: row.product_interest_rate,
                automatic_validation: row.product_automatic_validation.unwrap_or(false),
            },
        )
    }
}

/// PostgreSQL implementation of LoanApplicationRepository
pub struct PostgresLoanApplicationRepository {
    pool: PgPool,
}

impl PostgresLoanApplicationRepository {
    /// Create a new PostgresLoanApplicationRepository
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LoanApplicationRepository for PostgresLoanApplicationRepository {
    async fn save(&self, application: &LoanApplication) -> Result<LoanApplication, RepositoryError> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO loan_applications (
                amount, term_months, email, status_id, loan_product_id
            )
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(application.amount())
        .bind(application.term_months())
        .bind(application.email())
        .bind(application.status().id)
        .bind(application.loan_product().id.value())
        .fetch_one(&self.pool)
        .await
        .map_err(map_write_error)?;

        Ok(LoanApplication::restore(
            LoanApplicationId::new(id),
            application.amount(),
            application.term_months(),
            application.email().to_string(),
            application.status().clone(),
            application.loan_product().clone(),
        ))
    }

    async fn find_by_id(
        &self,
        id: LoanApplicationId,
    ) -> Result<Option<LoanApplication>, RepositoryError> {
        let row = sqlx::query_as::<_, LoanApplicationRow>(
            r#"
            SELECT a.id, a.amount, a.term_months, a.email,
                   s.id AS status_id, s.name AS status_name,
                   s.description AS status_description,
                   p.id AS product_id, p.name AS product_name,
                   p.min_amount AS product_min_amount,
                   p.max_amount AS product_max_amount,
                   p.interest_rate AS product_interest_rate,
                   p.automatic_validation AS product_automatic_validation
            FROM loan_applications a
            JOIN loan_statuses s ON s.id = a.status_id
            JOIN loan_products p ON p.id = a.loan_product_id
            WHERE a.id = $1
            "#,
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(LoanApplication::from))
    }
}
