//! Loan Product Repository Gateway
//!
//! Read-only access to the loan product catalog.

use async_trait::async_trait;

use crate::domain::models::loan_product::{LoanProduct, LoanProductId};
use crate::shared::errors::RepositoryError;

/// Repository trait for Loan Product lookups
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoanProductRepository: Send + Sync {
    /// Find a loan product by its ID
    async fn find_by_id(&self, id: LoanProductId) -> Result<Option<LoanProduct>, RepositoryError>;
}
