//! Loan Application Repository Gateway
//!
//! Abstract trait defining the contract for loan application persistence.

use async_trait::async_trait;

use crate::domain::models::loan_application::{LoanApplication, LoanApplicationId};
use crate::shared::errors::RepositoryError;

/// Repository trait for Loan Application persistence operations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoanApplicationRepository: Send + Sync {
    /// Persist a new loan application, returning it with its store-assigned id
    async fn save(&self, application: &LoanApplication) -> Result<LoanApplication, RepositoryError>;

    /// Find a loan application by its ID, with its status and product resolved
    async fn find_by_id(
        &self,
        id: LoanApplicationId,
    ) -> Result<Option<LoanApplication>, RepositoryError>;
}
