//! Get Loan Application By ID Use Case
//!
//! Retrieves a single loan application by its ID.

use std::sync::Arc;

use crate::domain::gateways::LoanApplicationRepository;
use crate::domain::models::loan_application::{LoanApplication, LoanApplicationId};
use crate::shared::errors::UseCaseError;

/// Use case for getting a loan application by ID
pub struct GetLoanApplicationByIdUseCase {
    loan_application_repository: Arc<dyn LoanApplicationRepository>,
}

impl GetLoanApplicationByIdUseCase {
    /// Create a new GetLoanApplicationByIdUseCase
    #[must_use]
    pub fn new(loan_application_repository: Arc<dyn LoanApplicationRepository>) -> Self {
        Self {
            loan_application_repository,
        }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the loan application doesn't exist.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, id: LoanApplicationId) -> Result<LoanApplication, UseCaseError> {
        tracing::debug!(loan_application_id = %id, "Getting loan application by ID");

        let application = self
            .loan_application_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| {
                tracing::warn!(loan_application_id = %id, "Loan application not found");
                UseCaseError::NotFound {
                    resource: "LoanApplication".to_string(),
                    field: "id".to_string(),
                    value: id.to_string(),
                }
            })?;

        Ok(application)
    }
}
