//! Create Loan Application Use Case
//!
//! Opens a new loan application against an existing loan product.

use std::sync::Arc;

use crate::domain::gateways::{LoanApplicationRepository, LoanProductRepository};
use crate::domain::models::loan_application::{CreateLoanApplicationData, LoanApplication};
use crate::shared::errors::{DomainError, UseCaseError};

/// Use case for creating a new loan application
pub struct CreateLoanApplicationUseCase {
    loan_application_repository: Arc<dyn LoanApplicationRepository>,
    loan_product_repository: Arc<dyn LoanProductRepository>,
}

impl CreateLoanApplicationUseCase {
    /// Create a new CreateLoanApplicationUseCase
    #[must_use]
    pub fn new(
        loan_application_repository: Arc<dyn LoanApplicationRepository>,
        loan_product_repository: Arc<dyn LoanProductRepository>,
    ) -> Self {
        Self {
            loan_application_repository,
            loan_product_repository,
        }
    }

    /// Execute the use case
    ///
    /// The stored application carries the fetched loan product record and the
    /// Pending status, whatever the caller sent.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Validation` if no loan product id was supplied.
    /// Returns `UseCaseError::Domain` with `LoanProductNotFound` if the product doesn't exist.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, data: CreateLoanApplicationData) -> Result<LoanApplication, UseCaseError> {
        let Some(loan_product_id) = data.loan_product_id else {
            tracing::warn!(email = %data.email, "Loan application without loan product");
            return Err(UseCaseError::Validation(vec![
                "loanProductId: a loan product is required".to_string(),
            ]));
        };

        tracing::info!(
            loan_product_id = %loan_product_id,
            amount = ?data.amount,
            term_months = data.term_months,
            "Creating loan application"
        );

        let loan_product = self
            .loan_product_repository
            .find_by_id(loan_product_id)
            .await?
            .ok_or_else(|| {
                tracing::warn!(loan_product_id = %loan_product_id, "Loan product not found");
                DomainError::LoanProductNotFound(loan_product_id.value())
            })?;

        let application = LoanApplication::pending(data, loan_product);
        let created = self.loan_application_repository.save(&application).await?;

        tracing::info!(
            loan_application_id = ?created.id(),
            status = %created.status().name,
            "Loan application created successfully"
        );

        Ok(created)
    }
}
