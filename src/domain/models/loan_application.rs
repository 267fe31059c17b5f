//! Loan Application Domain Model
//!
//! A request for credit against one loan product, tracked through a workflow
//! status.

use super::loan_product::{LoanProduct, LoanProductId};

/// Id of the initial workflow status assigned to every new application
pub const PENDING_STATUS_ID: i32 = 1;

/// Newtype wrapper for the store-assigned Loan Application ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoanApplicationId(i32);

impl LoanApplicationId {
    #[must_use]
    pub fn new(value: i32) -> Self {
        Self(value)
    }

    #[must_use]
    pub fn value(self) -> i32 {
        self.0
    }
}

impl std::fmt::Display for LoanApplicationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for LoanApplicationId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

/// Workflow status of a loan application
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoanApplicationStatus {
    pub id: i32,
    pub name: String,
    pub description: String,
}

impl LoanApplicationStatus {
    /// The status every new application starts in
    #[must_use]
    pub fn pending() -> Self {
        Self {
            id: PENDING_STATUS_ID,
            name: "Pending".to_string(),
            description: "Pending review".to_string(),
        }
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.id == PENDING_STATUS_ID
    }
}

/// Data supplied by a caller to open a new loan application
///
/// The caller references the loan product by id only; the full product and
/// the initial status are resolved by the application layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateLoanApplicationData {
    pub amount: Option<i64>,
    pub term_months: i32,
    pub email: String,
    pub loan_product_id: Option<LoanProductId>,
}

/// Loan application domain entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoanApplication {
    id: Option<LoanApplicationId>,
    amount: Option<i64>,
    term_months: i32,
    email: String,
    status: LoanApplicationStatus,
    loan_product: LoanProduct,
}

impl LoanApplication {
    /// Build an unsaved application in the Pending status for a resolved product
    #[must_use]
    pub fn pending(data: CreateLoanApplicationData, loan_product: LoanProduct) -> Self {
        Self {
            id: None,
            amount: data.amount,
            term_months: data.term_months,
            email: data.email,
            status: LoanApplicationStatus::pending(),
            loan_product,
        }
    }

    /// Restore a LoanApplication from persisted data
    #[must_use]
    pub fn restore(
        id: LoanApplicationId,
        amount: Option<i64>,
        term_months: i32,
        email: String,
        status: LoanApplicationStatus,
        loan_product: LoanProduct,
    ) -> Self {
        Self {
            id: Some(id),
            amount,
            term_months,
            email,
            status,
            loan_product,
        }
    }

    // Getters

    #[must_use]
    pub fn id(&self) -> Option<LoanApplicationId> {
        self.id
    }

    #[must_use]
    pub fn amount(&self) -> Option<i64> {
        self.amount
    }

    #[must_use]
    pub fn term_months(&self) -> i32 {
        self.term_months
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn status(&self) -> &LoanApplicationStatus {
        &self.status
    }

    #[must_use]
    pub fn loan_product(&self) -> &LoanProduct {
        &self.loan_product
    }
}
