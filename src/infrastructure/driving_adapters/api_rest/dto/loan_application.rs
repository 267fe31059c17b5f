//! Loan Application DTOs
//!
//! Data transfer objects for loan application API endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::validation::validate_email_format;
use crate::domain::models::loan_application::{
    CreateLoanApplicationData, LoanApplication, LoanApplicationStatus,
};
use crate::domain::models::loan_product::{LoanProduct, LoanProductId};

/// DTO for opening a loan application
///
/// `loanProductId` is checked by the use case, which reports a missing
/// product reference as a validation error.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateLoanApplicationDto {
    #[validate(required(message = "amount is required"))]
    #[validate(range(min = 1, message = "amount must be greater than zero"))]
    pub amount: Option<i64>,

    #[validate(range(min = 1, message = "termMonths must be greater than zero"))]
    pub term_months: i32,

    #[validate(custom(function = "validate_email_format"))]
    pub email: String,

    pub loan_product_id: Option<i32>,
}

impl From<CreateLoanApplicationDto> for CreateLoanApplicationData {
    fn from(dto: CreateLoanApplicationDto) -> Self {
        Self {
            amount: dto.amount,
            term_months: dto.term_months,
            email: dto.email,
            loan_product_id: dto.loan_product_id.map(LoanProductId::new),
        }
    }
}

/// Loan product as embedded in loan application responses
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanProductDto {
    pub id: i32,
    pub name: String,
    pub min_amount: i64,
    pub max_amount: i64,
    pub interest_rate: rust_decimal::Decimal,
    pub automatic_validation: bool,
}

impl From<&LoanProduct> for LoanProductDto {
    fn from(product: &LoanProduct) -> Self {
        Self {
            id: product.id.value(),
            name: product.name.clone(),
            min_amount: product.min_amount,
            max_amount: product.max_amount,
            interest_rate: product.interest_rate,
            automatic_validation: product.automatic_validation,
        }
    }
}

/// Loan application status as embedded in responses
#[derive(Debug, Clone, Serialize)]
pub struct LoanApplicationStatusDto {
    pub id: i32,
    pub name: String,
    pub description: String,
}

impl From<&LoanApplicationStatus> for LoanApplicationStatusDto {
    fn from(status: &LoanApplicationStatus) -> Self {
        Self {
            id: status.id,
            name: status.name.clone(),
            description: status.description.clone(),
        }
    }
}

/// Loan application response DTO
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanApplicationResponseDto {
    pub id: Option<i32>,
    pub amount: Option<i64>,
    pub term_months: i32,
    pub email: String,
    pub status: LoanApplicationStatusDto,
    pub loan_product: LoanProductDto,
}

impl From<LoanApplication> for LoanApplicationResponseDto {
    fn from(application: LoanApplication) -> Self {
        Self {
            id: application.id().map(|id| id.value()),
            amount: application.amount(),
            term_months: application.term_months(),
            email: application.email().to_string(),
            status: LoanApplicationStatusDto::from(application.status()),
            loan_product: LoanProductDto::from(application.loan_product()),
        }
    }
}
