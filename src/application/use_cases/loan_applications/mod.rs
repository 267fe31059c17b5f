//! Loan Application Use Cases
//!
//! Loan application intake against the loan product catalog.

mod create_loan_application;
mod get_loan_application_by_id;

pub use create_loan_application::CreateLoanApplicationUseCase;
pub use get_loan_application_by_id::GetLoanApplicationByIdUseCase;
