//! Gateway Traits (Ports)
//!
//! Abstract interfaces defining contracts for external dependencies.
//! These are implemented by driven adapters in the infrastructure layer.

pub mod loan_application_repository;
pub mod loan_product_repository;
pub mod user_repository;

pub use loan_application_repository::LoanApplicationRepository;
pub use loan_product_repository::LoanProductRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use loan_application_repository::MockLoanApplicationRepository;
#[cfg(test)]
pub use loan_product_repository::MockLoanProductRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
