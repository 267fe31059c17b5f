//! Use Cases
//!
//! Application-specific business rules.
//! Each use case is a single-purpose struct with an execute() method.

pub mod loan_applications;
pub mod users;

pub use loan_applications::{CreateLoanApplicationUseCase, GetLoanApplicationByIdUseCase};
pub use users::{FindUserByEmailUseCase, RegisterUserUseCase};
