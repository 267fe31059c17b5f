//! Data Transfer Objects
//!
//! Request and response DTOs for the REST API.

pub mod loan_application;
pub mod user;
mod validation;

pub use loan_application::{CreateLoanApplicationDto, LoanApplicationResponseDto};
pub use user::{CreateUserDto, UserByEmailQuery, UserResponseDto};
