//! Domain Layer
//!
//! Contains the core business entities and gateway traits (ports).
//! This layer has no dependencies on infrastructure.

pub mod gateways;
pub mod models;

pub use gateways::{LoanApplicationRepository, LoanProductRepository, UserRepository};
pub use models::{
    CreateLoanApplicationData, CreateUserData, LoanApplication, LoanApplicationId,
    LoanApplicationStatus, LoanProduct, LoanProductId, User, UserId,
};
