//! Domain Models
//!
//! Pure domain entities and value objects representing business concepts.

pub mod loan_application;
pub mod loan_product;
pub mod user;

pub use loan_application::{
    CreateLoanApplicationData, LoanApplication, LoanApplicationId, LoanApplicationStatus,
    PENDING_STATUS_ID,
};
pub use loan_product::{LoanProduct, LoanProductId};
pub use user::{CreateUserData, User, UserId};
