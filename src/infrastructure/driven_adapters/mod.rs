//! Driven Adapters
//!
//! PostgreSQL implementations of the domain repositories, the connection
//! pool, and configuration loading.

pub mod config;
pub mod database;
pub mod loan_application_repository;
pub mod loan_product_repository;
pub mod user_repository;

pub use config::AppConfig;
pub use loan_application_repository::PostgresLoanApplicationRepository;
pub use loan_product_repository::PostgresLoanProductRepository;
pub use user_repository::PostgresUserRepository;
