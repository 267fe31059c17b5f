//! Loan Application Repository Adapters

mod postgres;

pub use postgres::PostgresLoanApplicationRepository;
