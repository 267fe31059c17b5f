//! Loan Product Repository Adapters

mod postgres;

pub use postgres::PostgresLoanProductRepository;
