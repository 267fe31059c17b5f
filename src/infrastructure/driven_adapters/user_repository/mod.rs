//! User Repository Adapters

mod postgres;

pub use postgres::PostgresUserRepository;
