//! Application Layer
//!
//! Registration and loan intake flows. Use cases only see the repository
//! traits from the domain layer.

pub mod use_cases;
