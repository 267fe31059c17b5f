//! Credit Onboarding API
//!
//! A Rust-based microservice for user registration and loan application
//! intake following Clean/Hexagonal Architecture principles.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;
