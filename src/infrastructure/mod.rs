//! Infrastructure Layer
//!
//! The REST API that drives the use cases, and the PostgreSQL repositories
//! and configuration loading they are driven against.

pub mod driven_adapters;
pub mod driving_adapters;
