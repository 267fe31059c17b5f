//! API Middleware
//!
//! Cross-cutting HTTP middleware for the REST API.

pub mod request_id;

pub use request_id::{current_request_id, request_id_middleware, RequestId};
