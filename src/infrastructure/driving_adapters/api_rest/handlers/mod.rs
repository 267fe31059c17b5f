//! HTTP Handlers
//!
//! One module per resource, each exposing a `router()`.

pub mod loan_applications;
pub mod users;

#[cfg(test)]
mod test_support;
