//! REST API Module
//!
//! Contains HTTP handlers, DTOs, and middleware for the REST API.

pub mod dto;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use axum::Router;

use crate::application::use_cases::{
    CreateLoanApplicationUseCase, FindUserByEmailUseCase, GetLoanApplicationByIdUseCase,
    RegisterUserUseCase,
};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub register_user_use_case: Arc<RegisterUserUseCase>,
    pub find_user_by_email_use_case: Arc<FindUserByEmailUseCase>,
    pub create_loan_application_use_case: Arc<CreateLoanApplicationUseCase>,
    pub get_loan_application_by_id_use_case: Arc<GetLoanApplicationByIdUseCase>,
}

/// Build the versioned API router with every resource mounted
pub fn api_router() -> Router<AppState> {
    Router::new()
        .nest("/api/v1/users", handlers::users::router())
        .nest("/api/v1/loan-applications", handlers::loan_applications::router())
}
