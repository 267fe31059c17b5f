//! Router fixtures for handler tests

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request},
    response::Response,
};
use serde_json::Value;
use tower::ServiceExt;

use crate::application::use_cases::{
    CreateLoanApplicationUseCase, FindUserByEmailUseCase, GetLoanApplicationByIdUseCase,
    RegisterUserUseCase,
};
use crate::domain::gateways::{
    LoanApplicationRepository, LoanProductRepository, MockLoanApplicationRepository,
    MockLoanProductRepository, MockUserRepository, UserRepository,
};
use crate::infrastructure::driving_adapters::api_rest::{api_router, AppState};

fn build_state(
    users: MockUserRepository,
    products: MockLoanProductRepository,
    applications: MockLoanApplicationRepository,
) -> AppState {
    let users: Arc<dyn UserRepository> = Arc::new(users);
    let products: Arc<dyn LoanProductRepository> = Arc::new(products);
    let applications: Arc<dyn LoanApplicationRepository> = Arc::new(applications);

    AppState {
        register_user_use_case: Arc::new(RegisterUserUseCase::new(users.clone())),
        find_user_by_email_use_case: Arc::new(FindUserByEmailUseCase::new(users)),
        create_loan_application_use_case: Arc::new(CreateLoanApplicationUseCase::new(
            applications.clone(),
            products,
        )),
        get_loan_application_by_id_use_case: Arc::new(GetLoanApplicationByIdUseCase::new(
            applications,
        )),
    }
}

/// State whose only live gateway is the given user repository
pub(crate) fn app_state(users: MockUserRepository) -> AppState {
    build_state(
        users,
        MockLoanProductRepository::new(),
        MockLoanApplicationRepository::new(),
    )
}

/// State whose live gateways are the loan product and application repositories
pub(crate) fn loan_app_state(
    products: MockLoanProductRepository,
    applications: MockLoanApplicationRepository,
) -> AppState {
    build_state(MockUserRepository::new(), products, applications)
}

pub(crate) async fn send(state: AppState, method: Method, uri: &str, body: Option<Value>) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    let request = match body {
        Some(json) => request.body(Body::from(json.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    api_router().with_state(state).oneshot(request).await.unwrap()
}

pub(crate) async fn read_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
