//! Common test utilities for e2e tests
//!
//! Provides test infrastructure for spinning up a PostgreSQL container,
//! running migrations, and creating a test application.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde::{Deserialize, Serialize};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use testcontainers::{runners::AsyncRunner, ContainerAsync, ImageExt};
use testcontainers_modules::postgres::Postgres;
use tower::util::ServiceExt;
use tower_http::trace::TraceLayer;

use credit_onboarding::application::use_cases::{
    CreateLoanApplicationUseCase, FindUserByEmailUseCase, GetLoanApplicationByIdUseCase,
    RegisterUserUseCase,
};
use credit_onboarding::infrastructure::driven_adapters::config::AppConfig;
use credit_onboarding::infrastructure::driven_adapters::{
    PostgresLoanApplicationRepository, PostgresLoanProductRepository, PostgresUserRepository,
};
use credit_onboarding::infrastructure::driving_adapters::api_rest::{api_router, AppState};

/// Test application context
pub struct TestApp {
    pub router: Router,
    pub pool: PgPool,
    _container: ContainerAsync<Postgres>,
}

impl TestApp {
    /// Create a new test application with a fresh PostgreSQL database
    pub async fn new() -> Self {
        // Start PostgreSQL container
        let container = Postgres::default()
            .with_tag("16-alpine")
            .start()
            .await
            .expect("Failed to start PostgreSQL container");

        let host = container.get_host().await.expect("Failed to get host");
        let port = container
            .get_host_port_ipv4(5432)
            .await
            .expect("Failed to get port");

        let database_url = format!("postgres://postgres:postgres@{host}:{port}/postgres");

        // Create connection pool
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .min_connections(1)
            .connect(&database_url)
            .await
            .expect("Failed to connect to test database");

        // Run migrations
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("Failed to run migrations");

        // Create repositories
        let user_repository = Arc::new(PostgresUserRepository::new(pool.clone()));
        let loan_product_repository = Arc::new(PostgresLoanProductRepository::new(pool.clone()));
        let loan_application_repository =
            Arc::new(PostgresLoanApplicationRepository::new(pool.clone()));

        let config = create_test_config(&database_url);

        // Create application state
        let app_state = AppState {
            register_user_use_case: Arc::new(
                RegisterUserUseCase::new(user_repository.clone())
                    .with_minimum_base_salary(config.registration.minimum_base_salary),
            ),
            find_user_by_email_use_case: Arc::new(FindUserByEmailUseCase::new(user_repository)),
            create_loan_application_use_case: Arc::new(CreateLoanApplicationUseCase::new(
                loan_application_repository.clone(),
                loan_product_repository,
            )),
            get_loan_application_by_id_use_case: Arc::new(GetLoanApplicationByIdUseCase::new(
                loan_application_repository,
            )),
        };

        let router = api_router()
            .layer(TraceLayer::new_for_http())
            .with_state(app_state);

        Self {
            router,
            pool,
            _container: container,
        }
    }

    /// Send a JSON request through the router
    pub async fn request<T: Serialize>(
        &self,
        method: Method,
        uri: &str,
        body: Option<&T>,
    ) -> (StatusCode, Vec<u8>) {
        let builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json");
        let request = match body {
            Some(body) => builder.body(Body::from(serde_json::to_string(body).unwrap())),
            None => builder.body(Body::empty()),
        }
        .unwrap();

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, bytes.to_vec())
    }

    /// Count rows in a table
    pub async fn count_rows(&self, table: &str) -> i64 {
        sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&self.pool)
            .await
            .expect("Failed to count rows")
    }
}

/// Create a test configuration
fn create_test_config(database_url: &str) -> AppConfig {
    use config::{Config, File, FileFormat};

    let config_str = format!(
        r#"
[server]
host = "127.0.0.1"
port = 0

[database]
url = "{database_url}"
max_connections = 5
min_connections = 1
"#
    );

    Config::builder()
        .add_source(File::from_str(&config_str, FileFormat::Toml))
        .build()
        .expect("Failed to build test config")
        .try_deserialize()
        .expect("Failed to deserialize test config")
}

/// Helper struct for user registration request bodies
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub given_name: String,
    pub family_name: String,
    pub email: String,
    pub birth_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub base_salary: i32,
}

impl Default for CreateUserRequest {
    fn default() -> Self {
        Self {
            given_name: "Juan".to_string(),
            family_name: "Pérez".to_string(),
            email: "juan@test.com".to_string(),
            birth_date: "1990-01-01".to_string(),
            address: Some("Calle 123 #45-67".to_string()),
            phone: None,
            base_salary: 150_000,
        }
    }
}

impl CreateUserRequest {
    pub fn with_email(mut self, email: &str) -> Self {
        self.email = email.to_string();
        self
    }

    pub fn with_given_name(mut self, name: &str) -> Self {
        self.given_name = name.to_string();
        self
    }
}

/// Helper struct for loan application request bodies
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLoanApplicationRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    pub term_months: i32,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loan_product_id: Option<i32>,
}

impl Default for CreateLoanApplicationRequest {
    fn default() -> Self {
        Self {
            amount: Some(2_000_000),
            term_months: 24,
            email: "x@test.com".to_string(),
            loan_product_id: Some(1),
        }
    }
}

/// User response structure for deserialization
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
pub struct UserResponse {
    pub id: Option<i32>,
    pub given_name: String,
    pub family_name: String,
    pub email: String,
    pub birth_date: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub base_salary: i32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
pub struct LoanProductResponse {
    pub id: i32,
    pub name: String,
    pub min_amount: i64,
    pub max_amount: i64,
    pub automatic_validation: bool,
}

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
pub struct LoanStatusResponse {
    pub id: i32,
    pub name: String,
    pub description: String,
}

/// Loan application response structure for deserialization
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
pub struct LoanApplicationResponse {
    pub id: Option<i32>,
    pub amount: Option<i64>,
    pub term_months: i32,
    pub email: String,
    pub status: LoanStatusResponse,
    pub loan_product: LoanProductResponse,
}

/// Error response structure for deserialization
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
    pub request_id: Option<String>,
    pub timestamp: String,
}

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    pub details: Option<Vec<FieldError>>,
}

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}
