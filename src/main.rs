//! Credit Onboarding API - Main Entry Point

use std::sync::Arc;

use axum::middleware;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use credit_onboarding::application::use_cases::{
    CreateLoanApplicationUseCase, FindUserByEmailUseCase, GetLoanApplicationByIdUseCase,
    RegisterUserUseCase,
};
use credit_onboarding::infrastructure::driven_adapters::config::AppConfig;
use credit_onboarding::infrastructure::driven_adapters::database::create_pool;
use credit_onboarding::infrastructure::driven_adapters::{
    PostgresLoanApplicationRepository, PostgresLoanProductRepository, PostgresUserRepository,
};
use credit_onboarding::infrastructure::driving_adapters::api_rest::middleware::request_id_middleware;
use credit_onboarding::infrastructure::driving_adapters::api_rest::{api_router, AppState};

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "credit_onboarding=debug,tower_http=debug".into());
    let registry = tracing_subscriber::registry().with(filter);

    // LOG_FORMAT=json switches to structured output for log shippers
    if std::env::var("LOG_FORMAT").is_ok_and(|format| format.eq_ignore_ascii_case("json")) {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    // Load configuration
    let config = AppConfig::load()?;
    tracing::info!("Configuration loaded successfully");

    // Create database connection pool
    let pool = create_pool(&config.database).await?;
    tracing::info!("Database connection pool created");

    // Run migrations
    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("Database migrations completed");

    // Create repositories
    let user_repository = Arc::new(PostgresUserRepository::new(pool.clone()));
    let loan_product_repository = Arc::new(PostgresLoanProductRepository::new(pool.clone()));
    let loan_application_repository = Arc::new(PostgresLoanApplicationRepository::new(pool));

    // Create use cases
    let register_user_use_case = Arc::new(
        RegisterUserUseCase::new(user_repository.clone())
            .with_minimum_base_salary(config.registration.minimum_base_salary),
    );
    let find_user_by_email_use_case = Arc::new(FindUserByEmailUseCase::new(user_repository));
    let create_loan_application_use_case = Arc::new(CreateLoanApplicationUseCase::new(
        loan_application_repository.clone(),
        loan_product_repository,
    ));
    let get_loan_application_by_id_use_case =
        Arc::new(GetLoanApplicationByIdUseCase::new(loan_application_repository));

    // Create application state
    let app_state = AppState {
        register_user_use_case,
        find_user_by_email_use_case,
        create_loan_application_use_case,
        get_loan_application_by_id_use_case,
    };

    // Build router
    let app = api_router()
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
        .with_state(app_state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
