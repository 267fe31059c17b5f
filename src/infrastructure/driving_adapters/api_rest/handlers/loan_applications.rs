//! Loan Application Handlers
//!
//! HTTP handlers for loan application intake and lookup.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use validator::Validate;

use crate::domain::models::loan_application::LoanApplicationId;
use crate::infrastructure::driving_adapters::api_rest::dto::loan_application::{
    CreateLoanApplicationDto, LoanApplicationResponseDto,
};
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

/// Create the router for loan application endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_loan_application))
        .route("/:id", get(get_loan_application_by_id))
}

/// POST /api/v1/loan-applications - Open a loan application
///
/// # Responses
///
/// * 201 Created - Application stored in the Pending status
/// * 400 Bad Request - Validation error, including a missing loan product or an undecodable body
/// * 404 Not Found - Loan product does not exist (code `PRESTAMO_NOT_FOUND`)
#[axum::debug_handler]
async fn create_loan_application(
    State(state): State<AppState>,
    payload: Result<Json<CreateLoanApplicationDto>, JsonRejection>,
) -> Result<(StatusCode, Json<LoanApplicationResponseDto>), ApiError> {
    let Json(dto) = payload?;
    dto.validate()?;

    let application = state
        .create_loan_application_use_case
        .execute(dto.into())
        .await?;

    Ok((StatusCode::CREATED, Json(LoanApplicationResponseDto::from(application))))
}

/// GET /api/v1/loan-applications/:id - Get a loan application by ID
///
/// # Responses
///
/// * 200 OK - Application found
/// * 400 Bad Request - Malformed id
/// * 404 Not Found - Application does not exist
#[axum::debug_handler]
async fn get_loan_application_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<LoanApplicationResponseDto>, ApiError> {
    let id = LoanApplicationId::new(id.parse::<i32>()?);

    let application = state.get_loan_application_by_id_use_case.execute(id).await?;

    Ok(Json(LoanApplicationResponseDto::from(application)))
}
