//! User Handlers
//!
//! HTTP handlers for user registration and lookup.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    routing::post,
    Json, Router,
};
use validator::Validate;

use crate::domain::models::user::User;
use crate::infrastructure::driving_adapters::api_rest::dto::user::{
    CreateUserDto, UserByEmailQuery, UserResponseDto,
};
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::{ApiError, UseCaseError};

/// Create the router for user endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(register_user).get(find_user_by_email))
}

/// POST /api/v1/users - Register a new user
///
/// # Responses
///
/// * 201 Created - User registered
/// * 400 Bad Request - Validation error, including a body that cannot be decoded
/// * 409 Conflict - A user with the same email already exists
/// * 422 Unprocessable Entity - Base salary below the configured minimum
#[axum::debug_handler]
async fn register_user(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserDto>, JsonRejection>,
) -> Result<(StatusCode, Json<UserResponseDto>), ApiError> {
    let Json(dto) = payload?;
    dto.validate()?;

    let user = state.register_user_use_case.execute(User::from(dto)).await?;

    Ok((StatusCode::CREATED, Json(UserResponseDto::from(user))))
}

/// GET /api/v1/users?email= - Find a user by email
///
/// # Responses
///
/// * 200 OK - User found
/// * 400 Bad Request - Blank or missing email
/// * 404 Not Found - No user with that email
#[axum::debug_handler]
async fn find_user_by_email(
    State(state): State<AppState>,
    query: Result<Query<UserByEmailQuery>, QueryRejection>,
) -> Result<Json<UserResponseDto>, ApiError> {
    let Query(query) = query?;
    let user = state
        .find_user_by_email_use_case
        .execute(&query.email)
        .await?
        .ok_or_else(|| UseCaseError::NotFound {
            resource: "User".to_string(),
            field: "email".to_string(),
            value: query.email.clone(),
        })?;

    Ok(Json(UserResponseDto::from(user)))
}
