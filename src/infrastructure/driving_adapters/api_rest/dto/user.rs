//! User DTOs
//!
//! Data transfer objects for user API endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::validation::{validate_email_format, validate_not_blank};
use crate::domain::models::user::{CreateUserData, User};

/// Highest base salary accepted at registration
pub const MAX_BASE_SALARY: i32 = 15_000_000;

/// DTO for registering a new user
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserDto {
    #[validate(length(max = 100, message = "givenName must be at most 100 characters"))]
    #[validate(custom(function = "validate_not_blank"))]
    pub given_name: String,

    #[validate(length(max = 100, message = "familyName must be at most 100 characters"))]
    #[validate(custom(function = "validate_not_blank"))]
    pub family_name: String,

    #[validate(length(max = 255, message = "email must be at most 255 characters"))]
    #[validate(custom(function = "validate_email_format"))]
    pub email: String,

    pub birth_date: NaiveDate,

    #[validate(length(max = 255, message = "address must be at most 255 characters"))]
    pub address: Option<String>,

    #[validate(length(max = 50, message = "phone must be at most 50 characters"))]
    pub phone: Option<String>,

    #[validate(range(min = 0, max = MAX_BASE_SALARY, message = "baseSalary must be between 0 and 15000000"))]
    pub base_salary: i32,
}

impl From<CreateUserDto> for User {
    fn from(dto: CreateUserDto) -> Self {
        User::new(CreateUserData {
            given_name: dto.given_name,
            family_name: dto.family_name,
            email: dto.email,
            birth_date: dto.birth_date,
            address: dto.address,
            phone: dto.phone,
            base_salary: dto.base_salary,
        })
    }
}

/// Query string for user lookups
#[derive(Debug, Clone, Deserialize)]
pub struct UserByEmailQuery {
    pub email: String,
}

/// User response DTO
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponseDto {
    pub id: Option<i32>,
    pub given_name: String,
    pub family_name: String,
    pub email: String,
    pub birth_date: NaiveDate,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub base_salary: i32,
}

impl From<User> for UserResponseDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id().map(|id| id.value()),
            given_name: user.given_name().to_string(),
            family_name: user.family_name().to_string(),
            email: user.email().to_string(),
            birth_date: user.birth_date(),
            address: user.address().map(str::to_string),
            phone: user.phone().map(str::to_string),
            base_salary: user.base_salary(),
        }
    }
}
