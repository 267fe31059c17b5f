//! Register User Use Case
//!
//! Registers a new user, enforcing that no two users share an email address.

use std::sync::Arc;

use crate::domain::gateways::UserRepository;
use crate::domain::models::user::User;
use crate::shared::errors::{DomainError, RepositoryError, UseCaseError};

/// Use case for registering a new user
pub struct RegisterUserUseCase {
    user_repository: Arc<dyn UserRepository>,
    minimum_base_salary: Option<i32>,
}

impl RegisterUserUseCase {
    /// Create a new RegisterUserUseCase
    #[must_use]
    pub fn new(user_repository: Arc<dyn UserRepository>) -> Self {
        Self {
            user_repository,
            minimum_base_salary: None,
        }
    }

    /// Reject candidates whose base salary is below `minimum`
    #[must_use]
    pub fn with_minimum_base_salary(mut self, minimum: Option<i32>) -> Self {
        self.minimum_base_salary = minimum;
        self
    }

    /// Execute the use case
    ///
    /// The email lookup is only a fast path: the store's unique constraint is
    /// what finally rejects a duplicate written by a concurrent registration.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Validation` if the email or names are blank or the salary is negative.
    /// Returns `UseCaseError::Conflict` if a user with the same email already exists.
    /// Returns `UseCaseError::Domain` if the salary is below the configured minimum.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, candidate: User) -> Result<User, UseCaseError> {
        let errors = candidate.validation_errors();
        if !errors.is_empty() {
            tracing::warn!(?errors, "Rejected invalid registration candidate");
            return Err(UseCaseError::Validation(errors));
        }

        tracing::info!(email = %candidate.email(), "Registering new user");

        if self
            .user_repository
            .find_by_email(candidate.email())
            .await?
            .is_some()
        {
            tracing::warn!(email = %candidate.email(), "User with email already exists");
            return Err(email_conflict(candidate.email()));
        }

        if let Some(minimum) = self.minimum_base_salary {
            if candidate.base_salary() < minimum {
                tracing::warn!(
                    salary = candidate.base_salary(),
                    minimum,
                    "Base salary below registration minimum"
                );
                return Err(DomainError::SalaryBelowMinimum {
                    salary: candidate.base_salary(),
                    minimum,
                }
                .into());
            }
        }

        let saved = self
            .user_repository
            .save(&candidate)
            .await
            .map_err(|err| match err {
                RepositoryError::UniqueViolation(constraint) => {
                    tracing::warn!(email = %candidate.email(), %constraint, "Lost registration race on email");
                    email_conflict(candidate.email())
                }
                other => UseCaseError::Repository(other),
            })?;

        tracing::info!(
            user_id = ?saved.id(),
            email = %saved.email(),
            "User registered successfully"
        );

        Ok(saved)
    }
}

fn email_conflict(email: &str) -> UseCaseError {
    UseCaseError::Conflict(format!("User with email {email} already exists"))
}
