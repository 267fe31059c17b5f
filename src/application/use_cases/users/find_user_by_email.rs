//! Find User By Email Use Case
//!
//! Looks up a registered user by email address.

use std::sync::Arc;

use crate::domain::gateways::UserRepository;
use crate::domain::models::user::User;
use crate::shared::errors::UseCaseError;

/// Use case for finding a user by email
pub struct FindUserByEmailUseCase {
    user_repository: Arc<dyn UserRepository>,
}

impl FindUserByEmailUseCase {
    /// Create a new FindUserByEmailUseCase
    #[must_use]
    pub fn new(user_repository: Arc<dyn UserRepository>) -> Self {
        Self { user_repository }
    }

    /// Execute the use case
    ///
    /// An unknown email is not an error: the result is simply `None`.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Validation` if the email is blank.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, email: &str) -> Result<Option<User>, UseCaseError> {
        if email.trim().is_empty() {
            return Err(UseCaseError::Validation(vec![
                "email: must not be blank".to_string(),
            ]));
        }

        tracing::debug!(%email, "Finding user by email");

        let user = self.user_repository.find_by_email(email).await?;

        tracing::debug!(%email, found = user.is_some(), "User lookup finished");
        Ok(user)
    }
}
