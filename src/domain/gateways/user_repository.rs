//! User Repository Gateway
//!
//! Abstract trait defining the contract for user persistence operations.

use async_trait::async_trait;

use crate::domain::models::user::User;
use crate::shared::errors::RepositoryError;

/// Repository trait for User persistence operations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user, returning it with its store-assigned id.
    ///
    /// Implementations must report a duplicate email as
    /// `RepositoryError::UniqueViolation`.
    async fn save(&self, user: &User) -> Result<User, RepositoryError>;

    /// Find a user by email address
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;
}
