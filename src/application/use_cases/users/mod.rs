//! User Use Cases
//!
//! User onboarding: registration and lookup.

mod find_user_by_email;
mod register_user;

pub use find_user_by_email::FindUserByEmailUseCase;
pub use register_user::RegisterUserUseCase;
