//! User Domain Model
//!
//! A registered applicant. The email address is the business key.

use chrono::NaiveDate;

/// Newtype wrapper for the store-assigned User ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(i32);

impl UserId {
    #[must_use]
    pub fn new(value: i32) -> Self {
        Self(value)
    }

    #[must_use]
    pub fn value(self) -> i32 {
        self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for UserId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

/// Data required to register a new User
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateUserData {
    pub given_name: String,
    pub family_name: String,
    pub email: String,
    pub birth_date: NaiveDate,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub base_salary: i32,
}

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: Option<UserId>,
    given_name: String,
    family_name: String,
    email: String,
    birth_date: NaiveDate,
    address: Option<String>,
    phone: Option<String>,
    base_salary: i32,
}

impl User {
    /// Create an unsaved registration candidate
    #[must_use]
    pub fn new(data: CreateUserData) -> Self {
        Self {
            id: None,
            given_name: data.given_name,
            family_name: data.family_name,
            email: data.email,
            birth_date: data.birth_date,
            address: data.address,
            phone: data.phone,
            base_salary: data.base_salary,
        }
    }

    /// Restore a User from persisted data
    #[must_use]
    pub fn restore(id: UserId, data: CreateUserData) -> Self {
        Self {
            id: Some(id),
            ..Self::new(data)
        }
    }

    /// Collect every field-level problem that makes this candidate unacceptable.
    ///
    /// Returns an empty list for a valid candidate. Entries use the
    /// `"field: message"` format.
    #[must_use]
    pub fn validation_errors(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.email.trim().is_empty() {
            errors.push("email: must not be blank".to_string());
        }
        if self.given_name.trim().is_empty() {
            errors.push("givenName: must not be blank".to_string());
        }
        if self.family_name.trim().is_empty() {
            errors.push("familyName: must not be blank".to_string());
        }
        if self.base_salary < 0 {
            errors.push("baseSalary: must be greater than or equal to 0".to_string());
        }
        errors
    }

    // Getters

    #[must_use]
    pub fn id(&self) -> Option<UserId> {
        self.id
    }

    #[must_use]
    pub fn given_name(&self) -> &str {
        &self.given_name
    }

    #[must_use]
    pub fn family_name(&self) -> &str {
        &self.family_name
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    #[must_use]
    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    #[must_use]
    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    #[must_use]
    pub fn base_salary(&self) -> i32 {
        self.base_salary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_user_data() -> CreateUserData {
        CreateUserData {
            given_name: "Juan".to_string(),
            family_name: "Pérez".to_string(),
            email: "juan@test.com".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
            address: Some("Calle 123 #45-67".to_string()),
            phone: None,
            base_salary: 150_000,
        }
    }

    #[test]
    fn test_user_new_has_no_id() {
        let user = User::new(create_test_user_data());

        assert_eq!(user.id(), None);
        assert_eq!(user.given_name(), "Juan");
        assert_eq!(user.email(), "juan@test.com");
        assert_eq!(user.address(), Some("Calle 123 #45-67"));
        assert_eq!(user.phone(), None);
        assert_eq!(user.base_salary(), 150_000);
    }

    #[test]
    fn test_user_restore_keeps_id() {
        let user = User::restore(UserId::new(7), create_test_user_data());
        assert_eq!(user.id(), Some(UserId::new(7)));
        assert_eq!(user.family_name(), "Pérez");
    }

    #[test]
    fn test_valid_user_has_no_validation_errors() {
        let user = User::new(create_test_user_data());
        assert!(user.validation_errors().is_empty());
    }

    #[test]
    fn test_blank_email_and_names_are_reported() {
        let user = User::new(CreateUserData {
            given_name: String::new(),
            family_name: "  ".to_string(),
            email: " \t ".to_string(),
            ..create_test_user_data()
        });

        let errors = user.validation_errors();
        assert_eq!(errors.len(), 3);
        assert!(errors.iter().any(|e| e.starts_with("email:")));
        assert!(errors.iter().any(|e| e.starts_with("givenName:")));
        assert!(errors.iter().any(|e| e.starts_with("familyName:")));
    }

    #[test]
    fn test_negative_salary_is_reported() {
        let user = User::new(CreateUserData {
            base_salary: -1000,
            ..create_test_user_data()
        });
        assert_eq!(
            user.validation_errors(),
            vec!["baseSalary: must be greater than or equal to 0".to_string()]
        );
    }

    #[test]
    fn test_zero_salary_is_accepted() {
        let user = User::new(CreateUserData {
            base_salary: 0,
            ..create_test_user_data()
        });
        assert!(user.validation_errors().is_empty());
    }
}
