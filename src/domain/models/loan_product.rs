//! Loan Product Domain Model
//!
//! Catalog entry describing a kind of loan. Managed outside this service;
//! only ever read.

use rust_decimal::Decimal;

/// Newtype wrapper for Loan Product ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoanProductId(i32);

impl LoanProductId {
    #[must_use]
    pub fn new(value: i32) -> Self {
        Self(value)
    }

    #[must_use]
    pub fn value(self) -> i32 {
        self.0
    }
}

impl std::fmt::Display for LoanProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for LoanProductId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

/// Loan product reference record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoanProduct {
    pub id: LoanProductId,
    pub name: String,
    pub min_amount: i64,
    pub max_amount: i64,
    pub interest_rate: Decimal,
    pub automatic_validation: bool,
}
