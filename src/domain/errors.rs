//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided contact name is empty.
    NameRequired,

    /// The provided phone number is not exactly 10 digits.
    InvalidPhone(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NameRequired => write!(f, "Name is required"),
            Self::InvalidPhone(phone) => write!(
                f,
                "Invalid phone number: {}. It should be 10 digits.",
                phone
            ),
        }
    }
}

impl std::error::Error for ValidationError {}
