//! Validation error types

use std::fmt;

/// Validation error for request fields
#[derive(Debug, Clone)]
pub enum ValidationError {
    /// Field is empty when it shouldn't be
    Empty { field: &'static str },

    /// Field must be a positive number
    NotPositive { field: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::NotPositive { field } => write!(f, "{} must be positive", field),
        }
    }
}

impl std::error::Error for ValidationError {}
