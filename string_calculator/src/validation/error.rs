//! Error types for negative-number validation

use crate::logging::codes;
use crate::utils::Span;
use thiserror::Error;

/// Result type for validation operations
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validation error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// One or more negative numbers, listed in encounter order
    ///
    /// `numbers` saturates at `i64::MIN`; `literals` holds the exact text.
    #[error("negatives not allowed: [{}]", .literals.join(", "))]
    NegativeNumbers {
        numbers: Vec<i64>,
        literals: Vec<String>,
        spans: Vec<Span>,
    },
}

impl ValidationError {
    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            ValidationError::NegativeNumbers { .. } => codes::validation::NEGATIVE_NUMBERS,
        }
    }

    /// Span of the first offending number
    pub fn span(&self) -> Option<Span> {
        match self {
            ValidationError::NegativeNumbers { spans, .. } => spans.first().copied(),
        }
    }
}
