//! Negative-number validation
//!
//! Runs after the whole expression has been converted, so every negative
//! value can be reported at once.

mod error;

pub use error::{ValidationError, ValidationResult};

use crate::numeric::Number;

/// Reject the expression if any number is strictly negative
pub fn ensure_non_negative(numbers: &[Number]) -> ValidationResult<()> {
    let negatives: Vec<&Number> = numbers.iter().filter(|n| n.is_negative()).collect();

    if negatives.is_empty() {
        return Ok(());
    }

    Err(ValidationError::NegativeNumbers {
        numbers: negatives.iter().map(|n| n.value).collect(),
        literals: negatives.iter().map(|n| n.literal.clone()).collect(),
        spans: negatives.iter().map(|n| n.span).collect(),
    })
}
