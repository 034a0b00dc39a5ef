// Internal modules
pub mod aggregation;
pub mod calculator;
pub mod config;
pub mod delimiters;
pub mod lexical;
#[macro_use]
pub mod logging;
pub mod numeric;
pub mod pipeline;
pub mod tokens;
pub mod utils;
pub mod validation;

use std::sync::OnceLock;

// Re-export key types for library consumers
pub use calculator::{CalculatorConfig, StringCalculator};
pub use delimiters::{DelimiterSet, DelimiterSource};
pub use pipeline::{ErrorKind, EvaluationResult, PipelineError};

static DEFAULT_CALCULATOR: OnceLock<StringCalculator> = OnceLock::new();

/// Sum the delimited numbers in `expression` with the default configuration
///
/// ```
/// assert_eq!(string_calculator::add("//;\n1;2").unwrap(), 3);
/// assert!(string_calculator::add("1,-2").is_err());
/// ```
pub fn add(expression: &str) -> Result<u64, PipelineError> {
    DEFAULT_CALCULATOR
        .get_or_init(StringCalculator::new)
        .add(expression)
}
