//! Calculator facade over the evaluation pipeline

use crate::config::compile_time::evaluation::{DEFAULT_DELIMITERS, MAX_VALUE};
use crate::config::runtime::EvaluationPreferences;
use crate::delimiters::ExtractedDelimiters;
use crate::pipeline::{EvaluationResult, PipelineError};
use serde::{Deserialize, Serialize};

/// Evaluation limits fixed at construction time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Largest value that still contributes to the sum
    pub max_value: i64,
    /// Delimiters used when the expression has no header
    pub default_delimiters: Vec<String>,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            max_value: MAX_VALUE,
            default_delimiters: DEFAULT_DELIMITERS.iter().map(|d| d.to_string()).collect(),
        }
    }
}

/// Sums delimited integers in a string
///
/// Immutable after construction; a single instance can be shared freely.
#[derive(Debug, Clone, Default)]
pub struct StringCalculator {
    config: CalculatorConfig,
    preferences: EvaluationPreferences,
}

impl StringCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: CalculatorConfig) -> Self {
        Self {
            config,
            preferences: EvaluationPreferences::default(),
        }
    }

    pub fn with_preferences(mut self, preferences: EvaluationPreferences) -> Self {
        self.preferences = preferences;
        self
    }

    /// Sum the numbers in `expression`
    pub fn add(&self, expression: &str) -> Result<u64, PipelineError> {
        self.evaluate(expression).map(|result| result.sum)
    }

    /// Run the full pipeline and return every stage's details
    pub fn evaluate(&self, expression: &str) -> Result<EvaluationResult, PipelineError> {
        crate::pipeline::evaluate(expression, &self.config, &self.preferences)
    }

    /// Split off the delimiter header without evaluating
    pub fn extract_delimiters<'a>(&self, expression: &'a str) -> ExtractedDelimiters<'a> {
        crate::delimiters::extract_delimiters(expression, &self.config.default_delimiters)
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    pub fn preferences(&self) -> &EvaluationPreferences {
        &self.preferences
    }
}
