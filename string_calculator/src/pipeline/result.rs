use crate::delimiters::{DelimiterSet, DelimiterSource};
use crate::lexical::LexicalMetrics;
use crate::logging::codes;
use std::time::Duration;

/// Complete evaluation result with per-stage details
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationResult {
    pub sum: u64,
    pub delimiter_source: DelimiterSource,
    pub delimiters: DelimiterSet,
    pub token_count: usize,
    /// Values that contributed to `sum`
    pub included: Vec<i64>,
    /// Values above the maximum that were excluded
    pub dropped: Vec<i64>,
    pub lexical_metrics: LexicalMetrics,
    pub processing_duration: Duration,
}

impl EvaluationResult {
    /// Result for a blank expression
    pub fn empty(delimiters: DelimiterSet, processing_duration: Duration) -> Self {
        Self {
            sum: 0,
            delimiter_source: DelimiterSource::Default,
            delimiters,
            token_count: 0,
            included: Vec::new(),
            dropped: Vec::new(),
            lexical_metrics: LexicalMetrics::default(),
            processing_duration,
        }
    }

    pub fn log_success(&self) {
        crate::log_success!(
            codes::success::EVALUATION_COMPLETE,
            "Expression evaluation succeeded",
            "sum" => self.sum,
            "tokens" => self.token_count,
            "included" => self.included.len(),
            "dropped" => self.dropped.len(),
            "delimiter_source" => self.delimiter_source,
            "duration_ms" => format!("{:.3}", self.processing_duration.as_secs_f64() * 1000.0)
        );
    }
}
