mod error;
mod result;

// Re-export public types
pub use error::{ErrorKind, PipelineError};
pub use result::EvaluationResult;
pub use crate::utils::is_blank;

use crate::calculator::CalculatorConfig;
use crate::config::runtime::EvaluationPreferences;
use crate::delimiters::{extract_delimiters, DelimiterSet};
use crate::lexical::LexicalAnalyzer;
use crate::logging::codes;
use crate::utils::SourceMap;
use crate::{log_debug, log_error, log_success};
use std::time::Instant;

/// Evaluate an expression through the complete pipeline
/// (emptiness -> delimiters -> lexical -> numeric -> validation -> aggregation)
pub fn evaluate(
    expression: &str,
    config: &CalculatorConfig,
    preferences: &EvaluationPreferences,
) -> Result<EvaluationResult, PipelineError> {
    let result = run_stages(expression, config, preferences);

    match &result {
        Ok(evaluation) => evaluation.log_success(),
        Err(error) => log_failure(error, preferences),
    }

    result
}

fn run_stages(
    expression: &str,
    config: &CalculatorConfig,
    preferences: &EvaluationPreferences,
) -> Result<EvaluationResult, PipelineError> {
    let start_time = Instant::now();

    log_debug!("Starting expression evaluation", "length" => expression.len());

    // Stage 1: Emptiness check
    if is_blank(expression) {
        log_success!(
            codes::success::EMPTY_EXPRESSION,
            "Blank expression evaluates to zero"
        );
        return Ok(EvaluationResult::empty(
            DelimiterSet::new(&config.default_delimiters),
            start_time.elapsed(),
        ));
    }

    // Stage 2: Delimiter extraction
    log_debug!("Stage 2: delimiter extraction");
    let extracted = extract_delimiters(expression, &config.default_delimiters);
    if preferences.log_evaluation_details {
        log_success!(codes::success::DELIMITERS_EXTRACTED,
            "Delimiters extracted",
            "source" => extracted.source,
            "delimiters" => &extracted.delimiters,
            "body_offset" => extracted.body_offset
        );
    }

    // Stage 3: Tokenization
    log_debug!("Stage 3: tokenization");
    let source_map = SourceMap::new(expression);
    let mut analyzer = LexicalAnalyzer::with_preferences(preferences.clone());
    let tokens = analyzer.tokenize(
        extracted.body,
        extracted.body_offset,
        &extracted.delimiters,
        &source_map,
    )?;

    // Stage 4: Numeric conversion
    log_debug!("Stage 4: numeric conversion", "tokens" => tokens.len());
    let numbers = crate::numeric::convert_tokens(&tokens)?;
    if preferences.log_evaluation_details {
        log_success!(codes::success::CONVERSION_COMPLETE,
            "Numeric conversion completed",
            "numbers" => numbers.len()
        );
    }

    // Stage 5: Negative validation
    log_debug!("Stage 5: negative validation");
    crate::validation::ensure_non_negative(&numbers)?;
    if preferences.log_evaluation_details {
        log_success!(codes::success::VALIDATION_PASSED, "No negative numbers");
    }

    // Stage 6: Aggregation
    log_debug!("Stage 6: aggregation", "max_value" => config.max_value);
    let aggregate = crate::aggregation::aggregate(&numbers, config.max_value);
    if aggregate.has_dropped() {
        log_dropped(&aggregate.dropped, config.max_value, preferences);
    }

    Ok(EvaluationResult {
        sum: aggregate.sum,
        delimiter_source: extracted.source,
        delimiters: extracted.delimiters,
        token_count: tokens.len(),
        included: aggregate.included,
        dropped: aggregate.dropped,
        lexical_metrics: analyzer.metrics().clone(),
        processing_duration: start_time.elapsed(),
    })
}

fn log_dropped(dropped: &[i64], max_value: i64, preferences: &EvaluationPreferences) {
    if preferences.include_dropped_values {
        log_success!(codes::success::VALUES_ABOVE_MAXIMUM_DROPPED,
            "Values above maximum dropped",
            "count" => dropped.len(),
            "max_value" => max_value,
            "values" => format!("{:?}", dropped)
        );
    } else {
        log_success!(codes::success::VALUES_ABOVE_MAXIMUM_DROPPED,
            "Values above maximum dropped",
            "count" => dropped.len(),
            "max_value" => max_value
        );
    }
}

fn log_failure(error: &PipelineError, preferences: &EvaluationPreferences) {
    let span = if preferences.include_positions_in_errors {
        error.span()
    } else {
        None
    };

    log_error!(error.error_code(), "Expression evaluation failed",
        span = span,
        "kind" => error.kind(),
        "error" => error
    );
}
