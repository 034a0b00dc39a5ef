//! Evaluation logging
//!
//! Stages report through a write-once global `LoggingService`. Every event
//! carries a `Code`; until a service is installed the macros do nothing.

pub mod codes;
pub mod config;
pub mod events;
pub mod macros;
pub mod service;

use std::sync::{Arc, OnceLock};

pub use codes::Code;
pub use events::{LogEvent, LogLevel};
pub use service::{Logger, LoggingService, MemoryLogger};

static GLOBAL_LOGGER: OnceLock<Arc<LoggingService>> = OnceLock::new();

/// Install the service described by the logging preferences
pub fn init_global_logging() -> Result<(), String> {
    config::validate_config().map_err(|e| format!("Invalid logging configuration: {}", e))?;

    // Every failure kind must have registry metadata before anything is logged
    let failure_codes = [
        codes::lexical::CONSECUTIVE_SEPARATORS,
        codes::lexical::INVALID_DELIMITER_PATTERN,
        codes::numeric::MALFORMED_NUMBER,
        codes::validation::NEGATIVE_NUMBERS,
    ];
    if let Some(code) = failure_codes
        .iter()
        .find(|code| codes::get_error_metadata(code.as_str()).is_none())
    {
        return Err(format!("Missing metadata for code {}", code));
    }

    let service = Arc::new(LoggingService::with_config());
    GLOBAL_LOGGER
        .set(service.clone())
        .map_err(|_| "Global logger already initialized".to_string())?;

    service.log_event(
        LogEvent::success(
            codes::success::SYSTEM_INITIALIZATION_COMPLETED,
            "Evaluation logging initialized",
        )
        .with_context("config", &crate::config::build_info::source_info()),
    );

    Ok(())
}

/// Install a caller-built service, e.g. one backed by a `MemoryLogger`
pub fn init_global_logging_with_service(service: Arc<LoggingService>) -> Result<(), String> {
    GLOBAL_LOGGER
        .set(service)
        .map_err(|_| "Global logger already initialized".to_string())
}

pub fn is_initialized() -> bool {
    GLOBAL_LOGGER.get().is_some()
}

pub fn try_get_global_logger() -> Option<&'static LoggingService> {
    GLOBAL_LOGGER.get().map(|service| service.as_ref())
}

/// Backs `log_error!`
pub fn log_error_with_context(
    code: Code,
    message: &str,
    span: Option<crate::utils::Span>,
    context: Vec<(&str, &str)>,
) {
    let Some(logger) = try_get_global_logger() else {
        return;
    };

    let mut event = LogEvent::error(code, message);
    if let Some(span) = span {
        event = event.with_span(span);
    }
    for (key, value) in context {
        event = event.with_context(key, value);
    }

    logger.log_event(event);
}

/// Backs `log_success!`
pub fn log_success_with_context(code: Code, message: &str, context: Vec<(&str, &str)>) {
    let Some(logger) = try_get_global_logger() else {
        return;
    };

    let event = context
        .into_iter()
        .fold(LogEvent::success(code, message), |event, (key, value)| {
            event.with_context(key, value)
        });

    logger.log_event(event);
}
