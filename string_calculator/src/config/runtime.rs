// RUNTIME PREFERENCES (User Experience)

use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluationPreferences {
    /// Whether to log per-stage details (delimiters, token counts)
    pub log_evaluation_details: bool,

    /// Whether to list values dropped above the maximum in log context
    pub include_dropped_values: bool,

    /// Whether failure events carry the source span of the offending token
    pub include_positions_in_errors: bool,
}

impl Default for EvaluationPreferences {
    fn default() -> Self {
        Self {
            log_evaluation_details: env::var(env_vars::EVAL_LOG_DETAILS)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            include_dropped_values: env::var(env_vars::EVAL_INCLUDE_DROPPED)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            include_positions_in_errors: env::var(env_vars::EVAL_INCLUDE_POSITIONS)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingPreferences {
    /// Whether to emit JSON lines instead of plain text
    pub use_structured_logging: bool,

    /// Whether the configured service writes to the console at all
    pub enable_console_logging: bool,

    /// Minimum log level (user preference)
    pub min_log_level: LogLevel,
}

impl Default for LoggingPreferences {
    fn default() -> Self {
        Self {
            use_structured_logging: env::var(env_vars::LOGGING_USE_STRUCTURED)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            enable_console_logging: env::var(env_vars::LOGGING_ENABLE_CONSOLE)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            min_log_level: env::var(env_vars::LOGGING_MIN_LEVEL)
                .ok()
                .and_then(|v| parse_log_level(&v))
                .unwrap_or(LogLevel::Info),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error = 0,
    Warning = 1,
    Info = 2,
    Debug = 3,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warning => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        }
    }

    /// Convert to events::LogLevel for compatibility
    pub fn to_events_log_level(&self) -> crate::logging::events::LogLevel {
        match self {
            LogLevel::Error => crate::logging::events::LogLevel::Error,
            LogLevel::Warning => crate::logging::events::LogLevel::Warning,
            LogLevel::Info => crate::logging::events::LogLevel::Info,
            LogLevel::Debug => crate::logging::events::LogLevel::Debug,
        }
    }
}

/// Parse log level from string (used for environment variables)
fn parse_log_level(level: &str) -> Option<LogLevel> {
    match level.to_lowercase().as_str() {
        "error" | "0" => Some(LogLevel::Error),
        "warning" | "warn" | "1" => Some(LogLevel::Warning),
        "info" | "2" => Some(LogLevel::Info),
        "debug" | "3" => Some(LogLevel::Debug),
        _ => None,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub evaluation: EvaluationPreferences,
    pub logging: LoggingPreferences,
}

impl RuntimeConfig {
    /// Parse runtime preferences from TOML; missing keys fall back to env/defaults
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

/// Environment variable names for configuration
pub mod env_vars {
    // Evaluation
    pub const EVAL_LOG_DETAILS: &str = "STRCALC_EVAL_LOG_DETAILS";
    pub const EVAL_INCLUDE_DROPPED: &str = "STRCALC_EVAL_INCLUDE_DROPPED";
    pub const EVAL_INCLUDE_POSITIONS: &str = "STRCALC_EVAL_INCLUDE_POSITIONS";

    // Logging
    pub const LOGGING_USE_STRUCTURED: &str = "STRCALC_LOGGING_USE_STRUCTURED";
    pub const LOGGING_ENABLE_CONSOLE: &str = "STRCALC_LOGGING_ENABLE_CONSOLE";
    pub const LOGGING_MIN_LEVEL: &str = "STRCALC_LOGGING_MIN_LEVEL";
}
