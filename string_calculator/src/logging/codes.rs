//! Consolidated error codes and classification system
//!
//! Single source of truth for all error and success codes and their metadata.

use std::collections::HashMap;
use std::sync::OnceLock;

// ============================================================================
// CODE WRAPPER TYPE
// ============================================================================

/// Universal code wrapper for both error and success codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code(&'static str);

impl Code {
    pub const fn new(code: &'static str) -> Self {
        Self(code)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// ERROR CLASSIFICATION TYPES
// ============================================================================

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Critical = 0,
    High = 1,
    Medium = 2,
    Low = 3,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

/// Complete metadata for a code
#[derive(Debug, Clone)]
pub struct ErrorMetadata {
    pub code: &'static str,
    pub category: &'static str,
    pub severity: Severity,
    pub recoverable: bool,
    pub description: &'static str,
    pub recommended_action: &'static str,
}

impl ErrorMetadata {
    pub fn new(
        code: &'static str,
        category: &'static str,
        severity: Severity,
        recoverable: bool,
        description: &'static str,
        recommended_action: &'static str,
    ) -> Self {
        Self {
            code,
            category,
            severity,
            recoverable,
            description,
            recommended_action,
        }
    }
}

// ============================================================================
// ERROR CODE CONSTANTS
// ============================================================================

/// Tokenization error codes
pub mod lexical {
    use super::Code;

    pub const CONSECUTIVE_SEPARATORS: Code = Code::new("E020");
    pub const INVALID_DELIMITER_PATTERN: Code = Code::new("E021");
}

/// Numeric conversion error codes
pub mod numeric {
    use super::Code;

    pub const MALFORMED_NUMBER: Code = Code::new("E030");
}

/// Validation error codes
pub mod validation {
    use super::Code;

    pub const NEGATIVE_NUMBERS: Code = Code::new("E040");
}

// ============================================================================
// SUCCESS CODE CONSTANTS
// ============================================================================

/// Success codes
pub mod success {
    use super::Code;

    pub const EVALUATION_COMPLETE: Code = Code::new("I001");
    pub const EMPTY_EXPRESSION: Code = Code::new("I002");
    pub const SYSTEM_INITIALIZATION_COMPLETED: Code = Code::new("I004");

    pub const DELIMITERS_EXTRACTED: Code = Code::new("I010");
    pub const TOKENIZATION_COMPLETE: Code = Code::new("I020");
    pub const CONVERSION_COMPLETE: Code = Code::new("I030");
    pub const VALIDATION_PASSED: Code = Code::new("I040");
    pub const VALUES_ABOVE_MAXIMUM_DROPPED: Code = Code::new("I050");
}

// ============================================================================
// ERROR METADATA REGISTRY
// ============================================================================

static ERROR_REGISTRY: OnceLock<HashMap<&'static str, ErrorMetadata>> = OnceLock::new();

fn get_error_registry() -> &'static HashMap<&'static str, ErrorMetadata> {
    ERROR_REGISTRY.get_or_init(|| {
        let entries = [
            ErrorMetadata::new(
                "E020",
                "Lexical",
                Severity::High,
                false,
                "Two delimiters appear with nothing between them",
                "Remove the duplicated separator or insert the missing number",
            ),
            ErrorMetadata::new(
                "E021",
                "Lexical",
                Severity::Critical,
                false,
                "Delimiter set could not be compiled into a matcher",
                "File a bug report with the delimiter header",
            ),
            ErrorMetadata::new(
                "E030",
                "Numeric",
                Severity::High,
                false,
                "Token is not a whole number",
                "Use only digits between delimiters",
            ),
            ErrorMetadata::new(
                "E040",
                "Validation",
                Severity::High,
                false,
                "Negative numbers are not allowed",
                "Remove the listed negative numbers",
            ),
            ErrorMetadata::new(
                "I001",
                "Evaluation",
                Severity::Low,
                true,
                "Expression evaluated successfully",
                "No action required",
            ),
            ErrorMetadata::new(
                "I002",
                "Evaluation",
                Severity::Low,
                true,
                "Blank expression evaluated to zero",
                "No action required",
            ),
            ErrorMetadata::new(
                "I004",
                "System",
                Severity::Low,
                true,
                "Logging system initialized",
                "No action required",
            ),
            ErrorMetadata::new(
                "I010",
                "Delimiters",
                Severity::Low,
                true,
                "Delimiter set resolved",
                "Continue to tokenization",
            ),
            ErrorMetadata::new(
                "I020",
                "Lexical",
                Severity::Low,
                true,
                "Body split into tokens",
                "Continue to numeric conversion",
            ),
            ErrorMetadata::new(
                "I030",
                "Numeric",
                Severity::Low,
                true,
                "Tokens converted to integers",
                "Continue to validation",
            ),
            ErrorMetadata::new(
                "I040",
                "Validation",
                Severity::Low,
                true,
                "No negative numbers found",
                "Continue to aggregation",
            ),
            ErrorMetadata::new(
                "I050",
                "Aggregation",
                Severity::Low,
                true,
                "Numbers above the maximum were left out of the sum",
                "No action required",
            ),
        ];

        entries
            .into_iter()
            .map(|metadata| (metadata.code, metadata))
            .collect()
    })
}

// ============================================================================
// CLASSIFICATION FUNCTIONS
// ============================================================================

/// Get metadata for a specific code
pub fn get_error_metadata(code: &str) -> Option<&'static ErrorMetadata> {
    get_error_registry().get(code)
}

/// Get severity from code
pub fn get_severity(code: &str) -> Severity {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.severity)
        .unwrap_or(Severity::Medium)
}

/// Check if error is recoverable
pub fn is_recoverable(code: &str) -> bool {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.recoverable)
        .unwrap_or(true)
}

/// Get human-readable description for code
pub fn get_description(code: &str) -> &'static str {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.description)
        .unwrap_or("Unknown error")
}

/// Get recommended action for code
pub fn get_action(code: &str) -> &'static str {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.recommended_action)
        .unwrap_or("No specific action available")
}

/// Get category from code
pub fn get_category(code: &str) -> &'static str {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.category)
        .unwrap_or("Unknown")
}
