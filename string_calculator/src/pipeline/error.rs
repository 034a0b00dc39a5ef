use crate::lexical::LexerError;
use crate::numeric::NumericError;
use crate::utils::Span;
use crate::validation::ValidationError;
use std::fmt;

/// Pipeline processing errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PipelineError {
    #[error("Lexical analysis failed: {0}")]
    LexicalAnalysis(#[from] LexerError),

    #[error("Numeric conversion failed: {0}")]
    NumericConversion(#[from] NumericError),

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),
}

/// Caller-facing classification of a failed evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    ConsecutiveSeparator,
    NegativeNumber,
    MalformedNumber,
    Internal,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::ConsecutiveSeparator => "consecutive_separator",
            ErrorKind::NegativeNumber => "negative_number",
            ErrorKind::MalformedNumber => "malformed_number",
            ErrorKind::Internal => "internal",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PipelineError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PipelineError::LexicalAnalysis(LexerError::ConsecutiveSeparators { .. }) => {
                ErrorKind::ConsecutiveSeparator
            }
            PipelineError::LexicalAnalysis(LexerError::InvalidDelimiterPattern { .. }) => {
                ErrorKind::Internal
            }
            PipelineError::NumericConversion(_) => ErrorKind::MalformedNumber,
            PipelineError::Validation(ValidationError::NegativeNumbers { .. }) => {
                ErrorKind::NegativeNumber
            }
        }
    }

    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            PipelineError::LexicalAnalysis(e) => e.error_code(),
            PipelineError::NumericConversion(e) => e.error_code(),
            PipelineError::Validation(e) => e.error_code(),
        }
    }

    /// Location in the expression the failure points at, if any
    pub fn span(&self) -> Option<Span> {
        match self {
            PipelineError::LexicalAnalysis(LexerError::ConsecutiveSeparators { position }) => {
                Some(Span::point(*position))
            }
            PipelineError::LexicalAnalysis(LexerError::InvalidDelimiterPattern { .. }) => None,
            PipelineError::NumericConversion(e) => Some(e.span()),
            PipelineError::Validation(e) => e.span(),
        }
    }

    /// Negative values behind a `NegativeNumber` failure
    pub fn negatives(&self) -> Option<&[i64]> {
        match self {
            PipelineError::Validation(ValidationError::NegativeNumbers { numbers, .. }) => {
                Some(numbers.as_slice())
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::codes;
    use crate::utils::Position;

    #[test]
    fn test_kind_classification() {
        let lexical: PipelineError = LexerError::ConsecutiveSeparators {
            position: Position::start(),
        }
        .into();
        assert_eq!(lexical.kind(), ErrorKind::ConsecutiveSeparator);
        assert_eq!(lexical.span(), Some(Span::point(Position::start())));

        let internal: PipelineError = LexerError::InvalidDelimiterPattern {
            message: "too big".to_string(),
        }
        .into();
        assert_eq!(internal.kind(), ErrorKind::Internal);
        assert_eq!(internal.span(), None);

        let malformed: PipelineError = NumericError::MalformedNumber {
            token: "x".to_string(),
            span: Span::dummy(),
        }
        .into();
        assert_eq!(malformed.kind(), ErrorKind::MalformedNumber);
        assert_eq!(malformed.error_code(), codes::numeric::MALFORMED_NUMBER);
    }

    #[test]
    fn test_negatives_accessor() {
        let error: PipelineError = ValidationError::NegativeNumbers {
            numbers: vec![-3, i64::MIN],
            literals: vec!["-3".to_string(), "-99999999999999999999".to_string()],
            spans: vec![Span::dummy(), Span::dummy()],
        }
        .into();

        assert_eq!(error.kind(), ErrorKind::NegativeNumber);
        assert_eq!(error.negatives(), Some(&[-3, i64::MIN][..]));
        assert_eq!(
            error.to_string(),
            "Validation failed: negatives not allowed: [-3, -99999999999999999999]"
        );
    }
}
