//! Numeric conversion of tokens
//!
//! Tokens are parsed as whole numbers of any size. Surrounding whitespace is
//! ignored and a leading sign is accepted; anything else is malformed.
//! A token is never coerced to zero.
//!
//! Integers beyond the `i64` range saturate to `i64::MAX` or `i64::MIN` and
//! keep their exact decimal text, so aggregation drops the large ones and
//! negative validation still reports what the user wrote.

use crate::logging::codes;
use crate::tokens::{Token, TokenStream};
use crate::utils::{trim_space, Span};
use std::num::IntErrorKind;

/// A converted token with its source span
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Number {
    pub value: i64,
    /// Canonical decimal text, exact even when `value` saturated
    pub literal: String,
    /// True if the integer did not fit in `i64`
    pub saturated: bool,
    pub span: Span,
}

impl Number {
    pub fn new(value: i64, span: Span) -> Self {
        Self {
            value,
            literal: value.to_string(),
            saturated: false,
            span,
        }
    }

    fn saturating(text: &str, negative: bool, span: Span) -> Self {
        let digits = text
            .trim_start_matches(['+', '-'])
            .trim_start_matches('0');

        let (value, literal) = if negative {
            (i64::MIN, format!("-{}", digits))
        } else {
            (i64::MAX, digits.to_string())
        };

        Self {
            value,
            literal,
            saturated: true,
            span,
        }
    }

    pub fn is_negative(&self) -> bool {
        self.value < 0
    }
}

/// Numeric conversion errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NumericError {
    #[error("Malformed number: '{token}' at {span}")]
    MalformedNumber { token: String, span: Span },
}

impl NumericError {
    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            NumericError::MalformedNumber { .. } => codes::numeric::MALFORMED_NUMBER,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            NumericError::MalformedNumber { span, .. } => *span,
        }
    }

    pub fn token(&self) -> &str {
        match self {
            NumericError::MalformedNumber { token, .. } => token,
        }
    }
}

/// Convert a single token
pub fn convert_token(token: &Token) -> Result<Number, NumericError> {
    let text = trim_space(&token.value);

    match text.parse::<i64>() {
        Ok(value) => Ok(Number::new(value, token.span)),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Ok(Number::saturating(text, false, token.span)),
            IntErrorKind::NegOverflow => Ok(Number::saturating(text, true, token.span)),
            _ => Err(NumericError::MalformedNumber {
                token: token.value.clone(),
                span: token.span,
            }),
        },
    }
}

/// Convert every token, stopping at the first failure
pub fn convert_tokens(tokens: &TokenStream) -> Result<Vec<Number>, NumericError> {
    let numbers = tokens
        .iter()
        .map(convert_token)
        .collect::<Result<Vec<_>, _>>()?;

    crate::log_debug!("Numeric conversion completed",
        "numbers" => numbers.len(),
        "saturated" => numbers.iter().filter(|n| n.saturated).count()
    );

    Ok(numbers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn token(text: &str) -> Token {
        Token::new(text.to_string(), Span::dummy())
    }

    fn convert_all(texts: &[&str]) -> Result<Vec<Number>, NumericError> {
        let stream = TokenStream::new(texts.iter().map(|t| token(t)).collect());
        convert_tokens(&stream)
    }

    fn values(texts: &[&str]) -> Result<Vec<i64>, NumericError> {
        convert_all(texts).map(|numbers| numbers.into_iter().map(|n| n.value).collect())
    }

    #[test]
    fn test_plain_integers() {
        assert_eq!(values(&["1", "22", "333"]).unwrap(), vec![1, 22, 333]);
    }

    #[test]
    fn test_signs_and_whitespace() {
        assert_eq!(
            values(&["-2", "+3", " 4", "5\t", "\u{1c}6"]).unwrap(),
            vec![-2, 3, 4, 5, 6]
        );
    }

    #[test]
    fn test_non_numeric_token_is_malformed() {
        let error = values(&["1", "a"]).unwrap_err();
        assert_matches!(error, NumericError::MalformedNumber { ref token, .. } if token == "a");
        assert_eq!(error.error_code(), codes::numeric::MALFORMED_NUMBER);
        assert_eq!(error.token(), "a");
    }

    #[test]
    fn test_whitespace_only_token_is_malformed() {
        assert_matches!(values(&["  "]), Err(NumericError::MalformedNumber { .. }));
    }

    #[test]
    fn test_decimal_is_malformed() {
        assert_matches!(values(&["1.5"]), Err(NumericError::MalformedNumber { .. }));
    }

    #[test]
    fn test_large_positive_saturates() {
        let numbers = convert_all(&["+0099999999999999999999"]).unwrap();

        assert_eq!(numbers[0].value, i64::MAX);
        assert!(numbers[0].saturated);
        assert_eq!(numbers[0].literal, "99999999999999999999");
    }

    #[test]
    fn test_large_negative_keeps_literal() {
        let numbers = convert_all(&[" -99999999999999999999"]).unwrap();

        assert_eq!(numbers[0].value, i64::MIN);
        assert!(numbers[0].is_negative());
        assert_eq!(numbers[0].literal, "-99999999999999999999");
    }

    #[test]
    fn test_in_range_literal_is_canonical() {
        let numbers = convert_all(&["-007", "+5"]).unwrap();
        assert_eq!(numbers[0].literal, "-7");
        assert_eq!(numbers[1].literal, "5");
        assert!(!numbers[0].saturated);
    }

    #[test]
    fn test_span_is_preserved() {
        let span = Span::point(crate::utils::Position::new(3, 1, 4));
        let number = convert_token(&Token::new("7".to_string(), span)).unwrap();
        assert_eq!(number.span, span);
        assert_eq!(number.value, 7);
    }
}
