//! Core lexical analyzer
//!
//! Splits an expression body on every occurrence of every delimiter.
//! Delimiters are matched as literal text with leftmost-first semantics:
//! the leftmost delimiter wins and, at the same offset, the earlier one in
//! the set is preferred.

use crate::config::runtime::EvaluationPreferences;
use crate::delimiters::DelimiterSet;
use crate::logging::codes;
use crate::tokens::{Token, TokenStream};
use crate::utils::{Position, SourceMap, Span};
use crate::{log_debug, log_success};
use aho_corasick::{AhoCorasick, MatchKind};

/// Lexical analysis errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexerError {
    #[error("consecutive separators in expression at {position}")]
    ConsecutiveSeparators { position: Position },

    #[error("Invalid delimiter pattern: {message}")]
    InvalidDelimiterPattern { message: String },
}

impl LexerError {
    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            LexerError::ConsecutiveSeparators { .. } => codes::lexical::CONSECUTIVE_SEPARATORS,
            LexerError::InvalidDelimiterPattern { .. } => {
                codes::lexical::INVALID_DELIMITER_PATTERN
            }
        }
    }
}

/// Metrics collected while splitting a body
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LexicalMetrics {
    pub total_tokens: usize,
    /// Longest token, in characters
    pub longest_token: usize,
    pub delimiter_count: usize,
}

impl LexicalMetrics {
    pub(crate) fn record_token(&mut self, text: &str) {
        self.total_tokens += 1;
        self.longest_token = self.longest_token.max(text.chars().count());
    }
}

/// Build the literal matcher for a delimiter set
pub fn build_matcher(delimiters: &DelimiterSet) -> Result<AhoCorasick, LexerError> {
    AhoCorasick::builder()
        .match_kind(MatchKind::LeftmostFirst)
        .build(delimiters.iter())
        .map_err(|e| LexerError::InvalidDelimiterPattern {
            message: e.to_string(),
        })
}

/// Splits bodies into tokens and keeps metrics for the last run
pub struct LexicalAnalyzer {
    preferences: EvaluationPreferences,
    metrics: LexicalMetrics,
}

impl LexicalAnalyzer {
    pub fn new() -> Self {
        Self::with_preferences(EvaluationPreferences::default())
    }

    pub fn with_preferences(preferences: EvaluationPreferences) -> Self {
        Self {
            preferences,
            metrics: LexicalMetrics::default(),
        }
    }

    /// Split `body` into tokens
    ///
    /// `body_offset` is the byte offset of `body` inside the expression that
    /// `source_map` was built over; token spans use expression coordinates.
    pub fn tokenize(
        &mut self,
        body: &str,
        body_offset: usize,
        delimiters: &DelimiterSet,
        source_map: &SourceMap<'_>,
    ) -> Result<TokenStream, LexerError> {
        self.metrics = LexicalMetrics {
            delimiter_count: delimiters.len(),
            ..LexicalMetrics::default()
        };

        log_debug!("Starting lexical analysis",
            "body_length" => body.len(),
            "delimiters" => delimiters
        );

        // Positions are carried forward from the body start, never recomputed
        let mut cursor = source_map.position_at(body_offset);

        // An empty delimiter matches before the first character
        if delimiters.has_empty_delimiter() {
            return Err(LexerError::ConsecutiveSeparators { position: cursor });
        }

        let matcher = build_matcher(delimiters)?;

        // Each piece ends where a delimiter starts; the last one ends the body
        let boundaries = matcher
            .find_iter(body)
            .map(|m| (m.start(), m.end()))
            .chain(std::iter::once((body.len(), body.len())));

        let mut tokens = Vec::new();
        let mut piece_start = 0;

        for (piece_end, next_start) in boundaries {
            let piece = &body[piece_start..piece_end];

            if piece.is_empty() {
                return Err(LexerError::ConsecutiveSeparators { position: cursor });
            }

            let end = cursor.advance_str(piece);
            self.metrics.record_token(piece);
            tokens.push(Token::new(piece.to_string(), Span::new(cursor, end)));

            cursor = end.advance_str(&body[piece_end..next_start]);
            piece_start = next_start;
        }

        if self.preferences.log_evaluation_details {
            log_success!(codes::success::TOKENIZATION_COMPLETE,
                "Tokenization completed",
                "tokens" => self.metrics.total_tokens,
                "longest_token" => self.metrics.longest_token,
                "delimiter_count" => self.metrics.delimiter_count
            );
        }

        Ok(TokenStream::new(tokens))
    }

    pub fn metrics(&self) -> &LexicalMetrics {
        &self.metrics
    }

    pub fn preferences(&self) -> &EvaluationPreferences {
        &self.preferences
    }
}

impl Default for LexicalAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delimiters::extract_delimiters;
    use assert_matches::assert_matches;

    const DEFAULTS: &[&str] = &[",", "\n"];

    fn tokenize_expression(expression: &str) -> Result<TokenStream, LexerError> {
        let extracted = extract_delimiters(expression, DEFAULTS);
        let source_map = SourceMap::new(expression);
        LexicalAnalyzer::new().tokenize(
            extracted.body,
            extracted.body_offset,
            &extracted.delimiters,
            &source_map,
        )
    }

    #[test]
    fn test_split_on_default_delimiters() {
        let tokens = tokenize_expression("1\n2,3").unwrap();
        assert_eq!(tokens.texts(), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_spans_use_expression_coordinates() {
        let tokens = tokenize_expression("//;\n1;22").unwrap();
        let second = &tokens.as_slice()[1];

        assert_eq!(second.value, "22");
        assert_eq!(second.span.start(), Position::new(6, 2, 3));
        assert_eq!(second.span.end().offset, 8);
    }

    #[test]
    fn test_metacharacters_are_literal() {
        let tokens = tokenize_expression("//[...][*]\n1...2*3").unwrap();
        assert_eq!(tokens.texts(), vec!["1", "2", "3"]);

        let tokens = tokenize_expression("//.|\n1.2|3").unwrap();
        assert_eq!(tokens.texts(), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_leftmost_delimiter_wins() {
        let error = tokenize_expression("//[*][**]\n1**2").unwrap_err();
        // "*" matches first, leaving an empty piece between the two stars
        assert_matches!(error, LexerError::ConsecutiveSeparators { .. });

        let tokens = tokenize_expression("//[**][*]\n1**2*3").unwrap();
        assert_eq!(tokens.texts(), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_consecutive_separators_position() {
        let error = tokenize_expression("\n,1").unwrap_err();
        assert_matches!(
            error,
            LexerError::ConsecutiveSeparators { position } if position == Position::start()
        );

        let error = tokenize_expression("1,,2").unwrap_err();
        assert_matches!(
            error,
            LexerError::ConsecutiveSeparators { position } if position.offset == 2
        );
    }

    #[test]
    fn test_trailing_delimiter_is_an_error() {
        assert_matches!(
            tokenize_expression("1,2,"),
            Err(LexerError::ConsecutiveSeparators { position }) if position.offset == 4
        );
    }

    #[test]
    fn test_empty_body_is_an_error() {
        assert_matches!(
            tokenize_expression("//;\n"),
            Err(LexerError::ConsecutiveSeparators { .. })
        );
        assert_matches!(
            tokenize_expression("//;"),
            Err(LexerError::ConsecutiveSeparators { .. })
        );
    }

    #[test]
    fn test_whitespace_is_kept_in_tokens() {
        let tokens = tokenize_expression("1, 2").unwrap();
        assert_eq!(tokens.texts(), vec!["1", " 2"]);
    }

    #[test]
    fn test_metrics_recorded() {
        let expression = "//[***]\n1***200\n3";
        let extracted = extract_delimiters(expression, DEFAULTS);
        let source_map = SourceMap::new(expression);
        let mut analyzer = LexicalAnalyzer::new();

        analyzer
            .tokenize(
                extracted.body,
                extracted.body_offset,
                &extracted.delimiters,
                &source_map,
            )
            .unwrap();

        let metrics = analyzer.metrics();
        assert_eq!(metrics.total_tokens, 3);
        assert_eq!(metrics.longest_token, 3);
        assert_eq!(metrics.delimiter_count, 2);
    }

    #[test]
    fn test_empty_delimiter_rejects_body() {
        assert_matches!(
            tokenize_expression("//[]\n1\n2"),
            Err(LexerError::ConsecutiveSeparators { position }) if position.offset == 5
        );
        assert_matches!(
            tokenize_expression("//[a][]\n1a2"),
            Err(LexerError::ConsecutiveSeparators { position }) if position == Position::new(8, 2, 1)
        );
    }

    #[test]
    fn test_long_bracketed_delimiter() {
        let delimiter = "a".repeat(200_000);
        let expression = format!("//[{0}]\n1{0}2", delimiter);

        let tokens = tokenize_expression(&expression).unwrap();
        assert_eq!(tokens.texts(), vec!["1", "2"]);
    }

    #[test]
    fn test_spans_match_source_map_positions() {
        let expression = "//[é][;]\n10é2;\n33é4";
        let source_map = SourceMap::new(expression);
        let tokens = tokenize_expression(expression).unwrap();

        assert_eq!(tokens.texts(), vec!["10", "2", "33", "4"]);
        for token in tokens.iter() {
            let expected = source_map.span(token.span.start().offset, token.span.end().offset);
            assert_eq!(token.span, expected);
            assert_eq!(source_map.span_text(&token.span), token.value);
        }
    }

    #[test]
    fn test_error_codes() {
        let error = LexerError::ConsecutiveSeparators {
            position: Position::start(),
        };
        assert_eq!(error.error_code(), codes::lexical::CONSECUTIVE_SEPARATORS);
        assert_eq!(
            error.to_string(),
            "consecutive separators in expression at 1:1"
        );
    }
}
