//! Lexical analysis module
//!
//! Turns an expression body into a `TokenStream` by splitting on the
//! delimiter set. An empty piece anywhere in the body is rejected here,
//! before any numeric conversion happens.

pub mod analyzer;

use crate::delimiters::DelimiterSet;
use crate::tokens::TokenStream;
use crate::utils::SourceMap;

pub use analyzer::{build_matcher, LexerError, LexicalAnalyzer, LexicalMetrics};

/// Split a body into tokens with default preferences
pub fn tokenize(
    body: &str,
    body_offset: usize,
    delimiters: &DelimiterSet,
    source_map: &SourceMap<'_>,
) -> Result<TokenStream, LexerError> {
    LexicalAnalyzer::new().tokenize(body, body_offset, delimiters, source_map)
}

/// Create a new lexical analyzer with default preferences
pub fn create_analyzer() -> LexicalAnalyzer {
    LexicalAnalyzer::new()
}
