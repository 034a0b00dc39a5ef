//! Delimiter-prefix extraction
//!
//! An expression may open with a header `//<delimiters>\n` that replaces the
//! default delimiters. Two header forms are recognized:
//!
//! - single-character: `//;%\n` gives `;` and `%`
//! - bracketed: `//[***][%%]\n` gives `***` and `%%`
//!
//! Newline is always a delimiter regardless of the header. Malformed
//! bracketed headers fall back to the single-character form and never fail.
//! An empty bracketed delimiter (`//[]`) is not stored but remembered: it
//! matches between every pair of characters, so the lexer rejects the body.

use serde::Serialize;
use std::fmt;

/// Header marker that introduces a custom delimiter specification
pub const HEADER_PREFIX: &str = "//";

/// Separator between bracketed delimiters inside a specification
const BRACKET_SEPARATOR: &str = "][";

/// Delimiter that is present in every set
pub const NEWLINE: &str = "\n";

/// How a delimiter set was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DelimiterSource {
    /// No header; the configured default delimiters
    Default,
    /// `//<chars>\n`, one delimiter per character
    SingleChar,
    /// `//[d1][d2]...\n`, arbitrary-length delimiters
    Bracketed,
}

impl DelimiterSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            DelimiterSource::Default => "default",
            DelimiterSource::SingleChar => "single_char",
            DelimiterSource::Bracketed => "bracketed",
        }
    }
}

impl fmt::Display for DelimiterSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered set of distinct, non-empty delimiters that always contains `"\n"`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DelimiterSet {
    delimiters: Vec<String>,
    /// An empty candidate was supplied
    has_empty: bool,
}

impl DelimiterSet {
    /// Build a set from candidate delimiters
    ///
    /// Duplicates are skipped. Empty candidates are recorded in
    /// `has_empty_delimiter` instead of being stored.
    pub fn new<I, S>(candidates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self {
            delimiters: Vec::new(),
            has_empty: false,
        };
        for candidate in candidates {
            set.insert(candidate.as_ref());
        }
        set.insert(NEWLINE);
        set
    }

    fn insert(&mut self, delimiter: &str) {
        if delimiter.is_empty() {
            self.has_empty = true;
            return;
        }
        if self.contains(delimiter) {
            return;
        }
        self.delimiters.push(delimiter.to_string());
    }

    pub fn contains(&self, delimiter: &str) -> bool {
        self.delimiters.iter().any(|d| d == delimiter)
    }

    /// True if an empty delimiter was supplied, which separates every character
    pub fn has_empty_delimiter(&self) -> bool {
        self.has_empty
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.delimiters.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.delimiters
    }

    pub fn len(&self) -> usize {
        self.delimiters.len()
    }

    /// Always false; the newline delimiter is inserted on construction
    pub fn is_empty(&self) -> bool {
        self.delimiters.is_empty()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.delimiters
    }
}

impl fmt::Display for DelimiterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.iter().map(|d| format!("{:?}", d)).collect();
        write!(f, "[{}]", rendered.join(", "))
    }
}

/// Result of splitting an expression into its delimiter set and body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedDelimiters<'a> {
    /// Expression text after the header (the whole expression if none)
    pub body: &'a str,
    /// Byte offset of `body` within the original expression
    pub body_offset: usize,
    pub delimiters: DelimiterSet,
    pub source: DelimiterSource,
}

/// Detect and strip an optional delimiter header
pub fn extract_delimiters<'a, S>(
    expression: &'a str,
    default_delimiters: &[S],
) -> ExtractedDelimiters<'a>
where
    S: AsRef<str>,
{
    let Some(rest) = expression.strip_prefix(HEADER_PREFIX) else {
        return ExtractedDelimiters {
            body: expression,
            body_offset: 0,
            delimiters: DelimiterSet::new(default_delimiters),
            source: DelimiterSource::Default,
        };
    };

    // No newline: the whole remainder is the specification and the body is empty
    let (specification, body, body_offset) = match rest.find('\n') {
        Some(index) => (
            &rest[..index],
            &rest[index + 1..],
            HEADER_PREFIX.len() + index + 1,
        ),
        None => (rest, "", expression.len()),
    };

    let (delimiters, source) = parse_specification(specification);

    ExtractedDelimiters {
        body,
        body_offset,
        delimiters,
        source,
    }
}

fn parse_specification(specification: &str) -> (DelimiterSet, DelimiterSource) {
    if let Some(inner) = bracketed_inner(specification) {
        let set = DelimiterSet::new(inner.split(BRACKET_SEPARATOR));
        return (set, DelimiterSource::Bracketed);
    }

    let set = DelimiterSet::new(specification.chars().map(|ch| ch.to_string()));
    (set, DelimiterSource::SingleChar)
}

fn bracketed_inner(specification: &str) -> Option<&str> {
    specification.strip_prefix('[')?.strip_suffix(']')
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEFAULTS: &[&str] = &[",", "\n"];

    fn delimiters_of(expression: &str) -> Vec<String> {
        extract_delimiters(expression, DEFAULTS).delimiters.into_vec()
    }

    #[test]
    fn test_no_header_uses_defaults() {
        let extracted = extract_delimiters("1,2\n3", DEFAULTS);
        assert_eq!(extracted.body, "1,2\n3");
        assert_eq!(extracted.body_offset, 0);
        assert_eq!(extracted.source, DelimiterSource::Default);
        assert_eq!(extracted.delimiters.as_slice(), &[",", "\n"]);
    }

    #[test]
    fn test_single_char_header() {
        let extracted = extract_delimiters("//;\n1;2", DEFAULTS);
        assert_eq!(extracted.body, "1;2");
        assert_eq!(extracted.body_offset, 4);
        assert_eq!(extracted.source, DelimiterSource::SingleChar);
        assert_eq!(extracted.delimiters.as_slice(), &[";", "\n"]);
    }

    #[test]
    fn test_each_char_is_a_delimiter() {
        assert_eq!(delimiters_of("//. <\n1.2 3<4"), vec![".", " ", "<", "\n"]);
    }

    #[test]
    fn test_bracketed_header() {
        let extracted = extract_delimiters("//[***]\n1***2", DEFAULTS);
        assert_eq!(extracted.source, DelimiterSource::Bracketed);
        assert_eq!(extracted.body, "1***2");
        assert_eq!(extracted.delimiters.as_slice(), &["***", "\n"]);
    }

    #[test]
    fn test_multiple_bracketed_delimiters() {
        assert_eq!(
            delimiters_of("//[*][%%][...]\n1"),
            vec!["*", "%%", "...", "\n"]
        );
    }

    #[test]
    fn test_malformed_bracketed_falls_back_to_single_char() {
        let extracted = extract_delimiters("//[*\n1[2*3", DEFAULTS);
        assert_eq!(extracted.source, DelimiterSource::SingleChar);
        assert_eq!(extracted.delimiters.as_slice(), &["[", "*", "\n"]);
    }

    #[test]
    fn test_missing_newline_gives_empty_body() {
        let extracted = extract_delimiters("//;", DEFAULTS);
        assert_eq!(extracted.body, "");
        assert_eq!(extracted.body_offset, 3);
        assert_eq!(extracted.delimiters.as_slice(), &[";", "\n"]);
    }

    #[test]
    fn test_empty_bracketed_delimiter_is_recorded() {
        let extracted = extract_delimiters("//[]\n1\n2", DEFAULTS);
        assert!(extracted.delimiters.has_empty_delimiter());
        assert_eq!(extracted.delimiters.as_slice(), &["\n"]);

        let extracted = extract_delimiters("//[a][]\n1a2", DEFAULTS);
        assert!(extracted.delimiters.has_empty_delimiter());
        assert_eq!(extracted.delimiters.as_slice(), &["a", "\n"]);

        assert!(!extract_delimiters("//[a]\n1a2", DEFAULTS)
            .delimiters
            .has_empty_delimiter());
    }

    #[test]
    fn test_duplicates_keep_first_position() {
        assert_eq!(delimiters_of("//;;\n1"), vec![";", "\n"]);
        assert_eq!(delimiters_of("//[,][;][,]\n1"), vec![",", ";", "\n"]);
    }

    #[test]
    fn test_multibyte_single_char_header() {
        let extracted = extract_delimiters("//é\n1é2", DEFAULTS);
        assert_eq!(extracted.body, "1é2");
        assert_eq!(extracted.body_offset, 5);
        assert_eq!(extracted.delimiters.as_slice(), &["é", "\n"]);
    }

    #[test]
    fn test_set_always_contains_newline() {
        let set = DelimiterSet::new(Vec::<String>::new());
        assert!(set.contains("\n"));
        assert_eq!(set.len(), 1);
        assert!(!set.is_empty());
        assert_eq!(set.to_string(), r#"["\n"]"#);
    }
}
