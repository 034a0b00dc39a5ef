//! Shared primitive types used across the evaluation stages.

pub mod span;
pub mod text;

pub use span::{Position, SourceMap, Span, Spanned};
pub use text::{is_blank, is_space, trim_space};
