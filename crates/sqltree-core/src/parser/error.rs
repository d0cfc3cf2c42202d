//! Parser error types.

use crate::lexer::{Span, TokenKind};

/// An error raised while tokenizing or parsing SQL text.
///
/// The first error aborts the whole parse: no partial tree is ever returned.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    /// A character that starts no token, including an unterminated quote.
    #[error("illegal character {found:?} at line {line}, offset {offset}")]
    Lexical {
        /// The offending character.
        found: char,
        /// Byte offset of the character.
        offset: usize,
        /// 1-based line number.
        line: usize,
    },

    /// A numeric literal whose value is out of range.
    #[error("invalid numeric literal `{text}` at line {line}, offset {offset}")]
    InvalidNumber {
        /// The literal as written.
        text: String,
        /// Byte offset of the literal.
        offset: usize,
        /// 1-based line number.
        line: usize,
    },

    /// A token that fits no production at this point.
    #[error(
        "unexpected {found} at line {line}, offset {}: expected {}",
        .span.start,
        .expected.join(", ")
    )]
    Syntax {
        /// The token that was found.
        found: TokenKind,
        /// Location of the token.
        span: Span,
        /// 1-based line number of the token.
        line: usize,
        /// Descriptions of the tokens that would have been accepted.
        expected: Vec<&'static str>,
    },

    /// The input nests deeper than the configured limit.
    #[error("nesting deeper than {limit} levels at line {line}, offset {}", .span.start)]
    TooDeep {
        /// The configured limit.
        limit: usize,
        /// Location of the token that exceeded it.
        span: Span,
        /// 1-based line number.
        line: usize,
    },
}

impl ParseError {
    /// Returns the byte offset the error points at.
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::Lexical { offset, .. } | Self::InvalidNumber { offset, .. } => *offset,
            Self::Syntax { span, .. } | Self::TooDeep { span, .. } => span.start,
        }
    }

    /// Returns the 1-based line the error points at.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Lexical { line, .. }
            | Self::InvalidNumber { line, .. }
            | Self::Syntax { line, .. }
            | Self::TooDeep { line, .. } => *line,
        }
    }

    /// Returns true for errors raised by the tokenizer.
    #[must_use]
    pub const fn is_lexical(&self) -> bool {
        matches!(self, Self::Lexical { .. } | Self::InvalidNumber { .. })
    }
}
