//! SQL Lexer/Tokenizer
//!
//! A hand-written, single-pass lexer producing typed tokens with coerced
//! literal values, byte spans and line numbers. It has no knowledge of the
//! grammar.

pub mod number;
mod span;
mod token;
mod tokenizer;

pub use span::Span;
pub use token::{Keyword, Token, TokenKind};
pub use tokenizer::Lexer;
