//! # sqltree-core
//!
//! A SQL tokenizer and parser producing an immutable syntax tree.
//!
//! This crate provides:
//! - A hand-written tokenizer that coerces literals and tracks lines
//! - A recursive descent parser with Pratt expression parsing
//! - An AST where every operator is one generic [`ast::Operation`] node
//!
//! ## Parsing
//!
//! ```rust
//! use sqltree_core::ast::{Node, Table};
//! use sqltree_core::{Parsed, Statement};
//!
//! let parsed = sqltree_core::parse("SELECT * FROM person").unwrap();
//! let Parsed::Statement(Statement::Select(select)) = parsed else {
//!     panic!("expected a single SELECT");
//! };
//! let core = select.select_core.as_select_core().unwrap();
//! assert_eq!(core.tables, vec![Node::Table(Table::new("person"))]);
//! ```
//!
//! Several `;`-separated statements come back as [`Parsed::Sequence`]:
//!
//! ```rust
//! let parsed = sqltree_core::parse("SELECT a FROM t; UPDATE t SET a = 1;").unwrap();
//! assert_eq!(parsed.statement_count(), 2);
//! ```
//!
//! ## Errors
//!
//! The first lexical or syntax error aborts the parse:
//!
//! ```rust
//! let err = sqltree_core::parse("SELECT a, FROM t").unwrap_err();
//! assert_eq!(err.line(), 1);
//! assert_eq!(err.offset(), 10);
//! ```

pub mod ast;
pub mod config;
pub mod lexer;
pub mod parser;

pub use ast::{Node, Parsed, Statement};
pub use config::{ExponentBase, ParserConfig};
pub use lexer::{Keyword, Lexer, Span, Token, TokenKind};
pub use parser::{ParseError, Parser};

/// Parses SQL text with the default configuration.
///
/// # Errors
///
/// Returns the first lexical or syntax error in `sql`.
pub fn parse(sql: &str) -> Result<Parsed, ParseError> {
    Parser::new(sql).parse()
}

/// Parses SQL text with an explicit configuration.
///
/// # Errors
///
/// Returns the first lexical or syntax error in `sql`.
pub fn parse_with(sql: &str, config: ParserConfig) -> Result<Parsed, ParseError> {
    Parser::with_config(sql, config).parse()
}
