//! Token types for the SQL lexer.

use core::fmt;

use super::Span;

/// Reserved SQL keywords.
///
/// Any word that is not listed here is lexed as an identifier, so names such
/// as `table`, `count` or `integer` remain usable as table, function and type
/// names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Keyword {
    // Queries
    Select,
    Values,
    Distinct,
    All,
    From,
    Where,
    Group,
    By,
    Having,
    Order,
    Asc,
    Desc,
    Collate,
    Nulls,
    First,
    Last,
    Limit,
    Offset,

    // Common table expressions
    With,
    Recursive,
    As,
    Materialized,

    // Set operations
    Union,
    Intersect,
    Except,

    // Joins
    Natural,
    Left,
    Right,
    Full,
    Outer,
    Inner,
    Cross,
    Join,
    On,
    Using,
    Indexed,

    // Data manipulation
    Insert,
    Replace,
    Into,
    Default,
    Update,
    Set,
    Returning,

    // Conflict resolution
    Abort,
    Fail,
    Ignore,
    Rollback,

    // Operators
    And,
    Or,
    Not,
    In,
    Is,
    Like,
    Glob,
    Regexp,
    Match,
    Between,
    Exists,
    Cast,
    Filter,

    // Date/time values
    CurrentTime,
    CurrentDate,
    CurrentTimestamp,
}

impl Keyword {
    /// Attempts to parse a keyword from a whole word (case-insensitive).
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        let keyword = match s.to_ascii_uppercase().as_str() {
            "SELECT" => Self::Select,
            "VALUES" => Self::Values,
            "DISTINCT" => Self::Distinct,
            "ALL" => Self::All,
            "FROM" => Self::From,
            "WHERE" => Self::Where,
            "GROUP" => Self::Group,
            "BY" => Self::By,
            "HAVING" => Self::Having,
            "ORDER" => Self::Order,
            "ASC" => Self::Asc,
            "DESC" => Self::Desc,
            "COLLATE" => Self::Collate,
            "NULLS" => Self::Nulls,
            "FIRST" => Self::First,
            "LAST" => Self::Last,
            "LIMIT" => Self::Limit,
            "OFFSET" => Self::Offset,
            "WITH" => Self::With,
            "RECURSIVE" => Self::Recursive,
            "AS" => Self::As,
            "MATERIALIZED" => Self::Materialized,
            "UNION" => Self::Union,
            "INTERSECT" => Self::Intersect,
            "EXCEPT" => Self::Except,
            "NATURAL" => Self::Natural,
            "LEFT" => Self::Left,
            "RIGHT" => Self::Right,
            "FULL" => Self::Full,
            "OUTER" => Self::Outer,
            "INNER" => Self::Inner,
            "CROSS" => Self::Cross,
            "JOIN" => Self::Join,
            "ON" => Self::On,
            "USING" => Self::Using,
            "INDEXED" => Self::Indexed,
            "INSERT" => Self::Insert,
            "REPLACE" => Self::Replace,
            "INTO" => Self::Into,
            "DEFAULT" => Self::Default,
            "UPDATE" => Self::Update,
            "SET" => Self::Set,
            "RETURNING" => Self::Returning,
            "ABORT" => Self::Abort,
            "FAIL" => Self::Fail,
            "IGNORE" => Self::Ignore,
            "ROLLBACK" => Self::Rollback,
            "AND" => Self::And,
            "OR" => Self::Or,
            "NOT" => Self::Not,
            "IN" => Self::In,
            "IS" => Self::Is,
            "LIKE" => Self::Like,
            "GLOB" => Self::Glob,
            "REGEXP" => Self::Regexp,
            "MATCH" => Self::Match,
            "BETWEEN" => Self::Between,
            "EXISTS" => Self::Exists,
            "CAST" => Self::Cast,
            "FILTER" => Self::Filter,
            "CURRENT_TIME" => Self::CurrentTime,
            "CURRENT_DATE" => Self::CurrentDate,
            "CURRENT_TIMESTAMP" => Self::CurrentTimestamp,
            _ => return None,
        };
        Some(keyword)
    }

    /// Returns the keyword as it is spelled in SQL.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Select => "SELECT",
            Self::Values => "VALUES",
            Self::Distinct => "DISTINCT",
            Self::All => "ALL",
            Self::From => "FROM",
            Self::Where => "WHERE",
            Self::Group => "GROUP",
            Self::By => "BY",
            Self::Having => "HAVING",
            Self::Order => "ORDER",
            Self::Asc => "ASC",
            Self::Desc => "DESC",
            Self::Collate => "COLLATE",
            Self::Nulls => "NULLS",
            Self::First => "FIRST",
            Self::Last => "LAST",
            Self::Limit => "LIMIT",
            Self::Offset => "OFFSET",
            Self::With => "WITH",
            Self::Recursive => "RECURSIVE",
            Self::As => "AS",
            Self::Materialized => "MATERIALIZED",
            Self::Union => "UNION",
            Self::Intersect => "INTERSECT",
            Self::Except => "EXCEPT",
            Self::Natural => "NATURAL",
            Self::Left => "LEFT",
            Self::Right => "RIGHT",
            Self::Full => "FULL",
            Self::Outer => "OUTER",
            Self::Inner => "INNER",
            Self::Cross => "CROSS",
            Self::Join => "JOIN",
            Self::On => "ON",
            Self::Using => "USING",
            Self::Indexed => "INDEXED",
            Self::Insert => "INSERT",
            Self::Replace => "REPLACE",
            Self::Into => "INTO",
            Self::Default => "DEFAULT",
            Self::Update => "UPDATE",
            Self::Set => "SET",
            Self::Returning => "RETURNING",
            Self::Abort => "ABORT",
            Self::Fail => "FAIL",
            Self::Ignore => "IGNORE",
            Self::Rollback => "ROLLBACK",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Not => "NOT",
            Self::In => "IN",
            Self::Is => "IS",
            Self::Like => "LIKE",
            Self::Glob => "GLOB",
            Self::Regexp => "REGEXP",
            Self::Match => "MATCH",
            Self::Between => "BETWEEN",
            Self::Exists => "EXISTS",
            Self::Cast => "CAST",
            Self::Filter => "FILTER",
            Self::CurrentTime => "CURRENT_TIME",
            Self::CurrentDate => "CURRENT_DATE",
            Self::CurrentTimestamp => "CURRENT_TIMESTAMP",
        }
    }
}

/// The kind of token, carrying the coerced value for literals.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TokenKind {
    // Literals
    /// Integer literal (decimal or `0x` hexadecimal).
    Integer(i64),
    /// Floating-point literal.
    Float(f64),
    /// Quoted string literal, without its delimiters.
    String(String),
    /// `TRUE` or `FALSE`.
    Boolean(bool),
    /// `NULL`.
    Null,

    /// Identifier (table, column, function, alias or type name).
    Identifier(String),
    /// Reserved keyword.
    Keyword(Keyword),

    // Operators
    /// =
    Eq,
    /// <> or !=
    NotEq,
    /// <=
    LtEq,
    /// >=
    GtEq,
    /// <
    Lt,
    /// >
    Gt,
    /// +
    Plus,
    /// -
    Minus,
    /// *
    Star,
    /// /
    Slash,

    // Delimiters
    /// (
    LeftParen,
    /// )
    RightParen,
    /// ,
    Comma,
    /// ;
    Semicolon,
    /// .
    Dot,

    /// End of input.
    Eof,
}

impl TokenKind {
    /// Returns true if a token of this kind can be the last token of an
    /// operand, so that a following `+` or `-` must be a binary operator.
    #[must_use]
    pub const fn ends_operand(&self) -> bool {
        matches!(
            self,
            Self::Integer(_)
                | Self::Float(_)
                | Self::String(_)
                | Self::Boolean(_)
                | Self::Null
                | Self::Identifier(_)
                | Self::RightParen
                | Self::Keyword(
                    Keyword::CurrentTime | Keyword::CurrentDate | Keyword::CurrentTimestamp
                )
        )
    }

    /// Returns a short, static description of this kind of token.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Integer(_) | Self::Float(_) => "number",
            Self::String(_) => "string",
            Self::Boolean(_) => "boolean",
            Self::Null => "NULL",
            Self::Identifier(_) => "identifier",
            Self::Keyword(kw) => kw.as_str(),
            Self::Eq => "`=`",
            Self::NotEq => "`<>`",
            Self::LtEq => "`<=`",
            Self::GtEq => "`>=`",
            Self::Lt => "`<`",
            Self::Gt => "`>`",
            Self::Plus => "`+`",
            Self::Minus => "`-`",
            Self::Star => "`*`",
            Self::Slash => "`/`",
            Self::LeftParen => "`(`",
            Self::RightParen => "`)`",
            Self::Comma => "`,`",
            Self::Semicolon => "`;`",
            Self::Dot => "`.`",
            Self::Eof => "end of input",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "number {n}"),
            Self::Float(n) => write!(f, "number {n}"),
            Self::String(s) => write!(f, "string '{s}'"),
            Self::Boolean(b) => write!(f, "boolean {}", if *b { "TRUE" } else { "FALSE" }),
            Self::Identifier(name) => write!(f, "identifier `{name}`"),
            Self::Keyword(kw) => write!(f, "keyword {}", kw.as_str()),
            other => f.write_str(other.name()),
        }
    }
}

/// A token with its location in the source text.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// Byte range in the source.
    pub span: Span,
    /// 1-based line the token starts on.
    pub line: usize,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub const fn new(kind: TokenKind, span: Span, line: usize) -> Self {
        Self { kind, span, line }
    }

    /// Returns true if this is the end-of-input token.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }

    /// Returns true if this is the given keyword.
    #[must_use]
    pub fn is_keyword(&self, keyword: Keyword) -> bool {
        matches!(&self.kind, TokenKind::Keyword(kw) if *kw == keyword)
    }
}
