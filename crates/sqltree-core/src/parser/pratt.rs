//! Pratt expression parser tables for operator precedence.
//!
//! Tiers, lowest to highest, all left-associative:
//!
//! | tier | operators |
//! |---|---|
//! | 1 | `OR` |
//! | 2 | `AND` |
//! | 3 | prefix `NOT` |
//! | 4 | `= <> != <= >= < >`, `IN`, `IS`, `LIKE`, `GLOB`, `REGEXP`, `MATCH`, `BETWEEN` |
//! | 5 | `+ -` |
//! | 6 | `* /` |
//! | 7 | postfix `COLLATE` |
//! | 8 | prefix `+ -` |

use crate::ast::Tag;
use crate::lexer::{Keyword, TokenKind};

/// Right binding power of prefix `NOT`.
pub const NOT_PREFIX: u8 = 5;

/// Left binding power of postfix `COLLATE`.
pub const COLLATE: u8 = 13;

/// Right binding power of prefix `+` and `-`.
pub const SIGN_PREFIX: u8 = 15;

/// Returns the prefix binding power and tag of a prefix operator.
#[must_use]
pub const fn prefix_operator(kind: &TokenKind) -> Option<(u8, Tag)> {
    match kind {
        TokenKind::Plus => Some((SIGN_PREFIX, Tag::Plus)),
        TokenKind::Minus => Some((SIGN_PREFIX, Tag::Minus)),
        TokenKind::Keyword(Keyword::Not) => Some((NOT_PREFIX, Tag::Not)),
        _ => None,
    }
}

/// Returns the infix binding power for a token.
///
/// Returns `(left_bp, right_bp)` where a higher value binds tighter and
/// `left_bp < right_bp` makes the operator left-associative.
///
/// Returns `None` if the token is not an infix operator.
#[must_use]
pub const fn infix_binding_power(kind: &TokenKind) -> Option<(u8, u8)> {
    match kind {
        TokenKind::Keyword(Keyword::Or) => Some((1, 2)),

        TokenKind::Keyword(Keyword::And) => Some((3, 4)),

        TokenKind::Eq
        | TokenKind::NotEq
        | TokenKind::LtEq
        | TokenKind::GtEq
        | TokenKind::Lt
        | TokenKind::Gt
        | TokenKind::Keyword(
            Keyword::In
            | Keyword::Is
            | Keyword::Like
            | Keyword::Glob
            | Keyword::Regexp
            | Keyword::Match
            | Keyword::Between,
        ) => Some((7, 8)),

        TokenKind::Plus | TokenKind::Minus => Some((9, 10)),

        TokenKind::Star | TokenKind::Slash => Some((11, 12)),

        _ => None,
    }
}

/// Converts a token to the tag of its plain binary operation.
///
/// `BETWEEN` has no tag of its own: it expands into comparisons.
#[must_use]
pub const fn infix_tag(kind: &TokenKind) -> Option<Tag> {
    match kind {
        TokenKind::Plus => Some(Tag::Plus),
        TokenKind::Minus => Some(Tag::Minus),
        TokenKind::Star => Some(Tag::Multiplication),
        TokenKind::Slash => Some(Tag::Division),
        TokenKind::Eq => Some(Tag::Equal),
        TokenKind::NotEq => Some(Tag::Difference),
        TokenKind::LtEq => Some(Tag::LessOrEqual),
        TokenKind::GtEq => Some(Tag::MoreOrEqual),
        TokenKind::Lt => Some(Tag::Less),
        TokenKind::Gt => Some(Tag::More),
        TokenKind::Keyword(Keyword::And) => Some(Tag::And),
        TokenKind::Keyword(Keyword::Or) => Some(Tag::Or),
        TokenKind::Keyword(Keyword::In) => Some(Tag::In),
        TokenKind::Keyword(Keyword::Is) => Some(Tag::Is),
        TokenKind::Keyword(Keyword::Like) => Some(Tag::Like),
        TokenKind::Keyword(Keyword::Glob) => Some(Tag::Glob),
        TokenKind::Keyword(Keyword::Regexp) => Some(Tag::Regexp),
        TokenKind::Keyword(Keyword::Match) => Some(Tag::Match),
        _ => None,
    }
}

/// Returns true for operators that accept a `NOT` prefix in infix position
/// (`NOT IN`, `NOT LIKE`, `NOT BETWEEN`, ...).
#[must_use]
pub const fn is_negatable(kind: &TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Keyword(
            Keyword::In
                | Keyword::Like
                | Keyword::Glob
                | Keyword::Regexp
                | Keyword::Match
                | Keyword::Between
        )
    )
}
