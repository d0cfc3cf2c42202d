//! SQL tokenizer implementation.

use tracing::trace;

use super::{number, Keyword, Span, Token, TokenKind};
use crate::config::ExponentBase;
use crate::parser::ParseError;

/// A lexer that turns SQL text into tokens.
///
/// All state, including the line counter, lives in the lexer value, so
/// concurrent lexers never interfere.
pub struct Lexer<'a> {
    /// The input source code.
    input: &'a str,
    /// The current byte position.
    pos: usize,
    /// The byte position of the start of the current token.
    start: usize,
    /// The current 1-based line.
    line: usize,
    /// Whether the previous token can end an operand.
    after_operand: bool,
    /// Base applied to numeric exponents.
    exponent: ExponentBase,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            start: 0,
            line: 1,
            after_operand: false,
            exponent: ExponentBase::Decimal,
        }
    }

    /// Sets the base applied to numeric exponents.
    #[must_use]
    pub const fn with_exponent(mut self, exponent: ExponentBase) -> Self {
        self.exponent = exponent;
        self
    }

    /// Returns the current character without advancing.
    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Returns the character after the current one without advancing.
    fn peek_next(&self) -> Option<char> {
        let mut chars = self.input[self.pos..].chars();
        chars.next();
        chars.next()
    }

    /// Advances to the next character and returns it.
    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Skips spaces, tabs and line breaks, counting the latter.
    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            match c {
                ' ' | '\t' => {
                    self.advance();
                }
                '\n' => {
                    self.advance();
                    self.line += 1;
                }
                '\r' => {
                    self.advance();
                    self.eat('\n');
                    self.line += 1;
                }
                _ => break,
            }
        }
    }

    fn make_token(&self, kind: TokenKind) -> Token {
        Token::new(kind, Span::new(self.start, self.pos), self.line)
    }

    fn illegal(&self, found: char) -> ParseError {
        trace!(offset = self.start, line = self.line, ?found, "illegal character");
        ParseError::Lexical {
            found,
            offset: self.start,
            line: self.line,
        }
    }

    /// Scans a keyword, identifier, boolean or null literal.
    ///
    /// The whole word is consumed before the keyword lookup, so a keyword
    /// never matches the prefix of a longer identifier.
    fn scan_word(&mut self) -> Token {
        while self.peek().is_some_and(|c| c.is_alphanumeric() || c == '_') {
            self.advance();
        }

        let text = &self.input[self.start..self.pos];
        let kind = if text.eq_ignore_ascii_case("true") {
            TokenKind::Boolean(true)
        } else if text.eq_ignore_ascii_case("false") {
            TokenKind::Boolean(false)
        } else if text.eq_ignore_ascii_case("null") {
            TokenKind::Null
        } else if let Some(keyword) = Keyword::from_str(text) {
            TokenKind::Keyword(keyword)
        } else {
            TokenKind::Identifier(String::from(text))
        };
        self.make_token(kind)
    }

    fn skip_digits(&mut self, radix: u32) {
        while self.peek().is_some_and(|c| c.is_digit(radix)) {
            self.advance();
        }
    }

    /// Scans a numeric literal, including a sign already consumed.
    fn scan_number(&mut self) -> Result<Token, ParseError> {
        let hex = self.peek() == Some('0')
            && matches!(self.peek_next(), Some('x' | 'X'))
            && self.input[self.pos + 2..]
                .chars()
                .next()
                .is_some_and(|c| c.is_ascii_hexdigit());

        if hex {
            self.advance(); // 0
            self.advance(); // x
            self.skip_digits(16);
        } else {
            self.skip_digits(10);
            if self.peek() == Some('.') && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
                self.advance(); // .
                self.skip_digits(10);
            }
            if matches!(self.peek(), Some('e' | 'E')) && self.exponent_follows() {
                self.advance(); // e
                if matches!(self.peek(), Some('+' | '-')) {
                    self.advance();
                }
                self.skip_digits(10);
            }
        }

        let text = &self.input[self.start..self.pos];
        number::coerce(text, self.exponent)
            .map(|kind| self.make_token(kind))
            .ok_or_else(|| ParseError::InvalidNumber {
                text: String::from(text),
                offset: self.start,
                line: self.line,
            })
    }

    /// Returns true if the `e`/`E` at the current position starts an
    /// exponent rather than a following word.
    fn exponent_follows(&self) -> bool {
        let mut rest = self.input[self.pos + 1..].chars();
        match rest.next() {
            Some(c) if c.is_ascii_digit() => true,
            Some('+' | '-') => rest.next().is_some_and(|c| c.is_ascii_digit()),
            _ => false,
        }
    }

    /// Returns true if the current position starts the digits of a number.
    fn digits_follow(&self) -> bool {
        match self.peek() {
            Some(c) if c.is_ascii_digit() => true,
            Some('.') => self.peek_next().is_some_and(|c| c.is_ascii_digit()),
            _ => false,
        }
    }

    /// Scans a string literal delimited by `quote`, taking the content
    /// verbatim.
    fn scan_string(&mut self, quote: char) -> Result<Token, ParseError> {
        let content_start = self.pos;
        let start_line = self.line;

        loop {
            match self.advance() {
                Some(c) if c == quote => break,
                Some('\n') => self.line += 1,
                Some('\r') => {
                    self.eat('\n');
                    self.line += 1;
                }
                Some(_) => {}
                None => {
                    self.line = start_line;
                    return Err(self.illegal(quote));
                }
            }
        }

        let content = &self.input[content_start..self.pos - quote.len_utf8()];
        Ok(Token::new(
            TokenKind::String(String::from(content)),
            Span::new(self.start, self.pos),
            start_line,
        ))
    }

    /// Scans the next token.
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` if the input at the current position starts no
    /// token.
    pub fn next_token(&mut self) -> Result<Token, ParseError> {
        self.skip_whitespace();
        self.start = self.pos;

        let Some(c) = self.advance() else {
            return Ok(self.make_token(TokenKind::Eof));
        };

        let token = match c {
            '(' => self.make_token(TokenKind::LeftParen),
            ')' => self.make_token(TokenKind::RightParen),
            ',' => self.make_token(TokenKind::Comma),
            ';' => self.make_token(TokenKind::Semicolon),
            '*' => self.make_token(TokenKind::Star),
            '/' => self.make_token(TokenKind::Slash),
            '=' => self.make_token(TokenKind::Eq),
            '<' => {
                if self.eat('=') {
                    self.make_token(TokenKind::LtEq)
                } else if self.eat('>') {
                    self.make_token(TokenKind::NotEq)
                } else {
                    self.make_token(TokenKind::Lt)
                }
            }
            '>' => {
                if self.eat('=') {
                    self.make_token(TokenKind::GtEq)
                } else {
                    self.make_token(TokenKind::Gt)
                }
            }
            '!' => {
                if self.eat('=') {
                    self.make_token(TokenKind::NotEq)
                } else {
                    return Err(self.illegal(c));
                }
            }

            // A sign folds into the literal only where no operand precedes it
            '+' | '-' if !self.after_operand && self.digits_follow() => self.scan_number()?,
            '+' => self.make_token(TokenKind::Plus),
            '-' => self.make_token(TokenKind::Minus),

            '.' if self.peek().is_some_and(|c| c.is_ascii_digit()) => {
                self.pos = self.start;
                self.scan_number()?
            }
            '.' => self.make_token(TokenKind::Dot),

            '\'' | '"' => self.scan_string(c)?,

            c if c.is_ascii_digit() => {
                self.pos = self.start;
                self.scan_number()?
            }

            c if c.is_alphabetic() || c == '_' => {
                self.pos = self.start;
                self.scan_word()
            }

            _ => return Err(self.illegal(c)),
        };

        self.after_operand = token.kind.ends_operand();
        Ok(token)
    }

    /// Tokenizes the entire input. The returned vector always ends with an
    /// `Eof` token.
    ///
    /// # Errors
    ///
    /// Returns the first lexical error in the input.
    pub fn tokenize(mut self) -> Result<Vec<Token>, ParseError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let is_eof = token.is_eof();
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        trace!(tokens = tokens.len(), lines = self.line, "tokenized input");
        Ok(tokens)
    }
}
