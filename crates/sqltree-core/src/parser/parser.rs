//! SQL Parser implementation.

use tracing::{debug, trace};

use super::error::ParseError;
use super::pratt::{infix_binding_power, infix_tag, is_negatable, prefix_operator, COLLATE};
use crate::ast::{
    Alias, All, Alternative, Arguments, Assignment, CallArguments, Column, CommonTableExpression,
    Index, Insert, JoinConstraint, Limit, Literal, Materialized, Node, NullOrdering, Operation,
    Operator, OrderDirection, OrderingTerm, Parsed, Reduction, Select, SelectCore, Statement,
    Table, Tag, Update, Values, With,
};
use crate::config::ParserConfig;
use crate::lexer::{Keyword, Lexer, Span, Token, TokenKind};

/// Returned by [`Parser::current`] once the token vector is exhausted.
static EOF: Token = Token::new(TokenKind::Eof, Span::new(0, 0), 1);

/// Statement keywords accepted at the start of a statement.
const STATEMENT_START: &[&str] = &["WITH", "SELECT", "VALUES", "INSERT", "REPLACE", "UPDATE"];

/// Nesting levels charged for entering a sub-select. A sub-select runs
/// through the whole statement grammar and costs far more stack than a
/// parenthesized expression.
const SUBQUERY_DEPTH: usize = 4;

/// SQL Parser.
///
/// The input is tokenized on the first call to [`Parser::parse`] or
/// [`Parser::parse_statement`]; a parser is consumed by a single call.
pub struct Parser<'a> {
    input: &'a str,
    config: ParserConfig,
    tokens: Vec<Token>,
    pos: usize,
    /// Current nesting depth, bounded by `config.max_depth`.
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Creates a new parser for the given input.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self::with_config(input, ParserConfig::default())
    }

    /// Creates a new parser with an explicit configuration.
    #[must_use]
    pub const fn with_config(input: &'a str, config: ParserConfig) -> Self {
        Self {
            input,
            config,
            tokens: Vec::new(),
            pos: 0,
            depth: 0,
        }
    }

    /// Parses every `;`-separated statement of the input.
    ///
    /// A single statement yields [`Parsed::Statement`], several yield
    /// [`Parsed::Sequence`] in source order. A trailing `;` is allowed.
    ///
    /// # Errors
    ///
    /// Returns the first lexical or syntax error; no partial tree is kept.
    pub fn parse(&mut self) -> Result<Parsed, ParseError> {
        let result = self.parse_statement_list();
        match &result {
            Ok(parsed) => debug!(statements = parsed.statement_count(), "parsed input"),
            Err(error) => debug!(%error, "failed to parse input"),
        }
        result
    }

    /// Parses exactly one statement, optionally followed by `;`.
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` if the input is not exactly one valid
    /// statement.
    pub fn parse_statement(&mut self) -> Result<Statement, ParseError> {
        self.load()?;
        let statement = self.parse_one()?;
        self.eat(&TokenKind::Semicolon);
        if !self.current().is_eof() {
            return Err(self.error(&[TokenKind::Eof.name()]));
        }
        Ok(statement)
    }

    fn parse_statement_list(&mut self) -> Result<Parsed, ParseError> {
        self.load()?;
        let mut statements = vec![self.parse_one()?];
        while self.eat(&TokenKind::Semicolon) {
            if self.current().is_eof() {
                break;
            }
            statements.push(self.parse_one()?);
        }
        if !self.current().is_eof() {
            return Err(self.error(&[TokenKind::Semicolon.name(), TokenKind::Eof.name()]));
        }
        Ok(Parsed::from(statements))
    }

    fn load(&mut self) -> Result<(), ParseError> {
        if self.tokens.is_empty() {
            self.tokens = Lexer::new(self.input)
                .with_exponent(self.config.exponent)
                .tokenize()?;
            self.pos = 0;
        }
        Ok(())
    }

    /// Parses one statement, dispatching on its first keyword.
    fn parse_one(&mut self) -> Result<Statement, ParseError> {
        let with_clause = self.parse_optional_with()?;

        let statement = match &self.current().kind {
            TokenKind::Keyword(Keyword::Select | Keyword::Values) => {
                Statement::Select(self.parse_select_after_with(with_clause)?)
            }
            TokenKind::Keyword(Keyword::Insert) => {
                Statement::Insert(self.parse_insert(with_clause)?)
            }
            TokenKind::Keyword(Keyword::Replace) => {
                Statement::Replace(self.parse_insert(with_clause)?)
            }
            TokenKind::Keyword(Keyword::Update) => {
                Statement::Update(self.parse_update(with_clause)?)
            }
            _ if with_clause.is_some() => return Err(self.error(&STATEMENT_START[1..])),
            _ => return Err(self.error(STATEMENT_START)),
        };

        trace!(kind = statement.keyword(), "parsed statement");
        Ok(statement)
    }

    // --- SELECT ---

    /// Parses a full select: `[with] select-core [ORDER BY ...] [LIMIT ...]`.
    fn parse_select(&mut self) -> Result<Select, ParseError> {
        let with_clause = self.parse_optional_with()?;
        self.parse_select_after_with(with_clause)
    }

    fn parse_select_after_with(&mut self, with_clause: Option<With>) -> Result<Select, ParseError> {
        let select_core = self.parse_compound_select()?;

        let order_by = if self.eat_keyword(Keyword::Order) {
            self.expect_keyword(Keyword::By)?;
            Some(self.parse_ordering_terms()?)
        } else {
            None
        };

        let limit = if self.eat_keyword(Keyword::Limit) {
            Some(self.parse_limit()?)
        } else {
            None
        };

        Ok(Select {
            with_clause,
            select_core,
            order_by,
            limit,
        })
    }

    /// Parses a left-associative chain of select bodies joined by set
    /// operators.
    fn parse_compound_select(&mut self) -> Result<Node, ParseError> {
        let mut node = self.parse_select_core()?;

        while let Some(tags) = self.parse_set_operator() {
            let right = self.parse_select_core()?;
            node = Operation::new(Operator::new(tags), Some(node), Some(right)).into();
        }

        Ok(node)
    }

    fn parse_set_operator(&mut self) -> Option<Vec<Tag>> {
        if self.eat_keyword(Keyword::Union) {
            if self.eat_keyword(Keyword::All) {
                Some(vec![Tag::Union, Tag::All])
            } else {
                Some(vec![Tag::Union])
            }
        } else if self.eat_keyword(Keyword::Intersect) {
            Some(vec![Tag::Intersect])
        } else if self.eat_keyword(Keyword::Except) {
            Some(vec![Tag::Except])
        } else {
            None
        }
    }

    /// Parses a `SELECT ... FROM ...` body or a `VALUES` row set.
    fn parse_select_core(&mut self) -> Result<Node, ParseError> {
        if self.eat_keyword(Keyword::Values) {
            return Ok(Node::Values(self.parse_values_rows()?));
        }
        if !self.eat_keyword(Keyword::Select) {
            return Err(self.error(&["SELECT", "VALUES"]));
        }

        let reduction = if self.eat_keyword(Keyword::Distinct) {
            Some(Reduction::Distinct)
        } else if self.eat_keyword(Keyword::All) {
            Some(Reduction::All)
        } else {
            None
        };

        let result_columns = self.parse_result_columns()?;

        self.expect_keyword(Keyword::From)?;
        let tables = self.parse_table_list()?;

        let where_clause = if self.eat_keyword(Keyword::Where) {
            Some(self.parse_expression(0)?)
        } else {
            None
        };

        let group_by = if self.eat_keyword(Keyword::Group) {
            self.expect_keyword(Keyword::By)?;
            Some(self.parse_expression_list()?)
        } else {
            None
        };

        let having = if self.eat_keyword(Keyword::Having) {
            Some(self.parse_expression(0)?)
        } else {
            None
        };

        Ok(SelectCore {
            reduction,
            result_columns,
            tables,
            where_clause,
            group_by,
            having,
        }
        .into())
    }

    /// Parses `(exprs), (exprs), ...` after `VALUES`.
    fn parse_values_rows(&mut self) -> Result<Values, ParseError> {
        let mut rows = vec![];
        loop {
            self.expect(&TokenKind::LeftParen)?;
            rows.push(self.parse_expression_list()?);
            self.expect(&TokenKind::RightParen)?;
            if !self.eat(&TokenKind::Comma) {
                break;
            }
        }
        Ok(Values { rows })
    }

    /// Parses a comma-separated list of result columns.
    fn parse_result_columns(&mut self) -> Result<Vec<Node>, ParseError> {
        let mut columns = vec![];
        loop {
            columns.push(self.parse_result_column()?);
            if !self.eat(&TokenKind::Comma) {
                break;
            }
        }
        Ok(columns)
    }

    /// Parses `*`, `t.*`, `s.t.*`, or an expression with an optional alias.
    fn parse_result_column(&mut self) -> Result<Node, ParseError> {
        if self.eat(&TokenKind::Star) {
            return Ok(All::default().into());
        }

        if let TokenKind::Identifier(first) = &self.current().kind {
            if self.peek_is(1, &TokenKind::Dot) && self.peek_is(2, &TokenKind::Star) {
                let table = Table::new(first.clone());
                self.pos += 3;
                return Ok(All { table: Some(table) }.into());
            }
            if let (TokenKind::Identifier(second), true, true) = (
                self.peek_kind(2),
                self.peek_is(3, &TokenKind::Dot),
                self.peek_is(4, &TokenKind::Star),
            ) {
                if self.peek_is(1, &TokenKind::Dot) {
                    let table = Table::qualified(first.clone(), second.clone());
                    self.pos += 5;
                    return Ok(All { table: Some(table) }.into());
                }
            }
        }

        let expr = self.parse_expression(0)?;

        let explicit = self.eat_keyword(Keyword::As);
        let alias = match &self.current().kind {
            TokenKind::Identifier(name) | TokenKind::String(name) => Some(name.clone()),
            _ if explicit => return Err(self.error(&["identifier", "string"])),
            _ => None,
        };

        Ok(match alias {
            Some(name) => {
                self.advance();
                Alias::new(expr, name).into()
            }
            None => expr,
        })
    }

    // --- FROM ---

    /// Parses a comma-separated list of tables, each with its join chain.
    fn parse_table_list(&mut self) -> Result<Vec<Node>, ParseError> {
        let mut tables = vec![];
        loop {
            tables.push(self.parse_table()?);
            if !self.eat(&TokenKind::Comma) {
                break;
            }
        }
        Ok(tables)
    }

    /// Parses a table primary followed by any number of joins, folded left.
    fn parse_table(&mut self) -> Result<Node, ParseError> {
        let mut table = self.parse_table_primary()?;

        while let Some(qualifiers) = self.parse_join_operator()? {
            let right = self.parse_table_primary()?;
            let constraint = self.parse_join_constraint()?;
            table =
                Operation::new(Operator::join(&qualifiers, constraint), Some(table), Some(right))
                    .into();
        }

        Ok(table)
    }

    /// Parses a named table, a parenthesized sub-select or a parenthesized
    /// table list.
    fn parse_table_primary(&mut self) -> Result<Node, ParseError> {
        if self.eat(&TokenKind::LeftParen) {
            if self.check_keyword(Keyword::Select) || self.check_keyword(Keyword::Values) {
                let select = self.nested_by(SUBQUERY_DEPTH, Self::parse_compound_select)?;
                self.expect(&TokenKind::RightParen)?;
                return Ok(match self.parse_optional_alias()? {
                    Some(alias) => Alias::new(select, alias).into(),
                    None => select,
                });
            }
            let tables = self.nested(Self::parse_table_list)?;
            self.expect(&TokenKind::RightParen)?;
            return Ok(Node::Tables(tables));
        }

        let table = self.parse_table_name()?;
        let alias = self.parse_optional_alias()?;

        let mut node = if self.eat_keyword(Keyword::Indexed) {
            self.expect_keyword(Keyword::By)?;
            let name = self.expect_identifier()?;
            Node::Index(Index {
                table,
                name: Some(name),
            })
        } else if self.check_keyword(Keyword::Not) && self.peek_is_keyword(1, Keyword::Indexed) {
            self.pos += 2;
            Node::Index(Index { table, name: None })
        } else {
            Node::Table(table)
        };

        if let Some(alias) = alias {
            node = Alias::new(node, alias).into();
        }
        Ok(node)
    }

    /// Parses `[schema.]name`.
    fn parse_table_name(&mut self) -> Result<Table, ParseError> {
        let first = self.expect_identifier()?;
        if self.eat(&TokenKind::Dot) {
            let name = self.expect_identifier()?;
            Ok(Table::qualified(first, name))
        } else {
            Ok(Table::new(first))
        }
    }

    /// Parses `AS name` or a bare identifier used as an implicit alias.
    fn parse_optional_alias(&mut self) -> Result<Option<String>, ParseError> {
        if self.eat_keyword(Keyword::As) {
            return self.expect_identifier().map(Some);
        }
        if let TokenKind::Identifier(name) = &self.current().kind {
            let name = name.clone();
            self.advance();
            return Ok(Some(name));
        }
        Ok(None)
    }

    /// Parses a join operator and returns its qualifiers in source order.
    fn parse_join_operator(&mut self) -> Result<Option<Vec<Tag>>, ParseError> {
        let mut qualifiers = vec![];

        if self.eat_keyword(Keyword::Cross) {
            qualifiers.push(Tag::Cross);
        } else {
            if self.eat_keyword(Keyword::Natural) {
                qualifiers.push(Tag::Natural);
            }
            if self.eat_keyword(Keyword::Left) {
                qualifiers.push(Tag::Left);
            } else if self.eat_keyword(Keyword::Right) {
                qualifiers.push(Tag::Right);
            } else if self.eat_keyword(Keyword::Full) {
                qualifiers.push(Tag::Full);
            } else if self.eat_keyword(Keyword::Inner) {
                qualifiers.push(Tag::Inner);
            }
            if matches!(qualifiers.last(), Some(Tag::Left | Tag::Right | Tag::Full))
                && self.eat_keyword(Keyword::Outer)
            {
                qualifiers.push(Tag::Outer);
            }
        }

        if self.eat_keyword(Keyword::Join) {
            Ok(Some(qualifiers))
        } else if qualifiers.is_empty() {
            Ok(None)
        } else {
            Err(self.error(&["JOIN"]))
        }
    }

    /// Parses `ON expr`, `USING (cols)` or nothing.
    fn parse_join_constraint(&mut self) -> Result<Option<JoinConstraint>, ParseError> {
        if self.eat_keyword(Keyword::On) {
            Ok(Some(JoinConstraint::On(self.parse_expression(0)?)))
        } else if self.eat_keyword(Keyword::Using) {
            self.expect(&TokenKind::LeftParen)?;
            let columns = self.parse_identifier_list()?;
            self.expect(&TokenKind::RightParen)?;
            Ok(Some(JoinConstraint::Using(columns)))
        } else {
            Ok(None)
        }
    }

    // --- ORDER BY / LIMIT ---

    /// Parses a comma-separated list of ordering terms.
    fn parse_ordering_terms(&mut self) -> Result<Vec<OrderingTerm>, ParseError> {
        let mut terms = vec![];
        loop {
            let (expr, collation) = split_collation(self.parse_expression(0)?);

            let direction = if self.eat_keyword(Keyword::Asc) {
                Some(OrderDirection::Asc)
            } else if self.eat_keyword(Keyword::Desc) {
                Some(OrderDirection::Desc)
            } else {
                None
            };

            let nulls = if self.eat_keyword(Keyword::Nulls) {
                if self.eat_keyword(Keyword::First) {
                    Some(NullOrdering::First)
                } else if self.eat_keyword(Keyword::Last) {
                    Some(NullOrdering::Last)
                } else {
                    return Err(self.error(&["FIRST", "LAST"]));
                }
            } else {
                None
            };

            terms.push(OrderingTerm {
                expr,
                collation,
                direction,
                nulls,
            });

            if !self.eat(&TokenKind::Comma) {
                break;
            }
        }
        Ok(terms)
    }

    /// Parses the operands after `LIMIT`. In the comma form the first
    /// operand is the offset.
    fn parse_limit(&mut self) -> Result<Limit, ParseError> {
        let first = self.parse_expression(0)?;

        if self.eat_keyword(Keyword::Offset) {
            let offset = self.parse_expression(0)?;
            Ok(Limit {
                limit: first,
                offset: Some(offset),
            })
        } else if self.eat(&TokenKind::Comma) {
            let limit = self.parse_expression(0)?;
            Ok(Limit {
                limit,
                offset: Some(first),
            })
        } else {
            Ok(Limit {
                limit: first,
                offset: None,
            })
        }
    }

    // --- WITH ---

    fn parse_optional_with(&mut self) -> Result<Option<With>, ParseError> {
        if !self.eat_keyword(Keyword::With) {
            return Ok(None);
        }

        let recursive = self.eat_keyword(Keyword::Recursive);
        let mut ctes = vec![];
        loop {
            ctes.push(self.parse_cte()?);
            if !self.eat(&TokenKind::Comma) {
                break;
            }
        }

        Ok(Some(With { recursive, ctes }))
    }

    /// Parses `name [(cols)] AS [[NOT] MATERIALIZED] (select-core)`.
    fn parse_cte(&mut self) -> Result<CommonTableExpression, ParseError> {
        let name = self.expect_identifier()?;

        let columns = if self.eat(&TokenKind::LeftParen) {
            let columns = self.parse_identifier_list()?;
            self.expect(&TokenKind::RightParen)?;
            Some(columns)
        } else {
            None
        };

        self.expect_keyword(Keyword::As)?;

        let materialized = if self.eat_keyword(Keyword::Materialized) {
            Materialized::Forced
        } else if self.check_keyword(Keyword::Not) {
            self.advance();
            self.expect_keyword(Keyword::Materialized)?;
            Materialized::Forbidden
        } else {
            Materialized::Unspecified
        };

        self.expect(&TokenKind::LeftParen)?;
        let select = self.nested_by(SUBQUERY_DEPTH, Self::parse_compound_select)?;
        self.expect(&TokenKind::RightParen)?;

        Ok(CommonTableExpression {
            name,
            columns,
            materialized,
            select,
        })
    }

    // --- INSERT / REPLACE / UPDATE ---

    /// Parses an `INSERT` or `REPLACE` statement after its `WITH` clause.
    fn parse_insert(&mut self, with_clause: Option<With>) -> Result<Insert, ParseError> {
        let alternative = if self.eat_keyword(Keyword::Replace) {
            None
        } else {
            self.expect_keyword(Keyword::Insert)?;
            self.parse_alternative()?
        };

        self.expect_keyword(Keyword::Into)?;
        let target = self.parse_target()?;

        let columns = if self.eat(&TokenKind::LeftParen) {
            let columns = self.parse_identifier_list()?;
            self.expect(&TokenKind::RightParen)?;
            columns.into_iter().map(Node::Identifier).collect()
        } else {
            vec![All::default().into()]
        };

        let values = match &self.current().kind {
            TokenKind::Keyword(Keyword::Default) => {
                self.advance();
                self.expect_keyword(Keyword::Values)?;
                None
            }
            TokenKind::Keyword(Keyword::Select | Keyword::Values | Keyword::With) => {
                Some(plain_values(self.parse_select()?))
            }
            _ => return Err(self.error(&["DEFAULT", "VALUES", "SELECT", "WITH"])),
        };

        let returning = self.parse_optional_returning()?;

        Ok(Insert {
            with_clause,
            alternative,
            target,
            columns,
            values,
            returning,
        })
    }

    /// Parses an `UPDATE` statement after its `WITH` clause.
    fn parse_update(&mut self, with_clause: Option<With>) -> Result<Update, ParseError> {
        self.expect_keyword(Keyword::Update)?;
        let alternative = self.parse_alternative()?;
        let target = self.parse_target()?;

        self.expect_keyword(Keyword::Set)?;
        let mut assignments = vec![];
        loop {
            assignments.push(self.parse_assignment()?);
            if !self.eat(&TokenKind::Comma) {
                break;
            }
        }

        let tables = if self.eat_keyword(Keyword::From) {
            Some(self.parse_table_list()?)
        } else {
            None
        };

        let where_clause = if self.eat_keyword(Keyword::Where) {
            Some(self.parse_expression(0)?)
        } else {
            None
        };

        let returning = self.parse_optional_returning()?;

        Ok(Update {
            with_clause,
            alternative,
            target,
            assignments,
            tables,
            where_clause,
            returning,
        })
    }

    /// Parses `name = expr` or `(col, ...) = expr`.
    fn parse_assignment(&mut self) -> Result<Assignment, ParseError> {
        let columns = if self.eat(&TokenKind::LeftParen) {
            let columns = self.parse_identifier_list()?;
            self.expect(&TokenKind::RightParen)?;
            columns
        } else {
            vec![self.expect_identifier()?]
        };
        self.expect(&TokenKind::Eq)?;
        let value = self.parse_expression(0)?;
        Ok(Assignment { columns, value })
    }

    /// Parses an optional `OR <alternative>`.
    fn parse_alternative(&mut self) -> Result<Option<Alternative>, ParseError> {
        if !self.eat_keyword(Keyword::Or) {
            return Ok(None);
        }

        let alternative = match &self.current().kind {
            TokenKind::Keyword(Keyword::Abort) => Alternative::Abort,
            TokenKind::Keyword(Keyword::Fail) => Alternative::Fail,
            TokenKind::Keyword(Keyword::Ignore) => Alternative::Ignore,
            TokenKind::Keyword(Keyword::Replace) => Alternative::Replace,
            TokenKind::Keyword(Keyword::Rollback) => Alternative::Rollback,
            _ => return Err(self.error(&["ABORT", "FAIL", "IGNORE", "REPLACE", "ROLLBACK"])),
        };
        self.advance();
        Ok(Some(alternative))
    }

    /// Parses `[schema.]name [AS alias]`. The alias needs an explicit `AS`.
    fn parse_target(&mut self) -> Result<Node, ParseError> {
        let table = self.parse_table_name()?;
        if self.eat_keyword(Keyword::As) {
            let alias = self.expect_identifier()?;
            Ok(Alias::new(table.into(), alias).into())
        } else {
            Ok(table.into())
        }
    }

    fn parse_optional_returning(&mut self) -> Result<Option<Vec<Node>>, ParseError> {
        if self.eat_keyword(Keyword::Returning) {
            Ok(Some(self.parse_result_columns()?))
        } else {
            Ok(None)
        }
    }

    // --- Expressions ---

    /// Parses an expression using Pratt parsing.
    fn parse_expression(&mut self, min_bp: u8) -> Result<Node, ParseError> {
        self.nested(|parser| parser.parse_expression_bp(min_bp))
    }

    fn parse_expression_bp(&mut self, min_bp: u8) -> Result<Node, ParseError> {
        let mut lhs = self.parse_prefix()?;

        loop {
            if self.check_keyword(Keyword::Collate) {
                if COLLATE < min_bp {
                    break;
                }
                self.advance();
                let collation = self.expect_identifier()?;
                lhs = Operation::binary(Tag::Collate, lhs, Node::Identifier(collation)).into();
                continue;
            }

            // `NOT IN`, `NOT LIKE`, `NOT BETWEEN`, ...
            let negated = self.check_keyword(Keyword::Not) && is_negatable(self.peek_kind(1));
            let operator = if negated {
                self.peek_kind(1)
            } else {
                &self.current().kind
            };

            let Some((l_bp, r_bp)) = infix_binding_power(operator) else {
                break;
            };
            if l_bp < min_bp {
                break;
            }
            let tag = infix_tag(operator);
            let between = matches!(operator, TokenKind::Keyword(Keyword::Between));

            if negated {
                self.advance();
            }
            self.advance();

            lhs = if between {
                self.parse_between(lhs, r_bp, negated)?
            } else if tag == Some(Tag::Is) {
                let not = self.eat_keyword(Keyword::Not);
                let rhs = self.parse_expression(r_bp)?;
                negate(Operation::binary(Tag::Is, lhs, rhs).into(), not)
            } else if let Some(tag) = tag {
                let rhs = self.parse_expression(r_bp)?;
                negate(Operation::binary(tag, lhs, rhs).into(), negated)
            } else {
                break;
            };
        }

        Ok(lhs)
    }

    /// Parses the bounds after `[NOT] BETWEEN` and expands them into
    /// comparisons.
    fn parse_between(&mut self, value: Node, r_bp: u8, negated: bool) -> Result<Node, ParseError> {
        let low = self.parse_expression(r_bp)?;
        self.expect_keyword(Keyword::And)?;
        let high = self.parse_expression(r_bp)?;

        let (lower, upper) = if negated {
            (
                Operation::binary(Tag::Less, low, value.clone()),
                Operation::binary(Tag::More, high, value),
            )
        } else {
            (
                Operation::binary(Tag::MoreOrEqual, value.clone(), low),
                Operation::binary(Tag::LessOrEqual, value, high),
            )
        };

        Ok(Operation::binary(Tag::And, lower.into(), upper.into()).into())
    }

    /// Parses a prefix expression.
    fn parse_prefix(&mut self) -> Result<Node, ParseError> {
        if let Some((bp, tag)) = prefix_operator(&self.current().kind) {
            self.advance();
            let operand = self.parse_expression(bp)?;
            return Ok(Operation::unary(tag, operand).into());
        }

        self.parse_primary()
    }

    /// Parses a primary expression.
    fn parse_primary(&mut self) -> Result<Node, ParseError> {
        let literal = match &self.current().kind {
            TokenKind::Integer(n) => Some(Literal::Integer(*n)),
            TokenKind::Float(f) => Some(Literal::Float(*f)),
            TokenKind::String(s) => Some(Literal::String(s.clone())),
            TokenKind::Boolean(b) => Some(Literal::Boolean(*b)),
            TokenKind::Null => Some(Literal::Null),
            TokenKind::Keyword(Keyword::CurrentTime) => Some(Literal::CurrentTime),
            TokenKind::Keyword(Keyword::CurrentDate) => Some(Literal::CurrentDate),
            TokenKind::Keyword(Keyword::CurrentTimestamp) => Some(Literal::CurrentTimestamp),
            _ => None,
        };
        if let Some(literal) = literal {
            self.advance();
            return Ok(literal.into());
        }

        match &self.current().kind {
            // Parenthesized expression, row value or scalar sub-select
            TokenKind::LeftParen => {
                self.advance();
                if self.check_keyword(Keyword::Select)
                    || self.check_keyword(Keyword::Values)
                    || self.check_keyword(Keyword::With)
                {
                    let select = self.nested_by(SUBQUERY_DEPTH, Self::parse_select)?;
                    self.expect(&TokenKind::RightParen)?;
                    return Ok(select.into());
                }
                let mut exprs = self.nested(Self::parse_expression_list)?;
                self.expect(&TokenKind::RightParen)?;
                if exprs.len() == 1 {
                    Ok(exprs.remove(0))
                } else {
                    Ok(Node::List(exprs))
                }
            }

            TokenKind::Keyword(Keyword::Cast) => {
                self.advance();
                self.expect(&TokenKind::LeftParen)?;
                let expr = self.parse_expression(0)?;
                self.expect_keyword(Keyword::As)?;
                let type_name = self.expect_identifier()?;
                self.expect(&TokenKind::RightParen)?;
                Ok(Operation::binary(Tag::Cast, expr, Node::Identifier(type_name)).into())
            }

            TokenKind::Keyword(Keyword::Exists) => {
                self.advance();
                self.expect(&TokenKind::LeftParen)?;
                let select = self.nested_by(SUBQUERY_DEPTH, Self::parse_select)?;
                self.expect(&TokenKind::RightParen)?;
                Ok(Operation::unary(Tag::Exists, select.into()).into())
            }

            // Column reference or function call
            TokenKind::Identifier(name) => {
                let name = name.clone();
                self.advance();

                if self.check(&TokenKind::LeftParen) {
                    return self.nested(|parser| parser.parse_call(name));
                }

                if !self.eat(&TokenKind::Dot) {
                    return Ok(Column::new(name).into());
                }
                let second = self.expect_identifier()?;
                if !self.eat(&TokenKind::Dot) {
                    return Ok(Column::qualified(Table::new(name), second).into());
                }
                let column = self.expect_identifier()?;
                Ok(Column::qualified(Table::qualified(name, second), column).into())
            }

            _ => Err(self.error(&["expression"])),
        }
    }

    /// Parses the parenthesized arguments and optional `FILTER` of a call.
    fn parse_call(&mut self, name: String) -> Result<Node, ParseError> {
        self.expect(&TokenKind::LeftParen)?;

        let mut arguments = if self.eat(&TokenKind::Star) {
            Arguments {
                arguments: CallArguments::Wildcard,
                ..Arguments::default()
            }
        } else if self.check(&TokenKind::RightParen) {
            Arguments::default()
        } else {
            let distinct = self.eat_keyword(Keyword::Distinct);
            let list = self.parse_expression_list()?;
            let order_by = if self.eat_keyword(Keyword::Order) {
                self.expect_keyword(Keyword::By)?;
                self.parse_ordering_terms()?
            } else {
                vec![]
            };
            Arguments {
                arguments: CallArguments::List(list),
                distinct,
                order_by,
                filter: None,
            }
        };

        self.expect(&TokenKind::RightParen)?;

        if self.eat_keyword(Keyword::Filter) {
            self.expect(&TokenKind::LeftParen)?;
            self.expect_keyword(Keyword::Where)?;
            arguments.filter = Some(Box::new(self.parse_expression(0)?));
            self.expect(&TokenKind::RightParen)?;
        }

        Ok(Operation::new(
            Operator::new([Tag::Call]),
            Some(Node::Identifier(name)),
            Some(Node::Arguments(arguments)),
        )
        .into())
    }

    /// Parses a comma-separated list of expressions.
    fn parse_expression_list(&mut self) -> Result<Vec<Node>, ParseError> {
        let mut exprs = vec![];
        loop {
            exprs.push(self.parse_expression(0)?);
            if !self.eat(&TokenKind::Comma) {
                break;
            }
        }
        Ok(exprs)
    }

    /// Parses a comma-separated list of identifiers.
    fn parse_identifier_list(&mut self) -> Result<Vec<String>, ParseError> {
        let mut idents = vec![];
        loop {
            idents.push(self.expect_identifier()?);
            if !self.eat(&TokenKind::Comma) {
                break;
            }
        }
        Ok(idents)
    }

    // --- Helper methods ---

    /// Returns the current token.
    fn current(&self) -> &Token {
        self.tokens
            .get(self.pos)
            .or_else(|| self.tokens.last())
            .unwrap_or(&EOF)
    }

    /// Returns the kind of the token `n` positions ahead, clamped to the
    /// final `Eof`.
    fn peek_kind(&self, n: usize) -> &TokenKind {
        self.tokens
            .get(self.pos + n)
            .or_else(|| self.tokens.last())
            .map_or(&EOF.kind, |token| &token.kind)
    }

    fn peek_is(&self, n: usize, kind: &TokenKind) -> bool {
        core::mem::discriminant(self.peek_kind(n)) == core::mem::discriminant(kind)
    }

    fn peek_is_keyword(&self, n: usize, keyword: Keyword) -> bool {
        matches!(self.peek_kind(n), TokenKind::Keyword(kw) if *kw == keyword)
    }

    /// Advances to the next token. `Eof` is never passed.
    fn advance(&mut self) {
        if !self.current().is_eof() {
            self.pos += 1;
        }
    }

    /// Checks if the current token matches the given kind.
    fn check(&self, kind: &TokenKind) -> bool {
        self.peek_is(0, kind)
    }

    /// Checks if the current token is the given keyword.
    fn check_keyword(&self, keyword: Keyword) -> bool {
        self.current().is_keyword(keyword)
    }

    /// Consumes the current token if it matches the given kind.
    fn eat(&mut self, kind: &TokenKind) -> bool {
        let matched = self.check(kind);
        if matched {
            self.advance();
        }
        matched
    }

    /// Consumes the current token if it is the given keyword.
    fn eat_keyword(&mut self, keyword: Keyword) -> bool {
        let matched = self.check_keyword(keyword);
        if matched {
            self.advance();
        }
        matched
    }

    /// Expects the current token to be the given kind.
    fn expect(&mut self, kind: &TokenKind) -> Result<(), ParseError> {
        if self.eat(kind) {
            Ok(())
        } else {
            Err(self.error(&[kind.name()]))
        }
    }

    /// Expects the current token to be the given keyword.
    fn expect_keyword(&mut self, keyword: Keyword) -> Result<(), ParseError> {
        if self.eat_keyword(keyword) {
            Ok(())
        } else {
            Err(self.error(&[keyword.as_str()]))
        }
    }

    /// Expects and returns an identifier.
    fn expect_identifier(&mut self) -> Result<String, ParseError> {
        match &self.current().kind {
            TokenKind::Identifier(name) => {
                let name = name.clone();
                self.advance();
                Ok(name)
            }
            _ => Err(self.error(&["identifier"])),
        }
    }

    /// Builds a syntax error at the current token.
    fn error(&self, expected: &[&'static str]) -> ParseError {
        let token = self.current();
        ParseError::Syntax {
            found: token.kind.clone(),
            span: token.span,
            line: token.line,
            expected: expected.to_vec(),
        }
    }

    /// Runs `f` one nesting level deeper, failing once the configured
    /// limit is reached.
    fn nested<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        self.nested_by(1, f)
    }

    /// Runs `f` `cost` nesting levels deeper.
    fn nested_by<T>(
        &mut self,
        cost: usize,
        f: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        if self.depth + cost > self.config.max_depth {
            let token = self.current();
            return Err(ParseError::TooDeep {
                limit: self.config.max_depth,
                span: token.span,
                line: token.line,
            });
        }
        self.depth += cost;
        let result = f(self);
        self.depth -= cost;
        result
    }
}

/// Wraps `node` in a unary `NOT` when `negated` is set.
fn negate(node: Node, negated: bool) -> Node {
    if negated {
        Operation::unary(Tag::Not, node).into()
    } else {
        node
    }
}

/// Splits a top-level `COLLATE` off an ordering-term expression.
fn split_collation(expr: Node) -> (Node, Option<String>) {
    match expr {
        Node::Operation(Operation {
            operator,
            a: Some(a),
            b: Some(b),
        }) if operator.is(&[Tag::Collate]) => match *b {
            Node::Identifier(collation) => (*a, Some(collation)),
            b => (Operation::new(operator, Some(*a), Some(b)).into(), None),
        },
        other => (other, None),
    }
}

/// Unwraps a select that is nothing but a `VALUES` row set.
fn plain_values(select: Select) -> Node {
    match select {
        Select {
            with_clause: None,
            select_core: Node::Values(values),
            order_by: None,
            limit: None,
        } => Node::Values(values),
        select => select.into(),
    }
}
