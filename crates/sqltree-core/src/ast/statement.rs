//! SQL statement and clause AST types.

use super::expression::Node;

/// Row-deduplication mode of a select body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Reduction {
    /// `SELECT DISTINCT`.
    Distinct,
    /// `SELECT ALL`.
    All,
}

/// Sort direction of an ordering term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum OrderDirection {
    /// `ASC`.
    Asc,
    /// `DESC`.
    Desc,
}

impl OrderDirection {
    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// Placement of NULLs in an ordering term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum NullOrdering {
    /// `NULLS FIRST`.
    First,
    /// `NULLS LAST`.
    Last,
}

impl NullOrdering {
    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::First => "NULLS FIRST",
            Self::Last => "NULLS LAST",
        }
    }
}

/// One `ORDER BY` term. Unspecified parts stay `None`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct OrderingTerm {
    /// The sort key.
    pub expr: Node,
    /// `COLLATE name`.
    pub collation: Option<String>,
    /// `ASC` or `DESC`.
    pub direction: Option<OrderDirection>,
    /// `NULLS FIRST` or `NULLS LAST`.
    pub nulls: Option<NullOrdering>,
}

/// The `LIMIT` clause, normalized so both spellings agree:
/// `LIMIT 10 OFFSET 5` and `LIMIT 5, 10` both give limit 10, offset 5.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Limit {
    /// Maximum number of rows.
    pub limit: Node,
    /// Rows skipped first.
    pub offset: Option<Node>,
}

/// Whether a CTE was declared `MATERIALIZED`, `NOT MATERIALIZED` or neither.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Materialized {
    /// No hint.
    #[default]
    Unspecified,
    /// `AS MATERIALIZED`.
    Forced,
    /// `AS NOT MATERIALIZED`.
    Forbidden,
}

/// One common table expression.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CommonTableExpression {
    /// The name the CTE is bound to.
    pub name: String,
    /// Explicit column names.
    pub columns: Option<Vec<String>>,
    /// Materialization hint.
    pub materialized: Materialized,
    /// The body: a select body, `VALUES` or a set operation.
    pub select: Node,
}

/// A `WITH` clause.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct With {
    /// `WITH RECURSIVE`.
    pub recursive: bool,
    /// The CTEs, in source order.
    pub ctes: Vec<CommonTableExpression>,
}

/// A `VALUES` literal row set.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Values {
    /// The rows, each a tuple of expressions.
    pub rows: Vec<Vec<Node>>,
}

/// A `SELECT ... FROM ...` body.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SelectCore {
    /// `DISTINCT`, `ALL` or unset.
    pub reduction: Option<Reduction>,
    /// Result columns: expressions, aliases and wildcards.
    pub result_columns: Vec<Node>,
    /// The `FROM` table list; join chains are folded into operations.
    pub tables: Vec<Node>,
    /// `WHERE expr`.
    pub where_clause: Option<Node>,
    /// `GROUP BY exprs`.
    pub group_by: Option<Vec<Node>>,
    /// `HAVING expr`.
    pub having: Option<Node>,
}

/// A `SELECT` statement.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Select {
    /// Leading `WITH` clause.
    pub with_clause: Option<With>,
    /// A select body, a `VALUES` row set or a set operation over them.
    pub select_core: Node,
    /// `ORDER BY` terms.
    pub order_by: Option<Vec<OrderingTerm>>,
    /// `LIMIT` clause.
    pub limit: Option<Limit>,
}

/// Conflict-resolution alternative: `OR ABORT`, `OR FAIL`, ...
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Alternative {
    /// `OR ABORT`.
    Abort,
    /// `OR FAIL`.
    Fail,
    /// `OR IGNORE`.
    Ignore,
    /// `OR REPLACE`.
    Replace,
    /// `OR ROLLBACK`.
    Rollback,
}

impl Alternative {
    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Abort => "ABORT",
            Self::Fail => "FAIL",
            Self::Ignore => "IGNORE",
            Self::Replace => "REPLACE",
            Self::Rollback => "ROLLBACK",
        }
    }
}

/// An `INSERT` or `REPLACE` statement.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Insert {
    /// Leading `WITH` clause.
    pub with_clause: Option<With>,
    /// `INSERT OR <alternative>`; always `None` for `REPLACE`.
    pub alternative: Option<Alternative>,
    /// The target table, possibly aliased.
    pub target: Node,
    /// Column names as identifiers, or `[All]` when omitted.
    pub columns: Vec<Node>,
    /// `VALUES` rows or a `SELECT`; `None` for `DEFAULT VALUES`.
    pub values: Option<Node>,
    /// `RETURNING` result columns.
    pub returning: Option<Vec<Node>>,
}

/// One `SET` assignment; several columns for the tuple form.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Assignment {
    /// Assigned columns.
    pub columns: Vec<String>,
    /// Assigned value.
    pub value: Node,
}

/// An `UPDATE` statement.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Update {
    /// Leading `WITH` clause.
    pub with_clause: Option<With>,
    /// `UPDATE OR <alternative>`.
    pub alternative: Option<Alternative>,
    /// The target table, possibly aliased.
    pub target: Node,
    /// `SET` assignments.
    pub assignments: Vec<Assignment>,
    /// `FROM` table list.
    pub tables: Option<Vec<Node>>,
    /// `WHERE expr`.
    pub where_clause: Option<Node>,
    /// `RETURNING` result columns.
    pub returning: Option<Vec<Node>>,
}

/// A top-level SQL statement.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Statement {
    /// `SELECT` (or `VALUES`) statement.
    Select(Select),
    /// `INSERT` statement.
    Insert(Insert),
    /// `REPLACE` statement.
    Replace(Insert),
    /// `UPDATE` statement.
    Update(Update),
}

impl Statement {
    /// Returns the keyword naming the statement kind.
    #[must_use]
    pub const fn keyword(&self) -> &'static str {
        match self {
            Self::Select(_) => "SELECT",
            Self::Insert(_) => "INSERT",
            Self::Replace(_) => "REPLACE",
            Self::Update(_) => "UPDATE",
        }
    }
}

/// The result of parsing SQL text: one statement, or several in source
/// order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Parsed {
    /// The text held exactly one statement.
    Statement(Statement),
    /// The text held several `;`-separated statements.
    Sequence(Vec<Statement>),
}

impl Parsed {
    /// Returns the statements in source order.
    #[must_use]
    pub fn into_statements(self) -> Vec<Statement> {
        match self {
            Self::Statement(statement) => vec![statement],
            Self::Sequence(statements) => statements,
        }
    }

    /// Returns the number of statements.
    #[must_use]
    pub fn statement_count(&self) -> usize {
        match self {
            Self::Statement(_) => 1,
            Self::Sequence(statements) => statements.len(),
        }
    }
}

impl From<Vec<Statement>> for Parsed {
    fn from(mut statements: Vec<Statement>) -> Self {
        if statements.len() == 1 {
            Self::Statement(statements.remove(0))
        } else {
            Self::Sequence(statements)
        }
    }
}
