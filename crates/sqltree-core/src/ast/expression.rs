//! The uniform node type and the generic operation node.

use super::statement::{OrderingTerm, Select, SelectCore, Values};
use super::table::{Index, JoinConstraint, Table};

/// A literal value, coerced by the tokenizer.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Literal {
    /// Integer literal.
    Integer(i64),
    /// Floating-point literal.
    Float(f64),
    /// String literal, verbatim.
    String(String),
    /// Boolean literal.
    Boolean(bool),
    /// The explicit `NULL` value, as opposed to an absent clause.
    Null,
    /// `CURRENT_TIME`.
    CurrentTime,
    /// `CURRENT_DATE`.
    CurrentDate,
    /// `CURRENT_TIMESTAMP`.
    CurrentTimestamp,
}

/// One tag of an operator tag tuple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum Tag {
    // Arithmetic
    Plus,
    Minus,
    Multiplication,
    Division,

    // Comparison
    Equal,
    Difference,
    LessOrEqual,
    MoreOrEqual,
    Less,
    More,

    // Logical and pattern matching
    And,
    Or,
    Not,
    In,
    Is,
    Like,
    Glob,
    Regexp,
    Match,

    // Special forms
    Collate,
    Cast,
    Exists,
    Call,

    // Set operations
    Union,
    All,
    Intersect,
    Except,

    // Joins
    Join,
    Natural,
    Left,
    Right,
    Full,
    Outer,
    Inner,
    Cross,
}

impl Tag {
    /// Returns the uppercase name of the tag.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Plus => "PLUS",
            Self::Minus => "MINUS",
            Self::Multiplication => "MULTIPLICATION",
            Self::Division => "DIVISION",
            Self::Equal => "EQUAL",
            Self::Difference => "DIFFERENCE",
            Self::LessOrEqual => "LESS_OR_EQUAL",
            Self::MoreOrEqual => "MORE_OR_EQUAL",
            Self::Less => "LESS",
            Self::More => "MORE",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Not => "NOT",
            Self::In => "IN",
            Self::Is => "IS",
            Self::Like => "LIKE",
            Self::Glob => "GLOB",
            Self::Regexp => "REGEXP",
            Self::Match => "MATCH",
            Self::Collate => "COLLATE",
            Self::Cast => "CAST",
            Self::Exists => "EXISTS",
            Self::Call => "CALL",
            Self::Union => "UNION",
            Self::All => "ALL",
            Self::Intersect => "INTERSECT",
            Self::Except => "EXCEPT",
            Self::Join => "JOIN",
            Self::Natural => "NATURAL",
            Self::Left => "LEFT",
            Self::Right => "RIGHT",
            Self::Full => "FULL",
            Self::Outer => "OUTER",
            Self::Inner => "INNER",
            Self::Cross => "CROSS",
        }
    }
}

/// The operator of an [`Operation`]: a non-empty ordered tag tuple.
///
/// Joins additionally carry their `ON`/`USING` constraint here, so the
/// operands stay the two joined tables.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Operator {
    /// The tags, most significant first.
    pub tags: Vec<Tag>,
    /// Join constraint, only ever set on `JOIN` operators.
    pub constraint: Option<Box<JoinConstraint>>,
}

impl Operator {
    /// Creates an operator from its tags.
    ///
    /// # Panics
    ///
    /// Panics if `tags` is empty.
    #[must_use]
    pub fn new(tags: impl Into<Vec<Tag>>) -> Self {
        let tags = tags.into();
        assert!(!tags.is_empty(), "operator tag tuple must not be empty");
        Self {
            tags,
            constraint: None,
        }
    }

    /// Creates a `JOIN` operator from its qualifiers and constraint.
    #[must_use]
    pub fn join(qualifiers: &[Tag], constraint: Option<JoinConstraint>) -> Self {
        let mut tags = Vec::with_capacity(qualifiers.len() + 1);
        tags.push(Tag::Join);
        tags.extend_from_slice(qualifiers);
        Self {
            tags,
            constraint: constraint.map(Box::new),
        }
    }

    /// Returns the first tag, which names the operation.
    #[must_use]
    pub fn head(&self) -> Tag {
        self.tags[0]
    }

    /// Returns true if the tag tuple is exactly `tags`.
    #[must_use]
    pub fn is(&self, tags: &[Tag]) -> bool {
        self.tags == tags
    }
}

/// A generic operation node shared by arithmetic, comparison, logical,
/// join, set-operation, call, cast, collate and exists constructs.
///
/// Unary forms carry `a = None`; consumers dispatch on
/// `(operator.head(), arity())`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Operation {
    /// The operator tag tuple.
    pub operator: Operator,
    /// Left operand, absent for unary forms.
    pub a: Option<Box<Node>>,
    /// Right (or only) operand.
    pub b: Option<Box<Node>>,
}

impl Operation {
    /// Creates an operation with an explicit operator.
    #[must_use]
    pub fn new(operator: Operator, a: Option<Node>, b: Option<Node>) -> Self {
        Self {
            operator,
            a: a.map(Box::new),
            b: b.map(Box::new),
        }
    }

    /// Creates a binary operation with a single-tag operator.
    #[must_use]
    pub fn binary(tag: Tag, a: Node, b: Node) -> Self {
        Self::new(Operator::new([tag]), Some(a), Some(b))
    }

    /// Creates a unary operation with a single-tag operator.
    #[must_use]
    pub fn unary(tag: Tag, operand: Node) -> Self {
        Self::new(Operator::new([tag]), None, Some(operand))
    }

    /// Returns the number of operands present.
    #[must_use]
    pub const fn arity(&self) -> usize {
        self.a.is_some() as usize + self.b.is_some() as usize
    }
}

/// A column reference.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Column {
    /// Column name.
    pub name: String,
    /// Owning table, if qualified.
    pub table: Option<Table>,
}

impl Column {
    /// Creates an unqualified column reference.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            table: None,
        }
    }

    /// Creates a column reference qualified by `table`.
    #[must_use]
    pub fn qualified(table: Table, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            table: Some(table),
        }
    }
}

/// The wildcard marker: `*` or `t.*`.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct All {
    /// Owning table, if qualified.
    pub table: Option<Table>,
}

/// A name bound to a node: `expr AS name`, `table AS name`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Alias {
    /// The aliased node; never itself an alias.
    pub original: Box<Node>,
    /// The replacement name.
    pub replacement: String,
}

impl Alias {
    /// Binds `replacement` to `original`.
    #[must_use]
    pub fn new(original: Node, replacement: impl Into<String>) -> Self {
        debug_assert!(!matches!(original, Node::Alias(_)), "alias of an alias");
        Self {
            original: Box::new(original),
            replacement: replacement.into(),
        }
    }
}

/// The argument list of a function call.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum CallArguments {
    /// `count(*)`.
    Wildcard,
    /// Zero or more expressions.
    List(Vec<Node>),
}

/// Everything between the parentheses of a call, plus its `FILTER`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Arguments {
    /// The arguments.
    pub arguments: CallArguments,
    /// Whether `DISTINCT` preceded the arguments.
    pub distinct: bool,
    /// Trailing `ORDER BY` terms; empty when absent.
    pub order_by: Vec<OrderingTerm>,
    /// `FILTER (WHERE expr)`.
    pub filter: Option<Box<Node>>,
}

impl Default for Arguments {
    fn default() -> Self {
        Self {
            arguments: CallArguments::List(Vec::new()),
            distinct: false,
            order_by: Vec::new(),
            filter: None,
        }
    }
}

/// Any node of the syntax tree.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Node {
    /// A literal value.
    Literal(Literal),
    /// A bare name: function name, type name, collation or column list entry.
    Identifier(String),
    /// A column reference.
    Column(Column),
    /// A wildcard.
    All(All),
    /// A table reference.
    Table(Table),
    /// A table with an index hint.
    Index(Index),
    /// A name binding.
    Alias(Alias),
    /// A `VALUES` row set.
    Values(Values),
    /// A select body.
    SelectCore(Box<SelectCore>),
    /// A full select used as an operand (`EXISTS`, sub-queries, `INSERT ... SELECT`).
    Select(Box<Select>),
    /// A generic operation.
    Operation(Operation),
    /// Function call arguments.
    Arguments(Arguments),
    /// A parenthesized row value `(a, b, ...)`.
    List(Vec<Node>),
    /// A parenthesized table list.
    Tables(Vec<Node>),
}

impl Node {
    /// Returns the operation if this node is one.
    #[must_use]
    pub const fn as_operation(&self) -> Option<&Operation> {
        match self {
            Self::Operation(op) => Some(op),
            _ => None,
        }
    }

    /// Returns the select body if this node is one.
    #[must_use]
    pub fn as_select_core(&self) -> Option<&SelectCore> {
        match self {
            Self::SelectCore(core) => Some(core.as_ref()),
            _ => None,
        }
    }
}

impl From<Literal> for Node {
    fn from(literal: Literal) -> Self {
        Self::Literal(literal)
    }
}

impl From<Column> for Node {
    fn from(column: Column) -> Self {
        Self::Column(column)
    }
}

impl From<Table> for Node {
    fn from(table: Table) -> Self {
        Self::Table(table)
    }
}

impl From<Operation> for Node {
    fn from(operation: Operation) -> Self {
        Self::Operation(operation)
    }
}

impl From<Alias> for Node {
    fn from(alias: Alias) -> Self {
        Self::Alias(alias)
    }
}

impl From<All> for Node {
    fn from(all: All) -> Self {
        Self::All(all)
    }
}

impl From<SelectCore> for Node {
    fn from(core: SelectCore) -> Self {
        Self::SelectCore(Box::new(core))
    }
}

impl From<Select> for Node {
    fn from(select: Select) -> Self {
        Self::Select(Box::new(select))
    }
}
