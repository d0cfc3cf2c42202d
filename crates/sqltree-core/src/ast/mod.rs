//! Abstract Syntax Tree (AST) types for SQL statements.
//!
//! Every node is an owned, immutable value. Operators of every kind share
//! the generic [`Operation`] node, keyed by a [`Tag`] tuple.

mod expression;
mod statement;
mod table;

pub use expression::{
    Alias, All, Arguments, CallArguments, Column, Literal, Node, Operation, Operator, Tag,
};
pub use statement::{
    Alternative, Assignment, CommonTableExpression, Insert, Limit, Materialized, NullOrdering,
    OrderDirection, OrderingTerm, Parsed, Reduction, Select, SelectCore, Statement, Update,
    Values, With,
};
pub use table::{Index, JoinConstraint, Table};
