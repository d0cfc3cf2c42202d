//! Table references and join constraints.

use super::expression::Node;

/// A table reference, optionally schema-qualified.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Table {
    /// Table name.
    pub name: String,
    /// Schema name; `None` means unqualified.
    pub schema_name: Option<String>,
}

impl Table {
    /// Creates an unqualified table reference.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            schema_name: None,
        }
    }

    /// Creates a table reference qualified by `schema_name`.
    #[must_use]
    pub fn qualified(schema_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            schema_name: Some(schema_name.into()),
        }
    }
}

/// A table with an index hint.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Index {
    /// The hinted table.
    pub table: Table,
    /// `INDEXED BY name`; `None` for `NOT INDEXED`.
    pub name: Option<String>,
}

/// The condition attached to a join.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum JoinConstraint {
    /// `ON expr`.
    On(Node),
    /// `USING (col, ...)`.
    Using(Vec<String>),
}
