#![allow(dead_code)]

use sqltree_core::ast::{
    Column, Insert, Literal, Node, Operation, Select, SelectCore, Statement, Table, Tag, Update,
};
use sqltree_core::{ParseError, Parsed, Parser};

/// Routes parser events to the test harness output. Safe to call from
/// every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

pub fn parse(sql: &str) -> Statement {
    init_tracing();
    Parser::new(sql)
        .parse_statement()
        .unwrap_or_else(|e| panic!("Failed to parse: {sql}\nError: {e:?}"))
}

pub fn parse_all(sql: &str) -> Parsed {
    init_tracing();
    sqltree_core::parse(sql).unwrap_or_else(|e| panic!("Failed to parse: {sql}\nError: {e:?}"))
}

pub fn parse_err(sql: &str) -> ParseError {
    init_tracing();
    sqltree_core::parse(sql).expect_err(&format!("Expected parse error for: {sql}"))
}

pub fn parse_select(sql: &str) -> Select {
    match parse(sql) {
        Statement::Select(s) => s,
        other => panic!("Expected SELECT, got {other:?}"),
    }
}

/// Parses a select and returns its single select body.
pub fn parse_core(sql: &str) -> SelectCore {
    let select = parse_select(sql);
    match select.select_core {
        Node::SelectCore(core) => *core,
        other => panic!("Expected select body, got {other:?}"),
    }
}

/// Parses `SELECT <expr> FROM t` and returns the expression.
pub fn parse_expr(expr: &str) -> Node {
    let sql = format!("SELECT {expr} FROM t");
    let mut core = parse_core(&sql);
    assert_eq!(core.result_columns.len(), 1, "{sql}");
    core.result_columns.remove(0)
}

pub fn parse_insert(sql: &str) -> Insert {
    match parse(sql) {
        Statement::Insert(i) | Statement::Replace(i) => i,
        other => panic!("Expected INSERT, got {other:?}"),
    }
}

pub fn parse_update(sql: &str) -> Update {
    match parse(sql) {
        Statement::Update(u) => u,
        other => panic!("Expected UPDATE, got {other:?}"),
    }
}

// --- Node shorthands ---

pub fn col(name: &str) -> Node {
    Column::new(name).into()
}

pub fn table(name: &str) -> Node {
    Table::new(name).into()
}

pub fn int(n: i64) -> Node {
    Literal::Integer(n).into()
}

pub fn string(s: &str) -> Node {
    Literal::String(s.to_owned()).into()
}

pub fn ident(name: &str) -> Node {
    Node::Identifier(name.to_owned())
}

pub fn binary(tag: Tag, a: Node, b: Node) -> Node {
    Operation::binary(tag, a, b).into()
}

pub fn unary(tag: Tag, operand: Node) -> Node {
    Operation::unary(tag, operand).into()
}
