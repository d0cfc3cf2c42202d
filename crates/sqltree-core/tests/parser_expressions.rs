//! Tests for expressions: precedence, associativity, negated operators,
//! BETWEEN, COLLATE, CAST, EXISTS, calls, sub-selects and column references.

mod common;
use common::*;

use sqltree_core::ast::{
    Arguments, CallArguments, Column, Literal, Node, OrderDirection, Table, Tag,
};

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_eq!(
        parse_expr("1 + 2 * 3"),
        binary(
            Tag::Plus,
            int(1),
            binary(Tag::Multiplication, int(2), int(3))
        )
    );
}

#[test]
fn parentheses_override_precedence() {
    assert_eq!(
        parse_expr("(1 + 2) * 3"),
        binary(
            Tag::Multiplication,
            binary(Tag::Plus, int(1), int(2)),
            int(3)
        )
    );
}

#[test]
fn operators_are_left_associative() {
    assert_eq!(
        parse_expr("a - b - c"),
        binary(Tag::Minus, binary(Tag::Minus, col("a"), col("b")), col("c"))
    );
    assert_eq!(
        parse_expr("a / b * c"),
        binary(
            Tag::Multiplication,
            binary(Tag::Division, col("a"), col("b")),
            col("c")
        )
    );
}

#[test]
fn comparison_tags() {
    for (op, tag) in [
        ("=", Tag::Equal),
        ("<>", Tag::Difference),
        ("!=", Tag::Difference),
        ("<=", Tag::LessOrEqual),
        (">=", Tag::MoreOrEqual),
        ("<", Tag::Less),
        (">", Tag::More),
    ] {
        assert_eq!(
            parse_expr(&format!("a {op} 1")),
            binary(tag, col("a"), int(1)),
            "{op}"
        );
    }
}

#[test]
fn comparison_binds_looser_than_arithmetic() {
    assert_eq!(
        parse_expr("a + 1 > b * 2"),
        binary(
            Tag::More,
            binary(Tag::Plus, col("a"), int(1)),
            binary(Tag::Multiplication, col("b"), int(2))
        )
    );
}

#[test]
fn logical_precedence() {
    assert_eq!(
        parse_expr("a = 1 OR b = 2 AND c = 3"),
        binary(
            Tag::Or,
            binary(Tag::Equal, col("a"), int(1)),
            binary(
                Tag::And,
                binary(Tag::Equal, col("b"), int(2)),
                binary(Tag::Equal, col("c"), int(3))
            )
        )
    );
}

#[test]
fn prefix_not_binds_looser_than_comparison() {
    assert_eq!(
        parse_expr("NOT a = 1 AND b"),
        binary(
            Tag::And,
            unary(Tag::Not, binary(Tag::Equal, col("a"), int(1))),
            col("b")
        )
    );
}

#[test]
fn unary_sign_on_operand() {
    assert_eq!(parse_expr("-a"), unary(Tag::Minus, col("a")));
    assert_eq!(parse_expr("+a"), unary(Tag::Plus, col("a")));
    assert_eq!(
        parse_expr("-a * b"),
        binary(Tag::Multiplication, unary(Tag::Minus, col("a")), col("b"))
    );
}

#[test]
fn signed_number_literal() {
    assert_eq!(parse_expr("-7"), int(-7));
    assert_eq!(parse_expr("1 - 2"), binary(Tag::Minus, int(1), int(2)));
    assert_eq!(parse_expr("1-2"), binary(Tag::Minus, int(1), int(2)));
    assert_eq!(parse_expr("a * -2"), binary(Tag::Multiplication, col("a"), int(-2)));
}

#[test]
fn negated_pattern_operators() {
    for (op, tag) in [
        ("LIKE", Tag::Like),
        ("GLOB", Tag::Glob),
        ("REGEXP", Tag::Regexp),
        ("MATCH", Tag::Match),
    ] {
        assert_eq!(
            parse_expr(&format!("a {op} b")),
            binary(tag, col("a"), col("b"))
        );
        assert_eq!(
            parse_expr(&format!("a NOT {op} b")),
            unary(Tag::Not, binary(tag, col("a"), col("b"))),
            "NOT {op}"
        );
    }
}

#[test]
fn in_row_value() {
    assert_eq!(
        parse_expr("a IN (1, 2, 3)"),
        binary(Tag::In, col("a"), Node::List(vec![int(1), int(2), int(3)]))
    );
    assert_eq!(
        parse_expr("a NOT IN (1, 2)"),
        unary(
            Tag::Not,
            binary(Tag::In, col("a"), Node::List(vec![int(1), int(2)]))
        )
    );
}

#[test]
fn in_sub_select() {
    let expr = parse_expr("a IN (SELECT b FROM u)");
    let op = expr.as_operation().unwrap();
    assert!(op.operator.is(&[Tag::In]));
    assert!(matches!(op.b.as_deref(), Some(Node::Select(_))));
}

#[test]
fn is_and_is_not() {
    let null = Node::from(Literal::Null);
    assert_eq!(
        parse_expr("a IS NULL"),
        binary(Tag::Is, col("a"), null.clone())
    );
    assert_eq!(
        parse_expr("a IS NOT NULL"),
        unary(Tag::Not, binary(Tag::Is, col("a"), null))
    );
}

#[test]
fn between() {
    assert_eq!(
        parse_expr("a BETWEEN 1 AND 10"),
        binary(
            Tag::And,
            binary(Tag::MoreOrEqual, col("a"), int(1)),
            binary(Tag::LessOrEqual, col("a"), int(10))
        )
    );
}

#[test]
fn not_between() {
    assert_eq!(
        parse_expr("a NOT BETWEEN 1 AND 10"),
        binary(
            Tag::And,
            binary(Tag::Less, int(1), col("a")),
            binary(Tag::More, int(10), col("a"))
        )
    );
}

#[test]
fn between_inside_conjunction() {
    let expr = parse_expr("a BETWEEN 1 AND 2 AND b");
    let op = expr.as_operation().unwrap();
    assert!(op.operator.is(&[Tag::And]));
    assert_eq!(op.b.as_deref(), Some(&col("b")));
}

#[test]
fn collate() {
    assert_eq!(
        parse_expr("name COLLATE nocase = 'x'"),
        binary(
            Tag::Equal,
            binary(Tag::Collate, col("name"), ident("nocase")),
            string("x")
        )
    );
}

#[test]
fn cast() {
    assert_eq!(
        parse_expr("CAST(a + 1 AS integer)"),
        binary(
            Tag::Cast,
            binary(Tag::Plus, col("a"), int(1)),
            ident("integer")
        )
    );
}

#[test]
fn exists() {
    let expr = parse_expr("EXISTS (SELECT * FROM u WHERE u.id = t.id)");
    let op = expr.as_operation().unwrap();
    assert!(op.operator.is(&[Tag::Exists]));
    assert_eq!(op.arity(), 1);
    assert!(op.a.is_none());
    assert!(matches!(op.b.as_deref(), Some(Node::Select(_))));

    let negated = parse_expr("NOT EXISTS (SELECT * FROM u)");
    assert_eq!(negated.as_operation().unwrap().operator.head(), Tag::Not);
}

#[test]
fn scalar_sub_select() {
    let expr = parse_expr("(SELECT max(a) FROM u) + 1");
    let op = expr.as_operation().unwrap();
    assert!(op.operator.is(&[Tag::Plus]));
    assert!(matches!(op.a.as_deref(), Some(Node::Select(_))));
}

fn call_arguments(expr: &Node) -> (&Node, &Arguments) {
    let op = expr.as_operation().unwrap();
    assert!(op.operator.is(&[Tag::Call]));
    match (op.a.as_deref(), op.b.as_deref()) {
        (Some(name), Some(Node::Arguments(arguments))) => (name, arguments),
        other => panic!("Expected call operands, got {other:?}"),
    }
}

#[test]
fn call_with_arguments() {
    let expr = parse_expr("coalesce(a, 0)");
    let (name, arguments) = call_arguments(&expr);
    assert_eq!(name, &ident("coalesce"));
    assert_eq!(
        arguments.arguments,
        CallArguments::List(vec![col("a"), int(0)])
    );
    assert!(!arguments.distinct);
    assert!(arguments.order_by.is_empty());
    assert!(arguments.filter.is_none());
}

#[test]
fn call_with_wildcard_and_no_arguments() {
    let expr = parse_expr("count(*)");
    assert_eq!(call_arguments(&expr).1.arguments, CallArguments::Wildcard);

    let expr = parse_expr("random()");
    assert_eq!(call_arguments(&expr).1, &Arguments::default());
}

#[test]
fn call_with_distinct_order_and_filter() {
    let expr = parse_expr("group_concat(DISTINCT name ORDER BY name DESC) FILTER (WHERE age > 18)");
    let (_, arguments) = call_arguments(&expr);
    assert!(arguments.distinct);
    assert_eq!(arguments.arguments, CallArguments::List(vec![col("name")]));
    assert_eq!(arguments.order_by.len(), 1);
    assert_eq!(arguments.order_by[0].direction, Some(OrderDirection::Desc));
    assert_eq!(
        arguments.filter.as_deref(),
        Some(&binary(Tag::More, col("age"), int(18)))
    );
}

#[test]
fn column_references() {
    assert_eq!(parse_expr("c"), col("c"));
    assert_eq!(
        parse_expr("t.c"),
        Node::from(Column::qualified(Table::new("t"), "c"))
    );
    assert_eq!(
        parse_expr("s.t.c"),
        Node::from(Column::qualified(Table::qualified("s", "t"), "c"))
    );
}

#[test]
fn literals() {
    assert_eq!(parse_expr("TRUE"), Node::from(Literal::Boolean(true)));
    assert_eq!(parse_expr("false"), Node::from(Literal::Boolean(false)));
    assert_eq!(parse_expr("null"), Node::from(Literal::Null));
    assert_eq!(parse_expr("0x1A"), int(26));
    assert_eq!(parse_expr(".5"), Node::from(Literal::Float(0.5)));
    assert_eq!(parse_expr("'it'"), string("it"));
}

#[test]
fn row_value_comparison() {
    assert_eq!(
        parse_expr("(a, b) = (1, 2)"),
        binary(
            Tag::Equal,
            Node::List(vec![col("a"), col("b")]),
            Node::List(vec![int(1), int(2)])
        )
    );
}
