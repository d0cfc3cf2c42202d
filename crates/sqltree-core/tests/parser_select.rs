//! Tests for SELECT: result columns, reductions, clauses, set operations,
//! ordering, limits and common table expressions.

mod common;
use common::*;

use sqltree_core::ast::{
    Alias, All, Literal, Materialized, Node, NullOrdering, OrderDirection, Reduction, Table, Tag,
    Values,
};

#[test]
fn select_star_from_table() {
    let select = parse_select("SELECT * FROM t");
    assert!(select.with_clause.is_none());
    assert!(select.order_by.is_none());
    assert!(select.limit.is_none());

    let core = parse_core("SELECT * FROM t");
    assert_eq!(core.reduction, None);
    assert_eq!(core.result_columns, vec![Node::All(All { table: None })]);
    assert_eq!(
        core.tables,
        vec![Node::Table(Table {
            name: "t".into(),
            schema_name: None
        })]
    );
    assert!(core.where_clause.is_none());
    assert!(core.group_by.is_none());
    assert!(core.having.is_none());
}

#[test]
fn select_reduction() {
    assert_eq!(
        parse_core("SELECT DISTINCT a FROM t").reduction,
        Some(Reduction::Distinct)
    );
    assert_eq!(
        parse_core("select all a from t").reduction,
        Some(Reduction::All)
    );
}

#[test]
fn select_qualified_wildcards() {
    let core = parse_core("SELECT t.*, a.b.* FROM t");
    assert_eq!(
        core.result_columns,
        vec![
            Node::All(All {
                table: Some(Table::new("t"))
            }),
            Node::All(All {
                table: Some(Table::qualified("a", "b"))
            }),
        ]
    );
}

#[test]
fn select_column_aliases() {
    let core = parse_core("SELECT a AS x, b y, c AS 'z', d \"w\" FROM t");
    assert_eq!(
        core.result_columns,
        vec![
            Node::from(Alias::new(col("a"), "x")),
            Alias::new(col("b"), "y").into(),
            Alias::new(col("c"), "z").into(),
            Alias::new(col("d"), "w").into(),
        ]
    );
}

#[test]
fn select_where_group_having() {
    let core = parse_core("SELECT a, count(*) FROM t WHERE b > 1 GROUP BY a, c HAVING count(*) > 2");
    assert_eq!(core.where_clause, Some(binary(Tag::More, col("b"), int(1))));
    assert_eq!(core.group_by, Some(vec![col("a"), col("c")]));
    assert!(matches!(
        core.having,
        Some(Node::Operation(ref op)) if op.operator.head() == Tag::More
    ));
}

#[test]
fn select_from_is_required() {
    let _ = parse_err("SELECT 1");
}

#[test]
fn select_values() {
    let select = parse_select("VALUES (1, 'a'), (2, 'b')");
    assert_eq!(
        select.select_core,
        Node::Values(Values {
            rows: vec![vec![int(1), string("a")], vec![int(2), string("b")]]
        })
    );
}

#[test]
fn set_operations_fold_left() {
    let select = parse_select("SELECT a FROM t UNION SELECT a FROM u UNION ALL SELECT a FROM v");
    let Node::Operation(outer) = &select.select_core else {
        panic!("Expected set operation, got {:?}", select.select_core);
    };
    assert!(outer.operator.is(&[Tag::Union, Tag::All]));
    let Some(Node::Operation(inner)) = outer.a.as_deref() else {
        panic!("Expected nested set operation");
    };
    assert!(inner.operator.is(&[Tag::Union]));
    assert!(matches!(outer.b.as_deref(), Some(Node::SelectCore(_))));
}

#[test]
fn set_operations_intersect_and_except() {
    for (sql, tag) in [
        ("SELECT a FROM t INTERSECT SELECT a FROM u", Tag::Intersect),
        ("SELECT a FROM t EXCEPT VALUES (1)", Tag::Except),
    ] {
        let select = parse_select(sql);
        let op = select.select_core.as_operation().unwrap();
        assert!(op.operator.is(&[tag]), "{sql}");
        assert_eq!(op.arity(), 2);
    }
}

#[test]
fn order_by_terms() {
    let select = parse_select(
        "SELECT * FROM t ORDER BY a, b DESC, c ASC NULLS FIRST, d COLLATE nocase NULLS LAST",
    );
    let terms = select.order_by.unwrap();
    assert_eq!(terms.len(), 4);

    assert_eq!(terms[0].expr, col("a"));
    assert_eq!(terms[0].collation, None);
    assert_eq!(terms[0].direction, None);
    assert_eq!(terms[0].nulls, None);

    assert_eq!(terms[1].direction, Some(OrderDirection::Desc));

    assert_eq!(terms[2].direction, Some(OrderDirection::Asc));
    assert_eq!(terms[2].nulls, Some(NullOrdering::First));

    assert_eq!(terms[3].expr, col("d"));
    assert_eq!(terms[3].collation.as_deref(), Some("nocase"));
    assert_eq!(terms[3].nulls, Some(NullOrdering::Last));
}

#[test]
fn order_by_applies_to_whole_compound() {
    let select = parse_select("SELECT a FROM t UNION SELECT a FROM u ORDER BY a");
    assert!(select.select_core.as_operation().is_some());
    assert_eq!(select.order_by.unwrap().len(), 1);
}

#[test]
fn limit_forms() {
    let limit = parse_select("SELECT * FROM t LIMIT 10").limit.unwrap();
    assert_eq!(limit.limit, int(10));
    assert_eq!(limit.offset, None);

    let offset_form = parse_select("SELECT * FROM t LIMIT 10 OFFSET 5").limit.unwrap();
    let comma_form = parse_select("SELECT * FROM t LIMIT 5, 10").limit.unwrap();
    assert_eq!(offset_form, comma_form);
    assert_eq!(comma_form.limit, int(10));
    assert_eq!(comma_form.offset, Some(int(5)));
}

#[test]
fn limit_after_order_by() {
    let select = parse_select("SELECT * FROM t ORDER BY a LIMIT 1");
    assert!(select.order_by.is_some());
    assert_eq!(select.limit.unwrap().limit, int(1));
}

#[test]
fn with_clause() {
    let select = parse_select(
        "WITH RECURSIVE a(x, y) AS (SELECT 1, 2 FROM t), \
         b AS MATERIALIZED (VALUES (1)), \
         c AS NOT MATERIALIZED (SELECT * FROM a) \
         SELECT * FROM b",
    );
    let with = select.with_clause.unwrap();
    assert!(with.recursive);
    assert_eq!(with.ctes.len(), 3);

    assert_eq!(with.ctes[0].name, "a");
    assert_eq!(
        with.ctes[0].columns,
        Some(vec!["x".to_owned(), "y".to_owned()])
    );
    assert_eq!(with.ctes[0].materialized, Materialized::Unspecified);
    assert!(with.ctes[0].select.as_select_core().is_some());

    assert_eq!(with.ctes[1].columns, None);
    assert_eq!(with.ctes[1].materialized, Materialized::Forced);
    assert!(matches!(with.ctes[1].select, Node::Values(_)));

    assert_eq!(with.ctes[2].materialized, Materialized::Forbidden);
}

#[test]
fn with_clause_not_recursive() {
    let select = parse_select("WITH a AS (SELECT 1 FROM t) SELECT * FROM a");
    assert!(!select.with_clause.unwrap().recursive);
}

#[test]
fn current_time_literals() {
    let core = parse_core("SELECT current_time, CURRENT_DATE, Current_Timestamp FROM t");
    assert_eq!(
        core.result_columns,
        vec![
            Node::from(Literal::CurrentTime),
            Node::from(Literal::CurrentDate),
            Node::from(Literal::CurrentTimestamp),
        ]
    );
}

#[test]
fn keywords_are_case_insensitive() {
    assert_eq!(
        parse_select("select * from t where a = 1 order by a limit 2"),
        parse_select("SELECT * FROM t WHERE a = 1 ORDER BY a LIMIT 2")
    );
}
