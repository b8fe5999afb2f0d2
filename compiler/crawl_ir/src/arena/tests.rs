use super::*;
use crate::ast::{ExprKind, Literal};
use pretty_assertions::assert_eq;

fn int(ast: &mut Ast, value: i64) -> ExprId {
    ast.alloc_expr(Expr::new(ExprKind::Literal(Literal::Int(value)), 0))
}

#[test]
fn test_expr_lists_are_independent() {
    let mut ast = Ast::new();
    let a = int(&mut ast, 1);
    let b = int(&mut ast, 2);
    let c = int(&mut ast, 3);

    let first = ast.alloc_expr_list([a, b]);
    let second = ast.alloc_expr_list([c]);
    let empty = ast.alloc_expr_list([]);

    assert_eq!(ast.expr_list(first), &[a, b]);
    assert_eq!(ast.expr_list(second), &[c]);
    assert!(empty.is_empty());
    assert_eq!(ast.expr_list(empty), &[] as &[ExprId]);
}

#[test]
fn test_link_else_sets_next() {
    let mut ast = Ast::new();
    let cond = int(&mut ast, 1);
    let body = ast.alloc_stmt_list([]);
    let if_stmt = ast.alloc_stmt(Stmt::new(
        StmtKind::If {
            cond: Some(cond),
            body,
            next: None,
        },
        0,
    ));
    let else_stmt = ast.alloc_stmt(Stmt::new(
        StmtKind::If {
            cond: None,
            body,
            next: None,
        },
        2,
    ));

    assert!(ast.link_else(if_stmt, else_stmt));
    match ast.stmt(if_stmt).kind {
        StmtKind::If { next, .. } => assert_eq!(next, Some(else_stmt)),
        other => panic!("expected if, got {other:?}"),
    }
}

#[test]
fn test_link_else_rejects_non_if() {
    let mut ast = Ast::new();
    let value = int(&mut ast, 1);
    let stmt = ast.alloc_stmt(Stmt::new(StmtKind::Expr(value), 0));
    assert!(!ast.link_else(stmt, stmt));
}

#[test]
fn test_id_debug() {
    assert_eq!(format!("{:?}", ExprId::new(7)), "ExprId(7)");
    assert_eq!(format!("{:?}", StmtRange::new(2, 3)), "StmtRange(2..5)");
}
