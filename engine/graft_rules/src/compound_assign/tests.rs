use pretty_assertions::assert_eq;

use graft_tree::{
    AssignOp, LiteralValue, NodeId, NodeKind, Span, StringInterner, TreeArena,
};

use super::SimplifyCompoundAssignment;
use crate::recipe::{apply, RecipeContext};
use crate::tests::fixtures::{assign_stmt, block, bool_ident, compound_stmt, typed_ident};

fn run(arena: &mut TreeArena, root: NodeId) -> NodeId {
    match apply(&SimplifyCompoundAssignment, &RecipeContext::default(), arena, root) {
        Ok(new_root) => new_root,
        Err(e) => panic!("recipe failed: {e}"),
    }
}

fn block_stmts(arena: &TreeArena, id: NodeId) -> Vec<NodeId> {
    match *arena.kind(id) {
        NodeKind::Block { stmts } => arena.node_list(stmts).to_vec(),
        ref other => panic!("expected a block, got {other:?}"),
    }
}

#[test]
fn no_op_rows_are_removed() {
    let interner = StringInterner::new();

    for (op, constant) in [(AssignOp::AndAssign, true), (AssignOp::OrAssign, false)] {
        let mut arena = TreeArena::new();
        let keep = compound_stmt(&mut arena, &interner, "flag", AssignOp::XorAssign, true);
        let drop = compound_stmt(&mut arena, &interner, "flag", op, constant);
        let root = block(&mut arena, &[keep, drop]);

        let new_root = run(&mut arena, root);
        assert_ne!(new_root, root);
        assert_eq!(block_stmts(&arena, new_root), vec![keep]);
    }
}

#[test]
fn overwrite_rows_flatten_to_plain_assignment() {
    let interner = StringInterner::new();

    for (op, constant) in [(AssignOp::AndAssign, false), (AssignOp::OrAssign, true)] {
        let mut arena = TreeArena::new();
        let stmt = compound_stmt(&mut arena, &interner, "flag", op, constant);
        let root = block(&mut arena, &[stmt]);

        let new_root = run(&mut arena, root);
        assert_ne!(new_root, root);

        let stmts = block_stmts(&arena, new_root);
        assert_eq!(stmts.len(), 1);
        let NodeKind::ExprStmt { expr } = *arena.kind(stmts[0]) else {
            panic!("expected an expression statement");
        };
        let NodeKind::Assign {
            op: new_op,
            target,
            value,
        } = *arena.kind(expr)
        else {
            panic!("expected an assignment");
        };
        assert_eq!(new_op, AssignOp::Assign);
        // The target is shared by id from the matched statement.
        assert!(matches!(*arena.kind(target), NodeKind::Ident { .. }));
        assert_eq!(
            *arena.kind(value),
            NodeKind::Literal(LiteralValue::Bool(constant))
        );
    }
}

#[test]
fn flattened_statement_keeps_the_original_span() {
    let interner = StringInterner::new();
    let mut arena = TreeArena::new();

    let target = bool_ident(&mut arena, &interner, "flag");
    let value = arena.alloc_kind(NodeKind::Literal(LiteralValue::Bool(false)), Span::DUMMY);
    let assign = arena.alloc_kind(
        NodeKind::Assign {
            op: AssignOp::AndAssign,
            target,
            value,
        },
        Span::new(4, 17),
    );
    let stmt = arena.alloc_kind(NodeKind::ExprStmt { expr: assign }, Span::new(4, 18));
    let root = block(&mut arena, &[stmt]);

    let new_root = run(&mut arena, root);
    let stmts = block_stmts(&arena, new_root);
    assert_eq!(arena.span(stmts[0]), Span::new(4, 18));
}

#[test]
fn non_matching_tree_keeps_its_root_and_allocates_nothing() {
    let interner = StringInterner::new();
    let mut arena = TreeArena::new();

    let target = typed_ident(
        &mut arena,
        &interner,
        "flag",
        graft_tree::TypeRef::Named(interner.intern("Boolean")),
    );
    let value = arena.alloc_kind(NodeKind::Literal(LiteralValue::Bool(true)), Span::DUMMY);
    let boxed = assign_stmt(&mut arena, AssignOp::AndAssign, target, value);
    let other = bool_ident(&mut arena, &interner, "other");
    let flag = bool_ident(&mut arena, &interner, "flag");
    let non_literal = assign_stmt(&mut arena, AssignOp::OrAssign, flag, other);
    let root = block(&mut arena, &[boxed, non_literal]);

    let before = arena.len();
    let new_root = run(&mut arena, root);
    assert_eq!(new_root, root);
    assert_eq!(arena.len(), before);
}

#[test]
fn deleting_the_sole_branch_statement_leaves_an_empty_block() {
    let interner = StringInterner::new();
    let mut arena = TreeArena::new();

    // `if (cond) { } ...` after removal: the branch body survives as an
    // empty block rather than vanishing.
    let cond = bool_ident(&mut arena, &interner, "cond");
    let noop = compound_stmt(&mut arena, &interner, "flag", AssignOp::AndAssign, true);
    let then_branch = block(&mut arena, &[noop]);
    let if_stmt = arena.alloc_kind(
        NodeKind::If {
            cond,
            then_branch,
            else_branch: None,
        },
        Span::DUMMY,
    );
    let root = block(&mut arena, &[if_stmt]);

    let new_root = run(&mut arena, root);
    let stmts = block_stmts(&arena, new_root);
    let NodeKind::If {
        then_branch: new_then,
        ..
    } = *arena.kind(stmts[0])
    else {
        panic!("expected an if statement");
    };
    assert!(block_stmts(&arena, new_then).is_empty());
}

#[test]
fn statements_nested_in_loops_are_reached() {
    let interner = StringInterner::new();
    let mut arena = TreeArena::new();

    let cond = bool_ident(&mut arena, &interner, "cond");
    let overwrite = compound_stmt(&mut arena, &interner, "flag", AssignOp::OrAssign, true);
    let body = block(&mut arena, &[overwrite]);
    let while_stmt = arena.alloc_kind(NodeKind::While { cond, body }, Span::DUMMY);
    let root = block(&mut arena, &[while_stmt]);

    let new_root = run(&mut arena, root);
    assert_ne!(new_root, root);
    let stmts = block_stmts(&arena, new_root);
    let NodeKind::While { body: new_body, .. } = *arena.kind(stmts[0]) else {
        panic!("expected a while statement");
    };
    let inner = block_stmts(&arena, new_body);
    let NodeKind::ExprStmt { expr } = *arena.kind(inner[0]) else {
        panic!("expected an expression statement");
    };
    assert!(matches!(
        *arena.kind(expr),
        NodeKind::Assign {
            op: AssignOp::Assign,
            ..
        }
    ));
}

#[test]
fn applying_twice_is_idempotent() {
    let interner = StringInterner::new();
    let mut arena = TreeArena::new();

    let overwrite = compound_stmt(&mut arena, &interner, "flag", AssignOp::AndAssign, false);
    let root = block(&mut arena, &[overwrite]);

    let once = run(&mut arena, root);
    assert_ne!(once, root);
    let twice = run(&mut arena, once);
    assert_eq!(twice, once);
}
