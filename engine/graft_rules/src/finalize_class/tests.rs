use pretty_assertions::assert_eq;

use graft_tree::{
    ClassKind, Modifiers, NodeId, NodeKind, Placement, Span, StringInterner, TreeArena,
};

use super::FinalizeClass;
use crate::recipe::{apply, RecipeContext};
use crate::tests::fixtures::{class, ctor, method, unit};

fn run(arena: &mut TreeArena, root: NodeId) -> NodeId {
    match apply(&FinalizeClass, &RecipeContext::default(), arena, root) {
        Ok(new_root) => new_root,
        Err(e) => panic!("recipe failed: {e}"),
    }
}

fn unit_types(arena: &TreeArena, id: NodeId) -> Vec<NodeId> {
    match *arena.kind(id) {
        NodeKind::CompilationUnit { types } => arena.node_list(types).to_vec(),
        ref other => panic!("expected a compilation unit, got {other:?}"),
    }
}

fn class_modifiers(arena: &TreeArena, id: NodeId) -> Modifiers {
    match *arena.kind(id) {
        NodeKind::Class { modifiers, .. } => modifiers,
        ref other => panic!("expected a class, got {other:?}"),
    }
}

#[test]
fn concealed_class_gains_final_and_keeps_everything_else() {
    let interner = StringInterner::new();
    let mut arena = TreeArena::new();

    let c = ctor(&mut arena, Modifiers::PRIVATE);
    let m = method(&mut arena, &interner, "instance", &[]);
    let members = arena.alloc_node_list([c, m]);
    let id = arena.alloc_kind(
        NodeKind::Class {
            name: interner.intern("Singleton"),
            modifiers: Modifiers::PUBLIC | Modifiers::STATIC,
            kind: ClassKind::Class,
            placement: Placement::Member,
            superclass: Some(interner.intern("Base")),
            members,
        },
        Span::new(3, 120),
    );
    let root = unit(&mut arena, &[id]);

    let new_root = run(&mut arena, root);
    assert_ne!(new_root, root);

    let types = unit_types(&arena, new_root);
    let NodeKind::Class {
        name,
        modifiers,
        kind,
        placement,
        superclass,
        members: new_members,
    } = *arena.kind(types[0])
    else {
        panic!("expected a class");
    };
    assert_eq!(
        modifiers,
        Modifiers::PUBLIC | Modifiers::STATIC | Modifiers::FINAL
    );
    assert_eq!(interner.resolve(name), "Singleton");
    assert_eq!(kind, ClassKind::Class);
    assert_eq!(placement, Placement::Member);
    assert_eq!(superclass, Some(interner.intern("Base")));
    // Members are carried over by range; the member nodes are shared.
    assert_eq!(arena.node_list(new_members), &[c, m]);
    assert_eq!(arena.span(types[0]), Span::new(3, 120));
}

#[test]
fn reachable_constructors_block_the_rewrite() {
    let interner = StringInterner::new();
    let mut arena = TreeArena::new();

    let hidden = ctor(&mut arena, Modifiers::PRIVATE);
    let open = ctor(&mut arena, Modifiers::PUBLIC);
    let id = class(
        &mut arena,
        &interner,
        "Widget",
        Modifiers::PUBLIC,
        Placement::TopLevel,
        None,
        &[hidden, open],
    );
    let root = unit(&mut arena, &[id]);

    let before = arena.len();
    assert_eq!(run(&mut arena, root), root);
    assert_eq!(arena.len(), before);
}

#[test]
fn already_final_class_is_untouched() {
    let interner = StringInterner::new();
    let mut arena = TreeArena::new();

    let c = ctor(&mut arena, Modifiers::PRIVATE);
    let id = class(
        &mut arena,
        &interner,
        "Widget",
        Modifiers::PUBLIC | Modifiers::FINAL,
        Placement::TopLevel,
        None,
        &[c],
    );
    let root = unit(&mut arena, &[id]);

    assert_eq!(run(&mut arena, root), root);
}

#[test]
fn class_extended_within_the_unit_is_not_finalized() {
    let interner = StringInterner::new();
    let mut arena = TreeArena::new();

    let c = ctor(&mut arena, Modifiers::PRIVATE);
    let parent = class(
        &mut arena,
        &interner,
        "Parent",
        Modifiers::empty(),
        Placement::TopLevel,
        None,
        &[c],
    );
    // A nest-mate can chain to the private constructor via `super(...)`.
    let child = class(
        &mut arena,
        &interner,
        "Child",
        Modifiers::empty(),
        Placement::TopLevel,
        Some("Parent"),
        &[],
    );
    let root = unit(&mut arena, &[parent, child]);

    assert_eq!(run(&mut arena, root), root);
}

#[test]
fn class_extended_by_a_local_class_is_not_finalized() {
    let interner = StringInterner::new();
    let mut arena = TreeArena::new();

    let c = ctor(&mut arena, Modifiers::PRIVATE);
    let local = class(
        &mut arena,
        &interner,
        "Helper",
        Modifiers::empty(),
        Placement::Local,
        Some("Parent"),
        &[],
    );
    let m = method(&mut arena, &interner, "run", &[local]);
    let parent = class(
        &mut arena,
        &interner,
        "Parent",
        Modifiers::empty(),
        Placement::TopLevel,
        None,
        &[c, m],
    );
    let root = unit(&mut arena, &[parent]);

    assert_eq!(run(&mut arena, root), root);
}

#[test]
fn private_nested_class_without_constructors_is_finalized() {
    let interner = StringInterner::new();
    let mut arena = TreeArena::new();

    let inner = class(
        &mut arena,
        &interner,
        "Inner",
        Modifiers::PRIVATE,
        Placement::Member,
        None,
        &[],
    );
    let outer = class(
        &mut arena,
        &interner,
        "Outer",
        Modifiers::PUBLIC,
        Placement::TopLevel,
        None,
        &[inner],
    );
    let root = unit(&mut arena, &[outer]);

    let new_root = run(&mut arena, root);
    assert_ne!(new_root, root);

    let types = unit_types(&arena, new_root);
    let NodeKind::Class { members, .. } = *arena.kind(types[0]) else {
        panic!("expected a class");
    };
    let new_inner = arena.node_list(members)[0];
    assert_eq!(
        class_modifiers(&arena, new_inner),
        Modifiers::PRIVATE | Modifiers::FINAL
    );
    // The outer class itself has a reachable implicit constructor.
    assert_eq!(
        class_modifiers(&arena, types[0]),
        Modifiers::PUBLIC
    );
}

#[test]
fn every_qualifying_class_in_a_unit_is_finalized_in_one_pass() {
    let interner = StringInterner::new();
    let mut arena = TreeArena::new();

    let c1 = ctor(&mut arena, Modifiers::PRIVATE);
    let first = class(
        &mut arena,
        &interner,
        "First",
        Modifiers::PUBLIC,
        Placement::TopLevel,
        None,
        &[c1],
    );
    let c2 = ctor(&mut arena, Modifiers::PRIVATE);
    let second = class(
        &mut arena,
        &interner,
        "Second",
        Modifiers::empty(),
        Placement::TopLevel,
        None,
        &[c2],
    );
    let root = unit(&mut arena, &[first, second]);

    let new_root = run(&mut arena, root);
    let types = unit_types(&arena, new_root);
    assert_eq!(types.len(), 2);
    assert!(class_modifiers(&arena, types[0]).contains(Modifiers::FINAL));
    assert!(class_modifiers(&arena, types[1]).contains(Modifiers::FINAL));
}

#[test]
fn applying_twice_is_idempotent() {
    let interner = StringInterner::new();
    let mut arena = TreeArena::new();

    let c = ctor(&mut arena, Modifiers::PRIVATE);
    let id = class(
        &mut arena,
        &interner,
        "Widget",
        Modifiers::PUBLIC,
        Placement::TopLevel,
        None,
        &[c],
    );
    let root = unit(&mut arena, &[id]);

    let once = run(&mut arena, root);
    assert_ne!(once, root);
    let twice = run(&mut arena, once);
    assert_eq!(twice, once);
}
