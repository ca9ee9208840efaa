//! Pure structural predicates over tree nodes.
//!
//! Every function here validates a complete set of preconditions and
//! answers with either a fully-described match or nothing — heuristic or
//! partial matches are forbidden because the rewrite that follows a match
//! is applied unconditionally.

use rustc_hash::FxHashSet;

use graft_tree::{
    AssignOp, ClassKind, LiteralValue, Modifiers, Name, NodeId, NodeKind, Placement, TreeArena,
    TypeRef, Visibility,
};

/// A validated compound boolean assignment: `<target> <op>= <constant>;`
/// in statement position, with a primitive-boolean target and a literal
/// operand.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct CompoundBoolAssign {
    /// `&=` or `|=`.
    pub op: AssignOp,
    /// The literal right-hand operand.
    pub constant: bool,
    /// The assignment target (shared into any rewrite).
    pub target: NodeId,
}

/// Match a statement of the form `x &= <literal>;` / `x |= <literal>;`
/// where `x` is statically known to be a primitive `boolean`.
///
/// Returns `None` for any other operator, a non-literal right-hand side, a
/// boxed or unknown target type (missing type attribution is treated as
/// "cannot match", never guessed), or a non-assignment statement.
pub fn compound_boolean_assignment(arena: &TreeArena, stmt: NodeId) -> Option<CompoundBoolAssign> {
    let NodeKind::ExprStmt { expr } = *arena.kind(stmt) else {
        return None;
    };
    let NodeKind::Assign { op, target, value } = *arena.kind(expr) else {
        return None;
    };
    if !matches!(op, AssignOp::AndAssign | AssignOp::OrAssign) {
        return None;
    }
    // Exactly a boolean literal; no constant folding of the operand.
    let NodeKind::Literal(LiteralValue::Bool(constant)) = *arena.kind(value) else {
        return None;
    };
    if !expr_type(arena, target).is_primitive_boolean() {
        return None;
    }
    Some(CompoundBoolAssign {
        op,
        constant,
        target,
    })
}

/// Static type of an expression node, `TypeRef::Unknown` when the tree
/// carries no attribution for it.
fn expr_type(arena: &TreeArena, expr: NodeId) -> TypeRef {
    match *arena.kind(expr) {
        NodeKind::Ident { ty, .. } => ty,
        NodeKind::Literal(LiteralValue::Bool(_)) => {
            TypeRef::Primitive(graft_tree::Primitive::Boolean)
        }
        NodeKind::Literal(LiteralValue::Int(_)) => TypeRef::Primitive(graft_tree::Primitive::Int),
        _ => TypeRef::Unknown,
    }
}

/// Check whether a class declaration can safely take the `final` modifier.
///
/// All preconditions of the finalize rule except the superclass
/// cross-reference (see [`superclass_names`]):
/// - an actual class (not interface/enum/annotation/record), declared
///   top-level or as a member — local and anonymous classes are skipped;
/// - not already `final`, not `abstract`;
/// - every declared constructor strictly `private`; with zero declared
///   constructors, the implicit constructor takes the class's own
///   visibility, so only a `private` nested class qualifies.
pub fn concealed_constructor_class(arena: &TreeArena, id: NodeId) -> bool {
    let NodeKind::Class {
        modifiers,
        kind,
        placement,
        members,
        ..
    } = *arena.kind(id)
    else {
        return false;
    };
    if kind != ClassKind::Class {
        return false;
    }
    if !matches!(placement, Placement::TopLevel | Placement::Member) {
        return false;
    }
    if modifiers.intersects(Modifiers::FINAL | Modifiers::ABSTRACT) {
        return false;
    }

    let mut declared = 0usize;
    for &member in arena.node_list(members) {
        if let NodeKind::Constructor {
            modifiers: ctor_modifiers,
            ..
        } = *arena.kind(member)
        {
            declared += 1;
            if ctor_modifiers.visibility() != Visibility::Private {
                return false;
            }
        }
    }
    if declared == 0 {
        // Implicit default constructor: visible exactly as the class is.
        return placement == Placement::Member && modifiers.visibility() == Visibility::Private;
    }
    true
}

/// Collect the names of every class extended by a type declaration in the
/// tree rooted at `root`.
///
/// This is the analysis scope for the superclass cross-reference check:
/// within a nest, a sibling type can reach a private constructor through
/// `super(...)`, so a class extended anywhere in the same unit must not be
/// finalized. Beyond the unit a private constructor is unreachable and no
/// wider analysis is needed.
pub fn superclass_names(arena: &TreeArena, root: NodeId) -> FxHashSet<Name> {
    let mut names = FxHashSet::default();
    collect_superclasses(arena, root, &mut names);
    names
}

fn collect_superclasses(arena: &TreeArena, id: NodeId, names: &mut FxHashSet<Name>) {
    if let NodeKind::Class {
        superclass: Some(name),
        ..
    } = *arena.kind(id)
    {
        names.insert(name);
    }
    // Full descent: local classes inside method bodies extend too.
    match *arena.kind(id) {
        NodeKind::CompilationUnit { types } => {
            for &decl in arena.node_list(types) {
                collect_superclasses(arena, decl, names);
            }
        }
        NodeKind::Class { members, .. } => {
            for &member in arena.node_list(members) {
                collect_superclasses(arena, member, names);
            }
        }
        NodeKind::Constructor { body, .. } => collect_superclasses(arena, body, names),
        NodeKind::Method { body, .. } => {
            if let Some(body) = body {
                collect_superclasses(arena, body, names);
            }
        }
        NodeKind::Block { stmts } => {
            for &stmt in arena.node_list(stmts) {
                collect_superclasses(arena, stmt, names);
            }
        }
        NodeKind::If {
            then_branch,
            else_branch,
            ..
        } => {
            collect_superclasses(arena, then_branch, names);
            if let Some(else_branch) = else_branch {
                collect_superclasses(arena, else_branch, names);
            }
        }
        NodeKind::While { body, .. } => collect_superclasses(arena, body, names),
        // Expressions, parameters, and the remaining statements cannot
        // declare types.
        _ => {}
    }
}
