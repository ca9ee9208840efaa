//! Node struct and kind variants.

use std::fmt;

use crate::name::Name;
use crate::node_id::{NodeId, NodeRange};
use crate::span::Span;

use super::modifiers::Modifiers;
use super::operators::{AssignOp, BinaryOp};

/// Tree node: a kind plus source metadata.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Node {
    pub kind: NodeKind,
    pub span: Span,
}

impl Node {
    pub fn new(kind: NodeKind, span: Span) -> Self {
        Node { kind, span }
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)
    }
}

/// What flavour of type declaration a `Class` node is.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ClassKind {
    Class,
    Interface,
    Enum,
    Annotation,
    Record,
}

/// Where a type declaration sits.
///
/// Local and anonymous classes have no externally addressable name and are
/// already non-subclassable from outside; rules skip them.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Placement {
    TopLevel,
    /// Nested member class (static or inner).
    Member,
    Local,
    Anonymous,
}

/// Built-in primitive types.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Primitive {
    Boolean,
    Int,
    Long,
    Double,
    Char,
}

/// Static type attribution on an expression or variable.
///
/// `Unknown` means the parser collaborator supplied no attribution for the
/// node; rules that need type information treat it as "cannot match" rather
/// than guessing.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeRef {
    Primitive(Primitive),
    /// Reference type, including boxed wrappers like `Boolean`.
    Named(Name),
    Unknown,
}

impl TypeRef {
    /// Check for the primitive `boolean` type. Boxed `Boolean` is `Named`
    /// and deliberately excluded: a compound op on a boxed value can throw
    /// on null, so it is never a provable no-op.
    pub fn is_primitive_boolean(self) -> bool {
        matches!(self, TypeRef::Primitive(Primitive::Boolean))
    }
}

/// Literal value. Strings are interned.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum LiteralValue {
    Bool(bool),
    Int(i64),
    Str(Name),
    Null,
}

/// Node variants.
///
/// All children are indices, not boxes, so every variant is `Copy`.
/// `Option<NodeId>` marks genuinely optional slots (else branch, initializer,
/// abstract method body).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum NodeKind {
    /// One source file: its top-level type declarations.
    CompilationUnit { types: NodeRange },

    /// Type declaration (class, interface, enum, annotation, record).
    Class {
        name: Name,
        modifiers: Modifiers,
        kind: ClassKind,
        placement: Placement,
        /// Interned name of the extended class, if any.
        superclass: Option<Name>,
        members: NodeRange,
    },

    /// Constructor declaration.
    Constructor {
        modifiers: Modifiers,
        params: NodeRange,
        body: NodeId,
    },

    /// Method declaration. Abstract methods have no body.
    Method {
        name: Name,
        modifiers: Modifiers,
        params: NodeRange,
        body: Option<NodeId>,
    },

    /// Field or local variable declaration.
    Variable {
        name: Name,
        modifiers: Modifiers,
        ty: TypeRef,
        init: Option<NodeId>,
    },

    /// Formal parameter.
    Param { name: Name, ty: TypeRef },

    /// Statement block.
    Block { stmts: NodeRange },

    /// If statement. Branch bodies are single statements or blocks.
    If {
        cond: NodeId,
        then_branch: NodeId,
        else_branch: Option<NodeId>,
    },

    /// While loop.
    While { cond: NodeId, body: NodeId },

    /// Return statement.
    Return { value: Option<NodeId> },

    /// Expression statement.
    ExprStmt { expr: NodeId },

    /// Assignment expression (plain or compound).
    Assign {
        op: AssignOp,
        target: NodeId,
        value: NodeId,
    },

    /// Binary expression.
    Binary {
        op: BinaryOp,
        lhs: NodeId,
        rhs: NodeId,
    },

    /// Identifier reference with its resolved static type.
    Ident { name: Name, ty: TypeRef },

    /// Literal.
    Literal(LiteralValue),
}
