//! Syntax tree node types.
//!
//! The tree models the Java-like surface the rewrite rules operate on:
//! compilation units, type declarations, members, statements, and a small
//! expression vocabulary. All variants are `Copy` — children are `NodeId`
//! indices and identifiers are interned `Name`s, so a node is a handful of
//! words and copies freely during rebuild.

mod modifiers;
mod node;
mod operators;

pub use modifiers::{Modifiers, Visibility};
pub use node::{ClassKind, LiteralValue, Node, NodeKind, Placement, Primitive, TypeRef};
pub use operators::{AssignOp, BinaryOp};
