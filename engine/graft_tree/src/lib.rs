//! Graft tree substrate.
//!
//! This crate contains the core data structures for the Graft refactoring
//! engine:
//! - Spans for source locations
//! - Names for interned identifiers
//! - Arena-allocated syntax tree nodes (`NodeKind`, `TreeArena`)
//! - The single-pass rewrite traversal (`Rewriter`, `RewriteRule`)
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: identifiers → `Name(u32)`
//! - **Flatten Everything**: no `Box<Node>`, children are `NodeId(u32)`
//!   indices into a struct-of-arrays arena
//! - **Persistence by Append**: the arena is append-only; a rewrite
//!   allocates new nodes and leaves old ones in place, so the previous root
//!   remains a valid tree and `NodeId` equality doubles as tree identity
//!
//! The tree models a Java-like surface (type declarations, constructors,
//! statements, assignments). Parsing and printing are external collaborators;
//! this crate consumes an already-built arena and produces a new root id.

pub mod ast;
mod arena;
mod interner;
mod name;
mod node_id;
pub mod rewrite;
mod span;

pub use arena::TreeArena;
pub use ast::{
    AssignOp, BinaryOp, ClassKind, LiteralValue, Modifiers, Node, NodeKind, Placement, Primitive,
    TypeRef, Visibility,
};
pub use interner::StringInterner;
pub use name::Name;
pub use node_id::{NodeId, NodeRange};
pub use rewrite::{MatchResult, NodeClass, NodeClasses, RewriteRule, Rewriter};
pub use span::Span;
