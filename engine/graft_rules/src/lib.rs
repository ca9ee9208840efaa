//! Structural transformation recipes for the Graft engine.
//!
//! A recipe is a named, describable unit of source transformation: it
//! carries a display name and a markdown description for the execution
//! layer, and produces a configured [`RewriteRule`](graft_tree::RewriteRule)
//! from a [`RecipeContext`]. Running a recipe is one single-pass, post-order
//! traversal of one tree; an unchanged tree comes back as the same root id.
//!
//! # Shipped recipes
//!
//! - [`FinalizeClass`]: add `final` to classes whose constructors are all
//!   `private` — no code outside the class's nest could have subclassed them.
//! - [`SimplifyCompoundAssignment`]: remove or flatten compound boolean
//!   assignments with a literal operand (`b &= true`, `b |= true`, ...).
//!
//! # Pipeline Position
//!
//! ```text
//! parse (external) → **rules** → print (external)
//! ```
//!
//! Recipe discovery and scheduling live outside this crate; so do parsing
//! and printing. This crate only turns one tree into another.

mod compound_assign;
mod finalize_class;
pub mod matcher;
mod recipe;

pub use compound_assign::SimplifyCompoundAssignment;
pub use finalize_class::FinalizeClass;
pub use recipe::{apply, Recipe, RecipeContext};
