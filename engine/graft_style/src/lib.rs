//! Typed style configuration for the Graft refactoring engine.
//!
//! A style is a flat record of optional boolean preferences controlling how
//! a recipe's ambiguous choices resolve. Users supply partial records; each
//! style kind ships a fully-populated built-in default, and resolution is a
//! right-biased merge: a field the user set wins, an unset field takes the
//! default. The result is always fully populated.
//!
//! # Design
//!
//! No runtime reflection. Each record type lists its own fields exhaustively
//! in [`StyleRecord::fill_unset`]; the merge algorithm itself
//! ([`merge`]/[`resolve`]) is generic and identical for every kind, present
//! and future.
//!
//! # Errors
//!
//! Configuration failures are the only error surface here:
//! [`StyleError::UnknownKind`] when a name-keyed default lookup misses, and
//! [`StyleError::IncompleteDefaults`] when a built-in record violates the
//! fully-populated precondition. Both are fatal to the requesting rule's
//! invocation only.

mod defaults;
mod error;
mod merge;
mod records;

pub use defaults::{default_style, BuiltInStyle, StyleKind};
pub use error::StyleError;
pub use merge::{merge, resolve};
pub use records::{EqualsAvoidsNullStyle, ExplicitInitializationStyle, StyleRecord};
