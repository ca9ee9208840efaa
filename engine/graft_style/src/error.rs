//! Configuration errors.

use crate::defaults::StyleKind;

/// Failure to produce a resolved style record.
///
/// Both variants are configuration errors: they abort the requesting rule's
/// invocation and are reported to the caller rather than silently defaulted.
/// They never abort other rules or other trees.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StyleError {
    /// No built-in defaults are registered under the requested kind name.
    #[error("no built-in style defaults registered for kind `{name}`")]
    UnknownKind { name: String },

    /// A built-in default record left fields unset, violating the
    /// fully-populated precondition of the policy table.
    #[error("built-in defaults for style kind `{kind}` leave fields unset")]
    IncompleteDefaults { kind: StyleKind },
}
