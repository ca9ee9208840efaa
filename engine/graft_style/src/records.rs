//! Style record types.
//!
//! Each record is a flat struct of `Option<bool>` fields. `None` means
//! "unset — fall back to the built-in default". The `Default` derive gives
//! the empty user record (everything unset).

use crate::defaults::StyleKind;

/// A style record: a partially-specified bundle of preferences with a
/// defined merge against a built-in default.
pub trait StyleRecord: Sized {
    /// The style kind this record configures.
    const KIND: StyleKind;

    /// Built-in policy defaults for this kind. Must be fully populated;
    /// [`resolve`](crate::resolve) rejects a table row that is not.
    fn built_in() -> Self;

    /// Copy of `self` with every unset field taken from `defaults`.
    ///
    /// Implementations list every field exactly once; this is the
    /// per-record half of the generic merge.
    fn fill_unset(&self, defaults: &Self) -> Self;

    /// Check that every field is set.
    fn is_fully_populated(&self) -> bool;
}

/// Pick the user's value when set, the default otherwise.
#[inline]
pub(crate) fn pick(user: Option<bool>, default: Option<bool>) -> Option<bool> {
    user.or(default)
}

/// Preferences for the equals-avoids-null transformation family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EqualsAvoidsNullStyle {
    /// Leave `equalsIgnoreCase` call sites alone.
    pub ignore_equals_ignore_case: Option<bool>,
}

impl StyleRecord for EqualsAvoidsNullStyle {
    const KIND: StyleKind = StyleKind::EqualsAvoidsNull;

    fn built_in() -> Self {
        EqualsAvoidsNullStyle {
            ignore_equals_ignore_case: Some(false),
        }
    }

    fn fill_unset(&self, defaults: &Self) -> Self {
        EqualsAvoidsNullStyle {
            ignore_equals_ignore_case: pick(
                self.ignore_equals_ignore_case,
                defaults.ignore_equals_ignore_case,
            ),
        }
    }

    fn is_fully_populated(&self) -> bool {
        self.ignore_equals_ignore_case.is_some()
    }
}

/// Preferences for the explicit-initialization transformation family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExplicitInitializationStyle {
    /// Only flag redundant initialization of object references, not
    /// primitives.
    pub only_object_references: Option<bool>,
}

impl StyleRecord for ExplicitInitializationStyle {
    const KIND: StyleKind = StyleKind::ExplicitInitialization;

    fn built_in() -> Self {
        ExplicitInitializationStyle {
            only_object_references: Some(false),
        }
    }

    fn fill_unset(&self, defaults: &Self) -> Self {
        ExplicitInitializationStyle {
            only_object_references: pick(
                self.only_object_references,
                defaults.only_object_references,
            ),
        }
    }

    fn is_fully_populated(&self) -> bool {
        self.only_object_references.is_some()
    }
}
