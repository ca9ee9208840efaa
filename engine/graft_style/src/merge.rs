//! Generic style merging.

use crate::error::StyleError;
use crate::records::StyleRecord;

/// Right-biased merge: every field set in `user` wins; every unset field
/// takes the `defaults` value.
///
/// Pure: neither input is modified and the result aliases neither. The
/// result is fully populated whenever `defaults` is — which is a
/// precondition of the built-in policy table, asserted here and validated
/// as a [`StyleError`] on the [`resolve`] path.
pub fn merge<S: StyleRecord>(defaults: &S, user: &S) -> S {
    debug_assert!(
        defaults.is_fully_populated(),
        "merge defaults must be fully populated"
    );
    user.fill_unset(defaults)
}

/// Resolve a user record against its kind's built-in defaults.
///
/// Errors with [`StyleError::IncompleteDefaults`] if the built-in record
/// violates the fully-populated precondition.
pub fn resolve<S: StyleRecord>(user: &S) -> Result<S, StyleError> {
    let defaults = S::built_in();
    if !defaults.is_fully_populated() {
        return Err(StyleError::IncompleteDefaults { kind: S::KIND });
    }
    Ok(user.fill_unset(&defaults))
}
