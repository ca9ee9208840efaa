//! Built-in style policy table.

use std::fmt;

use crate::error::StyleError;
use crate::records::{EqualsAvoidsNullStyle, ExplicitInitializationStyle, StyleRecord};

/// The style kinds with built-in defaults.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum StyleKind {
    EqualsAvoidsNull,
    ExplicitInitialization,
}

impl StyleKind {
    /// Stable lookup name for this kind.
    pub fn name(self) -> &'static str {
        match self {
            StyleKind::EqualsAvoidsNull => "equals-avoids-null",
            StyleKind::ExplicitInitialization => "explicit-initialization",
        }
    }

    /// Parse a lookup name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "equals-avoids-null" => Some(StyleKind::EqualsAvoidsNull),
            "explicit-initialization" => Some(StyleKind::ExplicitInitialization),
            _ => None,
        }
    }
}

impl fmt::Display for StyleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A built-in default record, tagged by kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltInStyle {
    EqualsAvoidsNull(EqualsAvoidsNullStyle),
    ExplicitInitialization(ExplicitInitializationStyle),
}

impl BuiltInStyle {
    /// The kind this record belongs to.
    pub fn kind(self) -> StyleKind {
        match self {
            BuiltInStyle::EqualsAvoidsNull(_) => StyleKind::EqualsAvoidsNull,
            BuiltInStyle::ExplicitInitialization(_) => StyleKind::ExplicitInitialization,
        }
    }

    fn is_fully_populated(self) -> bool {
        match self {
            BuiltInStyle::EqualsAvoidsNull(s) => s.is_fully_populated(),
            BuiltInStyle::ExplicitInitialization(s) => s.is_fully_populated(),
        }
    }
}

/// Look up the built-in default record for a style kind by name.
///
/// Errors with [`StyleError::UnknownKind`] for an unregistered name and
/// [`StyleError::IncompleteDefaults`] if the table row is not fully
/// populated.
pub fn default_style(name: &str) -> Result<BuiltInStyle, StyleError> {
    let kind = StyleKind::from_name(name).ok_or_else(|| StyleError::UnknownKind {
        name: name.to_owned(),
    })?;
    let style = match kind {
        StyleKind::EqualsAvoidsNull => {
            BuiltInStyle::EqualsAvoidsNull(EqualsAvoidsNullStyle::built_in())
        }
        StyleKind::ExplicitInitialization => {
            BuiltInStyle::ExplicitInitialization(ExplicitInitializationStyle::built_in())
        }
    };
    if !style.is_fully_populated() {
        return Err(StyleError::IncompleteDefaults { kind });
    }
    Ok(style)
}
