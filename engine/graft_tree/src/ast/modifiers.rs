//! Declaration modifiers.

use std::fmt;

use bitflags::bitflags;

bitflags! {
    /// Modifier set on a declaration.
    ///
    /// Rendering order is the conventional one: visibility keyword first,
    /// then `static`, then `final`/`abstract`. A set holds at most one
    /// visibility keyword; the parser collaborator guarantees that.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct Modifiers: u32 {
        const PUBLIC = 1 << 0;
        const PROTECTED = 1 << 1;
        const PRIVATE = 1 << 2;
        const STATIC = 1 << 3;
        const FINAL = 1 << 4;
        const ABSTRACT = 1 << 5;
    }
}

/// Visibility derived from a modifier set.
///
/// No visibility keyword means package-private.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Visibility {
    Public,
    Protected,
    PackagePrivate,
    Private,
}

impl Modifiers {
    /// The visibility this modifier set declares.
    pub fn visibility(self) -> Visibility {
        if self.contains(Modifiers::PUBLIC) {
            Visibility::Public
        } else if self.contains(Modifiers::PROTECTED) {
            Visibility::Protected
        } else if self.contains(Modifiers::PRIVATE) {
            Visibility::Private
        } else {
            Visibility::PackagePrivate
        }
    }
}

impl fmt::Display for Modifiers {
    /// Render keywords in conventional order: visibility, `static`, then
    /// `final`/`abstract`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const ORDERED: [(Modifiers, &str); 6] = [
            (Modifiers::PUBLIC, "public"),
            (Modifiers::PROTECTED, "protected"),
            (Modifiers::PRIVATE, "private"),
            (Modifiers::STATIC, "static"),
            (Modifiers::FINAL, "final"),
            (Modifiers::ABSTRACT, "abstract"),
        ];
        let mut first = true;
        for (flag, keyword) in ORDERED {
            if self.contains(flag) {
                if !first {
                    write!(f, " ")?;
                }
                write!(f, "{keyword}")?;
                first = false;
            }
        }
        Ok(())
    }
}
