//! Assignment and binary operators.

use std::fmt;

/// Assignment operator.
///
/// `Assign` is the plain `=`; the rest are compound forms combining a binary
/// operation with assignment.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum AssignOp {
    /// `=`
    Assign,
    /// `&=`
    AndAssign,
    /// `|=`
    OrAssign,
    /// `^=`
    XorAssign,
    /// `+=`
    AddAssign,
}

impl AssignOp {
    /// Check if this is a compound operator (anything but plain `=`).
    pub fn is_compound(self) -> bool {
        !matches!(self, AssignOp::Assign)
    }
}

impl fmt::Display for AssignOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AssignOp::Assign => "=",
            AssignOp::AndAssign => "&=",
            AssignOp::OrAssign => "|=",
            AssignOp::XorAssign => "^=",
            AssignOp::AddAssign => "+=",
        };
        write!(f, "{s}")
    }
}

/// Binary operator.
///
/// Only the operators the rules' fixture trees need; the set grows with the
/// rule catalogue.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    /// `&&`
    And,
    /// `||`
    Or,
    /// `==`
    Eq,
    /// `!=`
    NotEq,
    /// `+`
    Add,
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BinaryOp::And => "&&",
            BinaryOp::Or => "||",
            BinaryOp::Eq => "==",
            BinaryOp::NotEq => "!=",
            BinaryOp::Add => "+",
        };
        write!(f, "{s}")
    }
}
