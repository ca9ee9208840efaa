//! Eliminate useless compound boolean assignments.
//!
//! `x &= true` and `x |= false` leave `x` unchanged: the statement is
//! removed. `x &= false` and `x |= true` overwrite `x` with the constant:
//! the statement flattens to a plain assignment. Only statements whose
//! target is a primitive `boolean` and whose operand is exactly a boolean
//! literal qualify — a boxed target can throw on null, and a constant-valued
//! expression is not constant-folded here.

use graft_style::StyleError;
use graft_tree::{
    AssignOp, LiteralValue, MatchResult, NodeClasses, NodeId, NodeKind, RewriteRule, Rewriter,
};

use crate::matcher::compound_boolean_assignment;
use crate::recipe::{Recipe, RecipeContext};

/// Recipe: simplify compound boolean assignments with a literal operand.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimplifyCompoundAssignment;

impl Recipe for SimplifyCompoundAssignment {
    fn display_name(&self) -> &'static str {
        "Simplify compound boolean assignment"
    }

    fn description(&self) -> &'static str {
        "Removes or flattens compound assignments on primitive `boolean` \
         variables whose right-hand side is a boolean literal. `b &= true;` \
         and `b |= false;` are no-ops and are removed (an empty block is \
         kept where the statement was the sole body of a branch); \
         `b &= false;` becomes `b = false;` and `b |= true;` becomes \
         `b = true;`. Boxed `Boolean` targets and non-literal operands are \
         left untouched."
    }

    fn visitor(&self, _ctx: &RecipeContext) -> Result<Box<dyn RewriteRule>, StyleError> {
        Ok(Box::new(CompoundAssignRewriter))
    }
}

/// The configured rule: one entry on statement nodes.
struct CompoundAssignRewriter;

impl RewriteRule for CompoundAssignRewriter {
    fn targets(&self) -> NodeClasses {
        NodeClasses::STATEMENT
    }

    fn check(&self, cx: &mut Rewriter<'_>, id: NodeId) -> MatchResult {
        let Some(found) = compound_boolean_assignment(cx.arena(), id) else {
            return MatchResult::NoMatch;
        };
        tracing::debug!(
            op = %found.op,
            constant = found.constant,
            "compound boolean assignment matched"
        );
        match (found.op, found.constant) {
            // `x &= true` / `x |= false`: the no-op rows — drop the statement.
            (AssignOp::AndAssign, true) | (AssignOp::OrAssign, false) => MatchResult::Delete,
            // `x &= false` / `x |= true`: constant overwrite — flatten to
            // a plain assignment. The target node is shared by id.
            (AssignOp::AndAssign, false) | (AssignOp::OrAssign, true) => {
                let span = cx.span(id);
                let value = cx.alloc(NodeKind::Literal(LiteralValue::Bool(found.constant)), span);
                let assign = cx.alloc(
                    NodeKind::Assign {
                        op: AssignOp::Assign,
                        target: found.target,
                        value,
                    },
                    span,
                );
                MatchResult::Rewrite(cx.alloc(NodeKind::ExprStmt { expr: assign }, span))
            }
            // compound_boolean_assignment only yields `&=` and `|=`.
            _ => MatchResult::NoMatch,
        }
    }
}

#[cfg(test)]
mod tests;
