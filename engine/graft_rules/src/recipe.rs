//! Recipe trait and execution context.

use graft_style::{resolve, EqualsAvoidsNullStyle, ExplicitInitializationStyle, StyleError};
use graft_tree::{NodeId, RewriteRule, Rewriter, TreeArena};

/// A named, describable unit of source transformation.
///
/// Implementations are stateless descriptors; per-run state (resolved style
/// options) lives in the rule the factory produces.
pub trait Recipe {
    /// Human-readable name.
    fn display_name(&self) -> &'static str;

    /// Human-readable, markdown-flavoured description documenting the exact
    /// before/after transformation, with literal examples.
    fn description(&self) -> &'static str;

    /// Produce a configured rule for one traversal.
    ///
    /// Style resolution happens here, so a configuration error fails the
    /// recipe invocation before any tree is touched.
    fn visitor(&self, ctx: &RecipeContext) -> Result<Box<dyn RewriteRule>, StyleError>;
}

/// Configuration context handed to recipe factories: the user's partial
/// style records, one per built-in kind. Empty records resolve to the
/// built-in defaults.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecipeContext {
    pub equals_avoids_null: EqualsAvoidsNullStyle,
    pub explicit_initialization: ExplicitInitializationStyle,
}

impl RecipeContext {
    /// The equals-avoids-null style, merged over its built-in defaults.
    pub fn resolved_equals_avoids_null(&self) -> Result<EqualsAvoidsNullStyle, StyleError> {
        resolve(&self.equals_avoids_null)
    }

    /// The explicit-initialization style, merged over its built-in defaults.
    pub fn resolved_explicit_initialization(
        &self,
    ) -> Result<ExplicitInitializationStyle, StyleError> {
        resolve(&self.explicit_initialization)
    }
}

/// Run one recipe over one tree.
///
/// Returns the new root — the same id as `root` when nothing matched, so
/// callers detect "no change" by identity comparison.
pub fn apply(
    recipe: &dyn Recipe,
    ctx: &RecipeContext,
    arena: &mut TreeArena,
    root: NodeId,
) -> Result<NodeId, StyleError> {
    let rule = recipe.visitor(ctx)?;
    Ok(Rewriter::run(arena, root, rule.as_ref()))
}
