//! Finalize classes that cannot be externally subclassed.
//!
//! A class whose constructors are all `private` cannot be extended from
//! outside its own nest — `super(...)` cannot reach a private constructor —
//! so adding `final` changes no observable behaviour. The rule still checks
//! the visible analysis scope (the compilation unit) for an existing
//! subclass, because types within the same nest can reach the private
//! constructor.

use graft_style::StyleError;
use graft_tree::{
    MatchResult, Modifiers, NodeClasses, NodeId, NodeKind, RewriteRule, Rewriter,
};

use crate::matcher::{concealed_constructor_class, superclass_names};
use crate::recipe::{Recipe, RecipeContext};

/// Recipe: add `final` to classes with only `private` constructors.
#[derive(Debug, Clone, Copy, Default)]
pub struct FinalizeClass;

impl Recipe for FinalizeClass {
    fn display_name(&self) -> &'static str {
        "Finalize classes with concealed constructors"
    }

    fn description(&self) -> &'static str {
        "Adds the `final` modifier to concrete classes whose declared \
         constructors are all `private`, and which no type in the same \
         compilation unit extends. Such classes cannot be subclassed from \
         outside their own nest, so sealing them changes no observable \
         behaviour. Abstract classes, interfaces, enums, annotations, \
         records, and local or anonymous classes are never changed; a class \
         with no declared constructor qualifies only when the class itself \
         is a `private` nested class."
    }

    fn visitor(&self, _ctx: &RecipeContext) -> Result<Box<dyn RewriteRule>, StyleError> {
        Ok(Box::new(ClassFinalizer))
    }
}

/// The configured rule: one entry on type-declaration nodes.
struct ClassFinalizer;

impl RewriteRule for ClassFinalizer {
    fn targets(&self) -> NodeClasses {
        NodeClasses::TYPE
    }

    fn check(&self, cx: &mut Rewriter<'_>, id: NodeId) -> MatchResult {
        if !concealed_constructor_class(cx.arena(), id) {
            return MatchResult::NoMatch;
        }
        let NodeKind::Class {
            name,
            modifiers,
            kind,
            placement,
            superclass,
            members,
        } = *cx.kind(id)
        else {
            return MatchResult::NoMatch;
        };
        // Checked last: the unit scan costs a walk, the modifier and
        // constructor checks above are cheap field reads.
        if superclass_names(cx.arena(), cx.root()).contains(&name) {
            return MatchResult::NoMatch;
        }

        tracing::debug!(?name, "finalizing class with concealed constructors");
        let span = cx.span(id);
        MatchResult::Rewrite(cx.alloc(
            NodeKind::Class {
                name,
                modifiers: modifiers | Modifiers::FINAL,
                kind,
                placement,
                superclass,
                members,
            },
            span,
        ))
    }
}

#[cfg(test)]
mod tests;
