//! Single-pass tree rewriting.
//!
//! [`Rewriter`] drives one depth-first, post-order traversal over a tree:
//! children are visited (and possibly rewritten) before their parent is
//! evaluated, and every node is evaluated against the rule exactly once, so
//! a rule never re-matches its own output within a pass.
//!
//! # Identity
//!
//! A subtree in which nothing matched comes back as the original [`NodeId`]
//! with no allocation. Callers compare the returned root against the one
//! they passed in to detect "no change" — no deep equality needed.
//!
//! # Deletion
//!
//! A rule answers [`MatchResult::Delete`] to remove a statement. The driver
//! keeps the tree well-formed by construction: deleted children are omitted
//! from list positions, and a deleted mandatory body (an `if`/`while` branch
//! or a constructor/method body) is replaced with an empty block rather than
//! left as an invalid empty branch. A delete in an expression position is a
//! rule logic defect, caught by a debug assertion and otherwise ignored.
//!
//! # Isolation
//!
//! A `Rewriter` borrows the arena mutably for the duration of one run and
//! holds no other state than the ancestor stack it maintains for the rule's
//! scope queries. Rules are expected to keep no cross-node mutable state of
//! their own; independent runs over disjoint arenas never interfere.

use bitflags::bitflags;
use smallvec::SmallVec;

use crate::arena::TreeArena;
use crate::ast::NodeKind;
use crate::node_id::{NodeId, NodeRange};
use crate::span::Span;

/// Outcome of evaluating a rule at one node.
///
/// A rule reports `Rewrite` or `Delete` only after validating every one of
/// its preconditions — the driver applies the result unconditionally.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum MatchResult {
    /// Preconditions not met; the node stands as-is.
    NoMatch,
    /// Replace the node with an already-allocated substitute.
    Rewrite(NodeId),
    /// Remove the node (statements only).
    Delete,
}

/// Coarse node classification used to route rule evaluation.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum NodeClass {
    /// Compilation unit.
    Unit,
    /// Type declaration.
    Type,
    /// Constructor or method declaration.
    Member,
    /// Statement (including variable declarations).
    Statement,
    /// Expression.
    Expression,
}

bitflags! {
    /// Set of node classes a rule wants to evaluate.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct NodeClasses: u8 {
        const UNIT = 1 << 0;
        const TYPE = 1 << 1;
        const MEMBER = 1 << 2;
        const STATEMENT = 1 << 3;
        const EXPRESSION = 1 << 4;
    }
}

impl NodeClass {
    /// The singleton set containing this class.
    pub const fn as_set(self) -> NodeClasses {
        match self {
            NodeClass::Unit => NodeClasses::UNIT,
            NodeClass::Type => NodeClasses::TYPE,
            NodeClass::Member => NodeClasses::MEMBER,
            NodeClass::Statement => NodeClasses::STATEMENT,
            NodeClass::Expression => NodeClasses::EXPRESSION,
        }
    }
}

impl NodeKind {
    /// Classify this node kind for rule routing.
    ///
    /// `Variable` classifies as a statement whether it declares a field or a
    /// local; no current rule distinguishes the two positions.
    pub fn node_class(&self) -> NodeClass {
        match self {
            NodeKind::CompilationUnit { .. } => NodeClass::Unit,
            NodeKind::Class { .. } => NodeClass::Type,
            NodeKind::Constructor { .. } | NodeKind::Method { .. } => NodeClass::Member,
            NodeKind::Variable { .. }
            | NodeKind::Param { .. }
            | NodeKind::Block { .. }
            | NodeKind::If { .. }
            | NodeKind::While { .. }
            | NodeKind::Return { .. }
            | NodeKind::ExprStmt { .. } => NodeClass::Statement,
            NodeKind::Assign { .. }
            | NodeKind::Binary { .. }
            | NodeKind::Ident { .. }
            | NodeKind::Literal(_) => NodeClass::Expression,
        }
    }
}

/// One structural rewrite rule.
///
/// A rule supplies the node classes it inspects plus a match function; the
/// driver consults it once per node of a targeted class, after that node's
/// children have been rewritten.
pub trait RewriteRule {
    /// Node classes this rule evaluates. Other nodes are traversed but not
    /// offered to `check`.
    fn targets(&self) -> NodeClasses;

    /// Evaluate the rule at `id`. Children of `id` are already final.
    ///
    /// Replacement nodes are allocated through the rewriter's accessors.
    fn check(&self, cx: &mut Rewriter<'_>, id: NodeId) -> MatchResult;
}

/// Result of visiting one subtree.
enum Visit {
    /// Nothing below changed; the original id stands.
    Same,
    /// Subtree rebuilt under a new id.
    New(NodeId),
    /// The rule deleted this node.
    Removed,
}

/// Traversal driver for one rule over one tree.
pub struct Rewriter<'a> {
    arena: &'a mut TreeArena,
    root: NodeId,
    ancestors: Vec<NodeId>,
}

impl<'a> Rewriter<'a> {
    /// Run `rule` over the tree rooted at `root`, returning the new root.
    ///
    /// Returns `root` itself (and allocates nothing) when no node matched.
    /// A delete at the root is replaced with an empty block; the shipped
    /// rules only delete statements, so this is a completeness case.
    pub fn run(arena: &'a mut TreeArena, root: NodeId, rule: &dyn RewriteRule) -> NodeId {
        let mut rewriter = Rewriter {
            arena,
            root,
            ancestors: Vec::new(),
        };
        match rewriter.visit(rule, root) {
            Visit::Same => root,
            Visit::New(id) => id,
            Visit::Removed => {
                let span = rewriter.arena.span(root);
                rewriter.alloc(
                    NodeKind::Block {
                        stmts: NodeRange::EMPTY,
                    },
                    span,
                )
            }
        }
    }

    // Accessors for rules

    /// The arena being rewritten (read-only view).
    pub fn arena(&self) -> &TreeArena {
        self.arena
    }

    /// Kind of a node.
    pub fn kind(&self, id: NodeId) -> &NodeKind {
        self.arena.kind(id)
    }

    /// Span of a node.
    pub fn span(&self, id: NodeId) -> Span {
        self.arena.span(id)
    }

    /// Ids in a child list.
    pub fn node_list(&self, range: NodeRange) -> &[NodeId] {
        self.arena.node_list(range)
    }

    /// Allocate a replacement node.
    pub fn alloc(&mut self, kind: NodeKind, span: Span) -> NodeId {
        self.arena.alloc_kind(kind, span)
    }

    /// Allocate a replacement child list.
    pub fn alloc_node_list(&mut self, ids: impl IntoIterator<Item = NodeId>) -> NodeRange {
        self.arena.alloc_node_list(ids)
    }

    /// Root of the tree this run started from.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Ancestors of the node under evaluation, root first.
    ///
    /// These are the original (pre-rewrite) nodes: the traversal is
    /// post-order, so parents have not been rebuilt yet.
    pub fn ancestors(&self) -> &[NodeId] {
        &self.ancestors
    }

    /// Immediate parent of the node under evaluation, if any.
    pub fn parent(&self) -> Option<NodeId> {
        self.ancestors.last().copied()
    }

    // Traversal

    fn visit(&mut self, rule: &dyn RewriteRule, id: NodeId) -> Visit {
        let node_kind = *self.arena.kind(id);
        let span = self.arena.span(id);

        self.ancestors.push(id);
        let rebuilt = self.rebuild_children(rule, node_kind);
        self.ancestors.pop();

        let (current, mut outcome) = match rebuilt {
            Some(kind) => {
                let new_id = self.arena.alloc_kind(kind, span);
                (new_id, Visit::New(new_id))
            }
            None => (id, Visit::Same),
        };

        // Evaluate the rule once, against the rebuilt node. Rebuilding
        // preserves the kind, so classification from the original is valid.
        if rule.targets().contains(node_kind.node_class().as_set()) {
            match rule.check(self, current) {
                MatchResult::NoMatch => {}
                MatchResult::Rewrite(new_id) => outcome = Visit::New(new_id),
                MatchResult::Delete => outcome = Visit::Removed,
            }
        }
        outcome
    }

    /// Rebuild a node's children, returning the new kind if anything below
    /// changed and `None` when the whole subtree is untouched.
    fn rebuild_children(&mut self, rule: &dyn RewriteRule, kind: NodeKind) -> Option<NodeKind> {
        match kind {
            NodeKind::CompilationUnit { types } => self
                .visit_list(rule, types)
                .map(|types| NodeKind::CompilationUnit { types }),

            NodeKind::Class {
                name,
                modifiers,
                kind: class_kind,
                placement,
                superclass,
                members,
            } => self.visit_list(rule, members).map(|members| NodeKind::Class {
                name,
                modifiers,
                kind: class_kind,
                placement,
                superclass,
                members,
            }),

            NodeKind::Constructor {
                modifiers,
                params,
                body,
            } => {
                let new_params = self.visit_list(rule, params);
                let new_body = self.visit_body(rule, body);
                if new_params.is_none() && new_body.is_none() {
                    None
                } else {
                    Some(NodeKind::Constructor {
                        modifiers,
                        params: new_params.unwrap_or(params),
                        body: new_body.unwrap_or(body),
                    })
                }
            }

            NodeKind::Method {
                name,
                modifiers,
                params,
                body,
            } => {
                let new_params = self.visit_list(rule, params);
                let new_body = body.and_then(|b| self.visit_body(rule, b));
                if new_params.is_none() && new_body.is_none() {
                    None
                } else {
                    Some(NodeKind::Method {
                        name,
                        modifiers,
                        params: new_params.unwrap_or(params),
                        body: new_body.or(body),
                    })
                }
            }

            NodeKind::Variable {
                name,
                modifiers,
                ty,
                init,
            } => init
                .and_then(|e| self.visit_expr(rule, e))
                .map(|new_init| NodeKind::Variable {
                    name,
                    modifiers,
                    ty,
                    init: Some(new_init),
                }),

            NodeKind::Block { stmts } => self
                .visit_list(rule, stmts)
                .map(|stmts| NodeKind::Block { stmts }),

            NodeKind::If {
                cond,
                then_branch,
                else_branch,
            } => {
                let new_cond = self.visit_expr(rule, cond);
                let new_then = self.visit_body(rule, then_branch);
                let new_else = else_branch.and_then(|e| self.visit_body(rule, e));
                if new_cond.is_none() && new_then.is_none() && new_else.is_none() {
                    None
                } else {
                    Some(NodeKind::If {
                        cond: new_cond.unwrap_or(cond),
                        then_branch: new_then.unwrap_or(then_branch),
                        else_branch: new_else.or(else_branch),
                    })
                }
            }

            NodeKind::While { cond, body } => {
                let new_cond = self.visit_expr(rule, cond);
                let new_body = self.visit_body(rule, body);
                if new_cond.is_none() && new_body.is_none() {
                    None
                } else {
                    Some(NodeKind::While {
                        cond: new_cond.unwrap_or(cond),
                        body: new_body.unwrap_or(body),
                    })
                }
            }

            NodeKind::Return { value } => value
                .and_then(|e| self.visit_expr(rule, e))
                .map(|new_value| NodeKind::Return {
                    value: Some(new_value),
                }),

            NodeKind::ExprStmt { expr } => self
                .visit_expr(rule, expr)
                .map(|expr| NodeKind::ExprStmt { expr }),

            NodeKind::Assign { op, target, value } => {
                let new_target = self.visit_expr(rule, target);
                let new_value = self.visit_expr(rule, value);
                if new_target.is_none() && new_value.is_none() {
                    None
                } else {
                    Some(NodeKind::Assign {
                        op,
                        target: new_target.unwrap_or(target),
                        value: new_value.unwrap_or(value),
                    })
                }
            }

            NodeKind::Binary { op, lhs, rhs } => {
                let new_lhs = self.visit_expr(rule, lhs);
                let new_rhs = self.visit_expr(rule, rhs);
                if new_lhs.is_none() && new_rhs.is_none() {
                    None
                } else {
                    Some(NodeKind::Binary {
                        op,
                        lhs: new_lhs.unwrap_or(lhs),
                        rhs: new_rhs.unwrap_or(rhs),
                    })
                }
            }

            // Leaves.
            NodeKind::Param { .. } | NodeKind::Ident { .. } | NodeKind::Literal(_) => None,
        }
    }

    /// Visit every id in a list. Deleted children are omitted. Returns the
    /// replacement range, or `None` when every child came back unchanged.
    fn visit_list(&mut self, rule: &dyn RewriteRule, range: NodeRange) -> Option<NodeRange> {
        let ids: SmallVec<[NodeId; 8]> = self.arena.node_list(range).iter().copied().collect();
        let mut out: SmallVec<[NodeId; 8]> = SmallVec::with_capacity(ids.len());
        let mut changed = false;
        for id in ids {
            match self.visit(rule, id) {
                Visit::Same => out.push(id),
                Visit::New(new_id) => {
                    out.push(new_id);
                    changed = true;
                }
                Visit::Removed => changed = true,
            }
        }
        changed.then(|| self.arena.alloc_node_list(out))
    }

    /// Visit a mandatory body slot. A deleted body becomes an empty block
    /// spanning the removed statement, never an invalid empty branch.
    fn visit_body(&mut self, rule: &dyn RewriteRule, id: NodeId) -> Option<NodeId> {
        match self.visit(rule, id) {
            Visit::Same => None,
            Visit::New(new_id) => Some(new_id),
            Visit::Removed => {
                let span = self.arena.span(id);
                Some(self.alloc(
                    NodeKind::Block {
                        stmts: NodeRange::EMPTY,
                    },
                    span,
                ))
            }
        }
    }

    /// Visit an expression slot. Expressions cannot be deleted; a rule that
    /// tries has violated its contract and the original node is kept.
    fn visit_expr(&mut self, rule: &dyn RewriteRule, id: NodeId) -> Option<NodeId> {
        match self.visit(rule, id) {
            Visit::Same => None,
            Visit::New(new_id) => Some(new_id),
            Visit::Removed => {
                debug_assert!(false, "rule deleted a node in expression position");
                None
            }
        }
    }
}
