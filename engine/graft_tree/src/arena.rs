//! Tree arena.
//!
//! [`TreeArena`] uses struct-of-arrays layout (parallel `kinds` and `spans`
//! arrays indexed by [`NodeId`], plus one flattened `node_lists` vector
//! indexed by [`NodeRange`]).
//!
//! The arena is append-only. A rewrite allocates replacement nodes and
//! returns a new root id; nothing is mutated or freed, so every previously
//! obtained id still names the same node and the pre-rewrite root remains a
//! complete, valid tree. Subtrees shared between the old and new roots are
//! shared physically, by id.

use crate::ast::{Node, NodeKind};
use crate::node_id::{NodeId, NodeRange};
use crate::span::Span;

/// Arena holding one or more roots' worth of tree nodes.
#[derive(Clone, Debug, Default)]
pub struct TreeArena {
    /// Node kinds (parallel with spans).
    kinds: Vec<NodeKind>,
    /// Source spans (parallel with kinds).
    spans: Vec<Span>,
    /// Flattened node id lists for ranges (members, statements, params).
    node_lists: Vec<NodeId>,
}

impl TreeArena {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an arena pre-allocated based on source length.
    ///
    /// Heuristic: roughly one node per 20 bytes of source.
    pub fn with_capacity(source_len: usize) -> Self {
        let estimated = source_len / 20;
        TreeArena {
            kinds: Vec::with_capacity(estimated),
            spans: Vec::with_capacity(estimated),
            node_lists: Vec::with_capacity(estimated),
        }
    }

    /// Allocate a node, returning its id.
    ///
    /// # Panics
    /// Panics if the arena exceeds `u32::MAX` nodes.
    pub fn alloc(&mut self, node: Node) -> NodeId {
        let index = u32::try_from(self.kinds.len())
            .unwrap_or_else(|_| panic!("tree arena overflow at {} nodes", self.kinds.len()));
        self.kinds.push(node.kind);
        self.spans.push(node.span);
        NodeId::new(index)
    }

    /// Allocate a node from its parts.
    pub fn alloc_kind(&mut self, kind: NodeKind, span: Span) -> NodeId {
        self.alloc(Node::new(kind, span))
    }

    /// Get the kind for a node.
    #[inline]
    pub fn kind(&self, id: NodeId) -> &NodeKind {
        &self.kinds[id.index()]
    }

    /// Get the source span for a node.
    #[inline]
    pub fn span(&self, id: NodeId) -> Span {
        self.spans[id.index()]
    }

    /// Allocate a child list, returning its range.
    ///
    /// # Panics
    /// Panics if the list is longer than `u16::MAX` or the flattened list
    /// vector exceeds `u32::MAX` entries.
    pub fn alloc_node_list(&mut self, ids: impl IntoIterator<Item = NodeId>) -> NodeRange {
        let start = u32::try_from(self.node_lists.len()).unwrap_or_else(|_| {
            panic!("node list storage overflow at {} ids", self.node_lists.len())
        });
        self.node_lists.extend(ids);
        let len = self.node_lists.len() - start as usize;
        let len =
            u16::try_from(len).unwrap_or_else(|_| panic!("node list too long: {len} children"));
        NodeRange::new(start, len)
    }

    /// Get the ids in a range.
    #[inline]
    pub fn node_list(&self, range: NodeRange) -> &[NodeId] {
        let start = range.start as usize;
        &self.node_lists[start..start + range.len()]
    }

    /// Number of allocated nodes.
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    /// Check if the arena has no nodes.
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}
