//! The render graph driving the topology display.
//!
//! This module provides the graph value the reconciler produces and the
//! drawing surface consumes. It is a plain data structure:
//! - Node and edge storage keyed by [`Id`], in insertion order
//! - Derived visual style per entity via its kind
//! - Manual repositioning of nodes
//!
//! The graph is owned exclusively by the reconciler's caller. Each
//! reconciliation produces a new `Graph` value; nothing here is shared or
//! mutated concurrently.

use indexmap::IndexMap;

use ministream_core::{
    geometry::Point,
    identifier::Id,
    style::{EdgeKind, EdgeStyleDefinition, NodeKind, NodeStyleDefinition},
};

/// A node in the rendered topology.
///
/// Position and label are the node's persistent visual state: position
/// survives reconciliation untouched (including manual moves), while the
/// label is recomputed from the latest snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    id: Id,
    kind: NodeKind,
    label: String,
    position: Point,
}

impl Node {
    /// Creates a new node.
    pub fn new(id: Id, kind: NodeKind, label: impl Into<String>, position: Point) -> Self {
        Self {
            id,
            kind,
            label: label.into(),
            position,
        }
    }

    /// Returns the node identity.
    pub fn id(&self) -> Id {
        self.id
    }

    /// Returns the node kind. A node never changes kind during its lifetime.
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Returns the display label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the visual position (top-left corner of the node box).
    pub fn position(&self) -> Point {
        self.position
    }

    /// Returns the visual definition derived from the node kind.
    pub fn style(&self) -> NodeStyleDefinition {
        NodeStyleDefinition::for_kind(self.kind)
    }

    /// Returns this node with a recomputed label, all other state retained.
    pub(crate) fn with_label(mut self, label: String) -> Self {
        self.label = label;
        self
    }

    fn set_position(&mut self, position: Point) {
        self.position = position;
    }
}

/// A directed edge between two nodes in the rendered topology.
///
/// Edge identity is derived deterministically from the source and target
/// identities, so re-deriving it on every reconciliation deduplicates
/// unchanged edges and lets stale edges fall out of the rebuild.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    id: Id,
    source: Id,
    target: Id,
    kind: EdgeKind,
}

impl Edge {
    /// Creates a new edge; its identity is derived from the endpoints.
    pub fn new(source: Id, target: Id, kind: EdgeKind) -> Self {
        Self {
            id: Self::derive_id(source, target),
            source,
            target,
            kind,
        }
    }

    /// Derives the edge identity for the given endpoints.
    pub fn derive_id(source: Id, target: Id) -> Id {
        Id::new(&format!("{source}->{target}"))
    }

    /// Returns the edge identity.
    pub fn id(&self) -> Id {
        self.id
    }

    /// Returns the source node identity.
    pub fn source(&self) -> Id {
        self.source
    }

    /// Returns the target node identity.
    pub fn target(&self) -> Id {
        self.target
    }

    /// Returns the edge kind.
    pub fn kind(&self) -> EdgeKind {
        self.kind
    }

    /// Returns the visual definition derived from the edge kind.
    pub fn style(&self) -> EdgeStyleDefinition {
        EdgeStyleDefinition::for_kind(self.kind)
    }
}

/// The ordered collection of current nodes and edges driving the display.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Graph {
    nodes: IndexMap<Id, Node>,
    edges: IndexMap<Id, Edge>,
}

impl Graph {
    /// Creates a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the node with the given identity, if it exists.
    pub fn node(&self, id: Id) -> Option<&Node> {
        self.nodes.get(&id)
    }

    /// Returns an iterator over all nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Returns the total number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Checks if a node with the given identity exists.
    pub fn contains_node(&self, id: Id) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Returns the edge with the given identity, if it exists.
    pub fn edge(&self, id: Id) -> Option<&Edge> {
        self.edges.get(&id)
    }

    /// Returns an iterator over all edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.values()
    }

    /// Returns the total number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Adds a node to the graph.
    ///
    /// If a node with the same identity already exists, it is replaced.
    pub fn add_node(&mut self, node: Node) {
        self.nodes.insert(node.id(), node);
    }

    /// Adds an edge to the graph.
    ///
    /// An edge with the same derived identity replaces the existing one.
    /// Both endpoints must already exist in the graph.
    ///
    /// # Panics
    /// Panics in debug mode if either endpoint does not exist in the graph.
    /// In a release build this check is optimized away.
    pub fn add_edge(&mut self, edge: Edge) {
        #[cfg(debug_assertions)]
        {
            assert!(
                self.nodes.contains_key(&edge.source()),
                "Adding edge: source node {} does not exist",
                edge.source(),
            );
            assert!(
                self.nodes.contains_key(&edge.target()),
                "Adding edge: target node {} does not exist",
                edge.target(),
            );
        }

        self.edges.insert(edge.id(), edge);
    }

    /// Moves a node to a new position.
    ///
    /// The moved position becomes part of the node's persistent visual state
    /// and survives subsequent reconciliations. Returns false when no node
    /// with the given identity exists.
    pub fn move_node(&mut self, id: Id, position: Point) -> bool {
        match self.nodes.get_mut(&id) {
            Some(node) => {
                node.set_position(position);
                true
            }
            None => false,
        }
    }
}
