//! Topology snapshot reconciliation.
//!
//! [`reconcile`] computes the next render graph from the current graph and a
//! freshly fetched [`TopologySnapshot`]: unchanged entities keep their
//! identity and visual state, entities present only in the snapshot are
//! added, persisting entities get their labels recomputed, and entities
//! absent from the snapshot are removed along with their incident edges.
//!
//! Positions are sticky. A node placed once (or dragged by the operator)
//! stays where it is across poll cycles; only nodes seen for the first time
//! get a computed initial position. Edge identity is re-derived from the
//! endpoints on every call, so an attachment change replaces the old edge
//! without a separate cleanup pass.
//!
//! The function is pure: it performs no I/O, holds no state between calls,
//! and never touches the caller's graph. Callers keep the previous graph on
//! error (see [`crate::TopologyView`]).

use std::collections::HashSet;

use log::{debug, trace};
use thiserror::Error;

use ministream_core::{
    geometry::Point,
    identifier::Id,
    snapshot::TopologySnapshot,
    style::{EdgeKind, NodeKind},
};

use crate::graph::{Edge, Graph, Node};

/// Canonical hub placement.
const HUB_X: f32 = 250.0;
const HUB_Y: f32 = 5.0;

/// Initial row placement for newly discovered nodes.
const ROW_START_X: f32 = 100.0;
const ROW_STEP_X: f32 = 200.0;
const EDGE_NODE_ROW_Y: f32 = 100.0;
const CLIENT_ROW_Y: f32 = 200.0;

/// Errors local to a single reconciliation call.
///
/// Neither variant corrupts the caller's graph: validation happens before
/// any construction, and the input graph is never mutated.
#[derive(Debug, Error)]
pub enum ReconcileError {
    /// A client's `connectedTo` names an identity that is neither the hub
    /// nor an edge node of the same snapshot.
    #[error("client `{client}` references unknown node `{connected_to}`")]
    ReferentialIntegrity { client: Id, connected_to: Id },

    /// The snapshot is structurally invalid (empty or duplicate identities).
    #[error("malformed snapshot: {reason}")]
    MalformedSnapshot { reason: String },
}

/// Computes the next render graph from the current graph and a snapshot.
///
/// # Arguments
///
/// * `current` - The graph produced by the previous call, or the empty graph
///   on the first call.
/// * `snapshot` - The latest authoritative topology description.
///
/// # Errors
///
/// Returns [`ReconcileError`] when the snapshot is malformed or a client
/// references an unknown attachment. `current` is unaffected either way.
///
/// # Examples
///
/// ```
/// use ministream::{Graph, reconcile};
/// use ministream_core::snapshot::{ClientDescriptor, EdgeNodeDescriptor, TopologySnapshot};
///
/// let snapshot = TopologySnapshot::new(
///     "network_api",
///     vec![EdgeNodeDescriptor::new("edge-node-01")],
///     vec![ClientDescriptor::new("cam-3", "edge-node-01")],
/// );
///
/// let graph = reconcile(&Graph::new(), &snapshot).unwrap();
/// assert_eq!(graph.node_count(), 3);
/// assert_eq!(graph.edge_count(), 2);
/// ```
pub fn reconcile(current: &Graph, snapshot: &TopologySnapshot) -> Result<Graph, ReconcileError> {
    validate(snapshot)?;

    let mut next = Graph::new();

    // Hub: carried verbatim when it already exists, created at the canonical
    // position otherwise. Never repositioned afterwards.
    let hub_id = Id::new(snapshot.hub());
    next.add_node(carry_or_create(current, hub_id, NodeKind::Hub, None, |_| {
        Point::new(HUB_X, HUB_Y)
    }));

    for (ordinal, descriptor) in snapshot.edge_nodes().iter().enumerate() {
        let id = Id::new(descriptor.id());
        let node = carry_or_create(current, id, NodeKind::EdgeNode, descriptor.label(), |kind| {
            initial_row_position(kind, ordinal)
        });
        trace!(id = descriptor.id(), carried = current.contains_node(id); "Reconciled edge node");
        next.add_node(node);
        next.add_edge(Edge::new(hub_id, id, EdgeKind::Trunk));
    }

    for (ordinal, descriptor) in snapshot.clients().iter().enumerate() {
        let id = Id::new(descriptor.id());
        let node = carry_or_create(current, id, NodeKind::Client, descriptor.label(), |kind| {
            initial_row_position(kind, ordinal)
        });
        trace!(id = descriptor.id(), carried = current.contains_node(id); "Reconciled client");
        next.add_node(node);
        next.add_edge(Edge::new(
            Id::new(descriptor.connected_to()),
            id,
            EdgeKind::Drop,
        ));
    }

    // Removal is implicit: the next graph was rebuilt from the snapshot, so
    // nodes absent from it (and their incident edges) did not survive.
    debug!(
        nodes = next.node_count(),
        edges = next.edge_count();
        "Reconciled topology snapshot"
    );
    Ok(next)
}

/// Carries an existing node over (position and style retained, label
/// recomputed) or creates a new one at its initial position.
///
/// An identity reappearing under a different kind is treated as a new
/// entity: kinds are immutable for a node's lifetime.
fn carry_or_create(
    current: &Graph,
    id: Id,
    kind: NodeKind,
    label_override: Option<&str>,
    initial_position: impl Fn(NodeKind) -> Point,
) -> Node {
    let label = match label_override {
        Some(label) => label.to_string(),
        None => kind.display_label(&id.to_string()),
    };

    match current.node(id) {
        Some(existing) if existing.kind() == kind => existing.clone().with_label(label),
        _ => Node::new(id, kind, label, initial_position(kind)),
    }
}

/// Initial left-to-right placement for a newly created node.
///
/// The ordinal is the node's index within its snapshot collection. Only
/// newly created nodes are placed this way; pre-existing nodes keep their
/// last known position regardless of snapshot ordering.
fn initial_row_position(kind: NodeKind, ordinal: usize) -> Point {
    let x = ROW_START_X + ROW_STEP_X * ordinal as f32;
    match kind {
        NodeKind::Hub => Point::new(HUB_X, HUB_Y),
        NodeKind::EdgeNode => Point::new(x, EDGE_NODE_ROW_Y),
        NodeKind::Client => Point::new(x, CLIENT_ROW_Y),
    }
}

/// Validates a snapshot before any graph construction.
fn validate(snapshot: &TopologySnapshot) -> Result<(), ReconcileError> {
    if snapshot.hub().is_empty() {
        return Err(ReconcileError::MalformedSnapshot {
            reason: "hub identity is empty".to_string(),
        });
    }

    let mut seen: HashSet<&str> = HashSet::new();
    seen.insert(snapshot.hub());

    for descriptor in snapshot.edge_nodes() {
        if descriptor.id().is_empty() {
            return Err(ReconcileError::MalformedSnapshot {
                reason: "edge-node identity is empty".to_string(),
            });
        }
        if !seen.insert(descriptor.id()) {
            return Err(ReconcileError::MalformedSnapshot {
                reason: format!("duplicate identity `{}`", descriptor.id()),
            });
        }
    }

    for descriptor in snapshot.clients() {
        if descriptor.id().is_empty() {
            return Err(ReconcileError::MalformedSnapshot {
                reason: "client identity is empty".to_string(),
            });
        }
        if !seen.insert(descriptor.id()) {
            return Err(ReconcileError::MalformedSnapshot {
                reason: format!("duplicate identity `{}`", descriptor.id()),
            });
        }
    }

    // Clients may attach to the hub or to an edge node, nothing else
    let mut attachable: HashSet<&str> = HashSet::new();
    attachable.insert(snapshot.hub());
    attachable.extend(snapshot.edge_nodes().iter().map(|d| d.id()));

    for descriptor in snapshot.clients() {
        if !attachable.contains(descriptor.connected_to()) {
            return Err(ReconcileError::ReferentialIntegrity {
                client: Id::new(descriptor.id()),
                connected_to: Id::new(descriptor.connected_to()),
            });
        }
    }

    Ok(())
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use ministream_core::snapshot::{ClientDescriptor, EdgeNodeDescriptor};

    use super::*;

    // ===================
    // Strategies
    // ===================

    /// Snapshots over a small identity pool: hub `network_api`, edge nodes
    /// `e0`..`e4`, clients `c0`..`c4`, each client attached to the hub or to
    /// one of the snapshot's edge nodes.
    fn snapshot_strategy() -> impl Strategy<Value = TopologySnapshot> {
        (
            prop::collection::btree_set(0usize..5, 0..5),
            prop::collection::btree_set(0usize..5, 0..5),
            prop::collection::vec(any::<prop::sample::Index>(), 5),
        )
            .prop_map(|(edge_ordinals, client_ordinals, attachments)| {
                let edge_nodes: Vec<EdgeNodeDescriptor> = edge_ordinals
                    .iter()
                    .map(|i| EdgeNodeDescriptor::new(format!("e{i}")))
                    .collect();

                let mut attachable: Vec<String> = vec!["network_api".to_string()];
                attachable.extend(edge_nodes.iter().map(|d| d.id().to_string()));

                let clients: Vec<ClientDescriptor> = client_ordinals
                    .iter()
                    .enumerate()
                    .map(|(n, i)| {
                        let target = attachments[n].get(&attachable);
                        ClientDescriptor::new(format!("c{i}"), target.clone())
                    })
                    .collect();

                TopologySnapshot::new("network_api", edge_nodes, clients)
            })
    }

    // ===================
    // Property Test Functions
    // ===================

    /// Re-applying the same snapshot must be a no-op.
    fn check_idempotence(
        base: TopologySnapshot,
        snapshot: TopologySnapshot,
    ) -> Result<(), TestCaseError> {
        let start = reconcile(&Graph::new(), &base).expect("generated snapshots are valid");
        let once = reconcile(&start, &snapshot).expect("generated snapshots are valid");
        let twice = reconcile(&once, &snapshot).expect("generated snapshots are valid");

        prop_assert_eq!(once, twice);
        Ok(())
    }

    /// Every identity in the snapshot appears as a node; nothing else does.
    fn check_completeness(
        base: TopologySnapshot,
        snapshot: TopologySnapshot,
    ) -> Result<(), TestCaseError> {
        let start = reconcile(&Graph::new(), &base).expect("generated snapshots are valid");
        let next = reconcile(&start, &snapshot).expect("generated snapshots are valid");

        for descriptor in snapshot.edge_nodes() {
            prop_assert!(next.contains_node(Id::new(descriptor.id())));
        }
        for descriptor in snapshot.clients() {
            prop_assert!(next.contains_node(Id::new(descriptor.id())));
        }
        prop_assert_eq!(
            next.node_count(),
            1 + snapshot.edge_nodes().len() + snapshot.clients().len()
        );
        prop_assert_eq!(
            next.edge_count(),
            snapshot.edge_nodes().len() + snapshot.clients().len()
        );
        Ok(())
    }

    /// Nodes persisting across snapshots keep their positions.
    fn check_stability(
        first: TopologySnapshot,
        second: TopologySnapshot,
    ) -> Result<(), TestCaseError> {
        let before = reconcile(&Graph::new(), &first).expect("generated snapshots are valid");
        let after = reconcile(&before, &second).expect("generated snapshots are valid");

        for node in after.nodes() {
            if let Some(previous) = before.node(node.id()) {
                if previous.kind() == node.kind() {
                    prop_assert_eq!(previous.position(), node.position());
                }
            }
        }
        Ok(())
    }

    /// Every edge references nodes present in the same graph.
    fn check_edge_endpoints_exist(
        base: TopologySnapshot,
        snapshot: TopologySnapshot,
    ) -> Result<(), TestCaseError> {
        let start = reconcile(&Graph::new(), &base).expect("generated snapshots are valid");
        let next = reconcile(&start, &snapshot).expect("generated snapshots are valid");

        for edge in next.edges() {
            prop_assert!(next.contains_node(edge.source()));
            prop_assert!(next.contains_node(edge.target()));
        }
        Ok(())
    }

    // ===================
    // Proptest Wrappers
    // ===================

    proptest! {
        #[test]
        fn idempotence(base in snapshot_strategy(), snapshot in snapshot_strategy()) {
            check_idempotence(base, snapshot)?;
        }

        #[test]
        fn completeness(base in snapshot_strategy(), snapshot in snapshot_strategy()) {
            check_completeness(base, snapshot)?;
        }

        #[test]
        fn stability(first in snapshot_strategy(), second in snapshot_strategy()) {
            check_stability(first, second)?;
        }

        #[test]
        fn edge_endpoints_exist(base in snapshot_strategy(), snapshot in snapshot_strategy()) {
            check_edge_endpoints_exist(base, snapshot)?;
        }
    }
}
