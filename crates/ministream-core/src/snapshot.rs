//! The authoritative topology snapshot model.
//!
//! A snapshot is one point-in-time description of system topology as reported
//! by the network API: the hub identity, the discovered edge nodes, and the
//! connected clients. Snapshots are immutable once received; a new snapshot
//! wholly supersedes the previous one as the source of truth, while the
//! rendered graph is updated incrementally from it.
//!
//! Field names on the wire follow the original API payload (`edgeNodes`,
//! `connectedTo`).

use serde::Deserialize;

/// One authoritative point-in-time description of system topology.
///
/// # Examples
///
/// ```
/// use ministream_core::snapshot::{ClientDescriptor, EdgeNodeDescriptor, TopologySnapshot};
///
/// let snapshot = TopologySnapshot::new(
///     "network_api",
///     vec![EdgeNodeDescriptor::new("edge-node-01")],
///     vec![ClientDescriptor::new("cam-3", "edge-node-01")],
/// );
/// assert_eq!(snapshot.hub(), "network_api");
/// assert_eq!(snapshot.edge_nodes().len(), 1);
/// assert_eq!(snapshot.clients().len(), 1);
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct TopologySnapshot {
    /// Identity of the hub node.
    hub: String,

    /// Discovered edge nodes, in discovery order.
    #[serde(rename = "edgeNodes", default)]
    edge_nodes: Vec<EdgeNodeDescriptor>,

    /// Connected clients, in discovery order.
    #[serde(default)]
    clients: Vec<ClientDescriptor>,
}

impl TopologySnapshot {
    /// Creates a new snapshot from its parts.
    pub fn new(
        hub: impl Into<String>,
        edge_nodes: Vec<EdgeNodeDescriptor>,
        clients: Vec<ClientDescriptor>,
    ) -> Self {
        Self {
            hub: hub.into(),
            edge_nodes,
            clients,
        }
    }

    /// Returns the hub identity.
    pub fn hub(&self) -> &str {
        &self.hub
    }

    /// Returns the edge-node descriptors in snapshot order.
    pub fn edge_nodes(&self) -> &[EdgeNodeDescriptor] {
        &self.edge_nodes
    }

    /// Returns the client descriptors in snapshot order.
    pub fn clients(&self) -> &[ClientDescriptor] {
        &self.clients
    }
}

/// Descriptor for one edge node in a snapshot.
#[derive(Debug, Clone, Deserialize)]
pub struct EdgeNodeDescriptor {
    /// Unique identity of the edge node.
    id: String,

    /// Operator-assigned display name, if any.
    #[serde(default)]
    label: Option<String>,
}

impl EdgeNodeDescriptor {
    /// Creates a descriptor with the given identity.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: None,
        }
    }

    /// Sets an operator-assigned display name.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Returns the identity of the edge node.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the display-name override, if any.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

/// Descriptor for one client in a snapshot.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientDescriptor {
    /// Unique identity of the client.
    id: String,

    /// Operator-assigned display name, if any.
    #[serde(default)]
    label: Option<String>,

    /// Identity of the node this client connects through: either the hub or
    /// an edge node from the same snapshot.
    #[serde(rename = "connectedTo")]
    connected_to: String,
}

impl ClientDescriptor {
    /// Creates a descriptor with the given identity and attachment.
    pub fn new(id: impl Into<String>, connected_to: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: None,
            connected_to: connected_to.into(),
        }
    }

    /// Sets an operator-assigned display name.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Returns the identity of the client.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the display-name override, if any.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Returns the identity of the node this client connects through.
    pub fn connected_to(&self) -> &str {
        &self.connected_to
    }
}
