//! Node and edge kinds with their visual definitions.
//!
//! Every entity in the rendered topology carries a kind, and every kind maps
//! to a fixed visual definition. The mapping is deliberately closed: the
//! topology view draws exactly three node roles and two edge roles, so the
//! style system is a lookup table rather than a user-definable shape system.
//!
//! # Overview
//!
//! - [`NodeKind`]: Hub, edge node, or client. Immutable for a node's lifetime.
//! - [`EdgeKind`]: Trunk (hub backbone) or drop (toward a client).
//! - [`NodeStyleDefinition`] / [`EdgeStyleDefinition`]: colors, stroke widths,
//!   and dash patterns derived from the kind.

use crate::color::Color;

/// The role of a node in the topology.
///
/// A node's kind never changes between snapshots: a device that registered as
/// an edge node stays an edge node for as long as its identity exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// The single central node representing the network API/server.
    Hub,
    /// An intermediate relay node in the topology.
    EdgeNode,
    /// A leaf node representing a connected device/client.
    Client,
}

impl NodeKind {
    /// Returns the stable style tag used by renderers to classify this node.
    pub fn style_tag(self) -> &'static str {
        match self {
            Self::Hub => "hub",
            Self::EdgeNode => "edge-node",
            Self::Client => "client",
        }
    }

    /// Derives the display label for a node of this kind from its identity.
    ///
    /// Descriptor-provided labels override this derivation; see the snapshot
    /// model.
    pub fn display_label(self, id: &str) -> String {
        match self {
            Self::Hub => id.to_string(),
            Self::EdgeNode => format!("Edge Node: {id}"),
            Self::Client => format!("Client: {id}"),
        }
    }
}

/// The role of an edge in the topology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeKind {
    /// A backbone connection from the hub to an edge node.
    Trunk,
    /// A connection toward a client device.
    Drop,
}

impl EdgeKind {
    /// Returns the stable style tag used by renderers to classify this edge.
    pub fn style_tag(self) -> &'static str {
        match self {
            Self::Trunk => "trunk",
            Self::Drop => "drop",
        }
    }
}

/// Visual definition for a node kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeStyleDefinition {
    fill: Color,
    stroke: Color,
    stroke_width: f32,
    text: Color,
}

impl NodeStyleDefinition {
    /// Returns the visual definition for the given node kind.
    pub fn for_kind(kind: NodeKind) -> Self {
        match kind {
            NodeKind::Hub => Self {
                fill: named("#dbeafe"),
                stroke: named("#1d4ed8"),
                stroke_width: 1.5,
                text: named("#1f2937"),
            },
            NodeKind::EdgeNode => Self {
                fill: named("#dcfce7"),
                stroke: named("#15803d"),
                stroke_width: 1.0,
                text: named("#1f2937"),
            },
            NodeKind::Client => Self {
                fill: named("#fef9c3"),
                stroke: named("#a16207"),
                stroke_width: 1.0,
                text: named("#1f2937"),
            },
        }
    }

    /// Returns the fill color.
    pub fn fill(&self) -> Color {
        self.fill
    }

    /// Returns the stroke color.
    pub fn stroke(&self) -> Color {
        self.stroke
    }

    /// Returns the stroke width.
    pub fn stroke_width(&self) -> f32 {
        self.stroke_width
    }

    /// Returns the text color.
    pub fn text(&self) -> Color {
        self.text
    }
}

/// Visual definition for an edge kind.
///
/// Trunk edges were animated in the original canvas; in static SVG output
/// the same role is conveyed with a dash pattern.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeStyleDefinition {
    stroke: Color,
    width: f32,
    dash: Option<&'static str>,
}

impl EdgeStyleDefinition {
    /// Returns the visual definition for the given edge kind.
    pub fn for_kind(kind: EdgeKind) -> Self {
        match kind {
            EdgeKind::Trunk => Self {
                stroke: named("#2563eb"),
                width: 1.5,
                dash: Some("6,4"),
            },
            EdgeKind::Drop => Self {
                stroke: named("#6b7280"),
                width: 1.5,
                dash: None,
            },
        }
    }

    /// Returns the stroke color.
    pub fn stroke(&self) -> Color {
        self.stroke
    }

    /// Returns the stroke width.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Returns the SVG dasharray value, or `None` for solid edges.
    pub fn dash(&self) -> Option<&'static str> {
        self.dash
    }
}

/// Parse a color literal that is known to be valid.
fn named(css: &str) -> Color {
    Color::new(css).expect("style palette colors are valid CSS colors")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_style_tags() {
        assert_eq!(NodeKind::Hub.style_tag(), "hub");
        assert_eq!(NodeKind::EdgeNode.style_tag(), "edge-node");
        assert_eq!(NodeKind::Client.style_tag(), "client");
    }

    #[test]
    fn test_edge_style_tags() {
        assert_eq!(EdgeKind::Trunk.style_tag(), "trunk");
        assert_eq!(EdgeKind::Drop.style_tag(), "drop");
    }

    #[test]
    fn test_display_label_derivation() {
        assert_eq!(NodeKind::Hub.display_label("network_api"), "network_api");
        assert_eq!(
            NodeKind::EdgeNode.display_label("edge-node-01"),
            "Edge Node: edge-node-01"
        );
        assert_eq!(
            NodeKind::Client.display_label("cam-3"),
            "Client: cam-3"
        );
    }

    #[test]
    fn test_node_styles_differ_by_kind() {
        let hub = NodeStyleDefinition::for_kind(NodeKind::Hub);
        let edge_node = NodeStyleDefinition::for_kind(NodeKind::EdgeNode);
        let client = NodeStyleDefinition::for_kind(NodeKind::Client);

        assert_ne!(hub.fill(), edge_node.fill());
        assert_ne!(edge_node.fill(), client.fill());
        assert_ne!(hub.fill(), client.fill());
    }

    #[test]
    fn test_trunk_edges_are_dashed() {
        let trunk = EdgeStyleDefinition::for_kind(EdgeKind::Trunk);
        let drop = EdgeStyleDefinition::for_kind(EdgeKind::Drop);

        assert!(trunk.dash().is_some());
        assert!(drop.dash().is_none());
    }

    #[test]
    fn test_style_lookup_is_stable() {
        // Same kind always yields the same definition
        assert_eq!(
            NodeStyleDefinition::for_kind(NodeKind::Client),
            NodeStyleDefinition::for_kind(NodeKind::Client)
        );
        assert_eq!(
            EdgeStyleDefinition::for_kind(EdgeKind::Trunk),
            EdgeStyleDefinition::for_kind(EdgeKind::Trunk)
        );
    }
}
