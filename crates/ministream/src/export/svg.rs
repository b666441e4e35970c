//! SVG rendering for the topology graph.
//!
//! Nodes render as labeled rounded rectangles at their stored positions,
//! edges as lines with an arrowhead between node boxes. Trunk edges carry a
//! dash pattern. Edges render before nodes so node boxes cover the line
//! ends, matching the layering of the original canvas.

use log::debug;
use svg::node::element as svg_element;

use ministream_core::{
    color::Color,
    geometry::{Bounds, Insets, Point, Size},
};

use super::{Error, Exporter};
use crate::graph::{Edge, Graph, Node};

/// Fixed node box dimensions.
const NODE_WIDTH: f32 = 150.0;
const NODE_HEIGHT: f32 = 40.0;
const NODE_CORNER_RADIUS: f32 = 6.0;

/// Uniform padding around the diagram content.
const CANVAS_PADDING: f32 = 40.0;

const FONT_FAMILY: &str = "Helvetica, Arial, sans-serif";
const FONT_SIZE: f32 = 12.0;

const ARROW_MARKER_ID: &str = "topology-arrow";

/// Builder for the SVG exporter.
///
/// # Examples
///
/// ```no_run
/// use ministream::Graph;
/// use ministream::export::{Exporter, svg::SvgBuilder};
///
/// let mut exporter = SvgBuilder::new("topology.svg").build();
/// exporter.export_graph(&Graph::new()).unwrap();
/// ```
pub struct SvgBuilder {
    path: String,
    background: Option<Color>,
}

impl SvgBuilder {
    /// Creates a builder targeting the given output path.
    pub fn new(path: &str) -> Self {
        Self {
            path: path.to_string(),
            background: None,
        }
    }

    /// Sets the background color for the document.
    pub fn with_background(mut self, background: Option<Color>) -> Self {
        self.background = background;
        self
    }

    /// Builds the exporter.
    pub fn build(self) -> Svg {
        Svg {
            path: self.path,
            background: self.background,
        }
    }
}

/// File-based SVG exporter for topology graphs.
pub struct Svg {
    path: String,
    background: Option<Color>,
}

impl Exporter for Svg {
    fn export_graph(&mut self, graph: &Graph) -> Result<(), Error> {
        let content_bounds = calculate_graph_bounds(graph);
        let svg_size = content_bounds
            .to_size()
            .add_padding(Insets::uniform(CANVAS_PADDING));

        let mut doc = svg::Document::new()
            .set(
                "viewBox",
                format!("0 0 {} {}", svg_size.width(), svg_size.height()),
            )
            .set("width", svg_size.width())
            .set("height", svg_size.height());

        if let Some(background) = self.background {
            doc = doc.add(
                svg_element::Rectangle::new()
                    .set("x", 0)
                    .set("y", 0)
                    .set("width", svg_size.width())
                    .set("height", svg_size.height())
                    .set("fill", background.to_string()),
            );
        }

        doc = doc.add(arrow_marker_definitions());

        // Shift content so the top-left of the merged bounds lands inside the padding
        let mut main_group = svg_element::Group::new().set(
            "transform",
            format!(
                "translate({}, {})",
                CANVAS_PADDING - content_bounds.min_x(),
                CANVAS_PADDING - content_bounds.min_y()
            ),
        );

        for edge in graph.edges() {
            if let Some(line) = render_edge(graph, edge) {
                main_group = main_group.add(line);
            }
        }

        for node in graph.nodes() {
            main_group = main_group.add(render_node(node));
        }

        let doc = doc.add(main_group);
        svg::save(&self.path, &doc)?;

        debug!(
            path = self.path.as_str(),
            nodes = graph.node_count(),
            edges = graph.edge_count();
            "Exported topology SVG"
        );
        Ok(())
    }
}

/// Returns the box occupied by a node.
fn node_bounds(node: &Node) -> Bounds {
    Bounds::new_from_top_left(node.position(), Size::new(NODE_WIDTH, NODE_HEIGHT))
}

/// Calculates the combined bounds of all node boxes.
fn calculate_graph_bounds(graph: &Graph) -> Bounds {
    let mut nodes = graph.nodes();
    let Some(first) = nodes.next() else {
        return Bounds::default();
    };
    nodes.fold(node_bounds(first), |acc, node| acc.merge(&node_bounds(node)))
}

/// Marker definitions shared by all edges.
fn arrow_marker_definitions() -> svg_element::Definitions {
    let head = svg_element::Path::new()
        .set("d", "M 0 0 L 8 4 L 0 8 z")
        .set("fill", "#6b7280");

    let marker = svg_element::Marker::new()
        .set("id", ARROW_MARKER_ID)
        .set("markerWidth", 8)
        .set("markerHeight", 8)
        .set("refX", 8)
        .set("refY", 4)
        .set("orient", "auto")
        .add(head);

    svg_element::Definitions::new().add(marker)
}

/// Renders an edge as a line from the source box toward the target box.
///
/// Returns `None` when an endpoint is missing; the reconciler guarantees
/// this does not happen for graphs it produced.
fn render_edge(graph: &Graph, edge: &Edge) -> Option<svg_element::Line> {
    let source = graph.node(edge.source())?;
    let target = graph.node(edge.target())?;

    let source_bounds = node_bounds(source);
    let target_bounds = node_bounds(target);

    // Bottom-center of the source box to top-center of the target box
    let start = Point::new(source_bounds.center().x(), source_bounds.max_y());
    let end = Point::new(target_bounds.center().x(), target_bounds.min_y());

    let style = edge.style();
    let mut line = svg_element::Line::new()
        .set("x1", start.x())
        .set("y1", start.y())
        .set("x2", end.x())
        .set("y2", end.y())
        .set("class", edge.kind().style_tag())
        .set("stroke", style.stroke().to_string())
        .set("stroke-width", style.width())
        .set("marker-end", format!("url(#{ARROW_MARKER_ID})"));

    if let Some(dash) = style.dash() {
        line = line.set("stroke-dasharray", dash);
    }

    Some(line)
}

/// Renders a node as a labeled rounded rectangle.
fn render_node(node: &Node) -> svg_element::Group {
    let style = node.style();
    let position = node.position();

    let rect = svg_element::Rectangle::new()
        .set("x", position.x())
        .set("y", position.y())
        .set("width", NODE_WIDTH)
        .set("height", NODE_HEIGHT)
        .set("rx", NODE_CORNER_RADIUS)
        .set("fill", style.fill().to_string())
        .set("stroke", style.stroke().to_string())
        .set("stroke-width", style.stroke_width());

    let center = node_bounds(node).center();
    let text = svg_element::Text::new(node.label())
        .set("x", center.x())
        .set("y", center.y() + FONT_SIZE / 3.0)
        .set("text-anchor", "middle")
        .set("font-family", FONT_FAMILY)
        .set("font-size", FONT_SIZE)
        .set("fill", style.text().to_string());

    svg_element::Group::new()
        .set("class", node.kind().style_tag())
        .add(rect)
        .add(text)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use ministream_core::snapshot::{ClientDescriptor, EdgeNodeDescriptor, TopologySnapshot};

    use super::*;
    use crate::reconcile::reconcile;

    fn sample_graph() -> Graph {
        let snapshot = TopologySnapshot::new(
            "network_api",
            vec![EdgeNodeDescriptor::new("edge-node-01")],
            vec![ClientDescriptor::new("cam-3", "edge-node-01")],
        );
        reconcile(&Graph::new(), &snapshot).unwrap()
    }

    fn export_to_string(graph: &Graph) -> String {
        let temp = tempfile::NamedTempFile::new().unwrap();
        let path = temp.path().to_string_lossy().to_string();

        let mut exporter = SvgBuilder::new(&path).build();
        exporter.export_graph(graph).unwrap();

        fs::read_to_string(&path).unwrap()
    }

    #[test]
    fn test_export_contains_all_entities() {
        let output = export_to_string(&sample_graph());

        assert!(output.contains("<svg"));
        assert!(output.contains("network_api"));
        assert!(output.contains("Edge Node: edge-node-01"));
        assert!(output.contains("Client: cam-3"));
    }

    #[test]
    fn test_export_tags_entities_by_style() {
        let output = export_to_string(&sample_graph());

        assert!(output.contains(r#"class="hub""#));
        assert!(output.contains(r#"class="edge-node""#));
        assert!(output.contains(r#"class="client""#));
        assert!(output.contains(r#"class="trunk""#));
        assert!(output.contains(r#"class="drop""#));
    }

    #[test]
    fn test_trunk_edges_render_dashed() {
        let output = export_to_string(&sample_graph());

        assert!(output.contains("stroke-dasharray"));
    }

    #[test]
    fn test_export_empty_graph() {
        let output = export_to_string(&Graph::new());

        assert!(output.contains("<svg"));
    }

    #[test]
    fn test_background_rendered_when_configured() {
        let graph = sample_graph();
        let plain = export_to_string(&graph);

        let temp = tempfile::NamedTempFile::new().unwrap();
        let path = temp.path().to_string_lossy().to_string();

        let background = Color::new("#ffffff").unwrap();
        let mut exporter = SvgBuilder::new(&path)
            .with_background(Some(background))
            .build();
        exporter.export_graph(&graph).unwrap();

        let with_background = fs::read_to_string(&path).unwrap();

        // One extra full-canvas rectangle compared to the plain export
        assert_eq!(
            with_background.matches("<rect").count(),
            plain.matches("<rect").count() + 1
        );
    }
}
