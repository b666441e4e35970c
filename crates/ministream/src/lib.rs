//! Ministream - topology reconciliation and rendering for the Ministream
//! control panel.
//!
//! The network API reports system topology as periodic snapshots. This crate
//! turns those snapshots into a stable render graph: unchanged devices keep
//! their positions across refreshes (no visual jitter every poll cycle), new
//! devices appear at deterministic initial positions, and devices missing
//! from the latest snapshot disappear.

pub mod config;
pub mod export;

mod error;
mod graph;
mod reconcile;

pub use ministream_core::{color, geometry, identifier, snapshot, style};

pub use error::MinistreamError;
pub use graph::{Edge, Graph, Node};
pub use reconcile::{ReconcileError, reconcile};

use std::fs;

use log::{debug, info};

use ministream_api::SnapshotSource;
use ministream_core::{geometry::Point, identifier::Id, snapshot::TopologySnapshot};

use config::AppConfig;
use export::Exporter;

/// The current topology display state and the operations that evolve it.
///
/// A `TopologyView` owns the render graph and applies snapshots to it one at
/// a time. A snapshot is committed only when reconciliation succeeds; on
/// error the previous graph remains in place, so the display never shows a
/// partially applied snapshot.
///
/// # Examples
///
/// ```
/// use ministream::{TopologyView, config::AppConfig};
/// use ministream_core::snapshot::{EdgeNodeDescriptor, TopologySnapshot};
///
/// let mut view = TopologyView::new(AppConfig::default());
///
/// let snapshot = TopologySnapshot::new(
///     "network_api",
///     vec![EdgeNodeDescriptor::new("edge-node-01")],
///     vec![],
/// );
/// view.apply(&snapshot).expect("snapshot is valid");
///
/// assert_eq!(view.graph().node_count(), 2);
/// let svg = view.render_svg().expect("rendering succeeds");
/// assert!(svg.contains("<svg"));
/// ```
#[derive(Default)]
pub struct TopologyView {
    config: AppConfig,
    graph: Graph,
}

impl TopologyView {
    /// Creates a view with an empty graph (the bootstrap state).
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including poll and style settings
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            graph: Graph::new(),
        }
    }

    /// Returns the currently committed graph.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Returns the view's configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Applies a topology snapshot to the view.
    ///
    /// The reconciled graph is committed only on success; on error the
    /// previously committed graph is retained unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`MinistreamError::Reconcile`] when the snapshot is malformed
    /// or violates referential integrity.
    pub fn apply(&mut self, snapshot: &TopologySnapshot) -> Result<(), MinistreamError> {
        info!(hub = snapshot.hub(); "Applying topology snapshot");

        let next = reconcile(&self.graph, snapshot)?;
        debug!(
            nodes = next.node_count(),
            edges = next.edge_count();
            "Snapshot reconciled"
        );

        self.graph = next;
        Ok(())
    }

    /// Fetches a snapshot from the given source and applies it.
    ///
    /// # Errors
    ///
    /// Returns [`MinistreamError::Feed`] when the fetch fails and
    /// [`MinistreamError::Reconcile`] when the snapshot is rejected; the
    /// committed graph is retained in both cases.
    pub fn refresh(&mut self, source: &mut impl SnapshotSource) -> Result<(), MinistreamError> {
        let snapshot = source.fetch()?;
        self.apply(&snapshot)
    }

    /// Moves a node to a new position, as the operator dragging it would.
    ///
    /// The position becomes part of the node's persistent visual state and
    /// survives subsequent snapshot applications.
    ///
    /// # Errors
    ///
    /// Returns [`MinistreamError::Graph`] when no node with the given
    /// identity exists.
    pub fn move_node(&mut self, id: Id, position: Point) -> Result<(), MinistreamError> {
        if self.graph.move_node(id, position) {
            Ok(())
        } else {
            Err(MinistreamError::Graph(format!("unknown node `{id}`")))
        }
    }

    /// Renders the committed graph to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns [`MinistreamError`] for configuration or rendering errors.
    pub fn render_svg(&self) -> Result<String, MinistreamError> {
        let background = self
            .config
            .style()
            .background_color()
            .map_err(|err| MinistreamError::Export(err.into()))?;

        // Render to SVG using a temporary file
        // TODO: In the future, modify SvgBuilder to support in-memory rendering
        let temp_file =
            tempfile::NamedTempFile::new().map_err(|err| MinistreamError::Export(Box::new(err)))?;
        let temp_path = temp_file.path().to_string_lossy().to_string();

        let mut exporter = export::svg::SvgBuilder::new(&temp_path)
            .with_background(background)
            .build();
        exporter.export_graph(&self.graph)?;

        // Read the SVG content back from the temp file
        let svg_string = fs::read_to_string(&temp_path).map_err(MinistreamError::Io)?;

        debug!("SVG rendered successfully");
        Ok(svg_string)
    }
}
