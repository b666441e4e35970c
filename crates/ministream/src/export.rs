//! Exporters for the rendered topology graph.
//!
//! An exporter consumes the graph the reconciler produced and writes it to
//! some drawing surface. SVG is the only format currently provided.

pub mod svg;

use thiserror::Error;

use crate::graph::Graph;

/// Errors that occur while exporting a graph.
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Common interface for graph exporters.
pub trait Exporter {
    /// Exports the given graph to this exporter's output.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] when the output cannot be written.
    fn export_graph(&mut self, graph: &Graph) -> Result<(), Error>;
}
