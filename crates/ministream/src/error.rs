//! Error types for Ministream topology operations.
//!
//! This module provides the main error type [`MinistreamError`] which wraps
//! the error conditions that can occur while acquiring, reconciling, and
//! rendering topology snapshots.

use std::io;

use thiserror::Error;

use ministream_api::FeedError;

use crate::reconcile::ReconcileError;

/// The main error type for Ministream topology operations.
///
/// `Feed` covers snapshot acquisition (the snapshot never existed);
/// `Reconcile` covers a snapshot that was obtained but rejected. In both
/// cases the previously committed graph remains valid and displayed.
#[derive(Debug, Error)]
pub enum MinistreamError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("feed error: {0}")]
    Feed(#[from] FeedError),

    #[error("reconciliation error: {0}")]
    Reconcile(#[from] ReconcileError),

    #[error("graph error: {0}")]
    Graph(String),

    #[error("export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<crate::export::Error> for MinistreamError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}
