//! Snapshot sources.
//!
//! A [`SnapshotSource`] is where topology snapshots come from. The topology
//! view only ever sees one snapshot at a time through this trait, so the
//! transport behind it (a file written by another process, a test stub, an
//! HTTP round trip) is interchangeable.

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::debug;

use ministream_core::snapshot::TopologySnapshot;

use crate::{FeedError, decode_snapshot};

/// A source of topology snapshots.
///
/// Implementations fetch and decode one snapshot per call. Fetching may fail
/// with a [`FeedError`]; the caller decides whether to retry, and the
/// previously rendered graph stays on display in the meantime.
pub trait SnapshotSource {
    /// Fetches the current topology snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError`] when the snapshot cannot be obtained or decoded.
    fn fetch(&mut self) -> Result<TopologySnapshot, FeedError>;
}

/// A snapshot source backed by a JSON file.
///
/// Reads and decodes the file on every fetch, so an external process
/// rewriting the file is picked up on the next poll cycle.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Creates a file source for the given path.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Returns the path this source reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotSource for FileSource {
    fn fetch(&mut self) -> Result<TopologySnapshot, FeedError> {
        debug!(path = self.path.display().to_string(); "Reading topology snapshot");
        let payload = fs::read_to_string(&self.path)?;
        decode_snapshot(&payload)
    }
}
