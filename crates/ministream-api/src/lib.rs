//! Ministream network API feed layer.
//!
//! This crate turns the raw payloads of the Ministream network API into the
//! typed models the rest of the workspace consumes. It provides:
//!
//! - **Decoding**: JSON payload decoding for the topology snapshot and the
//!   device feeds ([`decode_snapshot`], [`decode_devices`],
//!   [`decode_device_status`], [`decode_capabilities`])
//! - **Sources**: the [`SnapshotSource`] trait and a file-backed
//!   implementation ([`FileSource`])
//! - **Polling**: a fixed-interval poller with latest-snapshot-wins delivery
//!   ([`Poller`])
//!
//! Transport is deliberately left behind the [`SnapshotSource`] seam: the
//! feed layer does not know whether snapshots come from a file, a test stub,
//! or a network round trip.

pub mod error;
pub mod model;
pub mod poll;
pub mod source;

pub use error::FeedError;
pub use poll::{PollHandle, Poller};
pub use source::{FileSource, SnapshotSource};

use log::trace;

use ministream_core::snapshot::TopologySnapshot;

use model::{DeviceStatus, EdgeNodeCapabilities};

/// Decodes a topology snapshot payload.
///
/// # Errors
///
/// Returns [`FeedError::Decode`] when the payload is not valid JSON or is
/// missing required fields.
///
/// # Examples
///
/// ```
/// let payload = r#"{"hub": "network_api", "edgeNodes": [], "clients": []}"#;
/// let snapshot = ministream_api::decode_snapshot(payload).unwrap();
/// assert_eq!(snapshot.hub(), "network_api");
/// ```
pub fn decode_snapshot(payload: &str) -> Result<TopologySnapshot, FeedError> {
    let snapshot: TopologySnapshot = serde_json::from_str(payload)?;
    trace!(
        hub = snapshot.hub(),
        edge_nodes = snapshot.edge_nodes().len(),
        clients = snapshot.clients().len();
        "Decoded topology snapshot"
    );
    Ok(snapshot)
}

/// Decodes the device list payload (a JSON array of device identities).
///
/// # Errors
///
/// Returns [`FeedError::Decode`] when the payload is not a JSON string array.
pub fn decode_devices(payload: &str) -> Result<Vec<String>, FeedError> {
    Ok(serde_json::from_str(payload)?)
}

/// Decodes a per-device status payload.
///
/// # Errors
///
/// Returns [`FeedError::Decode`] when the payload does not match the status
/// model.
pub fn decode_device_status(payload: &str) -> Result<DeviceStatus, FeedError> {
    Ok(serde_json::from_str(payload)?)
}

/// Decodes a per-device capabilities payload.
///
/// # Errors
///
/// Returns [`FeedError::Decode`] when the payload does not match the
/// capabilities model.
pub fn decode_capabilities(payload: &str) -> Result<EdgeNodeCapabilities, FeedError> {
    Ok(serde_json::from_str(payload)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_snapshot() {
        let payload = r#"{
            "hub": "network_api",
            "edgeNodes": [{"id": "edge-node-01"}],
            "clients": [{"id": "cam-3", "connectedTo": "edge-node-01"}]
        }"#;

        let snapshot = decode_snapshot(payload).unwrap();
        assert_eq!(snapshot.hub(), "network_api");
        assert_eq!(snapshot.edge_nodes().len(), 1);
        assert_eq!(snapshot.clients().len(), 1);
    }

    #[test]
    fn test_decode_snapshot_rejects_invalid_json() {
        let result = decode_snapshot("{ not json");
        assert!(matches!(result, Err(FeedError::Decode(_))));
    }

    #[test]
    fn test_decode_snapshot_rejects_missing_hub() {
        let result = decode_snapshot(r#"{"edgeNodes": [], "clients": []}"#);
        assert!(matches!(result, Err(FeedError::Decode(_))));
    }

    #[test]
    fn test_decode_devices() {
        let devices = decode_devices(r#"["edge-node-01", "edge-node-02"]"#).unwrap();
        assert_eq!(devices, ["edge-node-01", "edge-node-02"]);
    }

    #[test]
    fn test_decode_device_status() {
        let payload = r#"{"id": "edge-node-01", "status": "idle", "sensors": []}"#;
        let status = decode_device_status(payload).unwrap();
        assert_eq!(status.status(), "idle");
    }

    #[test]
    fn test_decode_capabilities() {
        let payload = r#"{
            "node_type": "jetson",
            "hardware_info": {},
            "sensors": [],
            "supported_encodings": ["h264"]
        }"#;
        let capabilities = decode_capabilities(payload).unwrap();
        assert_eq!(capabilities.supported_encodings(), ["h264"]);
    }
}
