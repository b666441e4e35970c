//! Typed models for the device feeds of the network API.
//!
//! These mirror the payloads served next to the topology endpoint: the
//! device list, per-device status, and per-device capabilities consumed by
//! list/detail displays, plus the stream configuration submitted back to a
//! device.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A sensor attached to an edge node.
#[derive(Debug, Clone, Deserialize)]
pub struct SensorInfo {
    id: String,
    name: String,
    resolutions: Vec<String>,
    max_fps: f64,
}

impl SensorInfo {
    /// Returns the sensor identity.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the human-readable sensor name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the resolutions this sensor supports.
    pub fn resolutions(&self) -> &[String] {
        &self.resolutions
    }

    /// Returns the maximum frame rate this sensor supports.
    pub fn max_fps(&self) -> f64 {
        self.max_fps
    }
}

/// Stream configuration submitted to a device.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreamConfig {
    resolution: String,
    fps: f64,
    encoding: String,
}

impl StreamConfig {
    /// Creates a new stream configuration.
    pub fn new(resolution: impl Into<String>, fps: f64, encoding: impl Into<String>) -> Self {
        Self {
            resolution: resolution.into(),
            fps,
            encoding: encoding.into(),
        }
    }

    /// Returns the requested resolution.
    pub fn resolution(&self) -> &str {
        &self.resolution
    }

    /// Returns the requested frame rate.
    pub fn fps(&self) -> f64 {
        self.fps
    }

    /// Returns the requested encoding.
    pub fn encoding(&self) -> &str {
        &self.encoding
    }
}

/// Current status of a device, as reported by the device itself.
#[derive(Debug, Clone, Deserialize)]
pub struct DeviceStatus {
    id: String,
    status: String,
    sensors: Vec<SensorInfo>,
}

impl DeviceStatus {
    /// Returns the device identity.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the reported status string.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Returns the sensors the device reports.
    pub fn sensors(&self) -> &[SensorInfo] {
        &self.sensors
    }
}

/// Capabilities advertised by an edge node at registration time.
#[derive(Debug, Clone, Deserialize)]
pub struct EdgeNodeCapabilities {
    node_type: String,
    hardware_info: HashMap<String, String>,
    sensors: Vec<SensorInfo>,
    supported_encodings: Vec<String>,
}

impl EdgeNodeCapabilities {
    /// Returns the node type string.
    pub fn node_type(&self) -> &str {
        &self.node_type
    }

    /// Returns the advertised hardware information.
    pub fn hardware_info(&self) -> &HashMap<String, String> {
        &self.hardware_info
    }

    /// Returns the sensors the node advertises.
    pub fn sensors(&self) -> &[SensorInfo] {
        &self.sensors
    }

    /// Returns the encodings the node can produce.
    pub fn supported_encodings(&self) -> &[String] {
        &self.supported_encodings
    }
}

/// Registration record for an edge node: where it lives and what it can do.
#[derive(Debug, Clone, Deserialize)]
pub struct EdgeNodeInfo {
    id: String,
    ip_address: String,
    port: u16,
    capabilities: EdgeNodeCapabilities,
}

impl EdgeNodeInfo {
    /// Returns the node identity.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the node's IP address.
    pub fn ip_address(&self) -> &str {
        &self.ip_address
    }

    /// Returns the node's port.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Returns the node's advertised capabilities.
    pub fn capabilities(&self) -> &EdgeNodeCapabilities {
        &self.capabilities
    }
}
