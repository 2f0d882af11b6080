//! Telemetry Connectors for AirNode
//!
//! ## Overview
//!
//! The analysis core hands each [`CycleReport`](airnode_core::CycleReport) to
//! a [`TelemetrySink`](airnode_core::traits::TelemetrySink). This crate
//! provides the sink used on real nodes: [`FrameSink`] encodes the report into
//! a compact frame and pushes it through a [`Connector`].
//!
//! ```text
//! CycleReport → encode_frame → Connector::send(topic, bytes)
//! ```
//!
//! ## Frame Budget
//!
//! A LoRa packet carries at most 255 bytes. Readings are scaled to integers,
//! keys are one or two letters, and absent values are omitted. A frame that
//! still does not fit is dropped and counted, never truncated.
//!
//! ## Connectors
//!
//! | Connector          | Use                                   |
//! |--------------------|---------------------------------------|
//! | [`MemoryConnector`]| tests and demos, keeps every frame    |
//! | [`LogConnector`]   | serial console, writes frames to log  |
//!
//! Radio drivers implement [`Connector`] for their transceiver.
//!
//! ## Example Usage
//!
//! ```rust
//! use airnode_connectors::{FrameSink, MemoryConnector};
//! use airnode_core::traits::TelemetrySink;
//! use airnode_core::{CyclePipeline, NodeConfig, SensorSample};
//!
//! let mut pipeline = CyclePipeline::new(NodeConfig::default())?;
//! let report = pipeline.run_cycle(SensorSample::empty(0).with_gas(420.0, 30.0));
//!
//! let config = NodeConfig::default().with_node_id("node-8")?;
//! let mut sink = FrameSink::new(&config.node_id, "airnode/telemetry", MemoryConnector::new());
//! sink.publish(&report)?;
//! assert_eq!(sink.stats().messages_sent, 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod frame;
pub mod memory;
pub mod sink;

pub use frame::{encode_frame, encode_frame_within, CompactFrame};
pub use memory::{LogConnector, MemoryConnector};
pub use sink::FrameSink;

use thiserror::Error;

/// Common connector errors
#[derive(Debug, Error)]
pub enum ConnectorError {
    #[error("Not connected")]
    NotConnected,

    #[error("Frame too large: {len} bytes (max {max})")]
    FrameTooLarge { len: usize, max: usize },

    #[error("Encode error: {0}")]
    Encode(String),

    #[error("Transport error: {0}")]
    Transport(String),
}

impl From<serde_json::Error> for ConnectorError {
    fn from(e: serde_json::Error) -> Self {
        ConnectorError::Encode(e.to_string())
    }
}

/// Trait for all transport connectors
pub trait Connector {
    type Error: core::fmt::Display;

    /// Send one encoded frame
    fn send(&mut self, topic: &str, data: &[u8]) -> Result<(), Self::Error>;

    /// Check if connected
    fn is_connected(&self) -> bool;
}

/// Delivery statistics kept by a sink
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConnectionStats {
    /// Total frames sent successfully
    pub messages_sent: u64,
    /// Total frames the connector failed to send
    pub messages_failed: u64,
    /// Frames dropped before sending (too large, encode error)
    pub frames_rejected: u64,
    /// Total bytes sent
    pub bytes_sent: u64,
    /// Last error message
    pub last_error: Option<String>,
}
