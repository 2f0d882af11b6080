//! Report-to-connector sink

use airnode_core::config::NodeId;
use airnode_core::traits::TelemetrySink;
use airnode_core::CycleReport;
use log::{debug, warn};

use crate::frame::encode_frame;
use crate::{ConnectionStats, Connector, ConnectorError};

/// Encodes each report and sends it on one topic
///
/// The node id is the bounded [`NodeId`] from the node configuration, so a
/// complete frame always fits the packet limit.
pub struct FrameSink<C> {
    node_id: NodeId,
    topic: String,
    connector: C,
    stats: ConnectionStats,
}

impl<C: Connector> FrameSink<C> {
    /// Sink for `node_id`, publishing on `topic`
    pub fn new(node_id: &NodeId, topic: impl Into<String>, connector: C) -> Self {
        Self {
            node_id: node_id.clone(),
            topic: topic.into(),
            connector,
            stats: ConnectionStats::default(),
        }
    }

    /// Delivery counters
    pub fn stats(&self) -> &ConnectionStats {
        &self.stats
    }

    /// Wrapped connector
    pub fn connector(&self) -> &C {
        &self.connector
    }

    /// Wrapped connector, mutable
    pub fn connector_mut(&mut self) -> &mut C {
        &mut self.connector
    }

    fn reject(&mut self, e: ConnectorError) -> ConnectorError {
        warn!("frame dropped: {}", e);
        self.stats.frames_rejected += 1;
        self.stats.last_error = Some(e.to_string());
        e
    }
}

impl<C: Connector> TelemetrySink for FrameSink<C> {
    type Error = ConnectorError;

    fn publish(&mut self, report: &CycleReport) -> Result<(), Self::Error> {
        let frame = encode_frame(self.node_id.as_str(), report).map_err(|e| self.reject(e))?;

        if !self.connector.is_connected() {
            self.stats.messages_failed += 1;
            self.stats.last_error = Some(ConnectorError::NotConnected.to_string());
            return Err(ConnectorError::NotConnected);
        }

        match self.connector.send(&self.topic, &frame) {
            Ok(()) => {
                self.stats.messages_sent += 1;
                self.stats.bytes_sent += frame.len() as u64;
                debug!("frame {} sent ({} bytes)", report.cycle, frame.len());
                Ok(())
            }
            Err(e) => {
                let message = e.to_string();
                warn!("frame {} failed: {}", report.cycle, message);
                self.stats.messages_failed += 1;
                self.stats.last_error = Some(message.clone());
                Err(ConnectorError::Transport(message))
            }
        }
    }
}
