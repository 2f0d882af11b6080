//! In-process connectors

use log::info;

use crate::{Connector, ConnectorError};

/// Keeps every frame in memory
#[derive(Debug, Clone)]
pub struct MemoryConnector {
    frames: Vec<(String, Vec<u8>)>,
    connected: bool,
    fail_next: u32,
}

impl Default for MemoryConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryConnector {
    pub fn new() -> Self {
        Self {
            frames: Vec::new(),
            connected: true,
            fail_next: 0,
        }
    }

    /// Frames sent so far, with their topics
    pub fn frames(&self) -> &[(String, Vec<u8>)] {
        &self.frames
    }

    pub fn set_connected(&mut self, connected: bool) {
        self.connected = connected;
    }

    /// Make the next `n` sends fail
    pub fn fail_next(&mut self, n: u32) {
        self.fail_next = n;
    }
}

impl Connector for MemoryConnector {
    type Error = ConnectorError;

    fn send(&mut self, topic: &str, data: &[u8]) -> Result<(), Self::Error> {
        if !self.connected {
            return Err(ConnectorError::NotConnected);
        }
        if self.fail_next > 0 {
            self.fail_next -= 1;
            return Err(ConnectorError::Transport("injected failure".into()));
        }
        self.frames.push((topic.to_string(), data.to_vec()));
        Ok(())
    }

    fn is_connected(&self) -> bool {
        self.connected
    }
}

/// Writes frames to the log, one line each
#[derive(Debug, Clone, Copy, Default)]
pub struct LogConnector;

impl Connector for LogConnector {
    type Error = ConnectorError;

    fn send(&mut self, topic: &str, data: &[u8]) -> Result<(), Self::Error> {
        let text = core::str::from_utf8(data).map_err(|e| ConnectorError::Encode(e.to_string()))?;
        info!("[{}] {}", topic, text);
        Ok(())
    }

    fn is_connected(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_keeps_frames_in_order() {
        let mut connector = MemoryConnector::new();
        connector.send("a", b"1").unwrap();
        connector.send("b", b"2").unwrap();
        assert_eq!(connector.frames().len(), 2);
        assert_eq!(connector.frames()[1], ("b".to_string(), b"2".to_vec()));
    }

    #[test]
    fn log_connector_rejects_binary() {
        let mut connector = LogConnector;
        assert!(connector.send("t", b"{\"fc\":1}").is_ok());
        assert!(matches!(connector.send("t", &[0xff, 0xfe]), Err(ConnectorError::Encode(_))));
    }
}
