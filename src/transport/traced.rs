// Copyright (c) 2025 - Cowboy AI, Inc.
//! Transport that emits each analytics event as a `tracing` event

use tracing::info;

use super::Transport;
use crate::errors::TransportError;
use crate::events::Metadata;

/// Sends events to the active `tracing` subscriber
///
/// Metadata is rendered as JSON so nested maps stay readable in one field.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingTransport;

impl TracingTransport {
    /// Create a new tracing transport
    pub fn new() -> Self {
        Self
    }
}

impl Transport for TracingTransport {
    fn send(&self, name: &str, metadata: &Metadata) -> Result<(), TransportError> {
        let rendered = serde_json::to_string(metadata)?;
        info!(target: "analytics", event = name, metadata = %rendered, "analytics event");
        Ok(())
    }

    fn name(&self) -> &str {
        "tracing"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::metadata;

    #[test]
    fn test_send_without_subscriber() {
        let transport = TracingTransport::new();
        assert!(transport.send("bookAdded", &metadata([("book", "X")])).is_ok());
    }
}
