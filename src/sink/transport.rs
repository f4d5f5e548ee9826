// Copyright (c) 2025 - Cowboy AI, Inc.
//! Transport Sink
//!
//! The "remote API" sink: converts any [`ToWire`] event into its wire shape
//! and hands it to an injected [`Transport`].
//!
//! ```text
//! BookListEvent ──to_wire_with(naming)──> (name, metadata) ──send──> Transport
//! ```

use std::fmt;
use std::sync::Arc;
use tracing::debug;

use super::EventSink;
use crate::errors::SinkError;
use crate::events::{EventNaming, ToWire};
use crate::transport::Transport;

/// Sink that forwards wire-shaped events to a transport
#[derive(Clone)]
pub struct TransportSink {
    name: String,
    naming: EventNaming,
    transport: Arc<dyn Transport>,
}

impl TransportSink {
    /// Create a sink over `transport`, named after it, with plain naming
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            name: transport.name().to_string(),
            naming: EventNaming::Plain,
            transport,
        }
    }

    /// Use the given naming convention on the wire
    pub fn with_naming(mut self, naming: EventNaming) -> Self {
        self.naming = naming;
        self
    }

    /// Override the diagnostic name
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Naming convention in use
    pub fn naming(&self) -> EventNaming {
        self.naming
    }
}

impl<E: ToWire> EventSink<E> for TransportSink {
    fn log(&self, event: &E) -> Result<(), SinkError> {
        let wire = event.to_wire_with(self.naming);
        debug!(sink = %self.name, event = wire.name(), "Sending event to transport");

        self.transport.send(wire.name(), wire.metadata())?;
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Debug for TransportSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransportSink")
            .field("name", &self.name)
            .field("naming", &self.naming)
            .field("transport", &self.transport.name())
            .finish()
    }
}
