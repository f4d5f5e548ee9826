// Copyright (c) 2025 - Cowboy AI, Inc.
//! Transports
//!
//! A transport is the last hop: it takes a `(name, metadata)` pair and
//! delivers it somewhere. Transports are injected into
//! [`TransportSink`](crate::sink::TransportSink); there is no process-wide
//! instance.
//!
//! - [`ConsoleTransport`] - one formatted line per event (text or JSON)
//! - [`TracingTransport`] - one `tracing` event per analytics event
//! - [`MemoryTransport`] - records every send, for tests and inspection
//!
//! Sends are synchronous. A transport backed by an asynchronous client owns
//! its own concurrency and must not block the caller.

pub mod console;
pub mod memory;
pub mod traced;

use std::sync::Arc;

use crate::errors::TransportError;
use crate::events::Metadata;

pub use console::{ConsoleFormat, ConsoleTransport};
pub use memory::{MemoryTransport, SentEvent};
pub use traced::TracingTransport;

/// Delivers a wire-shaped event
pub trait Transport: Send + Sync {
    /// Send one event
    fn send(&self, name: &str, metadata: &Metadata) -> Result<(), TransportError>;

    /// Get the name of this transport
    fn name(&self) -> &str;
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn send(&self, name: &str, metadata: &Metadata) -> Result<(), TransportError> {
        (**self).send(name, metadata)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
