// Copyright (c) 2025 - Cowboy AI, Inc.
//! In-memory transport that records every send

use std::sync::{Mutex, PoisonError};

use super::Transport;
use crate::errors::TransportError;
use crate::events::Metadata;

/// One recorded send
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentEvent {
    pub name: String,
    pub metadata: Metadata,
}

/// Transport that keeps every sent event in memory
///
/// Useful as a capturing fake in tests.
#[derive(Debug, Default)]
pub struct MemoryTransport {
    sent: Mutex<Vec<SentEvent>>,
}

impl MemoryTransport {
    /// Create an empty memory transport
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a snapshot of everything sent so far
    pub fn sent(&self) -> Vec<SentEvent> {
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Names of everything sent so far, in order
    pub fn names(&self) -> Vec<String> {
        self.sent().into_iter().map(|e| e.name).collect()
    }

    /// Take all recorded events, leaving the transport empty
    pub fn take(&self) -> Vec<SentEvent> {
        std::mem::take(&mut *self.sent.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

impl Transport for MemoryTransport {
    fn send(&self, name: &str, metadata: &Metadata) -> Result<(), TransportError> {
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(SentEvent {
                name: name.to_string(),
                metadata: metadata.clone(),
            });
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
