// Copyright (c) 2025 - Cowboy AI, Inc.
//! Recording sink - keeps a copy of every event it receives

use std::sync::{Mutex, PoisonError};

use super::EventSink;
use crate::errors::SinkError;

/// Sink that records events for later inspection
///
/// Useful for testing and for callers that want to assert on exactly what
/// an Event Source emitted.
#[derive(Debug)]
pub struct RecordingSink<E> {
    name: String,
    events: Mutex<Vec<E>>,
}

impl<E: Clone> RecordingSink<E> {
    /// Create an empty recording sink
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            events: Mutex::new(Vec::new()),
        }
    }

    /// Get a snapshot of recorded events
    pub fn events(&self) -> Vec<E> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of recorded events
    pub fn len(&self) -> usize {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// True when nothing was recorded
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Take all recorded events, leaving the sink empty
    pub fn take(&self) -> Vec<E> {
        std::mem::take(&mut *self.events.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

impl<E: Clone + Send> EventSink<E> for RecordingSink<E> {
    fn log(&self, event: &E) -> Result<(), SinkError> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event.clone());
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
