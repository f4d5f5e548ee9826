// Copyright (c) 2025 - Cowboy AI, Inc.
//! Composite Sink
//!
//! Fans one event out to a fixed, ordered list of member sinks.
//!
//! # Dispatch Rules
//!
//! 1. Members are called in the order they were supplied
//! 2. Every member is called, even after an earlier one failed or panicked
//! 3. Failures are logged and collected in a [`DispatchReport`], never propagated
//! 4. An empty composite does nothing
//!
//! A composite is itself an [`EventSink`], so composites nest. Nested
//! delivery is depth-first, left to right.
//!
//! # Example
//!
//! ```rust
//! use library_analytics::events::{Book, BookListEvent};
//! use library_analytics::sink::{CompositeSink, EventSink, RecordingSink};
//! use std::sync::Arc;
//!
//! let first = Arc::new(RecordingSink::<BookListEvent>::new("first"));
//! let second = Arc::new(RecordingSink::<BookListEvent>::new("second"));
//!
//! let composite = CompositeSink::<BookListEvent>::builder()
//!     .with_shared(first.clone())
//!     .with_shared(second.clone())
//!     .build();
//!
//! let event = BookListEvent::book_added(Book::new("Dune").unwrap());
//! composite.log(&event).unwrap();
//!
//! assert_eq!(first.events(), vec![event.clone()]);
//! assert_eq!(second.events(), vec![event]);
//! ```

use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

use super::{log_isolated, EventSink};
use crate::errors::SinkError;

/// One member failure recorded during dispatch
#[derive(Debug)]
pub struct SinkFailure {
    /// Position of the member in the composite
    pub index: usize,
    /// Name of the failing member
    pub sink: String,
    /// What went wrong
    pub error: SinkError,
}

/// Outcome of a single [`CompositeSink::dispatch`]
#[derive(Debug, Default)]
pub struct DispatchReport {
    /// Members that accepted the event
    pub delivered: usize,
    /// Members that failed, in dispatch order
    pub failures: Vec<SinkFailure>,
}

impl DispatchReport {
    /// True when every member accepted the event
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// Total number of members called
    pub fn attempted(&self) -> usize {
        self.delivered + self.failures.len()
    }
}

/// Sink that forwards every event to all of its members
pub struct CompositeSink<E> {
    name: String,
    members: Vec<Arc<dyn EventSink<E>>>,
}

impl<E> CompositeSink<E> {
    /// Default name used in diagnostics
    pub const DEFAULT_NAME: &'static str = "composite";

    /// Start building a composite
    pub fn builder() -> CompositeSinkBuilder<E> {
        CompositeSinkBuilder::new()
    }

    /// Composite with no members; every dispatch is a no-op
    pub fn empty() -> Self {
        Self::builder().build()
    }

    /// Number of members
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// True when there are no members
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Member names in dispatch order
    pub fn member_names(&self) -> Vec<&str> {
        self.members.iter().map(|m| m.name()).collect()
    }

    /// Forward `event` to every member, in order
    pub fn dispatch(&self, event: &E) -> DispatchReport {
        let mut report = DispatchReport::default();

        for (index, member) in self.members.iter().enumerate() {
            match log_isolated(member.as_ref(), event) {
                Ok(()) => report.delivered += 1,
                Err(error) => {
                    warn!(
                        composite = %self.name,
                        sink = member.name(),
                        index,
                        error = %error,
                        "Sink failed, continuing dispatch"
                    );
                    report.failures.push(SinkFailure {
                        index,
                        sink: member.name().to_string(),
                        error,
                    });
                }
            }
        }

        debug!(
            composite = %self.name,
            delivered = report.delivered,
            failed = report.failures.len(),
            "Dispatched event"
        );
        report
    }
}

impl<E> EventSink<E> for CompositeSink<E> {
    /// Dispatch to all members; member failures are isolated, so this never fails
    fn log(&self, event: &E) -> Result<(), SinkError> {
        self.dispatch(event);
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl<E> Default for CompositeSink<E> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<E> fmt::Debug for CompositeSink<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeSink")
            .field("name", &self.name)
            .field("members", &self.member_names())
            .finish()
    }
}

/// Builder collecting members in the order they are added
pub struct CompositeSinkBuilder<E> {
    name: String,
    members: Vec<Arc<dyn EventSink<E>>>,
}

impl<E> CompositeSinkBuilder<E> {
    /// Create an empty builder
    pub fn new() -> Self {
        Self {
            name: CompositeSink::<E>::DEFAULT_NAME.to_string(),
            members: Vec::new(),
        }
    }

    /// Name the composite for diagnostics
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Append a sink the composite will own
    pub fn with<S>(mut self, sink: S) -> Self
    where
        S: EventSink<E> + 'static,
    {
        self.members.push(Arc::new(sink));
        self
    }

    /// Append a sink shared with other owners
    pub fn with_shared(mut self, sink: Arc<dyn EventSink<E>>) -> Self {
        self.members.push(sink);
        self
    }

    /// Freeze the member list
    pub fn build(self) -> CompositeSink<E> {
        CompositeSink {
            name: self.name,
            members: self.members,
        }
    }
}

impl<E> Default for CompositeSinkBuilder<E> {
    fn default() -> Self {
        Self::new()
    }
}

/// Compose sinks into one, preserving their order
pub fn compose<E, I>(members: I) -> CompositeSink<E>
where
    I: IntoIterator<Item = Arc<dyn EventSink<E>>>,
{
    members
        .into_iter()
        .fold(CompositeSink::builder(), |builder, sink| {
            builder.with_shared(sink)
        })
        .build()
}
