// Copyright (c) 2025 - Cowboy AI, Inc.
//! Event Sinks
//!
//! A sink accepts a fully formed event and forwards it somewhere. Every sink
//! family uses one calling convention, [`EventSink::log`]; call sites never
//! learn how many sinks sit behind the one they hold.
//!
//! # Architecture
//!
//! ```text
//! Event Source ──log(e)──> CompositeSink
//!                             │ in construction order
//!                             ├──> TransportSink ──send──> ConsoleTransport
//!                             ├──> DebugSink ───────────> tracing
//!                             └──> CompositeSink (nested)
//!                                     ├──> ...
//!                                     └──> ...
//! ```
//!
//! # Family Guarantee
//!
//! `EventSink` is generic over the event type, so a
//! `CompositeSink<BookListEvent>` only accepts sinks that handle
//! `BookListEvent`. Sinks that only need the wire shape ([`TransportSink`])
//! implement `EventSink<E>` for every `E: ToWire` and fit any family.
//!
//! # Contract
//!
//! - Sinks never mutate the event.
//! - Unknown metadata keys are tolerated.
//! - A failure is returned as [`SinkError`]; composites isolate it.

pub mod composite;
pub mod debug;
pub mod envelope;
pub mod filtering;
pub mod recording;
pub mod transport;

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use crate::errors::SinkError;

pub use composite::{compose, CompositeSink, CompositeSinkBuilder, DispatchReport, SinkFailure};
pub use debug::DebugSink;
pub use envelope::EnvelopeSink;
pub use filtering::FilteringSink;
pub use recording::RecordingSink;
pub use transport::TransportSink;

/// Capability that accepts events of type `E`
pub trait EventSink<E>: Send + Sync {
    /// Forward one event
    ///
    /// Must not panic on structurally valid events. Failures are reported
    /// through the returned error.
    fn log(&self, event: &E) -> Result<(), SinkError>;

    /// Get the name of this sink, used in diagnostics
    fn name(&self) -> &str;
}

impl<E, S: EventSink<E> + ?Sized> EventSink<E> for Arc<S> {
    fn log(&self, event: &E) -> Result<(), SinkError> {
        (**self).log(event)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<E, S: EventSink<E> + ?Sized> EventSink<E> for Box<S> {
    fn log(&self, event: &E) -> Result<(), SinkError> {
        (**self).log(event)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Call `sink.log(event)`, turning a panic inside the sink into
/// [`SinkError::Panicked`]
pub(crate) fn log_isolated<E, S>(sink: &S, event: &E) -> Result<(), SinkError>
where
    S: EventSink<E> + ?Sized,
{
    panic::catch_unwind(AssertUnwindSafe(|| sink.log(event))).unwrap_or_else(|payload| {
        Err(SinkError::Panicked {
            sink: sink.name().to_string(),
            message: panic_message(payload.as_ref()),
        })
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
