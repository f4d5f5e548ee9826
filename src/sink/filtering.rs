// Copyright (c) 2025 - Cowboy AI, Inc.
//! Filtering sink - wraps another sink and forwards only selected events

use super::EventSink;
use crate::errors::SinkError;

/// Forwards an event to the inner sink only when the predicate accepts it
///
/// Events the predicate rejects are dropped silently.
pub struct FilteringSink<S, E> {
    inner: S,
    filter: Box<dyn Fn(&E) -> bool + Send + Sync>,
}

impl<S, E> FilteringSink<S, E>
where
    S: EventSink<E>,
{
    /// Create a new filtering sink
    ///
    /// # Arguments
    ///
    /// * `inner` - Underlying sink
    /// * `filter` - Predicate deciding which events reach `inner`
    pub fn new<F>(inner: S, filter: F) -> Self
    where
        F: Fn(&E) -> bool + Send + Sync + 'static,
    {
        Self {
            inner,
            filter: Box::new(filter),
        }
    }

    /// Borrow the wrapped sink
    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S, E> EventSink<E> for FilteringSink<S, E>
where
    S: EventSink<E>,
{
    fn log(&self, event: &E) -> Result<(), SinkError> {
        if (self.filter)(event) {
            self.inner.log(event)
        } else {
            Ok(())
        }
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}
