// Copyright (c) 2025 - Cowboy AI, Inc.
//! Envelope sink
//!
//! Lets one application-wide `EventSink<AnalyticsEvent>` sit inside
//! family-specific composites. Each family event is wrapped in its
//! [`AnalyticsEvent`] variant before it reaches the inner sink.

use super::EventSink;
use crate::errors::SinkError;
use crate::events::AnalyticsEvent;

/// Adapts an `EventSink<AnalyticsEvent>` to any family event
#[derive(Debug, Clone)]
pub struct EnvelopeSink<S> {
    inner: S,
}

impl<S> EnvelopeSink<S>
where
    S: EventSink<AnalyticsEvent>,
{
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    /// Borrow the wrapped sink
    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S, E> EventSink<E> for EnvelopeSink<S>
where
    S: EventSink<AnalyticsEvent>,
    E: Clone + Into<AnalyticsEvent>,
{
    fn log(&self, event: &E) -> Result<(), SinkError> {
        self.inner.log(&event.clone().into())
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{Book, BookDetailEvent, BookListEvent};
    use crate::sink::RecordingSink;
    use std::sync::Arc;

    #[test]
    fn test_families_share_one_app_sink() {
        let app: Arc<RecordingSink<AnalyticsEvent>> = Arc::new(RecordingSink::new("app"));
        let list_sink = EnvelopeSink::new(app.clone());
        let detail_sink = EnvelopeSink::new(app.clone());

        let book = Book::new("X").unwrap();
        list_sink.log(&BookListEvent::book_added(book.clone())).unwrap();
        detail_sink
            .log(&BookDetailEvent::book_read(book.clone(), 1))
            .unwrap();

        assert_eq!(
            app.events(),
            vec![
                AnalyticsEvent::BookList(BookListEvent::book_added(book.clone())),
                AnalyticsEvent::BookDetail(BookDetailEvent::book_read(book, 1)),
            ]
        );
    }
}
