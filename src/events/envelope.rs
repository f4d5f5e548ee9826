// Copyright (c) 2025 - Cowboy AI, Inc.
//! Analytics Event Envelope
//!
//! Sum type over every known event family plus an open fallback. Use it where
//! one container or sink must hold events from several screens at once; the
//! match arms stay exhaustive.

use serde::{Deserialize, Serialize};

use super::book::{BookDetailEvent, BookListEvent};
use super::event::{Event, EventName};
use super::metadata::Metadata;
use super::wire::ToWire;

/// Any analytics event the application can raise
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "family", content = "event", rename_all = "snake_case")]
pub enum AnalyticsEvent {
    /// Events from the book list screen
    BookList(BookListEvent),

    /// Events from the book detail screen
    BookDetail(BookDetailEvent),

    /// Ad-hoc event with free-form metadata
    Generic(Event),
}

impl ToWire for AnalyticsEvent {
    fn family(&self) -> Option<&'static str> {
        match self {
            AnalyticsEvent::BookList(event) => event.family(),
            AnalyticsEvent::BookDetail(event) => event.family(),
            AnalyticsEvent::Generic(event) => event.family(),
        }
    }

    fn action(&self) -> EventName {
        match self {
            AnalyticsEvent::BookList(event) => event.action(),
            AnalyticsEvent::BookDetail(event) => event.action(),
            AnalyticsEvent::Generic(event) => event.action(),
        }
    }

    fn wire_metadata(&self) -> Metadata {
        match self {
            AnalyticsEvent::BookList(event) => event.wire_metadata(),
            AnalyticsEvent::BookDetail(event) => event.wire_metadata(),
            AnalyticsEvent::Generic(event) => event.wire_metadata(),
        }
    }
}

impl From<BookListEvent> for AnalyticsEvent {
    fn from(event: BookListEvent) -> Self {
        AnalyticsEvent::BookList(event)
    }
}

impl From<BookDetailEvent> for AnalyticsEvent {
    fn from(event: BookDetailEvent) -> Self {
        AnalyticsEvent::BookDetail(event)
    }
}

impl From<Event> for AnalyticsEvent {
    fn from(event: Event) -> Self {
        AnalyticsEvent::Generic(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::book::Book;
    use crate::events::metadata::metadata;
    use crate::events::wire::EventNaming;

    #[test]
    fn test_envelope_delegates_wire_shape() {
        let book = Book::new("X").unwrap();
        let inner = BookListEvent::book_added(book);
        let wrapped = AnalyticsEvent::from(inner.clone());

        assert_eq!(wrapped.to_wire(), inner.to_wire());
        assert_eq!(
            wrapped.to_wire_with(EventNaming::Scoped),
            inner.to_wire_with(EventNaming::Scoped)
        );
    }

    #[test]
    fn test_generic_keeps_name_when_scoped() {
        let event = Event::new("searchPerformed", metadata([("query", "rust")])).unwrap();
        let wrapped = AnalyticsEvent::from(event.clone());

        assert_eq!(wrapped.to_wire_with(EventNaming::Scoped), event);
    }

    #[test]
    fn test_mixed_container() {
        let book = Book::new("X").unwrap();
        let events: Vec<AnalyticsEvent> = vec![
            BookListEvent::book_added(book.clone()).into(),
            BookDetailEvent::book_read(book, 1).into(),
            Event::new("custom", Metadata::new()).unwrap().into(),
        ];

        let names: Vec<String> = events
            .iter()
            .map(|e| e.to_wire().name().to_string())
            .collect();
        assert_eq!(names, vec!["bookAdded", "bookRead", "custom"]);
    }
}
