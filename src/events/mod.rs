// Copyright (c) 2025 - Cowboy AI, Inc.
//! Analytics Events
//!
//! Events are immutable facts: each one is built at the moment a domain
//! action is confirmed and is never changed afterwards.
//!
//! # Two Forms
//!
//! - **Open**: [`Event`] stores a validated name and arbitrary [`Metadata`].
//!   Any sink must cope with any metadata shape.
//! - **Closed**: [`BookListEvent`] and [`BookDetailEvent`] fix one variant per
//!   action. Name and metadata are derived, so a malformed pair cannot be
//!   built. This is the default.
//!
//! [`ToWire`] turns either form into the open `(name, metadata)` shape that
//! transports consume.
//!
//! ```text
//! BookListEvent::BookAdded { book: "X" }
//!          │ to_wire()
//!          ▼
//! Event { name: "bookAdded", metadata: {"book": "X"} }
//! ```
//!
//! # Module Organization
//!
//! - [`metadata`](mod@metadata) - Metadata value union
//! - [`event`] - Open event and name validation
//! - [`wire`] - Naming conventions and wire conversion
//! - [`book`] - Closed book list / book detail families
//! - [`envelope`] - Sum type over all families

pub mod book;
pub mod envelope;
pub mod event;
pub mod metadata;
pub mod wire;

// Re-export commonly used types
pub use book::{Book, BookDetailEvent, BookError, BookListEvent, BOOK_KEY, READ_COUNT_KEY};
pub use envelope::AnalyticsEvent;
pub use event::{Event, EventError, EventName};
pub use metadata::{metadata, Metadata, MetadataValue};
pub use wire::{EventNaming, ToWire};
