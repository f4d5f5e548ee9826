// Copyright (c) 2025 - Cowboy AI, Inc.
//! Event Sources
//!
//! Controllers perform a domain action through a [`Collection`] and, only
//! when the collection reports success, build an event and hand it to their
//! sink.
//!
//! ```text
//! delete_book(index)
//!     │
//!     ▼
//! collection.delete(index) ──None──> return None        (no event)
//!     │ Some(book)
//!     ▼
//! sink.log(BookDeleted { book }) ──Err/panic──> warn!, ignored
//!     │
//!     ▼
//! return Some(book)
//! ```
//!
//! Analytics is best effort: a sink that fails or panics is logged and never
//! changes the value the domain action returns.
//!
//! [`Collection`]: crate::library::Collection

pub mod book_detail;
pub mod book_list;

use std::fmt::Debug;
use tracing::warn;

use crate::sink::{log_isolated, EventSink};

pub use book_detail::BookDetailController;
pub use book_list::BookListController;

/// Hand `event` to `sink`, logging instead of propagating a failure
pub(crate) fn emit<E: Debug>(sink: &dyn EventSink<E>, event: &E) {
    if let Err(error) = log_isolated(sink, event) {
        warn!(
            sink = sink.name(),
            event = ?event,
            error = %error,
            "Analytics emission failed"
        );
    }
}
