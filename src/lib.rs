//! Analytics event dispatch for the library application
//!
//! This crate forwards user-interaction events (adding, deleting, reading a
//! book) from Event Sources to any number of analytics sinks, without the
//! call sites knowing how many sinks exist.

pub mod config;
pub mod controller;
pub mod errors;
pub mod events;
pub mod library;
pub mod sink;
pub mod transport;

// Re-export commonly used types
pub use config::{AnalyticsConfig, SinkKind};
pub use controller::{BookDetailController, BookListController};
pub use errors::{AnalyticsError, AnalyticsResult, SinkError, TransportError};
pub use events::{
    AnalyticsEvent, Book, BookDetailEvent, BookListEvent, Event, EventNaming, Metadata,
    MetadataValue, ToWire,
};
pub use library::{Collection, Library};
pub use sink::{compose, CompositeSink, EventSink};
pub use transport::Transport;
