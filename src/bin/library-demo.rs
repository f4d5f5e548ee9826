// Copyright (c) 2025 - Cowboy AI, Inc.
//! Library Analytics Demo
//!
//! Drives the book list and book detail screens through a short session and
//! sends every confirmed action to the sinks chosen by configuration.
//!
//! Run with: cargo run --bin library-demo
//!
//! Environment:
//! - `ANALYTICS_SINKS` (default: `console`), e.g. `console,tracing,debug`
//! - `ANALYTICS_EVENT_NAMING` (default: `plain`)
//! - `ANALYTICS_CONSOLE_FORMAT` (default: `text`)
//! - `RUST_LOG` for the tracing filter
//!
//! The `debug` sink logs each event at `INFO` under the `analytics::debug`
//! target, so it shows with the default filter.

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;

use library_analytics::{
    AnalyticsConfig, Book, BookDetailController, BookDetailEvent, BookListController,
    BookListEvent, Collection, EventSink, Library,
};

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = AnalyticsConfig::from_env().context("Invalid analytics configuration")?;
    info!("Configuration loaded:");
    info!("  - Naming: {}", config.naming);
    info!("  - Console format: {}", config.console_format);
    info!("  - Sinks: {:?}", config.sinks);

    let list_sink: Arc<dyn EventSink<BookListEvent>> =
        Arc::new(config.build_sink::<BookListEvent>());
    let detail_sink: Arc<dyn EventSink<BookDetailEvent>> =
        Arc::new(config.build_sink::<BookDetailEvent>());

    let mut library = Library::new();

    {
        let mut list = BookListController::new(&mut library, list_sink);
        list.view_appeared();
        for title in ["Dune", "Neuromancer", "Hyperion"] {
            list.add_book(Book::new(title).context("Invalid book title")?);
        }

        // Out of range: no event
        if list.delete_book(10).is_none() {
            info!("Nothing to delete at index 10");
        }
        list.delete_book(1);
    }

    let mut detail = BookDetailController::new(&mut library, detail_sink);
    detail.view_appeared();
    detail.read_book(0);
    detail.read_book(0);
    detail.read_book(7);

    info!(
        books = detail.collection().len(),
        reads = detail.read_count(),
        "Session finished"
    );
    Ok(())
}
