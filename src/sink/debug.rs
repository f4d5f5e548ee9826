// Copyright (c) 2025 - Cowboy AI, Inc.
//! Local debug sink: logs the full event through `tracing`

use std::fmt::Debug;
use tracing::info;

use super::EventSink;
use crate::errors::SinkError;

/// Sink that logs each event's debug form at `INFO` level under the
/// `analytics::debug` target
#[derive(Debug, Clone)]
pub struct DebugSink {
    name: String,
}

impl DebugSink {
    pub fn new() -> Self {
        Self {
            name: "debug".to_string(),
        }
    }

    /// Override the diagnostic name
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Default for DebugSink {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Debug> EventSink<E> for DebugSink {
    fn log(&self, event: &E) -> Result<(), SinkError> {
        info!(target: "analytics::debug", sink = %self.name, event = ?event, "analytics event");
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{Book, BookDetailEvent};
    use std::sync::{Arc, Mutex};
    use tracing::{Level, Subscriber};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    /// Captures `(target, level)` of every event
    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<(String, Level)>>>);

    impl<S: Subscriber> Layer<S> for Captured {
        fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
            let meta = event.metadata();
            self.0
                .lock()
                .unwrap()
                .push((meta.target().to_string(), *meta.level()));
        }
    }

    #[test]
    fn test_debug_sink_accepts_any_family() {
        let sink = DebugSink::named("local");
        let event = BookDetailEvent::book_read(Book::new("X").unwrap(), 1);

        assert!(sink.log(&event).is_ok());
        assert!(sink.log(&42u32).is_ok());
        assert_eq!(EventSink::<u32>::name(&sink), "local");
    }

    #[test]
    fn test_debug_sink_logs_at_info_under_own_target() {
        let captured = Captured::default();
        let subscriber = tracing_subscriber::registry().with(captured.clone());

        tracing::subscriber::with_default(subscriber, || {
            DebugSink::new().log(&BookDetailEvent::view_appeared()).unwrap();
        });

        assert_eq!(
            *captured.0.lock().unwrap(),
            vec![("analytics::debug".to_string(), Level::INFO)]
        );
    }
}
