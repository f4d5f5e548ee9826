// Copyright (c) 2025 - Cowboy AI, Inc.
//! Test Fixtures for library-analytics
//!
//! Deterministic books, libraries and instrumented sinks shared by the
//! integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use library_analytics::events::{Book, BookListEvent};
use library_analytics::sink::EventSink;
use library_analytics::{Library, SinkError};

/// Build a book from a known-good title
pub fn book(title: &str) -> Book {
    Book::new(title).expect("Invalid book title in test fixture")
}

/// Build a library holding the given titles in order
pub fn library(titles: &[&str]) -> Library {
    titles.iter().map(|t| book(t)).collect()
}

/// Shared, ordered record of which sink saw which event
pub type Journal = Arc<Mutex<Vec<(String, String)>>>;

pub fn journal() -> Journal {
    Arc::new(Mutex::new(Vec::new()))
}

/// Entries of a journal as `(sink, event)` pairs
pub fn entries(journal: &Journal) -> Vec<(String, String)> {
    journal.lock().expect("journal poisoned").clone()
}

/// Sink names of a journal, in delivery order
pub fn sinks_in_order(journal: &Journal) -> Vec<String> {
    entries(journal).into_iter().map(|(sink, _)| sink).collect()
}

/// Sink that writes `(name, event)` to a shared journal
pub struct JournalSink {
    name: String,
    journal: Journal,
}

impl JournalSink {
    pub fn new(name: impl Into<String>, journal: &Journal) -> Self {
        Self {
            name: name.into(),
            journal: Arc::clone(journal),
        }
    }
}

impl<E: std::fmt::Debug> EventSink<E> for JournalSink {
    fn log(&self, event: &E) -> Result<(), SinkError> {
        self.journal
            .lock()
            .expect("journal poisoned")
            .push((self.name.clone(), format!("{:?}", event)));
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// How a [`FaultySink`] fails
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    /// Return a `SinkError`
    Error,
    /// Panic inside `log`
    Panic,
}

/// Fault-injecting sink: records the attempt, then fails
pub struct FaultySink {
    name: String,
    fault: Fault,
    journal: Journal,
}

impl FaultySink {
    pub fn new(name: impl Into<String>, fault: Fault, journal: &Journal) -> Self {
        Self {
            name: name.into(),
            fault,
            journal: Arc::clone(journal),
        }
    }
}

impl<E: std::fmt::Debug> EventSink<E> for FaultySink {
    fn log(&self, event: &E) -> Result<(), SinkError> {
        self.journal
            .lock()
            .expect("journal poisoned")
            .push((self.name.clone(), format!("{:?}", event)));

        match self.fault {
            Fault::Error => Err(SinkError::Rejected {
                sink: self.name.clone(),
                reason: "injected failure".to_string(),
            }),
            Fault::Panic => panic!("injected panic in {}", self.name),
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// A representative book list event
pub fn book_added_fixture() -> BookListEvent {
    BookListEvent::book_added(book("X"))
}
