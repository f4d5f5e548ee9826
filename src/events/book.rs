// Copyright (c) 2025 - Cowboy AI, Inc.
//! Book Events
//!
//! Closed event families for the two book screens. Each variant carries
//! exactly the payload its action needs; name and metadata are derived.
//!
//! | Family            | Variant        | Wire name       | Metadata                          |
//! |-------------------|----------------|-----------------|-----------------------------------|
//! | `BookListEvent`   | `BookAdded`    | `bookAdded`     | `{"book": title}`                 |
//! | `BookListEvent`   | `BookDeleted`  | `bookDeleted`   | `{"book": title}`                 |
//! | `BookListEvent`   | `ViewAppeared` | `viewAppeared`  | `{}`                              |
//! | `BookDetailEvent` | `BookRead`     | `bookRead`      | `{"book": title, "readCount": n}` |
//! | `BookDetailEvent` | `ViewAppeared` | `viewAppeared`  | `{}`                              |

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use super::event::EventName;
use super::metadata::{Metadata, MetadataValue};
use super::wire::ToWire;

/// Metadata key holding the book title
pub const BOOK_KEY: &str = "book";

/// Metadata key holding the read count
pub const READ_COUNT_KEY: &str = "readCount";

const BOOK_ADDED: EventName = EventName::from_static("bookAdded");
const BOOK_DELETED: EventName = EventName::from_static("bookDeleted");
const BOOK_READ: EventName = EventName::from_static("bookRead");
const VIEW_APPEARED: EventName = EventName::from_static("viewAppeared");

/// Book validation error
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BookError {
    #[error("Book title is empty")]
    EmptyTitle,
}

/// A book, identified by its title
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Book(String);

impl Book {
    /// Create a book with a non-empty title
    pub fn new(title: impl Into<String>) -> Result<Self, BookError> {
        let title = title.into();

        if title.trim().is_empty() {
            return Err(BookError::EmptyTitle);
        }

        Ok(Self(title))
    }

    /// Book title
    pub fn title(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Book {
    type Error = BookError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Book {
    type Error = BookError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Book> for String {
    fn from(value: Book) -> Self {
        value.0
    }
}

fn book_metadata(book: &Book) -> Metadata {
    let mut metadata = Metadata::new();
    metadata.insert(BOOK_KEY.to_string(), MetadataValue::from(book.title()));
    metadata
}

/// Events raised by the book list screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BookListEvent {
    /// A book was added to the library
    BookAdded { book: Book },

    /// A book was removed from the library
    BookDeleted { book: Book },

    /// The list screen became visible
    ViewAppeared,
}

impl BookListEvent {
    /// Family prefix for scoped names
    pub const FAMILY: &'static str = "bookList";

    pub fn book_added(book: Book) -> Self {
        BookListEvent::BookAdded { book }
    }

    pub fn book_deleted(book: Book) -> Self {
        BookListEvent::BookDeleted { book }
    }

    pub fn view_appeared() -> Self {
        BookListEvent::ViewAppeared
    }

    /// The book this event is about, if any
    pub fn book(&self) -> Option<&Book> {
        match self {
            BookListEvent::BookAdded { book } | BookListEvent::BookDeleted { book } => Some(book),
            BookListEvent::ViewAppeared => None,
        }
    }
}

impl ToWire for BookListEvent {
    fn family(&self) -> Option<&'static str> {
        Some(Self::FAMILY)
    }

    fn action(&self) -> EventName {
        match self {
            BookListEvent::BookAdded { .. } => BOOK_ADDED,
            BookListEvent::BookDeleted { .. } => BOOK_DELETED,
            BookListEvent::ViewAppeared => VIEW_APPEARED,
        }
    }

    fn wire_metadata(&self) -> Metadata {
        match self {
            BookListEvent::BookAdded { book } | BookListEvent::BookDeleted { book } => {
                book_metadata(book)
            }
            BookListEvent::ViewAppeared => Metadata::new(),
        }
    }
}

/// Events raised by the book detail screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BookDetailEvent {
    /// A book was read; `read_count` counts reads in the current session
    BookRead { book: Book, read_count: u32 },

    /// The detail screen became visible
    ViewAppeared,
}

impl BookDetailEvent {
    /// Family prefix for scoped names
    pub const FAMILY: &'static str = "bookDetail";

    pub fn book_read(book: Book, read_count: u32) -> Self {
        BookDetailEvent::BookRead { book, read_count }
    }

    pub fn view_appeared() -> Self {
        BookDetailEvent::ViewAppeared
    }
}

impl ToWire for BookDetailEvent {
    fn family(&self) -> Option<&'static str> {
        Some(Self::FAMILY)
    }

    fn action(&self) -> EventName {
        match self {
            BookDetailEvent::BookRead { .. } => BOOK_READ,
            BookDetailEvent::ViewAppeared => VIEW_APPEARED,
        }
    }

    fn wire_metadata(&self) -> Metadata {
        match self {
            BookDetailEvent::BookRead { book, read_count } => {
                let mut metadata = book_metadata(book);
                metadata.insert(
                    READ_COUNT_KEY.to_string(),
                    MetadataValue::from(*read_count),
                );
                metadata
            }
            BookDetailEvent::ViewAppeared => Metadata::new(),
        }
    }
}
