// Copyright (c) 2025 - Cowboy AI, Inc.
//! Book list Event Source

use std::sync::Arc;

use super::emit;
use crate::events::{Book, BookListEvent};
use crate::library::Collection;
use crate::sink::EventSink;

/// Event Source behind the book list screen
///
/// Emits [`BookListEvent`]s to a single sink; pass a
/// [`CompositeSink`](crate::sink::CompositeSink) to reach several back ends.
pub struct BookListController<C> {
    collection: C,
    sink: Arc<dyn EventSink<BookListEvent>>,
}

impl<C> BookListController<C>
where
    C: Collection<Item = Book>,
{
    pub fn new(collection: C, sink: Arc<dyn EventSink<BookListEvent>>) -> Self {
        Self { collection, sink }
    }

    /// The list screen became visible
    pub fn view_appeared(&self) {
        emit(self.sink.as_ref(), &BookListEvent::view_appeared());
    }

    /// Add a book; always emits `BookAdded`
    pub fn add_book(&mut self, book: Book) -> Book {
        let added = self.collection.add(book);
        emit(self.sink.as_ref(), &BookListEvent::book_added(added.clone()));
        added
    }

    /// Delete the book at `index`; emits `BookDeleted` only if one was removed
    pub fn delete_book(&mut self, index: usize) -> Option<Book> {
        let deleted = self.collection.delete(index)?;
        emit(self.sink.as_ref(), &BookListEvent::book_deleted(deleted.clone()));
        Some(deleted)
    }

    /// Borrow the underlying collection
    pub fn collection(&self) -> &C {
        &self.collection
    }

    /// Give the collection back
    pub fn into_collection(self) -> C {
        self.collection
    }
}
