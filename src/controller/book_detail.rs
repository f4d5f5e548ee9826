// Copyright (c) 2025 - Cowboy AI, Inc.
//! Book detail Event Source

use std::sync::Arc;

use super::emit;
use crate::events::{Book, BookDetailEvent};
use crate::library::Collection;
use crate::sink::EventSink;

/// Event Source behind the book detail screen
///
/// Counts successful reads made through this controller and reports the
/// running count with every `BookRead` event. Failed reads do not count.
pub struct BookDetailController<C> {
    collection: C,
    sink: Arc<dyn EventSink<BookDetailEvent>>,
    read_count: u32,
}

impl<C> BookDetailController<C>
where
    C: Collection<Item = Book>,
{
    pub fn new(collection: C, sink: Arc<dyn EventSink<BookDetailEvent>>) -> Self {
        Self {
            collection,
            sink,
            read_count: 0,
        }
    }

    /// The detail screen became visible
    pub fn view_appeared(&self) {
        emit(self.sink.as_ref(), &BookDetailEvent::view_appeared());
    }

    /// Read the book at `index`; emits `BookRead` only if it exists
    pub fn read_book(&mut self, index: usize) -> Option<Book> {
        let book = self.collection.read(index)?;
        self.read_count = self.read_count.saturating_add(1);
        emit(
            self.sink.as_ref(),
            &BookDetailEvent::book_read(book.clone(), self.read_count),
        );
        Some(book)
    }

    /// Successful reads so far
    pub fn read_count(&self) -> u32 {
        self.read_count
    }

    /// Borrow the underlying collection
    pub fn collection(&self) -> &C {
        &self.collection
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::Library;
    use crate::sink::RecordingSink;

    #[test]
    fn test_read_counts_only_successes() {
        let sink: Arc<RecordingSink<BookDetailEvent>> = Arc::new(RecordingSink::new("recorder"));
        let library: Library = [Book::new("A").unwrap()].into_iter().collect();
        let mut detail = BookDetailController::new(library, sink.clone());

        let a = detail.read_book(0).unwrap();
        assert_eq!(detail.read_book(3), None);
        detail.read_book(0);

        assert_eq!(detail.read_count(), 2);
        assert_eq!(
            sink.events(),
            vec![
                BookDetailEvent::book_read(a.clone(), 1),
                BookDetailEvent::book_read(a, 2),
            ]
        );
    }

    #[test]
    fn test_read_from_empty_emits_nothing() {
        let sink: Arc<RecordingSink<BookDetailEvent>> = Arc::new(RecordingSink::new("recorder"));
        let mut detail = BookDetailController::new(Library::new(), sink.clone());

        assert_eq!(detail.read_book(0), None);
        assert!(sink.is_empty());
        assert_eq!(detail.read_count(), 0);
    }
}
