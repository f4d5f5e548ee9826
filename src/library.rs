// Copyright (c) 2025 - Cowboy AI, Inc.
//! Collection Collaborator
//!
//! Event Sources drive their events off the results of a [`Collection`].
//! The contract is deliberately small:
//!
//! ```text
//! add(item)     -> item            always succeeds
//! delete(index) -> Some(item)      index < len
//!               -> None            otherwise, nothing removed
//! read(index)   -> Some(item)      index < len
//!               -> None            otherwise
//! ```
//!
//! `None` is a silent skip for analytics: no event, no error.
//!
//! [`Library`] is the in-memory implementation used by the book screens.

use serde::{Deserialize, Serialize};

use crate::events::Book;

/// Ordered, zero-indexed storage consulted by Event Sources
pub trait Collection {
    /// Stored item type
    type Item: Clone;

    /// Append an item and return it
    fn add(&mut self, item: Self::Item) -> Self::Item;

    /// Remove and return the item at `index`, or `None` when out of range
    fn delete(&mut self, index: usize) -> Option<Self::Item>;

    /// Return the item at `index`, or `None` when out of range
    fn read(&self, index: usize) -> Option<Self::Item>;

    /// Number of stored items
    fn len(&self) -> usize;

    /// True when nothing is stored
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<C: Collection + ?Sized> Collection for &mut C {
    type Item = C::Item;

    fn add(&mut self, item: Self::Item) -> Self::Item {
        (**self).add(item)
    }

    fn delete(&mut self, index: usize) -> Option<Self::Item> {
        (**self).delete(index)
    }

    fn read(&self, index: usize) -> Option<Self::Item> {
        (**self).read(index)
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}

/// In-memory list of books
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Library {
    books: Vec<Book>,
}

impl Library {
    /// Create an empty library
    pub fn new() -> Self {
        Self::default()
    }

    /// Books in shelf order
    pub fn books(&self) -> &[Book] {
        &self.books
    }
}

impl FromIterator<Book> for Library {
    fn from_iter<I: IntoIterator<Item = Book>>(iter: I) -> Self {
        Self {
            books: iter.into_iter().collect(),
        }
    }
}

impl Collection for Library {
    type Item = Book;

    fn add(&mut self, book: Book) -> Book {
        self.books.push(book.clone());
        book
    }

    fn delete(&mut self, index: usize) -> Option<Book> {
        if index < self.books.len() {
            Some(self.books.remove(index))
        } else {
            None
        }
    }

    fn read(&self, index: usize) -> Option<Book> {
        self.books.get(index).cloned()
    }

    fn len(&self) -> usize {
        self.books.len()
    }
}
