// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Emit-On-Success
//!
//! Runs random operation sequences against the controllers and a plain
//! `Vec` model: an event is emitted exactly when the model says the
//! operation succeeded, and it carries the book the model predicts.

use std::sync::Arc;

use library_analytics::events::{Book, BookDetailEvent, BookListEvent};
use library_analytics::sink::RecordingSink;
use library_analytics::{BookDetailController, BookListController, Library};
use proptest::prelude::*;

use crate::fixtures::*;

#[derive(Debug, Clone)]
enum Op {
    Add(String),
    Delete(usize),
    Read(usize),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        "[A-Z][a-z]{0,6}".prop_map(Op::Add),
        (0usize..8).prop_map(Op::Delete),
        (0usize..8).prop_map(Op::Read),
    ]
}

proptest! {
    #[test]
    fn prop_events_emitted_only_on_success(ops in prop::collection::vec(op(), 0..40)) {
        let list_sink = Arc::new(RecordingSink::<BookListEvent>::new("list"));
        let detail_sink = Arc::new(RecordingSink::<BookDetailEvent>::new("detail"));

        let mut shelf = Library::new();
        let mut model: Vec<Book> = Vec::new();
        let mut expected_list = Vec::new();
        let mut expected_detail = Vec::new();
        let mut reads = 0u32;

        for op in ops {
            match op {
                Op::Add(title) => {
                    let added = BookListController::new(&mut shelf, list_sink.clone())
                        .add_book(book(&title));
                    model.push(added.clone());
                    expected_list.push(BookListEvent::book_added(added));
                }
                Op::Delete(index) => {
                    let deleted = BookListController::new(&mut shelf, list_sink.clone())
                        .delete_book(index);
                    let predicted = (index < model.len()).then(|| model.remove(index));
                    prop_assert_eq!(&deleted, &predicted);
                    if let Some(book) = predicted {
                        expected_list.push(BookListEvent::book_deleted(book));
                    }
                }
                Op::Read(index) => {
                    let mut detail = BookDetailController::new(&mut shelf, detail_sink.clone());
                    let read = detail.read_book(index);
                    let predicted = model.get(index).cloned();
                    prop_assert_eq!(&read, &predicted);
                    if let Some(book) = predicted {
                        // Each controller instance starts its own read count
                        prop_assert_eq!(detail.read_count(), 1);
                        reads += 1;
                        expected_detail.push(BookDetailEvent::book_read(book, 1));
                    }
                }
            }
        }

        prop_assert_eq!(list_sink.events(), expected_list);
        prop_assert_eq!(detail_sink.events(), expected_detail);
        prop_assert_eq!(detail_sink.len(), reads as usize);
    }
}
