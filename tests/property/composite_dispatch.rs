// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Composite Dispatch
//!
//! For arbitrary flat and nested compositions, every member is called exactly
//! once per dispatch, in construction order, whatever its siblings do.

use library_analytics::events::BookListEvent;
use library_analytics::sink::{CompositeSink, EventSink};
use proptest::prelude::*;

use crate::fixtures::*;

// ============================================================================
// Strategies
// ============================================================================

/// Shape of a composite tree
#[derive(Debug, Clone)]
enum Shape {
    Leaf,
    Node(Vec<Shape>),
}

fn shape() -> impl Strategy<Value = Shape> {
    let leaf = Just(Shape::Leaf);
    leaf.prop_recursive(4, 32, 5, |inner| {
        prop::collection::vec(inner, 0..5).prop_map(Shape::Node)
    })
}

/// Member behaviour: `None` is a healthy sink
fn member_faults() -> impl Strategy<Value = Vec<Option<Fault>>> {
    prop::collection::vec(
        prop_oneof![
            3 => Just(None),
            1 => Just(Some(Fault::Error)),
            1 => Just(Some(Fault::Panic)),
        ],
        0..12,
    )
}

/// Build a composite for `shape`, naming leaves in depth-first order
fn build(
    shape: &Shape,
    journal: &Journal,
    next: &mut usize,
    leaves: &mut Vec<String>,
) -> CompositeSink<BookListEvent> {
    let mut builder = CompositeSink::<BookListEvent>::builder();

    if let Shape::Node(children) = shape {
        for child in children {
            builder = match child {
                Shape::Leaf => {
                    let name = format!("leaf-{}", *next);
                    *next += 1;
                    leaves.push(name.clone());
                    builder.with(JournalSink::new(name, journal))
                }
                Shape::Node(_) => builder.with(build(child, journal, next, leaves)),
            };
        }
    }

    builder.build()
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Property: N members receive exactly N calls, in construction order
    #[test]
    fn prop_flat_dispatch_is_ordered_and_complete(n in 0usize..20) {
        let journal = journal();
        let composite = (0..n).fold(CompositeSink::<BookListEvent>::builder(), |b, i| {
            b.with(JournalSink::new(format!("sink-{}", i), &journal))
        }).build();

        let report = composite.dispatch(&book_added_fixture());

        let expected: Vec<String> = (0..n).map(|i| format!("sink-{}", i)).collect();
        prop_assert_eq!(sinks_in_order(&journal), expected);
        prop_assert_eq!(report.delivered, n);
        prop_assert!(report.is_clean());
    }

    /// Property: nested composites reach every leaf once, depth-first left-to-right
    #[test]
    fn prop_nested_dispatch_is_depth_first(tree in shape()) {
        let journal = journal();
        let mut next = 0;
        let mut leaves = Vec::new();
        let composite = build(&tree, &journal, &mut next, &mut leaves);

        composite.log(&book_added_fixture()).unwrap();

        prop_assert_eq!(sinks_in_order(&journal), leaves);
    }

    /// Property: failing members never prevent dispatch to later members
    #[test]
    fn prop_faults_are_isolated(faults in member_faults()) {
        let journal = journal();
        let composite = faults
            .iter()
            .enumerate()
            .fold(CompositeSink::<BookListEvent>::builder(), |b, (i, fault)| {
                let name = format!("m-{}", i);
                match fault {
                    None => b.with(JournalSink::new(name, &journal)),
                    Some(fault) => b.with(FaultySink::new(name, *fault, &journal)),
                }
            })
            .build();

        let report = composite.dispatch(&book_added_fixture());

        let expected: Vec<String> = (0..faults.len()).map(|i| format!("m-{}", i)).collect();
        prop_assert_eq!(sinks_in_order(&journal), expected);

        let failed: Vec<usize> = report.failures.iter().map(|f| f.index).collect();
        let expected_failed: Vec<usize> = faults
            .iter()
            .enumerate()
            .filter(|(_, fault)| fault.is_some())
            .map(|(i, _)| i)
            .collect();
        prop_assert_eq!(failed, expected_failed);
        prop_assert_eq!(report.attempted(), faults.len());
    }
}
