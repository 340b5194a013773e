//! Capture sink specs
//!
//! Verify admission, notification and clearing when events are submitted
//! directly.

use crate::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

fn info(message: &str) -> WriteEvent {
    WriteEvent::builder(Level::Info, "app").message(message).build()
}

#[test]
fn threads_writing_concurrently_are_all_captured() {
    let sink = CaptureSink::new();

    let handles: Vec<_> = (0..6)
        .map(|t| {
            let sink = sink.clone();
            thread::spawn(move || {
                for i in 0..200 {
                    sink.write(info(&format!("{t}-{i}")));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(sink.log_entries().count(), 1200);
    for t in 0..6 {
        let own: Vec<usize> = messages(&sink)
            .iter()
            .filter_map(|m| m.strip_prefix(&format!("{t}-")).map(|i| i.parse().unwrap()))
            .collect();
        assert_eq!(own, (0..200).collect::<Vec<usize>>());
    }
}

#[test]
fn threshold_predicate_filters_history_not_notifications() {
    let sink = CaptureSink::new();
    sink.set_write_enabled(|e| e.level() >= Level::Warn);
    let submitted = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&submitted);
    sink.on_message_logged(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    for level in [Level::Debug, Level::Info, Level::Warn, Level::Error] {
        sink.write(WriteEvent::builder(level, "app").message(level.to_string()).build());
    }

    similar_asserts::assert_eq!(messages(&sink), strings(&["warn", "error"]));
    assert_eq!(submitted.load(Ordering::SeqCst), 4);
}

#[test]
fn clear_then_write_leaves_one_entry() {
    let sink = CaptureSink::new();
    for i in 0..25 {
        sink.write(info(&i.to_string()));
    }
    let before = sink.clone();

    sink.clear();
    sink.write(info("fresh"));

    similar_asserts::assert_eq!(messages(&before), strings(&["fresh"]));
}

#[test]
fn templated_write_hides_original_format() {
    let sink = CaptureSink::new();
    sink.write(WriteEvent::templated(
        Level::Info,
        "app",
        LogValues::new("Hello {Name}", ["World"]),
    ));

    let entry = single(&sink);
    assert_eq!(entry.message(), "Hello World");
    assert_eq!(entry.properties().as_slice(), &[pair("Name", "World")]);
}

#[test]
fn scope_view_exposes_rendered_message() {
    let sink = CaptureSink::new();
    sink.begin_scope(ScopeBeginEvent::new(
        "app",
        State::Opaque("GET scope state".into()),
        "I'm in the GET scope",
    ));

    let scope = sink.scopes().next().unwrap();
    assert_eq!(scope.message(), "I'm in the GET scope");
    assert!(scope.properties().is_empty());
}
