//! `tracing` capture specs
//!
//! Verify that a subscriber built around the capture layer records the
//! application's events and spans.

use crate::prelude::*;

#[test]
fn library_call_is_captured() {
    let sink = CaptureSink::new();
    with_capture(sink.clone(), do_more);

    let entry = single(&sink);
    assert_eq!(entry.message(), "More is less.");
    assert_eq!(entry.category(), "sample_library::more");
    assert_eq!(entry.level(), Level::Info);
}

#[test]
fn unfiltered_sink_sees_framework_events_too() {
    let sink = CaptureSink::new();
    with_capture(sink.clone(), handle_get);

    similar_asserts::assert_eq!(
        messages(&sink),
        strings(&["request started", "Hello World!", "request finished"])
    );
    assert_eq!(sink.scope_count(), 1);
}

#[test]
fn guard_scoped_capture_stops_on_drop() {
    let sink = CaptureSink::new();
    {
        let _guard = set_default(sink.clone());
        do_more();
    }
    do_more();

    assert_eq!(sink.write_count(), 1);
}

#[test]
fn layer_composes_with_other_layers() {
    use tracing_subscriber::layer::SubscriberExt;

    let sink = CaptureSink::new();
    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_test_writer())
        .with(CaptureLayer::new(sink.clone()));
    tracing::subscriber::with_default(subscriber, handle_get);

    assert_eq!(sink.write_count(), 3);
    assert_eq!(single_scope_message(&sink), "I'm in the GET scope");
}

fn single_scope_message(sink: &CaptureSink) -> String {
    let scopes: Vec<String> = sink.scopes().map(|s| s.message().to_string()).collect();
    assert_eq!(scopes.len(), 1);
    scopes.into_iter().next().unwrap()
}
