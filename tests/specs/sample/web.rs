//! Sample web application specs
//!
//! A sink shared by a fixture, filtered to the application's namespace and
//! cleared before each check.

use crate::prelude::*;

fn app_sink() -> CaptureSink {
    CaptureSink::with_options(|o| {
        o.filter_by_namespace("sample_web");
    })
}

#[test]
fn should_log_hello_world() {
    let sink = app_sink();
    with_capture(sink.clone(), handle_get);

    let log = single(&sink);
    assert_eq!(log.message(), "Hello World!");
}

#[test]
fn should_use_scope() {
    let sink = app_sink();
    with_capture(sink.clone(), handle_get);

    let log = single(&sink);
    assert_eq!(log.scope().unwrap().message(), "I'm in the GET scope");
}

#[test]
fn shared_sink_is_reset_between_requests() {
    let sink = app_sink();

    with_capture(sink.clone(), handle_get);
    with_capture(sink.clone(), handle_get);
    assert_eq!(sink.write_count(), 2);

    sink.clear();
    with_capture(sink.clone(), handle_get);
    similar_asserts::assert_eq!(messages(&sink), strings(&["Hello World!"]));
    assert_eq!(sink.scope_count(), 1);
}

#[test]
fn live_notification_counts_every_attempt() {
    let sink = app_sink();
    let attempts = std::sync::Arc::new(std::sync::atomic::AtomicUsize::new(0));
    let counter = std::sync::Arc::clone(&attempts);
    sink.on_message_logged(move |_| {
        counter.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
    });

    with_capture(sink.clone(), handle_get);

    // Framework events are observed but filtered out of the history
    assert_eq!(attempts.load(std::sync::atomic::Ordering::SeqCst), 3);
    assert_eq!(sink.write_count(), 1);
}
