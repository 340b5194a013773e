// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn with_capture_records_events_and_returns_result() {
    let sink = CaptureSink::new();

    let answer = with_capture(sink.clone(), || {
        tracing::info!(target: "sample_library", "More is less.");
        42
    });

    assert_eq!(answer, 42);
    let messages: Vec<String> = sink.log_entries().map(|e| e.message().to_string()).collect();
    assert_eq!(messages, vec!["More is less."]);
}

#[test]
fn set_default_captures_until_guard_dropped() {
    let sink = CaptureSink::new();
    {
        let _guard = set_default(sink.clone());
        tracing::info!(target: "sample_library", "captured");
    }
    tracing::info!(target: "sample_library", "after guard");

    // The install notice targets this crate and is never captured
    let messages: Vec<String> = sink.log_entries().map(|e| e.message().to_string()).collect();
    assert_eq!(messages, vec!["captured"]);
}

#[test]
fn notifications_fire_through_the_subscriber() {
    let sink = CaptureSink::new();
    sink.set_write_enabled(|_| false);
    let seen = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));
    let log = std::sync::Arc::clone(&seen);
    sink.on_message_logged(move |e| log.lock().unwrap().push(e.message().to_string()));

    with_capture(sink.clone(), || {
        tracing::warn!(target: "sample_library", "filtered but observed");
    });

    assert_eq!(sink.write_count(), 0);
    assert_eq!(*seen.lock().unwrap(), vec!["filtered but observed"]);
}
