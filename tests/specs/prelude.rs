//! Shared helpers for specs: a tiny application that logs like a web service

#![allow(dead_code, unused_imports)]

pub use logcap_core::{
    assert_contains, assert_contains_pair, contains, pair, CaptureSink, Level, LogEntry,
    LogValues, MatchError, ScopeBeginEvent, State, Value, WriteEvent, ORIGINAL_FORMAT_KEY,
};
pub use logcap_tracing::{set_default, with_capture, CaptureLayer};

/// Category used by the sample application's own code
pub const APP: &str = "sample_web::startup";
/// Category used by the "framework" the sample runs on
pub const FRAMEWORK: &str = "hyper::server";

/// Handle `GET /` the way the sample application does
pub fn handle_get() {
    tracing::debug!(target: FRAMEWORK, method = "GET", path = "/", "request started");
    let span = tracing::info_span!(target: APP, "I'm in the GET scope", method = "GET");
    let _guard = span.enter();
    tracing::info!(target: APP, "Hello World!");
    tracing::debug!(target: FRAMEWORK, status = 200u64, "request finished");
}

/// Library call that logs once
pub fn do_more() {
    tracing::info!(target: "sample_library::more", "More is less.");
}

/// Messages of every captured entry, in order
pub fn messages(sink: &CaptureSink) -> Vec<String> {
    sink.log_entries().map(|e| e.message().to_string()).collect()
}

/// Owned copies of `items`, for comparing against [`messages`]
pub fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The only captured entry, failing if there is not exactly one
pub fn single(sink: &CaptureSink) -> LogEntry {
    let entries: Vec<LogEntry> = sink.log_entries().collect();
    assert_eq!(entries.len(), 1, "entries: {:?}", messages(sink));
    entries.into_iter().next().unwrap()
}
