// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Subscribers for tests that capture `tracing` output
//!
//! The capture layer sees every event. When `RUST_LOG` is set, events passing
//! that filter are also echoed through the test writer so they show up in
//! `cargo test` output.

use crate::layer::CaptureLayer;
use logcap_core::CaptureSink;
use tracing::subscriber::DefaultGuard;
use tracing::Subscriber;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

/// Registry with a capture layer for `sink` and an optional echo layer
pub fn subscriber(sink: CaptureSink) -> impl Subscriber + Send + Sync + 'static {
    let echo = EnvFilter::try_from_default_env()
        .ok()
        .map(|filter| fmt::layer().with_test_writer().with_filter(filter));

    tracing_subscriber::registry()
        .with(CaptureLayer::new(sink))
        .with(echo)
}

/// Capture into `sink` on this thread until the guard is dropped
pub fn set_default(sink: CaptureSink) -> DefaultGuard {
    let guard = tracing::subscriber::set_default(subscriber(sink));
    tracing::debug!("capture subscriber installed");
    guard
}

/// Run `f` with `tracing` output captured into `sink`
pub fn with_capture<T>(sink: CaptureSink, f: impl FnOnce() -> T) -> T {
    tracing::subscriber::with_default(subscriber(sink), f)
}

#[cfg(test)]
#[path = "subscriber_tests.rs"]
mod tests;
