// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Capture `tracing` output into a [`CaptureSink`](logcap_core::CaptureSink)
//!
//! Events become write events and spans become scope entries. Install the
//! layer on a subscriber, or use the helpers in [`subscriber`](mod@subscriber).

pub mod layer;
pub mod subscriber;

pub use layer::{CaptureLayer, CapturedError, OWN_TARGETS};
pub use subscriber::{set_default, subscriber, with_capture};
