// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! logcap-core: in-memory log capture and structured value assertions
//!
//! This crate provides:
//! - Immutable write and scope-entry events with structured state
//! - A default `{Name}` message-template formatter
//! - A thread-safe capture sink with admission predicates and notifications
//! - Read-only projections exposing messages and structured properties
//! - Containment assertions over structured key/value pairs

pub mod event;
pub mod level;
pub mod matcher;
pub mod options;
pub mod projection;
pub mod sink;
pub mod template;
pub mod value;

pub use event::{AttachedError, ScopeBeginEvent, State, WriteEvent, WriteEventBuilder};
pub use level::{EventId, Level, ParseLevelError};
pub use matcher::{
    assert_contains, assert_contains_pair, contains, contains_pair, MatchError, PairSource,
};
pub use options::{CaptureFilter, CaptureOptions};
pub use projection::{LogEntry, Properties, ScopeView};
pub use sink::{CaptureSink, Subscription};
pub use template::{LogValues, ORIGINAL_FORMAT_KEY};
pub use value::{pair, Pair, Value};
