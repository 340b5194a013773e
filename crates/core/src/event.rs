// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Raw events handed to the capture sink by a logging adapter
//!
//! Both event kinds are immutable once built; the sink stores them behind
//! `Arc` and every projection reads the same snapshot.

use crate::level::{EventId, Level};
use crate::template::LogValues;
use crate::value::Pair;
use std::error::Error;
use std::sync::Arc;

/// Error value attached to a write
pub type AttachedError = Arc<dyn Error + Send + Sync>;

/// Structured state of a log call or scope
#[derive(Debug, Clone, PartialEq)]
pub enum State {
    /// Ordered key/value pairs
    Pairs(Vec<Pair>),
    /// State with no key/value view; only its rendering is known
    Opaque(String),
}

impl Default for State {
    fn default() -> Self {
        State::Pairs(Vec::new())
    }
}

impl From<Vec<Pair>> for State {
    fn from(pairs: Vec<Pair>) -> Self {
        State::Pairs(pairs)
    }
}

impl From<LogValues> for State {
    fn from(values: LogValues) -> Self {
        State::Pairs(values.pairs())
    }
}

/// Entry into a logging scope
#[derive(Debug, Clone, PartialEq)]
pub struct ScopeBeginEvent {
    category: String,
    state: State,
    message: String,
}

impl ScopeBeginEvent {
    pub fn new(category: impl Into<String>, state: impl Into<State>, message: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            state: state.into(),
            message: message.into(),
        }
    }

    /// Scope whose state and message come from the default formatter
    pub fn templated(category: impl Into<String>, values: LogValues) -> Self {
        let message = values.render();
        Self::new(category, values, message)
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// A single log call
#[derive(Debug, Clone)]
pub struct WriteEvent {
    level: Level,
    event_id: EventId,
    category: String,
    state: State,
    error: Option<AttachedError>,
    message: String,
    scope: Option<Arc<ScopeBeginEvent>>,
}

impl WriteEvent {
    pub fn builder(level: Level, category: impl Into<String>) -> WriteEventBuilder {
        WriteEventBuilder {
            event: WriteEvent {
                level,
                event_id: EventId::default(),
                category: category.into(),
                state: State::default(),
                error: None,
                message: String::new(),
                scope: None,
            },
        }
    }

    /// Write whose state and message come from the default formatter
    pub fn templated(level: Level, category: impl Into<String>, values: LogValues) -> Self {
        let message = values.render();
        Self::builder(level, category)
            .state(values)
            .message(message)
            .build()
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn event_id(&self) -> &EventId {
        &self.event_id
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn error(&self) -> Option<&AttachedError> {
        self.error.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Innermost scope active when the write happened
    pub fn scope(&self) -> Option<&Arc<ScopeBeginEvent>> {
        self.scope.as_ref()
    }
}

#[must_use]
pub struct WriteEventBuilder {
    event: WriteEvent,
}

impl WriteEventBuilder {
    pub fn event_id(mut self, event_id: impl Into<EventId>) -> Self {
        self.event.event_id = event_id.into();
        self
    }

    pub fn state(mut self, state: impl Into<State>) -> Self {
        self.event.state = state.into();
        self
    }

    pub fn error(mut self, error: AttachedError) -> Self {
        self.event.error = Some(error);
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.event.message = message.into();
        self
    }

    pub fn scope(mut self, scope: Arc<ScopeBeginEvent>) -> Self {
        self.event.scope = Some(scope);
        self
    }

    pub fn build(self) -> WriteEvent {
        self.event
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
