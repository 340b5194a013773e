// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Read-only views over captured events

use crate::event::{AttachedError, ScopeBeginEvent, State, WriteEvent};
use crate::level::{EventId, Level};
use crate::template::ORIGINAL_FORMAT_KEY;
use crate::value::{Pair, Value};
use std::sync::Arc;

/// Structured properties extracted from an event's state.
///
/// Pairs keep their original order. The synthetic template key is dropped.
/// Opaque state yields no properties; use the message instead.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Properties(Vec<Pair>);

impl Properties {
    pub fn from_state(state: &State) -> Self {
        match state {
            State::Pairs(pairs) => Self(
                pairs
                    .iter()
                    .filter(|(key, _)| key != ORIGINAL_FORMAT_KEY)
                    .cloned()
                    .collect(),
            ),
            State::Opaque(_) => Self::default(),
        }
    }

    /// First value recorded under `key`
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn as_slice(&self) -> &[Pair] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Pair> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Pair>> for Properties {
    fn from(pairs: Vec<Pair>) -> Self {
        Self(pairs)
    }
}

impl<'a> IntoIterator for &'a Properties {
    type Item = &'a Pair;
    type IntoIter = std::slice::Iter<'a, Pair>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// View over a captured log write
#[derive(Debug, Clone)]
pub struct LogEntry {
    event: Arc<WriteEvent>,
    properties: Properties,
}

impl LogEntry {
    pub fn new(event: Arc<WriteEvent>) -> Self {
        let properties = Properties::from_state(event.state());
        Self { event, properties }
    }

    pub fn message(&self) -> &str {
        self.event.message()
    }

    pub fn level(&self) -> Level {
        self.event.level()
    }

    pub fn event_id(&self) -> &EventId {
        self.event.event_id()
    }

    pub fn exception(&self) -> Option<&AttachedError> {
        self.event.error()
    }

    pub fn category(&self) -> &str {
        self.event.category()
    }

    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    /// Scope the write happened in, if any
    pub fn scope(&self) -> Option<ScopeView> {
        self.event.scope().cloned().map(ScopeView::new)
    }

    /// Underlying raw event
    pub fn event(&self) -> &Arc<WriteEvent> {
        &self.event
    }
}

/// View over a captured scope entry
#[derive(Debug, Clone)]
pub struct ScopeView {
    event: Arc<ScopeBeginEvent>,
    properties: Properties,
}

impl ScopeView {
    pub fn new(event: Arc<ScopeBeginEvent>) -> Self {
        let properties = Properties::from_state(event.state());
        Self { event, properties }
    }

    pub fn message(&self) -> &str {
        self.event.message()
    }

    pub fn category(&self) -> &str {
        self.event.category()
    }

    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    pub fn event(&self) -> &Arc<ScopeBeginEvent> {
        &self.event
    }
}

#[cfg(test)]
#[path = "projection_tests.rs"]
mod tests;
