// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `tracing` layer feeding a capture sink

use logcap_core::{CaptureSink, EventId, Level, Pair, ScopeBeginEvent, State, Value, WriteEvent};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use thiserror::Error;
use tracing::field::{Field, Visit};
use tracing::span::{Attributes, Id};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::Layer;

/// Crates whose targets (and their submodules) are never captured, so the
/// capture crates' own diagnostics stay out of the history under test.
pub const OWN_TARGETS: [&str; 2] = ["logcap_core", "logcap_tracing"];

const MESSAGE_FIELD: &str = "message";
const EVENT_ID_FIELD: &str = "event_id";
const EVENT_NAME_FIELD: &str = "event_name";
const ERROR_FIELD: &str = "error";

/// Error recorded through `error = &e as &dyn Error` on an event
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct CapturedError {
    pub message: String,
    /// Display of each `source()` in the chain, outermost first
    pub sources: Vec<String>,
}

impl CapturedError {
    fn from_error(error: &(dyn std::error::Error + 'static)) -> Self {
        let mut sources = Vec::new();
        let mut next = error.source();
        while let Some(source) = next {
            sources.push(source.to_string());
            next = source.source();
        }
        Self {
            message: error.to_string(),
            sources,
        }
    }
}

static NEXT_LAYER_ID: AtomicU64 = AtomicU64::new(0);

/// Scope entries stored in a span's extensions, one per capture layer
#[derive(Default)]
struct SpanScopes(Vec<(u64, Arc<ScopeBeginEvent>)>);

impl SpanScopes {
    fn get(&self, layer: u64) -> Option<&Arc<ScopeBeginEvent>> {
        self.0.iter().find(|(id, _)| *id == layer).map(|(_, scope)| scope)
    }
}

/// Layer translating `tracing` events and spans into sink submissions.
///
/// Several layers may share one registry; each links writes only to the
/// scope entries it created itself.
#[derive(Clone)]
pub struct CaptureLayer {
    id: u64,
    sink: CaptureSink,
}

impl CaptureLayer {
    pub fn new(sink: CaptureSink) -> Self {
        Self {
            id: NEXT_LAYER_ID.fetch_add(1, Ordering::Relaxed),
            sink,
        }
    }

    pub fn sink(&self) -> &CaptureSink {
        &self.sink
    }
}

fn is_own_target(target: &str) -> bool {
    OWN_TARGETS.iter().any(|own| match target.strip_prefix(own) {
        Some(rest) => rest.is_empty() || rest.starts_with("::"),
        None => false,
    })
}

pub(crate) fn level_from(level: &tracing::Level) -> Level {
    match *level {
        tracing::Level::ERROR => Level::Error,
        tracing::Level::WARN => Level::Warn,
        tracing::Level::INFO => Level::Info,
        tracing::Level::DEBUG => Level::Debug,
        _ => Level::Trace,
    }
}

impl<S> Layer<S> for CaptureLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_new_span(&self, attrs: &Attributes<'_>, id: &Id, ctx: Context<'_, S>) {
        let metadata = attrs.metadata();
        if is_own_target(metadata.target()) {
            return;
        }

        // Span fields are all kept as scope state; nothing is lifted
        let mut visitor = FieldVisitor::default();
        attrs.record(&mut visitor);
        let message = visitor
            .message
            .take()
            .unwrap_or_else(|| metadata.name().to_string());
        let scope = Arc::new(ScopeBeginEvent::new(
            metadata.target(),
            State::Pairs(visitor.pairs),
            message,
        ));

        if let Some(span) = ctx.span(id) {
            let mut extensions = span.extensions_mut();
            match extensions.get_mut::<SpanScopes>() {
                Some(scopes) => scopes.0.push((self.id, Arc::clone(&scope))),
                None => extensions.insert(SpanScopes(vec![(self.id, Arc::clone(&scope))])),
            }
        }
        self.sink.begin_scope(scope);
    }

    fn on_event(&self, event: &Event<'_>, ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if is_own_target(metadata.target()) {
            return;
        }

        let mut visitor = FieldVisitor::lifting();
        event.record(&mut visitor);

        let mut builder = WriteEvent::builder(level_from(metadata.level()), metadata.target())
            .message(visitor.message.take().unwrap_or_default());
        if let Some(event_id) = visitor.event_id() {
            builder = builder.event_id(event_id);
        }
        if let Some(error) = visitor.error.take() {
            builder = builder.error(Arc::new(error));
        }
        if let Some(scope) = innermost_scope(self.id, event, &ctx) {
            builder = builder.scope(scope);
        }

        self.sink.write(builder.state(State::Pairs(visitor.pairs)).build());
    }
}

/// Nearest enclosing span for which `layer` produced a scope entry
fn innermost_scope<S>(
    layer: u64,
    event: &Event<'_>,
    ctx: &Context<'_, S>,
) -> Option<Arc<ScopeBeginEvent>>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    ctx.event_scope(event)?.find_map(|span| {
        let extensions = span.extensions();
        extensions
            .get::<SpanScopes>()
            .and_then(|scopes| scopes.get(layer))
            .cloned()
    })
}

/// Collects the fields of an event or span in record order
#[derive(Default)]
struct FieldVisitor {
    /// Move `event_id`, `event_name` and `error` out of the pairs
    lift_event_fields: bool,
    message: Option<String>,
    pairs: Vec<Pair>,
    event_id: Option<i32>,
    event_name: Option<String>,
    error: Option<CapturedError>,
}

impl FieldVisitor {
    fn lifting() -> Self {
        Self {
            lift_event_fields: true,
            ..Self::default()
        }
    }

    fn event_id(&mut self) -> Option<EventId> {
        match (self.event_id, self.event_name.take()) {
            (None, None) => None,
            (id, name) => Some(EventId {
                id: id.unwrap_or_default(),
                name,
            }),
        }
    }

    fn push(&mut self, field: &Field, value: Value) {
        self.pairs.push((field.name().to_string(), value));
    }

    fn record_id(&mut self, field: &Field, id: Option<i32>, value: Value) {
        match id {
            Some(id) if self.lift_event_fields && field.name() == EVENT_ID_FIELD => {
                self.event_id = Some(id)
            }
            _ => self.push(field, value),
        }
    }
}

impl Visit for FieldVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        let rendered = format!("{value:?}");
        if field.name() == MESSAGE_FIELD {
            self.message = Some(rendered);
        } else {
            self.push(field, Value::Str(rendered));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            MESSAGE_FIELD => self.message = Some(value.to_string()),
            EVENT_NAME_FIELD if self.lift_event_fields => {
                self.event_name = Some(value.to_string())
            }
            _ => self.push(field, Value::from(value)),
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_id(field, i32::try_from(value).ok(), Value::Int(value));
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.record_id(field, i32::try_from(value).ok(), Value::UInt(value));
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        self.push(field, Value::Float(value));
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.push(field, Value::Bool(value));
    }

    fn record_error(&mut self, field: &Field, value: &(dyn std::error::Error + 'static)) {
        if self.lift_event_fields && field.name() == ERROR_FIELD {
            self.error = Some(CapturedError::from_error(value));
        } else {
            self.push(field, Value::Str(value.to_string()));
        }
    }
}

#[cfg(test)]
#[path = "layer_tests.rs"]
mod tests;
