// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Thread-safe capture sink for log writes and scope entries
//!
//! Every submission fires the matching notification callbacks; only
//! submissions accepted by the admission predicate enter the buffer that
//! [`CaptureSink::log_entries`] and [`CaptureSink::scopes`] read from.

use crate::event::{ScopeBeginEvent, WriteEvent};
use crate::options::CaptureOptions;
use crate::projection::{LogEntry, ScopeView};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, RwLock};

type Predicate<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;
type Callback<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// Handle returned when registering a notification callback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

/// Buffer, admission predicate and subscribers for one event kind
struct Channel<T> {
    buffer: Mutex<Vec<Arc<T>>>,
    enabled: RwLock<Option<Predicate<T>>>,
    subscribers: Mutex<Vec<(Subscription, Callback<T>)>>,
}

impl<T> Default for Channel<T> {
    fn default() -> Self {
        Self {
            buffer: Mutex::new(Vec::new()),
            enabled: RwLock::new(None),
            subscribers: Mutex::new(Vec::new()),
        }
    }
}

impl<T> Channel<T> {
    fn submit(&self, event: Arc<T>) {
        // Clone the predicate out so it runs without holding the lock
        let enabled = self
            .enabled
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone();
        let admitted = match enabled {
            Some(admit) => admit(&*event),
            None => true,
        };
        if admitted {
            self.buffer
                .lock()
                .unwrap_or_else(|e| e.into_inner())
                .push(Arc::clone(&event));
        }

        let subscribers: Vec<Callback<T>> = self
            .subscribers
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .map(|(_, callback)| Arc::clone(callback))
            .collect();
        for callback in subscribers {
            callback(&*event);
        }
    }

    fn set_enabled(&self, predicate: Option<Predicate<T>>) {
        *self.enabled.write().unwrap_or_else(|e| e.into_inner()) = predicate;
    }

    fn snapshot(&self) -> Vec<Arc<T>> {
        self.buffer.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn len(&self) -> usize {
        self.buffer.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    /// Swap in an empty buffer, returning the old one
    fn take(&self) -> Vec<Arc<T>> {
        std::mem::take(&mut *self.buffer.lock().unwrap_or_else(|e| e.into_inner()))
    }

    fn subscribe(&self, id: Subscription, callback: Callback<T>) {
        self.subscribers
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push((id, callback));
    }

    fn unsubscribe(&self, id: Subscription) -> bool {
        let mut subscribers = self.subscribers.lock().unwrap_or_else(|e| e.into_inner());
        let before = subscribers.len();
        subscribers.retain(|(sub, _)| *sub != id);
        subscribers.len() != before
    }
}

#[derive(Default)]
struct SinkState {
    writes: Channel<WriteEvent>,
    scopes: Channel<ScopeBeginEvent>,
    next_subscription: AtomicU64,
}

/// In-memory sink capturing log writes and scope entries.
///
/// Cloning yields another handle to the same captured state.
#[derive(Clone, Default)]
pub struct CaptureSink {
    state: Arc<SinkState>,
}

impl CaptureSink {
    /// Sink that admits everything
    pub fn new() -> Self {
        Self::default()
    }

    /// Sink whose admission predicates are derived from configured options
    pub fn with_options(configure: impl FnOnce(&mut CaptureOptions)) -> Self {
        let mut options = CaptureOptions::default();
        configure(&mut options);
        let sink = Self::new();
        options.apply(&sink);
        sink
    }

    /// Submit a log write.
    ///
    /// The write is buffered when no write predicate is set or the predicate
    /// accepts it. Message-logged callbacks fire either way.
    pub fn write(&self, event: impl Into<Arc<WriteEvent>>) {
        self.state.writes.submit(event.into());
    }

    /// Submit a scope entry; same rule as [`CaptureSink::write`] against the
    /// scope predicate and buffer
    pub fn begin_scope(&self, event: impl Into<Arc<ScopeBeginEvent>>) {
        self.state.scopes.submit(event.into());
    }

    /// Replace both buffers with empty ones.
    ///
    /// Predicates and subscriptions are kept. A submission racing with this
    /// call lands in exactly one of the old or new buffer.
    pub fn clear(&self) {
        let writes = self.state.writes.take();
        let scopes = self.state.scopes.take();
        tracing::debug!(
            writes = writes.len(),
            scopes = scopes.len(),
            "capture sink cleared"
        );
    }

    pub fn set_write_enabled(&self, predicate: impl Fn(&WriteEvent) -> bool + Send + Sync + 'static) {
        self.state.writes.set_enabled(Some(Arc::new(predicate)));
    }

    /// Admit every write again
    pub fn reset_write_enabled(&self) {
        self.state.writes.set_enabled(None);
    }

    pub fn set_begin_enabled(
        &self,
        predicate: impl Fn(&ScopeBeginEvent) -> bool + Send + Sync + 'static,
    ) {
        self.state.scopes.set_enabled(Some(Arc::new(predicate)));
    }

    /// Admit every scope entry again
    pub fn reset_begin_enabled(&self) {
        self.state.scopes.set_enabled(None);
    }

    /// Register a callback fired for every submitted write, admitted or not
    pub fn on_message_logged(
        &self,
        callback: impl Fn(&WriteEvent) + Send + Sync + 'static,
    ) -> Subscription {
        let id = self.next_subscription();
        self.state.writes.subscribe(id, Arc::new(callback));
        id
    }

    /// Register a callback fired for every submitted scope entry
    pub fn on_scope_started(
        &self,
        callback: impl Fn(&ScopeBeginEvent) + Send + Sync + 'static,
    ) -> Subscription {
        let id = self.next_subscription();
        self.state.scopes.subscribe(id, Arc::new(callback));
        id
    }

    /// Remove a callback. Returns false if it was not registered.
    pub fn unsubscribe(&self, subscription: Subscription) -> bool {
        self.state.writes.unsubscribe(subscription) || self.state.scopes.unsubscribe(subscription)
    }

    /// Snapshot of the admitted writes
    pub fn writes(&self) -> Vec<Arc<WriteEvent>> {
        self.state.writes.snapshot()
    }

    /// Snapshot of the admitted scope entries
    pub fn begin_scopes(&self) -> Vec<Arc<ScopeBeginEvent>> {
        self.state.scopes.snapshot()
    }

    /// Projections over the writes admitted so far.
    ///
    /// Each call takes a fresh snapshot; entries are projected lazily.
    pub fn log_entries(&self) -> impl ExactSizeIterator<Item = LogEntry> {
        self.writes().into_iter().map(LogEntry::new)
    }

    /// Projections over the scope entries admitted so far
    pub fn scopes(&self) -> impl ExactSizeIterator<Item = ScopeView> {
        self.begin_scopes().into_iter().map(ScopeView::new)
    }

    pub fn write_count(&self) -> usize {
        self.state.writes.len()
    }

    pub fn scope_count(&self) -> usize {
        self.state.scopes.len()
    }

    fn next_subscription(&self) -> Subscription {
        Subscription(self.state.next_subscription.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Debug for CaptureSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CaptureSink")
            .field("writes", &self.write_count())
            .field("scopes", &self.scope_count())
            .finish()
    }
}

#[cfg(test)]
#[path = "sink_tests.rs"]
mod tests;
