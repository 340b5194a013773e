// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Admission filters for a capture sink
//!
//! Filters combine with AND. Category filters apply to writes and scope
//! entries alike; the level filter applies to writes only.

use crate::level::Level;
use crate::sink::CaptureSink;

/// A single category or level rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureFilter {
    /// Category equals the namespace or lives beneath it (`::` or `.`)
    Namespace(String),
    /// Category starts with the prefix
    Prefix(String),
    /// Category equals the name exactly
    Category(String),
    /// Category does not start with the prefix
    ExcludePrefix(String),
    /// Write level is at least this severe
    MinLevel(Level),
}

impl CaptureFilter {
    fn admits_category(&self, category: &str) -> bool {
        match self {
            CaptureFilter::Namespace(ns) => in_namespace(category, ns),
            CaptureFilter::Prefix(prefix) => category.starts_with(prefix.as_str()),
            CaptureFilter::Category(name) => category == name,
            CaptureFilter::ExcludePrefix(prefix) => !category.starts_with(prefix.as_str()),
            CaptureFilter::MinLevel(_) => true,
        }
    }

    fn admits_level(&self, level: Level) -> bool {
        match self {
            CaptureFilter::MinLevel(min) => level >= *min,
            _ => true,
        }
    }
}

fn in_namespace(category: &str, ns: &str) -> bool {
    match category.strip_prefix(ns) {
        Some("") => true,
        Some(rest) => rest.starts_with("::") || rest.starts_with('.'),
        None => false,
    }
}

/// Options used to build a [`CaptureSink`]
#[derive(Debug, Clone, Default)]
pub struct CaptureOptions {
    filters: Vec<CaptureFilter>,
}

impl CaptureOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Only capture categories in `namespace` or beneath it.
    ///
    /// Matching is by segment: `app` admits `app`, `app::db` and `app.Db`,
    /// but not `app_extra`. Use [`CaptureOptions::filter_by_prefix`] for a
    /// plain string prefix test.
    pub fn filter_by_namespace(&mut self, namespace: impl Into<String>) -> &mut Self {
        self.filters.push(CaptureFilter::Namespace(namespace.into()));
        self
    }

    /// Only capture categories starting with `prefix`, segment or not
    pub fn filter_by_prefix(&mut self, prefix: impl Into<String>) -> &mut Self {
        self.filters.push(CaptureFilter::Prefix(prefix.into()));
        self
    }

    /// Only capture the exact category `name`
    pub fn filter_by_category(&mut self, name: impl Into<String>) -> &mut Self {
        self.filters.push(CaptureFilter::Category(name.into()));
        self
    }

    /// Drop categories starting with `prefix`
    pub fn exclude_category_prefix(&mut self, prefix: impl Into<String>) -> &mut Self {
        self.filters.push(CaptureFilter::ExcludePrefix(prefix.into()));
        self
    }

    /// Drop writes below `level`
    pub fn min_level(&mut self, level: Level) -> &mut Self {
        self.filters.push(CaptureFilter::MinLevel(level));
        self
    }

    pub fn filters(&self) -> &[CaptureFilter] {
        &self.filters
    }

    /// Check a write against every filter
    pub fn admits_write(&self, level: Level, category: &str) -> bool {
        self.filters
            .iter()
            .all(|f| f.admits_level(level) && f.admits_category(category))
    }

    /// Check a scope entry against the category filters
    pub fn admits_scope(&self, category: &str) -> bool {
        self.filters.iter().all(|f| f.admits_category(category))
    }

    /// Install predicates derived from these options on `sink`.
    ///
    /// With no filters configured the sink keeps admitting everything.
    pub fn apply(&self, sink: &CaptureSink) {
        if self.filters.is_empty() {
            return;
        }
        let writes = self.clone();
        sink.set_write_enabled(move |event| writes.admits_write(event.level(), event.category()));
        let scopes = self.clone();
        sink.set_begin_enabled(move |event| scopes.admits_scope(event.category()));
    }
}

#[cfg(test)]
#[path = "options_tests.rs"]
mod tests;
