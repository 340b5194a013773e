// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Containment assertions over structured log values
//!
//! Every expected pair must be matched by some actual pair with an equal key
//! and an equal value (see [`Value::equals`]). Order is irrelevant, extra
//! actual pairs are ignored, and one actual pair may satisfy any number of
//! expected pairs.

use crate::projection::{LogEntry, Properties, ScopeView};
use crate::value::{pair, Pair, Value};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    /// A required pair sequence was absent
    #[error("missing argument: {name}")]
    MissingArgument { name: &'static str },

    /// Some expected pair had no match among the actual pairs
    #[error("log values mismatch\nexpected: {expected}\nactual:   {actual}")]
    Mismatch { expected: String, actual: String },
}

/// Anything that can present a sequence of pairs to match against.
///
/// `None` means the sequence is absent, which fails argument validation.
pub trait PairSource {
    fn pairs(&self) -> Option<&[Pair]>;
}

impl PairSource for [Pair] {
    fn pairs(&self) -> Option<&[Pair]> {
        Some(self)
    }
}

impl<const N: usize> PairSource for [Pair; N] {
    fn pairs(&self) -> Option<&[Pair]> {
        Some(self)
    }
}

impl PairSource for Vec<Pair> {
    fn pairs(&self) -> Option<&[Pair]> {
        Some(self)
    }
}

impl PairSource for Properties {
    fn pairs(&self) -> Option<&[Pair]> {
        Some(self.as_slice())
    }
}

impl PairSource for LogEntry {
    fn pairs(&self) -> Option<&[Pair]> {
        Some(self.properties().as_slice())
    }
}

impl PairSource for ScopeView {
    fn pairs(&self) -> Option<&[Pair]> {
        Some(self.properties().as_slice())
    }
}

impl<T: PairSource + ?Sized> PairSource for &T {
    fn pairs(&self) -> Option<&[Pair]> {
        (**self).pairs()
    }
}

impl<T: PairSource> PairSource for Option<T> {
    fn pairs(&self) -> Option<&[Pair]> {
        self.as_ref().and_then(PairSource::pairs)
    }
}

/// Check that every expected pair is present in `actual`
pub fn contains<E, A>(expected: &E, actual: &A) -> Result<(), MatchError>
where
    E: PairSource + ?Sized,
    A: PairSource + ?Sized,
{
    let expected = expected
        .pairs()
        .ok_or(MatchError::MissingArgument { name: "expected" })?;
    let actual = actual
        .pairs()
        .ok_or(MatchError::MissingArgument { name: "actual" })?;

    for (key, value) in expected {
        let found = actual.iter().any(|(k, v)| k == key && v.equals(value));
        if !found {
            tracing::debug!(key = %key, value = %value, "expected log value not found");
            return Err(MatchError::Mismatch {
                expected: render(expected),
                actual: render(actual),
            });
        }
    }
    Ok(())
}

/// Check that a single key/value pair is present in `actual`
pub fn contains_pair<A>(key: &str, value: impl Into<Value>, actual: &A) -> Result<(), MatchError>
where
    A: PairSource + ?Sized,
{
    contains(&[pair(key, value)], actual)
}

/// Panicking form of [`contains`] for use in tests
#[track_caller]
#[allow(clippy::panic)]
pub fn assert_contains<E, A>(expected: &E, actual: &A)
where
    E: PairSource + ?Sized,
    A: PairSource + ?Sized,
{
    if let Err(e) = contains(expected, actual) {
        panic!("{e}");
    }
}

/// Panicking form of [`contains_pair`] for use in tests
#[track_caller]
#[allow(clippy::panic)]
pub fn assert_contains_pair<A>(key: &str, value: impl Into<Value>, actual: &A)
where
    A: PairSource + ?Sized,
{
    if let Err(e) = contains_pair(key, value, actual) {
        panic!("{e}");
    }
}

/// `[key value]` items joined by commas
fn render(pairs: &[Pair]) -> String {
    pairs
        .iter()
        .map(|(key, value)| format!("[{key} {value}]"))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
