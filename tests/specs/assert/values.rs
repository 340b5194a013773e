//! Value assertion specs
//!
//! Verify containment semantics against raw pairs, log entries and scopes.

use crate::prelude::*;

#[test]
fn subset_is_contained() {
    let actual = vec![pair("a", 1), pair("b", 2)];
    assert_eq!(contains(&[pair("a", 1)], &actual), Ok(()));
}

#[test]
fn unmatched_duplicate_key_reports_both_sets() {
    let actual = vec![pair("a", 1)];
    let err = contains(&[pair("a", 1), pair("a", 2)], &actual).unwrap_err();

    assert_eq!(
        err,
        MatchError::Mismatch {
            expected: "[a 1],[a 2]".to_string(),
            actual: "[a 1]".to_string(),
        }
    );
}

#[test]
fn captured_entry_properties_can_be_asserted() {
    let sink = CaptureSink::new();
    with_capture(sink.clone(), || {
        tracing::info!(target: "sample_web", user = "ann", attempts = 3u64, "login ok");
    });

    let entry = single(&sink);
    assert_contains_pair("user", "ann", &entry);
    assert_contains(&[pair("attempts", 3u64), pair("user", "ann")], &entry);
    assert!(contains(&[pair("attempts", 3i64)], &entry).is_err());
}

#[test]
fn scope_of_captured_entry_can_be_asserted() {
    let sink = CaptureSink::new();
    with_capture(sink.clone(), handle_get);

    let entry = sink
        .log_entries()
        .find(|e| e.message() == "Hello World!")
        .unwrap();
    assert_contains_pair("method", "GET", &entry.scope());
}

#[test]
fn asserting_on_missing_scope_is_an_argument_error() {
    let sink = CaptureSink::new();
    with_capture(sink.clone(), do_more);

    let entry = single(&sink);
    assert_eq!(
        contains(&[pair("method", "GET")], &entry.scope()),
        Err(MatchError::MissingArgument { name: "actual" })
    );
}

#[test]
#[should_panic(expected = "expected: [user bob]")]
fn failed_assertion_panics_with_diagnostics() {
    let sink = CaptureSink::new();
    with_capture(sink.clone(), || {
        tracing::info!(target: "sample_web", user = "ann", "login ok");
    });

    assert_contains_pair("user", "bob", &single(&sink));
}
