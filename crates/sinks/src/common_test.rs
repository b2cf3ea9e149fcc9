//! Tests for common sink types

#![allow(clippy::unwrap_used)]

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use memlog_events::{Level, LogEvent};

use crate::{EventSink, Result, SinkError};

// =============================================================================
// SinkError tests
// =============================================================================

#[test]
fn test_sink_error_format() {
    let err = SinkError::format("bad specifier");
    assert!(matches!(err, SinkError::Format(_)));
    assert_eq!(err.to_string(), "format failed: bad specifier");
}

#[test]
fn test_sink_error_other() {
    let err = SinkError::other("queue detached");
    assert!(matches!(err, SinkError::Other(_)));
    assert_eq!(err.to_string(), "sink error: queue detached");
}

#[test]
fn test_sink_error_is_format() {
    assert!(SinkError::format("x").is_format());
    assert!(!SinkError::other("x").is_format());
}

#[test]
fn test_sink_error_from_fmt_error() {
    let err: SinkError = fmt::Error.into();
    assert!(err.is_format());
    assert!(err.to_string().starts_with("format failed"));
}

// =============================================================================
// EventSink trait tests
// =============================================================================

/// Sink that counts emitted events
struct CountingSink {
    emitted: AtomicU64,
}

impl EventSink for CountingSink {
    fn emit(&self, _event: &LogEvent) -> Result<()> {
        self.emitted.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }

    fn name(&self) -> &str {
        "counting"
    }
}

/// Sink that rejects every event
struct RejectingSink;

impl EventSink for RejectingSink {
    fn emit(&self, _event: &LogEvent) -> Result<()> {
        Err(SinkError::other("closed"))
    }

    fn name(&self) -> &str {
        "rejecting"
    }
}

#[test]
fn test_event_sink_usable_as_trait_object() {
    let sink = CountingSink {
        emitted: AtomicU64::new(0),
    };
    let dyn_sink: &dyn EventSink = &sink;

    dyn_sink.emit(&LogEvent::new(Level::Info, "one")).unwrap();
    dyn_sink.emit(&LogEvent::new(Level::Info, "two")).unwrap();

    assert_eq!(sink.emitted.load(Ordering::Relaxed), 2);
    assert_eq!(dyn_sink.name(), "counting");
}

#[test]
fn test_event_sink_errors_pass_through() {
    let sink = RejectingSink;

    let err = sink.emit(&LogEvent::new(Level::Info, "x")).unwrap_err();
    assert!(!err.is_format());
    assert_eq!(err.to_string(), "sink error: closed");
}
