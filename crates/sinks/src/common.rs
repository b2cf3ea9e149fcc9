//! Common types for sinks
//!
//! The pipeline-facing sink contract and the error type shared by all
//! sink implementations.

use std::fmt;

use thiserror::Error;

use memlog_events::LogEvent;

/// Result type for sink operations
pub type Result<T> = std::result::Result<T, SinkError>;

/// Common sink errors
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SinkError {
    /// Formatter failed while rendering an event
    #[error("format failed: {0}")]
    Format(String),

    /// Any other sink-specific failure
    #[error("sink error: {0}")]
    Other(String),
}

impl SinkError {
    /// Create a format error
    pub fn format(msg: impl Into<String>) -> Self {
        Self::Format(msg.into())
    }

    /// Create a generic sink error
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }

    /// Check whether this is a formatter failure
    #[inline]
    pub fn is_format(&self) -> bool {
        matches!(self, Self::Format(_))
    }
}

impl From<fmt::Error> for SinkError {
    fn from(_: fmt::Error) -> Self {
        // fmt::Error carries no detail beyond having failed
        Self::Format("formatter reported a write failure".to_string())
    }
}

/// A terminal consumer of log events
///
/// The pipeline hands each event to every registered sink in turn.
/// Implementations must be callable from multiple threads at once; any
/// internal state is the sink's to guard.
pub trait EventSink: Send + Sync {
    /// Consume one event
    ///
    /// Errors surface to the pipeline unchanged; sinks do not retry.
    fn emit(&self, event: &LogEvent) -> Result<()>;

    /// Sink name for registration and diagnostics
    fn name(&self) -> &str;
}

#[cfg(test)]
#[path = "common_test.rs"]
mod common_test;
