//! Structured log events
//!
//! The input record sinks consume. Events are produced by the upstream
//! logging pipeline; sinks treat them as read-only and never mutate them.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::level::Level;

/// A structured log event
///
/// Carries the point-in-time data for one log call: when it happened, how
/// severe it is, the message text, structured properties, and an optional
/// error description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEvent {
    /// Event timestamp (UTC)
    pub timestamp: DateTime<Utc>,

    /// Severity level
    pub level: Level,

    /// Message text
    pub message: String,

    /// Structured properties attached to the event
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, serde_json::Value>,

    /// Error description carried by the event, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl LogEvent {
    /// Create an event with the given level and message, timestamped now
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            level,
            message: message.into(),
            properties: BTreeMap::new(),
            error: None,
        }
    }

    /// Set an explicit timestamp
    #[must_use]
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Attach a structured property
    #[must_use]
    pub fn with_property(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Attach an error description
    #[must_use]
    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    /// Check if this is an error-level event
    #[inline]
    pub fn is_error(&self) -> bool {
        self.level.is_error()
    }
}
