//! Event-to-text rendering
//!
//! Formatters turn a [`LogEvent`] into the text a sink stores or writes.
//! The formatter writes into a caller-provided buffer so sinks can reuse
//! one allocation across calls.

use std::fmt;

use crate::event::LogEvent;

/// Timestamp layout used by [`TextFormatter::new`]
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f %:z";

/// Renders a log event into a text buffer
///
/// Implementations write the full rendering into `out` and surface any
/// write failure unchanged. Producing no output at all is valid; sinks
/// drop blank renderings rather than storing empty messages.
pub trait EventFormatter: Send + Sync {
    /// Write the rendering of `event` into `out`
    fn format_event(&self, event: &LogEvent, out: &mut dyn fmt::Write) -> fmt::Result;
}

// =============================================================================
// TextFormatter
// =============================================================================

/// Default text renderer
///
/// Produces a line of timestamp, bracketed uppercase level, and message,
/// with the error description on a following line when present:
///
/// ```text
/// 2025-01-15 10:30:45.123 +00:00 [INFO] request completed
/// ```
///
/// The timestamp layout is a chrono format string and is the only knob;
/// everything else about the line is fixed.
#[derive(Debug, Clone)]
pub struct TextFormatter {
    /// chrono format string for the timestamp field
    timestamp_format: String,
}

impl TextFormatter {
    /// Create a formatter with the default timestamp layout
    pub fn new() -> Self {
        Self {
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }

    /// Use a custom chrono timestamp format string
    #[must_use]
    pub fn with_timestamp_format(mut self, format: impl Into<String>) -> Self {
        self.timestamp_format = format.into();
        self
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl EventFormatter for TextFormatter {
    fn format_event(&self, event: &LogEvent, out: &mut dyn fmt::Write) -> fmt::Result {
        write!(
            out,
            "{} [{}] {}",
            event.timestamp.format(&self.timestamp_format),
            event.level.as_str().to_uppercase(),
            event.message,
        )?;

        if let Some(error) = &event.error {
            write!(out, "\n{error}")?;
        }

        Ok(())
    }
}

// =============================================================================
// MessageFormatter
// =============================================================================

/// Renders only the event message text
///
/// Useful when the buffer consumer wants raw messages without timestamps
/// or levels, such as assertion-friendly test output.
#[derive(Debug, Clone, Copy, Default)]
pub struct MessageFormatter;

impl MessageFormatter {
    /// Create a message-only formatter
    pub const fn new() -> Self {
        Self
    }
}

impl EventFormatter for MessageFormatter {
    fn format_event(&self, event: &LogEvent, out: &mut dyn fmt::Write) -> fmt::Result {
        out.write_str(&event.message)
    }
}
