//! memlog events - structured log event model and text rendering
//!
//! This crate provides the types that flow into memlog sinks:
//! - `LogEvent` - one structured log call (timestamp, level, message,
//!   properties, optional error)
//! - `Level` - six-step severity scale with a total order
//! - `EventFormatter` - the rendering seam between pipeline and sink
//! - `TextFormatter` / `MessageFormatter` - stock renderers
//!
//! # Design Principles
//!
//! - **Read-only input**: sinks never mutate events; everything here is
//!   plain owned data
//! - **Writer-based rendering**: formatters write into a caller-provided
//!   `fmt::Write`, so sinks can reuse one scratch allocation across calls
//! - **Serde throughout**: events and levels serialize for transport and
//!   config embedding

mod event;
mod format;
mod level;

pub use event::LogEvent;
pub use format::{DEFAULT_TIMESTAMP_FORMAT, EventFormatter, MessageFormatter, TextFormatter};
pub use level::{Level, ParseLevelError};
