//! Memlog - Sinks
//!
//! Output sinks for memlog. A sink receives structured log events, renders
//! them to text, and delivers the rendered messages to its destination.
//!
//! # Architecture
//!
//! Each sink borrows a `LogEvent`, renders it through an `EventFormatter`,
//! and appends the resulting message to its destination. Emission is
//! synchronous; callers decide where emission happens.
//!
//! ```text
//! [Producer] --&LogEvent--> [Sink] --String--> [Destination] <-- [Consumer]
//! ```
//!
//! # Available Sinks
//!
//! | Sink | Purpose | Bounded |
//! |------|---------|---------|
//! | `memory` | In-memory buffer of recent messages | Yes |
//!
//! # Example
//!
//! ```ignore
//! use memlog_events::{Level, LogEvent, MessageFormatter};
//! use memlog_sinks::{EventSink, MemorySink, MessageQueue};
//!
//! // Create a shared queue and a sink that renders bare messages into it
//! let queue = MessageQueue::new();
//! let sink = MemorySink::new(queue.clone(), Box::new(MessageFormatter::new()));
//!
//! // Emit from anywhere that holds the sink
//! sink.emit(&LogEvent::new(Level::Info, "service started"))?;
//!
//! // Consumers read through their own clone of the queue
//! assert_eq!(queue.snapshot(), vec!["service started"]);
//! ```

// =============================================================================
// Sink implementations (each in its own submodule)
// =============================================================================

/// Memory sink - bounded in-memory buffer of recent messages
pub mod memory;

// =============================================================================
// Shared types
// =============================================================================

/// Common types shared by all sinks (errors, the sink trait)
mod common;

/// Shared message queue read by sink consumers
mod queue;

// =============================================================================
// Public re-exports
// =============================================================================

pub use common::{EventSink, Result, SinkError};
pub use queue::MessageQueue;

// Re-export main sink types for convenience
pub use memory::{
    DEFAULT_KEEP_LIMIT, MemorySink, MemorySinkConfig, MemorySinkMetrics, MemorySinkMetricsHandle,
    MetricsSnapshot,
};

// Tests are registered in their respective modules via #[cfg(test)]
// See: common.rs, queue.rs, memory/mod.rs
