//! Memory sink - bounded in-process message buffer
//!
//! Renders each event to text and keeps the most recent `keep_limit`
//! renderings in a shared [`MessageQueue`], evicting the oldest first once
//! the buffer is full. Useful wherever recent log output has to stay
//! inspectable from inside the process.
//!
//! # Use Cases
//!
//! - **Diagnostics endpoints**: expose the last N log lines from a
//!   health-check or debug handler
//! - **Test harnesses**: assert on rendered log output without touching
//!   disk
//! - **Crash context**: attach recent log lines to error reports
//!
//! # Example
//!
//! ```ignore
//! use memlog_events::{Level, LogEvent, TextFormatter};
//! use memlog_sinks::{EventSink, MemorySink, MessageQueue};
//!
//! let queue = MessageQueue::new();
//! let sink = MemorySink::new(queue.clone(), Box::new(TextFormatter::new()));
//!
//! sink.emit(&LogEvent::new(Level::Info, "ready"))?;
//! assert_eq!(queue.len(), 1);
//! ```

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;
use serde::Deserialize;

use memlog_events::{EventFormatter, Level, LogEvent};

use crate::common::{EventSink, Result};
use crate::queue::MessageQueue;

/// Messages retained when the configured keep limit is zero or negative
pub const DEFAULT_KEEP_LIMIT: usize = 10;

/// Configuration for the memory sink
///
/// # Example
///
/// ```toml
/// [sinks.memory]
/// keep_limit = 50
/// min_level = "warning"
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MemorySinkConfig {
    /// Sink identifier
    pub id: String,

    /// Maximum number of retained messages
    ///
    /// Values of zero or below select [`DEFAULT_KEEP_LIMIT`] instead of
    /// failing; a non-positive limit means "unconfigured", not an error.
    pub keep_limit: i64,

    /// Minimum level hint for the registering pipeline
    ///
    /// The sink itself buffers every event it is handed; level filtering
    /// stays with the pipeline. Carried here so one config block can
    /// describe the whole registration.
    pub min_level: Level,
}

impl Default for MemorySinkConfig {
    fn default() -> Self {
        Self {
            id: "memory".into(),
            keep_limit: DEFAULT_KEEP_LIMIT as i64,
            min_level: Level::Trace,
        }
    }
}

impl MemorySinkConfig {
    /// Create config with a custom keep limit
    #[must_use]
    pub fn with_keep_limit(mut self, keep_limit: i64) -> Self {
        self.keep_limit = keep_limit;
        self
    }

    /// Create config with a minimum level hint
    #[must_use]
    pub fn with_min_level(mut self, min_level: Level) -> Self {
        self.min_level = min_level;
        self
    }

    /// Effective keep limit after normalization
    #[inline]
    pub fn effective_keep_limit(&self) -> usize {
        match usize::try_from(self.keep_limit) {
            Ok(n) if n > 0 => n,
            _ => DEFAULT_KEEP_LIMIT,
        }
    }
}

/// Bounded in-memory sink
///
/// Holds a clone of the consumer's [`MessageQueue`] and a formatter. Each
/// emitted event is rendered into a reusable scratch buffer, blank
/// renderings are dropped, and the queue is trimmed from the front until
/// it holds at most `keep_limit` messages.
pub struct MemorySink {
    /// Configuration (raw, as supplied)
    config: MemorySinkConfig,

    /// Normalized retention limit
    keep_limit: usize,

    /// Shared buffer written by this sink, read by consumers
    queue: MessageQueue,

    /// Renders events into the scratch buffer
    formatter: Box<dyn EventFormatter>,

    /// Reusable render buffer; its lock also serializes whole emit calls
    scratch: Mutex<String>,

    /// Metrics for this sink (Arc for sharing with metrics handle)
    metrics: Arc<MemorySinkMetrics>,
}

/// Metrics for the memory sink
#[derive(Debug, Default)]
pub struct MemorySinkMetrics {
    /// Total events handed to emit
    events_received: AtomicU64,

    /// Total messages appended to the queue
    messages_buffered: AtomicU64,

    /// Total messages evicted by the keep-limit trim
    messages_evicted: AtomicU64,

    /// Renderings dropped for being empty or all-whitespace
    blank_dropped: AtomicU64,

    /// Formatter failures surfaced to callers
    format_errors: AtomicU64,
}

impl MemorySinkMetrics {
    /// Create new metrics instance
    #[inline]
    pub const fn new() -> Self {
        Self {
            events_received: AtomicU64::new(0),
            messages_buffered: AtomicU64::new(0),
            messages_evicted: AtomicU64::new(0),
            blank_dropped: AtomicU64::new(0),
            format_errors: AtomicU64::new(0),
        }
    }

    /// Record an event entering emit
    #[inline]
    pub fn record_received(&self) {
        self.events_received.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a message appended to the queue
    #[inline]
    pub fn record_buffered(&self) {
        self.messages_buffered.fetch_add(1, Ordering::Relaxed);
    }

    /// Record messages evicted by the keep-limit trim
    #[inline]
    pub fn record_evicted(&self, count: u64) {
        self.messages_evicted.fetch_add(count, Ordering::Relaxed);
    }

    /// Record a blank rendering dropped before enqueue
    #[inline]
    pub fn record_blank_dropped(&self) {
        self.blank_dropped.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a formatter failure
    #[inline]
    pub fn record_format_error(&self) {
        self.format_errors.fetch_add(1, Ordering::Relaxed);
    }

    /// Get events received count
    #[inline]
    pub fn events_received(&self) -> u64 {
        self.events_received.load(Ordering::Relaxed)
    }

    /// Get messages buffered count
    #[inline]
    pub fn messages_buffered(&self) -> u64 {
        self.messages_buffered.load(Ordering::Relaxed)
    }

    /// Get messages evicted count
    #[inline]
    pub fn messages_evicted(&self) -> u64 {
        self.messages_evicted.load(Ordering::Relaxed)
    }

    /// Get blank renderings dropped count
    #[inline]
    pub fn blank_dropped(&self) -> u64 {
        self.blank_dropped.load(Ordering::Relaxed)
    }

    /// Get formatter failure count
    #[inline]
    pub fn format_errors(&self) -> u64 {
        self.format_errors.load(Ordering::Relaxed)
    }

    /// Get snapshot of metrics
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            events_received: self.events_received.load(Ordering::Relaxed),
            messages_buffered: self.messages_buffered.load(Ordering::Relaxed),
            messages_evicted: self.messages_evicted.load(Ordering::Relaxed),
            blank_dropped: self.blank_dropped.load(Ordering::Relaxed),
            format_errors: self.format_errors.load(Ordering::Relaxed),
        }
    }

    /// Reset all metrics to zero
    pub fn reset(&self) {
        self.events_received.store(0, Ordering::Relaxed);
        self.messages_buffered.store(0, Ordering::Relaxed);
        self.messages_evicted.store(0, Ordering::Relaxed);
        self.blank_dropped.store(0, Ordering::Relaxed);
        self.format_errors.store(0, Ordering::Relaxed);
    }
}

/// Point-in-time snapshot of memory sink metrics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub events_received: u64,
    pub messages_buffered: u64,
    pub messages_evicted: u64,
    pub blank_dropped: u64,
    pub format_errors: u64,
}

/// Handle for accessing memory sink metrics
///
/// Holds an Arc to the metrics, so it stays valid after the sink itself
/// has been handed off to the pipeline.
#[derive(Debug, Clone)]
pub struct MemorySinkMetricsHandle {
    id: String,
    metrics: Arc<MemorySinkMetrics>,
}

impl MemorySinkMetricsHandle {
    /// Sink id this handle reports for
    #[inline]
    pub fn sink_id(&self) -> &str {
        &self.id
    }

    /// Get snapshot of metrics
    pub fn snapshot(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }
}

impl MemorySink {
    /// Create a sink with default configuration
    pub fn new(queue: MessageQueue, formatter: Box<dyn EventFormatter>) -> Self {
        Self::with_config(MemorySinkConfig::default(), queue, formatter)
    }

    /// Create a sink with a custom name
    pub fn with_name(
        queue: MessageQueue,
        formatter: Box<dyn EventFormatter>,
        name: impl Into<String>,
    ) -> Self {
        let config = MemorySinkConfig {
            id: name.into(),
            ..Default::default()
        };
        Self::with_config(config, queue, formatter)
    }

    /// Create a sink with full configuration
    pub fn with_config(
        config: MemorySinkConfig,
        queue: MessageQueue,
        formatter: Box<dyn EventFormatter>,
    ) -> Self {
        let keep_limit = config.effective_keep_limit();
        tracing::debug!(sink = %config.id, keep_limit, "memory sink created");

        Self {
            config,
            keep_limit,
            queue,
            formatter,
            scratch: Mutex::new(String::new()),
            metrics: Arc::new(MemorySinkMetrics::new()),
        }
    }

    /// Effective retention limit
    #[inline]
    pub fn keep_limit(&self) -> usize {
        self.keep_limit
    }

    /// Minimum level hint for the registering pipeline
    #[inline]
    pub fn min_level(&self) -> Level {
        self.config.min_level
    }

    /// Handle to the shared queue this sink writes
    #[inline]
    pub fn queue(&self) -> &MessageQueue {
        &self.queue
    }

    /// Get reference to metrics
    #[inline]
    pub fn metrics(&self) -> &MemorySinkMetrics {
        &self.metrics
    }

    /// Get a metrics handle that outlives sink registration
    pub fn metrics_handle(&self) -> MemorySinkMetricsHandle {
        MemorySinkMetricsHandle {
            id: self.config.id.clone(),
            metrics: Arc::clone(&self.metrics),
        }
    }
}

impl EventSink for MemorySink {
    /// Render one event and maintain the bounded queue
    ///
    /// The whole body runs under the scratch-buffer lock, so concurrent
    /// emits are serialized and never interleave their use of the scratch
    /// or the queue.
    fn emit(&self, event: &LogEvent) -> Result<()> {
        let mut scratch = self.scratch.lock();
        self.metrics.record_received();

        // Start from empty text even if an earlier formatter failure left
        // partial output behind; clearing keeps the allocation.
        scratch.clear();
        if let Err(err) = self.formatter.format_event(event, &mut *scratch) {
            self.metrics.record_format_error();
            return Err(err.into());
        }

        // Formatters may legitimately render nothing for some events;
        // blank output never reaches the queue.
        if scratch.trim().is_empty() {
            self.metrics.record_blank_dropped();
            return Ok(());
        }

        let mut queue = self.queue.lock_inner();
        queue.push_back(scratch.clone());
        let mut evicted = 0u64;
        while queue.len() > self.keep_limit {
            queue.pop_front();
            evicted += 1;
        }
        drop(queue);

        self.metrics.record_buffered();
        if evicted > 0 {
            self.metrics.record_evicted(evicted);
        }

        Ok(())
    }

    #[inline]
    fn name(&self) -> &str {
        &self.config.id
    }
}

impl fmt::Debug for MemorySink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemorySink")
            .field("id", &self.config.id)
            .field("keep_limit", &self.keep_limit)
            .field("buffered", &self.queue.len())
            .finish_non_exhaustive()
    }
}
