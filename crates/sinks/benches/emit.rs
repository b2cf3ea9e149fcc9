//! Memory sink benchmark suite
//!
//! Benchmarks for memory sink emit throughput and consumer snapshot cost.
//!
//! Run with: `cargo bench -p memlog-sinks --bench emit`
//!
//! # What we measure
//!
//! - Emit into an empty queue (first message, no eviction)
//! - Steady-state emit at the keep limit (every emit evicts one message)
//! - Rendering cost of the text layout versus a bare message
//! - Blank-drop path (rendering that never reaches the queue)
//! - Snapshot cost as the buffered message count grows

use criterion::{
    black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput,
};
use memlog_events::{Level, LogEvent, MessageFormatter, TextFormatter};
use memlog_sinks::{EventSink, MemorySink, MemorySinkConfig, MessageQueue};

/// Create a sink at the given keep limit with a message-only formatter
fn message_sink(keep_limit: i64) -> (MessageQueue, MemorySink) {
    let queue = MessageQueue::new();
    let config = MemorySinkConfig::default().with_keep_limit(keep_limit);
    let sink = MemorySink::with_config(config, queue.clone(), Box::new(MessageFormatter::new()));
    (queue, sink)
}

/// Fill a sink to its keep limit so every further emit evicts
fn fill_to_limit(sink: &MemorySink) {
    for i in 0..sink.keep_limit() {
        let _ = sink.emit(&LogEvent::new(Level::Info, format!("fill {i}")));
    }
}

// =============================================================================
// Emit Benchmarks
// =============================================================================

/// Benchmark: The emit hot path under different rendering loads
fn bench_emit(c: &mut Criterion) {
    let mut group = c.benchmark_group("memory_emit");
    group.throughput(Throughput::Elements(1));

    let event = LogEvent::new(Level::Info, "steady-state message for the emit benchmark");

    // First emit into an empty queue (no eviction)
    group.bench_function("first_emit", |b| {
        b.iter_batched(
            || {
                let (_, sink) = message_sink(10);
                sink
            },
            |sink| {
                let result = sink.emit(&event);
                black_box(result)
            },
            BatchSize::SmallInput,
        );
    });

    // Steady state at the limit: push one, evict one
    let (_queue, sink) = message_sink(10);
    fill_to_limit(&sink);
    group.bench_function("steady_state_evicting", |b| {
        b.iter(|| {
            let result = sink.emit(black_box(&event));
            black_box(result)
        });
    });

    // Same steady state but through the full text layout
    let queue = MessageQueue::new();
    let config = MemorySinkConfig::default().with_keep_limit(10);
    let text_sink = MemorySink::with_config(config, queue, Box::new(TextFormatter::new()));
    fill_to_limit(&text_sink);
    group.bench_function("steady_state_text_layout", |b| {
        b.iter(|| {
            let result = text_sink.emit(black_box(&event));
            black_box(result)
        });
    });

    // Error line adds a second rendered line per message
    let error_event = LogEvent::new(Level::Error, "write failed").with_error("disk full");
    group.bench_function("steady_state_text_layout_with_error", |b| {
        b.iter(|| {
            let result = text_sink.emit(black_box(&error_event));
            black_box(result)
        });
    });

    // Blank renderings are dropped before the queue lock is taken
    let blank_event = LogEvent::new(Level::Info, "   ");
    group.bench_function("blank_dropped", |b| {
        b.iter(|| {
            let result = sink.emit(black_box(&blank_event));
            black_box(result)
        });
    });

    group.finish();
}

// =============================================================================
// Snapshot Benchmarks
// =============================================================================

/// Benchmark: Consumer-side snapshot cost by buffered message count
fn bench_snapshot(c: &mut Criterion) {
    let mut group = c.benchmark_group("memory_snapshot");

    for size in [10usize, 100, 1000] {
        let (queue, sink) = message_sink(size as i64);
        for i in 0..size {
            let _ = sink.emit(&LogEvent::new(Level::Info, format!("buffered message {i}")));
        }

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("messages", size), &queue, |b, queue| {
            b.iter(|| black_box(queue.snapshot()));
        });
    }

    group.finish();
}

// =============================================================================
// Criterion Setup
// =============================================================================

criterion_group!(benches, bench_emit, bench_snapshot);

criterion_main!(benches);
