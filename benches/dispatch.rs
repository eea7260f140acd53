//! Criterion benchmarks for toast dispatch hot paths.
//!
//! These benchmarks establish baselines for the fire-and-forget enqueue and
//! for the full trigger-to-publish round trip through a running store.
//!
//! Key metrics:
//! - Enqueue throughput (actions/sec) for various batch sizes
//! - Trigger-to-publish latency through the store task
//!
//! Run with: cargo bench --bench dispatch

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use toastbus::config::StoreSettings;
use toastbus::handle::ToastHandle;
use toastbus::messages::ToastAction;
use toastbus::store::ToastStore;
use toastbus::toast::{ToastKind, ToastList};
use tokio::sync::{mpsc, watch};

/// Benchmark the fire-and-forget enqueue path in isolation.
///
/// The handle is wired to a raw channel with a draining consumer, so the
/// measurement covers only the dispatch side. Tests multiple batch sizes to
/// understand per-action overhead.
fn dispatch_enqueue(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let mut group = c.benchmark_group("dispatch_enqueue");

    let batch_sizes = vec![1usize, 8, 64];

    for batch in batch_sizes {
        let (action_tx, mut action_rx) = mpsc::unbounded_channel::<ToastAction>();
        let (_list_tx, list_rx) = watch::channel(ToastList::new());
        let handle = ToastHandle::new(action_tx, list_rx);

        // Drain actions on a separate task so the channel never backs up
        rt.spawn(async move { while action_rx.recv().await.is_some() {} });

        group.throughput(Throughput::Elements(batch as u64));
        group.bench_with_input(BenchmarkId::new("trigger", batch), &batch, |b, &batch| {
            b.iter(|| {
                for _ in 0..batch {
                    handle.trigger_toast(black_box("benchmark toast"));
                }
            });
        });
    }

    group.finish();
}

/// Benchmark the full round trip: trigger, store processing, publish, read.
///
/// Uses a sticky kind so the eviction timer never participates, and clears
/// between iterations so every round starts from an empty list.
fn trigger_publish_roundtrip(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let (store, toasts) = ToastStore::new(StoreSettings::default());
    rt.spawn(store.run());
    let mut list = toasts.watch();

    let mut group = c.benchmark_group("store_roundtrip");
    group.throughput(Throughput::Elements(1));
    group.bench_function("trigger_then_observe", |b| {
        b.iter(|| {
            rt.block_on(async {
                toasts.trigger_toast_with(black_box("roundtrip"), ToastKind::Error);
                list.changed().await.unwrap();
                toasts.clear();
                list.changed().await.unwrap();
            });
        });
    });
    group.finish();
}

criterion_group!(benches, dispatch_enqueue, trigger_publish_roundtrip);
criterion_main!(benches);
