// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the posting core.
//!
//! Measures the performance of:
//! - Draining a long serial queue through remove-driven promotion
//! - Firing many dismiss timers in parallel mode

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use iced_post::config::PostConfig;
use iced_post::domain::ItemId;
use iced_post::post::{Completion, ManualClock, PostManager, PostRequest, Presenter};
use std::hint::black_box;
use std::time::Duration;

const ITEMS: usize = 1_000;

/// Presenter completing every transition synchronously.
struct Immediate;

impl Presenter<ItemId> for Immediate {
    fn post(&mut self, _item: &ItemId, _animated: bool, done: Completion) {
        done.finish();
    }

    fn remove(&mut self, _item: &ItemId, _animated: bool, done: Completion) {
        done.finish();
    }
}

/// Benchmark serial queue throughput.
///
/// Posts `ITEMS` requests, then removes the current item until the queue
/// is empty.
fn bench_serial_queue(c: &mut Criterion) {
    let mut group = c.benchmark_group("post_queue");

    group.bench_function("serial_drain", |b| {
        b.iter_batched(
            || {
                let mut presenter = Immediate;
                let mut manager = PostManager::new(&PostConfig::default());
                for _ in 0..ITEMS {
                    manager
                        .post(&mut presenter, PostRequest::new(ItemId::new()))
                        .unwrap();
                }
                manager
            },
            |mut manager| {
                let mut presenter = Immediate;
                while manager.is_active() {
                    manager.remove_current(&mut presenter);
                }
                black_box(manager);
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

/// Benchmark timer expiry in parallel mode.
fn bench_timers(c: &mut Criterion) {
    let mut group = c.benchmark_group("post_queue");
    let config = PostConfig {
        serial: false,
        ..PostConfig::default()
    };

    group.bench_function("parallel_timeouts", |b| {
        b.iter_batched(
            || {
                let clock = ManualClock::new();
                let mut presenter = Immediate;
                let mut manager = PostManager::with_clock(&config, clock.clone());
                for i in 0..ITEMS {
                    let request = PostRequest::new(ItemId::new())
                        .dismiss_after(Some(Duration::from_millis(1 + i as u64)));
                    manager.post(&mut presenter, request).unwrap();
                }
                (manager, clock)
            },
            |(mut manager, clock)| {
                let mut presenter = Immediate;
                clock.advance(Duration::from_secs(2));
                manager.tick(&mut presenter);
                black_box(manager);
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_serial_queue, bench_timers);
criterion_main!(benches);
