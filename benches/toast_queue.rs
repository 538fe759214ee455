// SPDX-License-Identifier: MPL-2.0
use casino_overlays::ui::notifications::{Category, ToastQueue};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use std::time::{Duration, Instant};

const TTL: Duration = Duration::from_millis(3000);

fn push_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("toast_queue");

    for capacity in [5usize, 20] {
        group.bench_with_input(
            BenchmarkId::new("push_with_eviction", capacity),
            &capacity,
            |b, &capacity| {
                let start = Instant::now();
                b.iter(|| {
                    let mut queue = ToastQueue::new(capacity);
                    for i in 0..100u64 {
                        let now = start + Duration::from_millis(i);
                        black_box(queue.push("Jackpot!", Category::Success, TTL, now));
                    }
                    queue
                });
            },
        );
    }

    group.bench_function("tick_expires_all", |b| {
        let start = Instant::now();
        b.iter(|| {
            let mut queue = ToastQueue::new(20);
            for i in 0..20u64 {
                queue.push("Spin ready", Category::Info, TTL, start + Duration::from_millis(i));
            }
            black_box(queue.tick(start + TTL * 2))
        });
    });

    group.finish();
}

criterion_group!(benches, push_benchmark);
criterion_main!(benches);
