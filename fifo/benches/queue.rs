use std::hint::black_box;

use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use fifo::Queue;

const SIZES: &[usize] = &[64, 1024, 16 << 10];

fn bench_enqueue(c: &mut Criterion) {
    let mut group = c.benchmark_group("enqueue");
    for &size in SIZES {
        group.bench_function(size.to_string(), |b| {
            b.iter(|| {
                let mut q = Queue::new();
                for i in 0..size {
                    q.enqueue(black_box(i));
                }
                q
            })
        });
    }
    group.finish();
}

fn bench_dequeue(c: &mut Criterion) {
    let mut group = c.benchmark_group("dequeue");
    for &size in SIZES {
        group.bench_function(size.to_string(), |b| {
            b.iter_batched_ref(
                || (0..size).collect::<Queue<_>>(),
                |q| {
                    while let Some(i) = q.dequeue() {
                        black_box(i);
                    }
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_interleaved(c: &mut Criterion) {
    c.bench_function("interleaved", |b| {
        let mut q = Queue::new();
        b.iter(|| {
            for i in 0..64usize {
                q.enqueue(black_box(i));
                if i % 2 == 1 {
                    black_box(q.dequeue());
                }
            }
            q.clear();
        })
    });
}

criterion_group!(benches, bench_enqueue, bench_dequeue, bench_interleaved);
criterion_main!(benches);
