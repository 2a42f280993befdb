use cowbuffer::{CircularQueue, CowBuffer};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

fn benchmark_update_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("CowBuffer_Update");

    for size in [64usize, 4096, 65536].iter() {
        group.throughput(Throughput::Bytes(*size as u64));

        group.bench_with_input(BenchmarkId::new("in_place", size), size, |b, &size| {
            let mut buffer = CowBuffer::new(vec![0u8; size]);
            b.iter(|| {
                buffer.update(black_box(size / 2), black_box(0xAB)).unwrap();
            });
        });

        group.bench_with_input(BenchmarkId::new("fork_per_write", size), size, |b, &size| {
            let original = CowBuffer::new(vec![0u8; size]);
            b.iter(|| {
                // Every iteration writes through a fresh sharer, so every
                // write pays for a fork
                let mut copy = original.try_clone().unwrap();
                copy.update(black_box(size / 2), black_box(0xAB)).unwrap();
                black_box(copy);
            });
        });
    }

    group.finish();
}

fn benchmark_clone_close_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("CowBuffer_Lifecycle");

    group.bench_function("clone_close", |b| {
        let original = CowBuffer::new(vec![0u8; 4096]);
        b.iter(|| {
            let mut copy = original.try_clone().unwrap();
            copy.close();
        });
    });

    group.bench_function("clone_fanout_16", |b| {
        let original = CowBuffer::new(vec![0u8; 4096]);
        b.iter(|| {
            let handles: Vec<_> = (0..16)
                .map(|_| original.try_clone().unwrap())
                .collect();
            black_box(handles);
        });
    });

    group.finish();
}

fn benchmark_queue_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("CircularQueue");

    for capacity in [64usize, 1024].iter() {
        group.throughput(Throughput::Elements(*capacity as u64));
        group.bench_with_input(
            BenchmarkId::new("push_pop_u64", capacity),
            capacity,
            |b, &capacity| {
                let mut queue: CircularQueue<u64> = CircularQueue::new(capacity).unwrap();
                b.iter(|| {
                    for i in 0..capacity {
                        queue.push(i as u64);
                    }
                    for _ in 0..capacity {
                        black_box(queue.pop());
                    }
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_update_paths,
    benchmark_clone_close_churn,
    benchmark_queue_throughput
);
criterion_main!(benches);
