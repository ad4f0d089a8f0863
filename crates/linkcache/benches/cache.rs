use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use linkcache::LruCache;

fn keys(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("key-{i:05}")).collect()
}

fn bench_get_hit(c: &mut Criterion) {
    let mut group = c.benchmark_group("get");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("get_hit", |b| {
        let mut cache = LruCache::new(1000).unwrap();
        let keys = keys(100);

        // Pre-populate and warm the recency order
        for (i, key) in keys.iter().enumerate() {
            cache.put(key.clone(), i as i64);
        }
        for key in &keys {
            cache.get(key);
        }

        let mut counter = 0;
        b.iter(|| {
            black_box(cache.get(&keys[counter % 100]));
            counter += 1;
        });
    });
    group.finish();
}

fn bench_mixed_50_50(c: &mut Criterion) {
    let mut group = c.benchmark_group("mixed");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("50_read_50_write", |b| {
        let mut cache = LruCache::new(1000).unwrap();
        let keys = keys(100);

        for (i, key) in keys.iter().enumerate() {
            cache.put(key.clone(), i as i64);
        }

        let mut counter = 0u64;
        b.iter(|| {
            let slot = (counter as usize) % 100;
            if counter % 2 == 0 {
                black_box(cache.get(&keys[slot]));
            } else {
                cache.put(keys[slot].clone(), counter as i64);
            }
            counter += 1;
        });
    });
    group.finish();
}

fn bench_put_evicting(c: &mut Criterion) {
    let mut group = c.benchmark_group("put");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("put_evicting", |b| {
        // Small cache, wide key set: every insert past warmup evicts
        let mut cache = LruCache::new(10).unwrap();
        let keys = keys(100);

        let mut counter = 0;
        b.iter(|| {
            cache.put(keys[counter % 100].clone(), counter as i64);
            counter += 1;
        });
    });
    group.finish();
}

criterion_group!(benches, bench_get_hit, bench_mixed_50_50, bench_put_evicting);
criterion_main!(benches);
