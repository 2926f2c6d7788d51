use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use std::hint::black_box;
use wordsieve::WordFilter;

fn bench_filter(c: &mut Criterion) {
    let filter: WordFilter = ["sb", "TMD", "他妈的", "傻"].into_iter().collect();

    let dirty = "你好，傻！！sb2~~TMD， 他妈的~~~~".repeat(32);
    let clean = "平平无奇的一段话，没有什么值得过滤的内容。".repeat(32);

    let mut group = c.benchmark_group("filter");
    group.throughput(Throughput::Bytes(dirty.len() as u64));
    group.bench_function("contains_dirty", |b| {
        b.iter(|| filter.contains(black_box(&dirty)))
    });
    group.bench_function("censor_dirty", |b| {
        b.iter(|| filter.censor(black_box(&dirty)))
    });
    group.throughput(Throughput::Bytes(clean.len() as u64));
    group.bench_function("censor_clean", |b| {
        b.iter(|| filter.censor(black_box(&clean)))
    });
    group.finish();
}

criterion_group!(benches, bench_filter);
criterion_main!(benches);
