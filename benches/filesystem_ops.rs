//! Benchmarks for filesystem overlay operations.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use imageprep::filesystem::{FileEntry, Filesystem};

fn populated(n: usize) -> Filesystem {
    let mut fs = Filesystem::new();
    for i in 0..n {
        fs.add(
            format!("/etc/app/conf.d/{i:04}.conf"),
            FileEntry::new(format!("key{i} = value{i}\n")),
        );
    }
    fs
}

fn bench_add(c: &mut Criterion) {
    c.bench_function("filesystem_add_100", |b| {
        b.iter(|| black_box(populated(100)));
    });
}

fn bench_merge(c: &mut Criterion) {
    let base = populated(100);
    let overlay = populated(50);

    c.bench_function("filesystem_merge", |b| {
        b.iter(|| {
            let mut merged = base.clone();
            merged.merge(black_box(overlay.clone()));
            merged
        });
    });
}

fn bench_iterate(c: &mut Criterion) {
    let fs = populated(200);

    c.bench_function("filesystem_iterate", |b| {
        b.iter(|| {
            black_box(&fs)
                .entries()
                .map(|(_, entry)| entry.content.len())
                .sum::<usize>()
        });
    });
}

criterion_group!(benches, bench_add, bench_merge, bench_iterate);
criterion_main!(benches);
