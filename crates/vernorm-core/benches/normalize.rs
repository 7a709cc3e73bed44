use criterion::{black_box, criterion_group, criterion_main, Criterion};

use vernorm_core::{classify_stability, normalize};

const CORPUS: &[&str] = &[
    "1.0.0",
    "v1.2",
    "1.0.0RC1dev",
    "1.0.0-beta.2",
    "2021.01.01",
    "20100102-203040-p1",
    "dev-master",
    "dev-feature-Foo",
    "2.x-dev",
    "feature-foo-dev",
    "1.0.0 as 1.2.3",
    "not a version",
];

fn bench_normalize(c: &mut Criterion) {
    c.bench_function("normalize_mixed_corpus", |b| {
        b.iter(|| {
            for specifier in CORPUS {
                black_box(normalize(black_box(specifier)));
            }
        })
    });
}

fn bench_classify(c: &mut Criterion) {
    c.bench_function("classify_stability_mixed_corpus", |b| {
        b.iter(|| {
            for specifier in CORPUS {
                black_box(classify_stability(black_box(specifier)));
            }
        })
    });
}

criterion_group!(benches, bench_normalize, bench_classify);
criterion_main!(benches);
