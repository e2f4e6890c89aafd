//! Benchmark – `charref::Unescaper` and `charref::ReferenceMatcher`
#![allow(missing_docs)]

use std::time::Duration;

use charref::{ReferenceMatcher, Unescaper};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

const SAMPLES: [&str; 6] = [
    "amp;",
    "CounterClockwiseContourIntegral;",
    "notit;",
    "#x1F600;",
    "#128512;",
    "zzzz;",
];

/// Produce a deterministic document of at least `target_len` bytes in which
/// roughly one word in `density` is a character reference.
fn make_payload(target_len: usize, density: usize) -> String {
    let mut s = String::with_capacity(target_len + 64);
    let mut i = 0usize;
    while s.len() < target_len {
        if i % density == 0 {
            s.push('&');
            s.push_str(SAMPLES[(i / density) % SAMPLES.len()]);
        } else {
            s.push_str("lorem");
        }
        s.push(' ');
        i += 1;
    }
    s
}

fn bench_matcher(c: &mut Criterion) {
    let mut group = c.benchmark_group("matcher");
    let mut matcher = ReferenceMatcher::new();
    for sample in SAMPLES {
        group.bench_with_input(BenchmarkId::from_parameter(sample), sample, |b, s| {
            b.iter(|| {
                matcher.reset();
                for ch in black_box(s).chars() {
                    if !matcher.feed(ch) {
                        break;
                    }
                }
                black_box(matcher.value().is_replacement());
            });
        });
    }
    group.finish();
}

fn bench_unescape(c: &mut Criterion) {
    let mut group = c.benchmark_group("unescape");
    let mut unescaper = Unescaper::new();
    for &density in &[1usize, 10, 100] {
        let payload = make_payload(10_000, density);
        group.bench_with_input(BenchmarkId::new("density", density), &payload, |b, p| {
            b.iter(|| black_box(unescaper.unescape(black_box(p)).len()));
        });
    }
    group.finish();
}

fn criterion() -> Criterion {
    Criterion::default()
        .warm_up_time(Duration::from_secs(2))
        .measurement_time(Duration::from_secs(5))
}

criterion_group! { name = benches; config = criterion(); targets = bench_matcher, bench_unescape }
criterion_main!(benches);
