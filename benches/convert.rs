use criterion::{black_box, criterion_group, criterion_main, Criterion};
use wordcase::Style;

const PHRASE: &str = "xCAMELSnakeKebab_screaming pascal XXX";

fn bench_styles(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert");
    for style in Style::ALL {
        group.bench_function(style.name(), |b| {
            b.iter(|| style.convert(black_box(PHRASE)))
        });
    }
    group.finish();
}

fn bench_segment(c: &mut Criterion) {
    c.bench_function("segment", |b| b.iter(|| wordcase::segment(black_box(PHRASE))));
}

criterion_group!(benches, bench_styles, bench_segment);
criterion_main!(benches);
