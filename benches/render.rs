use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use ctxfmt::format::escape;
use ctxfmt::{Category, ContextFormatter, FormatterOptions};

fn make_tokens(n: usize) -> Vec<(Category, String)> {
    let keyword = Category::parse("Keyword").unwrap();
    let name = Category::parse("Name.Function").unwrap();
    let text = Category::parse("Text").unwrap();
    let string = Category::parse("String.Double").unwrap();
    (0..n)
        .flat_map(|i| {
            [
                (keyword.clone(), "def".to_string()),
                (text.clone(), " ".to_string()),
                (name.clone(), format!("f{}", i)),
                (text.clone(), "(): ".to_string()),
                (string.clone(), "\"50% {done}\"".to_string()),
                (text.clone(), "\n".to_string()),
            ]
        })
        .collect()
}

fn bench_format(c: &mut Criterion) {
    let formatter = ContextFormatter::new(FormatterOptions::default()).unwrap();
    let mut group = c.benchmark_group("format/tokens");
    for &n in &[10, 100, 1000] {
        let tokens = make_tokens(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &tokens, |b, tokens| {
            b.iter(|| {
                let mut out = Vec::with_capacity(tokens.len() * 32);
                formatter
                    .format(black_box(tokens.iter().map(|(c, t)| (c.clone(), t))), &mut out)
                    .unwrap();
                out
            })
        });
    }
    group.finish();
}

fn bench_escape(c: &mut Criterion) {
    let text = r"if (a \\ b) { x = 100%; $y #z & \w }".repeat(20);
    c.bench_function("escape", |b| b.iter(|| escape(black_box(&text))));
}

fn bench_style_defs(c: &mut Criterion) {
    c.bench_function("style_defs/default", |b| {
        b.iter(|| {
            let formatter = ContextFormatter::new(FormatterOptions::default()).unwrap();
            formatter.style_defs()
        })
    });
}

criterion_group!(benches, bench_format, bench_escape, bench_style_defs);
criterion_main!(benches);
