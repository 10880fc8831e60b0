use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use minedown::{ParserOptions, escape, parse};

const SAMPLES: [(&str, &str); 5] = [
    ("plain", "Just some plain chat text without any markup at all"),
    ("legacy", "&6Gold &lbold &r&#ff00ff&pink &x&1&2&3&4&5&6hex"),
    ("formatting", "**Bold ##Italic __Underlined__## End** and ~~struck~~"),
    (
        "interactive",
        "[Click me](gold bold run_command=/help show_text={Runs &ahelp})",
    ),
    ("urls", "See https://example.com/docs or example.org for details"),
];

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    let options = ParserOptions::default();

    for (name, input) in SAMPLES {
        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_with_input(BenchmarkId::new("sample", name), input, |b, input| {
            b.iter(|| parse(black_box(input), &options))
        });
    }
    group.finish();
}

fn bench_parse_long_message(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_long_message");
    let options = ParserOptions::default();

    // Repeat a mixed line to simulate a long chat log
    for repeat in [1, 10, 100] {
        let input = SAMPLES
            .iter()
            .map(|(_, s)| *s)
            .collect::<Vec<_>>()
            .join(" ")
            .repeat(repeat);

        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_with_input(BenchmarkId::new("repeat", repeat), &input, |b, input| {
            b.iter(|| parse(black_box(input), &options))
        });
    }
    group.finish();
}

fn bench_nested_formatting(c: &mut Criterion) {
    let mut group = c.benchmark_group("nested_formatting");
    let options = ParserOptions::default();

    let markers = ["**", "##", "__", "~~", "??"];
    for depth in [1, 3, 5] {
        let open: String = markers[..depth].concat();
        let close: String = markers[..depth].iter().rev().copied().collect();
        let input = format!("{}deep{}", open, close);

        group.bench_with_input(BenchmarkId::new("depth", depth), &input, |b, input| {
            b.iter(|| parse(black_box(input), &options))
        });
    }
    group.finish();
}

fn bench_escape(c: &mut Criterion) {
    let options = ParserOptions::default();
    let input = SAMPLES.map(|(_, s)| s).join(" ");

    c.bench_function("escape_mixed", |b| {
        b.iter(|| escape(black_box(&input), &options))
    });
}

criterion_group!(
    benches,
    bench_parse,
    bench_parse_long_message,
    bench_nested_formatting,
    bench_escape,
);
criterion_main!(benches);
