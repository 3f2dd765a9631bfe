use contactbook_core::parser::datetime::parse_date_time;
use contactbook_core::parser::tokenizer::scan;
use contactbook_core::Address;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_scan(c: &mut Criterion) {
    let input = "Blk 30 Geylang St (Home) Blk 11 AMK (Work) 1 Infinite Loop (Office)";
    c.bench_function("scan_three_pairs", |b| {
        b.iter(|| scan("address", black_box(input)))
    });
    c.bench_function("parse_address_three_pairs", |b| {
        b.iter(|| Address::parse(black_box(input)))
    });
}

fn bench_date_time(c: &mut Criterion) {
    // last accepted format, so every earlier shape is tried first
    c.bench_function("parse_date_time_last_format", |b| {
        b.iter(|| parse_date_time(black_box("12-01-2025 14:00")))
    });
}

criterion_group!(benches, bench_scan, bench_date_time);
criterion_main!(benches);
