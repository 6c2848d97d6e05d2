#[macro_use]
extern crate lazy_static;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use unicode_data_source::UnicodeDatabase;

const WARM_UP_TIME: u64 = 3;
const MEASUREMENT_TIME: u64 = 7;

const UNICODE_DATA: &str = include_str!("./../../source/data/ucd/sample/UnicodeData.txt");
const BLOCKS: &str = include_str!("./../../source/data/ucd/sample/Blocks.txt");

lazy_static! {
    static ref UNICODE: UnicodeDatabase = UnicodeDatabase::compile(UNICODE_DATA, BLOCKS).unwrap();
}

/// записанный отдельно, начало первого диапазона, конец последнего диапазона (и последний блок)
const CODES: [(&str, u32); 3] = [("listed", 0x00F6), ("range_first", 0x3400), ("range_last", 0x10FFFD)];

fn lookup(c: &mut Criterion)
{
    let mut group = c.benchmark_group("lookup");

    group.warm_up_time(core::time::Duration::from_secs(WARM_UP_TIME));
    group.measurement_time(core::time::Duration::from_secs(MEASUREMENT_TIME));

    for (name, code) in CODES {
        group.bench_with_input(BenchmarkId::new("record", name), &code, |b, &code| {
            b.iter(|| UNICODE.codepoints().lookup_record(black_box(code)).is_ok())
        });

        group.bench_with_input(BenchmarkId::new("display_name", name), &code, |b, &code| {
            b.iter(|| UNICODE.codepoints().lookup_display_name(black_box(code)).map(|name| name.len()))
        });

        group.bench_with_input(BenchmarkId::new("block", name), &code, |b, &code| {
            b.iter(|| UNICODE.blocks().lookup_block_name(black_box(code)).is_some())
        });
    }

    group.finish();
}

fn compile(c: &mut Criterion)
{
    c.bench_function("compile", |b| {
        b.iter(|| UnicodeDatabase::compile(black_box(UNICODE_DATA), black_box(BLOCKS)).is_ok())
    });
}

criterion_group!(benches, lookup, compile);
criterion_main!(benches);
