//! Benchmark – jsonprim token scanners.
#![allow(missing_docs)]

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use jsonprim::{scan_float, scan_int, scan_string, skip_ws};

fn bench_skip_ws(c: &mut Criterion) {
    let pure = " \n\r\t".repeat(20);
    let suffixed = format!("{pure}hello");
    c.bench_function("skip_ws/pure", |b| {
        b.iter(|| skip_ws(black_box(pure.as_bytes()), 0));
    });
    c.bench_function("skip_ws/suffixed", |b| {
        b.iter(|| skip_ws(black_box(suffixed.as_bytes()), 0));
    });
}

fn bench_scan_string(c: &mut Criterion) {
    let plain = "\"1234567890qwertyuiopasdfghjklzxcvbnm áéíóú\"".as_bytes();
    let escaped = "\"1234567890qwertyuiopasdfghjklzxcvbnm áéíóú \\uD83D\\uDCA9 \\\"💩\\\"\"".as_bytes();
    c.bench_function("scan_string/no_escapes", |b| {
        b.iter_batched_ref(
            || plain.to_vec(),
            |buf| black_box(scan_string(buf, 0)).is_ok(),
            BatchSize::SmallInput,
        );
    });
    c.bench_function("scan_string/escapes", |b| {
        b.iter_batched_ref(
            || escaped.to_vec(),
            |buf| black_box(scan_string(buf, 0)).is_ok(),
            BatchSize::SmallInput,
        );
    });
}

fn bench_scan_int(c: &mut Criterion) {
    let padded = b"   -9223372036854775808   ";
    c.bench_function("scan_int/padded_min", |b| {
        b.iter(|| scan_int(black_box(padded), 0));
    });
}

fn bench_scan_float(c: &mut Criterion) {
    let big =
        b"-12345678900000000000000000000000000000000000000000000000000000000000000000000000000000000000.123E-10, \"hi\"";
    c.bench_function("scan_float/big_literal", |b| {
        b.iter(|| scan_float(black_box(big), 0));
    });
}

criterion_group!(
    benches,
    bench_skip_ws,
    bench_scan_string,
    bench_scan_int,
    bench_scan_float
);
criterion_main!(benches);
