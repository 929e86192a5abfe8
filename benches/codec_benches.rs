use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hexcamp_h3::*;

// --- Fixtures for benchmarks ---
fn get_fixed_h3_index_res5() -> H3Index {
  // SF (37.7749, -122.4194) at res 5
  H3Index(0x85283473fffffff)
}

fn get_fixed_h3_index_res13() -> H3Index {
  // Decoded from the token 2kgrugszem7q
  H3Index(0x8d28d1a1a59233f)
}

// --- Benchmark Functions ---

fn bench_extract_digits(c: &mut Criterion) {
  let split = SplitIndex::from(get_fixed_h3_index_res13());
  let mut group = c.benchmark_group("extract_digits");

  for res in [1, 5, 13].iter() {
    group.bench_with_input(format!("res_{}", res), res, |b, &r| {
      b.iter(|| extract_digits(black_box(split), black_box(r)));
    });
  }
  group.finish();
}

fn bench_cell_to_hostname(c: &mut Criterion) {
  let cell_res5 = get_fixed_h3_index_res5();
  let cell_res13 = get_fixed_h3_index_res13();

  c.benchmark_group("cell_to_hostname")
    .bench_function("res_5", |b| b.iter(|| cell_to_hostname(black_box(cell_res5))))
    .bench_function("res_13", |b| b.iter(|| cell_to_hostname(black_box(cell_res13))));
}

fn bench_hostname_to_cell(c: &mut Criterion) {
  let hostname = "4.1.2.2.6.2.2.3.0.5.1.2.3.20.h3.hex.camp";
  c.bench_function("hostname_to_cell", |b| b.iter(|| hostname_to_cell(black_box(hostname))));
}

fn bench_tokens(c: &mut Criterion) {
  let cell_hex = "8d28d1a1a59233f";

  c.benchmark_group("token")
    .bench_function("decode", |b| b.iter(|| decode_token(black_box("2kgrugszem7q"))))
    .bench_function("encode", |b| b.iter(|| encode_token(black_box(cell_hex))));
}

// Register benchmark groups
criterion_group!(
  codec_benches,
  bench_extract_digits,
  bench_cell_to_hostname,
  bench_hostname_to_cell,
  bench_tokens
);
criterion_main!(codec_benches);
