use criterion::{Criterion, black_box, criterion_group, criterion_main};

use cadastro::core::*;

fn cnpj_batch() -> Vec<String> {
    (0..1000)
        .map(|n| format!("{:012}", 112_223_330_001u64 + n))
        .map(|base| mask_cnpj(&format!("{base}00")))
        .collect()
}

fn bench_validate_cpf(c: &mut Criterion) {
    c.bench_function("validate_cpf_masked", |b| {
        b.iter(|| black_box(validate_cpf(black_box("529.982.247-25"))));
    });
}

fn bench_validate_cnpj(c: &mut Criterion) {
    c.bench_function("validate_cnpj_masked", |b| {
        b.iter(|| black_box(validate_cnpj(black_box("11.222.333/0001-81"))));
    });
}

fn bench_parse_cnpj(c: &mut Criterion) {
    c.bench_function("parse_cnpj", |b| {
        b.iter(|| black_box(Cnpj::parse(black_box("11222333000181"))));
    });
}

fn bench_validate_cnpj_batch(c: &mut Criterion) {
    let batch = cnpj_batch();
    c.bench_function("validate_cnpj_1000_mixed", |b| {
        b.iter(|| batch.iter().filter(|s| validate_cnpj(black_box(s))).count());
    });
}

fn bench_masks(c: &mut Criterion) {
    c.bench_function("mask_cnpj_partial", |b| {
        b.iter(|| black_box(mask_cnpj(black_box("112223330"))));
    });
    c.bench_function("format_brl", |b| {
        let amount = parse_brl_input("123456789").unwrap_or_default();
        b.iter(|| black_box(format_brl(black_box(amount))));
    });
}

criterion_group!(
    benches,
    bench_validate_cpf,
    bench_validate_cnpj,
    bench_parse_cnpj,
    bench_validate_cnpj_batch,
    bench_masks,
);
criterion_main!(benches);
