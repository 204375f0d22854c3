use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use wrap_rs::board::{Flop, Hand};
use wrap_rs::cards::RankUniverse;
use wrap_rs::draws::{aggregate_flop, nut_outs, out_ranks};

fn bench_out_ranks(c: &mut Criterion) {
    let universe = RankUniverse::standard();
    let flop: Flop = "45J".parse().unwrap();
    let wrap: Hand = "2367K".parse().unwrap();
    let air: Hand = "29TQK".parse().unwrap();

    let mut g = c.benchmark_group("out_ranks");
    g.bench_with_input(BenchmarkId::new("wrap", "2367K on 45J"), &wrap, |b, hand| {
        b.iter(|| out_ranks(black_box(&universe), black_box(&flop), black_box(hand)))
    });
    g.bench_with_input(BenchmarkId::new("air", "29TQK on 45J"), &air, |b, hand| {
        b.iter(|| out_ranks(black_box(&universe), black_box(&flop), black_box(hand)))
    });
    g.finish();
}

fn bench_nut_outs(c: &mut Criterion) {
    let universe = RankUniverse::standard();
    let flop: Flop = "45J".parse().unwrap();
    let hand: Hand = "2367K".parse().unwrap();
    let outs = out_ranks(&universe, &flop, &hand);

    c.bench_function("nut_outs", |b| {
        b.iter(|| nut_outs(black_box(&universe), black_box(&flop), black_box(&hand), &outs))
    });
}

fn bench_aggregate_flop(c: &mut Criterion) {
    let universe = RankUniverse::standard();
    let flop: Flop = "45J".parse().unwrap();

    c.bench_function("aggregate_flop", |b| {
        b.iter(|| aggregate_flop(black_box(&universe), black_box(flop)))
    });
}

criterion_group!(benches, bench_out_ranks, bench_nut_outs, bench_aggregate_flop);
criterion_main!(benches);
