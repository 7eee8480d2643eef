use benchkit::prelude::*;
use benchkit::resistor::{decode, encode};
use benchkit::route_query;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_solve(c: &mut Criterion) {
    let known = ElectricalQuantities::from_inputs("12", "", "", "6");

    c.bench_function("solve_resistance", |b| {
        b.iter(|| solve(black_box(Quantity::Resistance), black_box(&known)));
    });
}

fn bench_resistor_codec(c: &mut Criterion) {
    let bands = [
        BandColor::Yellow,
        BandColor::Violet,
        BandColor::Red,
        BandColor::Gold,
    ];

    c.bench_function("decode_four_band", |b| {
        b.iter(|| decode(black_box(&bands)));
    });

    c.bench_function("encode_five_band", |b| {
        b.iter(|| encode(black_box(2_760.0), BandMode::FiveBand, None));
    });
}

fn bench_route_query(c: &mut Criterion) {
    c.bench_function("route_query", |b| {
        b.iter(|| route_query(black_box("74HC595 shift register pinout")));
    });
}

criterion_group!(benches, bench_solve, bench_resistor_codec, bench_route_query);
criterion_main!(benches);
