use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use units::{parse, parse_measurement, to_string, MatchFlags};
use units_core::units::si::{J, KG, M, S, V};

fn bench_direct_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for input in ["m", "kWh", "ft^2", "kg/m^3"] {
        group.bench_with_input(BenchmarkId::new("direct", input), &input, |b, input| {
            b.iter(|| parse(black_box(input), MatchFlags::DEFAULT));
        });
    }

    group.finish();
}

fn bench_heuristics(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for input in ["kilometers per hour", "square feet", "US gallons", "kgmin", "mL{water}"] {
        group.bench_with_input(BenchmarkId::new("heuristic", input), &input, |b, input| {
            b.iter(|| parse(black_box(input), MatchFlags::DEFAULT));
        });
    }

    // worst case: nothing matches and every strategy runs
    group.bench_function("unrecognized", |b| {
        b.iter(|| parse(black_box("zqxwvutsrq"), MatchFlags::DEFAULT));
    });

    group.finish();
}

fn bench_measurements(c: &mut Criterion) {
    let mut group = c.benchmark_group("measurement");

    let inputs: Vec<String> = (0..100).map(|i| format!("{}.5 m/s", i)).collect();
    group.bench_function("batch_100", |b| {
        b.iter(|| {
            for input in &inputs {
                black_box(parse_measurement(black_box(input), MatchFlags::DEFAULT));
            }
        });
    });

    group.finish();
}

fn bench_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("to_string");

    let cases = [
        ("named", J),
        ("per_unit", M.divide(S)),
        ("raw", M.pow(3).multiply(KG).divide(S.pow(4)).divide(V)),
    ];
    for (name, unit) in cases {
        group.bench_with_input(BenchmarkId::new("unit", name), &unit, |b, unit| {
            b.iter(|| to_string(black_box(*unit), MatchFlags::DEFAULT));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_direct_lookup, bench_heuristics, bench_measurements, bench_generation);
criterion_main!(benches);
