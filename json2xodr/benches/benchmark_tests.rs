use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use json2xodr::test::{get_tests, Expected};
use json2xodr::transform::ToXodrConfig;

pub fn benchmark_tests(c: &mut Criterion) {
    let tests = get_tests();
    let config = ToXodrConfig::default();
    let mut group = c.benchmark_group("tests");
    for test in tests
        .iter()
        .filter(|test| matches!(test.expected, Expected::Road(_)))
    {
        group.measurement_time(std::time::Duration::from_millis(1000));
        group.warm_up_time(std::time::Duration::from_millis(500));
        group.bench_with_input(BenchmarkId::from_parameter(test), test, |b, test| {
            b.iter(|| {
                assert!(test.convert(&config).is_ok());
            });
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_tests);
criterion_main!(benches);
