use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use cron_spec::{parse_standard, ParseOption, Parser};

const EXPRESSIONS: &[&str] = &[
    "@hourly",
    "@every 1h30m",
    "* * * * *",
    "0 * 1,7 * *",
    "0 * 2/2 * *",
    "0 * * 6-12/3 *",
    "0 * * JAN-DEC MON-FRI",
    "5,10,15-20/2,*/7 */3 1-31/5 * sun,sat",
];

const TIME_ZONES: &[&str] = &["UTC", "EET", "Europe/Kyiv"];

pub fn standard_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("standard");
    for expression in EXPRESSIONS {
        group.bench_with_input(BenchmarkId::from_parameter(expression), expression, |b, e| {
            b.iter(|| parse_standard(e).unwrap())
        });

        for tz in TIME_ZONES {
            let expression = format!("TZ={tz} {expression}");
            group.bench_with_input(BenchmarkId::from_parameter(expression.clone()), &expression, |b, e| {
                b.iter(|| parse_standard(e).unwrap())
            });
        }
    }
    group.finish();
}

pub fn optional_second_benchmark(c: &mut Criterion) {
    let parser = Parser::new(&[
        ParseOption::SecondOptional,
        ParseOption::Minute,
        ParseOption::Hour,
        ParseOption::Dom,
        ParseOption::Month,
        ParseOption::Dow,
        ParseOption::Descriptor,
    ])
    .unwrap();

    let mut group = c.benchmark_group("optional_second");
    for expression in EXPRESSIONS.iter().filter(|e| !e.starts_with('@')) {
        let with_second = format!("*/10 {expression}");
        for expression in [expression.to_string(), with_second] {
            group.bench_with_input(BenchmarkId::from_parameter(expression.clone()), &expression, |b, e| {
                b.iter(|| parser.parse(e).unwrap())
            });
        }
    }
    group.finish();
}

criterion_group!(benches, standard_benchmark, optional_second_benchmark);
criterion_main!(benches);
