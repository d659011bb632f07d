//! Criterion benchmarks for capital_engine.
//!
//! Benchmarks cover:
//! - Classification of representative exposures
//! - Full evaluation with and without amounts
//! - Collateral mitigation with growing posting counts
//! - Batch evaluation over a synthetic book

use capital_core::types::{
    CcfKind, CollateralKind, CollateralPosting, CounterpartyCategory, Currency, Exposure,
    ExposureAmounts, ProductCategory, PropertyKind,
};
use capital_engine::{classify, mitigate, CapitalCalculator};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Representative exposures, one per path through the cascade.
fn representative_exposures() -> Vec<(&'static str, Exposure)> {
    let sovereign = Exposure::new(ProductCategory::Loan, CounterpartyCategory::DomesticSovereign);

    let mut institution =
        Exposure::new(ProductCategory::Loan, CounterpartyCategory::FinancialInstitution);
    institution.institution.tenor_up_to_90_days = true;
    institution.institution.netting_eligible = true;

    let mut retail = Exposure::new(ProductCategory::Card, CounterpartyCategory::Individual)
        .with_currencies(Currency::USD, Currency::BRL);
    retail.retail.eligible = true;
    retail.retail.transactor = true;

    let mut mortgage =
        Exposure::new(ProductCategory::RealEstateLoan, CounterpartyCategory::Individual);
    mortgage.real_estate.ltv = 55.0;
    mortgage.real_estate.guarantee_eligible = true;
    mortgage.real_estate.completed = true;

    let mut commercial =
        Exposure::new(ProductCategory::RealEstateLoan, CounterpartyCategory::Corporate);
    commercial.real_estate.kind = PropertyKind::NonResidential;
    commercial.real_estate.ltv = 45.0;
    commercial.real_estate.guarantee_eligible = true;
    commercial.real_estate.completed = true;
    commercial.corporate.sme = true;

    let mut derivative = Exposure::new(ProductCategory::Derivative, CounterpartyCategory::Corporate);
    derivative.corporate.large_low_risk = true;

    vec![
        ("domestic_sovereign", sovereign),
        ("institution", institution),
        ("retail_mismatch", retail),
        ("residential", mortgage),
        ("non_residential_obligor", commercial),
        ("derivative", derivative),
    ]
}

/// Generate a synthetic book by cycling the representative exposures.
fn generate_book(size: usize) -> Vec<Exposure> {
    let templates = representative_exposures();
    (0..size)
        .map(|i| {
            let (_, template) = &templates[i % templates.len()];
            let drawn = 1_000.0 + (i % 97) as f64 * 250.0;
            let undrawn = (i % 13) as f64 * 500.0;
            template
                .clone()
                .with_amounts(ExposureAmounts::new(drawn, undrawn, CcfKind::IrrevocableCommitment))
        })
        .collect()
}

/// Benchmark the classification cascade alone.
fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");

    for (name, exposure) in representative_exposures() {
        group.bench_with_input(BenchmarkId::new("cascade", name), &exposure, |b, exposure| {
            b.iter(|| classify(black_box(exposure)));
        });
    }

    group.finish();
}

/// Benchmark a full evaluation, weight only and with amounts.
fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");
    let calculator = CapitalCalculator::new();

    let mut retail = Exposure::new(ProductCategory::CreditLine, CounterpartyCategory::Individual);
    retail.retail.eligible = true;

    group.bench_function("weight_only", |b| {
        b.iter(|| calculator.evaluate(black_box(&retail)));
    });

    let mut with_amounts = retail
        .clone()
        .with_amounts(ExposureAmounts::new(10_000.0, 5_000.0, CcfKind::RevocableCommitment));
    with_amounts.crm.collateral = vec![CollateralPosting::new(
        CollateralKind::SavingsDeposit,
        Currency::BRL,
        2_000.0,
    )];

    group.bench_function("with_amounts_and_collateral", |b| {
        b.iter(|| calculator.evaluate(black_box(&with_amounts)));
    });

    group.finish();
}

/// Benchmark collateral mitigation by posting count.
fn bench_mitigate(c: &mut Criterion) {
    let mut group = c.benchmark_group("mitigate");

    for n_postings in [1, 10, 100] {
        let postings: Vec<_> = (0..n_postings)
            .map(|i| {
                let currency = if i % 2 == 0 { Currency::BRL } else { Currency::USD };
                CollateralPosting::new(CollateralKind::SeniorPrivateBond, currency, 100.0)
            })
            .collect();

        group.bench_with_input(
            BenchmarkId::new("postings", n_postings),
            &postings,
            |b, postings| {
                b.iter(|| mitigate(black_box(1.0e6), black_box(postings), Currency::BRL, true));
            },
        );
    }

    group.finish();
}

/// Benchmark evaluation over a synthetic book.
fn bench_book(c: &mut Criterion) {
    let mut group = c.benchmark_group("book");
    let calculator = CapitalCalculator::new();

    for size in [100, 1_000, 10_000] {
        let book = generate_book(size);

        group.bench_with_input(BenchmarkId::new("total_rwa", size), &book, |b, book| {
            b.iter(|| {
                book.iter()
                    .filter_map(|e| calculator.evaluate(black_box(e)).rwa)
                    .sum::<f64>()
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_classify,
    bench_evaluate,
    bench_mitigate,
    bench_book
);
criterion_main!(benches);
