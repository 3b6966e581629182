use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fptrie::fp::{build_fp_tree, build_from_matrix, Alphabet, BuildConfig, CountSemantics};
use ndarray::Array2;
use rand::Rng;

/// Generate synthetic one-hot transaction data
///
/// Parameters:
/// - num_transactions: Number of transactions
/// - num_items: Total number of possible items
/// - avg_transaction_size: Average items per transaction
/// - density: How dense the data is (0.0-1.0)
fn generate_transactions(
    num_transactions: usize,
    num_items: usize,
    avg_transaction_size: usize,
    density: f64,
) -> Array2<i32> {
    let mut rng = rand::thread_rng();
    let mut data = vec![0i32; num_transactions * num_items];

    for tx_idx in 0..num_transactions {
        let random_factor: f64 = rng.gen();
        let num_items_in_tx = (avg_transaction_size as f64 * (0.5 + random_factor)).round() as usize;
        let num_items_in_tx = num_items_in_tx.min(num_items);

        for _ in 0..num_items_in_tx {
            let density_check: f64 = rng.gen();
            if density_check < density {
                let item = rng.gen_range(0..num_items);
                data[tx_idx * num_items + item] = 1;
            }
        }
    }

    Array2::from_shape_vec((num_transactions, num_items), data).unwrap()
}

/// Token transactions with repeated items, as read from a text dataset
fn generate_records(num_transactions: usize, num_items: usize, max_len: usize) -> Vec<Vec<u32>> {
    let mut rng = rand::thread_rng();
    (0..num_transactions)
        .map(|_| {
            let len = rng.gen_range(1..=max_len);
            (0..len).map(|_| rng.gen_range(0..num_items as u32)).collect()
        })
        .collect()
}

fn bench_build_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_scaling");

    let configs = vec![
        ("small_100tx", 100, 20, 5),
        ("medium_500tx", 500, 50, 10),
        ("large_1000tx", 1000, 100, 15),
        ("xlarge_5000tx", 5000, 100, 20),
    ];

    for (name, num_tx, num_items, avg_size) in configs {
        let transactions = generate_transactions(num_tx, num_items, avg_size, 0.7);

        group.bench_with_input(BenchmarkId::from_parameter(name), &transactions, |b, tx| {
            b.iter(|| build_from_matrix(black_box(tx.view()), black_box(10)));
        });
    }

    group.finish();
}

fn bench_build_min_support(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_min_support");

    let transactions = generate_transactions(1000, 50, 10, 0.7);

    for &min_sup in &[1usize, 50, 100, 200, 400] {
        group.bench_with_input(BenchmarkId::from_parameter(min_sup), &min_sup, |b, &sup| {
            b.iter(|| build_from_matrix(black_box(transactions.view()), black_box(sup)));
        });
    }

    group.finish();
}

fn bench_count_semantics(c: &mut Criterion) {
    let mut group = c.benchmark_group("count_semantics");

    let records = generate_records(20_000, 40, 12);
    let alphabet = Alphabet::closed(0..40u32);

    for (name, semantics) in [("multiset", CountSemantics::Multiset), ("set", CountSemantics::Set)] {
        let config = BuildConfig::new(alphabet.clone())
            .with_min_support(100)
            .with_semantics(semantics);

        group.bench_with_input(BenchmarkId::from_parameter(name), &config, |b, config| {
            b.iter(|| build_fp_tree(black_box(&records), config));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_build_scaling,
    bench_build_min_support,
    bench_count_semantics
);
criterion_main!(benches);
