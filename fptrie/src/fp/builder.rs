use super::config::{Alphabet, BuildConfig, CountSemantics};
use super::counter::{FList, FrequencyTable, ItemFrequencyCounter};
use super::dataset::{matrix_to_transactions, read_transactions};
use super::tree::FpTrie;
use super::Item;
use crate::error::Result;
use ndarray::ArrayView2;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info};

/// A finished build: the trie plus the first-pass results it was built from.
#[derive(Debug, Clone)]
pub struct BuiltTree<I: Item> {
    pub trie: FpTrie<I>,
    pub frequencies: FrequencyTable<I>,
    pub f_list: FList<I>,
    pub stats: BuildStats,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStats {
    pub transactions: usize,
    pub inserted: usize,
    /// Transactions without any F-list item.
    pub skipped: usize,
}

/// First scan: item frequencies filtered by `config.min_support`.
pub fn count_item_freq<I, T>(transactions: &[T], config: &BuildConfig<I>) -> FList<I>
where
    I: Item,
    T: AsRef<[I]> + Sync,
{
    ItemFrequencyCounter::new(config.alphabet.clone(), config.semantics)
        .count(transactions, config.min_support)
}

/// Runs both passes over a materialised dataset.
pub fn build_fp_tree<I, T>(transactions: &[T], config: &BuildConfig<I>) -> Result<BuiltTree<I>>
where
    I: Item,
    T: AsRef<[I]> + Sync,
{
    let counter = ItemFrequencyCounter::new(config.alphabet.clone(), config.semantics);
    let frequencies = counter.count_table(transactions);
    let f_list = frequencies.f_list(config.min_support);

    info!(
        transactions = frequencies.num_transactions(),
        items = frequencies.len(),
        frequent = f_list.len(),
        min_support = config.min_support,
        "first pass complete"
    );

    let mut trie = FpTrie::with_items(f_list.items());
    let mut stats = BuildStats {
        transactions: transactions.len(),
        ..BuildStats::default()
    };

    for transaction in transactions {
        let ordered = f_list.order(transaction.as_ref(), config.semantics);
        if ordered.is_empty() {
            stats.skipped += 1;
            continue;
        }

        trie.insert(&ordered)?;
        stats.inserted += 1;
    }

    info!(
        nodes = trie.len(),
        inserted = stats.inserted,
        skipped = stats.skipped,
        "second pass complete"
    );

    Ok(BuiltTree {
        trie,
        frequencies,
        f_list,
        stats,
    })
}

/// Reads a transaction file and builds its trie.
pub fn build_from_path<I>(path: impl AsRef<Path>, config: &BuildConfig<I>) -> Result<BuiltTree<I>>
where
    I: Item + FromStr,
{
    let transactions = read_transactions(path, &config.alphabet)?;
    build_fp_tree(&transactions, config)
}

/// Builds from a one-hot matrix where column `j` is item `j`. Every column is
/// part of the alphabet.
pub fn build_from_matrix(transactions: ArrayView2<i32>, min_support: usize) -> Result<BuiltTree<usize>> {
    let num_items = transactions.shape()[1];
    debug!(shape = ?transactions.shape(), "building from matrix");

    let config = BuildConfig::new(Alphabet::closed(0..num_items))
        .with_min_support(min_support)
        .with_semantics(CountSemantics::Set);
    build_fp_tree(&matrix_to_transactions(transactions), &config)
}
