//! First pass: item frequencies and the F-list.

use super::config::{Alphabet, CountSemantics};
use super::Item;
use rayon::prelude::*;
use std::collections::{HashMap, HashSet};

/// Transactions per counting chunk. Chunks are counted in parallel and
/// merged left to right, so the result matches a sequential scan.
const COUNT_CHUNK: usize = 4096;

/// Per-item occurrence counts, in item enumeration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable<I: Item> {
    entries: Vec<(I, usize)>,
    index: HashMap<I, usize>,
    open: bool,
    num_transactions: usize,
}

impl<I: Item> FrequencyTable<I> {
    fn seeded(alphabet: &Alphabet<I>) -> Self {
        match alphabet {
            Alphabet::Closed(items) => Self {
                entries: items.iter().map(|item| (item.clone(), 0)).collect(),
                index: items
                    .iter()
                    .enumerate()
                    .map(|(idx, item)| (item.clone(), idx))
                    .collect(),
                open: false,
                num_transactions: 0,
            },
            Alphabet::Open => Self {
                entries: Vec::new(),
                index: HashMap::new(),
                open: true,
                num_transactions: 0,
            },
        }
    }

    fn add(&mut self, item: &I, amount: usize) {
        if let Some(&idx) = self.index.get(item) {
            self.entries[idx].1 += amount;
        } else if self.open {
            self.index.insert(item.clone(), self.entries.len());
            self.entries.push((item.clone(), amount));
        }
    }

    fn add_transaction(&mut self, transaction: &[I], semantics: CountSemantics) {
        self.num_transactions += 1;
        match semantics {
            CountSemantics::Multiset => {
                for item in transaction {
                    self.add(item, 1);
                }
            }
            CountSemantics::Set => {
                let mut seen = HashSet::with_capacity(transaction.len());
                for item in transaction {
                    if seen.insert(item) {
                        self.add(item, 1);
                    }
                }
            }
        }
    }

    fn merge(mut self, other: Self) -> Self {
        self.num_transactions += other.num_transactions;
        for (item, count) in other.entries {
            match self.index.get(&item) {
                Some(&idx) => self.entries[idx].1 += count,
                None => {
                    self.index.insert(item.clone(), self.entries.len());
                    self.entries.push((item, count));
                }
            }
        }
        self
    }

    pub fn count(&self, item: &I) -> Option<usize> {
        self.index.get(item).map(|&idx| self.entries[idx].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&I, usize)> {
        self.entries.iter().map(|(item, count)| (item, *count))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn num_transactions(&self) -> usize {
        self.num_transactions
    }

    /// Items with `count >= min_support`, most frequent first. Ties keep
    /// enumeration order.
    pub fn f_list(&self, min_support: usize) -> FList<I> {
        let mut frequent: Vec<(I, usize)> = self
            .entries
            .iter()
            .filter(|&&(_, count)| count >= min_support)
            .cloned()
            .collect();

        // stable: equal counts stay in enumeration order
        frequent.sort_by(|a, b| b.1.cmp(&a.1));
        FList::new(frequent)
    }
}

/// Globally ranked frequent items. Rank 0 is the most frequent item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FList<I: Item> {
    items: Vec<(I, usize)>,
    ranks: HashMap<I, usize>,
}

impl<I: Item> FList<I> {
    fn new(items: Vec<(I, usize)>) -> Self {
        let ranks = items
            .iter()
            .enumerate()
            .map(|(rank, (item, _))| (item.clone(), rank))
            .collect();
        Self { items, ranks }
    }

    pub fn rank(&self, item: &I) -> Option<usize> {
        self.ranks.get(item).copied()
    }

    pub fn contains(&self, item: &I) -> bool {
        self.ranks.contains_key(item)
    }

    pub fn count(&self, item: &I) -> Option<usize> {
        self.rank(item).map(|rank| self.items[rank].1)
    }

    pub fn items(&self) -> impl Iterator<Item = &I> {
        self.items.iter().map(|(item, _)| item)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&I, usize)> {
        self.items.iter().map(|(item, count)| (item, *count))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Filters a raw transaction to F-list items and orders it by rank,
    /// pairing each item with its local count under `semantics`.
    ///
    /// Returns an empty vector when no item of the transaction is frequent.
    pub fn order(&self, transaction: &[I], semantics: CountSemantics) -> Vec<(I, usize)> {
        let mut local: HashMap<usize, usize> = HashMap::new();
        for item in transaction {
            if let Some(rank) = self.rank(item) {
                let count = local.entry(rank).or_insert(0);
                match semantics {
                    CountSemantics::Multiset => *count += 1,
                    CountSemantics::Set => *count = 1,
                }
            }
        }

        let mut ordered: Vec<(usize, usize)> = local.into_iter().collect();
        ordered.sort_unstable_by_key(|&(rank, _)| rank);
        ordered
            .into_iter()
            .map(|(rank, count)| (self.items[rank].0.clone(), count))
            .collect()
    }
}

/// The frequency-counting first pass.
#[derive(Debug, Clone)]
pub struct ItemFrequencyCounter<I> {
    alphabet: Alphabet<I>,
    semantics: CountSemantics,
}

impl<I: Item> ItemFrequencyCounter<I> {
    pub fn new(alphabet: Alphabet<I>, semantics: CountSemantics) -> Self {
        Self { alphabet, semantics }
    }

    pub fn semantics(&self) -> CountSemantics {
        self.semantics
    }

    pub fn count_table<T>(&self, transactions: &[T]) -> FrequencyTable<I>
    where
        T: AsRef<[I]> + Sync,
    {
        let semantics = self.semantics;
        transactions
            .par_chunks(COUNT_CHUNK)
            .map(|chunk| {
                let mut table = FrequencyTable::seeded(&self.alphabet);
                for transaction in chunk {
                    table.add_transaction(transaction.as_ref(), semantics);
                }
                table
            })
            .reduce(|| FrequencyTable::seeded(&self.alphabet), FrequencyTable::merge)
    }

    pub fn count<T>(&self, transactions: &[T], min_support: usize) -> FList<I>
    where
        T: AsRef<[I]> + Sync,
    {
        self.count_table(transactions).f_list(min_support)
    }
}
