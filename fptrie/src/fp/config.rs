use super::Item;
use std::collections::HashSet;

/// Default minimum support: every item seen at least once is kept.
pub const DEFAULT_MIN_SUPPORT: usize = 1;

/// The set of items the counter recognises.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Alphabet<I> {
    /// Fixed items in enumeration order. Other tokens are ignored.
    Closed(Vec<I>),
    /// Items are discovered from the data, enumerated by first appearance.
    Open,
}

impl<I: Item> Alphabet<I> {
    pub fn closed(items: impl IntoIterator<Item = I>) -> Self {
        let mut seen = HashSet::new();
        Alphabet::Closed(
            items
                .into_iter()
                .filter(|item| seen.insert(item.clone()))
                .collect(),
        )
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Alphabet::Open)
    }
}

impl Alphabet<String> {
    /// Single digit tokens `"0"` to `"9"`.
    pub fn digits() -> Self {
        Alphabet::Closed((0..10).map(|d| d.to_string()).collect())
    }
}

impl Default for Alphabet<String> {
    fn default() -> Self {
        Self::digits()
    }
}

/// How repeated tokens inside one transaction are counted.
///
/// The same rule drives the global frequency and the local count passed to
/// the trie, so node counts always add up to item frequencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CountSemantics {
    /// Every occurrence counts.
    #[default]
    Multiset,
    /// An item counts once per transaction.
    Set,
}

#[derive(Debug, Clone)]
pub struct BuildConfig<I> {
    pub min_support: usize,
    pub alphabet: Alphabet<I>,
    pub semantics: CountSemantics,
}

impl Default for BuildConfig<String> {
    fn default() -> Self {
        Self {
            min_support: DEFAULT_MIN_SUPPORT,
            alphabet: Alphabet::default(),
            semantics: CountSemantics::default(),
        }
    }
}

impl<I: Item> BuildConfig<I> {
    pub fn new(alphabet: Alphabet<I>) -> Self {
        Self {
            min_support: DEFAULT_MIN_SUPPORT,
            alphabet,
            semantics: CountSemantics::default(),
        }
    }

    pub fn with_min_support(mut self, min_support: usize) -> Self {
        self.min_support = min_support;
        self
    }

    pub fn with_semantics(mut self, semantics: CountSemantics) -> Self {
        self.semantics = semantics;
        self
    }
}
