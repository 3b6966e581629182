pub mod builder;
pub mod config;
pub mod counter;
pub mod dataset;
pub mod export;
pub mod tree;


use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Anything usable as an item identifier.
pub trait Item: Clone + Eq + Hash + Debug + Display + Send + Sync {}

impl<T: Clone + Eq + Hash + Debug + Display + Send + Sync> Item for T {}

pub use builder::{build_fp_tree, build_from_matrix, build_from_path, count_item_freq, BuildStats, BuiltTree};
pub use config::{Alphabet, BuildConfig, CountSemantics, DEFAULT_MIN_SUPPORT};
pub use counter::{FList, FrequencyTable, ItemFrequencyCounter};
pub use dataset::{matrix_to_transactions, parse_transactions, read_transactions};
pub use tree::{Chain, ChainLink, FpTrie, HeaderEntry, NodeId, PathKey, TrieNode};
