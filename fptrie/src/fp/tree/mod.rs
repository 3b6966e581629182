// Tree module - FP-trie data structures and operations

mod tree;
mod tree_ops;

pub use tree::{ChainLink, FpTrie, HeaderEntry, NodeId, PathKey, TrieNode};
pub use tree_ops::Chain;
