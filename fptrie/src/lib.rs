//! FP-tree construction: a frequency-counting first pass that ranks items,
//! and a second pass that merges every transaction, in rank order, into a
//! prefix-sharing trie with per-item header chains.
//!
//! ```
//! use fptrie::fp::{build_fp_tree, BuildConfig};
//!
//! let transactions: Vec<Vec<String>> = ["1 2 3", "2 3", "1 2"]
//!     .iter()
//!     .map(|line| line.split_whitespace().map(String::from).collect())
//!     .collect();
//!
//! let built = build_fp_tree(&transactions, &BuildConfig::default()).unwrap();
//! let order: Vec<&String> = built.f_list.items().collect();
//! assert_eq!(order, ["2", "1", "3"]);
//! assert_eq!(built.trie.chain(&"3".to_string()).count(), 2);
//! ```

pub mod error;
pub mod fp;

#[cfg(feature = "python")]
mod python;

pub use error::{ExportError, FpError, Result};
