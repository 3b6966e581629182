//! Transaction sources: whitespace separated text and one-hot matrices.

use super::config::Alphabet;
use super::Item;
use crate::error::{FpError, Result};
use ndarray::ArrayView2;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

/// Reads one transaction per line.
///
/// With a closed alphabet, tokens that do not parse or are not in the
/// alphabet are dropped. With an open alphabet every token must parse as `I`.
pub fn parse_transactions<I, R>(reader: R, alphabet: &Alphabet<I>) -> Result<Vec<Vec<I>>>
where
    I: Item + FromStr,
    R: BufRead,
{
    let mut transactions = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let mut transaction = Vec::new();

        for token in line.split_whitespace() {
            match (token.parse::<I>(), alphabet) {
                (Ok(item), Alphabet::Open) => transaction.push(item),
                (Ok(item), Alphabet::Closed(items)) if items.contains(&item) => {
                    transaction.push(item)
                }
                (Ok(_), Alphabet::Closed(_)) | (Err(_), Alphabet::Closed(_)) => {}
                (Err(_), Alphabet::Open) => {
                    return Err(FpError::InvalidInput {
                        line: idx + 1,
                        token: token.to_string(),
                    })
                }
            }
        }

        transactions.push(transaction);
    }

    Ok(transactions)
}

pub fn read_transactions<I>(path: impl AsRef<Path>, alphabet: &Alphabet<I>) -> Result<Vec<Vec<I>>>
where
    I: Item + FromStr,
{
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| FpError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let transactions = parse_transactions(BufReader::new(file), alphabet)?;
    debug!(path = %path.display(), transactions = transactions.len(), "dataset loaded");
    Ok(transactions)
}

/// Convert binary transaction matrix to list of item sets. Column index is
/// the item.
pub fn matrix_to_transactions(transactions: ArrayView2<i32>) -> Vec<Vec<usize>> {
    let num_transactions = transactions.shape()[0];
    let num_items = transactions.shape()[1];

    (0..num_transactions)
        .map(|i| {
            (0..num_items)
                .filter(|&j| transactions[[i, j]] != 0)
                .collect()
        })
        .collect()
}
