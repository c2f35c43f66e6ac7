//! Category co-occurrence matrix over multi-valued records.
//!
//! The matrix counts how often category pairs appear together in the same
//! record's token set, accumulated across a chosen record subset. Which
//! records feed the matrix is controlled by an explicit [`SubsetRule`]
//! because first-N selection depends on input row order.
use ndarray::Array2;

use crate::config::SubsetRule;
use crate::data_handling::{GeneRecord, GeneTable};

/// Symmetric co-occurrence counts with row/column labels.
#[derive(Debug, Clone, PartialEq)]
pub struct CooccurrenceMatrix {
    /// Vocabulary tokens in first-appearance order: records in input
    /// order, tokens within a record in left-to-right split order.
    pub labels: Vec<String>,
    /// counts[(i, j)] is the number of records in which labels i and j
    /// occurred together. Symmetric, zero diagonal.
    pub counts: Array2<u64>,
}

impl CooccurrenceMatrix {
    pub fn dim(&self) -> usize {
        self.labels.len()
    }

    /// Count for a pair of labels, if both are in the vocabulary.
    pub fn pair_count(&self, a: &str, b: &str) -> Option<u64> {
        let i = self.labels.iter().position(|l| l == a)?;
        let j = self.labels.iter().position(|l| l == b)?;
        Some(self.counts[(i, j)])
    }
}

/// Build the co-occurrence matrix for the subset selected by `rule`.
///
/// The vocabulary is the union of tokens across the subset; discovery
/// order is fixed (first appearance) so that identical input yields a
/// bit-identical matrix. For every record, every ordered pair of distinct
/// tokens increments one cell, so a record with k tokens contributes
/// exactly `k*(k-1)` increments and the matrix is symmetric by
/// construction. An empty subset yields a 0x0 matrix.
pub fn build_cooccurrence(table: &GeneTable, rule: &SubsetRule) -> CooccurrenceMatrix {
    let subset: Vec<&GeneRecord> = match rule {
        SubsetRule::FirstMultiValued { limit } => {
            table.multi_category_records().take(*limit).collect()
        }
        SubsetRule::AllMultiValued => table.multi_category_records().collect(),
    };

    let mut labels: Vec<String> = Vec::new();
    let token_sets: Vec<Vec<String>> = subset.iter().map(|r| r.categories()).collect();
    for tokens in &token_sets {
        for token in tokens {
            if !labels.contains(token) {
                labels.push(token.clone());
            }
        }
    }

    let n = labels.len();
    let mut counts = Array2::<u64>::zeros((n, n));
    for tokens in &token_sets {
        let indices: Vec<usize> = tokens
            .iter()
            .map(|t| labels.iter().position(|l| l == t).unwrap())
            .collect();
        for &i in &indices {
            for &j in &indices {
                if i != j {
                    counts[(i, j)] += 1;
                }
            }
        }
    }

    log::debug!(
        "Built {}x{} co-occurrence matrix from {} records",
        n,
        n,
        subset.len()
    );

    CooccurrenceMatrix { labels, counts }
}
