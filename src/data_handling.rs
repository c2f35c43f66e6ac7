//! Data structures for the parsed GenAge dataset.
//!
//! This module defines `GeneRecord` and `GeneTable`. The table is loaded
//! once, is never mutated, and is borrowed by every analysis component —
//! there is deliberately no global dataset state.
use std::collections::HashSet;

use crate::categories::tokenize;

/// One row of the GenAge dataset.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct GeneRecord {
    /// Gene symbol. Not guaranteed unique across rows.
    pub symbol: String,
    /// Free-text gene name.
    pub name: String,
    /// Parsed GenAge identifier; `None` when the source field failed to
    /// parse. Missing values are excluded from numeric aggregations.
    pub genage_id: Option<u32>,
    /// Raw senescence category field: zero or more comma-separated tokens.
    /// Never null in well-formed input, but may be empty.
    pub why: String,
}

impl GeneRecord {
    /// Category tokens of this record, trimmed and deduplicated.
    pub fn categories(&self) -> Vec<String> {
        tokenize(&self.why)
    }

    /// Whether the raw `why` field holds more than one segment.
    ///
    /// This is a substring test on the literal field, not a check on the
    /// tokenized set size: a trailing comma with no second token still
    /// counts as multi-valued.
    pub fn is_multi_category(&self) -> bool {
        self.why.contains(',')
    }
}

/// Immutable, ordered collection of parsed gene records.
#[derive(Debug, Clone)]
pub struct GeneTable {
    records: Vec<GeneRecord>,
}

impl GeneTable {
    pub fn new(records: Vec<GeneRecord>) -> Self {
        GeneTable { records }
    }

    pub fn records(&self) -> &[GeneRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records whose raw `why` field is multi-valued, in input order.
    pub fn multi_category_records(&self) -> impl Iterator<Item = &GeneRecord> {
        self.records.iter().filter(|r| r.is_multi_category())
    }

    /// Number of distinct gene symbols in the table.
    pub fn unique_symbols(&self) -> usize {
        self.records
            .iter()
            .map(|r| r.symbol.as_str())
            .collect::<HashSet<_>>()
            .len()
    }

    pub fn log_input_data_summary(&self) {
        println!("----- Input Data Summary -----");
        println!(
            "Info: {} gene records, {} unique symbols",
            self.len(),
            self.unique_symbols()
        );
        println!(
            "Info: {} records with multi-valued categories",
            self.multi_category_records().count()
        );
        println!("-------------------------------");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(symbol: &str, why: &str) -> GeneRecord {
        GeneRecord {
            symbol: symbol.to_string(),
            name: format!("{} protein", symbol),
            genage_id: Some(1),
            why: why.to_string(),
        }
    }

    #[test]
    fn test_multi_category_is_a_substring_test() {
        assert!(record("A", "mammal,cell").is_multi_category());
        // trailing comma with no second token still counts
        assert!(record("B", "mammal,").is_multi_category());
        assert!(!record("C", "mammal").is_multi_category());
        assert!(!record("D", "").is_multi_category());
    }

    #[test]
    fn test_unique_symbols_counts_distinct() {
        let table = GeneTable::new(vec![
            record("TP53", "cell"),
            record("TP53", "mammal"),
            record("SIRT1", "model"),
        ]);
        assert_eq!(table.len(), 3);
        assert_eq!(table.unique_symbols(), 2);
        assert!(table.unique_symbols() <= table.len());
    }
}
