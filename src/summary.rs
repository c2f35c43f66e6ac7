//! Descriptive statistics over the parsed GenAge table.
//!
//! Every operation here borrows the immutable table and returns plain
//! serializable values. Ranking operations use stable ordering so that
//! repeated runs over the same input produce identical output.
use std::collections::HashMap;

use crate::data_handling::GeneTable;

/// Number of records associated with one category value.
///
/// Produced by two rankings with different grouping semantics:
/// [`category_frequency`] counts token-level membership (a record with
/// `"mammal,cell"` contributes to both `"mammal"` and `"cell"`), while
/// [`raw_value_frequency`] groups by the whole raw `why` string, so
/// `"mammal,cell"` is its own group there.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

/// The gene with the largest category set among multi-valued records.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MostConnected {
    pub symbol: String,
    /// Size of the record's tokenized category set.
    pub degree: usize,
}

/// Total number of parsed records.
pub fn total_genes(table: &GeneTable) -> usize {
    table.len()
}

/// Number of distinct gene symbols.
pub fn unique_symbols(table: &GeneTable) -> usize {
    table.unique_symbols()
}

/// Number of records whose raw `why` field is multi-valued.
pub fn multi_category_count(table: &GeneTable) -> usize {
    table.multi_category_records().count()
}

/// Fraction of records with a multi-valued `why` field; 0.0 for an empty
/// table.
pub fn multi_category_fraction(table: &GeneTable) -> f64 {
    if table.is_empty() {
        return 0.0;
    }
    multi_category_count(table) as f64 / table.len() as f64
}

/// Size of the category-token vocabulary over the whole table.
pub fn distinct_categories(table: &GeneTable) -> usize {
    let mut seen: Vec<String> = Vec::new();
    for record in table.records() {
        for token in record.categories() {
            if !seen.contains(&token) {
                seen.push(token);
            }
        }
    }
    seen.len()
}

/// Rank category tokens by how many records contain them, descending.
///
/// A record's tokenized set contributes one count to each of its tokens,
/// so a `"mammal,cell"` record raises both `"mammal"` and `"cell"`. Token
/// discovery follows first appearance in input order; ties keep that order
/// (stable sort), so output is reproducible for identical input.
pub fn category_frequency(table: &GeneTable) -> Vec<CategoryCount> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut order: Vec<String> = Vec::new();

    for record in table.records() {
        for token in record.categories() {
            let entry = counts.entry(token.clone()).or_insert(0);
            if *entry == 0 {
                order.push(token);
            }
            *entry += 1;
        }
    }

    let mut ranked: Vec<CategoryCount> = order
        .into_iter()
        .map(|category| {
            let count = counts[&category];
            CategoryCount { category, count }
        })
        .collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked
}

/// Group records by exact raw `why` value and rank by descending count.
///
/// Unlike [`category_frequency`], the whole raw field is the grouping key:
/// `"mammal,cell"` ranks as its own value, distinct from `"mammal"` and
/// `"cell"`. Ties keep first-encountered order.
pub fn raw_value_frequency(table: &GeneTable) -> Vec<CategoryCount> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();

    for record in table.records() {
        let entry = counts.entry(record.why.as_str()).or_insert(0);
        if *entry == 0 {
            order.push(record.why.as_str());
        }
        *entry += 1;
    }

    let mut ranked: Vec<CategoryCount> = order
        .into_iter()
        .map(|why| CategoryCount {
            category: why.to_string(),
            count: counts[why],
        })
        .collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked
}

/// The multi-valued record with the largest tokenized category set.
///
/// Ties keep the earliest record in input order. Returns `None` when the
/// table holds no multi-valued records; an empty selection is an expected
/// data condition, not a failure.
pub fn most_connected_gene(table: &GeneTable) -> Option<MostConnected> {
    let mut ranked: Vec<MostConnected> = table
        .multi_category_records()
        .map(|record| MostConnected {
            symbol: record.symbol.clone(),
            degree: record.categories().len(),
        })
        .collect();
    ranked.sort_by(|a, b| b.degree.cmp(&a.degree));
    ranked.into_iter().next()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_handling::GeneRecord;

    fn table(rows: &[(&str, &str)]) -> GeneTable {
        GeneTable::new(
            rows.iter()
                .enumerate()
                .map(|(i, (symbol, why))| GeneRecord {
                    symbol: symbol.to_string(),
                    name: format!("gene {}", symbol),
                    genage_id: Some(i as u32 + 1),
                    why: why.to_string(),
                })
                .collect(),
        )
    }

    #[test]
    fn test_end_to_end_counts() {
        let table = table(&[
            ("A", "mammal"),
            ("B", "cell"),
            ("C", "mammal,cell"),
            ("D", "model"),
            ("E", "mammal"),
        ]);
        assert_eq!(total_genes(&table), 5);
        assert_eq!(multi_category_count(&table), 1);
        // "mammal" appears in rows 1, 3 and 5: the multi-valued row
        // contributes to both of its tokens
        let ranked = category_frequency(&table);
        assert_eq!(ranked[0].category, "mammal");
        assert_eq!(ranked[0].count, 3);
        assert_eq!(ranked[1].category, "cell");
        assert_eq!(ranked[1].count, 2);
    }

    #[test]
    fn test_raw_value_frequency_keeps_whole_field() {
        let table = table(&[
            ("A", "mammal"),
            ("B", "cell"),
            ("C", "mammal,cell"),
            ("D", "model"),
            ("E", "mammal"),
        ]);
        // raw grouping treats "mammal,cell" as its own value
        let ranked = raw_value_frequency(&table);
        assert_eq!(ranked[0].category, "mammal");
        assert_eq!(ranked[0].count, 2);
        assert!(ranked
            .iter()
            .any(|c| c.category == "mammal,cell" && c.count == 1));
    }

    #[test]
    fn test_category_frequency_stable_ties() {
        // "cell" and "model" are tied at 3; "cell" appears first in input
        let table = table(&[
            ("A", "cell"),
            ("B", "model"),
            ("C", "cell"),
            ("D", "model"),
            ("E", "cell"),
            ("F", "model"),
            ("G", "mammal"),
        ]);
        let ranked = category_frequency(&table);
        assert_eq!(ranked[0].category, "cell");
        assert_eq!(ranked[0].count, 3);
        assert_eq!(ranked[1].category, "model");
        assert_eq!(ranked[1].count, 3);
        assert_eq!(ranked[2].category, "mammal");
    }

    #[test]
    fn test_most_connected_gene() {
        let table = table(&[
            ("A", "mammal"),
            ("B", "mammal,cell"),
            ("C", "mammal,cell,model"),
            ("D", "cell,model"),
        ]);
        let top = most_connected_gene(&table).unwrap();
        assert_eq!(top.symbol, "C");
        assert_eq!(top.degree, 3);
    }

    #[test]
    fn test_most_connected_gene_tie_keeps_earliest_row() {
        // B and C are tied at degree 2; B comes first in input order
        let table = table(&[
            ("A", "mammal"),
            ("B", "mammal,cell"),
            ("C", "cell,model"),
        ]);
        let top = most_connected_gene(&table).unwrap();
        assert_eq!(top.symbol, "B");
        assert_eq!(top.degree, 2);
    }

    #[test]
    fn test_most_connected_gene_empty_selection() {
        let table = table(&[("A", "mammal"), ("B", "cell")]);
        assert_eq!(most_connected_gene(&table), None);
    }

    #[test]
    fn test_vocabulary_and_fraction() {
        let table = table(&[("A", "mammal"), ("B", "mammal,cell"), ("C", "model")]);
        assert_eq!(distinct_categories(&table), 3);
        let fraction = multi_category_fraction(&table);
        assert!((fraction - 1.0 / 3.0).abs() < 1e-12);
    }
}
