//! GenAge CSV reader.
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use csv::StringRecord;

use crate::data_handling::{GeneRecord, GeneTable};

/// Configuration for reading GenAge CSV files.
#[derive(Debug, Clone)]
pub struct GenageReaderConfig {
    /// Column name holding the gene symbol.
    pub symbol_column: String,
    /// Column name holding the gene name.
    pub name_column: String,
    /// Column name holding the numeric GenAge identifier.
    pub id_column: String,
    /// Column name holding the senescence category field.
    pub why_column: String,
    /// Field delimiter.
    pub delimiter: u8,
}

impl Default for GenageReaderConfig {
    fn default() -> Self {
        Self {
            symbol_column: "symbol".to_string(),
            name_column: "name".to_string(),
            id_column: "GenAge.ID".to_string(),
            why_column: "why".to_string(),
            delimiter: b',',
        }
    }
}

/// Read a GenAge CSV file into an immutable gene table.
pub fn read_genage_csv<P: AsRef<Path>>(path: P) -> Result<GeneTable> {
    read_genage_csv_with_config(path, &GenageReaderConfig::default())
}

/// Read a GenAge CSV file using a custom configuration.
///
/// Fails when the file is missing or unreadable, or when a required column
/// is absent from the header. A malformed numeric identifier is not an
/// error: the value becomes `None` and a warning is logged, so the record
/// still participates in every non-numeric computation.
pub fn read_genage_csv_with_config<P: AsRef<Path>>(
    path: P,
    config: &GenageReaderConfig,
) -> Result<GeneTable> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(config.delimiter)
        .has_headers(true)
        .from_path(&path)
        .with_context(|| format!("Failed to open GenAge file: {}", path.as_ref().display()))?;

    let headers = reader
        .headers()
        .context("Failed to read GenAge header row")?
        .clone();

    let symbol_idx = require_column(&headers, &config.symbol_column)?;
    let name_idx = require_column(&headers, &config.name_column)?;
    let id_idx = require_column(&headers, &config.id_column)?;
    let why_idx = require_column(&headers, &config.why_column)?;

    let mut records = Vec::new();
    for (row_idx, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("Failed to read row {}", row_idx + 1))?;

        let symbol = field(&record, symbol_idx, row_idx)?.trim().to_string();
        let name = field(&record, name_idx, row_idx)?.trim().to_string();
        let why = field(&record, why_idx, row_idx)?.trim().to_string();

        let raw_id = field(&record, id_idx, row_idx)?.trim();
        let genage_id = match raw_id.parse::<u32>() {
            Ok(id) => Some(id),
            Err(_) => {
                log::warn!(
                    "Row {}: unparseable {} value '{}'; treating as missing",
                    row_idx + 1,
                    config.id_column,
                    raw_id
                );
                None
            }
        };

        records.push(GeneRecord {
            symbol,
            name,
            genage_id,
            why,
        });
    }

    log::debug!(
        "Loaded {} gene records from {}",
        records.len(),
        path.as_ref().display()
    );
    Ok(GeneTable::new(records))
}

fn require_column(headers: &StringRecord, name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|header| header.eq_ignore_ascii_case(name))
        .ok_or_else(|| anyhow!("Missing required column '{}'", name))
}

fn field<'a>(record: &'a StringRecord, idx: usize, row_idx: usize) -> Result<&'a str> {
    record
        .get(idx)
        .ok_or_else(|| anyhow!("Missing field at row {}", row_idx + 1))
}
