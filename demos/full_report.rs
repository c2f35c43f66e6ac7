//! End-to-end demo: load a GenAge CSV, run every analysis component, and
//! write a self-contained HTML report.
//!
//! Usage: `cargo run --example full_report -- <genage.csv> [report.html]`
use std::fs::File;
use std::io::Write;

use anyhow::{Context, Result};

use genage_analysis::config::AnalysisConfig;
use genage_analysis::cooccurrence::build_cooccurrence;
use genage_analysis::io::genage_csv::read_genage_csv;
use genage_analysis::report::html::{render_report, ReportSummary};
use genage_analysis::report::plots::{plot_category_frequency, plot_cooccurrence_heatmap};
use genage_analysis::stats::run_group_comparison;
use genage_analysis::summary;

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let input = args
        .next()
        .context("Usage: full_report <genage.csv> [report.html]")?;
    let output = args.next().unwrap_or_else(|| "genage_report.html".to_string());

    let config = AnalysisConfig::default();
    let table = read_genage_csv(&input)?;
    table.log_input_data_summary();

    let report_summary = ReportSummary {
        total_genes: summary::total_genes(&table),
        unique_symbols: summary::unique_symbols(&table),
        multi_category_count: summary::multi_category_count(&table),
        multi_category_fraction: summary::multi_category_fraction(&table),
        distinct_categories: summary::distinct_categories(&table),
        most_connected: summary::most_connected_gene(&table),
    };

    let ranked = summary::category_frequency(&table);
    let frequency_plot = plot_category_frequency(&ranked, "Reasons for inclusion in GenAge")
        .ok()
        .map(|plot| plot.to_inline_html(Some("category-frequency")));

    let matrix = build_cooccurrence(&table, &config.cooccurrence.subset);
    let heatmap = plot_cooccurrence_heatmap(&matrix, "Category co-occurrence")
        .ok()
        .map(|plot| plot.to_inline_html(Some("cooccurrence-heatmap")));

    let comparison = match run_group_comparison(&table, &config.comparison) {
        Ok(result) => Some(result),
        Err(e) => {
            log::warn!("Skipping group comparison: {}", e);
            None
        }
    };

    let page = render_report(
        &report_summary,
        comparison.as_ref(),
        frequency_plot.as_deref(),
        heatmap.as_deref(),
    );

    let mut file = File::create(&output)
        .with_context(|| format!("Failed to create report file: {}", output))?;
    file.write_all(page.into_string().as_bytes())?;
    println!("Report written to {}", output);

    Ok(())
}
