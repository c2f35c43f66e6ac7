//! genage-analysis: exploratory analysis of the GenAge aging-gene dataset.
//!
//! This crate loads the GenAge table of genes associated with human aging,
//! computes descriptive statistics over its free-text senescence categories,
//! builds a category co-occurrence matrix, and runs a Welch two-sample
//! t-test comparing GenAge IDs between category groups. A small report
//! module renders the computed values as plotly figures embedded in an
//! HTML page.
//!
//! The design favors small, testable modules: every component borrows the
//! same immutable [`data_handling::GeneTable`] and returns plain
//! serializable values for the report layer to format.
pub mod categories;
pub mod config;
pub mod cooccurrence;
pub mod data_handling;
pub mod error;
pub mod io;
pub mod report;
pub mod stats;
pub mod summary;
