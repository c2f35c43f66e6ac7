use plotly::layout::{Axis, Layout};
use plotly::{Bar, HeatMap, Plot};

use crate::cooccurrence::CooccurrenceMatrix;
use crate::summary::CategoryCount;

/// Plot a bar chart of category frequencies.
///
/// Bars keep the ranking order of the input, so the chart reads
/// most-common-first when given [`crate::summary::category_frequency`]
/// or [`crate::summary::raw_value_frequency`] output.
pub fn plot_category_frequency(ranked: &[CategoryCount], title: &str) -> Result<Plot, String> {
    if ranked.is_empty() {
        return Err("Cannot plot an empty category frequency ranking".to_string());
    }

    let labels: Vec<String> = ranked.iter().map(|c| c.category.clone()).collect();
    let counts: Vec<usize> = ranked.iter().map(|c| c.count).collect();

    let trace = Bar::new(labels, counts).name("Gene count");

    let layout = Layout::new()
        .title(title)
        .x_axis(Axis::new().title("Reason for inclusion"))
        .y_axis(Axis::new().title("Genes"));

    let mut plot = Plot::new();
    plot.add_trace(trace);
    plot.set_layout(layout);

    Ok(plot)
}

/// Plot the category co-occurrence matrix as a heatmap.
pub fn plot_cooccurrence_heatmap(matrix: &CooccurrenceMatrix, title: &str) -> Result<Plot, String> {
    if matrix.dim() == 0 {
        return Err("Cannot plot an empty co-occurrence matrix".to_string());
    }

    let z: Vec<Vec<u64>> = matrix
        .counts
        .rows()
        .into_iter()
        .map(|row| row.to_vec())
        .collect();

    let trace = HeatMap::new(matrix.labels.clone(), matrix.labels.clone(), z);

    let layout = Layout::new()
        .title(title)
        .x_axis(Axis::new().title("Category"))
        .y_axis(Axis::new().title("Category"));

    let mut plot = Plot::new();
    plot.add_trace(trace);
    plot.set_layout(layout);

    Ok(plot)
}
