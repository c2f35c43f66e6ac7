use chrono::Utc;
use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::stats::WelchTTest;
use crate::summary::MostConnected;

/// Headline numbers shown at the top of the report.
#[derive(Debug, Clone)]
pub struct ReportSummary {
    pub total_genes: usize,
    pub unique_symbols: usize,
    pub multi_category_count: usize,
    pub multi_category_fraction: f64,
    pub distinct_categories: usize,
    pub most_connected: Option<MostConnected>,
}

/// Render the full analysis report as a self-contained HTML page.
///
/// `frequency_plot_html` and `heatmap_html` are inline plotly fragments
/// (see [`plotly::Plot::to_inline_html`]); pass `None` to omit a figure.
/// Styling beyond a bare readable page is intentionally not provided here.
pub fn render_report(
    summary: &ReportSummary,
    comparison: Option<&WelchTTest>,
    frequency_plot_html: Option<&str>,
    heatmap_html: Option<&str>,
) -> Markup {
    let generated = Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string();

    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                title { "GenAge dataset analysis" }
                script src="https://cdn.plot.ly/plotly-2.12.1.min.js" {}
            }
            body {
                h1 { "GenAge dataset analysis" }
                p { "Generated " (generated) }

                h2 { "Dataset summary" }
                ul {
                    li { "Total gene records: " (summary.total_genes) }
                    li { "Unique symbols: " (summary.unique_symbols) }
                    li {
                        "Multi-category records: " (summary.multi_category_count)
                        " (" (format!("{:.1}%", summary.multi_category_fraction * 100.0)) ")"
                    }
                    li { "Distinct category tokens: " (summary.distinct_categories) }
                    @if let Some(top) = &summary.most_connected {
                        li {
                            "Most connected gene: " (top.symbol)
                            " (" (top.degree) " categories)"
                        }
                    } @else {
                        li { "Most connected gene: none (no multi-category records)" }
                    }
                }

                @if let Some(plot) = frequency_plot_html {
                    h2 { "Reason frequency" }
                    (PreEscaped(plot.to_string()))
                }

                @if let Some(plot) = heatmap_html {
                    h2 { "Category co-occurrence" }
                    (PreEscaped(plot.to_string()))
                }

                @if let Some(test) = comparison {
                    h2 { "Group comparison (Welch's t-test)" }
                    ul {
                        li { "Mean GenAge ID, group A: " (format!("{:.2}", test.mean_a)) " (n=" (test.n_a) ")" }
                        li { "Mean GenAge ID, group B: " (format!("{:.2}", test.mean_b)) " (n=" (test.n_b) ")" }
                        li { "t-statistic: " (format!("{:.4}", test.statistic)) }
                        li { "Degrees of freedom: " (format!("{:.2}", test.df)) }
                        li { "Two-sided p-value: " (format!("{:.4}", test.p_value)) }
                    }
                }
            }
        }
    }
}
