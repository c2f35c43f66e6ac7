//! Welch's two-sample t-test over GenAge IDs grouped by category.
//!
//! The comparison uses substring predicates against the raw `why` field,
//! so the two samples are not mutually exclusive and are not restricted to
//! token boundaries. That mirrors the reference dataset design and is kept
//! as specified behavior.
use statrs::distribution::{ContinuousCDF, StudentsT};

use crate::config::ComparisonConfig;
use crate::data_handling::GeneTable;
use crate::error::{SampleGroup, StatsError};

/// Result of a Welch unequal-variance two-sample t-test.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WelchTTest {
    pub statistic: f64,
    /// Welch-Satterthwaite degrees of freedom (fractional).
    pub df: f64,
    /// Two-sided p-value from the Student-t survival function.
    pub p_value: f64,
    pub mean_a: f64,
    pub mean_b: f64,
    pub n_a: usize,
    pub n_b: usize,
}

/// GenAge IDs of records whose raw `why` field contains `needle`.
///
/// Records with a missing (unparseable) GenAge ID are skipped.
pub fn extract_sample(table: &GeneTable, needle: &str) -> Vec<f64> {
    table
        .records()
        .iter()
        .filter(|r| r.why.contains(needle))
        .filter_map(|r| r.genage_id.map(f64::from))
        .collect()
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample variance with n-1 denominator.
fn variance(values: &[f64], mean: f64) -> f64 {
    values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (values.len() as f64 - 1.0)
}

/// Welch's t-test for two independent samples with unequal variances.
///
/// Computes `t = (mean_a - mean_b) / sqrt(var_a/n_a + var_b/n_b)`, the
/// Welch-Satterthwaite degrees of freedom, and the two-sided p-value.
/// No multiple-comparison correction is applied.
///
/// Fails with [`StatsError::InsufficientSample`] when either sample has
/// fewer than two observations, and with [`StatsError::DegenerateVariance`]
/// when both samples have zero variance.
pub fn welch_t_test(a: &[f64], b: &[f64]) -> Result<WelchTTest, StatsError> {
    if a.len() < 2 {
        return Err(StatsError::InsufficientSample {
            group: SampleGroup::A,
            len: a.len(),
        });
    }
    if b.len() < 2 {
        return Err(StatsError::InsufficientSample {
            group: SampleGroup::B,
            len: b.len(),
        });
    }

    let (n_a, n_b) = (a.len() as f64, b.len() as f64);
    let (mean_a, mean_b) = (mean(a), mean(b));
    let (var_a, var_b) = (variance(a, mean_a), variance(b, mean_b));

    let se_a = var_a / n_a;
    let se_b = var_b / n_b;
    let pooled = se_a + se_b;
    if pooled <= 0.0 {
        return Err(StatsError::DegenerateVariance);
    }

    let statistic = (mean_a - mean_b) / pooled.sqrt();
    let df = pooled.powi(2)
        / (se_a.powi(2) / (n_a - 1.0) + se_b.powi(2) / (n_b - 1.0));
    if !df.is_finite() || df <= 0.0 {
        return Err(StatsError::DegenerateVariance);
    }

    let t_dist =
        StudentsT::new(0.0, 1.0, df).map_err(|_| StatsError::DegenerateVariance)?;
    let p_value = 2.0 * (1.0 - t_dist.cdf(statistic.abs()));

    Ok(WelchTTest {
        statistic,
        df,
        p_value,
        mean_a,
        mean_b,
        n_a: a.len(),
        n_b: b.len(),
    })
}

/// Extract both samples per the configured predicates and run the test.
pub fn run_group_comparison(
    table: &GeneTable,
    config: &ComparisonConfig,
) -> Result<WelchTTest, StatsError> {
    let a = extract_sample(table, &config.group_a);
    let b = extract_sample(table, &config.group_b);
    log::debug!(
        "Comparing GenAge IDs: '{}' (n={}) vs '{}' (n={})",
        config.group_a,
        a.len(),
        config.group_b,
        b.len()
    );
    welch_t_test(&a, &b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_handling::GeneRecord;

    #[test]
    fn test_welch_symmetric_case() {
        let a = [10.0, 12.0, 14.0];
        let b = [20.0, 22.0, 24.0];
        let result = welch_t_test(&a, &b).unwrap();

        assert!((result.mean_a - 12.0).abs() < 1e-12);
        assert!((result.mean_b - 22.0).abs() < 1e-12);
        assert!(result.statistic < 0.0);
        // equal variances and equal sizes collapse Welch-Satterthwaite
        // to n_a + n_b - 2
        assert!((result.df - 4.0).abs() < 1e-9);
        assert!(result.p_value > 0.0 && result.p_value < 0.01);
    }

    #[test]
    fn test_welch_known_statistic() {
        let a = [10.0, 12.0, 14.0];
        let b = [20.0, 22.0, 24.0];
        let result = welch_t_test(&a, &b).unwrap();
        // t = -10 / sqrt(4/3 + 4/3)
        let expected = -10.0 / (8.0f64 / 3.0).sqrt();
        assert!((result.statistic - expected).abs() < 1e-12);
    }

    #[test]
    fn test_insufficient_sample() {
        let long = [1.0, 2.0, 3.0];
        match welch_t_test(&[1.0], &long) {
            Err(StatsError::InsufficientSample { group, len }) => {
                assert_eq!(group, SampleGroup::A);
                assert_eq!(len, 1);
            }
            other => panic!("expected InsufficientSample, got {:?}", other),
        }
        match welch_t_test(&long, &[]) {
            Err(StatsError::InsufficientSample { group, len }) => {
                assert_eq!(group, SampleGroup::B);
                assert_eq!(len, 0);
            }
            other => panic!("expected InsufficientSample, got {:?}", other),
        }
    }

    #[test]
    fn test_degenerate_variance() {
        let a = [5.0, 5.0, 5.0];
        let b = [7.0, 7.0];
        assert!(matches!(
            welch_t_test(&a, &b),
            Err(StatsError::DegenerateVariance)
        ));
    }

    #[test]
    fn test_extract_sample_substring_and_missing_ids() {
        let table = GeneTable::new(vec![
            GeneRecord {
                symbol: "A".into(),
                name: "a".into(),
                genage_id: Some(1),
                why: "mammal".into(),
            },
            GeneRecord {
                symbol: "B".into(),
                name: "b".into(),
                genage_id: Some(2),
                why: "mammal,cell".into(),
            },
            GeneRecord {
                symbol: "C".into(),
                name: "c".into(),
                genage_id: None,
                why: "mammal".into(),
            },
            GeneRecord {
                symbol: "D".into(),
                name: "d".into(),
                genage_id: Some(4),
                why: "model".into(),
            },
        ]);

        // predicates overlap: row B belongs to both samples
        assert_eq!(extract_sample(&table, "mammal"), vec![1.0, 2.0]);
        assert_eq!(extract_sample(&table, "cell"), vec![2.0]);
    }
}
