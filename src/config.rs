use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Central configuration for a report-generation run.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct AnalysisConfig {
    pub cooccurrence: CooccurrenceConfig,
    pub comparison: ComparisonConfig,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            cooccurrence: CooccurrenceConfig::default(),
            comparison: ComparisonConfig::default(),
        }
    }
}

/// How to select the record subset the co-occurrence matrix is built from.
///
/// The selection rule is an explicit parameter rather than an implicit
/// first-N default so that the dependency on input row order is visible at
/// the call site.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SubsetRule {
    /// The first `limit` records whose raw `why` field is multi-valued,
    /// scanned in input order.
    FirstMultiValued { limit: usize },
    /// Every multi-valued record, in input order.
    AllMultiValued,
}

impl FromStr for SubsetRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(SubsetRule::AllMultiValued),
            other => match other.strip_prefix("first:").map(str::parse::<usize>) {
                Some(Ok(limit)) => Ok(SubsetRule::FirstMultiValued { limit }),
                _ => Err(format!(
                    "Unknown subset rule: {}. Expected `all` or `first:<n>`",
                    s
                )),
            },
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct CooccurrenceConfig {
    pub subset: SubsetRule,
}

impl Default for CooccurrenceConfig {
    fn default() -> Self {
        Self {
            subset: SubsetRule::FirstMultiValued { limit: 15 },
        }
    }
}

/// Substring predicates for the two-sample GenAge ID comparison.
///
/// Predicates match against the raw `why` field, are not restricted to
/// token boundaries, and are not mutually exclusive: a record containing
/// both substrings contributes to both samples. This mirrors the reference
/// dataset design and is preserved, not corrected.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ComparisonConfig {
    pub group_a: String,
    pub group_b: String,
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            group_a: "mammal".to_string(),
            group_b: "cell".to_string(),
        }
    }
}
