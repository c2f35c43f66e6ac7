use std::error::Error;
use std::fmt;

/// Which sample of a two-group comparison an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleGroup {
    A,
    B,
}

impl fmt::Display for SampleGroup {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SampleGroup::A => write!(f, "A"),
            SampleGroup::B => write!(f, "B"),
        }
    }
}

/// Custom error type for statistical computation failures
#[derive(Debug)]
pub enum StatsError {
    /// A sample has fewer than two observations; variance is undefined.
    InsufficientSample { group: SampleGroup, len: usize },
    /// Degrees of freedom came out non-finite or non-positive.
    DegenerateVariance,
}

impl fmt::Display for StatsError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            StatsError::InsufficientSample { group, len } => write!(
                f,
                "Sample {} has {} observation(s); at least 2 are required",
                group, len
            ),
            StatsError::DegenerateVariance => {
                write!(f, "Both samples have zero variance; t-statistic undefined")
            }
        }
    }
}

impl Error for StatsError {}
