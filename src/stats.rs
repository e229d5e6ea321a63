use std::{fmt, time::Duration};

use indexmap::IndexMap;

use crate::{report::Value, sample::Sample};

/// Descriptive statistics of a [`Sample`]. Every statistic is `None` when the sample is
/// empty.
#[derive(Debug, Clone, PartialEq)]
pub struct StatisticsResult {
    pub mean: Option<f64>,
    pub median: Option<f64>,
    pub mode: Option<f64>,
    pub variance: Option<f64>,
    pub standard_deviation: Option<f64>,
    pub elapsed: Duration,
}

impl StatisticsResult {
    pub fn compute(sample: &Sample) -> StatisticsResult {
        let data = sample.values();
        if data.is_empty() {
            return StatisticsResult::empty();
        }

        let mean = data.iter().sum::<f64>() / data.len() as f64;
        let variance = data
            .iter()
            .map(|value| (value - mean).powi(2))
            .sum::<f64>()
            / data.len() as f64;

        StatisticsResult {
            mean: Some(mean),
            median: Some(median(data)),
            mode: Some(mode(data)),
            variance: Some(variance),
            standard_deviation: Some(variance.sqrt()),
            elapsed: Duration::ZERO,
        }
    }

    pub fn empty() -> StatisticsResult {
        StatisticsResult {
            mean: None,
            median: None,
            mode: None,
            variance: None,
            standard_deviation: None,
            elapsed: Duration::ZERO,
        }
    }

    pub fn with_elapsed(self, elapsed: Duration) -> StatisticsResult {
        StatisticsResult { elapsed, ..self }
    }

    pub fn is_empty(&self) -> bool {
        self.mean.is_none()
    }
}

fn median(data: &[f64]) -> f64 {
    let mut sorted = data.to_vec();
    sorted.sort_by(f64::total_cmp);
    let n = sorted.len();
    if n % 2 == 0 {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.
    } else {
        sorted[n / 2]
    }
}

/// Most frequent value. Ties go to the value that appeared first in the sample.
fn mode(data: &[f64]) -> f64 {
    // keyed on bits, with -0.0 folded into 0.0 so equal values share an entry
    let mut frequency: IndexMap<u64, (f64, usize)> = IndexMap::new();
    for &value in data {
        let key = if value == 0. { 0f64.to_bits() } else { value.to_bits() };
        frequency.entry(key).or_insert((value, 0)).1 += 1;
    }

    let max = frequency
        .values()
        .map(|(_, count)| *count)
        .max()
        .expect("data length is nonzero");
    frequency
        .values()
        .find(|(_, count)| *count == max)
        .map(|(value, _)| *value)
        .expect("maximum count belongs to an entry")
}

impl fmt::Display for StatisticsResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Descriptive Statistics:")?;
        writeln!(f, "Mean: {}", Value(self.mean))?;
        writeln!(f, "Median: {}", Value(self.median))?;
        writeln!(f, "Mode: {}", Value(self.mode))?;
        writeln!(f, "Standard Deviation: {}", Value(self.standard_deviation))?;
        writeln!(f, "Variance: {}", Value(self.variance))?;
        writeln!(f, "Time Elapsed: {:?} seconds", self.elapsed.as_secs_f64())
    }
}
