use crate::solve::RealTime;

/// The value a measure produced over a sequence of real times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Measurement {
    /// The measured value, `Dnf` when nothing finite could be measured.
    pub value: RealTime,
    /// Offset of the winning window from the most recent solve.
    /// Only windowed measures report a position.
    pub window_position: Option<usize>,
}

impl Measurement {
    /// Result of a measure that aggregates the whole eligible range.
    pub fn aggregate(value: RealTime) -> Self {
        Self {
            value,
            window_position: None,
        }
    }

    /// Result of a measure that picked one window out of the eligible range.
    pub fn windowed(value: RealTime, position: usize) -> Self {
        Self {
            value,
            window_position: Some(position),
        }
    }
}

/// A statistic computed over a most-recent-first sequence of real times.
pub trait StatisticalMeasure: Send + Sync {
    /// Short human-readable name of the measure.
    fn name(&self) -> &'static str;

    /// Number of solves below which the measure is undefined.
    fn minimum_window_size(&self) -> usize;

    /// Compute the measure over `times`, ordered most recent first.
    ///
    /// # Panics
    /// Panics if `times` is shorter than [`minimum_window_size`](Self::minimum_window_size).
    fn measure(&self, times: &[RealTime]) -> Measurement;
}

/// The most recent `max_history_depth` times, after checking the minimum size.
fn eligible<'a>(
    name: &str,
    times: &'a [RealTime],
    minimum_window_size: usize,
    max_history_depth: usize,
) -> &'a [RealTime] {
    assert!(
        times.len() >= minimum_window_size,
        "{} needs at least {} solves, got {}",
        name,
        minimum_window_size,
        times.len()
    );
    &times[..times.len().min(max_history_depth)]
}

/// Finished times of `times` as floating point milliseconds.
fn finite_millis(times: &[RealTime]) -> Vec<f64> {
    times
        .iter()
        .filter_map(|time| time.millis())
        .map(|ms| ms as f64)
        .collect()
}

mod average;
mod best_worst;
mod deviation;
mod extremes;
mod mean;

pub use average::{trimmed_mean, BestAverage};
pub use best_worst::{Best, Worst};
pub use deviation::StandardDeviation;
pub use extremes::{find_extremes, WindowExtremes};
pub use mean::Mean;
