use statrs::statistics::Statistics;

use super::{eligible, finite_millis, Measurement, StatisticalMeasure};
use crate::solve::RealTime;

/// Arithmetic mean of the finished solves in the eligible history.
///
/// DNFs are left out of the mean. A history without a single finished
/// solve has a DNF mean.
#[derive(Debug, Clone)]
pub struct Mean {
    minimum_window_size: usize,
    max_history_depth: usize,
}

impl Default for Mean {
    fn default() -> Self {
        Self::new(1, usize::MAX)
    }
}

impl Mean {
    /// Create a mean over at most `max_history_depth` of the most recent solves.
    ///
    /// # Panics
    /// Panics if `minimum_window_size` is zero.
    pub fn new(minimum_window_size: usize, max_history_depth: usize) -> Self {
        assert!(minimum_window_size > 0, "minimum_window_size must be positive");
        Self {
            minimum_window_size,
            max_history_depth,
        }
    }
}

impl StatisticalMeasure for Mean {
    fn name(&self) -> &'static str {
        "mean"
    }

    fn minimum_window_size(&self) -> usize {
        self.minimum_window_size
    }

    fn measure(&self, times: &[RealTime]) -> Measurement {
        let times = eligible(
            self.name(),
            times,
            self.minimum_window_size,
            self.max_history_depth,
        );
        let finished = finite_millis(times);

        if finished.is_empty() {
            return Measurement::aggregate(RealTime::Dnf);
        }

        Measurement::aggregate(RealTime::Finite(finished.iter().mean().round() as i64))
    }
}
