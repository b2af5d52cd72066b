use statrs::statistics::Statistics;

use super::{eligible, finite_millis, Measurement, StatisticalMeasure};
use crate::solve::RealTime;

/// Sample standard deviation of the finished solves in the eligible history.
///
/// Uses Bessel's correction (n-1 denominator). A single finished solve has a
/// deviation of zero; a history with none has a DNF deviation.
#[derive(Debug, Clone)]
pub struct StandardDeviation {
    minimum_window_size: usize,
    max_history_depth: usize,
}

impl Default for StandardDeviation {
    fn default() -> Self {
        Self::new(1, usize::MAX)
    }
}

impl StandardDeviation {
    /// Create a standard deviation over at most `max_history_depth` of the most recent solves.
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

impl StatisticalMeasure for StandardDeviation {
    fn name(&self) -> &'static str {
        "standard deviation"
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

        let value = match finished.len() {
            0 => RealTime::Dnf,
            1 => RealTime::Finite(0),
            _ => RealTime::Finite(finished.iter().std_dev().round() as i64),
        };

        Measurement::aggregate(value)
    }
}
