use super::{eligible, Measurement, StatisticalMeasure};
use crate::solve::RealTime;

/// Fastest solve in the eligible history. DNF only when every solve is a DNF.
#[derive(Debug, Clone)]
pub struct Best {
    minimum_window_size: usize,
    max_history_depth: usize,
}

/// Slowest solve in the eligible history. Any DNF makes the worst time a DNF.
#[derive(Debug, Clone)]
pub struct Worst {
    minimum_window_size: usize,
    max_history_depth: usize,
}

impl Default for Best {
    fn default() -> Self {
        Self::new(1, usize::MAX)
    }
}

impl Default for Worst {
    fn default() -> Self {
        Self::new(1, usize::MAX)
    }
}

impl Best {
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

impl Worst {
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

impl StatisticalMeasure for Best {
    fn name(&self) -> &'static str {
        "best"
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
        let value = times.iter().copied().min().unwrap_or(RealTime::Dnf);
        Measurement::aggregate(value)
    }
}

impl StatisticalMeasure for Worst {
    fn name(&self) -> &'static str {
        "worst"
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
        let value = times.iter().copied().max().unwrap_or(RealTime::Dnf);
        Measurement::aggregate(value)
    }
}
