use statrs::statistics::Statistics;

use super::{eligible, finite_millis, Measurement, StatisticalMeasure};
use crate::solve::RealTime;

/// Mean of a window after discarding its single fastest and single slowest time.
///
/// A DNF counts as the slowest time, so one DNF is discarded; two or more make
/// the whole window a DNF.
///
/// # Panics
/// Panics if the window has fewer than three times.
pub fn trimmed_mean(window: &[RealTime]) -> RealTime {
    assert!(
        window.len() >= 3,
        "a trimmed mean needs at least 3 times, got {}",
        window.len()
    );

    let dnf_count = window.iter().filter(|time| time.is_dnf()).count();
    if dnf_count > 1 {
        return RealTime::Dnf;
    }

    let mut sorted = window.to_vec();
    sorted.sort_unstable();
    let middle = finite_millis(&sorted[1..sorted.len() - 1]);

    RealTime::Finite(middle.iter().mean().round() as i64)
}

/// Best trimmed average of `window_size` consecutive solves.
///
/// Every contiguous window within the most recent `max_history_depth` solves
/// is considered. The reported position is the winning window's offset from
/// the most recent solve; among equal averages the most recent window wins.
#[derive(Debug, Clone)]
pub struct BestAverage {
    window_size: usize,
    max_history_depth: usize,
}

impl BestAverage {
    /// Create a best average over windows of `window_size` solves.
    ///
    /// # Panics
    /// Panics if `window_size` is below 3.
    pub fn new(window_size: usize, max_history_depth: usize) -> Self {
        assert!(
            window_size >= 3,
            "window_size must be at least 3 to discard the best and worst times"
        );
        Self {
            window_size,
            max_history_depth,
        }
    }

    /// Best average over the whole history.
    pub fn unbounded(window_size: usize) -> Self {
        Self::new(window_size, usize::MAX)
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }
}

impl StatisticalMeasure for BestAverage {
    fn name(&self) -> &'static str {
        "best average"
    }

    fn minimum_window_size(&self) -> usize {
        self.window_size
    }

    fn measure(&self, times: &[RealTime]) -> Measurement {
        let times = eligible(
            self.name(),
            times,
            self.window_size,
            self.max_history_depth,
        );
        assert!(
            times.len() >= self.window_size,
            "history depth {} leaves no window of {} solves",
            self.max_history_depth,
            self.window_size
        );

        let mut best = Measurement::windowed(RealTime::Dnf, 0);
        for (position, window) in times.windows(self.window_size).enumerate() {
            let average = trimmed_mean(window);
            if average < best.value {
                best = Measurement::windowed(average, position);
            }
        }

        best
    }
}
