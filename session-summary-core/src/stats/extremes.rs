use crate::solve::RealTime;

/// Positions of the fastest and slowest times within a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowExtremes {
    pub best: usize,
    pub worst: usize,
}

impl WindowExtremes {
    /// Whether `index` is one of the two extremes.
    pub fn contains(&self, index: usize) -> bool {
        index == self.best || index == self.worst
    }
}

/// Find the index of the minimum and of the maximum of `window`.
///
/// Both searches keep the first occurrence on ties, so a window of equal
/// values resolves to `(0, 0)`. A DNF is never the best unless every time is
/// a DNF.
///
/// # Panics
/// Panics if `window` is empty.
pub fn find_extremes(window: &[RealTime]) -> WindowExtremes {
    assert!(!window.is_empty(), "cannot find extremes of an empty window");

    let mut best = 0;
    let mut worst = 0;
    for (index, time) in window.iter().enumerate() {
        if *time < window[best] {
            best = index;
        }
        if *time > window[worst] {
            worst = index;
        }
    }

    WindowExtremes { best, worst }
}
