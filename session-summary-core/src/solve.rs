use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Time added to a solve carrying a `+2` penalty, in milliseconds.
pub const PLUS_TWO_PENALTY_MS: i64 = 2_000;

/// A solve duration after penalties are applied.
///
/// `Dnf` orders after every finite time, so `min`/`max` over a slice of real
/// times always treat a disqualified attempt as the worst one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RealTime {
    /// A finished solve, in milliseconds.
    Finite(i64),
    /// Did not finish.
    Dnf,
}

impl RealTime {
    /// Milliseconds of a finished solve, `None` for a DNF.
    pub fn millis(self) -> Option<i64> {
        match self {
            RealTime::Finite(ms) => Some(ms),
            RealTime::Dnf => None,
        }
    }

    pub fn is_dnf(self) -> bool {
        matches!(self, RealTime::Dnf)
    }
}

/// Penalty attached to a solve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Penalty {
    #[default]
    None,
    PlusTwo,
    Dnf,
}

/// Wall-clock interval a solve was timed over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timing {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl Timing {
    /// Create a new timing interval.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// Elapsed time between start and end in milliseconds.
    pub fn elapsed_ms(&self) -> i64 {
        (self.end - self.start).num_milliseconds()
    }
}

/// A single timed solve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solve {
    pub timing: Timing,
    #[serde(default)]
    pub penalty: Penalty,
}

impl Solve {
    /// Create a solve without a penalty.
    pub fn new(timing: Timing) -> Self {
        Self {
            timing,
            penalty: Penalty::None,
        }
    }

    /// Create a solve with the given penalty.
    pub fn with_penalty(timing: Timing, penalty: Penalty) -> Self {
        Self { timing, penalty }
    }

    /// Elapsed time adjusted by the penalty.
    pub fn real_time(&self) -> RealTime {
        match self.penalty {
            Penalty::None => RealTime::Finite(self.timing.elapsed_ms()),
            Penalty::PlusTwo => RealTime::Finite(self.timing.elapsed_ms() + PLUS_TWO_PENALTY_MS),
            Penalty::Dnf => RealTime::Dnf,
        }
    }
}

/// A solve together with the scramble it was performed on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attempt {
    pub solve: Solve,
    #[serde(default)]
    pub scramble: Vec<String>,
}

impl Attempt {
    /// Create a new attempt.
    pub fn new(solve: Solve, scramble: Vec<String>) -> Self {
        Self { solve, scramble }
    }

    pub fn real_time(&self) -> RealTime {
        self.solve.real_time()
    }

    /// Scramble moves joined by single spaces.
    pub fn scramble_text(&self) -> String {
        self.scramble.join(" ").trim().to_string()
    }
}

/// Label scoping a report, e.g. a puzzle type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub description: String,
}

impl Category {
    /// Create a new category.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// Real times of a most-recent-first attempt sequence, in the same order.
pub fn real_times(attempts: &[Attempt]) -> Vec<RealTime> {
    attempts.iter().map(Attempt::real_time).collect()
}
