//! Wall-clock budget for the iterative-deepening search.

use std::time::{Duration, Instant};

/// Cooperative search deadline.
///
/// The search polls `expired` only between root moves and between depth
/// iterations; a recursive descent already underway always runs to
/// completion, so actual latency can overshoot the budget by one descent.
#[derive(Clone, Copy, Debug)]
pub struct SearchClock {
    start: Instant,
    budget: Duration,
}

impl SearchClock {
    /// Start the clock now.
    pub fn start(budget: Duration) -> Self {
        SearchClock {
            start: Instant::now(),
            budget,
        }
    }

    pub fn expired(&self) -> bool {
        self.start.elapsed() >= self.budget
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

#[cfg(test)]
#[path = "clock_tests.rs"]
mod clock_tests;
