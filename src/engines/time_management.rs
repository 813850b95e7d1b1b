//! Wall-clock budgeting for move selection.
//!
//! The budget is soft: callers poll `expired` between units of work and
//! finish whatever unit is in flight.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy)]
pub struct TimeBudget {
    started: Instant,
    limit: Duration,
}

impl TimeBudget {
    pub fn start(limit: Duration) -> Self {
        Self {
            started: Instant::now(),
            limit,
        }
    }

    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    #[inline]
    pub fn elapsed_ms(&self) -> u128 {
        self.elapsed().as_millis()
    }

    #[inline]
    pub fn expired(&self) -> bool {
        self.elapsed() >= self.limit
    }

    pub fn remaining(&self) -> Duration {
        self.limit.saturating_sub(self.elapsed())
    }
}

#[cfg(test)]
mod tests {
    use super::TimeBudget;
    use std::time::Duration;

    #[test]
    fn zero_budget_is_expired_immediately() {
        let budget = TimeBudget::start(Duration::ZERO);
        assert!(budget.expired());
        assert_eq!(budget.remaining(), Duration::ZERO);
    }

    #[test]
    fn generous_budget_is_not_expired() {
        let budget = TimeBudget::start(Duration::from_secs(3600));
        assert!(!budget.expired());
        assert!(budget.remaining() > Duration::from_secs(3500));
    }
}
