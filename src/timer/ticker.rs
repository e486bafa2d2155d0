use std::time::{Duration, Instant};

use tracing::debug;

/// Scoped one-second tick resource.
///
/// The ticker is armed only while the countdown is running with time left and
/// is disarmed as soon as that stops being true, so repeated start/stop
/// cycles never leave a stale deadline behind. The event loop calls
/// [`Ticker::sync`] after every state change and [`Ticker::take_due`] each
/// turn.
#[derive(Debug, Clone)]
pub struct Ticker {
    period: Duration,
    deadline: Option<Instant>,
}

impl Ticker {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            deadline: None,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Acquire or release the tick according to `active`.
    ///
    /// Syncing with an unchanged activity keeps the current deadline.
    pub fn sync(&mut self, active: bool, now: Instant) {
        match (active, self.deadline) {
            (true, None) => {
                self.deadline = Some(now + self.period);
                debug!(period_ms = self.period.as_millis() as u64, "tick acquired");
            }
            (false, Some(_)) => {
                self.deadline = None;
                debug!("tick released");
            }
            _ => {}
        }
    }

    /// Report whether a tick is due, advancing the deadline by one period.
    ///
    /// Never reports more than one tick per call. When the loop has fallen
    /// more than a whole period behind, the next deadline is re-anchored to
    /// `now` instead of bursting.
    pub fn take_due(&mut self, now: Instant) -> bool {
        let Some(deadline) = self.deadline else {
            return false;
        };
        if now < deadline {
            return false;
        }
        let next = deadline + self.period;
        self.deadline = Some(if next <= now { now + self.period } else { next });
        true
    }

    /// Time left until the next tick, if armed
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}
