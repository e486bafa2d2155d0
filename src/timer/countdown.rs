use tracing::{debug, info};

/// Result of advancing the countdown by one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not running or already at zero; nothing changed
    Idle,
    /// One second was taken off the remaining time
    Decremented,
    /// The decrement reached zero
    Expired,
}

/// The timer engine: configured duration, remaining duration and run flag.
///
/// All values are whole seconds. `remaining` never goes below zero and the
/// engine never reports `running` against an exhausted duration once
/// [`Countdown::reconcile`] has been applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    initial: u32,
    remaining: u32,
    running: bool,
}

impl Countdown {
    /// Create a stopped countdown with `initial` seconds configured
    pub fn new(initial: u32) -> Self {
        Self {
            initial,
            remaining: initial,
            running: false,
        }
    }

    pub fn initial(&self) -> u32 {
        self.initial
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// True when the one-second tick should be scheduled
    pub fn is_ticking(&self) -> bool {
        self.running && self.remaining > 0
    }

    /// Stopped at zero after a non-zero duration was configured
    pub fn is_expired(&self) -> bool {
        !self.running && self.remaining == 0 && self.initial > 0
    }

    /// Take one second off the remaining time while running.
    ///
    /// Reaching zero is reported as [`TickOutcome::Expired`]; stopping the run
    /// flag is left to [`Countdown::reconcile`].
    pub fn tick(&mut self) -> TickOutcome {
        if !self.is_ticking() {
            return TickOutcome::Idle;
        }
        self.remaining -= 1;
        if self.remaining == 0 {
            TickOutcome::Expired
        } else {
            TickOutcome::Decremented
        }
    }

    /// Restore the configured duration and stop
    pub fn reset(&mut self) {
        debug!(initial = self.initial, "countdown reset");
        self.remaining = self.initial;
        self.running = false;
    }

    /// Replace the configured duration, restore it and stop
    pub fn commit(&mut self, initial: u32) {
        info!(initial, "duration committed");
        self.initial = initial;
        self.remaining = initial;
        self.running = false;
    }

    /// Flip between running and paused.
    ///
    /// Starting from an expired countdown restores the configured duration
    /// first, so start doubles as restart.
    pub fn toggle(&mut self) {
        if !self.running && self.remaining == 0 && self.initial > 0 {
            self.remaining = self.initial;
        }
        self.running = !self.running;
        debug!(running = self.running, remaining = self.remaining, "run state toggled");
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Clear the run flag when there is nothing left to count down
    pub fn reconcile(&mut self) {
        if self.running && self.remaining == 0 {
            self.running = false;
        }
    }
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new(super::DEFAULT_DURATION_SECS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_countdown_is_stopped_at_initial() {
        let countdown = Countdown::new(90);
        assert_eq!(countdown.initial(), 90);
        assert_eq!(countdown.remaining(), 90);
        assert!(!countdown.is_running());
    }

    #[test]
    fn tick_is_idle_while_paused() {
        let mut countdown = Countdown::new(10);
        assert_eq!(countdown.tick(), TickOutcome::Idle);
        assert_eq!(countdown.remaining(), 10);
    }

    #[test]
    fn tick_decrements_then_expires() {
        let mut countdown = Countdown::new(2);
        countdown.toggle();
        assert_eq!(countdown.tick(), TickOutcome::Decremented);
        assert_eq!(countdown.tick(), TickOutcome::Expired);
        assert_eq!(countdown.remaining(), 0);
        // Expiry is signalled, stopping is reconcile's job
        assert!(countdown.is_running());
        assert_eq!(countdown.tick(), TickOutcome::Idle);

        countdown.reconcile();
        assert!(!countdown.is_running());
        assert!(countdown.is_expired());
    }

    #[test]
    fn toggle_after_expiry_restarts_from_initial() {
        let mut countdown = Countdown::new(5);
        countdown.toggle();
        for _ in 0..5 {
            countdown.tick();
        }
        countdown.reconcile();

        countdown.toggle();
        assert_eq!(countdown.remaining(), 5);
        assert!(countdown.is_running());
    }

    #[test]
    fn toggle_with_zero_duration_runs_against_nothing_until_reconciled() {
        let mut countdown = Countdown::new(0);
        countdown.toggle();
        assert!(countdown.is_running());
        assert!(!countdown.is_ticking());
        countdown.reconcile();
        assert!(!countdown.is_running());
    }

    #[test]
    fn reset_restores_initial_and_stops() {
        let mut countdown = Countdown::new(30);
        countdown.toggle();
        countdown.tick();
        countdown.reset();
        assert_eq!(countdown.remaining(), 30);
        assert!(!countdown.is_running());
    }

    #[test]
    fn commit_replaces_both_durations() {
        let mut countdown = Countdown::new(30);
        countdown.toggle();
        countdown.commit(150);
        assert_eq!(countdown.initial(), 150);
        assert_eq!(countdown.remaining(), 150);
        assert!(!countdown.is_running());
    }

    #[test]
    fn default_is_five_minutes() {
        assert_eq!(Countdown::default().initial(), 300);
    }
}
