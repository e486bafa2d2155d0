/// Largest value the minutes segment accepts
pub const MAX_MINUTES: u32 = 99;
/// Largest value the seconds segment accepts
pub const MAX_SECONDS: u32 = 59;

/// Which half of the `MM:SS` draft receives arrow and digit input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Segment {
    #[default]
    Minutes,
    Seconds,
}

impl Segment {
    /// Switch to the other segment
    pub fn toggle(self) -> Self {
        match self {
            Segment::Minutes => Segment::Seconds,
            Segment::Seconds => Segment::Minutes,
        }
    }

    /// Upper bound for values in this segment
    pub fn ceiling(self) -> u32 {
        match self {
            Segment::Minutes => MAX_MINUTES,
            Segment::Seconds => MAX_SECONDS,
        }
    }
}

/// In-progress, uncommitted duration being edited in configuring mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigDraft {
    minutes: u32,
    seconds: u32,
    focused: Segment,
}

impl ConfigDraft {
    /// Seed a draft from a duration in seconds, focused on minutes.
    ///
    /// Durations beyond 99 minutes seed the minutes segment at its ceiling.
    pub fn from_seconds(total: u32) -> Self {
        Self {
            minutes: (total / 60).min(MAX_MINUTES),
            seconds: total % 60,
            focused: Segment::Minutes,
        }
    }

    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    pub fn seconds(&self) -> u32 {
        self.seconds
    }

    pub fn focused(&self) -> Segment {
        self.focused
    }

    pub fn focus(&mut self, segment: Segment) {
        self.focused = segment;
    }

    pub fn toggle_focus(&mut self) {
        self.focused = self.focused.toggle();
    }

    /// Increase the focused segment by one, stopping at its ceiling
    pub fn increment(&mut self) {
        let ceiling = self.focused.ceiling();
        let value = self.focused_value_mut();
        *value = (*value + 1).min(ceiling);
    }

    /// Decrease the focused segment by one, stopping at zero
    pub fn decrement(&mut self) {
        let value = self.focused_value_mut();
        *value = value.saturating_sub(1);
    }

    /// Type a digit into the focused segment as a two-digit rolling entry.
    ///
    /// The previous ones digit shifts into the tens place. A result above the
    /// segment ceiling starts a fresh one-digit entry instead of clamping.
    /// Values above 9 are ignored.
    pub fn push_digit(&mut self, digit: u32) {
        if digit > 9 {
            return;
        }
        let ceiling = self.focused.ceiling();
        let value = self.focused_value_mut();
        let shifted = (*value % 10) * 10 + digit;
        let next = if shifted > ceiling { digit } else { shifted };
        *value = next.min(ceiling);
    }

    /// Duration represented by the draft, in seconds
    pub fn total_seconds(&self) -> u32 {
        self.minutes * 60 + self.seconds
    }

    fn focused_value_mut(&mut self) -> &mut u32 {
        match self.focused {
            Segment::Minutes => &mut self.minutes,
            Segment::Seconds => &mut self.seconds,
        }
    }
}
