//! Countdown engine, duration draft editing, and the one-second tick resource.

mod countdown;
mod draft;
mod ticker;

pub use countdown::{Countdown, TickOutcome};
pub use draft::{ConfigDraft, Segment, MAX_MINUTES, MAX_SECONDS};
pub use ticker::Ticker;

/// Duration used when nothing else is configured (5 minutes)
pub const DEFAULT_DURATION_SECS: u32 = 5 * 60;

/// Largest duration the draft editor can express (99:59)
pub const MAX_DURATION_SECS: u32 = MAX_MINUTES * 60 + MAX_SECONDS;

/// Format a number of seconds as `MM:SS`, both parts zero-padded to width 2.
///
/// Minutes are not folded into hours, so `5999` renders as `99:59`.
pub fn format_mm_ss(total_seconds: u32) -> String {
    format!("{:02}:{:02}", total_seconds / 60, total_seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_pads_both_segments() {
        assert_eq!(format_mm_ss(0), "00:00");
        assert_eq!(format_mm_ss(65), "01:05");
        assert_eq!(format_mm_ss(DEFAULT_DURATION_SECS), "05:00");
    }

    #[test]
    fn format_keeps_large_minute_counts() {
        assert_eq!(format_mm_ss(MAX_DURATION_SECS), "99:59");
        assert_eq!(format_mm_ss(3600), "60:00");
    }
}
