//! Pure keyboard state machine.
//!
//! [`reduce`] takes the current snapshot and one message and returns the next
//! snapshot plus any host effect. It performs no I/O, so every transition can
//! be driven directly from tests.

use tracing::{debug, info};

use super::state::{Effect, Msg, TimerState, Transition};
use crate::input::{Key, Mode};
use crate::timer::{ConfigDraft, TickOutcome};

/// Apply one message to the state.
///
/// Configuring-mode bindings take priority over normal-mode bindings, and the
/// countdown is reconciled after every message so it never runs against an
/// exhausted duration.
pub fn reduce(state: TimerState, msg: Msg) -> Transition {
    let mut transition = match msg {
        Msg::Key(key) => match state.mode {
            Mode::Configuring(draft) => configuring_key(state, draft, key),
            Mode::Normal => normal_key(state, key),
        },
        Msg::Tick => {
            let mut next = state;
            if next.countdown.tick() == TickOutcome::Expired {
                info!(initial = next.countdown.initial(), "countdown expired");
            }
            Transition::to(next)
        }
        Msg::FocusSegment(segment) => {
            let mut next = state;
            if let Mode::Configuring(ref mut draft) = next.mode {
                draft.focus(segment);
            }
            Transition::to(next)
        }
    };
    transition.state.countdown.reconcile();
    transition
}

/// Keys while editing the draft. Every key suppresses the host default.
fn configuring_key(state: TimerState, mut draft: ConfigDraft, key: Key) -> Transition {
    let mut next = state;
    match key {
        Key::Up => draft.increment(),
        Key::Down => draft.decrement(),
        Key::Left | Key::Right => draft.toggle_focus(),
        Key::Char('f') | Key::Enter => {
            next.countdown.commit(draft.total_seconds());
            next.mode = Mode::Normal;
            info!(seconds = draft.total_seconds(), "left configuring mode (saved)");
        }
        Key::Escape => {
            next.mode = Mode::Normal;
            info!("left configuring mode (cancelled)");
        }
        _ => {
            if let Some(digit) = key.digit() {
                draft.push_digit(digit);
            }
        }
    }
    if next.mode.is_configuring() {
        next.mode = Mode::Configuring(draft);
    }
    Transition {
        state: next,
        effect: None,
        default_prevented: true,
    }
}

/// Keys while the countdown is shown
fn normal_key(state: TimerState, key: Key) -> Transition {
    let mut next = state;
    let mut effect = None;
    match key {
        Key::Char('i') => next.countdown.toggle(),
        Key::Char('r') => {
            if next.countdown.initial() > 0 || next.countdown.remaining() > 0 {
                next.countdown.reset();
            }
        }
        Key::Char('f') => {
            next.countdown.stop();
            next.mode = Mode::Configuring(ConfigDraft::from_seconds(next.countdown.initial()));
            info!(initial = next.countdown.initial(), "entered configuring mode");
        }
        Key::Char('m') => {
            next.is_hidden = !next.is_hidden;
            debug!(hidden = next.is_hidden, "text visibility toggled");
        }
        Key::Char('x') => effect = Some(Effect::CloseWindow),
        _ => {}
    }
    Transition {
        state: next,
        effect,
        default_prevented: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::Segment;

    fn press(state: TimerState, c: char) -> TimerState {
        reduce(state, Msg::Key(Key::char(c))).state
    }

    fn key(state: TimerState, key: Key) -> TimerState {
        reduce(state, Msg::Key(key)).state
    }

    fn tick(state: TimerState, times: usize) -> TimerState {
        (0..times).fold(state, |s, _| reduce(s, Msg::Tick).state)
    }

    fn draft(state: &TimerState) -> ConfigDraft {
        *state.mode.draft().expect("configuring mode")
    }

    #[test]
    fn start_tick_pause_reset_scenario() {
        let state = TimerState::default();
        let state = press(state, 'i');
        assert!(state.is_running());

        let state = tick(state, 3);
        assert_eq!(state.countdown.remaining(), 297);

        let state = press(state, 'i');
        assert!(!state.is_running());
        assert_eq!(state.countdown.remaining(), 297);

        let state = press(state, 'r');
        assert_eq!(state.countdown.remaining(), 300);
        assert!(!state.is_running());
    }

    #[test]
    fn upper_case_letters_behave_like_lower_case() {
        let state = press(TimerState::default(), 'I');
        assert!(state.is_running());
    }

    #[test]
    fn ticks_while_paused_change_nothing() {
        let state = tick(TimerState::default(), 10);
        assert_eq!(state.countdown.remaining(), 300);
    }

    #[test]
    fn expiry_stops_running_and_start_restarts() {
        let state = press(TimerState::with_duration(5), 'i');
        let state = tick(state, 5);
        assert_eq!(state.countdown.remaining(), 0);
        assert!(!state.is_running());

        // Extra ticks after expiry stay at zero
        let state = tick(state, 3);
        assert_eq!(state.countdown.remaining(), 0);

        let state = press(state, 'i');
        assert_eq!(state.countdown.remaining(), 5);
        assert!(state.is_running());
    }

    #[test]
    fn starting_a_zero_duration_is_reconciled_back_to_stopped() {
        let state = press(TimerState::with_duration(0), 'i');
        assert!(!state.is_running());
        assert_eq!(state.countdown.remaining(), 0);
    }

    #[test]
    fn reset_twice_matches_reset_once() {
        let running = tick(press(TimerState::default(), 'i'), 4);
        let once = press(running, 'r');
        let twice = press(once, 'r');
        assert_eq!(once, twice);
        assert_eq!(twice.countdown.remaining(), 300);
        assert!(!twice.is_running());
    }

    #[test]
    fn reset_with_nothing_configured_is_a_no_op() {
        let state = TimerState::with_duration(0);
        assert_eq!(press(state, 'r'), state);
    }

    #[test]
    fn entering_configuring_stops_and_seeds_draft() {
        let state = tick(press(TimerState::with_duration(150), 'i'), 2);
        let state = press(state, 'f');
        assert!(!state.is_running());
        assert_eq!(state.countdown.remaining(), 148);

        let draft = draft(&state);
        assert_eq!(draft.minutes(), 2);
        assert_eq!(draft.seconds(), 30);
        assert_eq!(draft.focused(), Segment::Minutes);
    }

    #[test]
    fn commit_round_trip_sets_both_durations() {
        let state = press(TimerState::default(), 'f');
        let state = press(press(state, '0'), '2');
        let state = key(state, Key::Right);
        let state = press(press(state, '3'), '0');
        let state = press(state, 'f');

        assert_eq!(state.mode, Mode::Normal);
        assert_eq!(state.countdown.initial(), 150);
        assert_eq!(state.countdown.remaining(), 150);
        assert!(!state.is_running());
    }

    #[test]
    fn enter_also_commits() {
        let state = press(TimerState::default(), 'f');
        let state = key(state, Key::Up);
        let state = key(state, Key::Enter);
        assert_eq!(state.countdown.initial(), 360);
    }

    #[test]
    fn escape_discards_the_draft() {
        let state = tick(press(TimerState::default(), 'i'), 1);
        let state = press(state, 'f');
        let state = press(press(state, '1'), '0');
        let state = key(state, Key::Escape);

        assert_eq!(state.mode, Mode::Normal);
        assert_eq!(state.countdown.initial(), 300);
        assert_eq!(state.countdown.remaining(), 299);
        assert!(!state.is_running());
    }

    #[test]
    fn reentering_configuring_reseeds_from_initial() {
        let state = press(TimerState::default(), 'f');
        let state = key(state, Key::Right);
        let state = key(state, Key::Up);
        let state = key(state, Key::Escape);
        let state = press(state, 'f');

        let draft = draft(&state);
        assert_eq!(draft.total_seconds(), 300);
        assert_eq!(draft.focused(), Segment::Minutes);
    }

    #[test]
    fn arrows_edit_focused_segment() {
        let state = press(TimerState::with_duration(0), 'f');
        let state = key(state, Key::Down);
        assert_eq!(draft(&state).minutes(), 0);
        let state = key(state, Key::Up);
        let state = key(state, Key::Left);
        let state = key(state, Key::Up);
        let state = key(state, Key::Up);
        assert_eq!(draft(&state).minutes(), 1);
        assert_eq!(draft(&state).seconds(), 2);
    }

    #[test]
    fn normal_bindings_are_inert_while_configuring() {
        let state = press(TimerState::default(), 'f');
        let before = state;
        for c in ['i', 'r', 'm', 'x', 'q'] {
            let transition = reduce(state, Msg::Key(Key::char(c)));
            assert_eq!(transition.state, before);
            assert_eq!(transition.effect, None);
            assert!(transition.default_prevented);
        }
    }

    #[test]
    fn every_key_prevents_default_only_while_configuring() {
        let normal = TimerState::default();
        assert!(!reduce(normal, Msg::Key(Key::char('?'))).default_prevented);
        assert!(!reduce(normal, Msg::Key(Key::char('i'))).default_prevented);

        let configuring = press(normal, 'f');
        assert!(reduce(configuring, Msg::Key(Key::char('?'))).default_prevented);
        assert!(reduce(configuring, Msg::Key(Key::Other)).default_prevented);
    }

    #[test]
    fn close_key_requests_window_close_without_state_change() {
        let state = TimerState::default();
        let transition = reduce(state, Msg::Key(Key::char('x')));
        assert_eq!(transition.effect, Some(Effect::CloseWindow));
        assert_eq!(transition.state, state);
    }

    #[test]
    fn hide_toggle_leaves_countdown_alone() {
        let state = tick(press(TimerState::default(), 'i'), 2);
        let hidden = press(state, 'm');
        assert!(hidden.is_hidden);
        assert_eq!(hidden.countdown, state.countdown);
        assert!(!press(hidden, 'm').is_hidden);
    }

    #[test]
    fn tick_while_configuring_does_nothing() {
        let state = press(press(TimerState::default(), 'i'), 'f');
        let after = tick(state, 3);
        assert_eq!(after.countdown.remaining(), 300);
    }

    #[test]
    fn focus_segment_only_applies_while_configuring() {
        let normal = TimerState::default();
        assert_eq!(reduce(normal, Msg::FocusSegment(Segment::Seconds)).state, normal);

        let state = press(normal, 'f');
        let state = reduce(state, Msg::FocusSegment(Segment::Seconds)).state;
        assert_eq!(state.focused_segment(), Some(Segment::Seconds));
    }
}
