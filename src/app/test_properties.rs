//! Property-based tests for reducer invariants.
//!
//! Arbitrary key and tick sequences must keep the draft inside its segment
//! ceilings, never drive the countdown below zero or past its configured
//! duration, and never leave it running with nothing left.

use proptest::prelude::*;

use super::reducer::reduce;
use super::state::{Msg, TimerState};
use crate::input::{Key, Mode};
use crate::timer::{Segment, MAX_MINUTES, MAX_SECONDS};

// ──────────────────── strategies ────────────────────

fn arb_key() -> impl Strategy<Value = Key> {
    prop_oneof![
        Just(Key::Up),
        Just(Key::Down),
        Just(Key::Left),
        Just(Key::Right),
        Just(Key::Enter),
        Just(Key::Escape),
        Just(Key::Other),
        (0u32..10).prop_map(|d| Key::Char(char::from_digit(d, 10).unwrap_or('0'))),
        prop::sample::select(vec!['i', 'r', 'f', 'm', 'x', 'q', '?']).prop_map(Key::Char),
    ]
}

fn arb_msg() -> impl Strategy<Value = Msg> {
    prop_oneof![
        4 => arb_key().prop_map(Msg::Key),
        2 => Just(Msg::Tick),
        1 => prop_oneof![Just(Segment::Minutes), Just(Segment::Seconds)]
            .prop_map(Msg::FocusSegment),
    ]
}

fn arb_state() -> impl Strategy<Value = TimerState> {
    (0u32..=120).prop_map(TimerState::with_duration)
}

// ──────────────────── properties ────────────────────

proptest! {
    #[test]
    fn invariants_hold_for_any_sequence(
        start in arb_state(),
        msgs in prop::collection::vec(arb_msg(), 0..200),
    ) {
        let mut state = start;
        for msg in msgs {
            state = reduce(state, msg).state;

            let countdown = state.countdown;
            prop_assert!(countdown.remaining() <= countdown.initial());
            prop_assert!(!(countdown.is_running() && countdown.remaining() == 0));
            if let Mode::Configuring(draft) = state.mode {
                prop_assert!(draft.minutes() <= MAX_MINUTES);
                prop_assert!(draft.seconds() <= MAX_SECONDS);
                prop_assert!(!countdown.is_running());
            }
        }
    }

    #[test]
    fn hide_toggle_never_touches_the_countdown(
        start in arb_state(),
        msgs in prop::collection::vec(arb_msg(), 0..50),
    ) {
        let mut state = start;
        for msg in msgs {
            state = reduce(state, msg).state;
        }
        let toggled = reduce(state, Msg::Key(Key::Char('m'))).state;
        prop_assert_eq!(toggled.countdown, state.countdown);
        prop_assert_eq!(toggled.mode, state.mode);
    }

    #[test]
    fn commit_sets_draft_total(
        digits in prop::collection::vec(0u32..10, 0..6),
        arrows in prop::collection::vec(prop_oneof![Just(Key::Up), Just(Key::Down), Just(Key::Right)], 0..30),
    ) {
        let mut state = reduce(TimerState::default(), Msg::Key(Key::Char('f'))).state;
        for key in arrows {
            state = reduce(state, Msg::Key(key)).state;
        }
        for d in digits {
            let c = char::from_digit(d, 10).unwrap_or('0');
            state = reduce(state, Msg::Key(Key::Char(c))).state;
        }
        let expected = state.mode.draft().map(|d| d.total_seconds());
        let committed = reduce(state, Msg::Key(Key::Enter)).state;

        prop_assert_eq!(committed.mode, Mode::Normal);
        prop_assert_eq!(Some(committed.countdown.initial()), expected);
        prop_assert_eq!(committed.countdown.remaining(), committed.countdown.initial());
    }
}
