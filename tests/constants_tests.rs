// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn cycles_leave_room_for_cues() {
    for cycle in [LEFT_CYCLE_SECS, RIGHT_CYCLE_SECS, BOTTOM_CYCLE_SECS] {
        // a cue value must never coincide with the reset moment
        assert!(cycle > CUE_LAST);
    }
    assert!(CUE_FIRST >= 1 && CUE_FIRST <= CUE_LAST);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn poll_is_fine_enough_for_one_second_steps() {
    assert!(POLL_INTERVAL_MS > 0);
    assert!(POLL_INTERVAL_MS < 1000);
    assert_eq!(1000 % POLL_INTERVAL_MS, 0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn effect_hold_ends_before_next_second() {
    assert!(EFFECT_HOLD_MS >= POLL_INTERVAL_MS);
    assert!(EFFECT_HOLD_MS < 1000);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn preroll_covers_spoken_countdown() {
    assert!(PREROLL_SECS > u64::from(CUE_LAST));
    assert!(!PREROLL_PROMPT_PREFIX.is_empty());
}

#[test]
fn dom_ids_are_distinct() {
    let ids = [
        LEFT_LANE_ID,
        RIGHT_LANE_ID,
        BOTTOM_LANE_ID,
        START_OVERLAY_ID,
        START_BUTTON_ID,
        LEFT_MUTE_BUTTON_ID,
        RIGHT_MUTE_BUTTON_ID,
        RESET_LINK_ID,
    ];
    for (i, a) in ids.iter().enumerate() {
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn mobile_markers_are_lowercase() {
    for m in MOBILE_UA_MARKERS {
        assert_eq!(m, m.to_ascii_lowercase());
    }
}

#[test]
fn fullscreen_prefers_standard_name_then_vendor_fallbacks() {
    assert_eq!(FULLSCREEN_METHODS[0], "requestFullscreen");
    assert!(FULLSCREEN_METHODS.contains(&"webkitRequestFullscreen"));
    for (i, a) in FULLSCREEN_METHODS.iter().enumerate() {
        assert!(!FULLSCREEN_METHODS[i + 1..].contains(a));
    }
}

#[test]
fn timing_constants_are_whole_units() {
    assert_eq!(PREROLL_SECS * 1000 % POLL_INTERVAL_MS, 0);
    assert_eq!(EFFECT_HOLD_MS % POLL_INTERVAL_MS, 0);
}
