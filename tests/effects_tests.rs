// Host-side tests for effect dispatch and transient visual clearing.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod lane {
        include!("../src/core/lane.rs");
    }
    pub mod countdown {
        include!("../src/core/countdown.rs");
    }
    pub mod effects {
        include!("../src/core/effects.rs");
    }
}

use crate::core::effects::*;
use crate::core::lane::{lane_spec, LaneId, MuteState, Voice};
use instant::Instant;
use std::time::Duration;

const HOLD: Duration = Duration::from_millis(500);

#[test]
fn cue_values_pulse_and_speak_on_voiced_lanes() {
    let mute = MuteState::default();
    for n in 1..=3 {
        let left = dispatch(lane_spec(LaneId::Left), n, &mute);
        assert_eq!(left.state, Some(VisualState::Pulse(n)));
        assert_eq!(left.sound, Some(Sound::Voice(Voice::Male, n)));

        let right = dispatch(lane_spec(LaneId::Right), n, &mute);
        assert_eq!(right.state, Some(VisualState::Pulse(n)));
        assert_eq!(right.sound, Some(Sound::Voice(Voice::Female, n)));
    }
}

#[test]
fn bottom_lane_pulses_silently() {
    let mute = MuteState::default();
    for n in 1..=3 {
        let d = dispatch(lane_spec(LaneId::Bottom), n, &mute);
        assert_eq!(d.state, Some(VisualState::Pulse(n)));
        assert_eq!(d.sound, None);
    }
}

#[test]
fn reset_moment_flashes_and_pops_without_voice() {
    let mute = MuteState::default();
    let left = dispatch(lane_spec(LaneId::Left), 15, &mute);
    assert_eq!(left.state, Some(VisualState::Flash));
    assert_eq!(left.sound, Some(Sound::Pop));

    let right = dispatch(lane_spec(LaneId::Right), 20, &mute);
    assert_eq!(right.state, Some(VisualState::Flash));
    assert_eq!(right.sound, Some(Sound::Pop));

    let bottom = dispatch(lane_spec(LaneId::Bottom), 12, &mute);
    assert_eq!(bottom.state, Some(VisualState::Flash));
    assert_eq!(bottom.sound, None);
}

#[test]
fn mid_cycle_values_do_nothing() {
    let mute = MuteState::default();
    for v in 4..15 {
        assert_eq!(
            dispatch(lane_spec(LaneId::Left), v, &mute),
            Dispatch::default()
        );
    }
    // 15 is mid-cycle for the 20s lane
    assert_eq!(
        dispatch(lane_spec(LaneId::Right), 15, &mute),
        Dispatch::default()
    );
}

#[test]
fn muted_lane_keeps_visuals_but_drops_audio() {
    let mute = MuteState {
        left: true,
        right: false,
    };
    let cue = dispatch(lane_spec(LaneId::Left), 2, &mute);
    assert_eq!(cue.state, Some(VisualState::Pulse(2)));
    assert_eq!(cue.sound, None);

    let reset = dispatch(lane_spec(LaneId::Left), 15, &mute);
    assert_eq!(reset.state, Some(VisualState::Flash));
    assert_eq!(reset.sound, None);

    // right lane is gated by its own flag only
    let right = dispatch(lane_spec(LaneId::Right), 20, &mute);
    assert_eq!(right.sound, Some(Sound::Pop));
}

#[test]
fn mute_state_toggle_and_bottom_lane() {
    let mut mute = MuteState::default();
    assert_eq!(mute.toggle(LaneId::Left), Some(true));
    assert_eq!(mute.toggle(LaneId::Left), Some(false));
    assert_eq!(mute.toggle(LaneId::Right), Some(true));
    assert_eq!(mute.toggle(LaneId::Bottom), None);
    mute.toggle(LaneId::Bottom);
    assert!(!mute.is_muted(LaneId::Bottom));
    assert!(mute.is_muted(LaneId::Right));
}

#[test]
fn class_names_are_scoped_per_value() {
    assert_eq!(VisualState::Pulse(1).class_name(), "pulse-1");
    assert_eq!(VisualState::Pulse(2).class_name(), "pulse-2");
    assert_eq!(VisualState::Pulse(3).class_name(), "pulse-3");
    assert_eq!(VisualState::Flash.class_name(), "flash");
}

#[test]
fn transient_state_clears_after_hold() {
    let t0 = Instant::now();
    let mut states = TransientStates::default();
    states.arm(LaneId::Left, VisualState::Pulse(3), t0, HOLD);

    let mut out = Effects::new();
    states.expire(t0 + Duration::from_millis(400), &mut out);
    assert!(out.is_empty());

    states.expire(t0 + Duration::from_millis(500), &mut out);
    assert_eq!(
        out.as_slice(),
        &[Effect::RemoveState {
            lane: LaneId::Left,
            state: VisualState::Pulse(3)
        }]
    );
    out.clear();
    states.expire(t0 + Duration::from_secs(5), &mut out);
    assert!(out.is_empty());
}

#[test]
fn transient_removal_happens_once() {
    let t0 = Instant::now();
    let mut states = TransientStates::default();
    states.arm(LaneId::Bottom, VisualState::Flash, t0, HOLD);

    let mut out = Effects::new();
    states.expire(t0 + Duration::from_secs(1), &mut out);
    states.expire(t0 + Duration::from_secs(2), &mut out);
    assert_eq!(out.len(), 1);
}

#[test]
fn rearming_pushes_deadline_out() {
    let t0 = Instant::now();
    let mut states = TransientStates::default();
    states.arm(LaneId::Right, VisualState::Flash, t0, HOLD);
    states.arm(
        LaneId::Right,
        VisualState::Flash,
        t0 + Duration::from_millis(300),
        HOLD,
    );

    let mut out = Effects::new();
    states.expire(t0 + Duration::from_millis(600), &mut out);
    assert!(out.is_empty());
    states.expire(t0 + Duration::from_millis(800), &mut out);
    assert_eq!(out.len(), 1);
}

#[test]
fn expired_states_are_reported_in_lane_order() {
    let t0 = Instant::now();
    let mut states = TransientStates::default();
    states.arm(LaneId::Bottom, VisualState::Flash, t0, HOLD);
    states.arm(LaneId::Right, VisualState::Flash, t0, HOLD);
    states.arm(LaneId::Left, VisualState::Flash, t0, HOLD);

    let mut out = Effects::new();
    states.expire(t0 + HOLD, &mut out);
    let lanes: Vec<LaneId> = out
        .iter()
        .map(|e| match e {
            Effect::RemoveState { lane, .. } => *lane,
            other => panic!("unexpected {other:?}"),
        })
        .collect();
    assert_eq!(lanes, vec![LaneId::Left, LaneId::Right, LaneId::Bottom]);
}
