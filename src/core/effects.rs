use super::constants::{CUE_FIRST, CUE_LAST};
use super::countdown::is_reset_moment;
use super::lane::{LaneId, LaneSpec, MuteState, Voice};
use fnv::FnvHashMap;
use instant::Instant;
use smallvec::SmallVec;
use std::time::Duration;

/// Transient visual state applied to a lane element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VisualState {
    Pulse(u32),
    Flash,
}

impl VisualState {
    pub fn class_name(self) -> &'static str {
        match self {
            VisualState::Pulse(1) => "pulse-1",
            VisualState::Pulse(2) => "pulse-2",
            VisualState::Pulse(3) => "pulse-3",
            VisualState::Pulse(_) => "pulse",
            VisualState::Flash => "flash",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sound {
    Voice(Voice, u32),
    Pop,
}

/// Side effect the front-end must carry out after a poll.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    AddState { lane: LaneId, state: VisualState },
    RemoveState { lane: LaneId, state: VisualState },
    Play(Sound),
    SetPrompt(String),
    HideOverlay,
}

pub type Effects = SmallVec<[Effect; 8]>;

/// Outcome of a single lane transition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Dispatch {
    pub state: Option<VisualState>,
    pub sound: Option<Sound>,
}

#[inline]
pub fn is_cue_value(value: u32) -> bool {
    (CUE_FIRST..=CUE_LAST).contains(&value)
}

/// Decide the visual and audio response to a lane showing `value`.
///
/// Only called for values the transition detector reported as new.
pub fn dispatch(lane: &LaneSpec, value: u32, mute: &MuteState) -> Dispatch {
    let muted = mute.is_muted(lane.id);
    if is_cue_value(value) {
        Dispatch {
            state: Some(VisualState::Pulse(value)),
            sound: lane
                .voice
                .filter(|_| !muted)
                .map(|voice| Sound::Voice(voice, value)),
        }
    } else if is_reset_moment(value, lane.cycle_secs) {
        Dispatch {
            state: Some(VisualState::Flash),
            sound: lane.voice.filter(|_| !muted).map(|_| Sound::Pop),
        }
    } else {
        Dispatch::default()
    }
}

/// Visual states that are on screen, keyed to the instant they must come off.
#[derive(Clone, Debug, Default)]
pub struct TransientStates {
    active: FnvHashMap<(LaneId, VisualState), Instant>,
}

impl TransientStates {
    /// Record `state` as applied at `now`. Re-arming an active state pushes its
    /// deadline out.
    pub fn arm(&mut self, lane: LaneId, state: VisualState, now: Instant, hold: Duration) {
        self.active.insert((lane, state), now + hold);
    }

    /// Remove every state whose deadline has passed and report it.
    pub fn expire(&mut self, now: Instant, out: &mut Effects) {
        let mut due: SmallVec<[(LaneId, VisualState); 4]> = self
            .active
            .iter()
            .filter(|(_, deadline)| **deadline <= now)
            .map(|(key, _)| *key)
            .collect();
        due.sort_by_key(|(lane, state)| (lane.index(), state.class_name()));
        for (lane, state) in due {
            self.active.remove(&(lane, state));
            out.push(Effect::RemoveState { lane, state });
        }
    }
}
